use crate::{ElementKind, ErrorKind, Parser, Value};

const DOC: &[u8] = br#"{"a": "b", "c": [0, 1, 2], "x": {"f": "z"}}"#;

#[test]
fn mapping_basics() {
    let mut parser = Parser::new();
    let doc = parser.parse(DOC).unwrap();
    let obj = doc.as_object().unwrap();

    assert_eq!(obj.len(), 3);
    assert!(!obj.is_empty());

    // Individual key access returns lazy proxies.
    assert_eq!(obj.get("x").unwrap().kind(), ElementKind::Object);
    assert_eq!(obj.get("c").unwrap().kind(), ElementKind::Array);
    assert_eq!(obj.get("a").unwrap().as_str().unwrap(), "b");

    let err = obj.get("z").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingField);
}

#[test]
fn get_opt_suppresses_only_missing_field() {
    let mut parser = Parser::new();
    let doc = parser.parse(DOC).unwrap();
    let obj = doc.as_object().unwrap();

    assert!(obj.get_opt("z").unwrap().is_none());
    let found = obj.get_opt("a").unwrap().unwrap();
    assert_eq!(found.as_str().unwrap(), "b");
}

#[test]
fn contains_key_agrees_with_get() {
    let mut parser = Parser::new();
    let doc = parser.parse(DOC).unwrap();
    let obj = doc.as_object().unwrap();

    for key in ["a", "c", "x", "z", "", "f"] {
        let present = obj.contains_key(key).unwrap();
        let lookup = obj.get(key);
        match lookup {
            Ok(_) => assert!(present, "get succeeded but contains_key was false for {key:?}"),
            Err(err) => {
                assert_eq!(err.kind(), ErrorKind::MissingField);
                assert!(!present, "get missed but contains_key was true for {key:?}");
            }
        }
    }
}

#[test]
fn keys_preserve_insertion_order() {
    let mut parser = Parser::new();
    let doc = parser.parse(DOC).unwrap();
    let obj = doc.as_object().unwrap();

    let keys: Vec<&str> = obj.keys().map(Result::unwrap).collect();
    assert_eq!(keys, ["a", "c", "x"]);
}

#[test]
fn values_and_items_materialize() {
    let mut parser = Parser::new();
    let doc = parser.parse(DOC).unwrap();
    let obj = doc.as_object().unwrap();

    let values: Vec<Value> = obj.values().map(Result::unwrap).collect();
    assert_eq!(
        values,
        vec![
            Value::String("b".into()),
            Value::Array(vec![Value::I64(0), Value::I64(1), Value::I64(2)]),
            Value::Object(vec![("f".into(), Value::String("z".into()))]),
        ]
    );

    let items: Vec<(String, Value)> = obj.items().map(Result::unwrap).collect();
    assert_eq!(items[0], ("a".into(), Value::String("b".into())));
    assert_eq!(items.len(), obj.len());
}

#[test]
fn items_exhaust_to_len_and_restart() {
    let mut parser = Parser::new();
    let doc = parser.parse(DOC).unwrap();
    let obj = doc.as_object().unwrap();

    let first: Vec<(String, Value)> = obj.items().map(Result::unwrap).collect();
    let second: Vec<(String, Value)> = obj.items().map(Result::unwrap).collect();
    assert_eq!(first.len(), obj.len());
    assert_eq!(first, second);
}

#[test]
fn to_map_preserves_order_and_collapses_duplicates() {
    let mut parser = Parser::new();
    let doc = parser.parse(br#"{"b": 1, "a": 2, "b": 3}"#).unwrap();
    let obj = doc.as_object().unwrap();

    // The tape keeps both pairs; materialization keeps the first position
    // with the last occurrence's value.
    assert_eq!(obj.len(), 3);
    let map = obj.to_map().unwrap();
    assert_eq!(map, vec![("b".into(), Value::I64(3)), ("a".into(), Value::I64(2))]);
}

#[test]
fn empty_string_is_an_ordinary_key() {
    let mut parser = Parser::new();
    let doc = parser.parse(br#"{"": 1}"#).unwrap();
    let obj = doc.as_object().unwrap();

    assert!(obj.contains_key("").unwrap());
    assert_eq!(obj.get("").unwrap().as_i64().unwrap(), 1);
}
