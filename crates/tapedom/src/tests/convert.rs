use crate::{ElementKind, ErrorKind, LazyValue, Parser, Value};

#[test]
fn scalar_kinds_are_exact() {
    let mut parser = Parser::new();
    let doc = parser
        .parse(br#"[1, -1, 18446744073709551615, 1.5, "s", true, null]"#)
        .unwrap();
    let arr = doc.as_array().unwrap();

    let kinds: Vec<ElementKind> = arr.iter().map(|el| el.kind()).collect();
    assert_eq!(
        kinds,
        [
            ElementKind::I64,
            ElementKind::I64,
            ElementKind::U64,
            ElementKind::F64,
            ElementKind::String,
            ElementKind::Bool,
            ElementKind::Null,
        ]
    );

    assert_eq!(arr.get(1).unwrap().as_i64().unwrap(), -1);
    assert_eq!(arr.get(2).unwrap().as_u64().unwrap(), u64::MAX);
    assert_eq!(arr.get(3).unwrap().as_f64().unwrap(), 1.5);
}

#[test]
fn width_extremes_convert_without_loss() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[-9223372036854775808, 9223372036854775807]").unwrap();
    let arr = doc.as_array().unwrap();

    assert_eq!(arr.get(0).unwrap().as_i64().unwrap(), i64::MIN);
    assert_eq!(arr.get(1).unwrap().as_i64().unwrap(), i64::MAX);
}

#[test]
fn nonnegative_integers_are_signed_while_they_fit() {
    let mut parser = Parser::new();
    let doc = parser
        .parse(b"[0, 1, 3, 9223372036854775807, 9223372036854775808]")
        .unwrap();
    let arr = doc.as_array().unwrap();

    // Positive literals are int64 up to and including i64::MAX, no matter
    // how the tape happens to tag them.
    assert_eq!(arr.get(0).unwrap().kind(), ElementKind::I64);
    assert_eq!(arr.get(1).unwrap().kind(), ElementKind::I64);
    assert_eq!(arr.get(2).unwrap().as_i64().unwrap(), 3);
    assert_eq!(arr.get(3).unwrap().as_i64().unwrap(), i64::MAX);

    // Only values an i64 cannot hold stay unsigned.
    let big = arr.get(4).unwrap();
    assert_eq!(big.kind(), ElementKind::U64);
    assert_eq!(big.as_u64().unwrap(), 9_223_372_036_854_775_808);
    assert_eq!(big.as_i64().unwrap_err().kind(), ErrorKind::TypeMismatch);
}

#[test]
fn shallow_conversion_keeps_containers_lazy() {
    let mut parser = Parser::new();
    let doc = parser.parse(br#"{"list": [1], "text": "zero copy"}"#).unwrap();
    let obj = doc.as_object().unwrap();

    match obj.get("list").unwrap().lazy() {
        LazyValue::Array(view) => assert_eq!(view.len(), 1),
        other => panic!("expected a lazy array view, got {other:?}"),
    }
    match obj.get("text").unwrap().lazy() {
        LazyValue::String(s) => assert_eq!(s, "zero copy"),
        other => panic!("expected a borrowed string, got {other:?}"),
    }
}

#[test]
fn deep_conversion_is_deterministic_and_idempotent() {
    let mut parser = Parser::new();
    let doc = parser
        .parse(br#"{"a": [1, {"b": [null, 2.5]}], "c": "s"}"#)
        .unwrap();

    let first = doc.root().to_value().unwrap();
    let second = doc.root().to_value().unwrap();
    assert_eq!(first, second);

    // Every element reachable from the root converts the same way twice.
    let arr = doc.as_object().unwrap().get("a").unwrap().as_array().unwrap();
    for child in arr.iter() {
        assert_eq!(child.to_value().unwrap(), child.to_value().unwrap());
    }
}

#[test]
fn escapes_decode_during_parse() {
    let mut parser = Parser::new();
    let doc = parser
        .parse(r#"{"msg": "line\nbreak \"quoted\" é"}"#.as_bytes())
        .unwrap();
    let obj = doc.as_object().unwrap();

    assert_eq!(
        obj.get("msg").unwrap().as_str().unwrap(),
        "line\nbreak \"quoted\" \u{e9}"
    );
}

#[test]
fn value_accessors_round_out_the_conversion() {
    let mut parser = Parser::new();
    let doc = parser.parse(br#"{"n": 1, "s": "x"}"#).unwrap();
    let value = doc.root().to_value().unwrap();

    assert_eq!(value.get("n"), Some(&Value::I64(1)));
    assert_eq!(value.get("s").and_then(Value::as_str), Some("x"));
    assert_eq!(value.get("missing"), None);
    assert!(value.as_object().is_some());
}
