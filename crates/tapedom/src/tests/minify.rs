use crate::{Parser, Value};

#[test]
fn whitespace_is_stripped() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[ 0, 1, 2,    3, 4, 5]").unwrap();
    assert_eq!(doc.minify(), "[0,1,2,3,4,5]");
}

#[test]
fn subtree_rendering_ignores_surroundings() {
    let mut parser = Parser::new();
    let doc = parser
        .parse(b"{\n  \"a\" : [ 1 ,  2 ],\n  \"b\" : { \"c\" : null }\n}")
        .unwrap();
    let obj = doc.as_object().unwrap();

    assert_eq!(obj.get("a").unwrap().as_array().unwrap().minify(), "[1,2]");
    assert_eq!(obj.get("b").unwrap().as_object().unwrap().minify(), r#"{"c":null}"#);
    assert_eq!(doc.minify(), r#"{"a":[1,2],"b":{"c":null}}"#);
}

#[test]
fn strings_re_escape_canonically() {
    let mut parser = Parser::new();
    let doc = parser.parse(br#"["line\nbreak", "tab\there", "q\"q"]"#).unwrap();
    assert_eq!(doc.minify(), r#"["line\nbreak","tab\there","q\"q"]"#);
}

#[test]
fn doubles_stay_doubles() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[1.5, 2.0, -0.25]").unwrap();
    assert_eq!(doc.minify(), "[1.5,2.0,-0.25]");
}

#[test]
fn roundtrip_preserves_structure() {
    let mut parser = Parser::new();
    let source = r#"
        {
            "counts": [1, 2, 3],
            "limits": {"max": 18446744073709551615, "min": -32},
            "label": "résumé",
            "ratio": 0.5,
            "flags": [true, false, null]
        }"#
    .as_bytes();

    let (minified, original) = {
        let doc = parser.parse(source).unwrap();
        (doc.minify(), doc.root().to_value().unwrap())
    };
    let reparsed = {
        let doc = parser.parse(minified.as_bytes()).unwrap();
        doc.root().to_value().unwrap()
    };

    // Same keys, same order, same values and numeric kinds.
    assert_eq!(original, reparsed);
}

#[test]
fn owned_value_display_matches_minify() {
    let mut parser = Parser::new();
    let doc = parser
        .parse(br#"{"a": [1, 2.5, "s"], "b": null}"#)
        .unwrap();

    let owned: Value = doc.root().to_value().unwrap();
    assert_eq!(owned.to_string(), doc.minify());
}
