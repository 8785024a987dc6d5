use crate::{ErrorKind, FlatBuffer, FlatKind, Parser};

#[test]
fn nested_arrays_flatten_depth_first() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[[1, 2], [3, [4, 5]]]").unwrap();
    let arr = doc.as_array().unwrap();

    let buf = arr.to_flat_buffer(FlatKind::I64).unwrap();
    assert_eq!(buf, FlatBuffer::I64(vec![1, 2, 3, 4, 5]));
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.kind(), FlatKind::I64);
}

#[test]
fn ragged_shapes_are_accepted() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[1, [2, 3], 4, [], [[5]]]").unwrap();
    let arr = doc.as_array().unwrap();

    let buf = arr.to_flat_buffer(FlatKind::I64).unwrap();
    assert_eq!(buf, FlatBuffer::I64(vec![1, 2, 3, 4, 5]));
}

#[test]
fn doubles_flatten_exactly() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[[1.5, 2.25], [3.75]]").unwrap();
    let arr = doc.as_array().unwrap();

    let buf = arr.to_flat_buffer(FlatKind::F64).unwrap();
    assert_eq!(buf, FlatBuffer::F64(vec![1.5, 2.25, 3.75]));
}

#[test]
fn uint64_buffers_take_the_full_range() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[18446744073709551615, 9223372036854775808]").unwrap();
    let arr = doc.as_array().unwrap();

    let buf = arr.to_flat_buffer(FlatKind::U64).unwrap();
    assert_eq!(buf, FlatBuffer::U64(vec![u64::MAX, 9_223_372_036_854_775_808]));
}

#[test]
fn narrowing_is_exact_not_coercing() {
    let mut parser = Parser::new();

    // A double inside an int64 buffer.
    let doc = parser.parse(b"[1, 2.5]").unwrap();
    let arr = doc.as_array().unwrap();
    let err = arr.to_flat_buffer(FlatKind::I64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    // A string is never a scalar of any numeric kind.
    let doc = parser.parse(br#"[1, "2"]"#).unwrap();
    let arr = doc.as_array().unwrap();
    let err = arr.to_flat_buffer(FlatKind::F64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    // Objects mid-walk are not descended into.
    let doc = parser.parse(br#"[1, {"a": 2}]"#).unwrap();
    let arr = doc.as_array().unwrap();
    let err = arr.to_flat_buffer(FlatKind::I64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn empty_arrays_yield_empty_buffers() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[]").unwrap();
    let arr = doc.as_array().unwrap();

    let buf = arr.to_flat_buffer(FlatKind::F64).unwrap();
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
}

#[test]
fn byte_view_is_contiguous() {
    let mut parser = Parser::new();
    let doc = parser.parse(b"[1, 256]").unwrap();
    let arr = doc.as_array().unwrap();

    let buf = arr.to_flat_buffer(FlatKind::I64).unwrap();
    let bytes = buf.as_bytes();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[..8], 1i64.to_ne_bytes().as_slice());
    assert_eq!(&bytes[8..], 256i64.to_ne_bytes().as_slice());
}
