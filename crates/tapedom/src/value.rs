//! Owned JSON values, the target of deep conversion.
//!
//! This module defines the [`Value`] enum produced when a lazy view is fully
//! materialized, plus the escaping and number-formatting helpers shared with
//! the tape serializer.

/// An insertion-ordered key/value mapping.
///
/// Key order is the document's order; duplicate keys are collapsed during
/// conversion with the last occurrence winning, so a `Map` built by this
/// crate never holds the same key twice.
pub type Map = Vec<(String, Value)>;

/// A fully materialized JSON value, detached from any parser or tape.
///
/// Integer width is preserved exactly: documents whose numbers fit `i64`
/// produce [`Value::I64`], numbers above `i64::MAX` produce [`Value::U64`],
/// and anything with a fraction or exponent produces [`Value::F64`]. The
/// three numeric variants never compare equal to one another.
///
/// # Examples
///
/// ```
/// use tapedom::Value;
///
/// let v = Value::Array(vec![Value::I64(1), Value::String("x".into())]);
/// assert_eq!(v.to_string(), r#"[1,"x"]"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean payload, if this is a [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The signed integer payload, if this is an [`I64`].
    ///
    /// [`I64`]: Value::I64
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// The unsigned integer payload, if this is a [`U64`].
    ///
    /// [`U64`]: Value::U64
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// The float payload, if this is an [`F64`].
    ///
    /// [`F64`]: Value::F64
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// The string payload, if this is a [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element list, if this is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key/value pairs, if this is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in an [`Object`] value. Returns `None` for absent keys
    /// and for non-object values.
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

/// Inserts `key` into `map`, overwriting any existing entry in place so that
/// the last occurrence wins while the first occurrence's position is kept.
pub(crate) fn map_insert(map: &mut Map, key: String, value: Value) {
    if let Some(slot) = map.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        map.push((key, value));
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Replaces quotes, backslashes, and control characters (<= U+001F) with
/// their JSON escape sequences. Everything else is passed through verbatim;
/// the output stays minimal, matching a canonical minified rendering.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Writes a double so that it re-parses as a double.
///
/// Rust's shortest-roundtrip `Display` prints `1.0` as `1`, which would come
/// back off the tape as an integer; integral finite values are printed with
/// one fractional digit instead.
pub(crate) fn write_f64<W: core::fmt::Write>(v: f64, f: &mut W) -> core::fmt::Result {
    if v == v.trunc() {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

impl core::fmt::Display for Value {
    /// Canonical compact rendering, identical to what `minify` produces for
    /// the tape subtree this value was converted from.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F64(v) => write_f64(*v, f),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for v in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
