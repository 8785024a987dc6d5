//! Typed handles into the tape and the shallow/deep conversion engine.

use simd_json::{Node, StaticNode};

use crate::{
    array::ArrayView,
    error::{Error, ErrorKind, Result},
    minify,
    object::ObjectView,
    pointer,
    value::{self, Value},
};

/// The kind tag of a tape element.
///
/// The set is closed: dispatch over it is an exhaustive `match`, so a new
/// kind in the primitive layer is a compile error here rather than a silent
/// fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Array,
    Object,
    I64,
    U64,
    F64,
    String,
    Bool,
    Null,
}

impl ElementKind {
    /// Human-readable name used in `TypeMismatch` diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::I64 => "int64",
            Self::U64 => "uint64",
            Self::F64 => "double",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of tape slots occupied by the subtree rooted at `node`.
pub(crate) fn span(node: &Node) -> usize {
    match node {
        Node::Object { count, .. } | Node::Array { count, .. } => count + 1,
        _ => 1,
    }
}

/// A typed, immutable handle to one JSON value on a document's tape.
///
/// An `Element` is a back-reference plus an offset; it owns nothing and
/// copying it is free. Elements are only obtained by navigating from a
/// [`Document`](crate::Document) root or from another live element, and the
/// borrow they carry keeps the originating parse alive.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    nodes: &'a [Node<'a>],
    index: usize,
}

/// The result of shallow conversion: scalars by value, containers as lazy
/// views.
///
/// Shallow conversion never allocates proportional to the document; strings
/// are zero-copy borrows of the parse buffer.
#[derive(Debug, Clone, Copy)]
pub enum LazyValue<'a> {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(&'a str),
    Array(ArrayView<'a>),
    Object(ObjectView<'a>),
}

impl<'a> Element<'a> {
    pub(crate) fn new(nodes: &'a [Node<'a>], index: usize) -> Self {
        Self { nodes, index }
    }

    fn node(&self) -> &'a Node<'a> {
        &self.nodes[self.index]
    }

    /// The kind tag of this element.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self.node() {
            Node::Array { .. } => ElementKind::Array,
            Node::Object { .. } => ElementKind::Object,
            Node::String(_) => ElementKind::String,
            Node::Static(StaticNode::I64(_)) => ElementKind::I64,
            Node::Static(StaticNode::U64(v)) if i64::try_from(*v).is_ok() => ElementKind::I64,
            Node::Static(StaticNode::U64(_)) => ElementKind::U64,
            Node::Static(StaticNode::F64(_)) => ElementKind::F64,
            Node::Static(StaticNode::Bool(_)) => ElementKind::Bool,
            Node::Static(StaticNode::Null) => ElementKind::Null,
        }
    }

    /// Shallow conversion: scalars are returned by value, containers stay
    /// lazy. Never allocates.
    #[must_use]
    pub fn lazy(&self) -> LazyValue<'a> {
        match self.node() {
            Node::Array { len, count } => {
                LazyValue::Array(ArrayView::new(self.nodes, self.index, *len, *count))
            }
            Node::Object { len, count } => {
                LazyValue::Object(ObjectView::new(self.nodes, self.index, *len, *count))
            }
            Node::String(s) => LazyValue::String(*s),
            Node::Static(StaticNode::I64(v)) => LazyValue::I64(*v),
            // The tape tags every non-negative integer as unsigned; the
            // document model keeps uint64 only for values an i64 cannot
            // hold, matching how the numbers were written.
            Node::Static(StaticNode::U64(v)) => match i64::try_from(*v) {
                Ok(signed) => LazyValue::I64(signed),
                Err(_) => LazyValue::U64(*v),
            },
            Node::Static(StaticNode::F64(v)) => LazyValue::F64(*v),
            Node::Static(StaticNode::Bool(b)) => LazyValue::Bool(*b),
            Node::Static(StaticNode::Null) => LazyValue::Null,
        }
    }

    /// Deep conversion: recursively materializes this element into an owned
    /// [`Value`] with no remaining tie to the document.
    ///
    /// Object key order is preserved; a duplicate key keeps its first
    /// position but takes the last occurrence's value. Numbers convert
    /// exactly, with no width or signedness coercion. String decoding is
    /// strict, but the input was already validated as UTF-8 during parse, so
    /// conversion cannot encounter invalid text.
    ///
    /// The only runtime failure is a corrupt tape (an object pair whose key
    /// slot is not a string), reported as [`ErrorKind::Internal`].
    ///
    /// [`ErrorKind::Internal`]: crate::ErrorKind::Internal
    pub fn to_value(&self) -> Result<Value> {
        match self.lazy() {
            LazyValue::Null => Ok(Value::Null),
            LazyValue::Bool(b) => Ok(Value::Bool(b)),
            LazyValue::I64(v) => Ok(Value::I64(v)),
            LazyValue::U64(v) => Ok(Value::U64(v)),
            LazyValue::F64(v) => Ok(Value::F64(v)),
            LazyValue::String(s) => Ok(Value::String(s.into())),
            LazyValue::Array(view) => {
                let mut out = Vec::with_capacity(view.len());
                for child in view.iter() {
                    out.push(child.to_value()?);
                }
                Ok(Value::Array(out))
            }
            LazyValue::Object(view) => {
                let mut map = Vec::with_capacity(view.len());
                for pair in view.pairs() {
                    let (key, child) = pair?;
                    value::map_insert(&mut map, key.into(), child.to_value()?);
                }
                Ok(Value::Object(map))
            }
        }
    }

    /// This element as an [`ArrayView`], or `TypeMismatch`.
    pub fn as_array(&self) -> Result<ArrayView<'a>> {
        match self.lazy() {
            LazyValue::Array(view) => Ok(view),
            _ => Err(self.mismatch(ElementKind::Array)),
        }
    }

    /// This element as an [`ObjectView`], or `TypeMismatch`.
    pub fn as_object(&self) -> Result<ObjectView<'a>> {
        match self.lazy() {
            LazyValue::Object(view) => Ok(view),
            _ => Err(self.mismatch(ElementKind::Object)),
        }
    }

    /// The string payload, borrowed from the parse buffer.
    pub fn as_str(&self) -> Result<&'a str> {
        match self.lazy() {
            LazyValue::String(s) => Ok(s),
            _ => Err(self.mismatch(ElementKind::String)),
        }
    }

    /// The signed 64-bit payload. Exact: a `uint64` or `double` element is a
    /// `TypeMismatch`, never a coercion.
    pub fn as_i64(&self) -> Result<i64> {
        match self.lazy() {
            LazyValue::I64(v) => Ok(v),
            _ => Err(self.mismatch(ElementKind::I64)),
        }
    }

    /// The unsigned 64-bit payload, exact-width.
    pub fn as_u64(&self) -> Result<u64> {
        match self.lazy() {
            LazyValue::U64(v) => Ok(v),
            _ => Err(self.mismatch(ElementKind::U64)),
        }
    }

    /// The IEEE-754 double payload, exact-width.
    pub fn as_f64(&self) -> Result<f64> {
        match self.lazy() {
            LazyValue::F64(v) => Ok(v),
            _ => Err(self.mismatch(ElementKind::F64)),
        }
    }

    /// The boolean payload.
    pub fn as_bool(&self) -> Result<bool> {
        match self.lazy() {
            LazyValue::Bool(b) => Ok(b),
            _ => Err(self.mismatch(ElementKind::Bool)),
        }
    }

    /// Resolves an RFC-6901 JSON Pointer relative to this element.
    ///
    /// The empty pointer selects this element itself.
    pub fn resolve_pointer(&self, ptr: &str) -> Result<Element<'a>> {
        pointer::resolve(*self, ptr)
    }

    /// The canonical compact JSON rendering of exactly this subtree,
    /// independent of the surrounding document's formatting.
    #[must_use]
    pub fn minify(&self) -> String {
        minify::subtree_to_string(self.nodes, self.index)
    }

    fn mismatch(&self, wanted: ElementKind) -> Error {
        Error::new(
            ErrorKind::TypeMismatch,
            format!("expected {wanted}, found {}", self.kind()),
        )
    }
}
