//! Flattening nested arrays into owned, homogeneous numeric buffers.

use crate::{
    array::ArrayView,
    element::{Element, LazyValue},
    error::{Error, ErrorKind, Result},
};

/// The numeric element type of a [`FlatBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatKind {
    I64,
    U64,
    F64,
}

impl FlatKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I64 => "int64",
            Self::U64 => "uint64",
            Self::F64 => "double",
        }
    }
}

impl core::fmt::Display for FlatKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned, contiguous, homogeneous numeric buffer produced from a
/// (possibly nested) array view.
///
/// Once built, a `FlatBuffer` owns its storage outright: it has no remaining
/// relationship to the document or the view that produced it and may be
/// dropped or sent to another thread at any time.
///
/// # Examples
///
/// ```
/// use tapedom::{FlatBuffer, FlatKind, Parser};
///
/// let mut parser = Parser::new();
/// let doc = parser.parse(b"[[1, 2], [3, [4, 5]]]").unwrap();
/// let arr = doc.as_array().unwrap();
/// let buf = arr.to_flat_buffer(FlatKind::I64).unwrap();
/// assert_eq!(buf, FlatBuffer::I64(vec![1, 2, 3, 4, 5]));
/// assert_eq!(buf.as_bytes().len(), 5 * 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FlatBuffer {
    I64(Vec<i64>),
    U64(Vec<u64>),
    F64(Vec<f64>),
}

impl FlatBuffer {
    /// The element type of this buffer.
    #[must_use]
    pub fn kind(&self) -> FlatKind {
        match self {
            Self::I64(_) => FlatKind::I64,
            Self::U64(_) => FlatKind::U64,
            Self::F64(_) => FlatKind::F64,
        }
    }

    /// Number of scalar elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::I64(v) => v.len(),
            Self::U64(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Returns `true` if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The raw little-endian byte view of the buffer, suitable for handing
    /// to foreign numeric libraries without a copy.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::I64(v) => bytemuck::cast_slice(v),
            Self::U64(v) => bytemuck::cast_slice(v),
            Self::F64(v) => bytemuck::cast_slice(v),
        }
    }
}

/// A scalar that can be collected out of the tape with exact-width
/// narrowing.
trait FlatScalar: Sized {
    const KIND: FlatKind;

    fn from_element(element: &Element) -> Result<Self>;
}

impl FlatScalar for i64 {
    const KIND: FlatKind = FlatKind::I64;

    fn from_element(element: &Element) -> Result<Self> {
        element.as_i64()
    }
}

impl FlatScalar for u64 {
    const KIND: FlatKind = FlatKind::U64;

    fn from_element(element: &Element) -> Result<Self> {
        element.as_u64()
    }
}

impl FlatScalar for f64 {
    const KIND: FlatKind = FlatKind::F64;

    fn from_element(element: &Element) -> Result<Self> {
        element.as_f64()
    }
}

/// Flattens `view` into a buffer of `kind`.
pub(crate) fn flatten(view: &ArrayView, kind: FlatKind) -> Result<FlatBuffer> {
    match kind {
        FlatKind::I64 => collect(view).map(FlatBuffer::I64),
        FlatKind::U64 => collect(view).map(FlatBuffer::U64),
        FlatKind::F64 => collect(view).map(FlatBuffer::F64),
    }
}

/// Depth-first, left-to-right walk appending every scalar descendant.
///
/// Nested arrays are descended into; ragged mixtures of arrays and scalars
/// at the same level are accepted as-is. Capacity is reserved up front from
/// the subtree slot count, every slot except the array headers being a
/// potential scalar, then shrunk to the true element count after the walk.
fn collect<T: FlatScalar>(view: &ArrayView) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(view.slot_count() - 1);
    walk(view, &mut out)?;
    out.shrink_to_fit();
    Ok(out)
}

fn walk<T: FlatScalar>(view: &ArrayView, out: &mut Vec<T>) -> Result<()> {
    for child in view.iter() {
        if let LazyValue::Array(nested) = child.lazy() {
            walk(&nested, out)?;
        } else {
            // Non-array children go through exact narrowing; anything whose
            // kind disagrees with T (a string, an object, the wrong numeric
            // width) surfaces the narrowing's own TypeMismatch.
            out.push(T::from_element(&child).map_err(|err| {
                Error::new(
                    ErrorKind::TypeMismatch,
                    format!("cannot flatten into {}: {}", T::KIND, err.message()),
                )
            })?);
        }
    }
    Ok(())
}
