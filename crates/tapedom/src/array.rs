//! Sequence-like lazy proxy over a tape array segment.

use simd_json::Node;

use crate::{
    element::{Element, span},
    error::{Error, ErrorKind, Result},
    flatten::{self, FlatBuffer, FlatKind},
    minify, pointer,
    value::Value,
};

/// A lazy, non-owning sequence view over an array element.
///
/// The view is a header plus a borrow of the tape; creating one allocates
/// nothing. Elements are produced on demand by [`get`](Self::get) and
/// [`iter`](Self::iter).
///
/// # Examples
///
/// ```
/// use tapedom::Parser;
///
/// let mut parser = Parser::new();
/// let doc = parser.parse(b"[0, 1, 2, 3]").unwrap();
/// let arr = doc.as_array().unwrap();
/// assert_eq!(arr.len(), 4);
/// assert_eq!(arr.get(-1).unwrap().as_i64().unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<'a> {
    nodes: &'a [Node<'a>],
    index: usize,
    len: usize,
    count: usize,
}

impl<'a> ArrayView<'a> {
    pub(crate) fn new(nodes: &'a [Node<'a>], index: usize, len: usize, count: usize) -> Self {
        Self {
            nodes,
            index,
            len,
            count,
        }
    }

    /// Number of direct children. O(1): the tape header stores the count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total tape slots consumed by this array and all of its descendants.
    ///
    /// This is an allocation-sizing figure, not a length; it is always at
    /// least `len() + 1` and must never be confused with [`len`](Self::len).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.count + 1
    }

    /// This view as a plain [`Element`] again.
    #[must_use]
    pub fn as_element(&self) -> Element<'a> {
        Element::new(self.nodes, self.index)
    }

    /// Indexed access. Negative indices count from the end, so `get(-1)` is
    /// the last child. An index outside `[0, len())` after normalization is
    /// an `IndexOutOfRange` error.
    pub fn get(&self, index: isize) -> Result<Element<'a>> {
        let normalized = self.normalize(index)?;
        // Walking from the front is unavoidable: children have variable
        // spans, so the tape has no O(1) random access.
        self.iter().nth(normalized).ok_or_else(|| {
            Error::new(
                ErrorKind::Internal,
                format!("array child {normalized} missing from tape"),
            )
        })
    }

    /// Python-style slicing: `start`/`stop` default to the ends of the view
    /// (respecting the sign of `step`), negative values count from the end,
    /// and out-of-range bounds are clamped. An empty result is valid for any
    /// well-formed triple; `step == 0` is a `TypeMismatch` configuration
    /// error.
    ///
    /// ```
    /// use tapedom::Parser;
    ///
    /// let mut parser = Parser::new();
    /// let doc = parser.parse(b"[0, 1, 2, 3, 4, 5]").unwrap();
    /// let arr = doc.as_array().unwrap();
    /// let rev: Vec<i64> = arr
    ///     .get_slice(None, None, -1)
    ///     .unwrap()
    ///     .iter()
    ///     .map(|el| el.as_i64().unwrap())
    ///     .collect();
    /// assert_eq!(rev, [5, 4, 3, 2, 1, 0]);
    /// ```
    pub fn get_slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<Vec<Element<'a>>> {
        if step == 0 {
            return Err(Error::new(
                ErrorKind::TypeMismatch,
                "slice step cannot be zero",
            ));
        }
        let len = self.len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(mut b) => {
                if b < 0 {
                    b += len;
                    if b < lower {
                        b = lower;
                    }
                } else if b > upper {
                    b = upper;
                }
                b
            }
        };
        let start = clamp(start, if step < 0 { upper } else { lower });
        let stop = clamp(stop, if step < 0 { lower } else { upper });

        let mut out = Vec::new();
        if step > 0 {
            if start < stop {
                // One forward pass; fetching each slot through `get` would
                // restart the walk from the head and go quadratic.
                #[allow(clippy::cast_sign_loss)]
                let (start, stop, step) = (start as usize, stop as usize, step as usize);
                let take = (stop - start).div_ceil(step);
                out.reserve(take);
                out.extend(self.iter().skip(start).step_by(step).take(take));
            }
        } else if start > stop {
            let children: Vec<Element<'a>> = self.iter().collect();
            let mut i = start;
            while i > stop {
                #[allow(clippy::cast_sign_loss)]
                let slot = i as usize;
                out.push(children[slot]);
                i += step;
            }
        }
        Ok(out)
    }

    /// A lazy forward pass over the direct children only. Each call returns
    /// a fresh iterator, so iteration is restartable.
    #[must_use]
    pub fn iter(&self) -> Elements<'a> {
        Elements {
            nodes: self.nodes,
            index: self.index + 1,
            remaining: self.len,
        }
    }

    /// Counts children structurally equal to `needle`.
    ///
    /// O(n) with a full deep conversion per child; there is no shortcut for
    /// nested comparisons.
    pub fn count(&self, needle: &Value) -> Result<usize> {
        let mut hits = 0;
        for child in self.iter() {
            if child.to_value()? == *needle {
                hits += 1;
            }
        }
        Ok(hits)
    }

    /// Index of the first child in `[start, end)` structurally equal to
    /// `needle`, scanning forward. Bounds default to the whole view and
    /// accept negative values like [`get_slice`](Self::get_slice). A miss is
    /// a `ValueNotFound` error, a distinct kind from the `MissingField` of
    /// key lookups.
    pub fn index_of(
        &self,
        needle: &Value,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<usize> {
        let len = self.len as isize;
        let clamp = |bound: Option<isize>, default: isize| {
            let mut b = bound.unwrap_or(default);
            if b < 0 {
                b += len;
            }
            b.clamp(0, len)
        };
        #[allow(clippy::cast_sign_loss)]
        let start = clamp(start, 0) as usize;
        #[allow(clippy::cast_sign_loss)]
        let end = clamp(end, len) as usize;

        for (i, child) in self.iter().enumerate().take(end).skip(start) {
            if child.to_value()? == *needle {
                return Ok(i);
            }
        }
        Err(Error::new(
            ErrorKind::ValueNotFound,
            format!("{needle} is not in the searched range"),
        ))
    }

    /// Membership test, with the same cost caveats as [`count`](Self::count).
    pub fn contains_value(&self, needle: &Value) -> Result<bool> {
        match self.index_of(needle, None, None) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::ValueNotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Resolves an RFC-6901 JSON Pointer relative to this array.
    pub fn resolve_pointer(&self, ptr: &str) -> Result<Element<'a>> {
        pointer::resolve(self.as_element(), ptr)
    }

    /// Deep conversion of every child, in order.
    pub fn to_vec(&self) -> Result<Vec<Value>> {
        let mut out = Vec::with_capacity(self.len);
        for child in self.iter() {
            out.push(child.to_value()?);
        }
        Ok(out)
    }

    /// Flattens this (possibly nested) array into an owned, contiguous
    /// homogeneous buffer of the requested numeric kind. See
    /// [`FlatBuffer`] for the narrowing rules.
    pub fn to_flat_buffer(&self, kind: FlatKind) -> Result<FlatBuffer> {
        flatten::flatten(self, kind)
    }

    /// Canonical compact JSON rendering of exactly this subtree.
    #[must_use]
    pub fn minify(&self) -> String {
        minify::subtree_to_string(self.nodes, self.index)
    }

    /// Maps a possibly-negative index into `[0, len)`.
    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.len as isize;
        let shifted = if index < 0 { index + len } else { index };
        if (0..len).contains(&shifted) {
            #[allow(clippy::cast_sign_loss)]
            let shifted = shifted as usize;
            Ok(shifted)
        } else {
            Err(Error::new(
                ErrorKind::IndexOutOfRange,
                format!("index {index} out of range for array of length {}", self.len),
            ))
        }
    }
}

impl<'a> IntoIterator for &ArrayView<'a> {
    type Item = Element<'a>;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for ArrayView<'a> {
    type Item = Element<'a>;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the direct children of an [`ArrayView`].
///
/// Yields plain elements: any tape node is a valid element, so array
/// iteration cannot fail.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    nodes: &'a [Node<'a>],
    index: usize,
    remaining: usize,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let element = Element::new(self.nodes, self.index);
        self.index += span(&self.nodes[self.index]);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Elements<'_> {}
