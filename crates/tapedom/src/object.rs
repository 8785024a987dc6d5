//! Mapping-like lazy proxy over a tape object segment.

use simd_json::Node;

use crate::{
    element::{Element, span},
    error::{Error, ErrorKind, Result},
    minify, pointer,
    value::{self, Map, Value},
};

/// A lazy, non-owning mapping view over an object element.
///
/// Keys are strings and iteration preserves the document's insertion order.
/// Individual lookups ([`get`](Self::get)) hand back lazy [`Element`]s;
/// the bulk helpers [`values`](Self::values) and [`items`](Self::items)
/// deep-convert instead, so they never leak lazy sub-proxies.
///
/// # Examples
///
/// ```
/// use tapedom::Parser;
///
/// let mut parser = Parser::new();
/// let doc = parser.parse(br#"{"a": "b", "c": [0, 1]}"#).unwrap();
/// let obj = doc.as_object().unwrap();
/// assert_eq!(obj.len(), 2);
/// assert!(obj.contains_key("a").unwrap());
/// assert_eq!(obj.get("a").unwrap().as_str().unwrap(), "b");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectView<'a> {
    nodes: &'a [Node<'a>],
    index: usize,
    len: usize,
    count: usize,
}

impl<'a> ObjectView<'a> {
    pub(crate) fn new(nodes: &'a [Node<'a>], index: usize, len: usize, count: usize) -> Self {
        Self {
            nodes,
            index,
            len,
            count,
        }
    }

    /// Number of key/value pairs. O(1): the tape header stores the count.
    /// Duplicate keys in the source document are counted as written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the object has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total tape slots consumed by this object and all of its descendants.
    /// Allocation sizing only; never a pair count.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.count + 1
    }

    /// This view as a plain [`Element`] again.
    #[must_use]
    pub fn as_element(&self) -> Element<'a> {
        Element::new(self.nodes, self.index)
    }

    /// Exact string-key lookup. A miss is a `MissingField` error, the cheap
    /// and expected outcome of probing for an optional key.
    pub fn get(&self, key: &str) -> Result<Element<'a>> {
        for pair in self.pairs() {
            let (k, element) = pair?;
            if k == key {
                return Ok(element);
            }
        }
        Err(Error::new(
            ErrorKind::MissingField,
            format!("no such key: {key:?}"),
        ))
    }

    /// Lookup that suppresses exactly `MissingField`, mapping it to `None`.
    /// Every other error kind from traversal still propagates; a structural
    /// failure is never downgraded to "use the default".
    pub fn get_opt(&self, key: &str) -> Result<Option<Element<'a>>> {
        match self.get(key) {
            Ok(element) => Ok(Some(element)),
            Err(err) if err.kind() == ErrorKind::MissingField => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Presence test. Probes keys only and never materializes a value.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        for pair in self.pairs() {
            let (k, _) = pair?;
            if k == key {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Lazy iteration over `(key, element)` pairs in insertion order. Each
    /// call returns a fresh, independent iterator.
    ///
    /// The item is a `Result`: a well-formed tape always stores a string in
    /// the key slot, but that invariant is checked per pair, not assumed,
    /// and a violation surfaces as an `Internal` error.
    #[must_use]
    pub fn pairs(&self) -> Pairs<'a> {
        Pairs {
            nodes: self.nodes,
            index: self.index + 1,
            remaining: self.len,
        }
    }

    /// Lazy iteration over keys, in insertion order. Restartable.
    #[must_use]
    pub fn keys(&self) -> Keys<'a> {
        Keys { pairs: self.pairs() }
    }

    /// Lazy iteration over deep-converted values, in insertion order.
    #[must_use]
    pub fn values(&self) -> Values<'a> {
        Values { pairs: self.pairs() }
    }

    /// Lazy iteration over `(key, deep value)` items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Items<'a> {
        Items { pairs: self.pairs() }
    }

    /// Resolves an RFC-6901 JSON Pointer relative to this object.
    pub fn resolve_pointer(&self, ptr: &str) -> Result<Element<'a>> {
        pointer::resolve(self.as_element(), ptr)
    }

    /// Deep conversion into an owned, insertion-ordered [`Map`]. Duplicate
    /// keys collapse with the last occurrence winning.
    pub fn to_map(&self) -> Result<Map> {
        let mut map = Vec::with_capacity(self.len);
        for pair in self.pairs() {
            let (key, element) = pair?;
            value::map_insert(&mut map, key.into(), element.to_value()?);
        }
        Ok(map)
    }

    /// Canonical compact JSON rendering of exactly this subtree.
    #[must_use]
    pub fn minify(&self) -> String {
        minify::subtree_to_string(self.nodes, self.index)
    }
}

/// Iterator over the `(key, element)` pairs of an [`ObjectView`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    nodes: &'a [Node<'a>],
    index: usize,
    remaining: usize,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Result<(&'a str, Element<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let Node::String(key) = &self.nodes[self.index] else {
            // Fused: a corrupt pair poisons the rest of the walk.
            self.remaining = 0;
            return Some(Err(Error::new(
                ErrorKind::Internal,
                format!("object key slot {} does not hold a string", self.index),
            )));
        };
        let value_index = self.index + 1;
        self.index = value_index + span(&self.nodes[value_index]);
        Some(Ok((*key, Element::new(self.nodes, value_index))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Pairs<'_> {}

/// Iterator over the keys of an [`ObjectView`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    pairs: Pairs<'a>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.pairs.next()?.map(|(key, _)| key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

/// Iterator over the deep-converted values of an [`ObjectView`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    pairs: Pairs<'a>,
}

impl Iterator for Values<'_> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(
            self.pairs
                .next()?
                .and_then(|(_, element)| element.to_value()),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

/// Iterator over `(key, deep value)` items of an [`ObjectView`].
#[derive(Debug, Clone)]
pub struct Items<'a> {
    pairs: Pairs<'a>,
}

impl Iterator for Items<'_> {
    type Item = Result<(String, Value)>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.pairs.next()?.and_then(|(key, element)| {
            let value = element.to_value()?;
            Ok((key.into(), value))
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}
