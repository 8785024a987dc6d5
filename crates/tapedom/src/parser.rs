//! The document owner: a reusable parse buffer and the tape of the most
//! recent parse.

use std::{fs, path::Path};

use simd_json::{Node, Tape};
use tracing::debug;

use crate::{
    array::ArrayView,
    element::Element,
    error::{Error, ErrorKind, Result},
    minify,
    object::ObjectView,
    options::{Backend, ParserOptions},
};

/// Owns the reusable input buffer and produces [`Document`]s.
///
/// A parser may be reused for any number of parses; each call to
/// [`parse`](Self::parse) or [`load`](Self::load) replaces the previous tape,
/// and the borrow checker refuses any use of views from an earlier parse
/// (see [`parse`](Self::parse)). Distinct parsers are fully independent.
#[derive(Debug, Default)]
pub struct Parser {
    options: ParserOptions,
    input: Vec<u8>,
}

impl Parser {
    /// A parser with default [`ParserOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser with explicit limits and backend.
    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            input: Vec::new(),
        }
    }

    /// The configuration this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses one JSON document from `bytes`.
    ///
    /// The bytes are copied into the parser's owned scratch buffer (the
    /// tape's strings are unescaped in place there) and validated as strict
    /// UTF-8 up front, so conversion never observes invalid text.
    ///
    /// Reusing the parser invalidates every element and view from the
    /// previous parse, at compile time:
    ///
    /// ```compile_fail
    /// let mut parser = tapedom::Parser::new();
    /// let first = parser.parse(b"[1]").unwrap();
    /// let root = first.root();
    /// let second = parser.parse(b"[2]").unwrap();
    /// root.kind(); // error: `parser` is still mutably borrowed by `first`
    /// ```
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if `bytes` is longer than the configured maximum,
    /// `Utf8Invalid` for non-UTF-8 input, and `InvalidDocument` for
    /// structurally invalid JSON or nesting beyond the configured depth.
    pub fn parse(&mut self, bytes: &[u8]) -> Result<Document<'_>> {
        if bytes.len() > self.options.max_capacity {
            return Err(Error::new(
                ErrorKind::CapacityExceeded,
                format!(
                    "input of {} bytes exceeds the configured capacity of {}",
                    bytes.len(),
                    self.options.max_capacity
                ),
            ));
        }
        core::str::from_utf8(bytes)?;

        self.input.clear();
        self.input.extend_from_slice(bytes);

        let tape = match self.options.backend {
            Backend::Simd => {
                simd_json::to_tape(&mut self.input).map_err(|err| Error::from_parse(&err))?
            }
        };
        check_depth(&tape.0, self.options.max_depth)?;
        debug!(bytes = bytes.len(), nodes = tape.0.len(), "parsed document");
        Ok(Document { tape })
    }

    /// Reads `path` in one whole-file read and parses its contents.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`parse`](Self::parse).
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Document<'_>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading document");
        let bytes = fs::read(path)?;
        self.parse(&bytes)
    }
}

/// Rejects documents whose container nesting exceeds `max_depth`.
///
/// The tape builder has no depth limit of its own, so the bound is enforced
/// here, still within the parse step; navigation never re-checks it.
fn check_depth(nodes: &[Node], max_depth: usize) -> Result<()> {
    let mut ends: Vec<usize> = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        while ends.last().is_some_and(|&end| i >= end) {
            ends.pop();
        }
        if let Node::Object { count, .. } | Node::Array { count, .. } = node {
            ends.push(i + count + 1);
            if ends.len() > max_depth {
                return Err(Error::new(
                    ErrorKind::InvalidDocument,
                    format!("document exceeds maximum nesting depth of {max_depth}"),
                ));
            }
        }
    }
    Ok(())
}

/// One parsed document: the tape produced by the most recent parse.
///
/// A `Document` mutably borrows its [`Parser`], which is what makes the
/// invalidation rule static. Everything reachable from [`root`](Self::root)
/// is a zero-copy view into this tape.
pub struct Document<'input> {
    tape: Tape<'input>,
}

impl core::fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.tape.0.len())
            .finish()
    }
}

impl<'input> Document<'input> {
    /// The root element of the document.
    #[must_use]
    pub fn root(&self) -> Element<'_> {
        Element::new(&self.tape.0, 0)
    }

    /// The root as an [`ArrayView`], or `TypeMismatch`.
    pub fn as_array(&self) -> Result<ArrayView<'_>> {
        self.root().as_array()
    }

    /// The root as an [`ObjectView`], or `TypeMismatch`.
    pub fn as_object(&self) -> Result<ObjectView<'_>> {
        self.root().as_object()
    }

    /// Canonical compact rendering of the whole document.
    #[must_use]
    pub fn minify(&self) -> String {
        minify::subtree_to_string(&self.tape.0, 0)
    }
}
