//! Parser configuration: input limits and the parse backend registry.

use crate::error::{Error, ErrorKind, Result};

/// Largest input the parser will accept by default, in bytes.
///
/// Matches the 4 GiB − 1 document bound of the underlying tape format.
pub const MAXSIZE_BYTES: usize = 0xFFFF_FFFF;

/// Default maximum container nesting depth accepted during parse.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// A parse backend implementation, selected explicitly per parser rather
/// than through process-wide mutable state.
///
/// The registry is compiled in: [`Backend::implementations`] enumerates what
/// this build offers, and [`Backend::from_name`] rejects unknown names
/// before the backend is ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Backend {
    /// The SIMD tape builder, dispatching on detected CPU features at
    /// runtime.
    #[default]
    Simd,
}

impl Backend {
    /// The stable name this backend is selected by.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Simd => "simd",
        }
    }

    /// A one-line description of the implementation.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Simd => "SIMD tape builder, CPU features detected at runtime",
        }
    }

    /// Every backend compiled into this build.
    #[must_use]
    pub fn implementations() -> &'static [Backend] {
        &[Self::Simd]
    }

    /// Looks up a backend by name, rejecting unknown names eagerly.
    ///
    /// ```
    /// use tapedom::{Backend, ErrorKind};
    ///
    /// assert_eq!(Backend::from_name("simd").unwrap(), Backend::Simd);
    /// assert_eq!(
    ///     Backend::from_name("bogus").unwrap_err().kind(),
    ///     ErrorKind::TypeMismatch,
    /// );
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        Self::implementations()
            .iter()
            .copied()
            .find(|backend| backend.name() == name)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::TypeMismatch,
                    format!("unknown backend implementation: {name:?}"),
                )
            })
    }
}

/// Configuration for a [`Parser`](crate::Parser).
///
/// Both limits are enforced during `parse`/`load`, never during navigation:
/// a document that parsed is fully navigable.
///
/// # Examples
///
/// ```
/// use tapedom::{ErrorKind, Parser, ParserOptions};
///
/// let mut parser = Parser::with_options(ParserOptions {
///     max_capacity: 16,
///     ..ParserOptions::default()
/// });
/// let err = parser.parse(br#"{"far": "too large for that limit"}"#).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum input size in bytes; larger inputs are rejected with
    /// `CapacityExceeded` before any parsing work happens.
    ///
    /// Defaults to [`MAXSIZE_BYTES`].
    pub max_capacity: usize,

    /// Maximum container nesting depth; deeper documents are rejected with
    /// `InvalidDocument`.
    ///
    /// Defaults to [`DEFAULT_MAX_DEPTH`].
    pub max_depth: usize,

    /// The parse backend to run.
    pub backend: Backend,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_capacity: MAXSIZE_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
            backend: Backend::default(),
        }
    }
}
