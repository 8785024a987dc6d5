//! Error taxonomy shared by every navigation, conversion, and parse path.

use core::fmt;

use thiserror::Error as ThisError;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The fixed classification of every failure this crate can report.
///
/// Lookup misses (`MissingField`, `ValueNotFound`, `IndexOutOfRange`) are
/// expected, cheap outcomes of normal navigation. The structural kinds
/// (`InvalidDocument`, `Utf8Invalid`, `CapacityExceeded`, `Io`) mean the
/// source document or input itself was bad. `Internal` marks defensive
/// checks that a well-formed tape can never trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An object key lookup found no such key.
    MissingField,
    /// A linear value scan (`index_of`) found no match.
    ValueNotFound,
    /// An array index was outside the valid range after normalization.
    IndexOutOfRange,
    /// An element's kind disagreed with the requested one, or a
    /// configuration value (slice step, flat-buffer tag, backend name) was
    /// rejected.
    TypeMismatch,
    /// The primitive layer failed to allocate. Reserved for the parse
    /// backend; navigation never reports it.
    OutOfMemory,
    /// A JSON Pointer was syntactically invalid.
    MalformedPointer,
    /// The input bytes were not valid UTF-8.
    Utf8Invalid,
    /// Reading the input from a file failed.
    Io,
    /// The input exceeded the configured maximum capacity.
    CapacityExceeded,
    /// The document failed structural validation during parse, or exceeded
    /// the configured nesting depth.
    InvalidDocument,
    /// A tape invariant did not hold. Indicates a defect in the primitive
    /// layer, not in the caller's input.
    Internal,
}

impl ErrorKind {
    /// Stable lower-snake name, used in the `Display` rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::ValueNotFound => "value not found",
            Self::IndexOutOfRange => "index out of range",
            Self::TypeMismatch => "type mismatch",
            Self::OutOfMemory => "out of memory",
            Self::MalformedPointer => "malformed pointer",
            Self::Utf8Invalid => "invalid utf-8",
            Self::Io => "i/o failure",
            Self::CapacityExceeded => "capacity exceeded",
            Self::InvalidDocument => "invalid document",
            Self::Internal => "internal error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured failure: one [`ErrorKind`] plus the originating diagnostic
/// message.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The classification of this failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The diagnostic message carried from the point of failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Single translation point for failures reported by the tape
    /// primitive. Every parse path funnels through here; no component maps
    /// primitive errors on its own.
    ///
    /// Capacity and UTF-8 validity are checked before the primitive runs,
    /// so whatever it rejects is a structural defect of the document.
    pub(crate) fn from_parse(err: &simd_json::Error) -> Self {
        Self::new(ErrorKind::InvalidDocument, err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(err: core::str::Utf8Error) -> Self {
        Self::new(ErrorKind::Utf8Invalid, err.to_string())
    }
}
