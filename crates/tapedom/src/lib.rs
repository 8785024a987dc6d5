//! Lazy, read-only DOM views over an already-parsed JSON tape.
//!
//! `tapedom` layers mapping- and sequence-like proxies on top of the tape
//! representation produced by [`simd-json`](https://crates.io/crates/simd-json).
//! Nothing is materialized until the caller asks for it: navigating a
//! document hands out [`Element`] handles and lazy [`ArrayView`]/[`ObjectView`]
//! proxies that borrow the tape, while [`Element::to_value`] produces a fully
//! detached, owned [`Value`] on demand.
//!
//! # Example
//!
//! ```
//! use tapedom::{Parser, Value};
//!
//! let mut parser = Parser::new();
//! let doc = parser.parse(br#"{"a": [10, 20], "b": "text"}"#).unwrap();
//!
//! let obj = doc.as_object().unwrap();
//! assert_eq!(obj.len(), 2);
//!
//! // Lazy navigation: no allocation, no copies.
//! let a = obj.get("a").unwrap().as_array().unwrap();
//! assert_eq!(a.get(-1).unwrap().as_i64().unwrap(), 20);
//!
//! // On-demand materialization: `hits` owns its storage outright.
//! let hits = doc.root().resolve_pointer("/a").unwrap().to_value().unwrap();
//! assert_eq!(hits, Value::Array(vec![Value::I64(10), Value::I64(20)]));
//! ```
//!
//! # Lifetimes
//!
//! A [`Parser`] owns the reusable input buffer; each call to
//! [`Parser::parse`] or [`Parser::load`] replaces the previous tape, so every
//! handle derived from an earlier parse is invalidated. The borrow checker
//! enforces this statically: a [`Document`] mutably borrows its parser, and
//! holding any view across the next `parse` call is a compile error. Owned
//! products ([`Value`], [`FlatBuffer`], minified strings) have no remaining
//! tie to the parser and may be moved across threads freely.

mod array;
mod element;
mod error;
mod flatten;
mod minify;
mod object;
mod options;
mod parser;
mod pointer;
mod value;

#[cfg(test)]
mod tests;

pub use array::{ArrayView, Elements};
pub use element::{Element, ElementKind, LazyValue};
pub use error::{Error, ErrorKind, Result};
pub use flatten::{FlatBuffer, FlatKind};
pub use object::{Items, Keys, ObjectView, Pairs, Values};
pub use options::{Backend, DEFAULT_MAX_DEPTH, MAXSIZE_BYTES, ParserOptions};
pub use parser::{Document, Parser};
pub use value::{Map, Value};
