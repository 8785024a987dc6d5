#![allow(clippy::unwrap_used)]

mod convert;
mod flatten;
mod minify;
mod object;
