//! RFC-6901 JSON Pointer resolution against tape elements.
//!
//! Used by the pointer entry points on [`Element`], `ArrayView`, and
//! `ObjectView`. Failures are attributed to the specific segment that could
//! not be resolved, not to the pointer as a whole.

use std::borrow::Cow;

use tracing::trace;

use crate::{
    element::{Element, LazyValue},
    error::{Error, ErrorKind, Result},
};

/// Resolves `pointer` relative to `root`.
///
/// The empty pointer selects `root`; any other pointer must begin with `/`.
/// Segments are separated by `/` and unescaped per RFC 6901 (`~1` is `/`,
/// `~0` is `~`). A numeric segment indexes an array; against an object it is
/// an ordinary string key.
pub(crate) fn resolve<'a>(root: Element<'a>, pointer: &str) -> Result<Element<'a>> {
    if pointer.is_empty() {
        return Ok(root);
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(Error::new(
            ErrorKind::MalformedPointer,
            format!("pointer {pointer:?} does not start with '/'"),
        ));
    };
    trace!(pointer, "resolving json pointer");

    let mut current = root;
    for (number, raw) in rest.split('/').enumerate() {
        let segment = unescape(raw, number)?;
        current = descend(current, &segment, number)?;
    }
    Ok(current)
}

fn descend<'a>(current: Element<'a>, segment: &str, number: usize) -> Result<Element<'a>> {
    match current.lazy() {
        LazyValue::Array(view) => {
            let index = parse_index(segment).ok_or_else(|| {
                Error::new(
                    ErrorKind::TypeMismatch,
                    format!("segment {number} ({segment:?}) is not an array index"),
                )
            })?;
            if index >= view.len() {
                return Err(Error::new(
                    ErrorKind::IndexOutOfRange,
                    format!(
                        "segment {number} ({segment:?}) is past the end of an array of length {}",
                        view.len()
                    ),
                ));
            }
            #[allow(clippy::cast_possible_wrap)]
            let index = index as isize;
            view.get(index)
        }
        LazyValue::Object(view) => view.get(segment).map_err(|err| {
            if err.kind() == ErrorKind::MissingField {
                Error::new(
                    ErrorKind::MissingField,
                    format!("segment {number} ({segment:?}) matches no key"),
                )
            } else {
                err
            }
        }),
        _ => Err(Error::new(
            ErrorKind::TypeMismatch,
            format!(
                "segment {number} ({segment:?}) descends into a {} element",
                current.kind()
            ),
        )),
    }
}

/// Array indices are canonical decimal: digits only, no sign, and no leading
/// zero except for `"0"` itself. RFC 6901's `-` (the past-the-end slot) can
/// never resolve in a read-only document, so it falls out as a non-index.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || (segment.len() > 1 && segment.starts_with('0')) {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Per-segment unescaping. `~` followed by anything other than `0` or `1`
/// (or by nothing) is a malformed pointer.
fn unescape<'s>(raw: &'s str, number: usize) -> Result<Cow<'s, str>> {
    if !raw.contains('~') {
        return Ok(Cow::Borrowed(raw));
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            other => {
                return Err(Error::new(
                    ErrorKind::MalformedPointer,
                    format!(
                        "segment {number} ({raw:?}) has a bad escape '~{}'",
                        other.map(String::from).unwrap_or_default()
                    ),
                ));
            }
        }
    }
    Ok(Cow::Owned(out))
}
