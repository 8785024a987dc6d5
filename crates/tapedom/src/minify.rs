//! Compact serialization of a tape subtree.
//!
//! Rendering walks the tape directly, so it is independent of whatever
//! whitespace or formatting the source document carried. Shares its string
//! escaping and float formatting with [`Value`](crate::Value)'s `Display`,
//! keeping the two renderings byte-identical for equivalent data.

use core::fmt::Write;

use simd_json::{Node, StaticNode};

use crate::value::{write_escaped_string, write_f64};

/// Renders the subtree rooted at `index` as minified JSON.
pub(crate) fn subtree_to_string(nodes: &[Node], index: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_subtree(nodes, index, &mut out).expect("infallible write to String");
    out
}

/// Writes one subtree and returns the index of the first node after it.
fn write_subtree(nodes: &[Node], index: usize, out: &mut String) -> Result<usize, core::fmt::Error> {
    match &nodes[index] {
        Node::Static(StaticNode::Null) => {
            out.push_str("null");
            Ok(index + 1)
        }
        Node::Static(StaticNode::Bool(b)) => {
            out.push_str(if *b { "true" } else { "false" });
            Ok(index + 1)
        }
        Node::Static(StaticNode::I64(v)) => {
            write!(out, "{v}")?;
            Ok(index + 1)
        }
        Node::Static(StaticNode::U64(v)) => {
            write!(out, "{v}")?;
            Ok(index + 1)
        }
        Node::Static(StaticNode::F64(v)) => {
            write_f64(*v, out)?;
            Ok(index + 1)
        }
        Node::String(s) => {
            out.push('"');
            write_escaped_string(s, out)?;
            out.push('"');
            Ok(index + 1)
        }
        Node::Array { len, .. } => {
            out.push('[');
            let mut next = index + 1;
            for i in 0..*len {
                if i > 0 {
                    out.push(',');
                }
                next = write_subtree(nodes, next, out)?;
            }
            out.push(']');
            Ok(next)
        }
        Node::Object { len, .. } => {
            out.push('{');
            let mut next = index + 1;
            for i in 0..*len {
                if i > 0 {
                    out.push(',');
                }
                // Key slot; a non-string here would already have been caught
                // by the pair iterator on any navigation path, and rendering
                // it as a plain subtree keeps this walk total.
                next = write_subtree(nodes, next, out)?;
                out.push(':');
                next = write_subtree(nodes, next, out)?;
            }
            out.push('}');
            Ok(next)
        }
    }
}
