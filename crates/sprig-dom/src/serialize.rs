use std::fmt::Write;

use crate::document::Document;
use crate::node::{Node, NodeId};

/// Serialize a subtree to an HTML-like string.
///
/// Live `value`/`checked` properties are emitted alongside the generic
/// attributes so the dump reflects what a user currently sees, not just
/// construction input.
pub fn to_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.node(id) {
        None => {}
        Some(Node::Text(t)) => out.push_str(&escape(&t.text)),
        Some(Node::Element(el)) => {
            let _ = write!(out, "<{}", el.tag);
            for (name, value) in &el.attributes {
                let _ = write!(out, " {}=\"{}\"", name, escape(value));
            }
            if let Some(value) = &el.value {
                let _ = write!(out, " value=\"{}\"", escape(value));
            }
            if el.checked == Some(true) {
                out.push_str(" checked");
            }
            out.push('>');
            for &child in &el.children {
                write_node(doc, child, out);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
