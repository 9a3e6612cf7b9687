//! HTML serialization of the presentation tree.

use std::fmt::Write;

use crate::tree::{Element, Node};

impl Node {
    /// Render this node as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&html_escape(text)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    let tag = el.tag.name();
    out.push('<');
    out.push_str(tag);

    if let Some(class) = &el.class {
        let _ = write!(out, r#" class="{}""#, html_escape(class));
    }
    for (name, value) in &el.attrs {
        let _ = write!(out, r#" {}="{}""#, name, html_escape(value));
    }
    if !el.style.is_empty() {
        let _ = write!(out, r#" style="{}""#, html_escape(&el.style.to_css()));
    }

    out.push('>');
    if el.tag.is_void() {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }
    let _ = write!(out, "</{}>", tag);
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap a rendered fragment in a minimal HTML document.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        html_escape(title),
        body
    )
}
