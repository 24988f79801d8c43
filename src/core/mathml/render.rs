//! Serialisation of a MathML tree to XML text
//!
//! Output is deterministic: attributes come out in ascending key order and
//! inline CSS is folded into a single `style` attribute. Text and attribute
//! values are escaped here, so node content can stay raw.

use super::node::{MmlNode, SELF_CLOSING_TAGS};
use std::fmt::Write;

/// Escape `&`, `<` and `>` in element content
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Serialises nodes either on one line or indented two spaces per level
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pretty: bool,
}

impl Renderer {
    pub fn new(pretty: bool) -> Self {
        Renderer { pretty }
    }

    pub fn render(&self, node: &MmlNode) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out, 0);
        out
    }

    fn style_value(node: &MmlNode) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(style) = node.attr("style") {
            parts.push(style.trim().to_string());
        }
        for (k, v) in &node.css {
            parts.push(format!("{}: {};", k, v));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    fn write_open_tag(node: &MmlNode, out: &mut String) {
        out.push('<');
        out.push_str(&node.tag);
        let style = Self::style_value(node);
        let mut wrote_style = false;
        for (key, val) in &node.attrib {
            // css entries join the explicit style attribute in key order
            if key == "style" {
                wrote_style = true;
                if let Some(s) = &style {
                    let _ = write!(out, " style=\"{}\"", escape_attr(s));
                }
                continue;
            }
            if !wrote_style && key.as_str() > "style" {
                wrote_style = true;
                if let Some(s) = &style {
                    let _ = write!(out, " style=\"{}\"", escape_attr(s));
                }
            }
            let _ = write!(out, " {}=\"{}\"", key, escape_attr(val));
        }
        if !wrote_style {
            if let Some(s) = &style {
                let _ = write!(out, " style=\"{}\"", escape_attr(s));
            }
        }
        out.push('>');
    }

    fn write_node(&self, node: &MmlNode, out: &mut String, depth: usize) {
        if node.is_nonprint() {
            return;
        }
        if node.tag.is_empty() {
            log::warn!("node without a tag ignored (text {:?})", node.text);
            return;
        }
        if self.pretty {
            out.push_str(&"  ".repeat(depth));
        }
        Self::write_open_tag(node, out);

        if !SELF_CLOSING_TAGS.contains(&node.tag.as_str()) {
            if node.children.is_empty() {
                out.push_str(&escape_text(&node.text));
            } else {
                if self.pretty {
                    out.push('\n');
                }
                for child in node.printable_children() {
                    self.write_node(child, out, depth + 1);
                    if self.pretty && !child.tag.is_empty() {
                        out.push('\n');
                    }
                }
                if self.pretty {
                    out.push_str(&"  ".repeat(depth));
                }
            }
        }

        out.push_str("</");
        out.push_str(&node.tag);
        out.push('>');
    }
}

/// Compact single-line rendering
pub fn render(node: &MmlNode) -> String {
    Renderer::default().render(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mathml::node::NodeProperties;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorted_attributes() {
        let n = MmlNode::leaf("mo", "∑")
            .with_attr("movablelimits", "true")
            .with_attr("largeop", "true");
        assert_eq!(
            render(&n),
            r#"<mo largeop="true" movablelimits="true">∑</mo>"#
        );
    }

    #[test]
    fn test_escaping() {
        let n = MmlNode::leaf("mo", "<").with_attr("title", "a \"b\" & c");
        assert_eq!(
            render(&n),
            r#"<mo title="a &quot;b&quot; &amp; c">&lt;</mo>"#
        );
    }

    #[test]
    fn test_self_closing_and_nonprint() {
        let row = MmlNode::new("mrow").with_children([
            MmlNode::leaf("mspace", "ignored").with_attr("width", "1em"),
            MmlNode::placeholder(),
            MmlNode::new("mi").with_props(NodeProperties::NONPRINT),
            MmlNode::new("none"),
        ]);
        assert_eq!(
            render(&row),
            r#"<mrow><mspace width="1em"></mspace><none></none></mrow>"#
        );
    }

    #[test]
    fn test_css_merges_into_style() {
        let n = MmlNode::leaf("mtd", "x")
            .with_attr("style", "color: red;")
            .with_attr("columnalign", "left")
            .with_attr("title", "t")
            .with_css("text-align", "left");
        assert_eq!(
            render(&n),
            r#"<mtd columnalign="left" style="color: red; text-align: left;" title="t">x</mtd>"#
        );
    }

    #[test]
    fn test_pretty_output() {
        let row = MmlNode::new("mrow")
            .with_child(MmlNode::leaf("mi", "a"))
            .with_child(MmlNode::leaf("mn", "1"));
        assert_eq!(
            Renderer::new(true).render(&row),
            "<mrow>\n  <mi>a</mi>\n  <mn>1</mn>\n</mrow>"
        );
    }
}
