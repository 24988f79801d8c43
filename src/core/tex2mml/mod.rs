//! TeX math to MathML converter
//!
//! Source text is tokenised, predeclared macros are expanded, and the token
//! stream is parsed into a MathML tree that the renderer serialises. A
//! [`Document`] holds the state shared between renders: the macro table
//! (predeclared and `\newcommand`-defined) and the equation counter.

pub mod commands;
pub mod context;
pub mod engine;
pub mod environment;
pub mod math;
pub mod postprocess;
pub mod table;

use std::collections::BTreeMap;

use indexmap::IndexMap;

pub use context::{DocumentOptions, MathStyle, ParseContext};

use crate::core::mathml::{MmlNode, Renderer};
use crate::utils::error::TexResult;
use engine::{expand_macros, prepare_macros, tokenize, MacroTable};
use math::Parser;
use postprocess::post_process;

// =============================================================================
// Document
// =============================================================================

/// A set of formulas rendered with shared macros.
///
/// Macros defined by `\newcommand` and friends in one render stay visible to
/// later renders of the same document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Predeclared macro sources, kept to rebuild the table on additions
    sources: IndexMap<String, String>,
    macros: MacroTable,
    pub options: DocumentOptions,
    /// Display equations numbered so far
    eq_count: usize,
}

impl Document {
    /// Create a document with predeclared macros (name without the leading
    /// backslash mapped to its TeX body)
    pub fn new<I, K, V>(macros: I, unknown_commands_as_ops: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let options = DocumentOptions::new().with_unknown_commands_as_ops(unknown_commands_as_ops);
        Self::with_options(macros, options)
    }

    pub fn with_options<I, K, V>(macros: I, options: DocumentOptions) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let sources: IndexMap<String, String> = macros
            .into_iter()
            .map(|(k, v)| {
                let name = k.as_ref().trim_start_matches('\\').to_string();
                (name, v.as_ref().to_string())
            })
            .collect();
        let macros = prepare_macros(&sources);
        log::debug!("document created with {} predeclared macros", macros.len());
        Document {
            sources,
            macros,
            options,
            eq_count: 0,
        }
    }

    /// Create a document from a JSON object of macro definitions, e.g.
    /// `{"R": "\\mathbb{R}"}`
    pub fn from_json_macros(json: &str, options: DocumentOptions) -> Result<Self, serde_json::Error> {
        let macros: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::with_options(macros, options))
    }

    /// Add or replace predeclared macros. Macros defined while rendering are
    /// kept unless a new predeclared macro has the same name.
    pub fn add_macros<I, K, V>(&mut self, macros: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (k, v) in macros {
            let name = k.as_ref().trim_start_matches('\\').to_string();
            self.sources.insert(name, v.as_ref().to_string());
        }
        let mut table = prepare_macros(&self.sources);
        for (name, m) in self.macros.drain(..) {
            if m.dynamic && !table.contains_key(&name) {
                table.insert(name, m);
            }
        }
        self.macros = table;
    }

    /// Macros currently known to the document
    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    /// Number of display equations numbered so far
    pub fn equation_count(&self) -> usize {
        self.eq_count
    }

    /// Parse `src` into the tree that goes inside `<math>`
    fn parse_body(&mut self, src: &str, style: MathStyle) -> TexResult<MmlNode> {
        let tokens = tokenize(src)?;
        let tokens = expand_macros(tokens, &self.macros)?;
        let mut parser = Parser::new(&mut self.macros, &self.options);
        let body = match parser.parse(&tokens, style.context()) {
            Some(node) if node.tag == "mrow" || node.tag == "mtd" => node,
            Some(node) => {
                let mut row = MmlNode::new("mrow").with_child(node);
                post_process(&mut row);
                row
            }
            None => MmlNode::new("mrow"),
        };
        Ok(body)
    }

    /// Render `src` as a complete `<math>` element
    pub fn render(&mut self, src: &str, style: MathStyle) -> TexResult<String> {
        let mut body = self.parse_body(src, style)?;

        if self.options.numbering && style.is_display() {
            self.eq_count += 1;
            body = numbered(body, self.eq_count);
        }

        let mut math = MmlNode::new("math");
        for (key, value) in style.math_attributes() {
            math.set_attr(key, value);
        }
        if self.options.annotate {
            let annotation = MmlNode::leaf("annotation", src).with_attr("encoding", "application/x-tex");
            math.append(MmlNode::new("semantics").with_children([body, annotation]));
        } else {
            math.append(body);
        }
        Ok(Renderer::new(self.options.pretty).render(&math))
    }

    /// Render `src` without the `<math>` wrapper
    pub fn render_body_only(&mut self, src: &str) -> TexResult<String> {
        let body = self.parse_body(src, MathStyle::Inline)?;
        Ok(Renderer::new(self.options.pretty).render(&body))
    }

    pub fn display_style(&mut self, src: &str) -> TexResult<String> {
        self.render(src, MathStyle::Display)
    }

    pub fn text_style(&mut self, src: &str) -> TexResult<String> {
        self.render(src, MathStyle::Inline)
    }
}

/// Wrap an equation in a one-row labelled table showing `(n)`
fn numbered(body: MmlNode, n: usize) -> MmlNode {
    let label = MmlNode::new("mtd").with_child(MmlNode::leaf("mtext", format!("({})", n)));
    let equation = MmlNode::new("mtd").with_child(body);
    MmlNode::new("mtable")
        .with_child(MmlNode::new("mlabeledtr").with_children([label, equation]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc() -> Document {
        Document::with_options(
            Vec::<(&str, &str)>::new(),
            DocumentOptions::new().with_annotation(false),
        )
    }

    #[test]
    fn test_inline_math_element() {
        let out = doc().render("x", MathStyle::Inline).unwrap();
        assert_eq!(
            out,
            "<math class=\"math-textstyle\" display=\"inline\" style=\"font-feature-settings: 'dtls' off;\" \
             xmlns=\"http://www.w3.org/1998/Math/MathML\"><mrow><mi>x</mi></mrow></math>"
        );
    }

    #[test]
    fn test_annotation_keeps_source() {
        let mut d = Document::new(Vec::<(&str, &str)>::new(), false);
        let out = d.render("a<b", MathStyle::Inline).unwrap();
        assert!(out.contains("<semantics>"));
        assert!(out.contains("<annotation encoding=\"application/x-tex\">a&lt;b</annotation>"));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(doc().render_body_only("").unwrap(), "<mrow></mrow>");
    }

    #[test]
    fn test_numbering_counts_display_renders() {
        let mut d = Document::with_options(
            Vec::<(&str, &str)>::new(),
            DocumentOptions::new().with_annotation(false).with_numbering(true),
        );
        d.render("a", MathStyle::Inline).unwrap();
        let out = d.render("b", MathStyle::Display).unwrap();
        assert!(out.contains("<mlabeledtr><mtd><mtext>(1)</mtext></mtd>"));
        d.render("c", MathStyle::Display).unwrap();
        assert_eq!(d.equation_count(), 2);
    }

    #[test]
    fn test_add_macros_keeps_runtime_definitions() {
        let mut d = doc();
        d.render_body_only("\\newcommand{\\foo}{x}").unwrap();
        d.add_macros([("bar", "y")]);
        assert!(d.macros().contains_key("foo"));
        assert_eq!(d.render_body_only("\\bar").unwrap(), "<mrow><mi>y</mi></mrow>");
    }

    #[test]
    fn test_from_json_macros() {
        let mut d = Document::from_json_macros(r#"{"R": "\\mathbb{R}"}"#, DocumentOptions::new()).unwrap();
        let out = d.render_body_only("\\R").unwrap();
        assert_eq!(out, "<mrow><mi mathvariant=\"double-struck\">R</mi></mrow>");
    }
}
