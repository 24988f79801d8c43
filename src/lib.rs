//! # texmml
//!
//! Converts TeX/LaTeX math fragments to presentation MathML.
//!
//! ```
//! use texmml::{Document, MathStyle};
//!
//! let mut doc = Document::new([("R", "\\mathbb{R}")], false);
//! let xml = doc.render("x \\in \\R", MathStyle::Inline).unwrap();
//! assert!(xml.contains("<mo>∈</mo>"));
//! ```
//!
//! Structural errors in the source (unbalanced braces or environments)
//! fail the render with a [`TexError`]. Anything else that goes wrong, such
//! as an unknown command, is rendered in place as an `<merror>` element.
//! Diagnostics go through the [`log`] facade.

pub mod core;
pub mod data;
pub mod utils;

pub use crate::core::mathml::{MmlNode, NodeProperties};
pub use crate::core::tex2mml::{Document, DocumentOptions, MathStyle};
pub use crate::utils::error::{TexError, TexResult};

/// Render `src` with a fresh document and no predeclared macros
pub fn tex_to_mathml(src: &str, style: MathStyle) -> TexResult<String> {
    Document::default().render(src, style)
}
