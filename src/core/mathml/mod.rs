//! MathML element tree and its XML serialisation

pub mod node;
pub mod render;

pub use node::{stretchy_op, MmlNode, NodeProperties, SELF_CLOSING_TAGS};
pub use render::{escape_text, render, Renderer};
