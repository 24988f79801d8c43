//! MathML tree node definitions
//!
//! An [`MmlNode`] is a MathML element (or a leaf with text content) plus the
//! semantic property bits the post-passes key on. Nodes own their children;
//! positions that a pass empties are filled with non-printing placeholders so
//! sibling indices stay stable while the pass runs.

use crate::core::tex2mml::engine::token::Token;
use bitflags::bitflags;
use std::collections::BTreeMap;

bitflags! {
    /// Semantic flags of an [`MmlNode`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeProperties: u32 {
        /// Kept for sibling positions, never rendered
        const NONPRINT = 1 << 0;
        const LARGEOP = 1 << 1;
        const SUPERSCRIPT = 1 << 2;
        const SUBSCRIPT = 1 << 3;
        const MOVABLELIMITS = 1 << 4;
        /// Scripts attach below and above instead of to the side
        const LIMITSUNDEROVER = 1 << 5;
        /// Table cell separator marker
        const CELL_SEP = 1 << 6;
        /// Table row separator marker
        const ROW_SEP = 1 << 7;
        /// `\limits` switch
        const LIMITS = 1 << 8;
        /// `\nolimits` switch
        const NOLIMITS = 1 << 9;
        /// Symbol is always set upright
        const SYM_UPRIGHT = 1 << 10;
        const STRETCHY = 1 << 11;
        const HORZ_ARROW = 1 << 12;
        const VERT_ARROW = 1 << 13;
        /// Right operand of `\over`
        const INFIX_OVER = 1 << 14;
        /// Right operand of `\choose`
        const INFIX_CHOOSE = 1 << 15;
        /// Right operand of `\atop`
        const INFIX_ATOP = 1 << 16;
        /// Node was assembled by the script pass around a base
        const SCRIPT_BASE = 1 << 17;

        const SCRIPTS = Self::SUPERSCRIPT.bits() | Self::SUBSCRIPT.bits();
        const INFIX = Self::INFIX_OVER.bits()
            | Self::INFIX_CHOOSE.bits()
            | Self::INFIX_ATOP.bits();
    }
}

/// Tags rendered without content
pub const SELF_CLOSING_TAGS: &[&str] = &["malignmark", "maligngroup", "mspace", "mprescripts", "none"];

/// A MathML element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MmlNode {
    /// Element name (`mi`, `mrow`, ...). Empty for placeholders.
    pub tag: String,
    /// Leaf content, stored unescaped
    pub text: String,
    /// XML attributes; a sorted map keeps serialisation deterministic
    pub attrib: BTreeMap<String, String>,
    /// Inline CSS, serialised into the `style` attribute
    pub css: BTreeMap<String, String>,
    pub properties: NodeProperties,
    pub children: Vec<MmlNode>,
    /// Token the node was created from
    pub tok: Token,
    /// Bracketed environment argument, e.g. an `array` column spec
    pub option: Option<String>,
}

impl MmlNode {
    pub fn new(tag: impl Into<String>) -> Self {
        MmlNode {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// A leaf element with text content
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        MmlNode {
            tag: tag.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Non-printing filler for a vacated sibling slot
    pub fn placeholder() -> Self {
        MmlNode {
            properties: NodeProperties::NONPRINT,
            ..Default::default()
        }
    }

    /// An `merror` leaf showing `text` with a diagnostic tooltip
    pub fn error(text: impl Into<String>, title: impl Into<String>) -> Self {
        MmlNode::leaf("merror", text).with_attr("title", title)
    }

    pub fn is_placeholder(&self) -> bool {
        self.tag.is_empty() && self.properties.contains(NodeProperties::NONPRINT)
    }

    pub fn is_nonprint(&self) -> bool {
        self.properties.contains(NodeProperties::NONPRINT)
    }

    /// Cell or row separator marker
    pub fn is_separator(&self) -> bool {
        self.properties
            .intersects(NodeProperties::CELL_SEP | NodeProperties::ROW_SEP)
    }

    pub fn has(&self, props: NodeProperties) -> bool {
        self.properties.intersects(props)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attrib.insert(name.to_string(), value.into());
        self
    }

    pub fn set_true(&mut self, name: &str) -> &mut Self {
        self.set_attr(name, "true")
    }

    pub fn set_false(&mut self, name: &str) -> &mut Self {
        self.set_attr(name, "false")
    }

    pub fn unset_attr(&mut self, name: &str) -> Option<String> {
        self.attrib.remove(name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrib.get(name).map(String::as_str)
    }

    pub fn set_css(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.css.insert(name.to_string(), value.into());
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_css(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_css(name, value);
        self
    }

    pub fn with_props(mut self, props: NodeProperties) -> Self {
        self.properties |= props;
        self
    }

    pub fn with_tok(mut self, tok: &Token) -> Self {
        self.tok = tok.clone();
        self
    }

    pub fn with_child(mut self, child: MmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I: IntoIterator<Item = MmlNode>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn append(&mut self, child: MmlNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Children that will be rendered
    pub fn printable_children(&self) -> impl Iterator<Item = &MmlNode> {
        self.children.iter().filter(|c| !c.is_nonprint())
    }

    /// Mirror properties that have a MathML attribute counterpart
    pub fn set_attribs_from_properties(&mut self) {
        if self.has(NodeProperties::LARGEOP) {
            self.set_true("largeop");
        }
        if self.has(NodeProperties::MOVABLELIMITS) {
            self.set_true("movablelimits");
        }
        if self.has(NodeProperties::STRETCHY) {
            self.set_true("stretchy");
        }
    }
}

/// A stretchy fence operator used to frame tables and binomials
pub fn stretchy_op(text: &str) -> MmlNode {
    MmlNode::leaf("mo", text)
        .with_attr("fence", "true")
        .with_attr("stretchy", "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let p = MmlNode::placeholder();
        assert!(p.is_placeholder());
        assert!(p.is_nonprint());
        assert!(!MmlNode::new("mi").is_placeholder());
    }

    #[test]
    fn test_attribs_from_properties() {
        let mut n = MmlNode::leaf("mo", "∑")
            .with_props(NodeProperties::LARGEOP | NodeProperties::MOVABLELIMITS);
        n.set_attribs_from_properties();
        assert_eq!(n.attr("largeop"), Some("true"));
        assert_eq!(n.attr("movablelimits"), Some("true"));
        assert_eq!(n.attr("stretchy"), None);
    }

    #[test]
    fn test_printable_children_skip_nonprint() {
        let row = MmlNode::new("mrow").with_children([
            MmlNode::leaf("mi", "a"),
            MmlNode::placeholder(),
            MmlNode::leaf("mi", "b"),
        ]);
        assert_eq!(row.printable_children().count(), 2);
    }
}
