//! Parse context, document options and output styles
//!
//! [`ParseContext`] is the bitmask threaded through every parse call. It
//! carries the math style, a four-bit size, environment flags and the active
//! font variant.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::core::mathml::MmlNode;

// =============================================================================
// Parse Context
// =============================================================================

bitflags! {
    /// State handed down while parsing nested expressions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParseContext: u32 {
        const ROOT = 1 << 0;
        const DISPLAY = 1 << 1;
        const INLINE = 1 << 2;
        const SCRIPT = 1 << 3;
        const SCRIPTSCRIPT = 1 << 4;
        /// Letters become text, whitespace becomes visible space
        const TEXT = 1 << 5;
        const BRACKETED = 1 << 6;
        // Size, read as a four-bit unsigned integer
        const SIZE_1 = 1 << 7;
        const SIZE_2 = 1 << 8;
        const SIZE_3 = 1 << 9;
        const SIZE_4 = 1 << 10;
        // Environments
        const TABLE = 1 << 11;
        /// Environment expects a bracketed or braced argument first
        const ENV_HAS_ARG = 1 << 12;
        // Font variants
        const VAR_NORMAL = 1 << 13;
        const VAR_BB = 1 << 14;
        const VAR_MONO = 1 << 15;
        const VAR_SCRIPT_CHANCERY = 1 << 16;
        const VAR_SCRIPT_ROUNDHAND = 1 << 17;
        const VAR_FRAK = 1 << 18;
        const VAR_BOLD = 1 << 19;
        const VAR_ITALIC = 1 << 20;
        const VAR_SANS = 1 << 21;

        const STYLE = Self::DISPLAY.bits()
            | Self::INLINE.bits()
            | Self::SCRIPT.bits()
            | Self::SCRIPTSCRIPT.bits();
        const SIZE = Self::SIZE_1.bits()
            | Self::SIZE_2.bits()
            | Self::SIZE_3.bits()
            | Self::SIZE_4.bits();
        const ENVIRONMENT = Self::TABLE.bits() | Self::ENV_HAS_ARG.bits();
        const VARIANT = Self::VAR_NORMAL.bits()
            | Self::VAR_BB.bits()
            | Self::VAR_MONO.bits()
            | Self::VAR_SCRIPT_CHANCERY.bits()
            | Self::VAR_SCRIPT_ROUNDHAND.bits()
            | Self::VAR_FRAK.bits()
            | Self::VAR_BOLD.bits()
            | Self::VAR_ITALIC.bits()
            | Self::VAR_SANS.bits();
    }
}

const SIZE_SHIFT: u32 = ParseContext::SIZE_1.bits().trailing_zeros();

impl ParseContext {
    /// Context bits encoding size level `level` (1-10 used, 0 = unset)
    pub const fn size_bits(level: u8) -> ParseContext {
        ParseContext::from_bits_truncate(((level as u32) & 0xF) << SIZE_SHIFT)
    }

    pub fn size(self) -> u8 {
        ((self & ParseContext::SIZE).bits() >> SIZE_SHIFT) as u8
    }

    pub fn variant(self) -> ParseContext {
        self & ParseContext::VARIANT
    }

    /// Replace the active font variant. Math alphabets do not combine, the
    /// innermost one wins.
    pub fn with_variant(self, variant: ParseContext) -> ParseContext {
        (self - ParseContext::VARIANT) | variant
    }

    /// Replace the style and size parts with those set in `switch`
    pub fn with_switch(self, switch: ParseContext) -> ParseContext {
        let mut ctx = self;
        if switch.intersects(ParseContext::STYLE) {
            ctx = (ctx - ParseContext::STYLE) | (switch & ParseContext::STYLE);
        }
        if switch.intersects(ParseContext::SIZE) {
            ctx = (ctx - ParseContext::SIZE) | (switch & ParseContext::SIZE);
        }
        if switch.intersects(ParseContext::VARIANT) {
            ctx = ctx.with_variant(switch.variant());
        }
        ctx
    }

    /// The `mathvariant` attribute value for the active font variant
    pub fn mathvariant(self) -> Option<&'static str> {
        let v = self.variant();
        let name = match v {
            v if v == ParseContext::VAR_NORMAL => "normal",
            v if v == ParseContext::VAR_BB => "double-struck",
            v if v == ParseContext::VAR_BOLD => "bold",
            v if v == ParseContext::VAR_BOLD | ParseContext::VAR_ITALIC => "bold-italic",
            v if v == ParseContext::VAR_SCRIPT_CHANCERY
                || v == ParseContext::VAR_SCRIPT_ROUNDHAND =>
            {
                "script"
            }
            v if v == ParseContext::VAR_FRAK => "fraktur",
            v if v == ParseContext::VAR_ITALIC => "italic",
            v if v == ParseContext::VAR_SANS => "sans-serif",
            v if v == ParseContext::VAR_SANS | ParseContext::VAR_BOLD => "sans-serif-bold",
            v if v == ParseContext::VAR_SANS | ParseContext::VAR_BOLD | ParseContext::VAR_ITALIC => {
                "sans-serif-bold-italic"
            }
            v if v == ParseContext::VAR_SANS | ParseContext::VAR_ITALIC => "sans-serif-italic",
            v if v == ParseContext::VAR_MONO => "monospace",
            _ => return None,
        };
        Some(name)
    }

    /// Apply the active font variant to a token element.
    ///
    /// Calligraphic and roundhand script add a variation selector after each
    /// character so fonts can pick the intended script style.
    pub fn apply_variant(self, node: &mut MmlNode) {
        let Some(variant) = self.mathvariant() else {
            return;
        };
        node.set_attr("mathvariant", variant);
        let selector = match self.variant() {
            v if v == ParseContext::VAR_SCRIPT_CHANCERY => {
                node.set_attr("class", "calligraphic");
                '\u{FE00}'
            }
            v if v == ParseContext::VAR_SCRIPT_ROUNDHAND => '\u{FE01}',
            _ => return,
        };
        node.text = node
            .text
            .chars()
            .flat_map(|c| [c, selector])
            .collect();
    }
}

// =============================================================================
// Output Style
// =============================================================================

/// Style of a rendered formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathStyle {
    Display,
    #[default]
    Inline,
    Script,
    ScriptScript,
}

impl MathStyle {
    pub fn is_display(self) -> bool {
        self == MathStyle::Display
    }

    /// Root parse context for this style
    pub fn context(self) -> ParseContext {
        ParseContext::ROOT
            | match self {
                MathStyle::Display => ParseContext::DISPLAY,
                MathStyle::Inline => ParseContext::INLINE,
                MathStyle::Script => ParseContext::SCRIPT,
                MathStyle::ScriptScript => ParseContext::SCRIPTSCRIPT,
            }
    }

    /// Attributes of the `<math>` element for this style
    pub fn math_attributes(self) -> Vec<(&'static str, &'static str)> {
        let mut attrs = vec![
            ("xmlns", "http://www.w3.org/1998/Math/MathML"),
            ("style", "font-feature-settings: 'dtls' off;"),
        ];
        match self {
            MathStyle::Display => {
                attrs.push(("display", "block"));
                attrs.push(("class", "math-displaystyle"));
                attrs.push(("displaystyle", "true"));
            }
            MathStyle::Inline => {
                attrs.push(("display", "inline"));
                attrs.push(("class", "math-textstyle"));
            }
            MathStyle::Script => {
                attrs.push(("display", "inline"));
                attrs.push(("class", "math-textstyle"));
                attrs.push(("scriptlevel", "1"));
            }
            MathStyle::ScriptScript => {
                attrs.push(("display", "inline"));
                attrs.push(("class", "math-textstyle"));
                attrs.push(("scriptlevel", "2"));
            }
        }
        attrs
    }
}

// =============================================================================
// Document Options
// =============================================================================

/// Options for a [`super::Document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Render unknown commands as operators instead of errors
    /// Default: false
    pub unknown_commands_as_ops: bool,

    /// Number display equations `(1)`, `(2)`, ...
    /// Default: false
    pub numbering: bool,

    /// Emit `<semantics>` with the TeX source as annotation
    /// Default: true
    pub annotate: bool,

    /// Indent the XML, one element per line
    /// Default: false
    pub pretty: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            unknown_commands_as_ops: false,
            numbering: false,
            annotate: true,
            pretty: false,
        }
    }
}

impl DocumentOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_unknown_commands_as_ops(mut self, on: bool) -> Self {
        self.unknown_commands_as_ops = on;
        self
    }

    pub fn with_numbering(mut self, on: bool) -> Self {
        self.numbering = on;
        self
    }

    pub fn with_annotation(mut self, on: bool) -> Self {
        self.annotate = on;
        self
    }

    pub fn with_pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }
}
