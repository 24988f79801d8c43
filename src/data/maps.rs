//! Static command tables
//!
//! Small read-only dictionaries keyed by command name (without the leading
//! backslash): accents, negated relations, fixed spaces, identifier
//! commands, math alphabets, style switches and the arity of structural
//! commands.

use crate::core::mathml::NodeProperties as P;
use crate::core::tex2mml::context::ParseContext as Ctx;
use phf::phf_map;

/// Combining glyphs placed over the base by accent commands
pub static ACCENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "acute" => "\u{b4}",
    "bar" => "\u{af}",
    "breve" => "\u{2d8}",
    "u" => "\u{2d8}",
    "check" => "\u{2c7}",
    "dot" => "\u{2d9}",
    "ddot" => "\u{308}",
    "dddot" => "\u{20db}",
    "ddddot" => "\u{20dc}",
    "invbreve" => "\u{311}",
    "grave" => "`",
    "hat" => "^",
    "mathring" => "\u{2da}",
    "overleftarrow" => "\u{2190}",
    "overline" => "\u{203e}",
    "overrightarrow" => "\u{2192}",
    "tilde" => "~",
    "vec" => "\u{20d7}",
    "widehat" => "^",
    "widetilde" => "\u{360}",
};

/// Glyphs placed under the base
pub static ACCENTS_BELOW: phf::Map<&'static str, &'static str> = phf_map! {
    "underline" => "\u{332}",
};

/// Precomposed negations used by `\not`
pub static NEGATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "<" => "≮",
    "=" => "≠",
    ">" => "≯",
    "Bumpeq" => "≎̸",
    "Leftarrow" => "⇍",
    "Rightarrow" => "⇏",
    "VDash" => "⊯",
    "Vdash" => "⊮",
    "apid" => "≋̸",
    "approx" => "≉",
    "bumpeq" => "≏̸",
    "cong" => "≇",
    "doteq" => "≐̸",
    "eqsim" => "≂̸",
    "equiv" => "≢",
    "exists" => "∄",
    "geq" => "≱",
    "geqslant" => "⩾̸",
    "greaterless" => "≹",
    "gt" => "≯",
    "in" => "∉",
    "leftarrow" => "↚",
    "leftrightarrow" => "↮",
    "leq" => "≰",
    "leqslant" => "⩽̸",
    "lessgreater" => "≸",
    "lt" => "≮",
    "mid" => "∤",
    "ni" => "∌",
    "otgreaterless" => "≹",
    "otlessgreater" => "≸",
    "parallel" => "∦",
    "prec" => "⊀",
    "preceq" => "⪯̸",
    "precsim" => "≾̸",
    "rightarrow" => "↛",
    "sim" => "≁",
    "sime" => "≄",
    "simeq" => "≄",
    "sqsubseteq" => "⋢",
    "sqsupseteq" => "⋣",
    "subset" => "⊄",
    "subseteq" => "⊈",
    "subseteqq" => "⫅̸",
    "succ" => "⊁",
    "succeq" => "⪰̸",
    "succsim" => "≿̸",
    "supset" => "⊅",
    "supseteq" => "⊉",
    "supseteqq" => "⫆̸",
    "triangleleft" => "⋪",
    "trianglelefteq" => "⋬",
    "triangleright" => "⋫",
    "trianglerighteq" => "⋭",
    "vDash" => "⊭",
    "vdash" => "⊬",
};

/// Fixed spaces, measured in 18ths of an em. `\\` is a line break.
pub static SPACE_WIDTHS: phf::Map<&'static str, i32> = phf_map! {
    "\\" => 0,
    "," => 3,
    ":" => 4,
    ">" => 4,
    ";" => 5,
    " " => 6,
    "!" => -3,
    "quad" => 18,
    "qquad" => 36,
    "enspace" => 9,
    "thinspace" => 3,
    "medspace" => 4,
    "thickspace" => 5,
    "negthinspace" => -3,
};

/// Format a width given in 18ths of an em, e.g. `3` → `0.16667em`
pub fn em_width(eighteenths: i32) -> String {
    let s = format!("{:.5}", eighteenths as f64 / 18.0);
    format!("{}em", s.trim_end_matches('0').trim_end_matches('.'))
}

const LIMITS_FN: P = P::MOVABLELIMITS.union(P::LIMITSUNDEROVER);

/// Function names typeset upright as identifiers
pub static IDENTIFIERS: phf::Map<&'static str, P> = phf_map! {
    "arccos" => P::empty(),
    "arcsin" => P::empty(),
    "arctan" => P::empty(),
    "cos" => P::empty(),
    "cosh" => P::empty(),
    "cot" => P::empty(),
    "coth" => P::empty(),
    "csc" => P::empty(),
    "deg" => P::empty(),
    "dim" => P::empty(),
    "exp" => P::empty(),
    "hom" => P::empty(),
    "ker" => P::empty(),
    "ln" => P::empty(),
    "lg" => P::empty(),
    "log" => P::empty(),
    "sec" => P::empty(),
    "sin" => P::empty(),
    "sinh" => P::empty(),
    "tan" => P::empty(),
    "tanh" => P::empty(),
    "det" => LIMITS_FN,
    "gcd" => LIMITS_FN,
    "inf" => LIMITS_FN,
    "lim" => LIMITS_FN,
    "max" => LIMITS_FN,
    "min" => LIMITS_FN,
    "Pr" => LIMITS_FN,
    "sup" => LIMITS_FN,
    "limits" => P::LIMITS.union(P::NONPRINT),
    "nolimits" => P::NOLIMITS.union(P::NONPRINT),
};

/// Math alphabet commands and the variant they select
pub static MATH_VARIANTS: phf::Map<&'static str, Ctx> = phf_map! {
    "mathbb" => Ctx::VAR_BB,
    "mathbf" => Ctx::VAR_BOLD,
    "boldsymbol" => Ctx::VAR_BOLD,
    "mathbfit" => Ctx::VAR_BOLD.union(Ctx::VAR_ITALIC),
    "mathcal" => Ctx::VAR_SCRIPT_CHANCERY,
    "mathfrak" => Ctx::VAR_FRAK,
    "mathit" => Ctx::VAR_ITALIC,
    "mathrm" => Ctx::VAR_NORMAL,
    "mathscr" => Ctx::VAR_SCRIPT_ROUNDHAND,
    "mathsf" => Ctx::VAR_SANS,
    "mathsfbf" => Ctx::VAR_SANS.union(Ctx::VAR_BOLD),
    "mathsfbfsl" => Ctx::VAR_SANS.union(Ctx::VAR_BOLD).union(Ctx::VAR_ITALIC),
    "mathsfsl" => Ctx::VAR_SANS.union(Ctx::VAR_ITALIC),
    "mathtt" => Ctx::VAR_MONO,
};

/// Text-mode commands: parsed in text context with a variant
pub static TEXT_VARIANTS: phf::Map<&'static str, Ctx> = phf_map! {
    "mbox" => Ctx::empty(),
    "textrm" => Ctx::VAR_NORMAL,
    "textbf" => Ctx::VAR_BOLD,
    "textit" => Ctx::VAR_ITALIC,
    "textsf" => Ctx::VAR_SANS,
    "texttt" => Ctx::VAR_MONO,
};

/// A declaration that applies to everything up to the next cell or row break
#[derive(Debug, Clone, Copy)]
pub struct Switch {
    pub context: Ctx,
    /// Attributes set on the wrapping `mstyle`
    pub attrs: &'static [(&'static str, &'static str)],
}

const fn switch(context: Ctx, attrs: &'static [(&'static str, &'static str)]) -> Switch {
    Switch { context, attrs }
}

pub static SWITCHES: phf::Map<&'static str, Switch> = phf_map! {
    "color" => switch(Ctx::empty(), &[]),
    "bf" => switch(Ctx::VAR_BOLD, &[]),
    "em" => switch(Ctx::VAR_ITALIC, &[]),
    "rm" => switch(Ctx::VAR_NORMAL, &[("mathvariant", "normal")]),
    "displaystyle" => switch(Ctx::DISPLAY, &[("displaystyle", "true"), ("scriptlevel", "0")]),
    "textstyle" => switch(Ctx::INLINE, &[("displaystyle", "false"), ("scriptlevel", "0")]),
    "scriptstyle" => switch(Ctx::SCRIPT, &[("displaystyle", "false"), ("scriptlevel", "1")]),
    "scriptscriptstyle" => switch(Ctx::SCRIPTSCRIPT, &[("displaystyle", "false"), ("scriptlevel", "2")]),
    "tiny" => switch(Ctx::size_bits(1), &[("mathsize", "050.0%")]),
    "scriptsize" => switch(Ctx::size_bits(2), &[("mathsize", "070.0%")]),
    "footnotesize" => switch(Ctx::size_bits(3), &[("mathsize", "080.0%")]),
    "small" => switch(Ctx::size_bits(4), &[("mathsize", "090.0%")]),
    "normalsize" => switch(Ctx::size_bits(5), &[("mathsize", "100.0%")]),
    "large" => switch(Ctx::size_bits(6), &[("mathsize", "120.0%")]),
    "Large" => switch(Ctx::size_bits(7), &[("mathsize", "144.0%")]),
    "LARGE" => switch(Ctx::size_bits(8), &[("mathsize", "172.8%")]),
    "huge" => switch(Ctx::size_bits(9), &[("mathsize", "207.4%")]),
    "Huge" => switch(Ctx::size_bits(10), &[("mathsize", "248.8%")]),
};

/// Argument counts of a structural command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Required arguments
    pub argc: usize,
    /// Optional bracketed arguments before the first required one
    pub optc: usize,
}

const fn args(argc: usize, optc: usize) -> CommandSpec {
    CommandSpec { argc, optc }
}

pub static COMMAND_ARGS: phf::Map<&'static str, CommandSpec> = phf_map! {
    "multirow" => args(3, 0),
    "multicolumn" => args(3, 0),
    "prescript" => args(3, 0),
    "sideset" => args(3, 0),
    "textcolor" => args(2, 0),
    "frac" => args(2, 0),
    "cfrac" => args(2, 0),
    "binom" => args(2, 0),
    "tbinom" => args(2, 0),
    "dfrac" => args(2, 0),
    "tfrac" => args(2, 0),
    "overset" => args(2, 0),
    "underset" => args(2, 0),
    "stackrel" => args(2, 0),
    "class" => args(2, 0),
    "raisebox" => args(2, 0),
    "cancel" => args(1, 0),
    "bcancel" => args(1, 0),
    "xcancel" => args(1, 0),
    "mathop" => args(1, 0),
    "bmod" => args(1, 0),
    "pmod" => args(1, 0),
    "substack" => args(1, 0),
    "underbrace" => args(1, 0),
    "overbrace" => args(1, 0),
    "not" => args(1, 0),
    "sqrt" => args(1, 1),
    "text" => args(1, 0),
    "operatorname" => args(1, 0),
    "boxed" => args(1, 0),
    "fbox" => args(1, 0),
    "phantom" => args(1, 0),
    "xrightarrow" => args(1, 1),
    "xleftarrow" => args(1, 1),
    "mbox" => args(1, 0),
    "textrm" => args(1, 0),
    "textbf" => args(1, 0),
    "textit" => args(1, 0),
    "textsf" => args(1, 0),
    "texttt" => args(1, 0),
    "hspace" => args(1, 0),
    "mspace" => args(1, 0),
};
