//! Static symbol table
//!
//! Maps a control-sequence name (without the backslash) to its glyph, its
//! TeX class and the node properties it contributes. The class decides
//! whether the parser emits `mi` or `mo`.

use crate::core::mathml::NodeProperties;
use phf::phf_map;

/// TeX class of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Letter-like; rendered as `mi`
    Alphabetic,
    BinaryOp,
    Relation,
    Opening,
    Closing,
    /// Big operator (`\sum`, `\int`, ...)
    Large,
    /// Punctuation-like operator
    Operator,
    Other,
}

/// A glyph entry of the symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub ch: &'static str,
    pub kind: SymbolKind,
    pub properties: NodeProperties,
}

impl Symbol {
    /// Symbols of these classes are operators (`mo`)
    pub fn is_operator(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::BinaryOp
                | SymbolKind::Relation
                | SymbolKind::Opening
                | SymbolKind::Closing
                | SymbolKind::Large
                | SymbolKind::Operator
        )
    }
}

const fn sym(ch: &'static str, kind: SymbolKind) -> Symbol {
    Symbol {
        ch,
        kind,
        properties: NodeProperties::empty(),
    }
}

const fn sym_p(ch: &'static str, kind: SymbolKind, properties: NodeProperties) -> Symbol {
    Symbol {
        ch,
        kind,
        properties,
    }
}

use NodeProperties as P;
use SymbolKind as Kind;

/// Look up a symbol by command name
pub fn lookup(name: &str) -> Option<&'static Symbol> {
    SYMBOLS.get(name)
}

pub static SYMBOLS: phf::Map<&'static str, Symbol> = phf_map! {
    "-" => sym("\u{00ad}", Kind::Other),
    "Alpha" => sym_p("Α", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Angle" => sym("⦜", Kind::Other),
    "BbbPi" => sym("ℿ", Kind::Alphabetic),
    "Beta" => sym_p("Β", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Bumpeq" => sym("≎", Kind::Relation),
    "Cap" => sym("⋒", Kind::BinaryOp),
    "Chi" => sym_p("Χ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Colon" => sym("∷", Kind::Other),
    "Cup" => sym("⋓", Kind::BinaryOp),
    "Dashv" => sym("⫤", Kind::Relation),
    "Ddownarrow" => sym_p("⤋", Kind::Relation, P::VERT_ARROW),
    "Delta" => sym_p("Δ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Digamma" => sym("Ϝ", Kind::Alphabetic),
    "Doteq" => sym("≑", Kind::Relation),
    "DownArrowBar" => sym_p("⤓", Kind::Relation, P::VERT_ARROW),
    "DownArrowUpArrow" => sym_p("⇵", Kind::Relation, P::VERT_ARROW),
    "DownLeftRightVector" => sym("⥐", Kind::Relation),
    "DownLeftTeeVector" => sym("⥞", Kind::Relation),
    "DownLeftVectorBar" => sym("⥖", Kind::Relation),
    "DownRightTeeVector" => sym("⥟", Kind::Relation),
    "DownRightVectorBar" => sym("⥗", Kind::Relation),
    "Downarrow" => sym_p("⇓", Kind::Relation, P::VERT_ARROW),
    "ElOr" => sym("⩖", Kind::BinaryOp),
    "Elroang" => sym("⦆", Kind::Closing),
    "ElzAnd" => sym("⩓", Kind::BinaryOp),
    "ElzLap" => sym("⧊", Kind::Other),
    "ElzOr" => sym("⩔", Kind::BinaryOp),
    "ElzRlarr" => sym("⥂", Kind::Relation),
    "ElzTimes" => sym("⨯", Kind::BinaryOp),
    "Elzbtdl" => sym("ɬ", Kind::Other),
    "Elzcirfb" => sym("◒", Kind::Other),
    "Elzcirfl" => sym("◐", Kind::Other),
    "Elzcirfr" => sym("◑", Kind::Other),
    "Elzclomeg" => sym("ɷ", Kind::Other),
    "Elzddfnc" => sym("⦙", Kind::Other),
    "Elzdefas" => sym("⧋", Kind::Other),
    "Elzdlcorn" => sym("⎣", Kind::Relation),
    "Elzdshfnc" => sym("┆", Kind::Other),
    "Elzdyogh" => sym("ʤ", Kind::Other),
    "Elzesh" => sym("ʃ", Kind::Other),
    "Elzfhr" => sym("ɾ", Kind::Other),
    "Elzglst" => sym("ʔ", Kind::Other),
    "Elzhlmrk" => sym("ˑ", Kind::Other),
    "Elzinglst" => sym("ʖ", Kind::Other),
    "Elzinvv" => sym("ʌ", Kind::Other),
    "Elzinvw" => sym("ʍ", Kind::Other),
    "Elzlmrk" => sym("ː", Kind::Other),
    "Elzlow" => sym("˕", Kind::Other),
    "Elzlpargt" => sym("⦠", Kind::Other),
    "Elzltlmr" => sym("ɱ", Kind::Other),
    "Elzltln" => sym("ɲ", Kind::Other),
    "Elzminhat" => sym("⩟", Kind::BinaryOp),
    "Elzopeno" => sym("ɔ", Kind::Other),
    "Elzpalh" => sym("\u{0321}", Kind::Other),
    "Elzpbgam" => sym("ɤ", Kind::Other),
    "Elzpes" => sym("₧", Kind::Other),
    "Elzpgamma" => sym("ɣ", Kind::Other),
    "Elzpscrv" => sym("ʋ", Kind::Other),
    "Elzpupsil" => sym("ʊ", Kind::Other),
    "ElzrLarr" => sym("⥄", Kind::Relation),
    "Elzrais" => sym("˔", Kind::Other),
    "Elzrarrx" => sym("⥇", Kind::Relation),
    "Elzreapos" => sym("‛", Kind::Other),
    "Elzreglst" => sym("ʕ", Kind::Other),
    "Elzrl" => sym("ɼ", Kind::Other),
    "Elzrtld" => sym("ɖ", Kind::Other),
    "Elzrtll" => sym("ɭ", Kind::Other),
    "Elzrtln" => sym("ɳ", Kind::Other),
    "Elzrtlr" => sym("ɽ", Kind::Other),
    "Elzrtls" => sym("ʂ", Kind::Other),
    "Elzrtlt" => sym("ʈ", Kind::Other),
    "Elzrtlz" => sym("ʐ", Kind::Other),
    "Elzrttrnr" => sym("ɻ", Kind::Other),
    "Elzrvbull" => sym("◘", Kind::Other),
    "Elzsbbrg" => sym("\u{032a}", Kind::Other),
    "Elzsblhr" => sym("˓", Kind::Other),
    "Elzsbrhr" => sym("˒", Kind::Other),
    "Elzschwa" => sym("ə", Kind::Other),
    "Elzsqfl" => sym("◧", Kind::Other),
    "Elzsqfnw" => sym("┙", Kind::Other),
    "Elzsqfr" => sym("◨", Kind::Other),
    "Elzsqfse" => sym("◪", Kind::Other),
    "Elzsqspne" => sym("⋥", Kind::Other),
    "Elztdcol" => sym("⫶", Kind::Other),
    "Elztesh" => sym("ʧ", Kind::Other),
    "Elztrna" => sym("ɐ", Kind::Other),
    "Elztrnh" => sym("ɥ", Kind::Other),
    "Elztrnm" => sym("ɯ", Kind::Other),
    "Elztrnmlr" => sym("ɰ", Kind::Other),
    "Elztrnr" => sym("ɹ", Kind::Other),
    "Elztrnrl" => sym("ɺ", Kind::Other),
    "Elztrnsa" => sym("ɒ", Kind::Other),
    "Elztrnt" => sym("ʇ", Kind::Other),
    "Elztrny" => sym("ʎ", Kind::Other),
    "Elzverti" => sym("ˌ", Kind::Other),
    "Elzverts" => sym("ˈ", Kind::Other),
    "Elzvrecto" => sym("▯", Kind::Other),
    "Elzxh" => sym("ħ", Kind::Alphabetic),
    "Elzxrat" => sym("℞", Kind::Other),
    "Elzyogh" => sym("ʒ", Kind::Other),
    "Epsilon" => sym_p("Ε", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Equal" => sym("⩵", Kind::Relation),
    "Eta" => sym_p("Η", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Game" => sym("⅁", Kind::Other),
    "Gamma" => sym_p("Γ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Im" => sym("ℑ", Kind::Alphabetic),
    "Iota" => sym_p("Ι", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Kappa" => sym_p("Κ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Koppa" => sym("Ϟ", Kind::Alphabetic),
    "Lambda" => sym_p("Λ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "LeftDownTeeVector" => sym("⥡", Kind::Relation),
    "LeftDownVectorBar" => sym("⥙", Kind::Relation),
    "LeftRightVector" => sym("⥎", Kind::Relation),
    "LeftTeeVector" => sym("⥚", Kind::Relation),
    "LeftTriangleBar" => sym("⧏", Kind::Other),
    "LeftUpDownVector" => sym("⥑", Kind::Relation),
    "LeftUpTeeVector" => sym("⥠", Kind::Relation),
    "LeftUpVectorBar" => sym("⥘", Kind::Relation),
    "LeftVectorBar" => sym("⥒", Kind::Relation),
    "Leftarrow" => sym_p("⇐", Kind::Relation, P::HORZ_ARROW),
    "Leftrightarrow" => sym_p("⇔", Kind::Relation, P::HORZ_ARROW),
    "Lleftarrow" => sym_p("⇚", Kind::Relation, P::HORZ_ARROW),
    "Longleftarrow" => sym_p("⟸", Kind::Relation, P::HORZ_ARROW),
    "Longleftrightarrow" => sym_p("⟺", Kind::Relation, P::HORZ_ARROW),
    "Longrightarrow" => sym_p("⟹", Kind::Relation, P::HORZ_ARROW),
    "Lsh" => sym("↰", Kind::Relation),
    "Mapsfrom" => sym("⤆", Kind::Relation),
    "Mapsto" => sym("⤇", Kind::Relation),
    "NestedGreaterGreater" => sym("⪢", Kind::Relation),
    "NestedLessLess" => sym("⪡", Kind::Relation),
    "NotGreaterGreater" => sym("≫\u{0338}", Kind::Relation),
    "NotLeftTriangleBar" => sym("⧏\u{0338}", Kind::Other),
    "NotLessLess" => sym("≪\u{0338}", Kind::Relation),
    "NotNestedGreaterGreater" => sym("⪢\u{0338}", Kind::Relation),
    "NotNestedLessLess" => sym("⪡\u{0338}", Kind::Relation),
    "NotRightTriangleBar" => sym("⧐\u{0338}", Kind::Other),
    "NotSquareSubset" => sym("⊏\u{0338}", Kind::Relation),
    "NotSquareSuperset" => sym("⊐\u{0338}", Kind::Relation),
    "Omega" => sym_p("Ω", Kind::Alphabetic, P::SYM_UPRIGHT),
    "P" => sym("¶", Kind::Other),
    "Phi" => sym_p("Φ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Pi" => sym_p("Π", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Psi" => sym_p("Ψ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Re" => sym("ℜ", Kind::Alphabetic),
    "ReverseUpEquilibrium" => sym("⥯", Kind::Relation),
    "Rho" => sym_p("Ρ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "RightDownTeeVector" => sym("⥝", Kind::Relation),
    "RightDownVectorBar" => sym("⥕", Kind::Relation),
    "RightTeeVector" => sym("⥛", Kind::Relation),
    "RightTriangleBar" => sym("⧐", Kind::Other),
    "RightUpDownVector" => sym("⥏", Kind::Relation),
    "RightUpTeeVector" => sym("⥜", Kind::Relation),
    "RightUpVectorBar" => sym("⥔", Kind::Relation),
    "RightVectorBar" => sym("⥓", Kind::Relation),
    "Rightarrow" => sym_p("⇒", Kind::Relation, P::HORZ_ARROW),
    "RoundImplies" => sym("⥰", Kind::Relation),
    "Rrightarrow" => sym_p("⇛", Kind::Relation, P::HORZ_ARROW),
    "Rsh" => sym("↱", Kind::Relation),
    "RuleDelayed" => sym("⧴", Kind::Other),
    "S" => sym("§", Kind::Other),
    "Sampi" => sym("Ϡ", Kind::Alphabetic),
    "Sigma" => sym_p("Σ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Stigma" => sym("Ϛ", Kind::Alphabetic),
    "Subset" => sym("⋐", Kind::Relation),
    "Supset" => sym("⋑", Kind::Relation),
    "Tau" => sym_p("Τ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Theta" => sym_p("Θ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "UpArrowBar" => sym_p("⤒", Kind::Relation, P::VERT_ARROW),
    "UpEquilibrium" => sym("⥮", Kind::Relation),
    "Uparrow" => sym_p("⇑", Kind::Relation, P::VERT_ARROW),
    "Updownarrow" => sym_p("⇕", Kind::Relation, P::VERT_ARROW),
    "Upsilon" => sym_p("Υ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Uuparrow" => sym_p("⤊", Kind::Relation, P::VERT_ARROW),
    "VDash" => sym("⊫", Kind::Relation),
    "Vdash" => sym("⊩", Kind::Relation),
    "Vert" => sym("‖", Kind::Other),
    "Vvdash" => sym("⊪", Kind::Relation),
    "Vvert" => sym("⦀", Kind::Other),
    "Xi" => sym_p("Ξ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "Zeta" => sym_p("Ζ", Kind::Alphabetic, P::SYM_UPRIGHT),
    "adots" => sym("⋰", Kind::Other),
    "aleph" => sym("ℵ", Kind::Alphabetic),
    "allequal" => sym("≌", Kind::Other),
    "alpha" => sym("α", Kind::Alphabetic),
    "amalg" => sym("⨿", Kind::BinaryOp),
    "angle" => sym("∠", Kind::Other),
    "approx" => sym("≈", Kind::Relation),
    "approxeq" => sym("≊", Kind::Relation),
    "approxnotequal" => sym("≆", Kind::Relation),
    "ast" => sym("*", Kind::Other),
    "asymp" => sym("≍", Kind::Relation),
    "backepsilon" => sym("϶", Kind::Other),
    "backprime" => sym("‵", Kind::Other),
    "backsim" => sym("∽", Kind::Relation),
    "backsimeq" => sym("⋍", Kind::Relation),
    "backslash" => sym("\\", Kind::Other),
    "barwedge" => sym("⌅", Kind::Other),
    "bbsum" => sym_p("⅀", Kind::Large, P::LIMITSUNDEROVER),
    "because" => sym("∵", Kind::Other),
    "beta" => sym("β", Kind::Alphabetic),
    "beth" => sym("ℶ", Kind::Alphabetic),
    "between" => sym("≬", Kind::Relation),
    "bigcap" => sym_p("⋂", Kind::Large, P::LIMITSUNDEROVER),
    "bigcirc" => sym("○", Kind::BinaryOp),
    "bigcup" => sym_p("⋃", Kind::Large, P::LIMITSUNDEROVER),
    "bigcupdot" => sym_p("⨃", Kind::Large, P::LIMITSUNDEROVER),
    "bigodot" => sym_p("⨀", Kind::Large, P::LIMITSUNDEROVER),
    "bigoplus" => sym_p("⨁", Kind::Large, P::LIMITSUNDEROVER),
    "bigotimes" => sym_p("⨂", Kind::Large, P::LIMITSUNDEROVER),
    "bigsqcap" => sym_p("⨅", Kind::Large, P::LIMITSUNDEROVER),
    "bigsqcup" => sym_p("⨆", Kind::Large, P::LIMITSUNDEROVER),
    "bigtimes" => sym_p("⨉", Kind::Large, P::LIMITSUNDEROVER),
    "bigtriangledown" => sym("▽", Kind::Other),
    "bigtriangleup" => sym("△", Kind::Other),
    "biguplus" => sym_p("⨄", Kind::Large, P::LIMITSUNDEROVER),
    "bigvee" => sym_p("⋁", Kind::Large, P::LIMITSUNDEROVER),
    "bigwedge" => sym_p("⋀", Kind::Large, P::LIMITSUNDEROVER),
    "bkarow" => sym("⤍", Kind::Other),
    "blacklozenge" => sym("⧫", Kind::Other),
    "blacksquare" => sym("▪", Kind::Other),
    "blacktriangle" => sym("▴", Kind::Other),
    "blacktriangledown" => sym("▾", Kind::Other),
    "blacktriangleleft" => sym("◂", Kind::Other),
    "blacktriangleright" => sym("▸", Kind::Other),
    "bot" => sym("⊥", Kind::Other),
    "bowtie" => sym("⋈", Kind::Relation),
    "boxast" => sym("⧆", Kind::Other),
    "boxbslash" => sym("⧅", Kind::Other),
    "boxcircle" => sym("⧇", Kind::Other),
    "boxdiag" => sym("⧄", Kind::Other),
    "boxdot" => sym("⊡", Kind::BinaryOp),
    "boxminus" => sym("⊟", Kind::BinaryOp),
    "boxplus" => sym("⊞", Kind::BinaryOp),
    "boxtimes" => sym("⊠", Kind::BinaryOp),
    "btimes" => sym("⨲", Kind::BinaryOp),
    "bullet" => sym("•", Kind::BinaryOp),
    "bumpeq" => sym("≏", Kind::Relation),
    "bumpeqq" => sym("⪮", Kind::Relation),
    "cap" => sym("∩", Kind::BinaryOp),
    "cdot" => sym("⋅", Kind::BinaryOp),
    "cdotp" => sym("·", Kind::BinaryOp),
    "cdots" => sym("⋯", Kind::Operator),
    "chi" => sym("χ", Kind::Alphabetic),
    "circ" => sym("∘", Kind::BinaryOp),
    "circeq" => sym("≗", Kind::Relation),
    "circlearrowleft" => sym_p("↺", Kind::Other, P::HORZ_ARROW),
    "circlearrowright" => sym_p("↻", Kind::Other, P::HORZ_ARROW),
    "circledR" => sym("®", Kind::Other),
    "circledS" => sym("Ⓢ", Kind::Other),
    "circledast" => sym("⊛", Kind::BinaryOp),
    "circledcirc" => sym("⊚", Kind::BinaryOp),
    "circleddash" => sym("⊝", Kind::BinaryOp),
    "clockoint" => sym("⨏", Kind::Large),
    "clubsuit" => sym("♣", Kind::Other),
    "clwintegral" => sym("∱", Kind::Large),
    "colon" => sym(":", Kind::Operator),
    "complement" => sym("∁", Kind::Other),
    "cong" => sym("≅", Kind::Relation),
    "conjquant" => sym_p("⨇", Kind::Large, P::LIMITSUNDEROVER),
    "coprod" => sym_p("∐", Kind::Large, P::LIMITSUNDEROVER),
    "copyright" => sym("©", Kind::Other),
    "cup" => sym("∪", Kind::BinaryOp),
    "cupdot" => sym("⊍", Kind::BinaryOp),
    "curlyeqprec" => sym("⋞", Kind::Relation),
    "curlyeqsucc" => sym("⋟", Kind::Relation),
    "curlyvee" => sym("⋎", Kind::BinaryOp),
    "curlywedge" => sym("⋏", Kind::BinaryOp),
    "curvearrowleft" => sym_p("↶", Kind::Relation, P::HORZ_ARROW),
    "curvearrowright" => sym_p("↷", Kind::Relation, P::HORZ_ARROW),
    "dagger" => sym("†", Kind::Other),
    "daleth" => sym("ℸ", Kind::Alphabetic),
    "dashV" => sym("⫣", Kind::Relation),
    "dashv" => sym("⊣", Kind::Relation),
    "dbkarow" => sym("⤏", Kind::Relation),
    "dblarrowupdown" => sym_p("⇅", Kind::Relation, P::HORZ_ARROW),
    "ddagger" => sym("‡", Kind::Other),
    "ddots" => sym("⋱", Kind::Operator),
    "ddotseq" => sym("⩷", Kind::Relation),
    "degree" => sym("°", Kind::Other),
    "delta" => sym("δ", Kind::Alphabetic),
    "diagdown" => sym("╲", Kind::Other),
    "diagup" => sym("╱", Kind::Other),
    "diamond" => sym("⋄", Kind::BinaryOp),
    "diamondsuit" => sym("♢", Kind::Other),
    "digamma" => sym("ϝ", Kind::Alphabetic),
    "disjquant" => sym_p("⨈", Kind::Large, P::LIMITSUNDEROVER),
    "div" => sym("÷", Kind::BinaryOp),
    "divideontimes" => sym("⋇", Kind::BinaryOp),
    "doteq" => sym("≐", Kind::Relation),
    "dotminus" => sym("∸", Kind::BinaryOp),
    "dotplus" => sym("∔", Kind::BinaryOp),
    "dots" => sym("…", Kind::Operator),
    "downarrow" => sym_p("↓", Kind::Relation, P::VERT_ARROW),
    "downdownarrows" => sym_p("⇊", Kind::Relation, P::VERT_ARROW),
    "downharpoonleft" => sym("⇃", Kind::Relation),
    "downharpoonright" => sym("⇂", Kind::Relation),
    "drbkarrow" => sym_p("⤐", Kind::Relation, P::HORZ_ARROW),
    "dualmap" => sym("⧟", Kind::Relation),
    "ell" => sym("ℓ", Kind::Alphabetic),
    "emdash" => sym("—", Kind::Other),
    "emptyset" => sym("∅", Kind::Other),
    "epsilon" => sym("ϵ", Kind::Alphabetic),
    "eqcirc" => sym("≖", Kind::Relation),
    "eqcolon" => sym("≕", Kind::Relation),
    "eqsim" => sym("≂", Kind::Relation),
    "eqslantgtr" => sym("⪖", Kind::Relation),
    "eqslantless" => sym("⪕", Kind::Relation),
    "equiv" => sym("≡", Kind::Relation),
    "eta" => sym("η", Kind::Alphabetic),
    "eth" => sym("ƪ", Kind::Other),
    "exists" => sym("∃", Kind::Other),
    "fallingdotseq" => sym("≒", Kind::Relation),
    "fdiagovnearrow" => sym("⤯", Kind::Other),
    "fdiagovrdiag" => sym("⤬", Kind::Other),
    "flat" => sym("♭", Kind::Other),
    "forall" => sym("∀", Kind::Other),
    "forks" => sym("⫝̸", Kind::Relation),
    "forksnot" => sym("⫝", Kind::Relation),
    "frown" => sym("⌢", Kind::Relation),
    "gamma" => sym("γ", Kind::Alphabetic),
    "ge" => sym("≥", Kind::Relation),
    "geq" => sym("≥", Kind::Relation),
    "geqq" => sym("≧", Kind::Relation),
    "geqslant" => sym("⩾", Kind::Relation),
    "gets" => sym_p("←", Kind::Relation, P::HORZ_ARROW),
    "gg" => sym("≫", Kind::Relation),
    "ggg" => sym("⋙", Kind::Relation),
    "gimel" => sym("ℷ", Kind::Alphabetic),
    "gnapprox" => sym("⪊", Kind::Relation),
    "gneq" => sym("⪈", Kind::Relation),
    "gneqq" => sym("≩", Kind::Relation),
    "gnsim" => sym("⋧", Kind::Relation),
    "greater" => sym(">", Kind::Relation),
    "gt" => sym(">", Kind::Relation),
    "gtrapprox" => sym("⪆", Kind::Relation),
    "gtrdot" => sym("⋗", Kind::Relation),
    "gtreqless" => sym("⋛", Kind::Relation),
    "gtreqqless" => sym("⪌", Kind::Relation),
    "gtrless" => sym("≷", Kind::Relation),
    "gtrsim" => sym("≳", Kind::Relation),
    "guilsinglleft" => sym("‹", Kind::Opening),
    "guilsinglright" => sym("›", Kind::Closing),
    "gvertneqq" => sym("≩\u{fe00}", Kind::Relation),
    "hbar" => sym("ℏ", Kind::Alphabetic),
    "heartsuit" => sym("♡", Kind::Other),
    "hermitconjmatrix" => sym("⊹", Kind::Other),
    "hksearow" => sym("⤥", Kind::Relation),
    "hkswarow" => sym("⤦", Kind::Relation),
    "hookleftarrow" => sym_p("↩", Kind::Relation, P::HORZ_ARROW),
    "hookrightarrow" => sym_p("↪", Kind::Relation, P::HORZ_ARROW),
    "hslash" => sym("ℏ", Kind::Alphabetic),
    "iff" => sym_p("⟺", Kind::Relation, P::HORZ_ARROW),
    "iiiint" => sym("⨌", Kind::Large),
    "iiint" => sym("∭", Kind::Large),
    "iint" => sym("∬", Kind::Large),
    "image" => sym("⊷", Kind::Relation),
    "imath" => sym("ı", Kind::Alphabetic),
    "impliedby" => sym_p("⟸", Kind::Relation, P::HORZ_ARROW),
    "implies" => sym_p("⟹", Kind::Relation, P::HORZ_ARROW),
    "in" => sym("∈", Kind::Relation),
    "infty" => sym("∞", Kind::Other),
    "int" => sym("∫", Kind::Large),
    "intBar" => sym("⨎", Kind::Large),
    "intbar" => sym("⨍", Kind::Large),
    "intcap" => sym("⨙", Kind::Large),
    "intcup" => sym("⨚", Kind::Large),
    "intercal" => sym("⊺", Kind::BinaryOp),
    "interleave" => sym("⫴", Kind::BinaryOp),
    "intprod" => sym("⨼", Kind::BinaryOp),
    "intprodr" => sym("⨽", Kind::BinaryOp),
    "intx" => sym("⨘", Kind::Large),
    "iota" => sym("ι", Kind::Alphabetic),
    "jmath" => sym("ȷ", Kind::Alphabetic),
    "jupiter" => sym("♃", Kind::Other),
    "kappa" => sym("κ", Kind::Alphabetic),
    "kernelcontraction" => sym("∻", Kind::Other),
    "lVert" => sym("‖", Kind::Opening),
    "lambda" => sym("λ", Kind::Alphabetic),
    "langle" => sym("⟨", Kind::Opening),
    "lazysinv" => sym("∾", Kind::Other),
    "lbrace" => sym("{", Kind::Opening),
    "lbrack" => sym("[", Kind::Opening),
    "lceil" => sym("⌈", Kind::Opening),
    "ldots" => sym("…", Kind::Operator),
    "le" => sym("≤", Kind::Relation),
    "leftarrow" => sym_p("←", Kind::Relation, P::HORZ_ARROW),
    "leftarrowtail" => sym_p("↢", Kind::Relation, P::HORZ_ARROW),
    "leftarrowtriangle" => sym_p("⇽", Kind::Relation, P::HORZ_ARROW),
    "leftharpoondown" => sym("↽", Kind::Relation),
    "leftharpoonup" => sym("↼", Kind::Relation),
    "leftleftarrows" => sym_p("⇇", Kind::Relation, P::HORZ_ARROW),
    "leftrightarrow" => sym_p("↔", Kind::Relation, P::HORZ_ARROW),
    "leftrightarrows" => sym_p("⇆", Kind::Relation, P::HORZ_ARROW),
    "leftrightharpoons" => sym("⇋", Kind::Relation),
    "leftrightsquigarrow" => sym_p("↭", Kind::Relation, P::HORZ_ARROW),
    "leftsquigarrow" => sym_p("↜", Kind::Relation, P::HORZ_ARROW),
    "leftthreetimes" => sym("⋋", Kind::BinaryOp),
    "leq" => sym("≤", Kind::Relation),
    "leqq" => sym("≦", Kind::Relation),
    "leqslant" => sym("⩽", Kind::Relation),
    "less" => sym("<", Kind::Relation),
    "lessapprox" => sym("⪅", Kind::Relation),
    "lessdot" => sym("⋖", Kind::Relation),
    "lesseqgtr" => sym("⋚", Kind::Relation),
    "lesseqqgtr" => sym("⪋", Kind::Relation),
    "lessgtr" => sym("≶", Kind::Relation),
    "lesssim" => sym("≲", Kind::Relation),
    "lfloor" => sym("⌊", Kind::Opening),
    "lhd" => sym("⊲", Kind::BinaryOp),
    "ll" => sym("≪", Kind::Relation),
    "llcorner" => sym("⌞", Kind::Opening),
    "lmoustache" => sym("⎰", Kind::Other),
    "lnapprox" => sym("⪉", Kind::Relation),
    "lneq" => sym("⪇", Kind::Relation),
    "lneqq" => sym("≨", Kind::Relation),
    "lnot" => sym("¬", Kind::Other),
    "lnsim" => sym("⋦", Kind::Relation),
    "longleftarrow" => sym_p("⟵", Kind::Relation, P::HORZ_ARROW),
    "longleftrightarrow" => sym_p("⟷", Kind::Relation, P::HORZ_ARROW),
    "longmapsto" => sym_p("⟼", Kind::Relation, P::HORZ_ARROW),
    "longrightarrow" => sym_p("⟶", Kind::Relation, P::HORZ_ARROW),
    "looparrowleft" => sym_p("↫", Kind::Relation, P::HORZ_ARROW),
    "looparrowright" => sym_p("↬", Kind::Relation, P::HORZ_ARROW),
    "lowint" => sym("⨜", Kind::Large),
    "lozenge" => sym("◊", Kind::Other),
    "lrcorner" => sym("⌟", Kind::Closing),
    "lt" => sym("<", Kind::Relation),
    "ltimes" => sym("⋉", Kind::BinaryOp),
    "lvert" => sym("|", Kind::Opening),
    "lvertneqq" => sym("≨\u{fe00}", Kind::Relation),
    "mapsto" => sym_p("↦", Kind::Relation, P::HORZ_ARROW),
    "measuredangle" => sym("∡", Kind::Other),
    "mercury" => sym("☿", Kind::Other),
    "mho" => sym("℧", Kind::Other),
    "mid" => sym("∣", Kind::Relation),
    "minusdot" => sym("⨪", Kind::BinaryOp),
    "mlcp" => sym("⫛", Kind::Relation),
    "models" => sym("⊧", Kind::Relation),
    "mp" => sym("∓", Kind::BinaryOp),
    "mu" => sym("μ", Kind::Alphabetic),
    "multimap" => sym("⊸", Kind::Relation),
    "nBumpeq" => sym("≎\u{0338}", Kind::Relation),
    "nLeftarrow" => sym_p("⇍", Kind::Relation, P::HORZ_ARROW),
    "nRightarrow" => sym_p("⇏", Kind::Relation, P::HORZ_ARROW),
    "nVDash" => sym("⊯", Kind::Relation),
    "nVdash" => sym("⊮", Kind::Relation),
    "nabla" => sym("∇", Kind::Other),
    "napprox" => sym("≉", Kind::Relation),
    "natural" => sym("♮", Kind::Other),
    "nbumpeq" => sym("≏\u{0338}", Kind::Relation),
    "ncong" => sym("≇", Kind::Relation),
    "ne" => sym("≠", Kind::Relation),
    "nearrow" => sym("↗", Kind::Relation),
    "neg" => sym("¬", Kind::Other),
    "neovnwarrow" => sym("⤱", Kind::Other),
    "neovsearrow" => sym("⤮", Kind::Other),
    "neptune" => sym("♆", Kind::Other),
    "neq" => sym("≠", Kind::Relation),
    "neqsim" => sym("≂\u{0338}", Kind::Relation),
    "nequiv" => sym("≢", Kind::Relation),
    "nexists" => sym("∄", Kind::Other),
    "ngeq" => sym("≱", Kind::Relation),
    "ngeqslant" => sym("⩾\u{0338}", Kind::Relation),
    "ngtr" => sym("≯", Kind::Relation),
    "ni" => sym("∋", Kind::Relation),
    "nleftarrow" => sym_p("↚", Kind::Relation, P::HORZ_ARROW),
    "nleftrightarrow" => sym_p("↮", Kind::Relation, P::HORZ_ARROW),
    "nleq" => sym("≰", Kind::Relation),
    "nleqslant" => sym("⩽\u{0338}", Kind::Relation),
    "nless" => sym("≮", Kind::Relation),
    "nmid" => sym("∤", Kind::Relation),
    "nolinebreak" => sym("\u{2060}", Kind::Other),
    "notgreaterless" => sym("≹", Kind::Relation),
    "notin" => sym("∉", Kind::Relation),
    "notlessgreater" => sym("≸", Kind::Relation),
    "nparallel" => sym("∦", Kind::Relation),
    "nprec" => sym("⊀", Kind::Relation),
    "npreceq" => sym("⪯\u{0338}", Kind::Relation),
    "nprecsim" => sym("≾\u{0338}", Kind::Relation),
    "nrightarrow" => sym_p("↛", Kind::Relation, P::HORZ_ARROW),
    "nsim" => sym("≁", Kind::Relation),
    "nsime" => sym("≄", Kind::Relation),
    "nsubset" => sym("⊄", Kind::Relation),
    "nsubseteq" => sym("⊈", Kind::Relation),
    "nsubseteqq" => sym("⫅\u{0338}", Kind::Relation),
    "nsucc" => sym("⊁", Kind::Relation),
    "nsucceq" => sym("⪰\u{0338}", Kind::Relation),
    "nsuccsim" => sym("≿\u{0338}", Kind::Relation),
    "nsupset" => sym("⊅", Kind::Relation),
    "nsupseteq" => sym("⊉", Kind::Relation),
    "nsupseteqq" => sym("⫆\u{0338}", Kind::Relation),
    "ntriangleleft" => sym("⋪", Kind::Relation),
    "ntrianglelefteq" => sym("⋬", Kind::Relation),
    "ntriangleright" => sym("⋫", Kind::Relation),
    "ntrianglerighteq" => sym("⋭", Kind::Relation),
    "nu" => sym("ν", Kind::Alphabetic),
    "nvDash" => sym("⊭", Kind::Relation),
    "nvdash" => sym("⊬", Kind::Relation),
    "nwarrow" => sym("↖", Kind::Relation),
    "nwovnearrow" => sym("⤲", Kind::Other),
    "obar" => sym("⌽", Kind::BinaryOp),
    "obslash" => sym("⦸", Kind::BinaryOp),
    "odot" => sym("⊙", Kind::BinaryOp),
    "oiiint" => sym("∰", Kind::Large),
    "oiint" => sym("∯", Kind::Large),
    "oint" => sym("∮", Kind::Large),
    "omega" => sym("ω", Kind::Alphabetic),
    "ominus" => sym("⊖", Kind::BinaryOp),
    "openbracketleft" => sym("〚", Kind::Opening),
    "openbracketright" => sym("〛", Kind::Closing),
    "oplus" => sym("⊕", Kind::BinaryOp),
    "original" => sym("⊶", Kind::Relation),
    "oslash" => sym("⊘", Kind::BinaryOp),
    "otimes" => sym("⊗", Kind::BinaryOp),
    "parallel" => sym("∥", Kind::Relation),
    "partial" => sym("∂", Kind::Other),
    "partialmeetcontraction" => sym("⪣", Kind::Relation),
    "perp" => sym("⊥", Kind::Relation),
    "perspcorrespond" => sym("⩞", Kind::BinaryOp),
    "phi" => sym("ϕ", Kind::Alphabetic),
    "pi" => sym("π", Kind::Alphabetic),
    "pitchfork" => sym("⋔", Kind::Other),
    "plusdot" => sym("⨥", Kind::BinaryOp),
    "pm" => sym("±", Kind::BinaryOp),
    "prec" => sym("≺", Kind::Relation),
    "precapprox" => sym("⪷", Kind::Relation),
    "preccurlyeq" => sym("≼", Kind::Relation),
    "preceq" => sym("⪯", Kind::Relation),
    "precnapprox" => sym("⪹", Kind::Relation),
    "precneqq" => sym("⪵", Kind::Relation),
    "precnsim" => sym("⋨", Kind::Relation),
    "precsim" => sym("≾", Kind::Relation),
    "prime" => sym("′", Kind::Other),
    "prod" => sym_p("∏", Kind::Large, P::LIMITSUNDEROVER),
    "propto" => sym("∝", Kind::Relation),
    "psi" => sym("ψ", Kind::Alphabetic),
    "questeq" => sym("≟", Kind::Relation),
    "rVert" => sym("‖", Kind::Closing),
    "rangle" => sym("⟩", Kind::Closing),
    "rbrace" => sym("}", Kind::Closing),
    "rbrack" => sym("]", Kind::Closing),
    "rceil" => sym("⌉", Kind::Closing),
    "rdiagovfdiag" => sym("⤫", Kind::Other),
    "rdiagovsearrow" => sym("⤰", Kind::Other),
    "recorder" => sym("⌕", Kind::Other),
    "rfloor" => sym("⌋", Kind::Closing),
    "rhd" => sym("⊳", Kind::BinaryOp),
    "rho" => sym("ρ", Kind::Alphabetic),
    "rightangle" => sym("∟", Kind::Other),
    "rightanglearc" => sym("⊾", Kind::Other),
    "rightarrow" => sym_p("→", Kind::Relation, P::HORZ_ARROW),
    "rightarrowtail" => sym_p("↣", Kind::Relation, P::HORZ_ARROW),
    "rightarrowtriangle" => sym_p("⇾", Kind::Relation, P::HORZ_ARROW),
    "rightharpoondown" => sym("⇁", Kind::Relation),
    "rightharpoonup" => sym("⇀", Kind::Relation),
    "rightleftarrows" => sym_p("⇄", Kind::Relation, P::HORZ_ARROW),
    "rightleftharpoons" => sym("⇌", Kind::Relation),
    "rightmoon" => sym("☾", Kind::Other),
    "rightrightarrows" => sym_p("⇉", Kind::Relation, P::HORZ_ARROW),
    "rightsquigarrow" => sym_p("↝", Kind::Relation, P::HORZ_ARROW),
    "rightthreetimes" => sym("⋌", Kind::BinaryOp),
    "risingdotseq" => sym("≓", Kind::Relation),
    "rmoustache" => sym("⎱", Kind::Other),
    "rtimes" => sym("⋊", Kind::BinaryOp),
    "rvert" => sym("|", Kind::Closing),
    "saturn" => sym("♄", Kind::Other),
    "searrow" => sym("↘", Kind::Relation),
    "sector" => sym("⌔", Kind::Other),
    "seovnearrow" => sym("⤭", Kind::Other),
    "setminus" => sym("∖", Kind::BinaryOp),
    "sharp" => sym("♯", Kind::Other),
    "shuffle" => sym("⧢", Kind::Other),
    "sigma" => sym("σ", Kind::Alphabetic),
    "sim" => sym("∼", Kind::Relation),
    "simeq" => sym("≃", Kind::Relation),
    "smile" => sym("⌣", Kind::Relation),
    "spadesuit" => sym("♠", Kind::Other),
    "sphericalangle" => sym("∢", Kind::Other),
    "sqcap" => sym("⊓", Kind::BinaryOp),
    "sqcup" => sym("⊔", Kind::BinaryOp),
    "sqrint" => sym("⨖", Kind::Large),
    "sqsubset" => sym("⊏", Kind::Relation),
    "sqsubseteq" => sym("⊑", Kind::Relation),
    "sqsupset" => sym("⊐", Kind::Relation),
    "sqsupseteq" => sym("⊒", Kind::Relation),
    "square" => sym("□", Kind::Other),
    "star" => sym("⋆", Kind::BinaryOp),
    "starequal" => sym("≛", Kind::Relation),
    "sterling" => sym("£", Kind::Other),
    "subset" => sym("⊂", Kind::Relation),
    "subseteq" => sym("⊆", Kind::Relation),
    "subseteqq" => sym("⫅", Kind::Relation),
    "subsetneq" => sym("⊊", Kind::Relation),
    "subsetneqq" => sym("⫋", Kind::Relation),
    "succ" => sym("≻", Kind::Relation),
    "succapprox" => sym("⪸", Kind::Relation),
    "succcurlyeq" => sym("≽", Kind::Relation),
    "succeq" => sym("⪰", Kind::Relation),
    "succnapprox" => sym("⪺", Kind::Relation),
    "succneqq" => sym("⪶", Kind::Relation),
    "succnsim" => sym("⋩", Kind::Relation),
    "succsim" => sym("≿", Kind::Relation),
    "sum" => sym_p("∑", Kind::Large, P::LIMITSUNDEROVER),
    "supset" => sym("⊃", Kind::Relation),
    "supseteq" => sym("⊇", Kind::Relation),
    "supseteqq" => sym("⫆", Kind::Relation),
    "supsetneq" => sym("⊋", Kind::Relation),
    "supsetneqq" => sym("⫌", Kind::Relation),
    "surd" => sym("√", Kind::Other),
    "swarrow" => sym("↙", Kind::Relation),
    "tau" => sym("τ", Kind::Alphabetic),
    "textTheta" => sym("ϴ", Kind::Alphabetic),
    "therefore" => sym("∴", Kind::Other),
    "theta" => sym("θ", Kind::Alphabetic),
    "tildetrpl" => sym("≋", Kind::Relation),
    "times" => sym("×", Kind::BinaryOp),
    "to" => sym_p("→", Kind::Relation, P::HORZ_ARROW),
    "toea" => sym("⤨", Kind::Relation),
    "tona" => sym("⤧", Kind::Relation),
    "top" => sym("⊤", Kind::Other),
    "tosa" => sym("⤩", Kind::Relation),
    "towa" => sym("⤪", Kind::Relation),
    "triangle" => sym("△", Kind::Other),
    "triangledown" => sym("▿", Kind::Other),
    "triangleleft" => sym("◃", Kind::Other),
    "trianglelefteq" => sym("⊴", Kind::Relation),
    "triangleq" => sym("≜", Kind::Relation),
    "triangleright" => sym("▹", Kind::Other),
    "trianglerighteq" => sym("⊵", Kind::Relation),
    "twoheadleftarrow" => sym_p("↞", Kind::Relation, P::HORZ_ARROW),
    "twoheadrightarrow" => sym_p("↠", Kind::Relation, P::HORZ_ARROW),
    "twoheadrightarrowtail" => sym_p("⤖", Kind::Relation, P::HORZ_ARROW),
    "ulcorner" => sym("⌜", Kind::Opening),
    "uparrow" => sym_p("↑", Kind::Relation, P::VERT_ARROW),
    "updownarrow" => sym_p("↕", Kind::Relation, P::VERT_ARROW),
    "upharpoonleft" => sym("↾", Kind::Relation),
    "upharpoonright" => sym("↿", Kind::Relation),
    "upint" => sym("⨛", Kind::Large),
    "uplus" => sym("⊎", Kind::BinaryOp),
    "upsilon" => sym("υ", Kind::Alphabetic),
    "upuparrows" => sym_p("⇈", Kind::Relation, P::VERT_ARROW),
    "uranus" => sym("♅", Kind::Other),
    "urcorner" => sym("⌝", Kind::Closing),
    "vDash" => sym("⊨", Kind::Relation),
    "varepsilon" => sym("ɛ", Kind::Other),
    "varkappa" => sym("ϰ", Kind::Alphabetic),
    "varnothing" => sym("∅", Kind::Other),
    "varphi" => sym("φ", Kind::Alphabetic),
    "varpi" => sym("ϖ", Kind::Alphabetic),
    "varrho" => sym("ϱ", Kind::Alphabetic),
    "varsigma" => sym("ς", Kind::Alphabetic),
    "varsubsetneqq" => sym("⊊\u{fe00}", Kind::Relation),
    "varsupsetneq" => sym("⊋\u{fe00}", Kind::Relation),
    "vartheta" => sym("ϑ", Kind::Alphabetic),
    "vartriangle" => sym("▵", Kind::Other),
    "vartriangleleft" => sym("⊲", Kind::Relation),
    "vartriangleright" => sym("⊳", Kind::Relation),
    "vdash" => sym("⊢", Kind::Relation),
    "vdots" => sym("⋮", Kind::Operator),
    "vee" => sym("∨", Kind::BinaryOp),
    "veebar" => sym("⊻", Kind::BinaryOp),
    "vert" => sym("|", Kind::Other),
    "verymuchless" => sym("⋘", Kind::Relation),
    "wedge" => sym("∧", Kind::BinaryOp),
    "wedgeq" => sym("≙", Kind::Relation),
    "wp" => sym("℘", Kind::Alphabetic),
    "wr" => sym("≀", Kind::BinaryOp),
    "xi" => sym("ξ", Kind::Alphabetic),
    "yen" => sym("¥", Kind::Other),
    "zeta" => sym("ζ", Kind::Alphabetic),
};
