//! Command dispatcher
//!
//! Resolves a `\command` token against, in order: definition primitives,
//! the TeX logos, runtime macros, identifier commands, the symbol table,
//! precompiled subtrees, math alphabets, fixed spaces, style switches,
//! structural commands with arguments, explicit kerns and accents. Anything
//! left is an unknown command.

use lazy_static::lazy_static;
use regex::Regex;

use super::context::ParseContext;
use super::engine::lexer::{post_process_tokens, stringify_tokens};
use super::engine::macros::{
    collect_args, expand_single, Macro, MAX_DYNAMIC_EXPANSIONS, MAX_EXPANSION_DEPTH,
};
use super::engine::primitives::{parse_definition, DefinitionKind};
use super::engine::{expand_macros, Expr, ExprKind, ExprQueue, Token, TokenKind};
use super::math::Parser;
use super::table::process_table;
use crate::core::mathml::{stretchy_op, MmlNode, NodeProperties};
use crate::data::maps::{
    em_width, CommandSpec, ACCENTS, ACCENTS_BELOW, COMMAND_ARGS, IDENTIFIERS, MATH_VARIANTS,
    NEGATIONS, SPACE_WIDTHS, SWITCHES, TEXT_VARIANTS,
};
use crate::data::symbols::{self, Symbol, SymbolKind};
use crate::utils::error::TexError;

lazy_static! {
    /// An explicit TeX dimension such as `-3mu` or `0.5em`
    static ref DIMENSION: Option<Regex> =
        Regex::new(r"^([+-]?\d*\.?\d+)\s*(em|ex|pt|mu|px|cm|mm|in)$").ok();
}

/// Token elements; only these carry a `mathvariant`
const TOKEN_ELEMENTS: &[&str] = &["mi", "mn", "mo", "mtext"];

/// Build the node for command token `tok`. Arguments are popped from `queue`.
pub fn process_command(
    p: &mut Parser<'_>,
    tok: &Token,
    queue: &mut ExprQueue<'_>,
    ctx: ParseContext,
) -> Option<MmlNode> {
    let name = tok.value.as_str();

    if let Some(kind) = DefinitionKind::from_command(name) {
        return define_macro(p, kind, queue);
    }
    match name {
        "LaTeX" => return Some(tex_logo(true)),
        "TeX" => return Some(tex_logo(false)),
        _ => {}
    }
    if let Some(m) = p.macros.get(name).filter(|m| m.dynamic).cloned() {
        return Some(expand_dynamic(p, name, &m, queue, ctx));
    }
    if let Some(&props) = IDENTIFIERS.get(name) {
        let mut n = MmlNode::new("mi").with_props(props).with_tok(tok);
        match symbols::lookup(name) {
            Some(sym) => n.text = sym.ch.to_string(),
            None => {
                n.text = name.to_string();
                n.set_attr("lspace", "0.11111em");
            }
        }
        ctx.apply_variant(&mut n);
        n.set_attribs_from_properties();
        return Some(n);
    }
    if let Some(sym) = symbols::lookup(name) {
        return Some(symbol_node(sym, tok, ctx));
    }
    if let Some(n) = precompiled(name) {
        return Some(n.with_tok(tok));
    }
    if let Some(&variant) = MATH_VARIANTS.get(name) {
        return Some(math_variant(p, name, variant, queue, ctx));
    }
    if let Some(&width) = SPACE_WIDTHS.get(name) {
        let mut n = MmlNode::new("mspace").with_tok(tok);
        if name == "\\" {
            n.set_attr("linebreak", "newline");
        } else {
            n.set_attr("width", em_width(width));
        }
        return Some(n);
    }
    if SWITCHES.contains_key(name) {
        return Some(style_switch(p, name, queue, ctx));
    }

    let node = if let Some(&spec) = COMMAND_ARGS.get(name) {
        command_with_args(p, tok, spec, queue, ctx)
    } else if matches!(name, "kern" | "mkern") {
        match pop_dimension(queue) {
            Some(dim) => space_node(name, &dim),
            None => MmlNode::error(name, format!("{} expects a dimension", name)),
        }
    } else if let Some(&accent) = ACCENTS.get(name) {
        accent_node(p, "mover", accent, queue, ctx)
    } else if let Some(&accent) = ACCENTS_BELOW.get(name) {
        accent_node(p, "munder", accent, queue, ctx)
    } else if p.options.unknown_commands_as_ops {
        log::info!("unknown command \\{}, treated as an operator", name);
        MmlNode::leaf("mo", name)
    } else {
        MmlNode::error(name, format!("unknown command \\{}", name))
    };
    Some(finish(node, tok, ctx))
}

fn finish(mut node: MmlNode, tok: &Token, ctx: ParseContext) -> MmlNode {
    node.tok = tok.clone();
    if TOKEN_ELEMENTS.contains(&node.tag.as_str()) && node.attr("mathvariant").is_none() {
        ctx.apply_variant(&mut node);
    }
    node.set_attribs_from_properties();
    node
}

/// Next argument expression; a cell or row break never is one
fn pop_arg<'t>(queue: &mut ExprQueue<'t>) -> Option<Expr<'t>> {
    if queue.peek_argument()?.is_break() {
        return None;
    }
    queue.pop_argument()
}

fn arg_string(arg: &Expr<'_>) -> String {
    stringify_tokens(arg.arg_tokens()).trim().to_string()
}

// =============================================================================
// Macros
// =============================================================================

/// `\newcommand` and friends. Returns an error node, or `None` on success.
fn define_macro(p: &mut Parser<'_>, kind: DefinitionKind, queue: &mut ExprQueue<'_>) -> Option<MmlNode> {
    let label = format!("\\{}", kind.command_name());
    let def = match parse_definition(kind, queue) {
        Ok(def) => def,
        Err(err) => {
            log::warn!("{}", err);
            return Some(MmlNode::error(label, err.to_string()));
        }
    };
    if def.is_recursive() {
        log::warn!("recursive definition of \\{} ignored", def.name);
        return Some(MmlNode::error(label, "recursive macro definition"));
    }
    if !kind.overwrites() && p.macros.contains_key(&def.name) {
        log::warn!(
            "macro \\{} was previously defined, the new definition is ignored",
            def.name
        );
        return None;
    }
    let (name, m) = def.into_macro();
    p.macros.insert(name, m);
    None
}

/// Expand a runtime macro at its call site and parse the result
fn expand_dynamic(
    p: &mut Parser<'_>,
    name: &str,
    m: &Macro,
    queue: &mut ExprQueue<'_>,
    ctx: ParseContext,
) -> MmlNode {
    if p.depth >= MAX_EXPANSION_DEPTH || p.expansions >= MAX_DYNAMIC_EXPANSIONS {
        let err = TexError::cycle(name);
        log::warn!("{}", err);
        return MmlNode::error(name, err.to_string());
    }
    p.expansions += 1;
    let expanded = collect_args(name, m, queue)
        .and_then(|args| expand_single(name, m, &args))
        .and_then(post_process_tokens)
        .and_then(|tokens| expand_macros(tokens, &*p.macros));
    match expanded {
        Ok(tokens) => {
            p.depth += 1;
            let node = p.parse_or_empty(&tokens, ctx);
            p.depth -= 1;
            node
        }
        Err(err) => {
            log::warn!("{}", err);
            MmlNode::error(name, format!("error expanding macro: {}", err))
        }
    }
}

// =============================================================================
// Symbols and fixed subtrees
// =============================================================================

fn symbol_node(sym: &Symbol, tok: &Token, ctx: ParseContext) -> MmlNode {
    let mut n = MmlNode::leaf("mi", sym.ch)
        .with_props(sym.properties)
        .with_tok(tok);
    match sym.kind {
        SymbolKind::Large => {
            n.tag = "mo".to_string();
            n.properties |= NodeProperties::LARGEOP | NodeProperties::MOVABLELIMITS;
        }
        SymbolKind::Alphabetic => {}
        SymbolKind::Other => {
            if tok.is(TokenKind::FENCE) {
                n.tag = "mo".to_string();
            }
        }
        _ => n.tag = "mo".to_string(),
    }
    if ctx.contains(ParseContext::TABLE)
        && n.has(NodeProperties::HORZ_ARROW | NodeProperties::VERT_ARROW)
    {
        n.set_true("stretchy");
    }
    let ctx = if n.has(NodeProperties::SYM_UPRIGHT) && ctx.variant().is_empty() {
        ctx.with_variant(ParseContext::VAR_NORMAL)
    } else {
        ctx
    };
    ctx.apply_variant(&mut n);
    n.set_attribs_from_properties();
    n
}

/// The `\TeX` and `\LaTeX` logos
fn tex_logo(latex: bool) -> MmlNode {
    fn lowered(text: &str, voffset: &str, padding: &str) -> MmlNode {
        MmlNode::new("mpadded")
            .with_attr("voffset", voffset)
            .with_attr("style", padding)
            .with_child(
                MmlNode::new("mstyle")
                    .with_attr("scriptlevel", "0")
                    .with_attr("displaystyle", "false")
                    .with_child(MmlNode::leaf("mtext", text)),
            )
    }
    fn kern(width: &str) -> MmlNode {
        MmlNode::new("mspace")
            .with_attr("width", width)
            .with_attr("style", format!("margin-left:{};", width))
    }

    let mut row = MmlNode::new("mrow");
    if latex {
        row.append(MmlNode::leaf("mtext", "L"));
        row.append(MmlNode::new("mspace").with_attr("style", "margin-left:-0.35em;"));
        row.append(lowered("A", "0.2em", "padding:0.2em 0 0 0;"));
        row.append(kern("-0.15em"));
    }
    row.append(MmlNode::leaf("mtext", "T"));
    row.append(kern("-0.1667em"));
    row.append(lowered("E", "-0.2155em", "padding:0 0 0.2155em 0;"));
    row.append(kern("-0.125em"));
    row.append(MmlNode::leaf("mtext", "X"));
    row
}

/// Operators with a fixed layout, built fresh for every use
fn precompiled(name: &str) -> Option<MmlNode> {
    let limits = NodeProperties::MOVABLELIMITS | NodeProperties::LIMITSUNDEROVER;
    let node = match name {
        "varinjlim" | "varprojlim" => {
            let arrow = if name == "varinjlim" { "→" } else { "←" };
            MmlNode::new("munder").with_props(limits).with_children([
                MmlNode::leaf("mo", "lim"),
                MmlNode::leaf("mo", arrow).with_attr("stretchy", "true"),
            ])
        }
        "varliminf" => MmlNode::new("mpadded").with_props(limits).with_child(
            MmlNode::leaf("mo", "lim")
                .with_css("padding", "0 0 0.1em 0")
                .with_css("border-bottom", "0.065em solid"),
        ),
        "varlimsup" => MmlNode::new("mpadded").with_props(limits).with_child(
            MmlNode::leaf("mo", "lim")
                .with_css("padding", "0.1em 0 0 0")
                .with_css("border-top", "0.065em solid"),
        ),
        _ => return None,
    };
    Some(node)
}

// =============================================================================
// Variants and switches
// =============================================================================

fn math_variant(
    p: &mut Parser<'_>,
    name: &str,
    variant: ParseContext,
    queue: &mut ExprQueue<'_>,
    ctx: ParseContext,
) -> MmlNode {
    let ctx = ctx.with_variant(variant);
    let wrapper = (name == "mathrm").then(|| MmlNode::new("mpadded").with_attr("lspace", "0"));
    let Some(arg) = pop_arg(queue) else {
        log::warn!("expected an argument for math variant \\{}", name);
        return wrapper.unwrap_or_else(|| MmlNode::new("mrow"));
    };
    match wrapper {
        Some(wrapper) => p.parse_into(arg.arg_tokens(), ctx, wrapper),
        None => p.parse_arg(&arg, ctx),
    }
}

/// Declarations such as `\displaystyle` or `\color{red}` apply to the rest
/// of the current cell
fn style_switch(p: &mut Parser<'_>, name: &str, queue: &mut ExprQueue<'_>, ctx: ParseContext) -> MmlNode {
    let Some(switch) = SWITCHES.get(name) else {
        return MmlNode::error(name, format!("unknown command \\{}", name));
    };
    let mut body = queue.split_off_until_break();
    let mut style = MmlNode::new("mstyle");
    if name == "color" {
        match body.pop_argument() {
            Some(color) => {
                style.set_attr("mathcolor", arg_string(&color));
            }
            None => return MmlNode::error(name, format!("{} expects an argument", name)),
        }
    }
    for (key, value) in switch.attrs {
        style.set_attr(key, *value);
    }
    p.parse_queue(body, ctx.with_switch(switch.context), Some(style))
        .unwrap_or_default()
}

// =============================================================================
// Commands with arguments
// =============================================================================

fn command_with_args(
    p: &mut Parser<'_>,
    tok: &Token,
    spec: CommandSpec,
    queue: &mut ExprQueue<'_>,
    ctx: ParseContext,
) -> MmlNode {
    let name = tok.value.as_str();
    if queue.peek_argument().map_or(true, Expr::is_break) {
        return MmlNode::error(name, format!("{} requires one or more arguments", name));
    }
    let opt = if spec.optc > 0 { queue.pop_options() } else { None };
    let mut args = Vec::with_capacity(spec.argc);
    while args.len() < spec.argc {
        match pop_arg(queue) {
            Some(arg) => args.push(arg),
            None => break,
        }
    }
    if args.len() != spec.argc {
        let err = TexError::arg_count(name, spec.argc, args.len());
        return MmlNode::error(name, err.to_string());
    }
    let star = tok.is(TokenKind::STAR);

    match name {
        "multirow" | "multicolumn" => {
            let attr = if name == "multirow" { "rowspan" } else { "columnspan" };
            let mut n = p.parse_arg(&args[2], ctx);
            n.set_attr(attr, arg_string(&args[0]));
            n
        }
        "prescript" => {
            let base = p.parse_arg(&args[2], ctx);
            let sub = p.parse_arg(&args[1], ctx);
            let sup = p.parse_arg(&args[0], ctx);
            MmlNode::new("mmultiscripts").with_children([
                base,
                MmlNode::new("none"),
                MmlNode::new("none"),
                MmlNode::new("mprescripts"),
                sub,
                sup,
            ])
        }
        "sideset" => {
            let base = p.parse_arg(&args[2], ctx);
            let right = side_scripts(p, args[1].arg_tokens(), ctx);
            let left = side_scripts(p, args[0].arg_tokens(), ctx);
            MmlNode::new("mmultiscripts")
                .with_props(NodeProperties::LIMITSUNDEROVER)
                .with_child(base)
                .with_children(right)
                .with_child(MmlNode::new("mprescripts"))
                .with_children(left)
        }
        "textcolor" | "class" => {
            let attr = if name == "textcolor" { "mathcolor" } else { "class" };
            let mut n = p.parse_arg(&args[1], ctx);
            n.set_attr(attr, arg_string(&args[0]));
            n
        }
        "overset" | "underset" | "stackrel" => {
            let mut base = p.parse_arg(&args[1], ctx);
            if base.tag == "mo" {
                base.set_true("stretchy");
            }
            let embellishment = p.parse_arg(&args[0], ctx);
            let tag = if name == "underset" { "munder" } else { "mover" };
            MmlNode::new("mrow").with_child(MmlNode::new(tag).with_children([base, embellishment]))
        }
        "raisebox" => {
            let wrapper = MmlNode::new("mpadded").with_attr("voffset", arg_string(&args[0]));
            p.parse_into(args[1].arg_tokens(), ctx, wrapper)
        }
        "cancel" | "bcancel" | "xcancel" => {
            let notation = match name {
                "cancel" => "updiagonalstrike",
                "bcancel" => "downdiagonalstrike",
                _ => "updiagonalstrike downdiagonalstrike",
            };
            let wrapper = MmlNode::new("menclose").with_attr("notation", notation);
            p.parse_into(args[0].arg_tokens(), ctx, wrapper)
        }
        "boxed" | "fbox" => {
            let ctx = if name == "fbox" { ctx | ParseContext::TEXT } else { ctx };
            let wrapper = MmlNode::new("menclose").with_attr("notation", "box");
            p.parse_into(args[0].arg_tokens(), ctx, wrapper)
        }
        "phantom" => p.parse_into(args[0].arg_tokens(), ctx, MmlNode::new("mphantom")),
        "mathop" => MmlNode::leaf("mo", arg_string(&args[0]))
            .with_attr("rspace", "0")
            .with_props(NodeProperties::LIMITSUNDEROVER | NodeProperties::MOVABLELIMITS),
        "operatorname" => {
            let text: String = args[0]
                .arg_tokens()
                .iter()
                .filter(|t| !t.is(TokenKind::COMMAND))
                .map(|t| t.value.as_str())
                .collect();
            let n = MmlNode::leaf("mi", text.trim()).with_attr("lspace", "0.11111em");
            if star {
                n.with_props(NodeProperties::LIMITSUNDEROVER | NodeProperties::MOVABLELIMITS)
            } else {
                n
            }
        }
        "bmod" | "pmod" => {
            let arg = p.parse_arg(&args[0], ctx);
            if name == "pmod" {
                MmlNode::new("mrow").with_children([
                    MmlNode::new("mspace").with_attr("width", "0.7em"),
                    MmlNode::leaf("mo", "("),
                    MmlNode::leaf("mo", "mod").with_attr("lspace", "0"),
                    arg,
                    MmlNode::leaf("mo", ")"),
                ])
            } else {
                MmlNode::new("mrow").with_children([
                    MmlNode::new("mspace").with_attr("width", "0.5em"),
                    MmlNode::leaf("mo", "mod"),
                    arg,
                ])
            }
        }
        "substack" => {
            let mut n = p.parse_into(args[0].arg_tokens(), ctx | ParseContext::TABLE, MmlNode::new("mrow"));
            process_table(&mut n);
            n.set_attr("rowspacing", "0");
            n.set_false("displaystyle");
            n
        }
        "overbrace" | "underbrace" => {
            let annotation = p.parse_arg(&args[0], ctx);
            let (tag, brace) = if name == "overbrace" {
                ("mover", "⏞")
            } else {
                ("munder", "⏟")
            };
            MmlNode::new(tag)
                .with_props(NodeProperties::LIMITSUNDEROVER)
                .with_children([annotation, MmlNode::leaf("mo", brace).with_attr("stretchy", "true")])
        }
        "not" => negation(p, &args[0], ctx),
        "sqrt" => {
            let radicand = p.parse_arg(&args[0], ctx);
            match opt {
                Some(index) => MmlNode::new("mroot").with_children([radicand, p.parse_arg(&index, ctx)]),
                None => MmlNode::new("msqrt").with_child(radicand),
            }
        }
        "text" => MmlNode::leaf("mtext", stringify_tokens(args[0].arg_tokens())),
        "mbox" | "textrm" | "textbf" | "textit" | "textsf" | "texttt" => {
            let variant = TEXT_VARIANTS.get(name).copied().unwrap_or_default();
            p.parse_arg(&args[0], (ctx | ParseContext::TEXT).with_variant(variant))
        }
        "xrightarrow" | "xleftarrow" => {
            let glyph = if name == "xrightarrow" { "→" } else { "←" };
            let arrow = MmlNode::leaf("mo", glyph).with_attr("stretchy", "true");
            let above = p.parse_arg(&args[0], ctx);
            match opt {
                Some(below) => {
                    let below = p.parse_arg(&below, ctx);
                    MmlNode::new("munderover").with_children([arrow, below, above])
                }
                None => MmlNode::new("mover").with_children([arrow, above]),
            }
        }
        "hspace" | "mspace" => space_node(name, &arg_string(&args[0])),
        "frac" | "cfrac" | "dfrac" | "tfrac" | "binom" | "tbinom" => {
            let numerator = p.parse_arg(&args[0], ctx);
            let denominator = p.parse_arg(&args[1], ctx);
            fraction(name, numerator, denominator)
        }
        _ => MmlNode::error(name, format!("unknown command \\{}", name)),
    }
}

/// `\frac` and its variants around already parsed operands
pub fn fraction(name: &str, numerator: MmlNode, denominator: MmlNode) -> MmlNode {
    let frac = MmlNode::new("mfrac").with_children([numerator, denominator]);
    match name {
        "cfrac" | "dfrac" => frac.with_attr("displaystyle", "true"),
        "tfrac" => frac.with_attr("displaystyle", "false"),
        "binom" | "tbinom" => {
            let frac = frac.with_attr("linethickness", "0");
            let row = MmlNode::new("mrow").with_children([stretchy_op("("), frac, stretchy_op(")")]);
            if name == "tbinom" {
                row.with_attr("displaystyle", "false")
            } else {
                row
            }
        }
        _ => frac,
    }
}

/// Interleaved (subscript, superscript) pairs of a `\sideset` side
fn side_scripts(p: &mut Parser<'_>, tokens: &[Token], ctx: ParseContext) -> Vec<MmlNode> {
    let mut subs = Vec::new();
    let mut sups = Vec::new();
    let mut last = None;
    let mut queue = ExprQueue::from_tokens(tokens);
    while let Some(expr) = queue.pop_argument() {
        let Some(mark) = expr
            .first()
            .filter(|t| expr.kind == ExprKind::Single && t.is(TokenKind::SUBSUP))
            .map(|t| t.value.clone())
        else {
            continue;
        };
        let script = match queue.pop_argument() {
            Some(arg) => p.parse_arg(&arg, ctx),
            None => MmlNode::new("none"),
        };
        if mark == "^" {
            if last.as_deref() == Some("^") {
                subs.push(MmlNode::new("none"));
            }
            sups.push(script);
        } else {
            if last.as_deref() == Some("_") {
                sups.push(MmlNode::new("none"));
            }
            subs.push(script);
        }
        last = Some(mark);
    }
    let len = subs.len().max(sups.len()).max(1);
    subs.resize_with(len, || MmlNode::new("none"));
    sups.resize_with(len, || MmlNode::new("none"));
    subs.into_iter()
        .zip(sups)
        .flat_map(|(sub, sup)| [sub, sup])
        .collect()
}

fn negation(p: &mut Parser<'_>, arg: &Expr<'_>, ctx: ParseContext) -> MmlNode {
    let tokens: Vec<&Token> = arg.arg_tokens().iter().filter(|t| !t.is_blank()).collect();
    match tokens.as_slice() {
        [] => MmlNode::error("not", "\\not requires an argument"),
        [t] => {
            let sym = symbols::lookup(&t.value);
            let text = match NEGATIONS.get(t.value.as_str()) {
                Some(neg) => neg.to_string(),
                None => {
                    let base = sym.map_or(t.value.as_str(), |s| s.ch);
                    format!("{}\u{338}", base)
                }
            };
            let single_letter = {
                let mut chars = t.value.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
            };
            let alphabetic = sym.is_some_and(|s| s.kind == SymbolKind::Alphabetic);
            let tag = if alphabetic || single_letter { "mi" } else { "mo" };
            MmlNode::leaf(tag, text)
        }
        _ => {
            let wrapper = MmlNode::new("menclose").with_attr("notation", "updiagonalstrike");
            p.parse_into(arg.arg_tokens(), ctx, wrapper)
        }
    }
}

// =============================================================================
// Accents and explicit spaces
// =============================================================================

fn accent_node(
    p: &mut Parser<'_>,
    tag: &str,
    accent: &str,
    queue: &mut ExprQueue<'_>,
    ctx: ParseContext,
) -> MmlNode {
    let mut base = match pop_arg(queue) {
        Some(arg) => p.parse_arg(&arg, ctx),
        None => MmlNode::new("mrow"),
    };
    if base.tag == "mi" {
        base.set_attr("style", "font-feature-settings: 'dtls' on;");
    }
    MmlNode::new(tag)
        .with_attr("accent", "true")
        .with_children([base, MmlNode::leaf("mo", accent).with_attr("stretchy", "true")])
}

/// Normalise a TeX dimension to a MathML length; `mu` become `em`
pub fn parse_dimension(dim: &str) -> Option<String> {
    let caps = DIMENSION.as_ref()?.captures(dim.trim())?;
    let value = &caps[1];
    let unit = &caps[2];
    if unit == "mu" {
        let em = value.parse::<f64>().ok()? / 18.0;
        let em = format!("{:.5}", em);
        return Some(format!("{}em", em.trim_end_matches('0').trim_end_matches('.')));
    }
    Some(format!("{}{}", value, unit))
}

fn space_node(name: &str, dim: &str) -> MmlNode {
    match parse_dimension(dim) {
        Some(width) => MmlNode::new("mspace").with_attr("width", width),
        None => MmlNode::error(name, format!("invalid dimension {:?}", dim)),
    }
}

/// The dimension following `\kern`: a group, or the tokens up to the end
/// of the first complete `<number><unit>`
fn pop_dimension(queue: &mut ExprQueue<'_>) -> Option<String> {
    let first = pop_arg(queue)?;
    if first.kind == ExprKind::Group {
        return Some(stringify_tokens(first.inner()));
    }
    let mut dim = stringify_tokens(first.tokens);
    while parse_dimension(&dim).is_none() {
        let next = queue.peek_front().filter(|e| {
            e.kind == ExprKind::Single
                && e.tokens[0].is_any(TokenKind::LETTER | TokenKind::NUMBER | TokenKind::CHAR)
        });
        let Some(next) = next else {
            break;
        };
        dim.push_str(&next.tokens[0].value);
        queue.pop_front();
    }
    Some(dim)
}
