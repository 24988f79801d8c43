//! Parser core: expression queue to MathML tree
//!
//! The parser pops one expression at a time from an [`ExprQueue`]. Composite
//! expressions (groups, fences, environments) recurse; single tokens are
//! dispatched on their kind bits. `^`, `_`, `\over`, `\choose` and `\atop`
//! emit no node of their own: they promote a property onto the next node,
//! and the post-passes assemble the final structure once all siblings of a
//! level are known.

use super::commands::process_command;
use super::context::{DocumentOptions, ParseContext};
use super::engine::lexer::stringify_tokens;
use super::engine::{Expr, ExprKind, ExprQueue, MacroTable, Token, TokenKind};
use super::environment::{process_env, set_environment_context};
use super::postprocess::post_process;
use crate::core::mathml::{MmlNode, NodeProperties};
use crate::data::symbols;

/// Recursive-descent parser over token slices
pub struct Parser<'a> {
    /// Macros visible to this parse; runtime definitions are added here
    pub macros: &'a mut MacroTable,
    pub options: &'a DocumentOptions,
    /// Nesting depth of runtime macro expansion
    pub depth: usize,
    /// Runtime macro expansions performed so far
    pub expansions: usize,
}

impl<'a> Parser<'a> {
    pub fn new(macros: &'a mut MacroTable, options: &'a DocumentOptions) -> Self {
        Parser {
            macros,
            options,
            depth: 0,
            expansions: 0,
        }
    }

    /// Parse a matched token slice
    pub fn parse(&mut self, tokens: &[Token], ctx: ParseContext) -> Option<MmlNode> {
        self.parse_queue(ExprQueue::from_tokens(tokens), ctx, None)
    }

    /// Like [`Parser::parse`], but an empty result becomes an empty `mrow`
    pub fn parse_or_empty(&mut self, tokens: &[Token], ctx: ParseContext) -> MmlNode {
        self.parse(tokens, ctx)
            .unwrap_or_else(|| MmlNode::new("mrow"))
    }

    /// Parse the tokens of a command argument
    pub fn parse_arg(&mut self, arg: &Expr<'_>, ctx: ParseContext) -> MmlNode {
        self.parse_or_empty(arg.arg_tokens(), ctx)
    }

    /// Parse `tokens` into `parent` (post-processed), returning it
    pub fn parse_into(&mut self, tokens: &[Token], ctx: ParseContext, parent: MmlNode) -> MmlNode {
        self.parse_queue(ExprQueue::from_tokens(tokens), ctx, Some(parent))
            .unwrap_or_default()
    }

    /// Parse every expression of `queue`.
    ///
    /// Without a parent, no siblings yield `None` and a single sibling is
    /// returned as is; more siblings are wrapped in a post-processed `mrow`.
    /// With a parent, the siblings are appended to it and the parent is
    /// post-processed and returned.
    pub fn parse_queue(
        &mut self,
        mut queue: ExprQueue<'_>,
        mut ctx: ParseContext,
        parent: Option<MmlNode>,
    ) -> Option<MmlNode> {
        let mut option = None;
        if ctx.contains(ParseContext::ENV_HAS_ARG) {
            let has_arg = queue
                .peek_argument()
                .is_some_and(|e| matches!(e.kind, ExprKind::Group | ExprKind::Options));
            if has_arg {
                option = queue.pop_argument().map(|e| stringify_tokens(e.arg_tokens()));
            } else {
                log::warn!("environment expects an argument");
            }
            ctx -= ParseContext::ENV_HAS_ARG;
        }

        let mut siblings: Vec<MmlNode> = Vec::new();
        let mut promoted = NodeProperties::empty();

        while let Some(expr) = queue.pop_front() {
            let tok = match expr.kind {
                ExprKind::Whitespace => {
                    if ctx.contains(ParseContext::TEXT) && !expr.tokens[0].is(TokenKind::COMMENT) {
                        siblings.push(
                            MmlNode::new("mspace")
                                .with_attr("width", "1em")
                                .with_tok(&expr.tokens[0]),
                        );
                    }
                    continue;
                }
                ExprKind::Group => {
                    let child = self.parse(expr.inner(), ctx);
                    if let Some(child) = child {
                        push_child(&mut siblings, child, &expr.tokens[0], &mut promoted, ctx);
                    }
                    continue;
                }
                ExprKind::Environment => {
                    let child = self.parse_environment(&expr, ctx);
                    push_child(&mut siblings, child, &expr.tokens[0], &mut promoted, ctx);
                    continue;
                }
                ExprKind::Fenced => {
                    let child = self.parse_fenced(&expr, ctx);
                    push_child(&mut siblings, child, &expr.tokens[0], &mut promoted, ctx);
                    continue;
                }
                ExprKind::Options => {
                    // A bracket nobody took as an argument: plain delimiters
                    // around inline content
                    queue.splice_front(&expr.tokens[1..]);
                    &expr.tokens[0]
                }
                ExprKind::Single => &expr.tokens[0],
            };

            if ctx.contains(ParseContext::TABLE) {
                if tok.is_cell_break() {
                    siblings.push(MmlNode::new("").with_props(NodeProperties::CELL_SEP));
                    continue;
                }
                if tok.is_row_break() {
                    if queue.peek_argument().is_some_and(|e| e.kind == ExprKind::Options) {
                        if let Some(opt) = queue.pop_argument() {
                            siblings.push(
                                MmlNode::new("rowspacing")
                                    .with_props(NodeProperties::NONPRINT)
                                    .with_attr("rowspacing", stringify_tokens(opt.inner())),
                            );
                        }
                    }
                    siblings.push(MmlNode::new("").with_props(NodeProperties::ROW_SEP));
                    continue;
                }
            }

            if tok.is(TokenKind::SUBSUP) {
                promoted |= if tok.value == "^" {
                    NodeProperties::SUPERSCRIPT
                } else {
                    NodeProperties::SUBSCRIPT
                };
                continue;
            }
            if tok.is(TokenKind::COMMAND) {
                let infix = match tok.value.as_str() {
                    "over" => Some(NodeProperties::INFIX_OVER),
                    "choose" => Some(NodeProperties::INFIX_CHOOSE),
                    "atop" => Some(NodeProperties::INFIX_ATOP),
                    _ => None,
                };
                if let Some(infix) = infix {
                    promoted |= infix;
                    continue;
                }
            }

            if let Some(child) = self.parse_token(tok, &mut queue, ctx) {
                push_child(&mut siblings, child, tok, &mut promoted, ctx);
            }
        }

        let mut node = match parent {
            Some(mut parent) => {
                if parent.tag.is_empty() {
                    parent.tag = "mrow".to_string();
                }
                parent.children.append(&mut siblings);
                parent
            }
            None if siblings.len() > 1 => MmlNode::new("mrow").with_children(siblings),
            None => return siblings.pop(),
        };
        node.option = option;
        post_process(&mut node);
        Some(node)
    }

    /// Node for a single token, or `None` for tokens that render nothing
    fn parse_token(
        &mut self,
        tok: &Token,
        queue: &mut ExprQueue<'_>,
        ctx: ParseContext,
    ) -> Option<MmlNode> {
        if tok.is(TokenKind::CLOSE | TokenKind::CURLY)
            || tok.is(TokenKind::CLOSE | TokenKind::ENV)
            || tok.is_blank()
        {
            return None;
        }
        if tok.is(TokenKind::BADMACRO) {
            return Some(
                MmlNode::error(tok.value.as_str(), "cyclic dependency in macro definition")
                    .with_tok(tok),
            );
        }
        if tok.is(TokenKind::MACROARG) {
            return Some(
                MmlNode::error(format!("?{}", tok.value), "unexpanded macro argument").with_tok(tok),
            );
        }
        if tok.is_any(TokenKind::OPEN | TokenKind::CLOSE | TokenKind::FENCE | TokenKind::NULL) {
            return delimiter_node(tok, ctx);
        }
        if tok.is(TokenKind::ESCAPED) {
            return Some(MmlNode::leaf("mo", tok.value.as_str()).with_tok(tok));
        }
        if tok.is(TokenKind::COMMAND) {
            return process_command(self, tok, queue, ctx);
        }

        let text_mode = ctx.contains(ParseContext::TEXT);
        let mut node = if tok.is(TokenKind::LETTER) {
            MmlNode::leaf(if text_mode { "mtext" } else { "mi" }, tok.value.as_str())
        } else if tok.is(TokenKind::NUMBER) {
            MmlNode::leaf(if text_mode { "mtext" } else { "mn" }, tok.value.as_str())
        } else if tok.is(TokenKind::RESERVED) && tok.value == "~" {
            MmlNode::leaf("mtext", "\u{a0}")
        } else if text_mode {
            MmlNode::leaf("mtext", tok.value.as_str())
        } else {
            MmlNode::leaf("mo", tok.value.as_str())
        };
        node.tok = tok.clone();
        if tok.is_any(TokenKind::LETTER | TokenKind::NUMBER) || text_mode {
            ctx.apply_variant(&mut node);
        }
        Some(node)
    }

    /// `\left( ... \right)` and friends: a row of opener, content, closer
    fn parse_fenced(&mut self, expr: &Expr<'_>, ctx: ParseContext) -> MmlNode {
        let mut container = MmlNode::new("mrow");
        if let Some(open) = expr.first().and_then(|t| delimiter_node(t, ctx)) {
            container.append(open);
        }
        if let Some(inner) = self.parse(expr.inner(), ctx) {
            container.append(inner);
        }
        if let Some(close) = expr.last().and_then(|t| delimiter_node(t, ctx)) {
            container.append(close);
        }
        container
    }

    fn parse_environment(&mut self, expr: &Expr<'_>, ctx: ParseContext) -> MmlNode {
        let Some(begin) = expr.first() else {
            return MmlNode::new("mrow");
        };
        let env_ctx = set_environment_context(&begin.value, begin.is(TokenKind::STAR), ctx);
        let content = self.parse_into(expr.inner(), env_ctx, MmlNode::new("mrow"));
        process_env(content, &begin.value, env_ctx)
    }
}

/// Operator node for a delimiter token. Fences stretch; plain parentheses
/// and brackets do not. Null fences from `\left.` render nothing.
pub fn delimiter_node(tok: &Token, ctx: ParseContext) -> Option<MmlNode> {
    if tok.is(TokenKind::NULL) {
        return None;
    }
    let text = if tok.is(TokenKind::COMMAND) {
        symbols::lookup(&tok.value)
            .map(|s| s.ch.to_string())
            .unwrap_or_else(|| tok.value.clone())
    } else if tok.is(TokenKind::ESCAPED) && tok.value == "|" {
        "‖".to_string()
    } else {
        tok.value.clone()
    };
    let mut node = MmlNode::leaf("mo", text).with_tok(tok);
    if tok.is(TokenKind::FENCE) {
        node.set_true("fence");
        node.set_true("stretchy");
        if node.text == "|" {
            node.set_true("symmetric");
        }
    } else if tok.is(TokenKind::ESCAPED) {
        node.set_true("stretchy");
    } else {
        node.set_false("stretchy");
    }
    if tok.is(TokenKind::COMMAND) {
        ctx.apply_variant(&mut node);
    }
    Some(node)
}

/// Finish a freshly built node and append it to `siblings`
fn push_child(
    siblings: &mut Vec<MmlNode>,
    mut child: MmlNode,
    tok: &Token,
    promoted: &mut NodeProperties,
    ctx: ParseContext,
) {
    let bigness = tok.kind.bigness();
    if bigness > 0 {
        child.set_attr("scriptlevel", format!("-{}", bigness));
        child.set_false("stretchy");
    }
    child.properties |= *promoted;
    *promoted = NodeProperties::empty();

    // adjacent text runs in text mode read as one string
    if ctx.contains(ParseContext::TEXT) && child.tag == "mtext" && child.children.is_empty() {
        if let Some(last) = siblings.last_mut() {
            if last.tag == "mtext"
                && last.children.is_empty()
                && last.attrib == child.attrib
                && last.properties == child.properties
            {
                last.text.push_str(&child.text);
                return;
            }
        }
    }
    siblings.push(child);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mathml::render;
    use crate::core::tex2mml::engine::tokenize;
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> String {
        let tokens = tokenize(src).unwrap();
        let mut macros = MacroTable::default();
        let options = DocumentOptions::default();
        let mut parser = Parser::new(&mut macros, &options);
        parser
            .parse(&tokens, ParseContext::INLINE)
            .map(|n| render(&n))
            .unwrap_or_default()
    }

    #[test]
    fn test_letters_and_numbers() {
        assert_eq!(parse("x"), "<mi>x</mi>");
        assert_eq!(parse("3.14"), "<mn>3.14</mn>");
        assert_eq!(parse("a+1"), "<mrow><mi>a</mi><mo>+</mo><mn>1</mn></mrow>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), "");
        assert_eq!(parse("{}"), "");
    }

    #[test]
    fn test_plain_parentheses() {
        assert_eq!(
            parse("(a)"),
            r#"<mrow><mo stretchy="false">(</mo><mi>a</mi><mo stretchy="false">)</mo></mrow>"#
        );
    }

    #[test]
    fn test_fenced_row() {
        assert_eq!(
            parse("\\left( x \\right)"),
            r#"<mrow><mo fence="true" stretchy="true">(</mo><mi>x</mi><mo fence="true" stretchy="true">)</mo></mrow>"#
        );
        assert_eq!(
            parse("\\left. x \\right|"),
            r#"<mrow><mi>x</mi><mo fence="true" stretchy="true" symmetric="true">|</mo></mrow>"#
        );
    }

    #[test]
    fn test_bracket_not_taken_as_argument() {
        assert_eq!(
            parse("[a]"),
            r#"<mrow><mo stretchy="false">[</mo><mi>a</mi><mo stretchy="false">]</mo></mrow>"#
        );
    }

    #[test]
    fn test_bigness() {
        assert_eq!(
            parse("\\big("),
            r#"<mo scriptlevel="-1" stretchy="false">(</mo>"#
        );
    }

    #[test]
    fn test_escaped_characters() {
        assert_eq!(parse("\\&"), "<mo>&amp;</mo>");
        assert_eq!(parse("\\%"), "<mo>%</mo>");
    }

    #[test]
    fn test_macro_argument_outside_macro() {
        assert_eq!(
            parse("#1"),
            r#"<merror title="unexpanded macro argument">?1</merror>"#
        );
    }

    #[test]
    fn test_empty_group_passes_script_on() {
        // an empty script group renders nothing, so the pending `^` lands
        // on the next sibling
        assert_eq!(
            parse("x^{} y"),
            "<mrow><msup><mi>x</mi><mi>y</mi></msup></mrow>"
        );
    }

    #[test]
    fn test_tilde_is_nonbreaking_space() {
        assert_eq!(parse("~"), "<mtext>\u{a0}</mtext>");
    }

    #[test]
    fn test_table_separators_outside_table() {
        // `&` outside a table is an ordinary operator
        assert_eq!(parse("&"), "<mo>&amp;</mo>");
    }
}
