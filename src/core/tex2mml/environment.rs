//! `\begin{...}` / `\end{...}` environments
//!
//! An environment name selects the parse context for its body and, once the
//! body is parsed, how the result is framed: fences around matrices, left
//! alignment for `cases`, the right/left pairing of `align`.

use super::context::ParseContext;
use super::table::{process_table, set_alignment_style};
use crate::core::mathml::{stretchy_op, MmlNode};

/// Environments laid out as tables
const TABLE_ENVIRONMENTS: &[&str] = &[
    "matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix", "smallmatrix", "array",
    "subarray", "table", "align", "aligned", "split", "cases", "gather", "gathered",
];

/// Matrix environments whose starred form takes a column spec
const MATRICES: &[&str] = &[
    "matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix", "smallmatrix",
];

/// Context for the body of environment `name`. Environment bits of an
/// enclosing environment do not leak into it.
pub fn set_environment_context(name: &str, star: bool, ctx: ParseContext) -> ParseContext {
    let ctx = ctx - ParseContext::ENVIRONMENT;
    let name = name.trim_end_matches('*');
    if !TABLE_ENVIRONMENTS.contains(&name) {
        if name != "equation" {
            log::debug!("environment {} has no special layout", name);
        }
        return ctx;
    }
    let needs_spec = matches!(name, "array" | "subarray") || (star && MATRICES.contains(&name));
    if needs_spec {
        ctx | ParseContext::TABLE | ParseContext::ENV_HAS_ARG
    } else {
        ctx | ParseContext::TABLE
    }
}

/// Frame the parsed body of environment `name`
pub fn process_env(mut node: MmlNode, name: &str, ctx: ParseContext) -> MmlNode {
    if ctx.contains(ParseContext::TABLE) {
        process_table(&mut node);
    }
    let name = name.trim_end_matches('*');

    let (left, right) = match name {
        "pmatrix" => (Some("("), Some(")")),
        "bmatrix" => (Some("["), Some("]")),
        "Bmatrix" => (Some("{"), Some("}")),
        "vmatrix" => (Some("|"), Some("|")),
        "Vmatrix" => (Some("‖"), Some("‖")),
        "cases" => (Some("{"), None),
        _ => (None, None),
    };

    match name {
        "pmatrix" | "bmatrix" | "Bmatrix" | "vmatrix" | "Vmatrix" => {}
        "cases" => {
            node.set_attr("columnalign", "left");
        }
        "align" | "aligned" | "split" => {
            node.set_true("displaystyle");
            node.set_attr("columnalign", "left");
            node.set_css("text-align", "left");
            for row in node.children.iter_mut() {
                if let Some(first) = row.children.iter_mut().find(|c| c.tag == "mtd") {
                    first.set_attr("columnalign", "right");
                    first.set_css("text-align", "right");
                }
            }
        }
        "gather" | "gathered" => {
            node.set_true("displaystyle");
            node.set_attr("columnalign", "center");
        }
        "subarray" => {
            node.set_false("displaystyle");
        }
        "smallmatrix" => {
            node.set_attr("scriptlevel", "1");
        }
        _ => return node,
    }
    set_alignment_style(&mut node);

    let mut row = MmlNode::new("mrow");
    if let Some(left) = left {
        row.append(stretchy_op(left));
    }
    row.append(node);
    if let Some(right) = right {
        row.append(stretchy_op(right));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_for_table_environments() {
        let base = ParseContext::ROOT | ParseContext::INLINE;
        let ctx = set_environment_context("pmatrix", false, base);
        assert!(ctx.contains(ParseContext::TABLE));
        assert!(!ctx.contains(ParseContext::ENV_HAS_ARG));

        let ctx = set_environment_context("pmatrix*", true, base);
        assert!(ctx.contains(ParseContext::TABLE | ParseContext::ENV_HAS_ARG));

        let ctx = set_environment_context("array", false, base);
        assert!(ctx.contains(ParseContext::ENV_HAS_ARG));
    }

    #[test]
    fn test_nested_environment_clears_outer_bits() {
        let outer = ParseContext::ROOT | ParseContext::TABLE | ParseContext::ENV_HAS_ARG;
        let ctx = set_environment_context("equation", false, outer);
        assert!(!ctx.intersects(ParseContext::ENVIRONMENT));
        assert!(ctx.contains(ParseContext::ROOT));
    }

    #[test]
    fn test_unknown_environment_is_unframed() {
        let node = MmlNode::new("mrow").with_child(MmlNode::leaf("mi", "x"));
        let out = process_env(node.clone(), "equation", ParseContext::ROOT);
        assert_eq!(out, node);
    }
}
