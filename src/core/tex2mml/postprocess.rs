//! Sibling post-passes
//!
//! Run once over the children of every freshly parsed row, in order:
//! limit switches, script assembly, infix fractions, space merging and
//! character fix-ups. Passes never shift sibling indices; a slot that a pass
//! empties is filled with a placeholder instead.

use super::commands::fraction;
use crate::core::mathml::{MmlNode, NodeProperties};
use crate::data::maps::{em_width, SPACE_WIDTHS};
use crate::core::tex2mml::engine::TokenKind;

/// Apply every pass to the children of `node`
pub fn post_process(node: &mut MmlNode) {
    let children = &mut node.children;
    limit_switches(children);
    scripts(children);
    infix(children);
    spacing(children);
    chars(children);
}

fn take(children: &mut [MmlNode], i: usize) -> MmlNode {
    std::mem::replace(&mut children[i], MmlNode::placeholder())
}

/// Nearest sibling before `i` that renders something
fn previous_printable(children: &[MmlNode], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !children[j].is_nonprint())
}

// =============================================================================
// Limits
// =============================================================================

/// `\limits` / `\nolimits` modify the operator before them. The operator
/// moves into the switch's slot so scripts that follow stay adjacent.
fn limit_switches(children: &mut [MmlNode]) {
    for i in 1..children.len() {
        let switch = children[i].properties & (NodeProperties::LIMITS | NodeProperties::NOLIMITS);
        if switch.is_empty() {
            continue;
        }
        let op = &mut children[i - 1];
        if switch.contains(NodeProperties::LIMITS) {
            op.properties |= NodeProperties::LIMITSUNDEROVER;
            op.properties -= NodeProperties::MOVABLELIMITS;
            op.set_false("movablelimits");
        } else {
            op.properties -= NodeProperties::LIMITSUNDEROVER | NodeProperties::MOVABLELIMITS;
            op.unset_attr("movablelimits");
        }
        children[i] = MmlNode::placeholder();
        children.swap(i - 1, i);
    }
}

// =============================================================================
// Scripts
// =============================================================================

fn scripts(children: &mut [MmlNode]) {
    for i in 0..children.len() {
        let kind = children[i].properties & NodeProperties::SCRIPTS;
        if kind.is_empty() || children[i].is_nonprint() {
            continue;
        }
        let mut script = take(children, i);
        script.properties -= NodeProperties::SCRIPTS;

        let other = if kind.contains(NodeProperties::SUBSCRIPT) {
            NodeProperties::SUPERSCRIPT
        } else {
            NodeProperties::SUBSCRIPT
        };
        let partner = match children.get(i + 1) {
            Some(next) if next.has(other) && !next.is_nonprint() => {
                let mut next = take(children, i + 1);
                next.properties -= NodeProperties::SCRIPTS;
                Some(next)
            }
            _ => None,
        };

        let base_idx = previous_printable(children, i).filter(|&j| !children[j].is_separator());
        let mut base = match base_idx {
            Some(j) => take(children, j),
            None => MmlNode::new("none"),
        };
        let carried = base.properties & NodeProperties::INFIX;
        base.properties -= NodeProperties::INFIX;

        let (sub, sup) = if kind.contains(NodeProperties::SUBSCRIPT) {
            (Some(script), partner)
        } else {
            (partner, Some(script))
        };
        let limits = base.has(NodeProperties::LIMITSUNDEROVER);
        let tag = match (&sub, &sup, limits) {
            (Some(_), Some(_), false) => "msubsup",
            (Some(_), Some(_), true) => "munderover",
            (Some(_), None, false) => "msub",
            (Some(_), None, true) => "munder",
            (None, _, false) => "msup",
            (None, _, true) => "mover",
        };
        let assembled = MmlNode::new(tag)
            .with_props(NodeProperties::SCRIPT_BASE | carried)
            .with_child(base)
            .with_children(sub)
            .with_children(sup);
        children[base_idx.unwrap_or(i)] = assembled;
    }
}

// =============================================================================
// Infix fractions
// =============================================================================

/// `a \over b`, `a \choose b` and `a \atop b`
fn infix(children: &mut [MmlNode]) {
    for i in 0..children.len() {
        let kind = children[i].properties & NodeProperties::INFIX;
        if kind.is_empty() || children[i].is_nonprint() {
            continue;
        }
        let mut denominator = take(children, i);
        denominator.properties -= NodeProperties::INFIX;
        let prev = previous_printable(children, i).filter(|&j| !children[j].is_separator());
        let numerator = match prev {
            Some(j) => take(children, j),
            None => MmlNode::new("mrow"),
        };
        let frac = if kind.contains(NodeProperties::INFIX_CHOOSE) {
            fraction("binom", numerator, denominator)
        } else if kind.contains(NodeProperties::INFIX_ATOP) {
            fraction("frac", numerator, denominator).with_attr("linethickness", "0")
        } else {
            fraction("frac", numerator, denominator)
        };
        children[prev.unwrap_or(i)] = frac;
    }
}

// =============================================================================
// Spacing
// =============================================================================

fn space_width(node: &MmlNode) -> Option<i32> {
    if node.tag != "mspace" || !node.tok.is(TokenKind::COMMAND) {
        return None;
    }
    SPACE_WIDTHS
        .get(node.tok.value.as_str())
        .copied()
        .filter(|&w| w != 0)
}

/// Merge runs of fixed-width spaces such as `\,\,` into one `mspace`
fn spacing(children: &mut [MmlNode]) {
    let mut i = 0;
    while i < children.len() {
        let Some(mut width) = space_width(&children[i]) else {
            i += 1;
            continue;
        };
        let mut j = i + 1;
        while j < children.len() {
            if children[j].is_placeholder() {
                j += 1;
                continue;
            }
            let Some(w) = space_width(&children[j]) else {
                break;
            };
            width += w;
            children[j] = MmlNode::placeholder();
            j += 1;
        }
        children[i].set_attr("width", em_width(width));
        i = j;
    }
}

// =============================================================================
// Characters
// =============================================================================

fn is_prime(node: &MmlNode) -> bool {
    matches!(node.text.as_str(), "'" | "’") && !node.tok.is(TokenKind::COMMAND)
}

fn prime_glyphs(mut count: usize) -> String {
    let mut text = String::new();
    while count > 0 {
        text.push(match count {
            1 => '′',
            2 => '″',
            3 => '‴',
            _ => '⁗',
        });
        count = count.saturating_sub(4);
    }
    text
}

/// Minus signs and primes
fn chars(children: &mut [MmlNode]) {
    let mut i = 0;
    while i < children.len() {
        if children[i].is_nonprint() {
            i += 1;
            continue;
        }
        if children[i].tag == "mo" && children[i].text == "-" {
            children[i].text = "−".to_string();
        }
        if !is_prime(&children[i]) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        let mut count = 1;
        while end < children.len() {
            if children[end].is_placeholder() {
                end += 1;
            } else if is_prime(&children[end]) {
                count += 1;
                end += 1;
            } else {
                break;
            }
        }
        for slot in &mut children[i..end] {
            *slot = MmlNode::placeholder();
        }
        let prime = MmlNode::leaf("mo", prime_glyphs(count));
        match previous_printable(children, i).filter(|&j| !children[j].is_separator()) {
            Some(j) => {
                let base = take(children, j);
                children[j] = attach_prime(base, prime);
            }
            None => {
                children[i] = MmlNode::new("msup").with_children([MmlNode::new("none"), prime]);
            }
        }
        i = end;
    }
}

/// A subscripted base built by the script pass takes the prime as its
/// superscript; anything else is wrapped in `msup`
fn attach_prime(mut base: MmlNode, prime: MmlNode) -> MmlNode {
    if base.has(NodeProperties::SCRIPT_BASE) && matches!(base.tag.as_str(), "msub" | "munder") {
        base.tag = if base.tag == "msub" { "msubsup" } else { "munderover" }.to_string();
        base.append(prime);
        return base;
    }
    MmlNode::new("msup").with_children([base, prime])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tex2mml::engine::Token;
    use pretty_assertions::assert_eq;

    fn mi(text: &str) -> MmlNode {
        MmlNode::leaf("mi", text)
    }

    fn printable(node: &MmlNode) -> Vec<&str> {
        node.printable_children().map(|c| c.tag.as_str()).collect()
    }

    #[test]
    fn test_subscript_and_superscript_pair() {
        let mut row = MmlNode::new("mrow").with_children([
            mi("x"),
            mi("i").with_props(NodeProperties::SUBSCRIPT),
            MmlNode::leaf("mn", "2").with_props(NodeProperties::SUPERSCRIPT),
        ]);
        post_process(&mut row);
        assert_eq!(printable(&row), vec!["msubsup"]);
        let s = &row.children[0];
        assert_eq!(s.children[1].text, "i");
        assert_eq!(s.children[2].text, "2");
        assert!(!s.children[1].has(NodeProperties::SCRIPTS));
    }

    #[test]
    fn test_script_without_base() {
        let mut row = MmlNode::new("mrow")
            .with_children([MmlNode::leaf("mn", "2").with_props(NodeProperties::SUPERSCRIPT)]);
        post_process(&mut row);
        assert_eq!(row.children[0].tag, "msup");
        assert_eq!(row.children[0].children[0].tag, "none");
    }

    #[test]
    fn test_limits_switch() {
        let op = MmlNode::leaf("mo", "∫").with_props(NodeProperties::LARGEOP | NodeProperties::MOVABLELIMITS);
        let switch = MmlNode::leaf("mi", "limits").with_props(NodeProperties::LIMITS | NodeProperties::NONPRINT);
        let mut row = MmlNode::new("mrow").with_children([
            op,
            switch,
            mi("a").with_props(NodeProperties::SUBSCRIPT),
        ]);
        post_process(&mut row);
        assert_eq!(printable(&row), vec!["munder"]);
        let base = &row.children[1].children[0];
        assert_eq!(base.attr("movablelimits"), Some("false"));
    }

    #[test]
    fn test_infix_choose() {
        let mut row = MmlNode::new("mrow").with_children([
            mi("n"),
            mi("k").with_props(NodeProperties::INFIX_CHOOSE),
        ]);
        post_process(&mut row);
        let frac = &row.children[0];
        assert_eq!(frac.tag, "mrow");
        assert_eq!(frac.children[1].attr("linethickness"), Some("0"));
    }

    #[test]
    fn test_spaces_merge() {
        let space = |name: &str| {
            MmlNode::new("mspace").with_tok(&Token::new(TokenKind::COMMAND, name))
        };
        let mut row = MmlNode::new("mrow").with_children([space(","), space(";"), mi("x")]);
        post_process(&mut row);
        assert_eq!(printable(&row), vec!["mspace", "mi"]);
        assert_eq!(row.children[0].attr("width"), Some("0.44444em"));
    }

    #[test]
    fn test_primes() {
        let prime = || MmlNode::leaf("mo", "'").with_tok(&Token::new(TokenKind::CHAR, "'"));
        let mut row = MmlNode::new("mrow").with_children([mi("f"), prime(), prime()]);
        post_process(&mut row);
        assert_eq!(printable(&row), vec!["msup"]);
        assert_eq!(row.children[0].children[1].text, "″");

        let mut row = MmlNode::new("mrow").with_children([
            mi("f"),
            mi("i").with_props(NodeProperties::SUBSCRIPT),
            prime(),
        ]);
        post_process(&mut row);
        assert_eq!(printable(&row), vec!["msubsup"]);
    }

    #[test]
    fn test_prime_glyphs() {
        assert_eq!(prime_glyphs(1), "′");
        assert_eq!(prime_glyphs(3), "‴");
        assert_eq!(prime_glyphs(5), "⁗′");
    }

    #[test]
    fn test_minus() {
        let mut row = MmlNode::new("mrow").with_children([MmlNode::leaf("mo", "-")]);
        post_process(&mut row);
        assert_eq!(row.children[0].text, "−");
    }
}
