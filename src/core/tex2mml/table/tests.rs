//! Regression tests for table assembly

use super::*;
use crate::core::mathml::{MmlNode, NodeProperties};
use pretty_assertions::assert_eq;

fn cell_sep() -> MmlNode {
    MmlNode::new("").with_props(NodeProperties::CELL_SEP)
}

fn row_sep() -> MmlNode {
    MmlNode::new("").with_props(NodeProperties::ROW_SEP)
}

fn mn(text: &str) -> MmlNode {
    MmlNode::leaf("mn", text)
}

fn shape(table: &MmlNode) -> Vec<usize> {
    table.children.iter().map(|r| r.children.len()).collect()
}

#[test]
fn test_column_spec() {
    let spec = ColumnSpec::parse("l|c:r");
    assert_eq!(
        spec.align,
        vec![ColumnAlign::Left, ColumnAlign::Center, ColumnAlign::Right]
    );
    assert_eq!(spec.columnlines().as_deref(), Some("solid dashed"));
    assert_eq!(spec.columnalign().as_deref(), Some("left center right"));
}

#[test]
fn test_column_spec_leading_rule_and_gaps() {
    let spec = ColumnSpec::parse("|cc|c");
    assert_eq!(spec.lines, vec!["none", "solid"]);
    // trailing repeats collapse to one entry
    assert_eq!(ColumnSpec::parse("ccc").align, vec![ColumnAlign::Center]);
    assert_eq!(ColumnSpec::parse("").columnalign(), None);
}

#[test]
fn test_basic_grid() {
    let mut table = MmlNode::new("mrow").with_children([
        mn("1"),
        cell_sep(),
        mn("2"),
        row_sep(),
        mn("3"),
        cell_sep(),
        mn("4"),
    ]);
    process_table(&mut table);
    assert_eq!(table.tag, "mtable");
    assert_eq!(shape(&table), vec![2, 2]);
    assert_eq!(table.attr("columnalign"), Some("center"));
    assert_eq!(table.attr("rowalign"), Some("center"));
    assert_eq!(table.attr("rowspacing"), None);
    assert_eq!(table.children[1].children[0].children[0].text, "3");
}

#[test]
fn test_trailing_row_break_adds_no_row() {
    let mut table = MmlNode::new("mrow").with_children([mn("1"), row_sep()]);
    process_table(&mut table);
    assert_eq!(shape(&table), vec![1]);
}

#[test]
fn test_array_alignment_css() {
    let mut table = MmlNode::new("mrow").with_children([mn("1"), cell_sep(), mn("2")]);
    table.option = Some("lr".to_string());
    process_table(&mut table);
    assert_eq!(table.attr("columnalign"), Some("left right"));
    let row = &table.children[0];
    assert_eq!(row.children[0].css.get("text-align").map(String::as_str), Some("left"));
    assert_eq!(row.children[1].css.get("text-align").map(String::as_str), Some("right"));
}

#[test]
fn test_multirow_covers_cells_below() {
    // \multirow{2}{*}{A} & B \\ & D
    let mut table = MmlNode::new("mrow").with_children([
        MmlNode::leaf("mi", "A").with_attr("rowspan", "2"),
        cell_sep(),
        MmlNode::leaf("mi", "B"),
        row_sep(),
        cell_sep(),
        MmlNode::leaf("mi", "D"),
    ]);
    process_table(&mut table);
    assert_eq!(shape(&table), vec![2, 1]);
    let first = &table.children[0].children[0];
    assert_eq!(first.attr("rowspan"), Some("2"));
    assert_eq!(first.children[0].attr("rowspan"), None);
    assert_eq!(table.children[1].children[0].children[0].text, "D");
}

#[test]
fn test_multicolumn_skips_cells() {
    let mut table = MmlNode::new("mrow").with_children([
        MmlNode::leaf("mi", "W").with_attr("columnspan", "2"),
        cell_sep(),
        cell_sep(),
        mn("3"),
    ]);
    process_table(&mut table);
    assert_eq!(shape(&table), vec![2]);
    assert_eq!(table.children[0].children[0].attr("columnspan"), Some("2"));
}

#[test]
fn test_spanning_arrows() {
    let down = MmlNode::leaf("mo", "↓")
        .with_props(NodeProperties::VERT_ARROW)
        .with_attr("rowspan", "3");
    let right = MmlNode::leaf("mo", "→")
        .with_props(NodeProperties::HORZ_ARROW)
        .with_attr("columnspan", "2");
    let mut table = MmlNode::new("mrow").with_children([down, cell_sep(), right]);
    process_table(&mut table);
    let row = &table.children[0];
    assert_eq!(row.children[0].children[0].attr("minsize"), Some("4.0em"));
    let mover = &row.children[1].children[0];
    assert_eq!(mover.tag, "mover");
    assert_eq!(mover.children[1].attr("width"), Some("3.0em"));
}

#[test]
fn test_custom_row_spacing_is_sticky() {
    let spacing = MmlNode::new("rowspacing")
        .with_props(NodeProperties::NONPRINT)
        .with_attr("rowspacing", "2ex");
    let mut table = MmlNode::new("mrow").with_children([
        mn("1"),
        spacing,
        row_sep(),
        mn("2"),
        row_sep(),
        mn("3"),
    ]);
    process_table(&mut table);
    assert_eq!(table.attr("rowspacing"), Some("2ex 1.0ex"));
}

#[test]
fn test_alignment_style_precedence() {
    let mut table = MmlNode::new("mtable").with_attr("columnalign", "left").with_child(
        MmlNode::new("mtr").with_children([
            MmlNode::new("mtd").with_attr("columnalign", "right"),
            MmlNode::new("mtd"),
        ]),
    );
    set_alignment_style(&mut table);
    let row = &table.children[0];
    assert_eq!(row.children[0].css.get("text-align").map(String::as_str), Some("right"));
    assert_eq!(row.children[1].css.get("text-align").map(String::as_str), Some("left"));
}
