//! Row and cell assembly with span tracking

use super::column::{trim_repeats, ColumnSpec};
use crate::core::mathml::{MmlNode, NodeProperties};

/// Spacing between rows unless a `\\[len]` overrides it
const DEFAULT_ROW_SPACING: &str = "1.0ex";

/// Builds `mtr`/`mtd` rows out of separated cell content
pub struct TableBuilder {
    spec: ColumnSpec,
    /// Remaining rows each column index is covered by a `\multirow`
    col_coverage: Vec<usize>,
    /// Rows built so far
    pub rows: Vec<MmlNode>,
    row_spacing: Vec<String>,
    /// Set once any row asks for non-default spacing; later rows keep it
    custom_spacing: bool,
}

impl TableBuilder {
    pub fn new(spec: ColumnSpec) -> Self {
        TableBuilder {
            spec,
            col_coverage: Vec::new(),
            rows: Vec::new(),
            row_spacing: Vec::new(),
            custom_spacing: false,
        }
    }

    /// Add one row given as its raw cells
    pub fn process_row(&mut self, cells: Vec<Vec<MmlNode>>) {
        let mut row = MmlNode::new("mtr");
        let mut colspan = 0;
        let mut space = DEFAULT_ROW_SPACING.to_string();

        for (cidx, cell) in cells.into_iter().enumerate() {
            if cidx >= self.col_coverage.len() {
                self.col_coverage.resize(cidx + 1, 0);
            }
            if self.col_coverage[cidx] > 0 {
                self.col_coverage[cidx] -= 1;
                continue;
            }
            if colspan > 0 {
                colspan -= 1;
                continue;
            }

            let mut mtd = MmlNode::new("mtd");
            if let Some(align) = self.spec.align_at(cidx) {
                mtd.set_css("text-align", align.as_str());
            }
            let single = cell.len() == 1;
            for mut child in cell {
                if let Some(s) = child.attr("rowspacing") {
                    space = s.to_string();
                    self.custom_spacing = true;
                }
                if let Some(span) = child.unset_attr("rowspan") {
                    let n = parse_span(&span);
                    mtd.set_attr("rowspan", span);
                    if let Some(n) = n {
                        self.col_coverage[cidx] = n.saturating_sub(1);
                        if single && child.has(NodeProperties::VERT_ARROW) {
                            // rows are 1em high with 1ex = 0.5em between them
                            let minsize = (3 * n as i64 - 1) as f64 / 2.0;
                            child.set_attr("minsize", format!("{:.1}em", minsize));
                        }
                    }
                }
                if let Some(span) = child.unset_attr("columnspan") {
                    let n = parse_span(&span);
                    mtd.set_attr("columnspan", span);
                    if let Some(n) = n {
                        colspan = n.saturating_sub(1);
                        if single && child.has(NodeProperties::HORZ_ARROW) {
                            // arrows do not stretch across spanned columns on their own
                            let width = format!("{:.1}em", (2 * n as i64 - 1) as f64);
                            child = MmlNode::new("mover")
                                .with_child(child)
                                .with_child(MmlNode::new("mspace").with_attr("width", width));
                        }
                    }
                }
                mtd.append(child);
            }
            row.append(mtd);
        }

        self.row_spacing.push(if self.custom_spacing {
            space
        } else {
            DEFAULT_ROW_SPACING.to_string()
        });
        self.rows.push(row);
    }

    /// Write the table attributes and rows into `table`
    pub fn finish(self, table: &mut MmlNode) {
        table.set_attr(
            "columnalign",
            self.spec.columnalign().unwrap_or_else(|| "center".to_string()),
        );
        if let Some(lines) = self.spec.columnlines() {
            table.set_attr("columnlines", lines);
        }
        if self.custom_spacing {
            table.set_attr("rowspacing", trim_repeats(self.row_spacing).join(" "));
        }
        table.tag = "mtable".to_string();
        table.set_attr("rowalign", "center");
        table.children = self.rows;
    }
}

fn parse_span(span: &str) -> Option<usize> {
    span.trim().parse::<usize>().ok()
}

/// Split `items` at every element matching `sep`, dropping the separators.
/// A trailing empty segment is dropped too, so `a \\` is one row.
fn split_by<F>(items: Vec<MmlNode>, sep: F) -> Vec<Vec<MmlNode>>
where
    F: Fn(&MmlNode) -> bool,
{
    let mut out = Vec::new();
    let mut current = Vec::new();
    for item in items {
        if sep(&item) {
            out.push(std::mem::take(&mut current));
        } else {
            current.push(item);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Turn a row of cell-separated content into an `mtable`. The column spec
/// comes from the node's environment option (`array`, starred matrices).
pub fn process_table(table: &mut MmlNode) {
    let spec = ColumnSpec::parse(table.option.as_deref().unwrap_or(""));
    let mut builder = TableBuilder::new(spec);
    let children = std::mem::take(&mut table.children);
    let rows = split_by(children, |n| n.has(NodeProperties::ROW_SEP));
    for row in rows {
        let cells = split_by_keep_empty(row, |n| n.has(NodeProperties::CELL_SEP));
        builder.process_row(cells);
    }
    builder.finish(table);
}

/// Like [`split_by`], but empty cells count: `a & & b` has three
fn split_by_keep_empty<F>(items: Vec<MmlNode>, sep: F) -> Vec<Vec<MmlNode>>
where
    F: Fn(&MmlNode) -> bool,
{
    let mut out = Vec::new();
    let mut current = Vec::new();
    for item in items {
        if sep(&item) {
            out.push(std::mem::take(&mut current));
        } else {
            current.push(item);
        }
    }
    out.push(current);
    out
}

/// Mirror column alignment into inline CSS on every cell. A cell's own
/// `columnalign` wins over its row's, which wins over the table list.
pub fn set_alignment_style(table: &mut MmlNode) {
    let list: Vec<String> = table
        .attr("columnalign")
        .unwrap_or("center")
        .split_whitespace()
        .map(str::to_string)
        .collect();
    for row in table.children.iter_mut().filter(|r| r.tag == "mtr") {
        let row_align = row.attr("columnalign").map(str::to_string);
        let mut col = 0;
        for cell in row.children.iter_mut().filter(|c| c.tag == "mtd") {
            let align = cell
                .attr("columnalign")
                .map(str::to_string)
                .or_else(|| row_align.clone())
                .or_else(|| list.get(col).or_else(|| list.last()).cloned());
            if let Some(align) = align {
                cell.set_css("text-align", align);
            }
            col += 1;
        }
    }
}
