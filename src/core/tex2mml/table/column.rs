//! Column specifications such as `{l|c:r}`

/// Horizontal alignment of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl ColumnAlign {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(ColumnAlign::Left),
            'c' => Some(ColumnAlign::Center),
            'r' => Some(ColumnAlign::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnAlign::Left => "left",
            ColumnAlign::Center => "center",
            ColumnAlign::Right => "right",
        }
    }
}

/// Parsed column specification: one alignment per column and one line style
/// per gap between columns.
///
/// MathML cannot draw a rule before the first column, so a leading `|` or
/// `:` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub align: Vec<ColumnAlign>,
    /// `solid`, `dashed` or `none`
    pub lines: Vec<&'static str>,
}

impl ColumnSpec {
    pub fn parse(spec: &str) -> Self {
        let mut align = Vec::new();
        let mut lines = Vec::new();
        let mut was_line = true;
        for (i, c) in spec.chars().enumerate() {
            match c {
                '|' | ':' if i > 0 => {
                    lines.push(if c == '|' { "solid" } else { "dashed" });
                    was_line = true;
                }
                _ => {
                    if let Some(a) = ColumnAlign::from_char(c) {
                        align.push(a);
                        if !was_line {
                            lines.push("none");
                        }
                        was_line = false;
                    }
                }
            }
        }
        ColumnSpec {
            align: trim_repeats(align),
            lines: trim_repeats(lines),
        }
    }

    /// Value of the `columnalign` attribute, if any column was given
    pub fn columnalign(&self) -> Option<String> {
        if self.align.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.align.iter().map(|a| a.as_str()).collect();
        Some(names.join(" "))
    }

    /// Value of the `columnlines` attribute
    pub fn columnlines(&self) -> Option<String> {
        (!self.lines.is_empty()).then(|| self.lines.join(" "))
    }

    /// Alignment of column `idx`; columns past the end repeat the last one
    pub fn align_at(&self, idx: usize) -> Option<ColumnAlign> {
        self.align.get(idx).or_else(|| self.align.last()).copied()
    }
}

/// Drop a run of repeated values from the end, keeping one. MathML repeats
/// the last list entry for the remaining columns.
pub fn trim_repeats<T: PartialEq>(mut list: Vec<T>) -> Vec<T> {
    while list.len() > 1 && list[list.len() - 1] == list[list.len() - 2] {
        list.pop();
    }
    list
}
