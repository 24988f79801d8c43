//! Table layout for matrix-like environments
//!
//! The parser hands over a flat row of cells with cell and row separator
//! markers between them; [`process_table`] turns it into an `mtable`.

mod column;
mod parser;

#[cfg(test)]
mod tests;

pub use column::{ColumnAlign, ColumnSpec};
pub use parser::{process_table, set_alignment_style, TableBuilder};
