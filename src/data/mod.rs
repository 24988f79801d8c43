//! Static lookup data shared by the parser
//!
//! - Symbol table (glyph, class, properties)
//! - Command tables (accents, negations, spaces, identifiers, variants,
//!   switches, command arity)

pub mod maps;
pub mod symbols;

pub use symbols::{lookup, Symbol, SymbolKind, SYMBOLS};
