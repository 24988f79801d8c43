//! Token-level engine: lexing, brace matching, expression views and macros

pub mod lexer;
pub mod macros;
pub mod primitives;
pub mod token;
pub mod utils;

pub use lexer::{lex, post_process_tokens, stringify_tokens, tokenize};
pub use macros::{expand_macros, prepare_macros, Macro, MacroTable};
pub use token::{Token, TokenKind};
pub use utils::{Expr, ExprKind, ExprQueue};
