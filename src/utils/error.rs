//! Error handling for texmml conversions
//!
//! Fatal problems (unbalanced braces or environments, broken macro tables)
//! are returned as [`TexError`]. Everything that leaves the grammar intact is
//! rendered inline as an `<merror>` node instead, using the same `Display`
//! text as its `title`.

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TexError {
    /// A `{}` pair or a `\begin`/`\end` pair does not line up.
    ///
    /// `context` holds a window of the surrounding source with a caret line
    /// pointing at the offending token.
    #[error("mismatched {kind} at position {pos}{context}")]
    MismatchedBrace {
        kind: String,
        pos: usize,
        context: String,
    },

    /// A macro (directly or indirectly) expands to itself.
    #[error("cyclic dependency in macro definition: \\{name}")]
    MacroCycle { name: String },

    /// A macro call site could not be substituted.
    #[error("could not expand macro \\{name}: {reason}")]
    MacroExpansionFailure { name: String, reason: String },

    /// A command received fewer arguments than it requires.
    #[error("\\{command} expects {expected} argument(s), got {got}")]
    BadArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },

    /// A `\newcommand` / `\def` could not be understood.
    #[error("malformed \\{command}: {reason}")]
    InvalidDefinition { command: String, reason: String },
}

/// Result type for conversion operations
pub type TexResult<T> = Result<T, TexError>;

// Convenience constructors for errors
impl TexError {
    pub fn mismatched(kind: impl Into<String>, pos: usize, context: impl Into<String>) -> Self {
        TexError::MismatchedBrace {
            kind: kind.into(),
            pos,
            context: context.into(),
        }
    }

    pub fn cycle(name: impl Into<String>) -> Self {
        TexError::MacroCycle { name: name.into() }
    }

    pub fn expansion(name: impl Into<String>, reason: impl Into<String>) -> Self {
        TexError::MacroExpansionFailure {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn arg_count(command: impl Into<String>, expected: usize, got: usize) -> Self {
        TexError::BadArgumentCount {
            command: command.into(),
            expected,
            got,
        }
    }

    pub fn definition(command: impl Into<String>, reason: impl Into<String>) -> Self {
        TexError::InvalidDefinition {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
