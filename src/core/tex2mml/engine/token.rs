//! TeX Token definitions for the lexer, macro engine and parser.
//!
//! A token is a classified lexeme. The classification is a bitmask rather
//! than a plain enum: a primary kind (letter, number, command, ...) can be
//! combined with flag bits (escaped, star suffix, bigness level, open/close,
//! fence, environment, null), and the parser dispatches on combined masks.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Classification bits of a [`Token`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenKind: u32 {
        /// Invisible delimiter produced by `\left.` / `\right.`
        const NULL = 1 << 0;
        const WHITESPACE = 1 << 1;
        const COMMENT = 1 << 2;
        /// `\name` or `\` followed by a single non-letter
        const COMMAND = 1 << 3;
        /// `\` followed by a reserved or delimiter character
        const ESCAPED = 1 << 4;
        const NUMBER = 1 << 5;
        const LETTER = 1 << 6;
        const CHAR = 1 << 7;
        const OPEN = 1 << 8;
        const CLOSE = 1 << 9;
        /// `{` or `}`
        const CURLY = 1 << 10;
        /// Canonicalised `\begin{name}` / `\end{name}`
        const ENV = 1 << 11;
        const FENCE = 1 << 12;
        /// `^` or `_`
        const SUBSUP = 1 << 13;
        /// `#1` .. `#9`
        const MACROARG = 1 << 14;
        /// Call site of a macro that takes part in a dependency cycle
        const BADMACRO = 1 << 15;
        const RESERVED = 1 << 16;
        /// Command was written with a trailing `*`
        const STAR = 1 << 17;
        const BIGNESS1 = 1 << 18;
        const BIGNESS2 = 1 << 19;
        const BIGNESS3 = 1 << 20;
        const BIGNESS4 = 1 << 21;

        const BIGNESS = Self::BIGNESS1.bits()
            | Self::BIGNESS2.bits()
            | Self::BIGNESS3.bits()
            | Self::BIGNESS4.bits();
    }
}

impl TokenKind {
    /// Returns the size level (1-4) encoded by the bigness bits, or 0.
    pub fn bigness(self) -> u8 {
        match self & TokenKind::BIGNESS {
            k if k == TokenKind::BIGNESS1 => 1,
            k if k == TokenKind::BIGNESS2 => 2,
            k if k == TokenKind::BIGNESS3 => 3,
            k if k == TokenKind::BIGNESS4 => 4,
            _ => 0,
        }
    }

    /// Bigness bit for a size level, empty for anything outside 1-4.
    pub fn from_bigness(level: u8) -> TokenKind {
        match level {
            1 => TokenKind::BIGNESS1,
            2 => TokenKind::BIGNESS2,
            3 => TokenKind::BIGNESS3,
            4 => TokenKind::BIGNESS4,
            _ => TokenKind::empty(),
        }
    }
}

/// A classified lexeme.
///
/// `match_offset` is the signed distance to the paired delimiter in the token
/// array, or 0 when the token is unpaired.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub match_offset: isize,
}

impl Token {
    /// Create a new unpaired token
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            match_offset: 0,
        }
    }

    /// Returns true if every bit of `kind` is set on this token
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind.contains(kind)
    }

    /// Returns true if any bit of `kind` is set on this token
    pub fn is_any(&self, kind: TokenKind) -> bool {
        self.kind.intersects(kind)
    }

    /// Check if this is a specific command (`\name`)
    pub fn is_cs(&self, name: &str) -> bool {
        self.is(TokenKind::COMMAND) && self.value == name
    }

    /// Whitespace or comment; skipped when looking for arguments
    pub fn is_blank(&self) -> bool {
        self.is_any(TokenKind::WHITESPACE | TokenKind::COMMENT) && !self.is(TokenKind::COMMAND)
    }

    /// An unescaped `&`
    pub fn is_cell_break(&self) -> bool {
        self.is(TokenKind::RESERVED) && self.value == "&"
    }

    /// `\\` or `\cr`
    pub fn is_row_break(&self) -> bool {
        self.is_cs("\\") || self.is_cs("cr")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is(TokenKind::ENV) {
            let word = if self.is(TokenKind::OPEN) { "begin" } else { "end" };
            let star = if self.is(TokenKind::STAR) { "*" } else { "" };
            return write!(f, "\\{}{{{}{}}}", word, self.value, star);
        }
        if self.is_any(TokenKind::COMMAND | TokenKind::ESCAPED) && !self.is_blank() {
            write!(f, "\\{}", self.value)?;
        } else if self.is(TokenKind::MACROARG) {
            write!(f, "#{}", self.value)?;
        } else if self.is(TokenKind::COMMENT) {
            write!(f, "%{}", self.value)?;
        } else {
            write!(f, "{}", self.value)?;
        }
        if self.is(TokenKind::STAR) {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::COMMAND, "frac").to_string(), "\\frac");
        assert_eq!(
            Token::new(TokenKind::COMMAND | TokenKind::STAR, "operatorname").to_string(),
            "\\operatorname*"
        );
        assert_eq!(Token::new(TokenKind::MACROARG, "1").to_string(), "#1");
        assert_eq!(Token::new(TokenKind::LETTER, "x").to_string(), "x");
        assert_eq!(
            Token::new(TokenKind::ENV | TokenKind::OPEN, "matrix").to_string(),
            "\\begin{matrix}"
        );
    }

    #[test]
    fn test_bigness_levels() {
        for level in 1..=4 {
            assert_eq!(TokenKind::from_bigness(level).bigness(), level);
        }
        assert_eq!(TokenKind::LETTER.bigness(), 0);
        assert_eq!((TokenKind::OPEN | TokenKind::BIGNESS3).bigness(), 3);
    }

    #[test]
    fn test_breaks() {
        assert!(Token::new(TokenKind::RESERVED, "&").is_cell_break());
        assert!(!Token::new(TokenKind::CHAR | TokenKind::ESCAPED, "&").is_cell_break());
        assert!(Token::new(TokenKind::COMMAND, "\\").is_row_break());
        assert!(Token::new(TokenKind::COMMAND, "cr").is_row_break());
    }
}
