//! TeX Lexer/Tokenizer
//!
//! Converts a math source string into a stream of classified tokens, then
//! post-processes that stream so the parser never has to look backwards:
//! - Sizing commands (`\left`, `\bigr`, ...) are folded into the delimiter
//!   that follows them
//! - `{}` pairs and `\begin`/`\end` pairs are matched strictly
//! - Remaining delimiters are matched heuristically
//! - `\begin{name}` / `\end{name}` collapse into single environment tokens

use super::token::{Token, TokenKind};
use crate::utils::error::{TexError, TexResult};
use std::iter::Peekable;
use std::str::Chars;

/// Number of tokens shown on each side of an offending token in diagnostics
const CONTEXT_LENGTH: usize = 16;

const CHAR_OPEN: &[char] = &['(', '[', '{'];
const CHAR_CLOSE: &[char] = &[')', ']', '}'];
const CHAR_RESERVED: &[char] = &['#', '$', '%', '^', '&', '_', '{', '}', '~', '\\'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexerState {
    Begin,
    Space,
    Number,
    WasBackslash,
    Command,
    Comment,
    MacroArg,
}

/// The TeX Lexer that converts source text to tokens
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
        }
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Option<Token> {
        self.chars.next();
        Some(Token::new(kind, c.to_string()))
    }

    /// Read the next token. A token ends as soon as a character that does not
    /// fit the current state is peeked; that character is left for the next
    /// call.
    fn next_token(&mut self) -> Option<Token> {
        let mut state = LexerState::Begin;
        let mut kind = TokenKind::empty();
        let mut value = String::new();

        while let Some(&c) = self.chars.peek() {
            match state {
                LexerState::Begin => match c {
                    c if c.is_alphabetic() => return self.single(TokenKind::LETTER, c),
                    c if c.is_numeric() => {
                        self.chars.next();
                        state = LexerState::Number;
                        kind = TokenKind::NUMBER;
                        value.push(c);
                    }
                    '\\' => {
                        self.chars.next();
                        state = LexerState::WasBackslash;
                    }
                    '{' => return self.single(TokenKind::CURLY | TokenKind::OPEN, c),
                    '}' => return self.single(TokenKind::CURLY | TokenKind::CLOSE, c),
                    c if CHAR_OPEN.contains(&c) => return self.single(TokenKind::OPEN, c),
                    c if CHAR_CLOSE.contains(&c) => return self.single(TokenKind::CLOSE, c),
                    '^' | '_' => return self.single(TokenKind::SUBSUP, c),
                    '%' => {
                        self.chars.next();
                        state = LexerState::Comment;
                        kind = TokenKind::COMMENT;
                    }
                    '#' => {
                        self.chars.next();
                        state = LexerState::MacroArg;
                    }
                    c if CHAR_RESERVED.contains(&c) => return self.single(TokenKind::RESERVED, c),
                    c if c.is_whitespace() => {
                        self.chars.next();
                        state = LexerState::Space;
                        kind = TokenKind::WHITESPACE;
                        value.push(' ');
                    }
                    '|' => return self.single(TokenKind::FENCE, c),
                    _ => return self.single(TokenKind::CHAR, c),
                },

                LexerState::Space => {
                    if !c.is_whitespace() {
                        break;
                    }
                    self.chars.next();
                }

                LexerState::Number => {
                    if !(c.is_numeric() || c == '.') {
                        break;
                    }
                    self.chars.next();
                    value.push(c);
                }

                LexerState::Comment => {
                    if c == '\n' {
                        break;
                    }
                    self.chars.next();
                    value.push(c);
                }

                LexerState::MacroArg => {
                    if c.is_ascii_digit() {
                        return self.single(TokenKind::MACROARG, c);
                    }
                    return Some(Token::new(TokenKind::RESERVED, "#"));
                }

                LexerState::WasBackslash => match c {
                    '|' => return self.single(TokenKind::FENCE | TokenKind::ESCAPED, c),
                    c if CHAR_OPEN.contains(&c) => {
                        return self.single(
                            TokenKind::OPEN | TokenKind::ESCAPED | TokenKind::FENCE,
                            c,
                        )
                    }
                    c if CHAR_CLOSE.contains(&c) => {
                        return self.single(
                            TokenKind::CLOSE | TokenKind::ESCAPED | TokenKind::FENCE,
                            c,
                        )
                    }
                    // `\\` is the row/line break control symbol
                    '\\' => return self.single(TokenKind::COMMAND, c),
                    c if CHAR_RESERVED.contains(&c) => {
                        return self.single(TokenKind::CHAR | TokenKind::ESCAPED, c)
                    }
                    c if c.is_whitespace() => {
                        self.chars.next();
                        return Some(Token::new(TokenKind::WHITESPACE | TokenKind::COMMAND, " "));
                    }
                    c if c.is_alphabetic() => {
                        self.chars.next();
                        state = LexerState::Command;
                        kind = TokenKind::COMMAND;
                        value.push(c);
                    }
                    _ => return self.single(TokenKind::COMMAND, c),
                },

                LexerState::Command => {
                    if c == '*' {
                        self.chars.next();
                        kind |= TokenKind::STAR;
                        break;
                    }
                    if !c.is_alphabetic() {
                        break;
                    }
                    self.chars.next();
                    value.push(c);
                }
            }
        }

        match state {
            LexerState::Begin => None,
            // Lone backslash at end of input
            LexerState::WasBackslash => Some(Token::new(TokenKind::CHAR, "\\")),
            LexerState::MacroArg => Some(Token::new(TokenKind::RESERVED, "#")),
            _ => Some(Token::new(kind, value)),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lex a string into raw tokens without any post-processing
pub fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Lex a string and run the full post-processing pipeline on the result
pub fn tokenize(input: &str) -> TexResult<Vec<Token>> {
    post_process_tokens(lex(input))
}

/// Convert tokens back into TeX source. Comments are dropped.
pub fn stringify_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| !t.is(TokenKind::COMMENT))
        .map(|t| t.to_string())
        .collect()
}

/// Build the caret diagnostic shown under a window of tokens around `pos`
pub fn error_context(tokens: &[Token], pos: usize) -> String {
    let start = pos.saturating_sub(CONTEXT_LENGTH);
    let end = (pos + CONTEXT_LENGTH).min(tokens.len());
    if start >= end || pos >= tokens.len() {
        return String::new();
    }
    let before = stringify_tokens(&tokens[start..pos]);
    let window = stringify_tokens(&tokens[start..end]);
    let width = tokens[pos].to_string().chars().count().max(1);
    format!(
        "\n{}\n{}{}HERE\n",
        window,
        " ".repeat(before.chars().count()),
        "^".repeat(width)
    )
}

/// Bigness level and orientation suffix (`l`, `r`, `m`) of a sizing command
fn sizing(name: &str) -> Option<(u8, Option<char>)> {
    let level = |base: &str| match base {
        "big" => Some(1),
        "Big" => Some(2),
        "bigg" => Some(3),
        "Bigg" => Some(4),
        _ => None,
    };
    if let Some(l) = level(name) {
        return Some((l, None));
    }
    let (i, side) = name.char_indices().last()?;
    if !matches!(side, 'l' | 'r' | 'm') {
        return None;
    }
    level(&name[..i]).map(|l| (l, Some(side)))
}

/// Fold fence and sizing commands into the delimiter that follows them.
///
/// `\left`, `\right` and `\middle` mark the delimiter as a stretchy fence;
/// `\big` and friends attach a bigness level. `\left.` and `\right.` turn the
/// dot into an invisible null fence. Whitespace between the command and the
/// delimiter is dropped.
pub fn fix_fences(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(tok) = iter.next() {
        if !tok.is(TokenKind::COMMAND) || tok.is(TokenKind::WHITESPACE) {
            out.push(tok);
            continue;
        }
        let name = tok.value.as_str();
        let (add, remove) = match name {
            "left" => (TokenKind::FENCE | TokenKind::OPEN, TokenKind::CLOSE),
            "right" => (TokenKind::FENCE | TokenKind::CLOSE, TokenKind::OPEN),
            "middle" => (TokenKind::FENCE, TokenKind::OPEN | TokenKind::CLOSE),
            _ => {
                let Some((level, side)) = sizing(name) else {
                    out.push(tok);
                    continue;
                };
                let size = TokenKind::from_bigness(level);
                match side {
                    Some('l') => (size | TokenKind::OPEN, TokenKind::CLOSE | TokenKind::FENCE),
                    Some('r') => (size | TokenKind::CLOSE, TokenKind::OPEN | TokenKind::FENCE),
                    _ => (size, TokenKind::OPEN | TokenKind::CLOSE | TokenKind::FENCE),
                }
            }
        };

        while iter.peek().is_some_and(|t| t.is_blank()) {
            iter.next();
        }
        let Some(mut delim) = iter.next() else {
            out.push(tok);
            break;
        };
        if delim.value == "." && !delim.is(TokenKind::COMMAND) {
            delim.value.clear();
            delim.kind = TokenKind::NULL;
        }
        delim.kind = (delim.kind | add) & !remove;
        out.push(delim);
    }

    out
}

fn brace_kind_name(tok: &Token) -> String {
    if tok.is(TokenKind::ENV) {
        format!("environment ({})", tok.value)
    } else {
        "curly brace".to_string()
    }
}

/// Strictly pair tokens carrying `kind` (`CURLY` or `ENV`).
///
/// Fails with [`TexError::MismatchedBrace`] when a closer has no opener, when
/// an `\end{x}` closes a `\begin{y}`, or when an opener is never closed.
pub fn match_braces_critical(tokens: &mut [Token], kind: TokenKind) -> TexResult<()> {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..tokens.len() {
        let t = &tokens[i];
        if t.is(TokenKind::OPEN | kind) {
            stack.push(i);
        } else if t.is(TokenKind::CLOSE | kind) {
            let Some(&pos) = stack.last() else {
                return Err(TexError::mismatched(
                    brace_kind_name(t),
                    i,
                    error_context(tokens, i),
                ));
            };
            if kind == TokenKind::ENV && tokens[pos].value != t.value {
                return Err(TexError::mismatched(
                    brace_kind_name(&tokens[pos]),
                    i,
                    error_context(tokens, i),
                ));
            }
            stack.pop();
            let offset = i as isize - pos as isize;
            tokens[i].match_offset = -offset;
            tokens[pos].match_offset = offset;
        }
    }
    if let Some(pos) = stack.pop() {
        return Err(TexError::mismatched(
            brace_kind_name(&tokens[pos]),
            pos,
            error_context(tokens, pos),
        ));
    }
    Ok(())
}

/// Curly groups and environments must nest inside each other:
/// `{\begin{x}}\end{x}` is rejected even though each kind pairs up.
fn check_nesting(tokens: &[Token]) -> TexResult<()> {
    let mut stack: Vec<usize> = Vec::new();
    for (i, t) in tokens.iter().enumerate() {
        if !t.is_any(TokenKind::CURLY | TokenKind::ENV) || t.match_offset == 0 {
            continue;
        }
        if t.match_offset > 0 {
            stack.push(i);
            continue;
        }
        let partner = (i as isize + t.match_offset) as usize;
        let top = stack.pop();
        if top != Some(partner) {
            let innermost = top.unwrap_or(partner);
            return Err(TexError::mismatched(
                brace_kind_name(&tokens[innermost]),
                i,
                error_context(tokens, i),
            ));
        }
    }
    Ok(())
}

fn opposite(value: &str) -> Option<&'static str> {
    match value {
        "(" => Some(")"),
        "[" => Some("]"),
        "{" => Some("}"),
        ")" => Some("("),
        "]" => Some("["),
        "}" => Some("{"),
        _ => None,
    }
}

/// Pair the remaining open/close tokens. Fences pair with fences, other
/// delimiters with their structural partner. Unpaired closers are logged,
/// not rejected.
pub fn match_braces_lazy(tokens: &mut [Token]) {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..tokens.len() {
        let t = &tokens[i];
        if t.match_offset != 0 {
            continue;
        }
        if t.is(TokenKind::OPEN) {
            stack.push(i);
            continue;
        }
        if !t.is(TokenKind::CLOSE) {
            continue;
        }
        let paired = stack.last().is_some_and(|&pos| {
            let mate = &tokens[pos];
            (mate.is(TokenKind::FENCE) && t.is(TokenKind::FENCE))
                || opposite(&mate.value) == Some(t.value.as_str())
        });
        if paired {
            if let Some(pos) = stack.pop() {
                let offset = i as isize - pos as isize;
                tokens[i].match_offset = -offset;
                tokens[pos].match_offset = offset;
            }
        } else {
            log::warn!(
                "potentially unmatched closing delimiter{}",
                error_context(tokens, i)
            );
        }
    }
}

/// Collapse `\begin{name}` / `\end{name}` into single `ENV` tokens.
/// Curly braces must already be matched; all match offsets are reset.
fn canonicalize_environments(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let mut tok = tokens[i].clone();
        tok.match_offset = 0;
        if tok.is_cs("begin") || tok.is_cs("end") {
            let mut j = i + 1;
            while j < tokens.len() && tokens[j].is_blank() {
                j += 1;
            }
            if j < tokens.len() && tokens[j].is(TokenKind::CURLY | TokenKind::OPEN) {
                let end = (j as isize + tokens[j].match_offset) as usize;
                let mut name = stringify_tokens(&tokens[j + 1..end]);
                let mut kind = TokenKind::ENV;
                kind |= if tok.value == "begin" {
                    TokenKind::OPEN
                } else {
                    TokenKind::CLOSE
                };
                if name.ends_with('*') {
                    name.pop();
                    kind |= TokenKind::STAR;
                }
                out.push(Token::new(kind, name.trim()));
                i = end + 1;
                continue;
            }
        }
        out.push(tok);
        i += 1;
    }
    out
}

/// Full post-lexing pipeline: fence fix-up, curly matching, environment
/// canonicalisation, environment matching, curly re-matching, nesting
/// check, lazy matching.
pub fn post_process_tokens(tokens: Vec<Token>) -> TexResult<Vec<Token>> {
    let mut tokens = fix_fences(tokens);
    for t in tokens.iter_mut() {
        t.match_offset = 0;
    }
    match_braces_critical(&mut tokens, TokenKind::CURLY)?;
    let mut tokens = canonicalize_environments(tokens);
    match_braces_critical(&mut tokens, TokenKind::ENV)?;
    // indices shifted while collapsing environments
    match_braces_critical(&mut tokens, TokenKind::CURLY)?;
    check_nesting(&tokens)?;
    match_braces_lazy(&mut tokens);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_lex() {
        let tokens = lex("ab");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(TokenKind::LETTER, "a"));
    }

    #[test]
    fn test_number_run() {
        let tokens = lex("3.14x");
        assert_eq!(tokens[0], Token::new(TokenKind::NUMBER, "3.14"));
        assert_eq!(tokens[1], Token::new(TokenKind::LETTER, "x"));
    }

    #[test]
    fn test_command_and_star() {
        let tokens = lex("\\frac{a}{b}");
        assert_eq!(tokens[0], Token::new(TokenKind::COMMAND, "frac"));
        assert_eq!(tokens[1].kind, TokenKind::CURLY | TokenKind::OPEN);

        let tokens = lex("\\operatorname*{x}");
        assert_eq!(tokens[0].value, "operatorname");
        assert!(tokens[0].is(TokenKind::STAR));
    }

    #[test]
    fn test_command_followed_by_space() {
        let tokens = lex("\\alpha  x");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::new(TokenKind::WHITESPACE, " "));
    }

    #[test]
    fn test_control_symbols() {
        let tokens = lex("\\,\\\\\\ ");
        assert_eq!(tokens[0], Token::new(TokenKind::COMMAND, ","));
        assert_eq!(tokens[1], Token::new(TokenKind::COMMAND, "\\"));
        assert_eq!(tokens[2].kind, TokenKind::WHITESPACE | TokenKind::COMMAND);
    }

    #[test]
    fn test_escaped_chars() {
        assert_eq!(
            kinds("\\{\\}\\|\\&"),
            vec![
                TokenKind::OPEN | TokenKind::ESCAPED | TokenKind::FENCE,
                TokenKind::CLOSE | TokenKind::ESCAPED | TokenKind::FENCE,
                TokenKind::FENCE | TokenKind::ESCAPED,
                TokenKind::CHAR | TokenKind::ESCAPED,
            ]
        );
    }

    #[test]
    fn test_reserved_and_macro_args() {
        let tokens = lex("#1&~#x");
        assert_eq!(tokens[0], Token::new(TokenKind::MACROARG, "1"));
        assert_eq!(tokens[1], Token::new(TokenKind::RESERVED, "&"));
        assert_eq!(tokens[2], Token::new(TokenKind::RESERVED, "~"));
        assert_eq!(tokens[3], Token::new(TokenKind::RESERVED, "#"));
        assert_eq!(tokens[4], Token::new(TokenKind::LETTER, "x"));
    }

    #[test]
    fn test_comment() {
        let tokens = lex("a%comment\nb");
        assert_eq!(tokens[1], Token::new(TokenKind::COMMENT, "comment"));
        assert_eq!(tokens[2].kind, TokenKind::WHITESPACE);
        assert_eq!(tokens[3], Token::new(TokenKind::LETTER, "b"));
    }

    #[test]
    fn test_roundtrip() {
        for input in [
            "\\frac{a^2}{b_1}",
            "\\left( x \\right]",
            "\\begin{pmatrix*}1&2\\\\3&4\\end{pmatrix*}",
            "\\{a\\} \\, #1",
        ] {
            assert_eq!(stringify_tokens(&lex(input)), input);
        }
        assert_eq!(stringify_tokens(&lex("a   b%note\n")), "a b ");
    }

    #[test]
    fn test_fix_fences() {
        let tokens = fix_fences(lex("\\left( x \\right."));
        assert_eq!(tokens[0].value, "(");
        assert!(tokens[0].is(TokenKind::FENCE | TokenKind::OPEN));
        let last = tokens.last().unwrap();
        assert!(last.is(TokenKind::NULL | TokenKind::FENCE | TokenKind::CLOSE));
        assert_eq!(last.value, "");

        let tokens = fix_fences(lex("\\Bigl( \\bigr)"));
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is(TokenKind::OPEN | TokenKind::BIGNESS2));
        assert!(!tokens[0].is(TokenKind::FENCE));
        assert!(tokens[2].is(TokenKind::CLOSE | TokenKind::BIGNESS1));
        assert!(!tokens[2].is(TokenKind::OPEN));

        let tokens = fix_fences(lex("\\bigg|"));
        assert_eq!(tokens[0].kind.bigness(), 3);
        assert!(!tokens[0].is(TokenKind::FENCE));
    }

    #[test]
    fn test_match_offsets_symmetric() {
        let tokens = tokenize("\\frac{a}{\\left(b\\right)}").unwrap();
        for (i, t) in tokens.iter().enumerate() {
            if t.match_offset != 0 {
                let j = (i as isize + t.match_offset) as usize;
                assert_eq!(tokens[j].match_offset, -t.match_offset);
                assert_ne!(t.is(TokenKind::OPEN), tokens[j].is(TokenKind::OPEN));
            }
        }
        assert_eq!(tokens[1].match_offset, 2);
    }

    #[test]
    fn test_environment_tokens() {
        let tokens = tokenize("\\begin{matrix*}a\\end{matrix*}").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is(TokenKind::ENV | TokenKind::OPEN | TokenKind::STAR));
        assert_eq!(tokens[0].value, "matrix");
        assert_eq!(tokens[0].match_offset, 2);
        assert_eq!(tokens[2].match_offset, -2);
    }

    #[test]
    fn test_mismatched_curly() {
        let err = tokenize("\\frac{a}{b").unwrap_err();
        match err {
            TexError::MismatchedBrace { kind, pos, context } => {
                assert_eq!(kind, "curly brace");
                assert_eq!(pos, 4);
                assert!(context.contains("^HERE"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(tokenize("a}").is_err());
    }

    #[test]
    fn test_mismatched_environment() {
        let err = tokenize("\\begin{matrix}a\\end{pmatrix}").unwrap_err();
        assert!(err.to_string().contains("environment (matrix)"));
    }

    #[test]
    fn test_environment_crossing_group() {
        let err = tokenize("{\\begin{matrix}a}\\end{matrix}").unwrap_err();
        match err {
            TexError::MismatchedBrace { kind, pos, .. } => {
                assert_eq!(kind, "environment (matrix)");
                assert_eq!(pos, 3);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(tokenize("\\begin{matrix}{a\\end{matrix}}").is_err());
        assert!(tokenize("{\\begin{matrix}a\\end{matrix}}").is_ok());
    }

    #[test]
    fn test_lazy_matching_tolerates_strays() {
        let tokens = tokenize("[0,1)").unwrap();
        assert!(tokens.iter().all(|t| t.match_offset == 0));
        let tokens = tokenize("(a]b)").unwrap();
        assert_eq!(tokens[0].match_offset, 4);
    }

    #[test]
    fn test_error_context_caret() {
        let tokens = lex("ab}c");
        let ctx = error_context(&tokens, 2);
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines[1], "ab}c");
        assert_eq!(lines[2], "  ^HERE");
    }
}
