//! TeX Primitive Commands for Macro Definitions
//!
//! This module handles parsing of definition commands met while parsing:
//! - `\newcommand`, `\renewcommand`, `\providecommand`
//! - `\def`

use super::macros::Macro;
use super::token::{Token, TokenKind};
use super::utils::{ExprKind, ExprQueue};
use crate::utils::error::{TexError, TexResult};

/// Which command introduced a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    /// \newcommand{\name}[n][default]{body}
    NewCommand,
    /// \renewcommand (same structure as newcommand)
    RenewCommand,
    /// \providecommand (same structure)
    ProvideCommand,
    /// \def\name#1#2{body}
    Def,
}

impl DefinitionKind {
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            "newcommand" => Some(DefinitionKind::NewCommand),
            "renewcommand" => Some(DefinitionKind::RenewCommand),
            "providecommand" => Some(DefinitionKind::ProvideCommand),
            "def" => Some(DefinitionKind::Def),
            _ => None,
        }
    }

    pub fn command_name(self) -> &'static str {
        match self {
            DefinitionKind::NewCommand => "newcommand",
            DefinitionKind::RenewCommand => "renewcommand",
            DefinitionKind::ProvideCommand => "providecommand",
            DefinitionKind::Def => "def",
        }
    }

    /// `\renewcommand` and `\def` replace an existing binding
    pub fn overwrites(self) -> bool {
        matches!(self, DefinitionKind::RenewCommand | DefinitionKind::Def)
    }
}

/// A parsed definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub kind: DefinitionKind,
    pub name: String,
    pub arg_count: usize,
    pub default: Option<Vec<Token>>,
    pub body: Vec<Token>,
}

impl Definition {
    /// The body mentions the macro being defined
    pub fn is_recursive(&self) -> bool {
        self.body.iter().any(|t| t.is_cs(&self.name))
    }

    pub fn into_macro(self) -> (String, Macro) {
        (
            self.name,
            Macro::dynamic(self.body, self.arg_count, self.default),
        )
    }
}

fn single_command(tokens: &[Token]) -> Option<&Token> {
    let mut non_blank = tokens.iter().filter(|t| !t.is_blank());
    match (non_blank.next(), non_blank.next()) {
        (Some(t), None) if t.is(TokenKind::COMMAND) && !t.is(TokenKind::WHITESPACE) => Some(t),
        _ => None,
    }
}

/// Parse a definition whose command token has already been consumed.
pub fn parse_definition(kind: DefinitionKind, queue: &mut ExprQueue<'_>) -> TexResult<Definition> {
    match kind {
        DefinitionKind::Def => parse_def(queue),
        _ => parse_newcommand_style(kind, queue),
    }
}

fn parse_newcommand_style(kind: DefinitionKind, queue: &mut ExprQueue<'_>) -> TexResult<Definition> {
    let cmd = kind.command_name();
    let name = queue
        .pop_argument()
        .and_then(|e| match e.kind {
            ExprKind::Single | ExprKind::Group => single_command(e.arg_tokens()),
            _ => None,
        })
        .map(|t| t.value.clone())
        .ok_or_else(|| TexError::definition(cmd, "expects an argument of exactly one \\command"))?;

    let mut arg_count = 0;
    let mut default = None;
    if let Some(opt) = queue.pop_options() {
        let count: String = opt.inner().iter().map(|t| t.value.as_str()).collect();
        arg_count = count
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n <= 9)
            .ok_or_else(|| TexError::definition(cmd, "unspecified argument count"))?;
        if let Some(opt) = queue.pop_options() {
            default = Some(opt.inner().to_vec());
        }
    }

    let body = queue
        .pop_argument()
        .map(|e| e.arg_tokens().to_vec())
        .ok_or_else(|| TexError::definition(cmd, "missing definition body"))?;

    Ok(Definition {
        kind,
        name,
        arg_count,
        default,
        body,
    })
}

fn parse_def(queue: &mut ExprQueue<'_>) -> TexResult<Definition> {
    let name = queue
        .pop_argument()
        .filter(|e| e.kind == ExprKind::Single)
        .and_then(|e| single_command(e.tokens))
        .map(|t| t.value.clone())
        .ok_or_else(|| TexError::definition("def", "expects a \\command to define"))?;

    // Parameter text: only undelimited #1#2... is supported
    let mut arg_count = 0;
    loop {
        match queue.pop_argument() {
            Some(e) if e.kind == ExprKind::Single && e.tokens[0].is(TokenKind::MACROARG) => {
                if e.tokens[0].value != (arg_count + 1).to_string() {
                    return Err(TexError::definition("def", "parameters must be numbered in order"));
                }
                arg_count += 1;
            }
            Some(e) if e.kind == ExprKind::Group => {
                return Ok(Definition {
                    kind: DefinitionKind::Def,
                    name,
                    arg_count,
                    default: None,
                    body: e.inner().to_vec(),
                });
            }
            _ => return Err(TexError::definition("def", "missing definition body")),
        }
    }
}
