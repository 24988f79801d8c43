//! Expression views and the double-ended expression queue the parser consumes

use super::token::{Token, TokenKind};
use std::collections::VecDeque;

/// Shape of an [`Expr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    /// One token
    Single,
    /// `[ ... ]`
    Options,
    /// A matched fence pair and its contents
    Fenced,
    /// `{ ... }`
    Group,
    /// `\begin{x} ... \end{x}`
    Environment,
    /// Whitespace or comment
    Whitespace,
}

/// A view over a contiguous run of tokens.
///
/// Composite expressions include their delimiters; use [`Expr::inner`] for the
/// enclosed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expr<'t> {
    pub kind: ExprKind,
    pub tokens: &'t [Token],
}

impl<'t> Expr<'t> {
    pub fn new(kind: ExprKind, tokens: &'t [Token]) -> Self {
        Expr { kind, tokens }
    }

    /// The first (for composites: opening) token
    pub fn first(&self) -> Option<&'t Token> {
        self.tokens.first()
    }

    /// The closing delimiter of a composite expression
    pub fn last(&self) -> Option<&'t Token> {
        match self.kind {
            ExprKind::Single | ExprKind::Whitespace => None,
            _ => self.tokens.last(),
        }
    }

    /// Tokens between the delimiters, or the token itself for a single
    pub fn inner(&self) -> &'t [Token] {
        match self.kind {
            ExprKind::Single | ExprKind::Whitespace => self.tokens,
            _ if self.tokens.len() >= 2 => &self.tokens[1..self.tokens.len() - 1],
            _ => &[],
        }
    }

    /// Tokens of this expression used as a command or macro argument:
    /// braces and brackets are stripped, everything else is kept whole.
    pub fn arg_tokens(&self) -> &'t [Token] {
        match self.kind {
            ExprKind::Group | ExprKind::Options => self.inner(),
            _ => self.tokens,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == ExprKind::Whitespace
    }

    /// A single unescaped `&`, `\\` or `\cr`
    pub fn is_break(&self) -> bool {
        self.kind == ExprKind::Single
            && self
                .first()
                .is_some_and(|t| t.is_cell_break() || t.is_row_break())
    }
}

/// FIFO of expressions that also allows pushing back to the front
#[derive(Debug, Clone, Default)]
pub struct ExprQueue<'t> {
    items: VecDeque<Expr<'t>>,
}

impl<'t> ExprQueue<'t> {
    pub fn new() -> Self {
        ExprQueue {
            items: VecDeque::new(),
        }
    }

    /// Group a matched token slice into expressions.
    ///
    /// A token with a positive match offset starts a composite expression
    /// spanning to its partner: curly groups, environments, fences and
    /// brackets. Plain parentheses stay single tokens.
    pub fn from_tokens(tokens: &'t [Token]) -> Self {
        let mut items = VecDeque::new();
        let mut i = 0;
        while i < tokens.len() {
            let t = &tokens[i];
            if t.is_blank() {
                items.push_back(Expr::new(ExprKind::Whitespace, &tokens[i..=i]));
                i += 1;
                continue;
            }
            let end = i as isize + t.match_offset;
            if t.match_offset > 0 && (end as usize) < tokens.len() {
                let end = end as usize;
                let kind = if t.is(TokenKind::CURLY) {
                    Some(ExprKind::Group)
                } else if t.is(TokenKind::ENV) {
                    Some(ExprKind::Environment)
                } else if t.is(TokenKind::FENCE) {
                    Some(ExprKind::Fenced)
                } else if t.value == "[" && !t.is(TokenKind::ESCAPED) {
                    Some(ExprKind::Options)
                } else {
                    None
                };
                if let Some(kind) = kind {
                    items.push_back(Expr::new(kind, &tokens[i..=end]));
                    i = end + 1;
                    continue;
                }
            }
            items.push_back(Expr::new(ExprKind::Single, &tokens[i..=i]));
            i += 1;
        }
        ExprQueue { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of tokens still covered by the queued expressions
    pub fn remaining_tokens(&self) -> usize {
        self.items.iter().map(|e| e.tokens.len()).sum()
    }

    pub fn pop_front(&mut self) -> Option<Expr<'t>> {
        self.items.pop_front()
    }

    pub fn push_front(&mut self, expr: Expr<'t>) {
        self.items.push_front(expr);
    }

    pub fn push_back(&mut self, expr: Expr<'t>) {
        self.items.push_back(expr);
    }

    pub fn peek_front(&self) -> Option<&Expr<'t>> {
        self.items.front()
    }

    /// Pop and discard expressions while `pred` holds; return the first one
    /// that does not satisfy it.
    pub fn pop_front_while<F>(&mut self, mut pred: F) -> Option<Expr<'t>>
    where
        F: FnMut(&Expr<'t>) -> bool,
    {
        while let Some(expr) = self.items.pop_front() {
            if !pred(&expr) {
                return Some(expr);
            }
        }
        None
    }

    /// Next non-whitespace expression
    pub fn pop_argument(&mut self) -> Option<Expr<'t>> {
        self.pop_front_while(Expr::is_whitespace)
    }

    /// Next non-whitespace expression, without consuming anything
    pub fn peek_argument(&self) -> Option<&Expr<'t>> {
        self.items.iter().find(|e| !e.is_whitespace())
    }

    /// Pop a bracketed option if it is the next non-whitespace expression;
    /// otherwise leave the queue untouched.
    pub fn pop_options(&mut self) -> Option<Expr<'t>> {
        if self.peek_argument()?.kind != ExprKind::Options {
            return None;
        }
        self.pop_argument()
    }

    /// Move expressions into a new queue up to (not including) the first
    /// cell or row break at this nesting level.
    pub fn split_off_until_break(&mut self) -> ExprQueue<'t> {
        let end = self
            .items
            .iter()
            .position(Expr::is_break)
            .unwrap_or(self.items.len());
        let rest = self.items.split_off(end);
        let head = std::mem::replace(&mut self.items, rest);
        ExprQueue { items: head }
    }

    /// Push the expressions of `tokens` onto the front, keeping their order
    pub fn splice_front(&mut self, tokens: &'t [Token]) {
        let inner = ExprQueue::from_tokens(tokens);
        for expr in inner.items.into_iter().rev() {
            self.items.push_front(expr);
        }
    }
}

impl<'t> Iterator for ExprQueue<'t> {
    type Item = Expr<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_front()
    }
}
