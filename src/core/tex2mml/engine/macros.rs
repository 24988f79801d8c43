//! User macro engine
//!
//! Predeclared macros are tokenised once, ordered by their dependencies and
//! flattened so that a call site expands in a single substitution. Macros
//! that lie on a dependency cycle are replaced by a bad-macro marker which
//! the parser renders as an error leaf. Macros defined at parse time
//! (`\newcommand`, `\def`, ...) are dynamic: they are never flattened and
//! expand lazily at each use.

use super::lexer::{post_process_tokens, tokenize};
use super::token::{Token, TokenKind};
use super::utils::{ExprKind, ExprQueue};
use crate::utils::error::{TexError, TexResult};
use fxhash::FxHashMap;
use indexmap::IndexMap;

/// Upper bound on nested expansion, both for flattening passes and for
/// dynamic macros expanding into other dynamic macros.
pub const MAX_EXPANSION_DEPTH: usize = 64;

/// Upper bound on runtime macro expansions within one parse. A branching
/// cycle such as `\a -> \b\b -> \a\a` stays shallow for a long time, so
/// depth alone does not bound the work.
pub const MAX_DYNAMIC_EXPANSIONS: usize = 1024;

/// A macro definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Macro {
    /// Body with `#N` placeholders
    pub definition: Vec<Token>,
    /// Default for an optional first argument, if the macro has one
    pub option_default: Option<Vec<Token>>,
    pub arg_count: usize,
    /// Defined while parsing rather than at document creation
    pub dynamic: bool,
}

impl Macro {
    /// A macro defined at parse time
    pub fn dynamic(definition: Vec<Token>, arg_count: usize, option_default: Option<Vec<Token>>) -> Self {
        Macro {
            definition,
            option_default,
            arg_count,
            dynamic: true,
        }
    }

    /// The stand-in definition of a macro on a dependency cycle
    fn bad(name: &str) -> Self {
        Macro {
            definition: vec![Token::new(TokenKind::BADMACRO, name)],
            ..Default::default()
        }
    }

    pub fn is_bad(&self) -> bool {
        matches!(self.definition.as_slice(), [t] if t.is(TokenKind::BADMACRO))
    }
}

/// Macros by name (without the leading backslash), in definition order
pub type MacroTable = IndexMap<String, Macro>;

/// Highest `#N` used in a token sequence
fn count_args(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| t.is(TokenKind::MACROARG))
        .filter_map(|t| t.value.parse::<usize>().ok())
        .max()
        .unwrap_or(0)
}

/// Kahn's algorithm restricted to `active` nodes. `deps[i]` lists the nodes
/// that `i` references; a node is emitted only after all of its active
/// dependencies.
fn topological_order(deps: &[Vec<usize>], active: &[bool]) -> Vec<usize> {
    let n = deps.len();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut indegree = vec![0usize; n];
    for (i, ds) in deps.iter().enumerate() {
        if !active[i] {
            continue;
        }
        for &j in ds.iter().filter(|&&j| active[j]) {
            dependents[j].push(i);
            indegree[i] += 1;
        }
    }
    let mut sources: Vec<usize> = (0..n).filter(|&i| active[i] && indegree[i] == 0).collect();
    sources.reverse();
    let mut order = Vec::with_capacity(n);
    while let Some(node) = sources.pop() {
        order.push(node);
        for &m in &dependents[node] {
            indegree[m] -= 1;
            if indegree[m] == 0 {
                sources.push(m);
            }
        }
    }
    order
}

/// True if `start` can reach itself through `deps` while staying inside `within`
fn on_cycle(start: usize, deps: &[Vec<usize>], within: &[bool]) -> bool {
    let mut seen = vec![false; deps.len()];
    let mut stack: Vec<usize> = deps[start].clone();
    while let Some(node) = stack.pop() {
        if node == start {
            return true;
        }
        if !within[node] || seen[node] {
            continue;
        }
        seen[node] = true;
        stack.extend(deps[node].iter().copied());
    }
    false
}

/// Tokenise, order, cycle-check and flatten a set of predeclared macros.
///
/// Macros whose source fails to tokenise are logged and skipped.
pub fn prepare_macros<I, K, V>(macros: I) -> MacroTable
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut table = MacroTable::default();
    for (name, source) in macros {
        let name = name.as_ref().trim_start_matches('\\');
        match tokenize(source.as_ref()) {
            Ok(definition) => {
                let arg_count = count_args(&definition);
                table.insert(
                    name.to_string(),
                    Macro {
                        definition,
                        option_default: None,
                        arg_count,
                        dynamic: false,
                    },
                );
            }
            Err(err) => log::warn!("could not tokenize macro \\{}: {}", name, err),
        }
    }

    let index: FxHashMap<&str, usize> = table
        .keys()
        .enumerate()
        .map(|(i, k)| (k.as_str(), i))
        .collect();
    let deps: Vec<Vec<usize>> = table
        .values()
        .map(|m| {
            let mut ds: Vec<usize> = m
                .definition
                .iter()
                .filter(|t| t.is(TokenKind::COMMAND) && !t.is(TokenKind::WHITESPACE))
                .filter_map(|t| index.get(t.value.as_str()).copied())
                .collect();
            ds.sort_unstable();
            ds.dedup();
            ds
        })
        .collect();
    drop(index);

    let all = vec![true; deps.len()];
    let mut resolved = vec![false; deps.len()];
    for i in topological_order(&deps, &all) {
        resolved[i] = true;
    }
    let leftover: Vec<bool> = resolved.iter().map(|r| !r).collect();
    let cyclic: Vec<bool> = (0..deps.len())
        .map(|i| leftover[i] && on_cycle(i, &deps, &leftover))
        .collect();

    for (i, (name, m)) in table.iter_mut().enumerate() {
        if cyclic[i] {
            log::warn!("{}", TexError::cycle(name.as_str()));
            *m = Macro::bad(name);
        }
    }

    let acyclic: Vec<bool> = cyclic.iter().map(|c| !c).collect();
    for i in topological_order(&deps, &acyclic) {
        let Some((name, m)) = table.get_index(i) else {
            continue;
        };
        let name = name.clone();
        let definition = m.definition.clone();
        match expand_macros(definition, &table) {
            Ok(flat) => {
                if let Some(m) = table.get_index_mut(i).map(|(_, m)| m) {
                    m.definition = flat;
                }
            }
            Err(err) => log::warn!("could not flatten macro \\{}: {}", name, err),
        }
    }

    table
}

/// Pop the arguments of a macro call site from `queue`.
///
/// If the macro has an optional first argument, a leading bracketed
/// expression fills `#1`; otherwise its stored default does.
pub fn collect_args(name: &str, m: &Macro, queue: &mut ExprQueue<'_>) -> TexResult<Vec<Vec<Token>>> {
    let mut args = Vec::with_capacity(m.arg_count);
    if let (Some(default), true) = (&m.option_default, m.arg_count > 0) {
        match queue.pop_options() {
            Some(opt) => args.push(opt.inner().to_vec()),
            None => args.push(default.clone()),
        }
    }
    while args.len() < m.arg_count {
        let arg = queue.pop_argument().filter(|e| {
            !(e.kind == ExprKind::Single
                && e.first().is_some_and(|t| t.is(TokenKind::CLOSE) && t.match_offset != 0))
        });
        match arg {
            Some(expr) => args.push(expr.arg_tokens().to_vec()),
            None => return Err(TexError::arg_count(name, m.arg_count, args.len())),
        }
    }
    Ok(args)
}

/// Substitute `args` into the body of `m`. Match offsets are cleared so the
/// result can be re-matched in its new surroundings. Placeholders without a
/// corresponding argument are left in place.
pub fn expand_single(name: &str, m: &Macro, args: &[Vec<Token>]) -> TexResult<Vec<Token>> {
    let mut result = Vec::with_capacity(m.definition.len() * 2);
    for t in &m.definition {
        if t.is(TokenKind::MACROARG) {
            let n: usize = t
                .value
                .parse()
                .map_err(|_| TexError::expansion(name, format!("bad argument reference #{}", t.value)))?;
            if let Some(arg) = n.checked_sub(1).and_then(|k| args.get(k)) {
                result.extend(arg.iter().cloned().map(|mut a| {
                    a.match_offset = 0;
                    a
                }));
                continue;
            }
        }
        let mut t = t.clone();
        t.match_offset = 0;
        result.push(t);
    }
    Ok(result)
}

/// Expand every predeclared (non-dynamic) macro in `tokens` until a pass
/// makes no substitution. `tokens` must already be brace-matched.
pub fn expand_macros(mut tokens: Vec<Token>, table: &MacroTable) -> TexResult<Vec<Token>> {
    if table.values().all(|m| m.dynamic) {
        return Ok(tokens);
    }
    for _ in 0..MAX_EXPANSION_DEPTH {
        let mut expanded = false;
        let mut out = Vec::with_capacity(tokens.len() * 2);
        let mut i = 0;
        while i < tokens.len() {
            let t = &tokens[i];
            let callee = if t.is(TokenKind::COMMAND) && !t.is(TokenKind::WHITESPACE) {
                table.get(t.value.as_str()).filter(|m| !m.dynamic)
            } else {
                None
            };
            let Some(m) = callee else {
                let mut t = t.clone();
                t.match_offset = 0;
                out.push(t);
                i += 1;
                continue;
            };
            let rest = &tokens[i + 1..];
            let mut queue = ExprQueue::from_tokens(rest);
            let args = collect_args(&t.value, m, &mut queue)?;
            out.extend(expand_single(&t.value, m, &args)?);
            i = tokens.len() - queue.remaining_tokens();
            expanded = true;
        }
        if !expanded {
            return Ok(tokens);
        }
        tokens = post_process_tokens(out)?;
    }
    let name = tokens
        .iter()
        .find(|t| t.is(TokenKind::COMMAND) && table.contains_key(t.value.as_str()))
        .map(|t| t.value.clone())
        .unwrap_or_default();
    Err(TexError::expansion(name, "macro expansion did not terminate"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tex2mml::engine::lexer::stringify_tokens;

    fn table(defs: &[(&str, &str)]) -> MacroTable {
        prepare_macros(defs.iter().copied())
    }

    #[test]
    fn test_arg_count_is_highest_placeholder() {
        let t = table(&[("pair", "\\langle #1, #2 \\rangle"), ("skip", "#3")]);
        assert_eq!(t["pair"].arg_count, 2);
        assert_eq!(t["skip"].arg_count, 3);
    }

    #[test]
    fn test_flattening() {
        let t = table(&[("a", "\\b + 1"), ("b", "\\c^2"), ("c", "x")]);
        assert_eq!(stringify_tokens(&t["a"].definition), "x^2 + 1");
        for m in t.values() {
            assert!(!m
                .definition
                .iter()
                .any(|tok| tok.is(TokenKind::COMMAND) && t.contains_key(tok.value.as_str())));
        }
    }

    #[test]
    fn test_cycle_members_are_flagged() {
        let t = table(&[("a", "\\b"), ("b", "\\a"), ("c", "\\a + y"), ("d", "\\d")]);
        assert!(t["a"].is_bad());
        assert!(t["b"].is_bad());
        assert!(t["d"].is_bad());
        assert!(!t["c"].is_bad());
        assert!(t["c"].definition[0].is(TokenKind::BADMACRO));
    }

    #[test]
    fn test_untokenizable_macro_is_skipped() {
        let t = table(&[("broken", "{x"), ("ok", "y")]);
        assert!(!t.contains_key("broken"));
        assert!(t.contains_key("ok"));
    }

    #[test]
    fn test_expand_with_arguments() {
        let t = table(&[("R", "\\mathbb{R}"), ("sq", "{#1}^2")]);
        let tokens = tokenize("\\sq{a+b} \\in \\R").unwrap();
        let out = expand_macros(tokens, &t).unwrap();
        assert_eq!(stringify_tokens(&out), "{a+b}^2 \\in \\mathbb{R}");
        assert_eq!(out[0].match_offset, 4);
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let t = table(&[("sq", "#1^2")]);
        let tokens = tokenize("\\sq").unwrap();
        let err = expand_macros(tokens, &t).unwrap_err();
        assert_eq!(err, TexError::arg_count("sq", 1, 0));
    }

    #[test]
    fn test_dynamic_macros_are_not_expanded() {
        let mut t = MacroTable::default();
        t.insert(
            "f".to_string(),
            Macro::dynamic(tokenize("x").unwrap(), 0, None),
        );
        let tokens = tokenize("\\f").unwrap();
        let out = expand_macros(tokens.clone(), &t).unwrap();
        assert_eq!(out, tokens);
    }

    #[test]
    fn test_optional_argument_default() {
        let m = Macro::dynamic(tokenize("#1-#2").unwrap(), 2, Some(tokenize("0").unwrap()));
        let tokens = tokenize("{b}").unwrap();
        let mut q = ExprQueue::from_tokens(&tokens);
        let args = collect_args("f", &m, &mut q).unwrap();
        assert_eq!(stringify_tokens(&expand_single("f", &m, &args).unwrap()), "0-b");

        let tokens = tokenize("[a]{b}").unwrap();
        let mut q = ExprQueue::from_tokens(&tokens);
        let args = collect_args("f", &m, &mut q).unwrap();
        assert_eq!(stringify_tokens(&expand_single("f", &m, &args).unwrap()), "a-b");
    }
}
