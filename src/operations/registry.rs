//! Static operator registry
//!
//! Maps each operator symbol to its arity and its evaluation/differentiation
//! rule pair. The table is built once and never mutated; the `sumrecK` and
//! `hmeanK` families are pre-built for K = 2..=5 and synthesized on demand
//! for any larger K from the same factories.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::ast::Expr;
use crate::operations::definitions;

/// Number of operands an operator requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands
    Fixed(usize),
    /// Any number of operands
    Variadic,
}

impl Arity {
    /// Whether an operand count satisfies this arity
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

/// Definition of an operator: symbol, arity, and rule pair.
///
/// Rules are plain `fn` items, so cloning a definition shares them; a
/// definition carried by an operation node is the same rule pair the
/// registry serves.
#[derive(Clone)]
pub(crate) struct OpDef {
    /// Canonical symbol (`"+"`, `"sumrec3"`, ...)
    pub(crate) name: Cow<'static, str>,
    pub(crate) arity: Arity,
    /// Numeric rule, applied to the already-evaluated children
    pub(crate) eval: fn(&[f64]) -> f64,
    /// Symbolic rule: (children, child derivatives, target variable name).
    /// Never checks arity; that belongs to the parser and the construction
    /// helpers.
    pub(crate) derivative: fn(&[Expr], &[Expr], &str) -> Expr,
}

impl OpDef {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn arity(&self) -> Arity {
        self.arity
    }
}

static REGISTRY: OnceLock<HashMap<String, OpDef>> = OnceLock::new();

fn init_registry() -> HashMap<String, OpDef> {
    let mut map = HashMap::with_capacity(16);
    for def in definitions::all_definitions() {
        map.insert(def.name.to_string(), def);
    }
    map
}

/// Central lookup for operator definitions
pub(crate) struct Registry;

impl Registry {
    /// Resolve an operator symbol to its definition.
    ///
    /// Fixed entries come from the static table; `sumrecK`/`hmeanK` for
    /// K >= 2 beyond the pre-built range are synthesized from the family
    /// factories. Anything else is `None`.
    pub(crate) fn resolve(symbol: &str) -> Option<OpDef> {
        if let Some(def) = REGISTRY.get_or_init(init_registry).get(symbol) {
            return Some(def.clone());
        }
        family(symbol)
    }
}

fn family(symbol: &str) -> Option<OpDef> {
    if let Some(k) = family_count(symbol, "sumrec") {
        return Some(definitions::sumrec_def(k));
    }
    if let Some(k) = family_count(symbol, "hmean") {
        return Some(definitions::hmean_def(k));
    }
    None
}

/// `prefix` followed by a decimal operand count; only K >= 2 is an operator
fn family_count(symbol: &str, prefix: &str) -> Option<usize> {
    let digits = symbol.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let k = digits.parse::<usize>().ok()?;
    if k >= 2 {
        Some(k)
    } else {
        None
    }
}
