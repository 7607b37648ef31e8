//! Declared-variable configuration shared by parsing and evaluation

use rustc_hash::FxHashMap;

/// Ordered list of declared variable names.
///
/// The position of a name in this list selects which entry of the binding
/// slice [`evaluate`](crate::Expr::evaluate) reads, and the parsers consult
/// the same list to recognize variable tokens. A context is a plain value
/// passed explicitly to every parse and evaluation call; independent
/// orderings can coexist in one process.
///
/// # Example
/// ```
/// use polish_diff::Context;
///
/// let ctx = Context::new(["a", "b"]);
/// assert_eq!(ctx.index_of("b"), Some(1));
/// assert!(!ctx.is_variable("x"));
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Context {
    /// Build a context from an ordered list of names. A repeated name keeps
    /// its first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ctx = Context {
            names: Vec::new(),
            index: FxHashMap::default(),
        };
        for name in names {
            let name = name.into();
            if !ctx.index.contains_key(&name) {
                ctx.index.insert(name.clone(), ctx.names.len());
                ctx.names.push(name);
            }
        }
        ctx
    }

    /// Position of `name` in the declared order, if declared
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether `name` is a declared variable
    pub fn is_variable(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The declared names, in order
    pub fn variables(&self) -> &[String] {
        &self.names
    }
}

impl Default for Context {
    /// The conventional ordering `x, y, z`
    fn default() -> Self {
        Context::new(["x", "y", "z"])
    }
}
