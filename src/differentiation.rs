//! Symbolic differentiation

use crate::ast::Expr;

impl Expr {
    /// Differentiate with respect to the variable named `var`.
    ///
    /// Returns a newly allocated tree; the receiver is never modified, so a
    /// shared subtree can be differentiated concurrently by several callers.
    /// Constants differentiate to `0`, a variable to `1` or `0` by name
    /// match, and an operation node differentiates its children first and
    /// then applies its registered rule to the children, their derivatives,
    /// and the target name.
    ///
    /// The result is not simplified: `x * y` differentiated by `x` comes
    /// back as the literal product-rule tree `1*y + x*0`, which evaluates
    /// like `y` but keeps its shape.
    ///
    /// # Example
    /// ```
    /// use polish_diff::{parse_prefix, Context};
    ///
    /// let ctx = Context::default();
    /// let expr = parse_prefix("(+ x y)", &ctx).unwrap();
    /// let dx = expr.differentiate("x");
    /// assert_eq!(dx.to_prefix(), "(+ 1 0)");
    /// ```
    pub fn differentiate(&self, var: &str) -> Expr {
        match self {
            Expr::Const(_) => Expr::constant(0.0),
            Expr::Variable(name) => {
                if name == var {
                    Expr::constant(1.0)
                } else {
                    Expr::constant(0.0)
                }
            }
            Expr::Operation(op) => {
                let primes: Vec<Expr> =
                    op.args().iter().map(|a| a.differentiate(var)).collect();
                (op.def().derivative)(op.args(), &primes, var)
            }
        }
    }
}
