//! Convenience wrappers over parsing, evaluation, and differentiation

use crate::ast::Expr;
use crate::context::Context;
use crate::error::ParseError;
use crate::parser::parse_prefix;

/// Differentiate an expression by every variable the context declares, in
/// declaration order.
///
/// # Example
/// ```
/// use polish_diff::{gradient, parse_prefix, Context};
///
/// let ctx = Context::default();
/// let expr = parse_prefix("(* x y)", &ctx).unwrap();
/// let grad = gradient(&expr, &ctx);
/// assert_eq!(grad.len(), 3);
/// assert_eq!(grad[0].evaluate(&ctx, &[3.0, 4.0, 0.0]), 4.0);
/// assert_eq!(grad[1].evaluate(&ctx, &[3.0, 4.0, 0.0]), 3.0);
/// ```
pub fn gradient(expr: &Expr, ctx: &Context) -> Vec<Expr> {
    ctx.variables()
        .iter()
        .map(|var| expr.differentiate(var))
        .collect()
}

/// Parse prefix notation and evaluate it in one step.
///
/// # Example
/// ```
/// use polish_diff::{eval_prefix, Context};
///
/// let ctx = Context::default();
/// assert_eq!(eval_prefix("(negate z)", &ctx, &[0.0, 0.0, 4.0]).unwrap(), -4.0);
/// ```
pub fn eval_prefix(input: &str, ctx: &Context, bindings: &[f64]) -> Result<f64, ParseError> {
    Ok(parse_prefix(input, ctx)?.evaluate(ctx, bindings))
}
