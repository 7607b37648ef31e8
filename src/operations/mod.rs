//! Operator registry and expression-building helpers
//!
//! The registry maps each operator symbol to its arity and rule pair; the
//! helpers here build operation nodes over those definitions and are what
//! the differentiation rules themselves use to assemble derivative trees.

pub(crate) mod definitions;
pub(crate) mod registry;

pub use registry::Arity;

use crate::ast::Expr;

// ===== Tree-building helpers =====

/// `l + r`
pub fn add(l: Expr, r: Expr) -> Expr {
    Expr::operation(definitions::add_def(), vec![l, r])
}

/// `l - r`
pub fn sub(l: Expr, r: Expr) -> Expr {
    Expr::operation(definitions::sub_def(), vec![l, r])
}

/// `l * r`
pub fn mul(l: Expr, r: Expr) -> Expr {
    Expr::operation(definitions::mul_def(), vec![l, r])
}

/// `l / r`
pub fn div(l: Expr, r: Expr) -> Expr {
    Expr::operation(definitions::div_def(), vec![l, r])
}

/// `-e`
pub fn negate(e: Expr) -> Expr {
    Expr::operation(definitions::negate_def(), vec![e])
}

/// Sum of reciprocals of the operands; the operand count becomes part of the
/// operator symbol (`sumrec3` for three operands)
pub fn sumrec(args: Vec<Expr>) -> Expr {
    let def = definitions::sumrec_def(args.len());
    Expr::operation(def, args)
}

/// Harmonic mean of the operands (`hmeanK` for K operands)
pub fn hmean(args: Vec<Expr>) -> Expr {
    let def = definitions::hmean_def(args.len());
    Expr::operation(def, args)
}

/// Mean of the squares of the operands
pub fn meansq(args: Vec<Expr>) -> Expr {
    Expr::operation(definitions::meansq_def(), args)
}

/// Root mean square of the operands
pub fn rms(args: Vec<Expr>) -> Expr {
    Expr::operation(definitions::rms_def(), args)
}

/// Build an operation by registry symbol, checking arity.
///
/// Returns `None` for a symbol the registry does not resolve, or for an
/// operand count the operator's declared arity rejects.
///
/// # Example
/// ```
/// use polish_diff::{operations, Context, Expr};
///
/// let expr = operations::operation("+", vec![Expr::constant(1.0), Expr::constant(2.0)]).unwrap();
/// assert_eq!(expr.evaluate(&Context::default(), &[]), 3.0);
///
/// assert!(operations::operation("+", vec![Expr::constant(1.0)]).is_none());
/// assert!(operations::operation("frobnicate", vec![]).is_none());
/// ```
pub fn operation(symbol: &str, args: Vec<Expr>) -> Option<Expr> {
    let def = registry::Registry::resolve(symbol)?;
    if !def.arity().accepts(args.len()) {
        return None;
    }
    Some(Expr::operation(def, args))
}
