//! String forms: plain debug, prefix, and postfix

use std::fmt;

use crate::ast::Expr;

impl fmt::Display for Expr {
    /// Plain space-joined form: children first, then the operator symbol,
    /// no parentheses (`x y +`). Diagnostic only — not re-parseable by the
    /// parenthesized grammars.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => fmt_number(f, *value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Operation(op) => {
                for arg in op.args() {
                    write!(f, "{} ", arg)?;
                }
                write!(f, "{}", op.symbol())
            }
        }
    }
}

impl Expr {
    /// Parenthesized prefix form: `(op arg1 ... argN)`; leaves render as
    /// their literal. Re-parseable by
    /// [`parse_prefix`](crate::parse_prefix).
    pub fn to_prefix(&self) -> String {
        match self {
            Expr::Operation(op) => {
                let args: Vec<String> = op.args().iter().map(|a| a.to_prefix()).collect();
                format!("({} {})", op.symbol(), args.join(" "))
            }
            _ => self.to_string(),
        }
    }

    /// Parenthesized postfix form: `(arg1 ... argN op)`. Re-parseable by
    /// [`parse_postfix`](crate::parse_postfix).
    pub fn to_postfix(&self) -> String {
        match self {
            Expr::Operation(op) => {
                let args: Vec<String> = op.args().iter().map(|a| a.to_postfix()).collect();
                format!("({} {})", args.join(" "), op.symbol())
            }
            _ => self.to_string(),
        }
    }
}

// NaN and the infinities are spelled the way `f64::from_str` reads them
// back; everything else uses the shortest round-trip float form.
fn fmt_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        if value > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else {
        write!(f, "{}", value)
    }
}

#[cfg(test)]
mod tests {
    use crate::operations as ops;
    use crate::{parse_prefix, Context, Expr};

    #[test]
    fn test_number_formatting() {
        assert_eq!(Expr::constant(1.0).to_string(), "1");
        assert_eq!(Expr::constant(0.5).to_string(), "0.5");
        assert_eq!(Expr::constant(-5.0).to_string(), "-5");
        assert_eq!(Expr::constant(f64::NAN).to_string(), "NaN");
        assert_eq!(Expr::constant(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Expr::constant(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_three_forms() {
        let expr = ops::mul(
            ops::add(Expr::constant(2.0), Expr::constant(3.0)),
            Expr::variable("x"),
        );
        assert_eq!(expr.to_string(), "2 3 + x *");
        assert_eq!(expr.to_prefix(), "(* (+ 2 3) x)");
        assert_eq!(expr.to_postfix(), "((2 3 +) x *)");
    }

    #[test]
    fn test_leaves_render_as_literals() {
        assert_eq!(Expr::variable("y").to_prefix(), "y");
        assert_eq!(Expr::constant(2.25).to_postfix(), "2.25");
    }

    #[test]
    fn test_special_values_reparse() {
        let ctx = Context::default();
        let expr = ops::add(Expr::constant(f64::INFINITY), Expr::constant(f64::NAN));
        let reparsed = parse_prefix(&expr.to_prefix(), &ctx).unwrap();
        assert!(reparsed.evaluate(&ctx, &[]).is_nan());
    }
}
