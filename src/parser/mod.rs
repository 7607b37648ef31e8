//! Parsers for prefix and postfix notation
//!
//! A single recursive-descent engine (`engine`) serves both parenthesized
//! grammars; they share one tokenizer, one error model, and differ only in
//! how an operation's symbol and operands are gathered. `rpn` is the bare
//! whitespace-token stack reader for unparenthesized postfix streams.

mod engine;
mod rpn;

pub use rpn::parse_rpn;

use crate::ast::Expr;
use crate::context::Context;
use crate::error::ParseError;
use engine::{Engine, Mode};

/// Parse parenthesized prefix notation: `(op arg1 ... argN)`.
///
/// Leaves are bare number or variable tokens; interior whitespace is
/// free-form. The whole input must be exactly one expression — trailing
/// content is an error.
///
/// # Example
/// ```
/// use polish_diff::{parse_prefix, Context};
///
/// let ctx = Context::default();
/// let expr = parse_prefix("(* (+ x 1) y)", &ctx).unwrap();
/// assert_eq!(expr.evaluate(&ctx, &[2.0, 10.0, 0.0]), 30.0);
/// ```
///
/// # Errors
/// [`ParseError`] carrying the zero-based character offset: unknown tokens,
/// unbalanced parentheses, wrong operand counts for fixed-arity operators,
/// operators in operand position, empty input, trailing content.
pub fn parse_prefix(input: &str, ctx: &Context) -> Result<Expr, ParseError> {
    Engine::new(input, ctx).parse(Mode::Prefix)
}

/// Parse parenthesized postfix notation: `(arg1 ... argN op)`.
///
/// Same tokenizer, error model, and whitespace tolerance as
/// [`parse_prefix`]; only the operand gathering differs. For bare postfix
/// streams without parentheses, see [`parse_rpn`].
///
/// # Example
/// ```
/// use polish_diff::{parse_postfix, Context};
///
/// let ctx = Context::default();
/// let expr = parse_postfix("((3 4 +) 2 *)", &ctx).unwrap();
/// assert_eq!(expr.evaluate(&ctx, &[]), 14.0);
/// ```
pub fn parse_postfix(input: &str, ctx: &Context) -> Result<Expr, ParseError> {
    Engine::new(input, ctx).parse(Mode::Postfix)
}
