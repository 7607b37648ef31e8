//! Whitespace-token stack reader for bare postfix streams

use crate::ast::Expr;
use crate::context::Context;
use crate::error::{ParseError, ParseErrorKind};
use crate::operations::registry::{Arity, Registry};

/// Parse an unparenthesized, whitespace-separated postfix stream, e.g.
/// `3 4 +`.
///
/// Tokens are classified like the parenthesized grammars classify them;
/// each operator pops its declared operand count off the value stack (a
/// variadic operator consumes the whole stack), and exactly one value must
/// remain at the end.
///
/// # Example
/// ```
/// use polish_diff::{parse_rpn, Context};
///
/// let ctx = Context::default();
/// let expr = parse_rpn("3 4 +", &ctx).unwrap();
/// assert_eq!(expr.evaluate(&ctx, &[]), 7.0);
/// ```
pub fn parse_rpn(input: &str, ctx: &Context) -> Result<Expr, ParseError> {
    let mut stack: Vec<Expr> = Vec::new();
    for (pos, token) in tokens(input) {
        if let Some(def) = Registry::resolve(token) {
            let take = match def.arity() {
                Arity::Fixed(n) => n,
                Arity::Variadic => stack.len(),
            };
            if stack.len() < take {
                return Err(ParseError::new(
                    pos,
                    ParseErrorKind::ArityMismatch {
                        op: def.name().to_string(),
                        needed: take,
                        actual: stack.len(),
                    },
                ));
            }
            let args = stack.split_off(stack.len() - take);
            stack.push(Expr::operation(def, args));
        } else if ctx.is_variable(token) {
            stack.push(Expr::variable(token));
        } else if let Ok(value) = token.parse::<f64>() {
            stack.push(Expr::constant(value));
        } else {
            return Err(ParseError::new(
                pos,
                ParseErrorKind::InvalidToken {
                    token: token.to_string(),
                },
            ));
        }
    }
    let end = input.chars().count();
    match stack.len() {
        0 => Err(ParseError::new(end, ParseErrorKind::EmptyExpression)),
        1 => Ok(stack.remove(0)),
        // leftover operands mean some operator never arrived
        _ => Err(ParseError::new(end, ParseErrorKind::MissingOperation)),
    }
}

/// Whitespace-separated tokens paired with their zero-based character
/// offsets
fn tokens(input: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start_byte = None;
    let mut start_char = 0;
    let mut char_pos = 0;
    for (byte_idx, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = start_byte.take() {
                out.push((start_char, &input[start..byte_idx]));
            }
        } else if start_byte.is_none() {
            start_byte = Some(byte_idx);
            start_char = char_pos;
        }
        char_pos += 1;
    }
    if let Some(start) = start_byte {
        out.push((start_char, &input[start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_offsets_are_character_based() {
        let toks = tokens("  ab  c ");
        assert_eq!(toks, vec![(2, "ab"), (6, "c")]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(tokens("x"), vec![(0, "x")]);
        assert!(tokens("   ").is_empty());
    }
}
