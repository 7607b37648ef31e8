//! Property-based tests
//!
//! quickcheck drives random tree generation for the round-trip properties
//! and fuzzes the parsers with arbitrary strings.

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use crate::operations as ops;
use crate::{parse_postfix, parse_prefix, parse_rpn, Context, Expr};

/// Random expression over the default `x, y, z` context
fn random_expr(g: &mut Gen, depth: usize) -> Expr {
    if depth == 0 {
        return random_leaf(g);
    }
    match u8::arbitrary(g) % 10 {
        0 => ops::add(random_expr(g, depth - 1), random_expr(g, depth - 1)),
        1 => ops::sub(random_expr(g, depth - 1), random_expr(g, depth - 1)),
        2 => ops::mul(random_expr(g, depth - 1), random_expr(g, depth - 1)),
        3 => ops::div(random_expr(g, depth - 1), random_expr(g, depth - 1)),
        4 => ops::negate(random_expr(g, depth - 1)),
        5 => {
            let count = 2 + usize::arbitrary(g) % 4;
            ops::sumrec(random_args(g, depth, count))
        }
        6 => {
            let count = 2 + usize::arbitrary(g) % 4;
            ops::hmean(random_args(g, depth, count))
        }
        7 => {
            let count = 1 + usize::arbitrary(g) % 4;
            ops::meansq(random_args(g, depth, count))
        }
        8 => {
            let count = 1 + usize::arbitrary(g) % 4;
            ops::rms(random_args(g, depth, count))
        }
        _ => random_leaf(g),
    }
}

fn random_args(g: &mut Gen, depth: usize, count: usize) -> Vec<Expr> {
    (0..count).map(|_| random_expr(g, depth - 1)).collect()
}

fn random_leaf(g: &mut Gen) -> Expr {
    match u8::arbitrary(g) % 4 {
        0 => Expr::variable("x"),
        1 => Expr::variable("y"),
        2 => Expr::variable("z"),
        // quarters print exactly and re-parse exactly
        _ => Expr::constant(f64::from(i8::arbitrary(g)) / 4.0),
    }
}

fn random_bindings(g: &mut Gen) -> Vec<f64> {
    (0..3).map(|_| f64::from(i8::arbitrary(g)) / 2.0).collect()
}

/// Evaluation results compare equal, with NaN equal to NaN
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[test]
fn test_prefix_round_trip_preserves_evaluation() {
    fn prop() -> bool {
        let mut g = Gen::new(8);
        let ctx = Context::default();
        let expr = random_expr(&mut g, 3);
        let reparsed = match parse_prefix(&expr.to_prefix(), &ctx) {
            Ok(e) => e,
            Err(_) => return false,
        };
        let bindings = random_bindings(&mut g);
        same_value(
            expr.evaluate(&ctx, &bindings),
            reparsed.evaluate(&ctx, &bindings),
        )
    }
    QuickCheck::new().tests(300).quickcheck(prop as fn() -> bool);
}

#[test]
fn test_postfix_round_trip_preserves_evaluation() {
    fn prop() -> bool {
        let mut g = Gen::new(8);
        let ctx = Context::default();
        let expr = random_expr(&mut g, 3);
        let reparsed = match parse_postfix(&expr.to_postfix(), &ctx) {
            Ok(e) => e,
            Err(_) => return false,
        };
        let bindings = random_bindings(&mut g);
        same_value(
            expr.evaluate(&ctx, &bindings),
            reparsed.evaluate(&ctx, &bindings),
        )
    }
    QuickCheck::new().tests(300).quickcheck(prop as fn() -> bool);
}

#[test]
fn test_round_trips_are_structural() {
    fn prop() -> bool {
        let mut g = Gen::new(8);
        let ctx = Context::default();
        let expr = random_expr(&mut g, 3);
        let pre = parse_prefix(&expr.to_prefix(), &ctx);
        let post = parse_postfix(&expr.to_postfix(), &ctx);
        pre.map_or(false, |e| e == expr) && post.map_or(false, |e| e == expr)
    }
    QuickCheck::new().tests(300).quickcheck(prop as fn() -> bool);
}

#[test]
fn test_constant_derivative_is_zero_everywhere() {
    fn prop(c: f64, at: f64) -> bool {
        let ctx = Context::default();
        let d = Expr::constant(c).differentiate("x");
        d.evaluate(&ctx, &[at, at, at]) == 0.0
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64, f64) -> bool);
}

#[test]
fn test_differentiation_never_mutates_the_input() {
    fn prop() -> bool {
        let mut g = Gen::new(6);
        let expr = random_expr(&mut g, 3);
        let before = expr.to_prefix();
        for var in ["x", "y", "z", "w"] {
            let _ = expr.differentiate(var);
        }
        expr.to_prefix() == before
    }
    QuickCheck::new().tests(100).quickcheck(prop as fn() -> bool);
}

#[test]
fn test_parsers_never_panic_on_arbitrary_input() {
    fn prop(input: String) -> TestResult {
        let ctx = Context::default();
        let _ = parse_prefix(&input, &ctx);
        let _ = parse_postfix(&input, &ctx);
        let _ = parse_rpn(&input, &ctx);
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(1000)
        .max_tests(2000)
        .quickcheck(prop as fn(String) -> TestResult);
}
