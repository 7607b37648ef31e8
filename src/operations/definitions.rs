//! Operator definitions: evaluation and symbolic differentiation rules
//!
//! Differentiation rules build raw trees with no simplification: the
//! variadic rules keep their `0 +` accumulator seeds and `negate` keeps its
//! `-1 *` factor, so the produced structure is exactly what the rules state.
//! Every rule assumes its operand count has already been validated.

use std::borrow::Cow;

use super::registry::{Arity, OpDef};
use super::{add, div, mul, negate, rms, sub, sumrec};
use crate::ast::Expr;

/// All fixed registry entries: the binary arithmetic operators, unary
/// `negate`, the variadic statistics, and the `sumrec`/`hmean` families
/// pre-built for K = 2..=5.
pub(crate) fn all_definitions() -> Vec<OpDef> {
    let mut defs = vec![
        add_def(),
        sub_def(),
        mul_def(),
        div_def(),
        negate_def(),
        meansq_def(),
        rms_def(),
    ];
    for k in 2..=5 {
        defs.push(sumrec_def(k));
        defs.push(hmean_def(k));
    }
    defs
}

pub(crate) fn add_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("+"),
        arity: Arity::Fixed(2),
        eval: |args| args[0] + args[1],
        // (u + v)' = u' + v'
        derivative: |_args, primes, _var| add(primes[0].clone(), primes[1].clone()),
    }
}

pub(crate) fn sub_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("-"),
        arity: Arity::Fixed(2),
        eval: |args| args[0] - args[1],
        // (u - v)' = u' - v'
        derivative: |_args, primes, _var| sub(primes[0].clone(), primes[1].clone()),
    }
}

pub(crate) fn mul_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("*"),
        arity: Arity::Fixed(2),
        eval: |args| args[0] * args[1],
        // product rule: (u * v)' = u'*v + u*v'
        derivative: |args, primes, _var| {
            add(
                mul(primes[0].clone(), args[1].clone()),
                mul(args[0].clone(), primes[1].clone()),
            )
        },
    }
}

pub(crate) fn div_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("/"),
        arity: Arity::Fixed(2),
        eval: |args| args[0] / args[1],
        // quotient rule: (u / v)' = (u'*v - u*v') / (v*v)
        derivative: |args, primes, _var| {
            div(
                sub(
                    mul(primes[0].clone(), args[1].clone()),
                    mul(args[0].clone(), primes[1].clone()),
                ),
                mul(args[1].clone(), args[1].clone()),
            )
        },
    }
}

pub(crate) fn negate_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("negate"),
        arity: Arity::Fixed(1),
        eval: |args| -args[0],
        // (-u)' = -1 * u'
        derivative: |_args, primes, _var| mul(Expr::constant(-1.0), primes[0].clone()),
    }
}

/// Factory for the `sumrecK` family: sum of reciprocals of K operands.
/// The rule fns read the operand count from the slice they receive, so one
/// shared pair serves every K.
pub(crate) fn sumrec_def(k: usize) -> OpDef {
    OpDef {
        name: Cow::Owned(format!("sumrec{}", k)),
        arity: Arity::Fixed(k),
        eval: eval_sumrec,
        derivative: diff_sumrec,
    }
}

/// Factory for the `hmeanK` family: harmonic mean of K operands
pub(crate) fn hmean_def(k: usize) -> OpDef {
    OpDef {
        name: Cow::Owned(format!("hmean{}", k)),
        arity: Arity::Fixed(k),
        eval: |args| args.len() as f64 / eval_sumrec(args),
        derivative: diff_hmean,
    }
}

pub(crate) fn meansq_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("meansq"),
        arity: Arity::Variadic,
        eval: |args| sum_of_squares(args) / args.len() as f64,
        derivative: diff_meansq,
    }
}

pub(crate) fn rms_def() -> OpDef {
    OpDef {
        name: Cow::Borrowed("rms"),
        arity: Arity::Variadic,
        eval: |args| (sum_of_squares(args) / args.len() as f64).sqrt(),
        derivative: diff_rms,
    }
}

fn eval_sumrec(args: &[f64]) -> f64 {
    args.iter().fold(0.0, |acc, a| acc + 1.0 / a)
}

fn sum_of_squares(args: &[f64]) -> f64 {
    args.iter().fold(0.0, |acc, a| acc + a * a)
}

// d/dx sum(1/a_i) = sum(-a_i' / (a_i * a_i)), accumulated from a zero seed
fn diff_sumrec(args: &[Expr], primes: &[Expr], _var: &str) -> Expr {
    let mut acc = Expr::constant(0.0);
    for (a, da) in args.iter().zip(primes) {
        acc = add(acc, div(negate(da.clone()), mul(a.clone(), a.clone())));
    }
    acc
}

// hmean(a_1..a_K) = K / sumrec(a_1..a_K). The derivative is obtained by
// building that quotient and differentiating it, so the quotient and sumrec
// rules are reused instead of a hand-derived closed form.
fn diff_hmean(args: &[Expr], _primes: &[Expr], var: &str) -> Expr {
    let k = args.len() as f64;
    div(Expr::constant(k), sumrec(args.to_vec())).differentiate(var)
}

// sum(a_i * a_i') divided by 0.5*n, i.e. 2*sum(a_i * a_i')/n: the divisor
// folds in the factor 2 from d(a^2) = 2a.
fn diff_meansq(args: &[Expr], primes: &[Expr], _var: &str) -> Expr {
    let mut acc = Expr::constant(0.0);
    for (a, da) in args.iter().zip(primes) {
        acc = add(acc, mul(a.clone(), da.clone()));
    }
    div(acc, Expr::constant(0.5 * args.len() as f64))
}

// d/dx rms = sum(a_i * a_i') / n / rms(a_1..a_n)
fn diff_rms(args: &[Expr], primes: &[Expr], _var: &str) -> Expr {
    let mut acc = Expr::constant(0.0);
    for (a, da) in args.iter().zip(primes) {
        acc = add(acc, mul(a.clone(), da.clone()));
    }
    acc = div(acc, Expr::constant(args.len() as f64));
    div(acc, rms(args.to_vec()))
}
