//! The configuration query evaluator.
//!
//! Part configurations attach a small boolean query to each configuration
//! block (an engine variant, a procedural size class) and the evaluator
//! decides whether the block applies to a given part by matching named
//! interop values against comparison expressions:
//!
//! ```text
//! upgraded:thrust >= 200 && ignitions < 3, SolidBooster
//! ```
//!
//! A query is `,`-separated elements, true when any element is true. An
//! element is `||`-separated sections; a section is `&&`-separated blocks
//! that must all hold. A block is either `qualifier op term` or a bare part
//! name. An element with no `||` is evaluated as a single block, even when
//! it contains `&&`.
//!
//! The evaluator is stateless and re-parses on every call. It never fails:
//! malformed input degrades to `false` for the offending block, while an
//! empty query is vacuously `true`.

use crate::interop::{InteropKind, InteropValue, parse_bool};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Target contract
// ---------------------------------------------------------------------------

/// The identity and interop surface the evaluator needs from a part.
pub trait QueryTarget {
    /// The part's base name.
    fn part_name(&self) -> &str;

    /// The alias-resolved display name (the base name when no alias applies).
    fn full_name(&self) -> String;

    /// Interop lookup; returns an `Invalid`-kind value when `name` is unknown.
    fn interop(&self, name: &str) -> InteropValue;
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Comparison operator inside a query block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    /// `<>` -- exclusive range over a `lo-hi` term.
    Within,
    /// `<=>` -- inclusive range over a `lo-hi` term.
    Bounds,
}

impl Comparison {
    /// Parse an operator token. Unknown tokens are not an error; the caller
    /// treats them as a block that cannot match.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Lte),
            ">=" => Some(Self::Gte),
            "<>" => Some(Self::Within),
            "<=>" => Some(Self::Bounds),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate `query` against `target`.
///
/// An empty query matches everything. An `alias:` prefix is display metadata
/// consumed by part-name resolution and is stripped before evaluation; it
/// never changes the boolean result. The query is true when any
/// `,`-separated element is true.
pub fn evaluate(query: &str, target: &dyn QueryTarget) -> bool {
    let expr = match query.split_once(':') {
        Some((_alias, expr)) => expr,
        None => query,
    };
    if expr.trim().is_empty() {
        return true;
    }
    expr.split(',')
        .any(|element| evaluate_element(element.trim(), target))
}

fn evaluate_element(element: &str, target: &dyn QueryTarget) -> bool {
    // An element with no `||` is one block, even when it contains `&&`.
    if !element.contains("||") {
        return evaluate_block(element, target);
    }
    element
        .split("||")
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .any(|section| {
            if section.contains("&&") {
                section
                    .split("&&")
                    .map(str::trim)
                    .filter(|block| !block.is_empty())
                    .all(|block| evaluate_block(block, target))
            } else {
                evaluate_block(section, target)
            }
        })
}

fn evaluate_block(block: &str, target: &dyn QueryTarget) -> bool {
    let block = block.to_lowercase();

    // Bare-identifier match comes first, so part names containing spaces
    // ("liquid engine") are still reachable.
    if block == target.part_name().to_lowercase() || block == target.full_name().to_lowercase() {
        return true;
    }
    if !block.contains(' ') {
        return false;
    }

    // A comparison is exactly `qualifier op term`. Anything else -- including
    // an `&&` chain that never went through a `||` split -- is malformed.
    let tokens: Vec<&str> = block.split_whitespace().collect();
    let &[qualifier, op_token, term] = tokens.as_slice() else {
        return false;
    };

    let Some(op) = Comparison::parse(op_token) else {
        return false;
    };

    let value = target.interop(qualifier);
    if !value.is_valid() {
        return false;
    }

    // Range operators read their bounds out of a `lo-hi` term.
    let (lo, hi) = match term.split_once('-') {
        Some((lo, hi)) => (lo, hi),
        None => (term, ""),
    };

    let result = match op {
        Comparison::Eq => equality(&value, term),
        Comparison::Ne => equality(&value, term).map(|eq| !eq),
        Comparison::Lt => ordering(&value, term).map(|o| o == Ordering::Less),
        Comparison::Gt => ordering(&value, term).map(|o| o == Ordering::Greater),
        Comparison::Lte => ordering(&value, term).map(|o| o != Ordering::Greater),
        Comparison::Gte => ordering(&value, term).map(|o| o != Ordering::Less),
        Comparison::Within => in_range(&value, lo, hi, false),
        Comparison::Bounds => in_range(&value, lo, hi, true),
    };
    // Unsupported operator/kind pairings and unparseable literals fall
    // through to false; the evaluator's contract is a boolean, never a fault.
    result.unwrap_or(false)
}

/// `=` / `!=` support Bool, Float, Int, and (case-insensitive) Str values.
fn equality(value: &InteropValue, term: &str) -> Option<bool> {
    match value.kind {
        InteropKind::Bool => Some(value.as_bool()? == parse_bool(term)?),
        InteropKind::Float => Some(value.as_float()? == term.parse::<f32>().ok()?),
        InteropKind::Int => Some(value.as_int()? == term.parse::<i64>().ok()?),
        // The block is already lowercased; lowercase the payload to match.
        InteropKind::Str => Some(value.value.to_lowercase() == term),
        _ => None,
    }
}

/// Ordering comparisons support only the numeric kinds.
fn ordering(value: &InteropValue, term: &str) -> Option<Ordering> {
    match value.kind {
        InteropKind::Float => value.as_float()?.partial_cmp(&term.parse::<f32>().ok()?),
        InteropKind::Int => Some(value.as_int()?.cmp(&term.parse::<i64>().ok()?)),
        _ => None,
    }
}

/// Range membership over `lo..hi`, exclusive or inclusive of the bounds.
fn in_range(value: &InteropValue, lo: &str, hi: &str, inclusive: bool) -> Option<bool> {
    match value.kind {
        InteropKind::Float => {
            let v = value.as_float()?;
            let lo = lo.parse::<f32>().ok()?;
            let hi = hi.parse::<f32>().ok()?;
            Some(if inclusive {
                v >= lo && v <= hi
            } else {
                v > lo && v < hi
            })
        }
        InteropKind::Int => {
            let v = value.as_int()?;
            let lo = lo.parse::<i64>().ok()?;
            let hi = hi.parse::<i64>().ok()?;
            Some(if inclusive {
                v >= lo && v <= hi
            } else {
                v > lo && v < hi
            })
        }
        _ => None,
    }
}
