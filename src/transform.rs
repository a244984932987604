//! Sequence transformations, matching and reduction.
//!
//! Every operation is an eager sequence-to-sequence (or sequence-to-value)
//! function; callers compose them explicitly. Mapped values widen to `i64`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Element-wise transform applied by [`demonstrate_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Multiply by a constant (saturating).
    Scale(i64),
    /// Add a constant (saturating).
    Offset(i64),
    /// Square each value.
    Square,
}

impl Transform {
    /// Create a scaling transform.
    #[must_use]
    pub fn scale(factor: i64) -> Self {
        Transform::Scale(factor)
    }

    /// Create an offset transform.
    #[must_use]
    pub fn offset(delta: i64) -> Self {
        Transform::Offset(delta)
    }

    /// Create a squaring transform.
    #[must_use]
    pub fn square() -> Self {
        Transform::Square
    }

    /// Apply to a single value.
    #[must_use]
    pub fn apply(self, value: i32) -> i64 {
        let v = i64::from(value);
        match self {
            Transform::Scale(factor) => v.saturating_mul(factor),
            Transform::Offset(delta) => v.saturating_add(delta),
            Transform::Square => v * v,
        }
    }
}

impl Default for Transform {
    /// Doubling.
    fn default() -> Self {
        Transform::scale(2)
    }
}

/// Element predicate used by [`demonstrate_filter`] and [`demonstrate_matching`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Divisible by two (zero included).
    Even,
    /// Not divisible by two.
    Odd,
    /// Strictly greater than zero.
    Positive,
    /// Strictly less than zero.
    Negative,
    /// Strictly greater than a threshold (exclusive).
    GreaterThan(i32),
}

impl Predicate {
    /// Evaluate against a single value.
    #[must_use]
    pub fn test(self, value: i32) -> bool {
        match self {
            Predicate::Even => value % 2 == 0,
            Predicate::Odd => value % 2 != 0,
            Predicate::Positive => value > 0,
            Predicate::Negative => value < 0,
            Predicate::GreaterThan(threshold) => value > threshold,
        }
    }
}

/// Named fold combiners for configurable reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combiner {
    /// Saturating addition.
    Add,
    /// Saturating multiplication.
    Multiply,
    /// Keep the smaller value.
    Min,
    /// Keep the larger value.
    Max,
}

impl Combiner {
    /// Combine an accumulator with the next element.
    #[must_use]
    pub fn apply(self, acc: i64, value: i32) -> i64 {
        let v = i64::from(value);
        match self {
            Combiner::Add => acc.saturating_add(v),
            Combiner::Multiply => acc.saturating_mul(v),
            Combiner::Min => acc.min(v),
            Combiner::Max => acc.max(v),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Combiner::Add => "add",
            Combiner::Multiply => "multiply",
            Combiner::Min => "min",
            Combiner::Max => "max",
        }
    }
}

/// Results of evaluating a predicate across a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// At least one element matched.
    pub any_match: bool,
    /// Every element matched (true for empty input).
    pub all_match: bool,
    /// No element matched (true for empty input).
    pub none_match: bool,
}

/// Elements in original order, unchanged.
#[must_use]
pub fn list(seq: &[i32]) -> Vec<i32> {
    seq.to_vec()
}

/// Applies `transform` to every element. Same length as the input.
#[must_use]
pub fn demonstrate_map(seq: &[i32], transform: Transform) -> Vec<i64> {
    seq.iter().map(|&v| transform.apply(v)).collect()
}

/// Elements satisfying `predicate`, in their original relative order.
#[must_use]
pub fn demonstrate_filter(seq: &[i32], predicate: Predicate) -> Vec<i32> {
    seq.iter().copied().filter(|&v| predicate.test(v)).collect()
}

/// Unique values in non-decreasing order.
#[must_use]
pub fn demonstrate_distinct_and_sorted(seq: &[i32]) -> Vec<i32> {
    seq.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Skips the first `skip` elements (clamped), then takes at most `limit`.
#[must_use]
pub fn demonstrate_limit_and_skip(seq: &[i32], skip: usize, limit: usize) -> Vec<i32> {
    seq.iter().copied().skip(skip).take(limit).collect()
}

/// Evaluates `predicate` against every element.
#[must_use]
pub fn demonstrate_matching(seq: &[i32], predicate: Predicate) -> MatchSummary {
    MatchSummary {
        any_match: seq.iter().any(|&v| predicate.test(v)),
        all_match: seq.iter().all(|&v| predicate.test(v)),
        none_match: !seq.iter().any(|&v| predicate.test(v)),
    }
}

/// Accumulates elements into an ordered container.
#[must_use]
pub fn demonstrate_collect(seq: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(seq.len());
    out.extend_from_slice(seq);
    out
}

/// Left-to-right fold seeded with `identity`.
///
/// Empty input returns `identity` unchanged. `combiner` need not be
/// associative; elements are visited strictly in order.
pub fn demonstrate_reduce<T, F>(seq: &[i32], identity: T, combiner: F) -> T
where
    F: FnMut(T, i32) -> T,
{
    seq.iter().copied().fold(identity, combiner)
}
