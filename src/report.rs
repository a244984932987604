//! Demo report: every toolkit operation over one sequence, in a fixed order.
//!
//! [`Report::compute`] evaluates the operations; [`Report::write_to`]
//! renders them as labeled text lines. Absent aggregates render as `none`.

use std::fmt::Display;
use std::io::Write;

use tracing::{debug, info};

use crate::config::LabConfig;
use crate::error::Result;
use crate::sequence::InputSequence;
use crate::stats::{self, SummaryStatistics};
use crate::transform::{self, MatchSummary};

/// Computed results of every toolkit operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Sum of elements.
    pub sum: i64,
    /// Mean.
    pub average: Option<f64>,
    /// Element count.
    pub count: usize,
    /// Least element.
    pub min: Option<i32>,
    /// Greatest element.
    pub max: Option<i32>,
    /// Single-pass summary.
    pub summary: SummaryStatistics,
    /// Raw elements.
    pub elements: Vec<i32>,
    /// Mapped elements.
    pub mapped: Vec<i64>,
    /// Filtered elements.
    pub filtered: Vec<i32>,
    /// Distinct, sorted elements.
    pub distinct_sorted: Vec<i32>,
    /// Skip/limit window.
    pub window: Vec<i32>,
    /// Predicate matching.
    pub matching: MatchSummary,
    /// Collected elements.
    pub collected: Vec<i32>,
    /// Fold with identity 0 and addition.
    pub reduced_sum: i64,
    /// Fold with the configured combiner.
    pub reduced: i64,
    config: LabConfig,
}

impl Report {
    /// Runs every operation over `seq`.
    #[must_use]
    pub fn compute(seq: &InputSequence, config: &LabConfig) -> Self {
        let values = seq.as_slice();
        let combiner = config.reduce.combiner;

        Self {
            sum: stats::aggregate(values),
            average: stats::avg(values),
            count: stats::count_val(values),
            min: stats::minimum(values),
            max: stats::maximum(values),
            summary: stats::stats(values),
            elements: transform::list(values),
            mapped: transform::demonstrate_map(values, config.transform),
            filtered: transform::demonstrate_filter(values, config.filter),
            distinct_sorted: transform::demonstrate_distinct_and_sorted(values),
            window: transform::demonstrate_limit_and_skip(values, config.skip, config.limit),
            matching: transform::demonstrate_matching(values, config.matching),
            collected: transform::demonstrate_collect(values),
            reduced_sum: transform::demonstrate_reduce(values, 0i64, |acc, v| acc + i64::from(v)),
            reduced: transform::demonstrate_reduce(values, config.reduce.identity, |acc, v| {
                combiner.apply(acc, v)
            }),
            config: config.clone(),
        }
    }

    /// Renders labeled lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        debug!("section: core aggregations");
        writeln!(out, "Core Aggregations:")?;
        writeln!(out, "  Sum: {}", self.sum)?;
        writeln!(out, "  Average: {}", opt(self.average))?;
        writeln!(out, "  Count: {}", self.count)?;
        writeln!(out, "  Minimum: {}", opt(self.min))?;
        writeln!(out, "  Maximum: {}", opt(self.max))?;
        let s = &self.summary;
        writeln!(
            out,
            "  Statistics: count={}, sum={}, min={}, max={}, average={}",
            s.count,
            s.sum,
            opt(s.min),
            opt(s.max),
            opt(s.average)
        )?;
        writeln!(out)?;

        debug!("section: raw elements");
        writeln!(out, "Raw Elements:")?;
        for v in &self.elements {
            writeln!(out, "  {v}")?;
        }
        writeln!(out)?;

        debug!("section: transformations");
        writeln!(out, "Transformations & Filtering:")?;
        writeln!(out, "  Map ({:?}): {}", self.config.transform, join(&self.mapped))?;
        writeln!(out, "  Filter ({:?}): {}", self.config.filter, join(&self.filtered))?;
        writeln!(out, "  Distinct & Sorted: {}", join(&self.distinct_sorted))?;
        writeln!(
            out,
            "  Skip {} / Limit {}: {}",
            self.config.skip,
            self.config.limit,
            join(&self.window)
        )?;
        writeln!(out)?;

        debug!("section: matching");
        let m = self.matching;
        writeln!(out, "Matching ({:?}):", self.config.matching)?;
        writeln!(out, "  Any match: {}", m.any_match)?;
        writeln!(out, "  All match: {}", m.all_match)?;
        writeln!(out, "  None match: {}", m.none_match)?;
        writeln!(out)?;

        debug!("section: collection & reduction");
        writeln!(out, "Collection & Reduction:")?;
        writeln!(out, "  Collected: {}", join(&self.collected))?;
        writeln!(out, "  Reduce (add, identity 0): {}", self.reduced_sum)?;
        writeln!(
            out,
            "  Reduce ({}, identity {}): {}",
            self.config.reduce.combiner.name(),
            self.config.reduce.identity,
            self.reduced
        )?;
        writeln!(out)?;
        Ok(())
    }
}

fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn join<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Validates `values`, computes the report and writes it to `out`.
///
/// Nothing is written when the input is missing.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] for `None`, or an I/O error.
pub fn run<W: Write>(values: Option<Vec<i32>>, config: &LabConfig, out: &mut W) -> Result<Report> {
    let seq = InputSequence::from_option(values)?;
    info!(count = seq.len(), "running toolkit demo");

    let report = Report::compute(&seq, config);
    writeln!(out, "Input: {}", join(seq.as_slice()))?;
    writeln!(out)?;
    report.write_to(out)?;
    writeln!(out, "Demo completed successfully.")?;

    info!("toolkit demo finished");
    Ok(report)
}
