//! # IntStream Lab
//!
//! Array statistics and transformation toolkit over integer sequences.
//!
//! Every operation is a pure function over a borrowed `&[i32]`: aggregation
//! (sum, average, count, min, max, summary statistics), display,
//! transformation (map, filter, distinct+sort, skip+limit), matching
//! (any/all/none) and collection/reduction. Aggregates that are undefined on
//! empty input return `None`.
//!
//! ## Quick Start
//!
//! ```rust
//! use intstream_lab::prelude::*;
//!
//! let seq = InputSequence::demo();
//! assert_eq!(aggregate(&seq), 81);
//! assert_eq!(minimum(&seq), Some(-5));
//! assert_eq!(avg(&[]), None);
//! assert_eq!(
//!     demonstrate_distinct_and_sorted(&seq),
//!     vec![-5, 0, 7, 10, 14, 15, 20]
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `intstream-lab` demo binary

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Validated input sequences and the demo fixture.
pub mod sequence;

/// Aggregations and summary statistics.
pub mod stats;

/// Transformations, matching and reduction.
pub mod transform;

// ============================================================================
// Demo Modules
// ============================================================================

/// YAML configuration for the demo report.
pub mod config;

/// Labeled text report over every operation.
pub mod report;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for intstream-lab operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use intstream_lab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{LabConfig, ReduceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::report::{run, Report};
    pub use crate::sequence::{InputSequence, DEMO_VALUES};
    pub use crate::stats::{aggregate, avg, count_val, maximum, minimum, stats, SummaryStatistics};
    pub use crate::transform::{
        demonstrate_collect, demonstrate_distinct_and_sorted, demonstrate_filter,
        demonstrate_limit_and_skip, demonstrate_map, demonstrate_matching, demonstrate_reduce,
        list, Combiner, MatchSummary, Predicate, Transform,
    };
}
