//! Core aggregations over integer sequences.
//!
//! Sums accumulate in `i64`, so no realistic `i32` input can overflow.
//! Aggregates that are undefined on empty input (`avg`, `minimum`,
//! `maximum`) return `None` rather than a numeric stand-in.

/// Summary statistics computed in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStatistics {
    /// Number of elements.
    pub count: usize,
    /// Sum of elements (0 when empty).
    pub sum: i64,
    /// Least element.
    pub min: Option<i32>,
    /// Greatest element.
    pub max: Option<i32>,
    /// Arithmetic mean.
    pub average: Option<f64>,
}

impl SummaryStatistics {
    /// Compute statistics from data.
    #[must_use]
    pub fn from_data(data: &[i32]) -> Self {
        let mut acc = Self::default();
        for &v in data {
            acc.accept(v);
        }
        acc.average = mean(acc.sum, acc.count);
        acc
    }

    fn accept(&mut self, v: i32) {
        self.count += 1;
        self.sum += i64::from(v);
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
    }

    /// True when no elements were seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn mean(sum: i64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(sum as f64 / count as f64)
}

/// Sum of elements; 0 for empty input.
#[must_use]
pub fn aggregate(seq: &[i32]) -> i64 {
    seq.iter().copied().map(i64::from).sum()
}

/// Arithmetic mean; `None` for empty input.
#[must_use]
pub fn avg(seq: &[i32]) -> Option<f64> {
    mean(aggregate(seq), seq.len())
}

/// Number of elements.
#[must_use]
pub fn count_val(seq: &[i32]) -> usize {
    seq.len()
}

/// Least element; `None` for empty input.
#[must_use]
pub fn minimum(seq: &[i32]) -> Option<i32> {
    seq.iter().copied().min()
}

/// Greatest element; `None` for empty input.
#[must_use]
pub fn maximum(seq: &[i32]) -> Option<i32> {
    seq.iter().copied().max()
}

/// Count, sum, min, max and average in one pass.
#[must_use]
pub fn stats(seq: &[i32]) -> SummaryStatistics {
    SummaryStatistics::from_data(seq)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Invariant: min <= every element <= max
        #[test]
        fn prop_bounds_enclose_elements(values in prop::collection::vec(any::<i32>(), 1..200)) {
            let lo = minimum(&values).unwrap();
            let hi = maximum(&values).unwrap();
            for &v in &values {
                prop_assert!(lo <= v && v <= hi);
            }
        }

        /// Invariant: single-pass summary agrees with the individual aggregates
        #[test]
        fn prop_stats_consistent(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let s = stats(&values);
            prop_assert_eq!(s.count, count_val(&values));
            prop_assert_eq!(s.sum, aggregate(&values));
            prop_assert_eq!(s.min, minimum(&values));
            prop_assert_eq!(s.max, maximum(&values));
            prop_assert_eq!(s.average, avg(&values));
        }

        /// Invariant: empty input has no min/max/avg
        #[test]
        fn prop_no_value_iff_empty(values in prop::collection::vec(-100i32..100, 0..5)) {
            let empty = count_val(&values) == 0;
            prop_assert_eq!(avg(&values).is_none(), empty);
            prop_assert_eq!(minimum(&values).is_none(), empty);
            prop_assert_eq!(maximum(&values).is_none(), empty);
        }

        /// Invariant: average lies within [min, max]
        #[test]
        fn prop_average_within_bounds(values in prop::collection::vec(any::<i32>(), 1..200)) {
            let s = stats(&values);
            let a = s.average.unwrap();
            prop_assert!(f64::from(s.min.unwrap()) <= a + 1e-6);
            prop_assert!(a <= f64::from(s.max.unwrap()) + 1e-6);
        }
    }
}
