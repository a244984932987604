//! Validated input sequences.
//!
//! [`InputSequence`] is the only way into the toolkit from untrusted input:
//! a missing sequence is rejected here, so every operation downstream can
//! borrow a plain `&[i32]`.

use std::ops::Deref;

use crate::error::{Error, Result};

/// Demo fixture: positives, negatives, zero, duplicates, evens and odds.
pub const DEMO_VALUES: [i32; 8] = [10, -5, 20, 15, 20, 0, 7, 14];

/// Ordered, immutable sequence of integers. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSequence {
    values: Vec<i32>,
}

impl InputSequence {
    /// Creates a sequence from owned values.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Creates the demo fixture sequence.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(DEMO_VALUES.to_vec())
    }

    /// Validates a possibly-missing sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `values` is `None`.
    pub fn from_option(values: Option<Vec<i32>>) -> Result<Self> {
        values.map(Self::new).ok_or(Error::InvalidInput)
    }

    /// Parses comma and/or whitespace separated integers.
    ///
    /// A blank string yields the empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseValue`] for the first token that is not an `i32`.
    pub fn parse(text: &str) -> Result<Self> {
        let values = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i32>().map_err(|_| Error::ParseValue {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(values))
    }

    /// Borrows the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Consumes the sequence, returning its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl Deref for InputSequence {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.values
    }
}

impl From<Vec<i32>> for InputSequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl From<&[i32]> for InputSequence {
    fn from(values: &[i32]) -> Self {
        Self::new(values.to_vec())
    }
}
