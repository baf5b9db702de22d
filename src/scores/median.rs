use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::algorithm::Algorithm;
use crate::comparator::Direction;

/// Error returned when a median can not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianError {
    /// The input holds no values, so there is no middle element.
    EmptyInput,
}

impl Display for MedianError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MedianError::EmptyInput => f.write_str("median of an empty sequence is undefined"),
        }
    }
}

impl Error for MedianError {}

/// Sorts `scores` in place with the default algorithm and returns their median.
///
/// For an odd number of values that is the middle one, for an even number the mean of the two
/// middle ones.
#[inline]
pub fn median<T>(scores: &mut [T]) -> Result<f64, MedianError>
where
    T: Copy + PartialOrd + Into<f64>,
{
    median_with(scores, Algorithm::default())
}

/// Like [`median`], sorting with `algorithm`.
pub fn median_with<T>(scores: &mut [T], algorithm: Algorithm) -> Result<f64, MedianError>
where
    T: Copy + PartialOrd + Into<f64>,
{
    if scores.is_empty() {
        return Err(MedianError::EmptyInput);
    }

    algorithm.sort_with(scores, |a: &T, b: &T| a.lt(b), Direction::Ascending);

    let len = scores.len();
    let mid = len / 2;

    if len % 2 == 1 {
        Ok(scores[mid].into())
    } else {
        let lower: f64 = scores[mid - 1].into();
        let upper: f64 = scores[mid].into();
        Ok((lower + upper) / 2.0)
    }
}
