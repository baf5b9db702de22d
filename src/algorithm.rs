//! Runtime selection between the sorts of this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::comparator::Direction;
use crate::stable::{bubble, hybrid_merge, insertion};
use crate::unstable::{quicksort, selection};

/// One of the sorts of this crate, chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Bubble,
    Insertion,
    HybridMerge { threshold: usize },
    Quicksort,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HybridMerge {
            threshold: hybrid_merge::DEFAULT_THRESHOLD,
        }
    }
}

impl Algorithm {
    /// Every algorithm, hybrid merge sort with its default threshold.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::HybridMerge {
            threshold: hybrid_merge::DEFAULT_THRESHOLD,
        },
        Algorithm::Quicksort,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::HybridMerge { .. } => "hybrid_merge",
            Algorithm::Quicksort => "quicksort",
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::HybridMerge { .. }
        )
    }

    /// Whether the number of comparisons grows quadratically with the input length, in the
    /// worst case or always.
    pub fn is_quadratic(&self) -> bool {
        matches!(
            self,
            Algorithm::Selection | Algorithm::Bubble | Algorithm::Insertion
        )
    }

    #[inline]
    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord + Clone,
    {
        self.sort_with(v, |a: &T, b: &T| a.lt(b), Direction::Ascending);
    }

    pub fn sort_with<T, F>(&self, v: &mut [T], is_less: F, direction: Direction)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        match *self {
            Algorithm::Selection => selection::sort_with(v, is_less, direction),
            Algorithm::Bubble => bubble::sort_with(v, is_less, direction),
            Algorithm::Insertion => insertion::sort_with(v, is_less, direction),
            Algorithm::HybridMerge { threshold } => {
                hybrid_merge::sort_with_threshold(v, threshold, is_less, direction)
            }
            Algorithm::Quicksort => quicksort::sort_with(v, is_less, direction),
        }
    }
}

impl Display for Algorithm {
    /// Prints the name accepted by `FromStr`. Hybrid merge sort with a non default threshold
    /// prints as `hybrid_merge:<threshold>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::HybridMerge { threshold } if *threshold != hybrid_merge::DEFAULT_THRESHOLD => {
                write!(f, "{}:{}", self.name(), threshold)
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// A name that does not denote any of the algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort algorithm '{}', expected one of selection, bubble, insertion, \
             hybrid_merge, hybrid_merge:<threshold> or quicksort",
            self.0
        )
    }
}

impl Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownAlgorithm(s.to_owned());

        match s.trim() {
            "selection" => Ok(Algorithm::Selection),
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "hybrid_merge" => Ok(Algorithm::default()),
            "quicksort" => Ok(Algorithm::Quicksort),
            other => {
                let threshold = other
                    .strip_prefix("hybrid_merge:")
                    .ok_or_else(unknown)?
                    .parse::<usize>()
                    .map_err(|_| unknown())?;

                Ok(Algorithm::HybridMerge { threshold })
            }
        }
    }
}
