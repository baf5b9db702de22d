//! Median computation and a classifier that places one student's scores against the medians of a
//! population.

use std::fmt::{self, Display, Formatter};

use crate::algorithm::Algorithm;

mod median;

pub use median::{median, median_with, MedianError};

/// A pair of exam subscores. Values outside any conventional exam range are accepted as is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub english: i32,
    pub math: i32,
}

impl Score {
    pub const fn new(english: i32, math: i32) -> Self {
        Self { english, math }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<English: {}, Math: {}>", self.english, self.math)
    }
}

/// Which of a student's subscores lie strictly above the population median.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Both,
    English,
    Math,
    None,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Both => "Both",
            Classification::English => "English",
            Classification::Math => "Math",
            Classification::None => "None",
        })
    }
}

/// Classifies `student` against the English and Math medians of `all_scores`.
///
/// An empty population classifies every student as [`Classification::Both`]. `all_scores` itself is
/// not reordered.
#[inline]
pub fn classify(all_scores: &[Score], student: Score) -> Classification {
    classify_with(all_scores, student, Algorithm::default())
}

/// Like [`classify`], computing the medians with `algorithm`.
pub fn classify_with(all_scores: &[Score], student: Score, algorithm: Algorithm) -> Classification {
    let mut english = all_scores.iter().map(|s| s.english).collect::<Vec<_>>();
    let mut math = all_scores.iter().map(|s| s.math).collect::<Vec<_>>();

    // Both medians only fail for an empty population.
    let (Ok(english_median), Ok(math_median)) = (
        median_with(&mut english, algorithm),
        median_with(&mut math, algorithm),
    ) else {
        return Classification::Both;
    };

    let above_english = f64::from(student.english) > english_median;
    let above_math = f64::from(student.math) > math_median;

    match (above_english, above_math) {
        (true, true) => Classification::Both,
        (true, false) => Classification::English,
        (false, true) => Classification::Math,
        (false, false) => Classification::None,
    }
}
