//! Comparison based in-place sorts driven by an `is_less` predicate and a sort direction, plus a
//! median utility and a score classifier built on top of them.
//!
//! Every sort module exposes the same three entry points:
//!
//! - `sort(v)` sorts ascending by the natural [`Ord`] order of `T`.
//! - `sort_by(v, compare)` sorts ascending by an [`Ordering`](std::cmp::Ordering) comparator.
//! - `sort_with(v, is_less, direction)` takes a strict "comes before" predicate and a
//!   [`Direction`](comparator::Direction).
//!
//! The stable sorts live in [`stable`], the unstable ones in [`unstable`].

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_by_descending<T, F>(arr: &mut [T], mut compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_with(
                    arr,
                    |a, b| compare(a, b) == std::cmp::Ordering::Less,
                    $crate::comparator::Direction::Descending,
                );
            }
        }
    };
}

pub mod algorithm;
pub mod comparator;
pub mod scores;
pub mod stable;
pub mod unstable;

pub use algorithm::Algorithm;
pub use comparator::Direction;
pub use scores::{classify, median, Classification, MedianError, Score};
