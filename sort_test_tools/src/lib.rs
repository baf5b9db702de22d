use std::cmp::Ordering;

/// Uniform entry points a sort implementation exposes to the shared test suite and the benches.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    /// Same comparison as `sort_by`, but the resulting order is inverted.
    fn sort_by_descending<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod test_types;
