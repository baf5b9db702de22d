// Runs the suite against the standard library sorts, which keeps the suite itself honest.

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        arr.sort();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        arr.sort_by(compare);
    }

    fn sort_by_descending<T, F>(arr: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        arr.sort_by(|a, b| compare(b, a));
    }
}

instantiate_sort_tests!(SortImpl);
