//! Top-down merge sort that hands small inputs to insertion sort.
//!
//! The slice is split at `len / 2`, both halves are copied out, sorted recursively and merged back
//! into the original positions. Inputs of at most `threshold` elements are sorted by insertion
//! sort instead, with the same predicate and direction. A `threshold` of 0 or 1 gives a pure merge
//! sort, a `threshold` of at least `v.len()` a pure insertion sort.
//!
//! *O*(*n* \* log(*n*)) comparisons, *O*(*n*) auxiliary memory per recursion level and
//! *O*(log(*n*)) recursion depth.

use std::cmp::Ordering;

use crate::comparator::{directed, Direction};
use crate::stable::insertion::insertion_sort;

sort_impl!("hybrid_merge_stable");

/// Inputs of at most this many elements go straight to insertion sort.
pub const DEFAULT_THRESHOLD: usize = 12;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort(v, DEFAULT_THRESHOLD, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, DEFAULT_THRESHOLD, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
}

#[inline]
pub fn sort_with<T, F>(v: &mut [T], is_less: F, direction: Direction)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort_with_threshold(v, DEFAULT_THRESHOLD, is_less, direction);
}

#[inline]
pub fn sort_with_threshold<T, F>(v: &mut [T], threshold: usize, is_less: F, direction: Direction)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    merge_sort(v, threshold, &mut directed(is_less, direction));
}

fn merge_sort<T, F>(v: &mut [T], threshold: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    if len <= threshold {
        insertion_sort(v, is_less);
        return;
    }

    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort(&mut left, threshold, is_less);
    merge_sort(&mut right, threshold, is_less);

    merge(v, left, right, is_less);
}

/// Merges the sorted runs `left` and `right` into `dst`.
///
/// The right head is taken only if it comes strictly before the left head, so ties resolve to the
/// left run and the merge is stable. `dst` is only written once the merged run is complete. If
/// `is_less` panics, `dst` still holds what it held before the call.
fn merge<T, F>(dst: &mut [T], left: Vec<T>, right: Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut merged = Vec::with_capacity(dst.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // At most one of the two runs has elements left, append them in bulk.
    merged.extend(left);
    merged.extend(right);

    for (slot, val) in dst.iter_mut().zip(merged) {
        *slot = val;
    }
}
