//! Insertion sort. Linear on sorted input, quadratic in the worst case.

use std::cmp::Ordering;

use crate::comparator::{directed, Direction};

sort_impl!("insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_with<T, F>(v: &mut [T], is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort(v, &mut directed(is_less, direction));
}

#[inline]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() >= 2 {
        insertion_sort_shift_left(v, 1, is_less);
    }
}

/// Sorts `v` assuming `v[..offset]` is already sorted.
pub(crate) fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // This would be a logic bug in other code.
    debug_assert!(offset != 0 && offset <= len);

    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` left past every element it comes strictly before.
///
/// `v[..v.len() - 1]` must be sorted. The element travels by adjacent swaps, so a panicking
/// `is_less` leaves `v` holding exactly the elements it started with.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len() - 1;

    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i, i - 1);
        i -= 1;
    }
}
