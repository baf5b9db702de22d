//! Recursive quicksort with median-of-three pivot selection and Hoare style partitioning.

use std::cmp::Ordering;

use crate::comparator::{directed, Direction};

sort_impl!("quicksort_unstable");

/// Sorts `v` ascending by the natural order of `T`.
///
/// Average *O*(*n* \* log(*n*)) comparisons. Median-of-three pivot selection makes the quadratic
/// worst case unlikely but not impossible. Does not allocate.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_with<T, F>(v: &mut [T], is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort(v, &mut directed(is_less, direction));
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let split = partition(v, is_less);
        let (left, right) = v.split_at_mut(split);

        // Recurse into the shorter side and loop on the longer one. That limits the stack depth to
        // log2(len), even for inputs that keep producing lopsided partitions.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around the median of its first, middle and last element.
///
/// Returns `split` such that no element of `v[..split]` comes after the pivot and no element of
/// `v[split..]` comes before it. For `v.len() >= 2` both sides are non-empty, so every call makes
/// progress.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let last = len - 1;
    let mid = last / 2;

    // Order the three candidates so that v[0] <= v[mid] <= v[last]. The outer two are then already
    // on the correct side and v[mid] is the pivot.
    if is_less(&v[last], &v[0]) {
        v.swap(0, last);
    }
    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);
    }

    // The pivot stays where it is, but the scan below may swap it. Tracking its position instead of
    // copying it out keeps T free of a Clone bound.
    let mut pivot_pos = mid;

    let mut left = 1;
    let mut right = last - 1;

    while left <= right {
        // Both scans stop on elements equal to the pivot. Without that a pivot that is the minimum
        // or maximum of the range would let one pointer run to the boundary without ever swapping,
        // and the next round would partition the exact same range again.
        while left <= right && is_less(&v[left], &v[pivot_pos]) {
            left += 1;
        }
        while left <= right && is_less(&v[pivot_pos], &v[right]) {
            right -= 1;
        }

        if left <= right {
            v.swap(left, right);

            if pivot_pos == left {
                pivot_pos = right;
            } else if pivot_pos == right {
                pivot_pos = left;
            }

            left += 1;
            right -= 1;
        }
    }

    left
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_three_orders_candidates() {
        let mut v = [9, 1, 1, 1, 5, 1, 1, 1, 1];
        let split = partition(&mut v, &mut |a: &i32, b: &i32| a < b);

        assert!(split > 0 && split < v.len());
        assert!(v[..split].iter().all(|x| *x <= 5));
        assert!(v[split..].iter().all(|x| *x >= 5));
        assert_eq!(v[v.len() - 1], 9);
    }

    #[test]
    fn all_equal_terminates() {
        for len in [2, 3, 4, 5, 17, 100, 1_000] {
            let mut v = vec![7; len];
            let mut comp_count = 0usize;
            sort_with(
                &mut v,
                |a, b| {
                    comp_count += 1;
                    a < b
                },
                Direction::Ascending,
            );

            assert!(v.iter().all(|x| *x == 7));
            // Equal elements split evenly, so this stays far away from quadratic.
            assert!(comp_count < len * 16, "len: {len} comparisons: {comp_count}");
        }
    }

    #[test]
    fn pivot_at_range_minimum() {
        // The candidates are (1, 1, 3), so the pivot is the minimum of the whole range.
        let mut v = [1, 3, 2, 3, 1, 2, 3, 2, 3];
        sort(&mut v);

        assert_eq!(v, [1, 1, 2, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn two_elements() {
        let mut v = [2, 1];
        sort(&mut v);
        assert_eq!(v, [1, 2]);

        sort_with(&mut v, |a, b| a < b, Direction::Descending);
        assert_eq!(v, [2, 1]);
    }

    #[test]
    fn sorted_input_partitions_in_the_middle() {
        let mut v = (0..101).collect::<Vec<i32>>();
        let split = partition(&mut v, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(v, (0..101).collect::<Vec<i32>>());
        assert_eq!(split, 51);
    }
}
