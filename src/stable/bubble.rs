//! Bubble sort with early exit.

use std::cmp::Ordering;

use crate::comparator::{directed, Direction};

sort_impl!("bubble_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_with<T, F>(v: &mut [T], is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    bubble_sort(v, &mut directed(is_less, direction));
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Each pass carries the last element of v[..end] into place, so the scanned range shrinks by
    // one per pass. This also caps the number of passes at v.len() when is_less is not a strict
    // weak order and some pair would otherwise swap back and forth forever.
    let mut end = v.len();

    while end > 1 {
        let mut performed_swap = false;

        for i in 0..(end - 1) {
            // Strict comparison, equal neighbours never swap. That is what keeps this stable.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                performed_swap = true;
            }
        }

        if !performed_swap {
            return;
        }

        end -= 1;
    }
}
