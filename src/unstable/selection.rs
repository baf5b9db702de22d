//! Selection sort. Always performs n * (n - 1) / 2 comparisons and at most n - 1 swaps.

use std::cmp::Ordering;

use crate::comparator::{directed, Direction};

sort_impl!("selection_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_with<T, F>(v: &mut [T], is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    selection_sort(v, &mut directed(is_less, direction));
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        // Only a strictly earlier element replaces the current pick, so among equals the first
        // one found wins.
        let mut smallest = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[smallest]) {
                smallest = j;
            }
        }

        v.swap(i, smallest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_count_is_input_independent() {
        for input in [[1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1], [3, 3, 3, 3, 3, 3]] {
            let mut v = input;
            let mut comp_count = 0;
            sort_with(
                &mut v,
                |a, b| {
                    comp_count += 1;
                    a < b
                },
                Direction::Ascending,
            );

            assert_eq!(comp_count, 6 * 5 / 2);
        }
    }

    #[test]
    fn not_stable() {
        // The first pass swaps (2, 'a') behind (2, 'b').
        let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        assert_eq!(v, [(1, 'c'), (2, 'b'), (2, 'a')]);
    }
}
