//! Applies an `is_less` predicate in ascending or descending sense.

/// Order in which a sort arranges its elements relative to the supplied `is_less`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Elements for which `is_less(a, b)` holds end up before `b`.
    #[default]
    Ascending,
    /// The arguments of `is_less` are swapped, inverting the order without a second predicate.
    Descending,
}

impl Direction {
    #[inline]
    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl From<bool> for Direction {
    /// `true` means descending.
    fn from(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Returns whether `a` belongs strictly before `b` under `is_less` applied in `direction`.
#[inline]
pub fn is_before<T, F>(a: &T, b: &T, is_less: &mut F, direction: Direction) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match direction {
        Direction::Ascending => is_less(a, b),
        Direction::Descending => is_less(b, a),
    }
}

/// Bakes `direction` into `is_less`, so the sort implementations only ever see a plain
/// ascending predicate.
#[inline]
pub fn directed<T, F>(mut is_less: F, direction: Direction) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    move |a: &T, b: &T| is_before(a, b, &mut is_less, direction)
}
