//! Lexicographic ordering for vector types
//!
//! Vertices are deduplicated by position in ordered containers, so both
//! vector types compare component by component: x first, then y, then z,
//! then w where present. The first component that differs decides.

use std::cmp::Ordering;

/// Component-by-component comparison in declaration order
///
/// A component pair that is neither `<` nor `>` (equal values, `+0.0`
/// against `-0.0`, or NaN) ties and the walk moves on to the next one.
pub trait Lexicographic {
    /// Compare `self` against `other`, first differing component wins
    fn lex_cmp(&self, other: &Self) -> Ordering;
}

/// Walk component pairs in order and return the first strict difference
#[inline]
pub(crate) fn compare_components<T: PartialOrd>(
    pairs: impl IntoIterator<Item = (T, T)>,
) -> Ordering {
    for (lhs, rhs) in pairs {
        if lhs < rhs {
            return Ordering::Less;
        } else if lhs > rhs {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

/// `partial_cmp` shared by the vector types
///
/// A full tie between values that are not `==` only happens with NaN
/// components; those report as unordered.
#[inline]
pub(crate) fn partial_lex_cmp<T>(lhs: &T, rhs: &T) -> Option<Ordering>
where
    T: Lexicographic + PartialEq,
{
    match lhs.lex_cmp(rhs) {
        Ordering::Equal if lhs != rhs => None,
        ordering => Some(ordering),
    }
}

/// Totally ordered wrapper around a [`Lexicographic`] value
///
/// Two wrapped values are equal when every component ties, so `+0.0` and
/// `-0.0` collapse into one key. Keys with NaN components do not form a
/// consistent order and must not be inserted.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use prim_math::{Ordered, Vector3};
///
/// let mut seen = BTreeSet::new();
/// assert!(seen.insert(Ordered(Vector3::new(1.0, 2.0, 3.0, 0))));
/// assert!(!seen.insert(Ordered(Vector3::new(1.0, 2.0, 3.0, 7))));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Ordered<T>(pub T);

impl<T> Ordered<T> {
    /// Unwrap the inner value
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Lexicographic> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lex_cmp(&other.0) == Ordering::Equal
    }
}

impl<T: Lexicographic> Eq for Ordered<T> {}

impl<T: Lexicographic> PartialOrd for Ordered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Lexicographic> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.lex_cmp(&other.0)
    }
}

impl<T> From<T> for Ordered<T> {
    fn from(value: T) -> Self {
        Ordered(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector3, Vector4};
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_compare_components_first_difference_wins() {
        assert_eq!(compare_components([(1.0, 2.0), (9.0, 0.0)]), Ordering::Less);
        assert_eq!(compare_components([(2.0, 1.0), (0.0, 9.0)]), Ordering::Greater);
        assert_eq!(compare_components([(1.0, 1.0), (0.0, 9.0)]), Ordering::Less);
        assert_eq!(compare_components([(1.0, 1.0), (2.0, 2.0)]), Ordering::Equal);
    }

    #[test]
    fn test_compare_components_nan_falls_through() {
        assert_eq!(compare_components([(f32::NAN, 1.0), (0.0, 1.0)]), Ordering::Less);
    }

    #[test]
    fn test_signed_zero_ties() {
        let a = Ordered(Vector3::new(0.0, 1.0, 2.0, 0));
        let b = Ordered(Vector3::new(-0.0, 1.0, 2.0, 1));
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_btree_set_deduplicates_by_position() {
        let mut set = BTreeSet::new();
        set.insert(Ordered(Vector3::new(1.0, 0.0, 0.0, 0)));
        set.insert(Ordered(Vector3::new(0.0, 1.0, 0.0, 1)));
        set.insert(Ordered(Vector3::new(1.0, 0.0, 0.0, 2)));
        assert_eq!(set.len(), 2);

        // Iteration follows x first
        let first = set.iter().next().unwrap().0;
        assert_eq!(first, Vector3::new(0.0, 1.0, 0.0, 0));
        // First insertion is the one kept
        let kept = set.iter().nth(1).unwrap().0;
        assert_eq!(kept.index, 0);
    }

    #[test]
    fn test_btree_map_vector4_keys() {
        let mut map = BTreeMap::new();
        map.insert(Ordered(Vector4::new(0.0, 0.0, 0.0, 2.0)), "b");
        map.insert(Ordered(Vector4::new(0.0, 0.0, 0.0, 1.0)), "a");
        map.insert(Ordered(Vector4::new(-1.0, 5.0, 5.0, 5.0)), "first");
        let order: Vec<_> = map.values().copied().collect();
        assert_eq!(order, vec!["first", "a", "b"]);
    }

    #[test]
    fn test_into_inner() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Ordered::from(v).into_inner(), v);
    }
}
