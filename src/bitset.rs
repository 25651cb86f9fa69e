//! Fixed-capacity bitsets used for both vertex sets and edge-indexed arc sets.
//!
//! Both kinds of sets need the same operations (union, intersection,
//! difference, complement, ascending iteration), so a single `Bitset` type
//! backs both; callers pick the capacity appropriate to what they're
//! indexing (`N` vertices, or `3N/2` edges).

use fixedbitset::FixedBitSet;

/// A fixed-capacity set of small non-negative indices, backed by
/// [`FixedBitSet`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Bitset {
    bits: FixedBitSet,
}

impl Bitset {
    /// The empty set over `capacity` possible elements.
    pub fn empty(capacity: usize) -> Self {
        Bitset {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// The set `{element}`.
    pub fn singleton(capacity: usize, element: usize) -> Self {
        let mut set = Self::empty(capacity);
        set.add(element);
        set
    }

    /// The set of every index below `capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::empty(capacity);
        set.bits.insert_range(..);
        set
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn add(&mut self, element: usize) {
        self.bits.insert(element);
    }

    pub fn remove(&mut self, element: usize) {
        self.bits.set(element, false);
    }

    pub fn contains(&self, element: usize) -> bool {
        self.bits.contains(element)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.count_ones(..) == 0
    }

    pub fn size(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn union(&self, other: &Bitset) -> Bitset {
        let mut out = self.clone();
        out.bits.union_with(&other.bits);
        out
    }

    pub fn intersection(&self, other: &Bitset) -> Bitset {
        let mut out = self.clone();
        out.bits.intersect_with(&other.bits);
        out
    }

    pub fn difference(&self, other: &Bitset) -> Bitset {
        let mut out = self.clone();
        out.bits.difference_with(&other.bits);
        out
    }

    /// The complement relative to `capacity` elements (`capacity` must not
    /// exceed this set's own capacity).
    pub fn complement(&self, capacity: usize) -> Bitset {
        let mut out = Self::full(capacity);
        out.bits.difference_with(&self.bits);
        out
    }

    pub fn is_subset(&self, other: &Bitset) -> bool {
        self.bits.is_subset(&other.bits)
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<usize> {
        self.bits.ones().next()
    }

    /// The smallest element strictly greater than `after`.
    pub fn next_after(&self, after: usize) -> Option<usize> {
        self.bits.ones().find(|&x| x > after)
    }

    /// Iterate over elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_and_contains() {
        let s = Bitset::singleton(8, 3);
        assert!(s.contains(3));
        assert!(!s.contains(4));
        assert_eq!(s.size(), 1);
    }

    #[test]
    fn add_remove_idempotent() {
        let mut s = Bitset::empty(8);
        s.add(2);
        s.add(2);
        assert_eq!(s.size(), 1);
        s.remove(2);
        s.remove(2);
        assert!(s.is_empty());
    }

    #[test]
    fn complement_of_empty_is_full() {
        let s = Bitset::empty(10);
        assert_eq!(s.complement(10).size(), 10);
    }

    #[test]
    fn boolean_algebra_identities() {
        let a = Bitset::singleton(8, 1).union(&Bitset::singleton(8, 2));
        let b = Bitset::singleton(8, 2).union(&Bitset::singleton(8, 3));
        // De Morgan: complement(a union b) == complement(a) intersect complement(b)
        let lhs = a.union(&b).complement(8);
        let rhs = a.complement(8).intersection(&b.complement(8));
        assert_eq!(lhs, rhs);

        // union/intersection absorb.
        assert_eq!(a.union(&a.intersection(&b)), a);
    }

    #[test]
    fn ascending_iteration() {
        let mut s = Bitset::empty(10);
        for i in [7, 1, 4, 2] {
            s.add(i);
        }
        let elems: Vec<_> = s.iter().collect();
        assert_eq!(elems, vec![1, 2, 4, 7]);
    }

    #[test]
    fn next_after_walks_in_order() {
        let mut s = Bitset::empty(10);
        s.add(2);
        s.add(5);
        s.add(9);
        assert_eq!(s.first(), Some(2));
        assert_eq!(s.next_after(2), Some(5));
        assert_eq!(s.next_after(5), Some(9));
        assert_eq!(s.next_after(9), None);
    }
}
