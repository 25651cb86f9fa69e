//! Brute-force pairwise comparison of deletable-arc sets across every
//! strong orientation generated so far, used in place of the
//! constraint-propagation complement search when `-b` asks for the slower,
//! more exhaustive check.
//!
//! Sets are kept in a growable pool. Rather than mark a discarded entry by
//! overwriting it with an empty bitset (indistinguishable from "no deletable
//! edges" as a value), a cleared slot is `None`, so emptiness of the edge
//! set and emptiness of the slot are different things.

use crate::bitset::Bitset;

#[derive(Default)]
pub struct DeletableEdgePool {
    slots: Vec<Option<Bitset>>,
}

impl DeletableEdgePool {
    pub fn new() -> Self {
        DeletableEdgePool { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DeletableEdgePool {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compares `deletable` against every set currently in the pool. If some
    /// pair's deletable-arc sets jointly cover every edge, the Frank number
    /// is 2. Otherwise, subset entries are pruned and `deletable` is stored
    /// for future comparisons.
    ///
    /// Returns `true` once a covering pair is found.
    pub fn check_and_insert(&mut self, deletable: Bitset, edge_count: usize, stats: &mut crate::counters::Counters) -> bool {
        let all_edges = Bitset::full(edge_count);
        let mut insert_position = None;

        for i in 0..self.slots.len() {
            let Some(existing) = self.slots[i].clone() else {
                if insert_position.is_none() {
                    insert_position = Some(i);
                }
                continue;
            };

            if deletable.is_subset(&existing) {
                stats.orientations_giving_subset += 1;
                return false;
            }

            if existing.is_subset(&deletable) {
                if insert_position.is_none() {
                    stats.orientations_giving_superset += 1;
                }
                self.slots[i] = None;
            }

            if deletable.union(&existing) == all_edges {
                stats.complementary_bitsets += 1;
                self.slots.push(Some(deletable));
                return true;
            }
        }

        match insert_position {
            Some(pos) => self.slots[pos] = Some(deletable),
            None => self.slots.push(Some(deletable)),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::Counters;

    fn set(capacity: usize, elems: &[usize]) -> Bitset {
        let mut s = Bitset::empty(capacity);
        for &e in elems {
            s.add(e);
        }
        s
    }

    #[test]
    fn complementary_pair_is_detected() {
        let mut pool = DeletableEdgePool::new();
        let mut stats = Counters::default();
        assert!(!pool.check_and_insert(set(4, &[0, 1]), 4, &mut stats));
        assert!(pool.check_and_insert(set(4, &[2, 3]), 4, &mut stats));
        assert_eq!(stats.complementary_bitsets, 1);
    }

    #[test]
    fn subset_of_existing_is_dismissed() {
        let mut pool = DeletableEdgePool::new();
        let mut stats = Counters::default();
        assert!(!pool.check_and_insert(set(4, &[0, 1, 2]), 4, &mut stats));
        assert!(!pool.check_and_insert(set(4, &[0, 1]), 4, &mut stats));
        assert_eq!(stats.orientations_giving_subset, 1);
    }

    #[test]
    fn superset_displaces_existing_slot() {
        let mut pool = DeletableEdgePool::new();
        let mut stats = Counters::default();
        assert!(!pool.check_and_insert(set(4, &[0]), 4, &mut stats));
        assert!(!pool.check_and_insert(set(4, &[0, 1]), 4, &mut stats));
        assert_eq!(stats.orientations_giving_superset, 1);
        // The displaced slot was cleared, so the pool holds one live entry.
        assert_eq!(pool.len(), 1);
    }
}
