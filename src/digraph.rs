//! A directed graph on a fixed vertex set, stored as per-vertex out/in
//! neighbor bitsets.

use crate::bitset::Bitset;

/// A digraph on `n` vertices. `out[u]`/`in_[v]` hold neighbor bitsets with
/// the invariant `v in out[u] <=> u in in_[v]`.
#[derive(Clone, Debug)]
pub struct Digraph {
    n: usize,
    out: Vec<Bitset>,
    in_: Vec<Bitset>,
    arc_count: usize,
    /// Log of arcs added, in order, so a `checkpoint`/`restore` pair can
    /// undo an arbitrary cascade of additions in O(depth) rather than
    /// copying the whole `out`/`in_` arrays on every backtrack step.
    log: Vec<(usize, usize)>,
}

impl Digraph {
    pub fn new(n: usize) -> Self {
        Digraph {
            n,
            out: vec![Bitset::empty(n); n],
            in_: vec![Bitset::empty(n); n],
            arc_count: 0,
            log: Vec::new(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    pub fn out_neighbors(&self, v: usize) -> &Bitset {
        &self.out[v]
    }

    pub fn in_neighbors(&self, v: usize) -> &Bitset {
        &self.in_[v]
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.out[v].size()
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.in_[v].size()
    }

    pub fn has_arc(&self, u: usize, v: usize) -> bool {
        self.out[u].contains(v)
    }

    /// Adds the arc `u -> v`. Does not check for duplicates; callers
    /// maintain that invariant.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        self.out[u].add(v);
        self.in_[v].add(u);
        self.arc_count += 1;
        self.log.push((u, v));
    }

    /// Removes the arc `u -> v` directly, without touching the undo log.
    /// Used where mutation and its undo are both explicit and local (the
    /// deletable-arc scan, and the plain orientation-generation recursion).
    pub fn remove_arc(&mut self, u: usize, v: usize) {
        self.out[u].remove(v);
        self.in_[v].remove(u);
        self.arc_count -= 1;
    }

    /// Re-adds the arc `u -> v` directly, without touching the undo log.
    /// The undo counterpart to `remove_arc`, for the same local,
    /// already-paired call sites; callers that may later `restore` to a
    /// checkpoint must use this instead of `add_arc` to avoid re-logging an
    /// arc that was never actually removed from the log.
    pub fn restore_arc(&mut self, u: usize, v: usize) {
        self.out[u].add(v);
        self.in_[v].add(u);
        self.arc_count += 1;
    }

    /// Marks the current point in the arc log for a later `restore`.
    pub fn checkpoint(&self) -> usize {
        self.log.len()
    }

    /// Undoes every arc added since `checkpoint`.
    pub fn restore(&mut self, checkpoint: usize) {
        while self.log.len() > checkpoint {
            let (u, v) = self.log.pop().expect("log longer than checkpoint");
            self.out[u].remove(v);
            self.in_[v].remove(u);
            self.arc_count -= 1;
        }
    }

    pub fn reverse(&self) -> Digraph {
        Digraph {
            n: self.n,
            out: self.in_.clone(),
            in_: self.out.clone(),
            arc_count: self.arc_count,
            log: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_arc_invariant() {
        let mut d = Digraph::new(4);
        d.add_arc(0, 1);
        d.add_arc(1, 2);
        assert!(d.out_neighbors(0).contains(1));
        assert!(d.in_neighbors(1).contains(0));
        assert_eq!(d.arc_count(), 2);
    }

    #[test]
    fn remove_arc_is_inverse() {
        let mut d = Digraph::new(3);
        d.add_arc(0, 2);
        d.remove_arc(0, 2);
        assert!(!d.out_neighbors(0).contains(2));
        assert!(!d.in_neighbors(2).contains(0));
        assert_eq!(d.arc_count(), 0);
    }

    #[test]
    fn checkpoint_restore_undoes_cascade() {
        let mut d = Digraph::new(4);
        d.add_arc(0, 1);
        let cp = d.checkpoint();
        d.add_arc(1, 2);
        d.add_arc(2, 3);
        assert_eq!(d.arc_count(), 3);
        d.restore(cp);
        assert_eq!(d.arc_count(), 1);
        assert!(d.out_neighbors(0).contains(1));
        assert!(!d.out_neighbors(1).contains(2));
        assert!(!d.out_neighbors(2).contains(3));
    }

    #[test]
    fn arcs_equals_sum_of_out_degrees() {
        let mut d = Digraph::new(5);
        d.add_arc(0, 1);
        d.add_arc(1, 2);
        d.add_arc(2, 0);
        let sum: usize = (0..5).map(|v| d.out_degree(v)).sum();
        assert_eq!(sum, d.arc_count());
    }
}
