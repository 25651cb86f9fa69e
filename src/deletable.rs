//! Deletable-arc detection: which arcs of a strongly connected orientation
//! can be removed while the remainder stays strongly connected.

use crate::bitset::Bitset;
use crate::digraph::Digraph;
use crate::edges::EdgeNumbering;

/// Whether removing arc `i -> end` still leaves a directed path from `i` to
/// `end` through the rest of the graph. `orientation` must already have that
/// arc removed by the caller.
fn contains_directed_path(orientation: &Digraph, mut unvisited: Bitset, i: usize, end: usize) -> bool {
    if orientation.has_arc(i, end) {
        return true;
    }
    unvisited.remove(i);
    let candidates = orientation.out_neighbors(i).intersection(&unvisited);
    for next in candidates.iter() {
        if contains_directed_path(orientation, unvisited.clone(), next, end) {
            return true;
        }
    }
    false
}

/// Every arc of `orientation` whose removal leaves the digraph strongly
/// connected, returned as the set of (shared, undirected) edge indices.
///
/// Assumes `orientation` is already strongly connected.
pub fn deletable_edges(orientation: &mut Digraph, edges: &EdgeNumbering) -> Bitset {
    let n = orientation.num_vertices();
    let mut deletable = Bitset::empty(edges.edge_count());

    for i in 0..n {
        for nbr in orientation.out_neighbors(i).iter().collect::<Vec<_>>() {
            orientation.remove_arc(i, nbr);
            let all = Bitset::full(n);
            if contains_directed_path(orientation, all, i, nbr) {
                deletable.add(edges.id(i, nbr));
            }
            orientation.restore_arc(i, nbr);
        }
    }

    deletable
}
