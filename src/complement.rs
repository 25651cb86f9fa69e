//! Finds a complementary strong orientation for a given orientation's
//! deletable-arc set via constraint propagation, rather than generating
//! and checking every other orientation from scratch.
//!
//! `force_arc` implements the three propagation rules the original exact
//! method relies on: an edge not yet forced into the deletable set of the
//! candidate complement must end up oriented so the corresponding arc of
//! the first orientation stays deletable, and a vertex that already has two
//! arcs in one direction has its last incident edge forced the other way.
//! Each rule application can itself trigger further forced arcs, so the
//! whole cascade is explored before any single choice is accepted.

use crate::bitset::Bitset;
use crate::digraph::Digraph;
use crate::edges::EdgeNumbering;

fn other_edges_are_non_deletable(
    adjacency: &[Bitset],
    edges: &EdgeNumbering,
    deletable: &Bitset,
    x: usize,
    y: usize,
) -> bool {
    adjacency[x]
        .iter()
        .filter(|&e| e != y)
        .all(|e| !deletable.contains(edges.id(x, e)))
}

/// Attempts to orient edge `x -> y` in `orientation`, cascading any arcs the
/// three propagation rules force as a result. Returns `false` the moment a
/// forced arc would contradict one already present; the caller is
/// responsible for undoing everything this call added (via
/// `Digraph::checkpoint`/`restore`) when that happens.
fn force_arc(
    adjacency: &[Bitset],
    orientation: &mut Digraph,
    x: usize,
    y: usize,
    deletable: &Bitset,
    edges: &EdgeNumbering,
) -> bool {
    if orientation.has_arc(x, y) {
        return true;
    }
    if orientation.has_arc(y, x) {
        return false;
    }
    if orientation.out_degree(x) >= 2 {
        return false;
    }
    if orientation.in_degree(y) >= 2 {
        return false;
    }

    if deletable.contains(edges.id(x, y)) {
        // Two deletable edges incident to the same vertex must point one in,
        // one out.
        for element in adjacency[x].iter().filter(|&e| e != y) {
            if deletable.contains(edges.id(x, element)) && orientation.out_neighbors(x).contains(element) {
                return false;
            }
        }
        for element in adjacency[y].iter().filter(|&e| e != x) {
            if deletable.contains(edges.id(y, element)) && orientation.in_neighbors(y).contains(element) {
                return false;
            }
        }
    } else {
        if orientation.out_degree(x) >= 2 || orientation.in_degree(x) >= 2 {
            return false;
        }
        if orientation.out_degree(y) >= 2 || orientation.in_degree(y) >= 2 {
            return false;
        }
        // A non-deletable edge must be oriented opposite the other
        // non-deletable edge incident to the same endpoint.
        let x_has_nondeletable = adjacency[x]
            .iter()
            .filter(|&e| e != y)
            .any(|e| !deletable.contains(edges.id(x, e)));
        if x_has_nondeletable && orientation.in_neighbors(x).contains(y) {
            return false;
        }
        let y_has_nondeletable = adjacency[y]
            .iter()
            .filter(|&e| e != x)
            .any(|e| !deletable.contains(edges.id(y, e)));
        if y_has_nondeletable && orientation.out_neighbors(y).contains(x) {
            return false;
        }
    }

    orientation.add_arc(x, y);

    // x now has two outgoing arcs and no incoming: the last neighbor must
    // point in.
    if orientation.out_degree(x) == 2 && orientation.in_degree(x) < 1 {
        let last = adjacency[x]
            .difference(orientation.out_neighbors(x))
            .first()
            .expect("cubic vertex has a third neighbor");
        if !force_arc(adjacency, orientation, last, x, deletable, edges) {
            return false;
        }
    }

    // y now has no outgoing arcs and two incoming: the last neighbor must
    // receive the outgoing arc.
    if orientation.out_degree(y) == 0 && orientation.in_degree(y) == 2 {
        let last = adjacency[y]
            .difference(orientation.in_neighbors(y))
            .first()
            .expect("cubic vertex has a third neighbor");
        if !force_arc(adjacency, orientation, y, last, deletable, edges) {
            return false;
        }
    }

    if deletable.contains(edges.id(x, y)) {
        for element in adjacency[x].iter().filter(|&e| e != y).collect::<Vec<_>>() {
            if deletable.contains(edges.id(x, element)) && !force_arc(adjacency, orientation, element, x, deletable, edges) {
                return false;
            }
        }
        for element in adjacency[y].iter().filter(|&e| e != x).collect::<Vec<_>>() {
            if deletable.contains(edges.id(y, element)) && !force_arc(adjacency, orientation, y, element, deletable, edges) {
                return false;
            }
        }

        if other_edges_are_non_deletable(adjacency, edges, deletable, x, y) {
            for element in adjacency[x].iter().filter(|&e| e != y).collect::<Vec<_>>() {
                if !force_arc(adjacency, orientation, element, x, deletable, edges) {
                    return false;
                }
            }
        }
        if other_edges_are_non_deletable(adjacency, edges, deletable, y, x) {
            for element in adjacency[y].iter().filter(|&e| e != x).collect::<Vec<_>>() {
                if !force_arc(adjacency, orientation, y, element, deletable, edges) {
                    return false;
                }
            }
        }
    } else {
        if orientation.out_degree(y) == 0 && orientation.in_degree(y) == 2 {
            let last = adjacency[y]
                .difference(orientation.out_neighbors(y))
                .first()
                .expect("cubic vertex has a third neighbor");
            if !force_arc(adjacency, orientation, y, last, deletable, edges) {
                return false;
            }
        }
        if orientation.out_degree(y) == 1 && orientation.in_degree(y) == 1 {
            let used = orientation.out_neighbors(y).union(orientation.in_neighbors(y));
            let last = adjacency[y]
                .difference(&used)
                .first()
                .expect("cubic vertex has a third neighbor");
            if !force_arc(adjacency, orientation, last, y, deletable, edges) {
                return false;
            }
        }

        if let Some(element) = adjacency[x]
            .iter()
            .filter(|&e| e != y)
            .find(|&e| !deletable.contains(edges.id(x, e)))
        {
            if !force_arc(adjacency, orientation, x, element, deletable, edges) {
                return false;
            }
        }
        if let Some(element) = adjacency[y]
            .iter()
            .filter(|&e| e != x)
            .find(|&e| !deletable.contains(edges.id(y, e)))
        {
            if !force_arc(adjacency, orientation, element, y, deletable, edges) {
                return false;
            }
        }
    }

    true
}

/// Tries to orient every remaining edge (from index `start` onward) so the
/// result is a complement of `deletable`: the union of both orientations'
/// deletable-arc sets covers every edge.
fn can_complete(
    adjacency: &[Bitset],
    orientation: &mut Digraph,
    deletable: &Bitset,
    edges: &EdgeNumbering,
    start: usize,
) -> bool {
    if start == edges.edge_count() {
        let complement_deletable = crate::deletable::deletable_edges(orientation, edges);
        return deletable.union(&complement_deletable) == Bitset::full(edges.edge_count());
    }

    let (x, y) = edges.endpoints(start);
    if orientation.has_arc(x, y) || orientation.has_arc(y, x) {
        return can_complete(adjacency, orientation, deletable, edges, start + 1);
    }

    let checkpoint = orientation.checkpoint();
    if force_arc(adjacency, orientation, x, y, deletable, edges)
        && can_complete(adjacency, orientation, deletable, edges, start + 1)
    {
        return true;
    }
    orientation.restore(checkpoint);

    let checkpoint = orientation.checkpoint();
    if force_arc(adjacency, orientation, y, x, deletable, edges)
        && can_complete(adjacency, orientation, deletable, edges, start + 1)
    {
        return true;
    }
    orientation.restore(checkpoint);

    false
}

/// Whether a strong orientation exists whose deletable-arc set, together
/// with `deletable`, covers every edge of the graph: whether `deletable`
/// (the arc set of some orientation) admits a complement giving Frank number 2.
pub fn has_complementary_orientation(adjacency: &[Bitset], n: usize, edges: &EdgeNumbering, deletable: &Bitset) -> bool {
    let mut orientation = Digraph::new(n);

    // Fix a first arc; direction is immaterial since the reversed orientation
    // has the same deletable-arc set.
    let (x0, y0) = edges.endpoints(0);
    if !force_arc(adjacency, &mut orientation, x0, y0, deletable, edges) {
        return false;
    }

    can_complete(adjacency, &mut orientation, deletable, edges, 1)
}
