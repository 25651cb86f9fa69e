//! Strong-orientation search: enumerates orientations of the
//! underlying undirected graph edge by edge, pruning branches that would
//! give some vertex three out-arcs or three in-arcs (impossible for a cubic
//! vertex to keep in a strongly connected digraph), and for each strongly
//! connected, "no stuck vertex" orientation found, hands its deletable-arc
//! set to either the constraint-propagation complement search or the
//! brute-force pool.

use crate::bitset::Bitset;
use crate::complement;
use crate::counters::Counters;
use crate::deletable::deletable_edges;
use crate::digraph::Digraph;
use crate::edges::EdgeNumbering;
use crate::pool::DeletableEdgePool;
use crate::scc::is_strongly_connected;

/// Search parameters independent of the CLI surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchConfig {
    /// Use the brute-force pairwise pool (`-b`) instead of the
    /// constraint-propagation complement search.
    pub brute_force: bool,
    /// Restrict to orientations whose 1-based generation index is congruent
    /// to `remainder` modulo `modulo` (`-s`'s sharding of a single graph's
    /// search space).
    pub shard: Option<(u64, u64)>,
}

/// Runs the orientation search for one graph. Returns `true` if some strong
/// orientation's deletable-arc set has a complement, i.e. the graph's Frank
/// number is 2.
pub fn has_frank_number_two(adjacency: &[Bitset], n: usize, config: SearchConfig, stats: &mut Counters) -> bool {
    let edges = EdgeNumbering::new(n, adjacency);
    let mut orientation = Digraph::new(n);
    let mut pool = DeletableEdgePool::new();

    generate(adjacency, &edges, config, stats, &mut orientation, &mut pool, 0)
}

fn no_incident_edge_is_deletable(adjacency: &[Bitset], edges: &EdgeNumbering, deletable: &Bitset, v: usize) -> bool {
    adjacency[v].iter().all(|nbr| !deletable.contains(edges.id(v, nbr)))
}

fn generate(
    adjacency: &[Bitset],
    edges: &EdgeNumbering,
    config: SearchConfig,
    stats: &mut Counters,
    orientation: &mut Digraph,
    pool: &mut DeletableEdgePool,
    edge_index: usize,
) -> bool {
    if edge_index == edges.edge_count() {
        stats.total_orientations_generated += 1;

        if let Some((remainder, modulo)) = config.shard {
            if stats.total_orientations_generated % modulo != remainder {
                return false;
            }
        }

        if !is_strongly_connected(orientation) {
            return false;
        }

        let deletable = deletable_edges(orientation, edges);

        // A vertex with no deletable incident edge can never be completed by
        // a complementary orientation, whatever the rest of the graph does.
        for v in 0..orientation.num_vertices() {
            if no_incident_edge_is_deletable(adjacency, edges, &deletable, v) {
                return false;
            }
        }

        stats.note_generated_orientation();

        return if config.brute_force {
            let found = pool.check_and_insert(deletable, edges.edge_count(), stats);
            stats.note_pool_size(pool.len() as u64);
            found
        } else {
            complement::has_complementary_orientation(adjacency, orientation.num_vertices(), edges, &deletable)
        };
    }

    let (u, v) = edges.endpoints(edge_index);

    orientation.add_arc(u, v);
    let mut found = orientation.out_degree(u) != 3
        && orientation.in_degree(v) != 3
        && generate(adjacency, edges, config, stats, orientation, pool, edge_index + 1);
    orientation.remove_arc(u, v);
    if found {
        return true;
    }

    // The reverse of a whole orientation has the same deletable-arc set, so
    // fixing the very first edge's direction halves the search without
    // missing any candidate.
    if edge_index == 0 {
        return false;
    }

    orientation.add_arc(v, u);
    found = orientation.out_degree(v) != 3
        && orientation.in_degree(u) != 3
        && generate(adjacency, edges, config, stats, orientation, pool, edge_index + 1);
    orientation.remove_arc(v, u);
    found
}
