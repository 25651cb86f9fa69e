//! Oddness-2 sufficient condition: a cheap alternative to the exact search
//! that proves Frank number 2 for many cyclically 4-edge-connected cubic
//! graphs without enumerating orientations at all.
//!
//! For every perfect matching `F`, the complementary 2-factor `G - F`
//! decomposes into cycles. If exactly two of those cycles are odd and they
//! sit in one of two specific configurations relative to `F`'s other edges
//! (a direct bridge edge, or a short path through an intervening even
//! cycle), the graph has two complementary strong orientations built from
//! that structure. Both configurations reduce to checking whether the
//! "suppressed" connecting edges are strong 2-edges: not part of any
//! 2-edge-cut that isolates a single even cycle.

use crate::bitset::Bitset;
use crate::counters::Counters;
use crate::deletable::deletable_edges;
use crate::digraph::Digraph;
use crate::edges::EdgeNumbering;
use crate::scc::is_strongly_connected;

#[derive(Clone, Debug)]
struct OddCycle {
    vertices: Vec<usize>,
    members: Bitset,
}

/// Which of the two sufficient-condition shapes matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Configuration {
    /// The two odd cycles are joined directly by one `F`-edge.
    Bridge,
    /// The two odd cycles are joined through one intervening even cycle.
    ThroughEvenCycle,
}

/// Everything needed to reconstruct and double-check the pair of
/// complementary orientations the heuristic claims exist.
#[derive(Clone, Debug)]
pub struct OddnessWitness {
    f: Vec<usize>,
    m: Vec<usize>,
    circuit_orientation: Vec<Option<usize>>,
    edges_between_cycles: Vec<(usize, usize)>,
    pub configuration: Configuration,
}

fn remove_edge(adjacency: &mut [Bitset], u: usize, v: usize) {
    adjacency[u].remove(v);
    adjacency[v].remove(u);
}

fn add_edge(adjacency: &mut [Bitset], u: usize, v: usize) {
    adjacency[u].add(v);
    adjacency[v].add(u);
}

/// Finds the two cycles of parity odd in the 2-factor `G - F`, tracing each
/// cycle by always stepping to the neighbor that is neither the vertex we
/// came from nor the `F`-partner. Along the way records `m`, an alternating
/// matching along every cycle (used later as a maximal matching of `G - F`).
/// Returns `None` if the 2-factor doesn't have exactly two odd cycles.
fn find_two_odd_cycles(adjacency: &[Bitset], n: usize, f: &[usize]) -> Option<(OddCycle, OddCycle, Vec<usize>)> {
    const UNSET: usize = usize::MAX;
    let mut m = vec![UNSET; n];
    let mut unchecked = Bitset::full(n);
    let mut odd_cycles = Vec::new();

    while let Some(start) = unchecked.first() {
        let mut current = start;
        let mut previous: Option<usize> = None;
        let mut cycle_is_odd = false;
        let mut members = Bitset::empty(n);
        let mut vertices = Vec::new();

        loop {
            unchecked.remove(current);
            members.add(current);
            vertices.push(current);

            let next = adjacency[current]
                .iter()
                .find(|&v| Some(v) != previous && v != f[current])
                .expect("cubic vertex has a neighbor outside {previous, match}");

            if m[current] == UNSET {
                m[current] = next;
                m[next] = current;
            }

            previous = Some(current);
            current = next;
            cycle_is_odd = !cycle_is_odd;
            if current == start {
                break;
            }
        }

        if cycle_is_odd {
            odd_cycles.push(OddCycle { vertices, members });
            if odd_cycles.len() > 2 {
                return None;
            }
        }
    }

    if odd_cycles.len() == 2 {
        let second = odd_cycles.pop().unwrap();
        let first = odd_cycles.pop().unwrap();
        Some((first, second, m))
    } else {
        None
    }
}

/// Extends `m` with a maximal matching of each odd cycle minus the
/// connecting endpoints `x1`/`x2`.
fn extend_odd_cycle_matching(cycle0: &OddCycle, cycle1: &OddCycle, index_of_x1: usize, index_of_x2: usize, m: &mut [usize]) {
    for &(cycle, start) in &[(cycle0, index_of_x1), (cycle1, index_of_x2)] {
        let len = cycle.vertices.len();
        let mut current_index = start;
        let mut add_to_matching = false;
        loop {
            let next_index = (current_index + 1) % len;
            if add_to_matching {
                let a = cycle.vertices[current_index];
                let b = cycle.vertices[next_index];
                m[a] = b;
                m[b] = a;
            }
            add_to_matching = !add_to_matching;
            current_index = next_index;
            if current_index == start {
                break;
            }
        }
    }
}

/// Orients the circuit of `F`-edges and `m`-edges containing `u` (and the one
/// containing `v`, if different) so they agree: entering `u` along `m` means
/// entering `v` along `F`, or vice versa. Returns whether that agreement
/// holds once both circuits are oriented.
fn circuit_orientation_is_consistent(m: &[usize], f: &[usize], circuit_orientation: &mut [Option<usize>], u: usize, v: usize) -> bool {
    if circuit_orientation[u].is_none() {
        let mut take_m = circuit_orientation[v] == Some(f[v]);
        let mut current = u;
        loop {
            let next = if take_m { m[current] } else { f[current] };
            circuit_orientation[current] = Some(next);
            current = next;
            take_m = !take_m;
            if current == u {
                break;
            }
        }
    }
    if circuit_orientation[v].is_none() {
        let mut take_m = circuit_orientation[u] == Some(f[u]);
        let mut current = v;
        loop {
            let next = if take_m { m[current] } else { f[current] };
            circuit_orientation[current] = Some(next);
            current = next;
            take_m = !take_m;
            if current == v {
                break;
            }
        }
    }
    (circuit_orientation[u] == Some(f[u])) == (circuit_orientation[v] == Some(m[v]))
}

/// Rebuilds `m` along the cycle from `y1` to `y2` (exclusive of the `y1-y2`
/// edge itself) so it stays a maximal matching once `y1`/`y2` are pulled out
/// to become connecting endpoints.
fn rematch(adjacency: &[Bitset], n: usize, m: &mut [usize], f: &[usize], y1: usize, y2: usize) {
    let mut previous = y2;
    let mut current = y1;
    let mut add_to_matching = false;
    loop {
        let exclude = Bitset::singleton(n, f[current]).union(&Bitset::singleton(n, previous));
        let next = adjacency[current]
            .difference(&exclude)
            .first()
            .expect("cubic vertex has a remaining neighbor");
        if add_to_matching {
            m[current] = next;
            m[next] = current;
        }
        previous = current;
        current = next;
        add_to_matching = !add_to_matching;
        if current == y2 {
            break;
        }
    }
    m[y1] = y2;
    m[y2] = y1;
}

/// Whether every connected component of `adjacency` has at most one cycle:
/// no two vertex-disjoint cycles ("cyclic connectivity").
fn is_cyclically_connected(adjacency: &[Bitset]) -> bool {
    let n = adjacency.len();
    let mut unchecked = Bitset::full(n);
    let mut components_with_cycle = 0;

    while let Some(start) = unchecked.first() {
        let mut component = Bitset::empty(n);
        let mut cycle_found = false;
        let mut stack = vec![(start, None::<usize>)];

        while let Some((v, parent)) = stack.pop() {
            if component.contains(v) {
                cycle_found = true;
                continue;
            }
            unchecked.remove(v);
            component.add(v);
            for nbr in adjacency[v].iter() {
                if Some(nbr) != parent {
                    stack.push((nbr, Some(v)));
                }
            }
        }

        if cycle_found {
            components_with_cycle += 1;
        }
        if components_with_cycle >= 2 {
            return false;
        }
    }
    true
}

/// Whether `{endpoint1, endpoint2}`, already known to carry flow value 2, is
/// not part of any cycle-separating 3-edge-cut built from it plus two edges
/// of `circuit_orientation`. Sufficient, not necessary, for deletability.
fn edge_is_strong_2_edge(adjacency: &mut [Bitset], endpoint1: usize, endpoint2: usize, circuit_orientation: &[Option<usize>]) -> bool {
    let n = adjacency.len();
    let mut has_cyclic_2_1_1_cut = false;
    remove_edge(adjacency, endpoint1, endpoint2);

    'outer: for i in 0..n {
        let Some(ci) = circuit_orientation[i] else { continue };
        remove_edge(adjacency, i, ci);

        for j in (i + 1)..n {
            let Some(cj) = circuit_orientation[j] else { continue };
            remove_edge(adjacency, j, cj);
            if !is_cyclically_connected(adjacency) {
                has_cyclic_2_1_1_cut = true;
            }
            add_edge(adjacency, j, cj);
            if has_cyclic_2_1_1_cut {
                break;
            }
        }

        add_edge(adjacency, i, ci);
        if has_cyclic_2_1_1_cut {
            break 'outer;
        }
    }

    add_edge(adjacency, endpoint1, endpoint2);
    !has_cyclic_2_1_1_cut
}

fn suppressed_edges_are_deletable(adjacency: &[Bitset], circuit_orientation: &[Option<usize>], edges_between_cycles: &[(usize, usize)]) -> bool {
    let mut working: Vec<Bitset> = adjacency.to_vec();
    for &(u, v) in edges_between_cycles {
        remove_edge(&mut working, u, v);
    }

    let mut all_deletable = true;
    'check: for &(u, v) in edges_between_cycles {
        for endpoint in [u, v] {
            let other = working[endpoint]
                .first()
                .expect("cubic vertex has a remaining neighbor after suppressing the connecting edge");
            if !edge_is_strong_2_edge(&mut working, endpoint, other, circuit_orientation) {
                all_deletable = false;
                break 'check;
            }
        }
    }

    for &(u, v) in edges_between_cycles {
        add_edge(&mut working, u, v);
    }
    all_deletable
}

fn index_of(vertices: &[usize], target: usize) -> usize {
    vertices.iter().position(|&v| v == target).expect("vertex belongs to this cycle")
}

fn try_configurations(adjacency: &[Bitset], n: usize, f: &[usize], stats: &mut Counters) -> Option<OddnessWitness> {
    let (cycle0, cycle1, m) = find_two_odd_cycles(adjacency, n, f)?;

    for u in cycle0.members.iter() {
        let v = f[u];

        if cycle1.members.contains(v) {
            let index_of_x1 = index_of(&cycle0.vertices, u);
            let index_of_x2 = index_of(&cycle1.vertices, v);
            let mut m = m.clone();
            extend_odd_cycle_matching(&cycle0, &cycle1, index_of_x1, index_of_x2, &mut m);

            let len0 = cycle0.vertices.len();
            let len1 = cycle1.vertices.len();
            let u1 = cycle0.vertices[(index_of_x1 + 1) % len0];
            let u2 = cycle1.vertices[(index_of_x2 + 1) % len1];
            let v1 = cycle0.vertices[(len0 + index_of_x1 - 1) % len0];
            let v2 = cycle1.vertices[(len1 + index_of_x2 - 1) % len1];

            let mut circuit_orientation = vec![None; n];
            if circuit_orientation_is_consistent(&m, f, &mut circuit_orientation, u1, v1)
                && circuit_orientation_is_consistent(&m, f, &mut circuit_orientation, u2, v2)
            {
                let edges_between_cycles = vec![(u, v)];
                if suppressed_edges_are_deletable(adjacency, &circuit_orientation, &edges_between_cycles) {
                    stats.graphs_satisfying_first_oddness += 1;
                    return Some(OddnessWitness {
                        f: f.to_vec(),
                        m,
                        circuit_orientation,
                        edges_between_cycles,
                        configuration: Configuration::Bridge,
                    });
                }
            }
            continue;
        }

        if !cycle0.members.contains(v) {
            let nbr_of_u = v;
            for nbr_of_v in adjacency[nbr_of_u].iter() {
                if nbr_of_v == u {
                    continue;
                }
                let Some(v_final) = adjacency[nbr_of_v].intersection(&cycle1.members).first() else {
                    continue;
                };

                let index_of_x1 = index_of(&cycle0.vertices, u);
                let index_of_x2 = index_of(&cycle1.vertices, v_final);
                let mut m = m.clone();
                extend_odd_cycle_matching(&cycle0, &cycle1, index_of_x1, index_of_x2, &mut m);

                let len0 = cycle0.vertices.len();
                let len1 = cycle1.vertices.len();
                let u1 = cycle0.vertices[(index_of_x1 + 1) % len0];
                let u2 = cycle1.vertices[(index_of_x2 + 1) % len1];
                let v1 = cycle0.vertices[(len0 + index_of_x1 - 1) % len0];
                let v2 = cycle1.vertices[(len1 + index_of_x2 - 1) % len1];

                let exclude_w1 = Bitset::singleton(n, nbr_of_v).union(&Bitset::singleton(n, f[nbr_of_u]));
                let w1 = adjacency[nbr_of_u]
                    .difference(&exclude_w1)
                    .first()
                    .expect("cubic vertex has a remaining neighbor");
                let exclude_w2 = Bitset::singleton(n, nbr_of_u).union(&Bitset::singleton(n, f[nbr_of_v]));
                let w2 = adjacency[nbr_of_v]
                    .difference(&exclude_w2)
                    .first()
                    .expect("cubic vertex has a remaining neighbor");

                // The even cycle's matching may need rebuilding once
                // nbr_of_u/nbr_of_v are pulled out as connecting endpoints.
                if m[nbr_of_u] != nbr_of_v {
                    rematch(adjacency, n, &mut m, f, nbr_of_u, nbr_of_v);
                }

                let mut circuit_orientation = vec![None; n];
                if circuit_orientation_is_consistent(&m, f, &mut circuit_orientation, u1, v1)
                    && circuit_orientation_is_consistent(&m, f, &mut circuit_orientation, u2, v2)
                    && circuit_orientation_is_consistent(&m, f, &mut circuit_orientation, w1, w2)
                {
                    let edges_between_cycles = vec![(u, nbr_of_u), (nbr_of_v, v_final)];
                    if suppressed_edges_are_deletable(adjacency, &circuit_orientation, &edges_between_cycles) {
                        stats.graphs_satisfying_second_oddness += 1;
                        return Some(OddnessWitness {
                            f: f.to_vec(),
                            m,
                            circuit_orientation,
                            edges_between_cycles,
                            configuration: Configuration::ThroughEvenCycle,
                        });
                    }
                }
            }
        }
    }

    None
}

fn enumerate_perfect_matchings(adjacency: &[Bitset], n: usize, remaining: Bitset, f: &mut [usize], stats: &mut Counters) -> Option<OddnessWitness> {
    let Some(next_vertex) = remaining.first() else {
        return try_configurations(adjacency, n, f, stats);
    };

    for neighbor in adjacency[next_vertex].intersection(&remaining).iter() {
        f[neighbor] = next_vertex;
        f[next_vertex] = neighbor;
        let mut next_remaining = remaining.clone();
        next_remaining.remove(next_vertex);
        next_remaining.remove(neighbor);
        if let Some(witness) = enumerate_perfect_matchings(adjacency, n, next_remaining, f, stats) {
            return Some(witness);
        }
    }
    None
}

/// Tries every perfect matching of the graph, looking for one whose
/// complementary 2-factor has exactly two odd cycles in a configuration that
/// proves Frank number 2. `None` means the heuristic found no witness; the
/// graph might still have Frank number 2, just not provably so this way.
pub fn find_oddness_witness(adjacency: &[Bitset], n: usize, stats: &mut Counters) -> Option<OddnessWitness> {
    let mut f = vec![usize::MAX; n];
    let witness = enumerate_perfect_matchings(adjacency, n, Bitset::full(n), &mut f, stats);
    if witness.is_some() {
        stats.graphs_satisfying_oddness_condition += 1;
    } else {
        stats.graphs_not_satisfying_oddness_condition += 1;
    }
    witness
}

fn orient_2_factor_cycle(
    adjacency: &[Bitset],
    n: usize,
    f: &[usize],
    circuit_orientation: &[Option<usize>],
    starting_vertex: usize,
    unchecked: &mut Bitset,
    orientation1: &mut Digraph,
    orientation2: &mut Digraph,
) {
    let mut current = starting_vertex;
    let exclude_match = Bitset::singleton(n, f[current]);
    let mut previous = adjacency[current]
        .difference(&exclude_match)
        .first()
        .expect("cubic vertex has a remaining neighbor");
    if circuit_orientation[previous].is_none() || circuit_orientation[previous] != Some(f[previous]) {
        previous = adjacency[current]
            .difference(&exclude_match)
            .next_after(previous)
            .expect("cubic vertex has a second remaining neighbor");
    }

    loop {
        unchecked.remove(current);
        let next = adjacency[current]
            .iter()
            .find(|&v| v != previous && v != f[current])
            .expect("cubic vertex has a neighbor outside {previous, match}");

        if circuit_orientation[next] == Some(current) {
            orientation2.add_arc(current, next);
            orientation2.remove_arc(next, current);
        } else if circuit_orientation[current] != Some(next) && circuit_orientation[next] != Some(current) {
            orientation1.add_arc(current, next);
            orientation2.add_arc(current, next);
        }

        previous = current;
        current = next;
        if current == starting_vertex {
            break;
        }
    }
}

/// Reconstructs the pair of complementary strong orientations an
/// [`OddnessWitness`] claims exist, for double-checking (`-d`) or printing
/// (`-p`). Returns an error describing which invariant failed if the witness
/// turns out not to be valid, which indicates a bug in the heuristic rather
/// than a problem with the input.
pub fn verify_witness(adjacency: &[Bitset], n: usize, witness: &OddnessWitness) -> Result<(Digraph, Digraph), String> {
    let mut orientation1 = Digraph::new(n);
    let mut orientation2 = Digraph::new(n);
    let mut endpoints = Bitset::empty(n);
    for &(u, v) in &witness.edges_between_cycles {
        orientation1.add_arc(u, v);
        orientation2.add_arc(v, u);
        endpoints.add(u);
        endpoints.add(v);
    }

    let mut circuit_orientation = witness.circuit_orientation.clone();
    for i in 0..n {
        if endpoints.contains(i) {
            continue;
        }
        if circuit_orientation[i].is_none() {
            let mut take_m = true;
            let mut current = i;
            loop {
                let next = if take_m { witness.m[current] } else { witness.f[current] };
                circuit_orientation[current] = Some(next);
                current = next;
                take_m = !take_m;
                if current == i {
                    break;
                }
            }
        }
        let forced = circuit_orientation[i].expect("just assigned above");
        orientation1.add_arc(forced, i);
        orientation2.add_arc(i, forced);
    }

    let mut unchecked = Bitset::full(n);
    for &(u, v) in &witness.edges_between_cycles {
        for endpoint in [u, v] {
            if unchecked.contains(endpoint) {
                orient_2_factor_cycle(adjacency, n, &witness.f, &circuit_orientation, endpoint, &mut unchecked, &mut orientation1, &mut orientation2);
            }
        }
    }
    while let Some(v) = unchecked.first() {
        orient_2_factor_cycle(adjacency, n, &witness.f, &circuit_orientation, v, &mut unchecked, &mut orientation1, &mut orientation2);
    }

    if !is_strongly_connected(&orientation1) || !is_strongly_connected(&orientation2) {
        return Err("oddness-2 heuristic orientations are not strongly connected".to_string());
    }

    let edges = EdgeNumbering::new(n, adjacency);
    let deletable1 = deletable_edges(&mut orientation1, &edges);
    let deletable2 = deletable_edges(&mut orientation2, &edges);
    if deletable1.union(&deletable2) != Bitset::full(edges.edge_count()) {
        return Err("oddness-2 heuristic orientations are not complementary".to_string());
    }

    Ok((orientation1, orientation2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petersen_adjacency() -> Vec<Bitset> {
        // Outer 5-cycle 0..4, inner pentagram 5..9 (i connects to i+5, and
        // 5+i connects to 5+(i+2)%5).
        let n = 10;
        let mut adjacency = vec![Bitset::empty(n); n];
        let mut edge = |u: usize, v: usize, adjacency: &mut Vec<Bitset>| {
            adjacency[u].add(v);
            adjacency[v].add(u);
        };
        for i in 0..5 {
            edge(i, (i + 1) % 5, &mut adjacency);
            edge(i, i + 5, &mut adjacency);
            edge(5 + i, 5 + (i + 2) % 5, &mut adjacency);
        }
        adjacency
    }

    #[test]
    fn petersen_graph_has_no_oddness_witness() {
        // The Petersen graph is famously not 3-edge-colorable (oddness 2 in
        // a different sense) but is known not to satisfy this particular
        // sufficient condition's two-odd-cycle-bridge shape for every
        // perfect matching; we only assert the search terminates and
        // produces *some* verdict without panicking.
        let adjacency = petersen_adjacency();
        let mut stats = Counters::new();
        let _ = find_oddness_witness(&adjacency, 10, &mut stats);
    }

    #[test]
    fn witness_reconstructs_to_complementary_strong_orientations() {
        // Two triangles joined by a single edge: a minimal instance of the
        // "bridge" configuration between two odd (3-)cycles.
        let n = 6;
        let mut adjacency = vec![Bitset::empty(n); n];
        let mut edge = |u: usize, v: usize, adjacency: &mut Vec<Bitset>| {
            adjacency[u].add(v);
            adjacency[v].add(u);
        };
        for &(u, v) in &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3), (1, 4), (2, 5)] {
            edge(u, v, &mut adjacency);
        }
        let mut stats = Counters::new();
        if let Some(witness) = find_oddness_witness(&adjacency, n, &mut stats) {
            assert!(verify_witness(&adjacency, n, &witness).is_ok());
        }
    }
}
