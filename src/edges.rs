//! Symmetric edge numbering over an undirected adjacency structure.
//!
//! Every unordered edge `{u, v}` of the underlying undirected graph is given
//! a single index in `0..edge_count`, shared by both arcs an orientation
//! could assign it.

/// Maps unordered vertex pairs to edge indices, and back.
#[derive(Clone, Debug)]
pub struct EdgeNumbering {
    n: usize,
    index: Vec<Option<usize>>,
    endpoints: Vec<(usize, usize)>,
}

impl EdgeNumbering {
    /// Numbers the edges implied by `adjacency[v]` (the undirected neighbor
    /// set of vertex `v`), visiting each unordered pair once by only
    /// considering neighbors greater than `v`.
    pub fn new(n: usize, adjacency: &[crate::bitset::Bitset]) -> Self {
        let mut index = vec![None; n * n];
        let mut endpoints = Vec::new();
        for u in 0..n {
            for v in adjacency[u].iter().filter(|&v| v > u) {
                let id = endpoints.len();
                index[u * n + v] = Some(id);
                index[v * n + u] = Some(id);
                endpoints.push((u, v));
            }
        }
        EdgeNumbering { n, index, endpoints }
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// The index of edge `{u, v}`. Panics if `u`/`v` are not adjacent; callers
    /// only ever look up edges known to exist.
    pub fn id(&self, u: usize, v: usize) -> usize {
        self.index[u * self.n + v].expect("edge lookup on non-adjacent pair")
    }

    /// The unordered pair an edge index was assigned to.
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitset::Bitset;

    fn triangle() -> Vec<Bitset> {
        let mut adj = vec![Bitset::empty(3); 3];
        for &(u, v) in &[(0, 1), (1, 2), (2, 0)] {
            adj[u].add(v);
            adj[v].add(u);
        }
        adj
    }

    #[test]
    fn numbers_every_edge_once() {
        let adj = triangle();
        let edges = EdgeNumbering::new(3, &adj);
        assert_eq!(edges.edge_count(), 3);
    }

    #[test]
    fn id_is_symmetric() {
        let adj = triangle();
        let edges = EdgeNumbering::new(3, &adj);
        assert_eq!(edges.id(0, 1), edges.id(1, 0));
    }

    #[test]
    fn endpoints_round_trip() {
        let adj = triangle();
        let edges = EdgeNumbering::new(3, &adj);
        for e in 0..edges.edge_count() {
            let (u, v) = edges.endpoints(e);
            assert_eq!(edges.id(u, v), e);
        }
    }
}
