//! Decides whether cubic, 3-edge-connected graphs have Frank number 2: the
//! minimum number of strong orientations whose deletable-arc sets jointly
//! cover every edge.

pub mod bitset;
pub mod cli;
pub mod complement;
pub mod counters;
pub mod deletable;
pub mod digraph;
pub mod driver;
pub mod edges;
pub mod error;
pub mod graph6;
pub mod heuristic;
pub mod orientation;
pub mod pool;
pub mod scc;

/// Build-time bound on vertex count. Since a cubic graph's edge count is
/// `3N/2`, it must fit the same bitset width used for vertex sets, which
/// caps the effective vertex count at `floor(2*N_MAX/3)`.
pub const N_MAX: usize = 128;
