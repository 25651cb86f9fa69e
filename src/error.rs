//! Error types: usage errors abort before any graph is read, graph6 errors
//! are per-line and non-fatal, internal errors indicate a bug in this
//! program rather than bad input.

use thiserror::Error;

/// Why a single graph6 line could not be decoded or accepted. Always
/// non-fatal: the driver logs it and moves on to the next line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Graph6Error {
    #[error("empty line")]
    Empty,
    #[error("line is truncated")]
    Truncated,
    #[error("byte {0:#x} is outside the graph6 printable range")]
    InvalidCharacter(u8),
    #[error("graph has {0} vertices, exceeding the compiled N_MAX ({max})", max = crate::N_MAX)]
    TooManyVertices(usize),
    #[error("vertex {0} has degree {1}, not 3")]
    NotCubic(usize, usize),
}

/// Top-level failure: either bad CLI usage (exit before processing) or a
/// broken invariant discovered mid-run (process abort, indicates a bug).
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("usage error: {0}")]
    Usage(String),
    #[error("internal invariant violated: {0}")]
    Internal(String),
}
