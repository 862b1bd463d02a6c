/*!
# Errors

Contract operations on a [`MazeGraph`](crate::ops::MazeGraph) never fail loudly; they report
success as a `bool`. The types in this module carry the *reason* behind a rejection for callers
that want it (see [`MazeGraph::checked_add_edge`](crate::ops::MazeGraph::checked_add_edge)) and
cover the fallible configuration paths (strategy parsing, grid population).
*/

use thiserror::Error;

use crate::Coordinates;

/// Why an edge could not be inserted
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum EdgeRejection {
    #[error("vertex {0} is not part of the graph")]
    MissingVertex(Coordinates),

    #[error("self-loop at {0}")]
    SelfLoop(Coordinates),

    #[error("edge {0}-{1} already exists")]
    Duplicate(Coordinates, Coordinates),
}

/// Errors raised while configuring or populating a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeGraphError {
    #[error("unknown graph strategy: {0}")]
    UnknownStrategy(String),

    #[error("grid of {rows}x{cols} cells exceeds the coordinate range")]
    GridTooLarge { rows: u32, cols: u32 },

    #[error(transparent)]
    Rejected(#[from] EdgeRejection),
}
