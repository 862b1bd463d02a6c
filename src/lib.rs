/*!
`mazegraph` provides the graph substrate maze generators and solvers operate on:
undirected graphs whose vertices are grid cells and whose edges carry a **wall** flag.

# Representation

We represent **vertices** as [`Coordinates`], a `(row, col)` pair of `i32`.
For **edges**, we use a simple tuple-struct `Edge(Coordinates, Coordinates)`; since maze graphs
are undirected, `Edge(u, v)` and `Edge(v, u)` denote the same connection.
An edge with `wall == true` exists in the graph (it is reported by `has_edge` and `neighbours`)
but blocks the passage between its cells.

There are no self-loops and no parallel edges: at most one edge joins any pair of distinct cells.

### Available Representations

See the [`repr`] module for the storage backends:

- [`EdgeListGraph`](crate::repr::EdgeListGraph): a flat list of edge records
- [`IncidenceMatrixGraph`](crate::repr::IncidenceMatrixGraph): one incidence column per edge

Both implement the [`MazeGraph`](crate::ops::MazeGraph) contract and answer every query
identically; they differ only in complexity and memory profile.

# Usage

- [`prelude`] includes coordinates, edges, errors, the [`MazeGraph`](crate::ops::MazeGraph) trait and all representations,
- [`gens`] includes builders that lay down grid substrates ([`Grid`](crate::gens::Grid)),
- [`repr::digest`] computes representation independent hashes of a graph.

```
use mazegraph::{gens::Grid, prelude::*};

let mut maze = GraphStrategy::IncidenceMatrix.build();
Grid::new().rows(2).cols(2).walls(true).populate(&mut *maze).unwrap();

// knock down the wall between the two upper cells
let (a, b) = (Coordinates::new(0, 0), Coordinates::new(0, 1));
assert!(maze.update_wall(a, b, false));
assert!(maze.is_passable(a, b));
assert!(maze.wall_status(a, Coordinates::new(1, 0)));
assert_eq!(maze.neighbours(a).len(), 2);
```

# Concurrency

All operations are synchronous and lock free; graphs are plain owned data. Sharing one graph
between threads requires external synchronization around every logical mutation
(e.g. "check `has_edge`, then `add_edge`").
*/

pub mod coord;
pub mod edge;
pub mod error;
pub mod gens;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use coord::*;
pub use edge::*;
pub use error::*;

/// `mazegraph::prelude` includes coordinates, edges, errors, the graph contract and all representations.
pub mod prelude {
    pub use super::{coord::*, edge::*, error::*, ops::*, repr::*};
}
