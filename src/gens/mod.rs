/*!
# Graph Generators

Deterministic builders that populate a [`MazeGraph`] with a known structure.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Grid::new()`).
2. Set parameters with the setter methods (e.g., `.rows(4).cols(6).walls(true)`).
3. Populate any graph via `populate(&mut graph)`.

Generators only lay down the *substrate* of a maze (cells and candidate passages); carving a
maze out of it is left to the caller.
*/

use crate::prelude::*;

mod grid;

pub use grid::*;
