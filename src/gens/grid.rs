/*!
# Rectangular Grids

[`Grid`] describes a `rows x cols` block of cells anchored at `(0, 0)`.
Populating a graph adds every cell (row-major) and one edge between each pair of orthogonally
adjacent cells. All edges carry the configured wall flag: `walls(true)` yields the fully walled
grid a carving generator usually starts from, `walls(false)` a fully open one.

# Examples

```
use mazegraph::{gens::*, prelude::*};

let mut graph = EdgeListGraph::new();
let edges = Grid::new().rows(2).cols(3).walls(true).populate(&mut graph).unwrap();

assert_eq!(graph.number_of_vertices(), 6);
assert_eq!(edges, 7);
assert!(graph.wall_status(Coordinates::new(0, 0), Coordinates::new(0, 1)));
assert!(!graph.has_edge(Coordinates::new(0, 0), Coordinates::new(1, 1)));
```
*/

use log::debug;

use super::*;

/// Generator for a rectangular grid of cells
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    walls: bool,
}

impl Grid {
    /// Creates an empty `0 x 0` grid without walls
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of columns
    pub fn cols(mut self, cols: u32) -> Self {
        self.cols = cols;
        self
    }

    /// Sets the wall flag every generated edge receives
    pub fn walls(mut self, walls: bool) -> Self {
        self.walls = walls;
        self
    }

    /// Returns the number of cells
    pub fn number_of_cells(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Returns the number of orthogonal adjacencies between cells
    pub fn number_of_adjacencies(&self) -> u64 {
        let (r, c) = (self.rows as u64, self.cols as u64);
        (r * c.saturating_sub(1)) + (c * r.saturating_sub(1))
    }

    fn bounds(&self) -> Result<(Coord, Coord), MazeGraphError> {
        let too_large = || MazeGraphError::GridTooLarge {
            rows: self.rows,
            cols: self.cols,
        };
        let rows = Coord::try_from(self.rows).map_err(|_| too_large())?;
        let cols = Coord::try_from(self.cols).map_err(|_| too_large())?;
        if self.number_of_cells() > NumVertices::MAX as u64
            || self.number_of_adjacencies() > NumEdges::MAX as u64
        {
            return Err(too_large());
        }
        Ok((rows, cols))
    }

    /// Returns all cells in row-major order.
    ///
    /// # Errors
    /// Fails with [`MazeGraphError::GridTooLarge`] if the grid does not fit the coordinate range.
    pub fn cells(&self) -> Result<Vec<Coordinates>, MazeGraphError> {
        let (rows, cols) = self.bounds()?;
        Ok((0..rows)
            .flat_map(|r| (0..cols).map(move |c| Coordinates::new(r, c)))
            .collect())
    }

    /// Returns every pair of orthogonally adjacent cells, each normalized.
    /// Horizontal pairs of a row precede the vertical pairs leaving that row.
    ///
    /// # Errors
    /// Fails with [`MazeGraphError::GridTooLarge`] if the grid does not fit the coordinate range.
    pub fn adjacencies(&self) -> Result<Vec<Edge>, MazeGraphError> {
        let (rows, cols) = self.bounds()?;
        let mut edges = Vec::with_capacity(self.number_of_adjacencies() as usize);
        for r in 0..rows {
            for c in 0..cols {
                let u = Coordinates::new(r, c);
                if c + 1 < cols {
                    edges.push(Edge(u, Coordinates::new(r, c + 1)));
                }
            }
            for c in 0..cols {
                if r + 1 < rows {
                    edges.push(Edge(Coordinates::new(r, c), Coordinates::new(r + 1, c)));
                }
            }
        }
        Ok(edges)
    }

    /// Adds all cells and adjacencies of the grid to `graph` and returns the number of new edges.
    /// Cells or edges already present in `graph` are left untouched (including their walls).
    ///
    /// # Errors
    /// Fails with [`MazeGraphError::GridTooLarge`] before touching `graph` if the grid does not
    /// fit the coordinate range.
    pub fn populate<G>(&self, graph: &mut G) -> Result<NumEdges, MazeGraphError>
    where
        G: MazeGraph + ?Sized,
    {
        let cells = self.cells()?;
        let adjacencies = self.adjacencies()?;

        graph.add_vertices(&cells);
        let added = adjacencies
            .into_iter()
            .filter(|&Edge(u, v)| graph.add_edge(u, v, self.walls))
            .count() as NumEdges;

        debug!(
            "populated {}x{} grid: {} cells, {added} new edges (walls: {})",
            self.rows,
            self.cols,
            cells.len(),
            self.walls
        );
        Ok(added)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn grid_shapes() {
        for rows in 0..5 {
            for cols in 0..5 {
                let grid = Grid::new().rows(rows).cols(cols);
                let cells = grid.cells().unwrap();
                let edges = grid.adjacencies().unwrap();

                assert_eq!(cells.len() as u64, grid.number_of_cells());
                assert_eq!(edges.len() as u64, grid.number_of_adjacencies());
                assert!(cells.is_sorted());
                assert!(edges.iter().all(|e| e.is_normalized() && e.0.is_adjacent(&e.1)));
                assert_eq!(edges.iter().unique().count(), edges.len());
            }
        }
    }

    #[test]
    fn populate_every_strategy() {
        let grid = Grid::new().rows(3).cols(4).walls(true);

        for mut graph in GraphStrategy::ALL.map(GraphStrategy::build) {
            assert_eq!(grid.populate(&mut *graph), Ok(17));
            assert_eq!(graph.number_of_vertices(), 12);
            assert_eq!(graph.number_of_edges(), 17);
            assert!(graph.edges().all(|e| e.wall));

            let corner = Coordinates::new(0, 0);
            let centre = Coordinates::new(1, 1);
            assert_eq!(graph.degree_of(corner), 2);
            assert_eq!(graph.degree_of(centre), 4);
            assert_eq!(
                graph.neighbours(centre).into_iter().sorted().collect_vec(),
                centre.orthogonal_neighbours().sorted().collect_vec()
            );

            // a second pass adds nothing and keeps carved passages
            assert!(graph.update_wall(corner, Coordinates::new(0, 1), false));
            assert_eq!(grid.populate(&mut *graph), Ok(0));
            assert!(graph.is_passable(corner, Coordinates::new(0, 1)));
        }
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let grid = Grid::new().rows(u32::MAX).cols(2);
        let mut graph = EdgeListGraph::new();
        assert_eq!(
            grid.populate(&mut graph),
            Err(MazeGraphError::GridTooLarge {
                rows: u32::MAX,
                cols: 2
            })
        );
        assert!(graph.is_empty());

        let grid = Grid::new().rows(1 << 20).cols(1 << 20);
        assert!(grid.cells().is_err());
    }
}
