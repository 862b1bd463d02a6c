use fxhash::FxHashMap;

use crate::{
    testing::test_maze_graph,
    utils::incidence_buffer::{IncidenceBuffer, RowIndex},
};

use super::*;

/// Maze graph stored as an incidence matrix.
///
/// Vertex `i` (in insertion order) owns row `i` of the matrix. Every edge is a column with a
/// `1` at the rows of both endpoints plus a trailing wall cell; all columns live in one
/// [`IncidenceBuffer`] whose width is kept at `number_of_vertices() + 1`.
///
/// | operation | cost |
/// |---|---|
/// | `add_vertex` | `O(V * E)` (every column is rewritten) |
/// | `has_vertex` | `O(1)` |
/// | edge operations | `O(E)` columns, `O(1)` per column |
/// | `neighbours` | `O(E * V)` |
/// | memory | `O(E * V)` |
#[derive(Debug, Clone, Default)]
pub struct IncidenceMatrixGraph {
    vertices: Vec<Coordinates>,
    rows: FxHashMap<Coordinates, RowIndex>,
    columns: IncidenceBuffer,
}

impl IncidenceMatrixGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matrix columns (one per edge, wall cell last)
    pub fn columns(&self) -> &IncidenceBuffer {
        &self.columns
    }

    fn row_of(&self, label: Coordinates) -> Option<RowIndex> {
        self.rows.get(&label).copied()
    }

    fn column_of(&self, u: Coordinates, v: Coordinates) -> Option<usize> {
        let (a, b) = (self.row_of(u)?, self.row_of(v)?);
        if a == b {
            return None;
        }
        self.columns.find(a, b)
    }

    fn debug_assert_aligned(&self) {
        debug_assert_eq!(self.columns.num_rows(), self.vertices.len());
        debug_assert_eq!(self.rows.len(), self.vertices.len());
    }
}

impl MazeGraph for IncidenceMatrixGraph {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }

    fn number_of_edges(&self) -> NumEdges {
        self.columns.len() as NumEdges
    }

    fn vertices(&self) -> &[Coordinates] {
        &self.vertices
    }

    fn edges(&self) -> Box<dyn Iterator<Item = WallEdge> + '_> {
        Box::new((0..self.columns.len()).map(|i| {
            let (a, b) = self.columns.endpoints(i);
            WallEdge::new(self.vertices[a], self.vertices[b], self.columns.wall(i))
        }))
    }

    fn add_vertex(&mut self, label: Coordinates) {
        if self.has_vertex(label) {
            return;
        }

        // the new row must exist in every column before the vertex can be referenced
        self.columns.grow();
        self.rows.insert(label, self.vertices.len());
        self.vertices.push(label);

        self.debug_assert_aligned();
    }

    fn add_edge_unchecked(&mut self, u: Coordinates, v: Coordinates, wall: bool) {
        let a = self.rows[&u];
        let b = self.rows[&v];
        self.columns.push(a, b, wall);

        self.debug_assert_aligned();
    }

    fn update_wall(&mut self, u: Coordinates, v: Coordinates, wall: bool) -> bool {
        match self.column_of(u, v) {
            Some(i) => {
                self.columns.set_wall(i, wall);
                true
            }
            None => false,
        }
    }

    fn remove_edge(&mut self, u: Coordinates, v: Coordinates) -> bool {
        match self.column_of(u, v) {
            Some(i) => {
                self.columns.remove(i);
                self.debug_assert_aligned();
                true
            }
            None => false,
        }
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.rows.contains_key(&label)
    }

    fn has_edge(&self, u: Coordinates, v: Coordinates) -> bool {
        self.column_of(u, v).is_some()
    }

    fn wall_status(&self, u: Coordinates, v: Coordinates) -> bool {
        self.column_of(u, v).is_some_and(|i| self.columns.wall(i))
    }

    fn neighbours(&self, label: Coordinates) -> Neighbours {
        let Some(row) = self.row_of(label) else {
            return Neighbours::new();
        };

        let mut result = Neighbours::new();
        for i in 0..self.columns.len() {
            let incidences = self.columns.incidences(i);
            if incidences[row] != 1 {
                continue;
            }
            result.extend(
                incidences
                    .iter()
                    .enumerate()
                    .filter(|&(r, &x)| x == 1 && r != row)
                    .map(|(r, _)| self.vertices[r]),
            );
        }
        result
    }
}

test_maze_graph!(incidence_matrix_contract, IncidenceMatrixGraph);
