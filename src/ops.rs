use log::debug;
use smallvec::SmallVec;

use crate::*;

/// Neighbourhood of a cell. Grid cells rarely have more than four neighbours, so these
/// stay on the stack in the common case.
pub type Neighbours = SmallVec<[Coordinates; 4]>;

/// Checks whether the edge `{u, v}` may be inserted into `graph`:
/// both endpoints must be present, distinct, and not yet connected.
///
/// This is the single precondition shared by all storage strategies.
pub fn admissible_edge<G>(graph: &G, u: Coordinates, v: Coordinates) -> Result<(), EdgeRejection>
where
    G: MazeGraph + ?Sized,
{
    if !graph.has_vertex(u) {
        return Err(EdgeRejection::MissingVertex(u));
    }
    if !graph.has_vertex(v) {
        return Err(EdgeRejection::MissingVertex(v));
    }
    if u == v {
        return Err(EdgeRejection::SelfLoop(u));
    }
    if graph.has_edge(u, v) {
        return Err(EdgeRejection::Duplicate(u, v));
    }
    Ok(())
}

/// Undirected graph over grid cells whose edges carry a wall flag.
///
/// All mutating operations are total: absent vertices, absent edges and duplicates are reported
/// through the returned `bool` and leave the graph unchanged. Edges are unordered, so every
/// operation taking `(u, v)` behaves identically for `(v, u)`.
///
/// The trait is object safe; see [`GraphStrategy::build`](crate::repr::GraphStrategy::build).
pub trait MazeGraph {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of edges of the graph (walls included)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns all vertices in insertion order
    fn vertices(&self) -> &[Coordinates];

    /// Returns an iterator over all edges in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = WallEdge> + '_>;

    /// Adds `label` as an isolated vertex. No-op if it is already present.
    fn add_vertex(&mut self, label: Coordinates);

    /// Adds every label in order, skipping those already present
    fn add_vertices(&mut self, labels: &[Coordinates]) {
        for &label in labels {
            self.add_vertex(label);
        }
    }

    /// Stores the edge `{u, v}` without checking [`admissible_edge`].
    /// Misuse may create duplicate edges; prefer [`MazeGraph::add_edge`].
    /// ** Might panic if `u` or `v` is not a vertex **
    fn add_edge_unchecked(&mut self, u: Coordinates, v: Coordinates, wall: bool);

    /// Adds the edge `{u, v}` with the given wall flag, or returns the reason it was refused.
    fn checked_add_edge(
        &mut self,
        u: Coordinates,
        v: Coordinates,
        wall: bool,
    ) -> Result<(), EdgeRejection> {
        admissible_edge(self, u, v)?;
        self.add_edge_unchecked(u, v, wall);
        Ok(())
    }

    /// Adds the edge `{u, v}` with the given wall flag.
    /// Returns *true* exactly if both vertices exist, differ and were not connected before.
    fn add_edge(&mut self, u: Coordinates, v: Coordinates, add_wall: bool) -> bool {
        match self.checked_add_edge(u, v, add_wall) {
            Ok(()) => true,
            Err(reason) => {
                debug!("add_edge({u}, {v}) rejected: {reason}");
                false
            }
        }
    }

    /// Adds an open (wall-free) edge; shorthand for `add_edge(u, v, false)`
    fn add_passage(&mut self, u: Coordinates, v: Coordinates) -> bool {
        self.add_edge(u, v, false)
    }

    /// Sets the wall flag of the edge `{u, v}`.
    /// Returns *false* (and changes nothing) if the edge does not exist.
    fn update_wall(&mut self, u: Coordinates, v: Coordinates, wall: bool) -> bool;

    /// Removes the edge `{u, v}`. Returns *false* if it did not exist.
    fn remove_edge(&mut self, u: Coordinates, v: Coordinates) -> bool;

    /// Returns *true* if `label` is a vertex
    fn has_vertex(&self, label: Coordinates) -> bool;

    /// Returns *true* if the edge `{u, v}` exists; *false* if either endpoint is absent
    fn has_edge(&self, u: Coordinates, v: Coordinates) -> bool;

    /// Returns the wall flag of the edge `{u, v}`.
    /// A missing edge is reported as *false*; use [`MazeGraph::has_edge`] to tell both apart.
    fn wall_status(&self, u: Coordinates, v: Coordinates) -> bool;

    /// Returns *true* if `{u, v}` exists and carries no wall
    fn is_passable(&self, u: Coordinates, v: Coordinates) -> bool {
        self.has_edge(u, v) && !self.wall_status(u, v)
    }

    /// Returns every vertex sharing an edge with `label`, walls included.
    /// The order only depends on the edge-insertion history. Empty if `label` is absent.
    fn neighbours(&self, label: Coordinates) -> Neighbours;

    /// Returns the number of neighbours of `label`
    fn degree_of(&self, label: Coordinates) -> NumVertices {
        self.neighbours(label).len() as NumVertices
    }
}

/// Creating a graph from scratch from a set of vertices and edges
pub trait MazeGraphFromScratch: MazeGraph + Default {
    /// Adds all `vertices`, then every edge in order. Edges failing [`admissible_edge`] are skipped.
    fn from_parts(
        vertices: &[Coordinates],
        edges: impl IntoIterator<Item = impl Into<WallEdge>>,
    ) -> Self {
        let mut graph = Self::default();
        graph.add_vertices(vertices);
        for WallEdge { edge: Edge(u, v), wall } in edges.into_iter().map(|e| e.into()) {
            graph.add_edge(u, v, wall);
        }
        graph
    }
}

impl<G: MazeGraph + Default> MazeGraphFromScratch for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::{EdgeListGraph, GraphStrategy, IncidenceMatrixGraph};
    use itertools::Itertools;

    #[test]
    fn guard_reports_reasons() {
        let a = Coordinates::new(0, 0);
        let b = Coordinates::new(0, 1);
        let outside = Coordinates::new(5, 5);

        for mut graph in GraphStrategy::ALL.map(GraphStrategy::build) {
            graph.add_vertices(&[a, b]);

            assert_eq!(
                admissible_edge(&*graph, a, outside),
                Err(EdgeRejection::MissingVertex(outside))
            );
            assert_eq!(
                admissible_edge(&*graph, a, a),
                Err(EdgeRejection::SelfLoop(a))
            );
            assert_eq!(admissible_edge(&*graph, a, b), Ok(()));

            assert_eq!(graph.checked_add_edge(a, b, true), Ok(()));
            assert_eq!(
                graph.checked_add_edge(b, a, false),
                Err(EdgeRejection::Duplicate(b, a))
            );
            assert!(graph.wall_status(a, b));
            assert!(!graph.is_passable(a, b));

            assert!(graph.update_wall(b, a, false));
            assert!(graph.is_passable(a, b));
            assert_eq!(graph.degree_of(a), 1);
        }
    }

    #[test]
    fn from_parts_skips_rejected_edges() {
        let cells = [(0, 0), (0, 1), (1, 1)].map(Coordinates::from);
        let edges: [((Coord, Coord), (Coord, Coord), bool); 5] = [
            ((0, 0), (0, 1), true),
            ((0, 1), (0, 0), false),
            ((1, 1), (1, 1), false),
            ((1, 1), (0, 1), false),
            ((1, 1), (9, 9), true),
        ];

        let el = EdgeListGraph::from_parts(&cells, edges);
        let im = IncidenceMatrixGraph::from_parts(&cells, edges);

        for graph in [&el as &dyn MazeGraph, &im] {
            assert_eq!(graph.number_of_vertices(), 3);
            assert_eq!(
                graph.edges().map(|e| e.normalized()).sorted().collect_vec(),
                vec![
                    WallEdge::new(cells[0], cells[1], true),
                    WallEdge::new(cells[1], cells[2], false)
                ]
            );
        }
    }
}
