use fxhash::FxHashSet;

use crate::testing::test_maze_graph;

use super::*;

/// Maze graph stored as a flat list of edge records.
///
/// Vertices are kept in insertion order alongside a hash set for membership tests; every edge
/// operation scans the edge list linearly and matches both orientations.
///
/// | operation | cost |
/// |---|---|
/// | `add_vertex`, `has_vertex` | `O(1)` |
/// | edge operations, `neighbours` | `O(E)` |
/// | memory | `O(V + E)` |
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    vertices: Vec<Coordinates>,
    members: FxHashSet<Coordinates>,
    edges: Vec<WallEdge>,
}

impl EdgeListGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges` edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            members: FxHashSet::with_capacity_and_hasher(vertices, Default::default()),
            edges: Vec::with_capacity(edges),
        }
    }

    fn position_of(&self, u: Coordinates, v: Coordinates) -> Option<usize> {
        self.edges.iter().position(|e| e.edge.connects(u, v))
    }
}

impl MazeGraph for EdgeListGraph {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }

    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn vertices(&self) -> &[Coordinates] {
        &self.vertices
    }

    fn edges(&self) -> Box<dyn Iterator<Item = WallEdge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn add_vertex(&mut self, label: Coordinates) {
        if self.members.insert(label) {
            self.vertices.push(label);
        }
    }

    fn add_edge_unchecked(&mut self, u: Coordinates, v: Coordinates, wall: bool) {
        debug_assert!(self.has_vertex(u) && self.has_vertex(v));
        self.edges.push(WallEdge::new(u, v, wall));
    }

    fn update_wall(&mut self, u: Coordinates, v: Coordinates, wall: bool) -> bool {
        match self.position_of(u, v) {
            Some(i) => {
                self.edges[i].wall = wall;
                true
            }
            None => false,
        }
    }

    fn remove_edge(&mut self, u: Coordinates, v: Coordinates) -> bool {
        match self.position_of(u, v) {
            Some(i) => {
                self.edges.remove(i);
                true
            }
            None => false,
        }
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.members.contains(&label)
    }

    fn has_edge(&self, u: Coordinates, v: Coordinates) -> bool {
        self.position_of(u, v).is_some()
    }

    fn wall_status(&self, u: Coordinates, v: Coordinates) -> bool {
        self.position_of(u, v).is_some_and(|i| self.edges[i].wall)
    }

    fn neighbours(&self, label: Coordinates) -> Neighbours {
        self.edges
            .iter()
            .filter_map(|e| e.edge.opposite(label))
            .collect()
    }
}

test_maze_graph!(edge_list_contract, EdgeListGraph);

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insertion_order_is_kept() {
        let cells = [(1, 1), (0, 0), (1, 1), (0, 1), (0, 0)].map(Coordinates::from);
        let mut graph = EdgeListGraph::with_capacity(3, 2);
        graph.add_vertices(&cells);

        assert_eq!(graph.vertices(), &[cells[0], cells[1], cells[3]]);
        assert_eq!(graph.number_of_vertices(), 3);

        assert!(graph.add_edge(cells[3], cells[1], true));
        assert!(graph.add_passage(cells[0], cells[3]));
        assert_eq!(
            graph.edges().map(|e| e.to_string()).collect_vec(),
            vec!["(0,1)|(0,0)", "(1,1)-(0,1)"]
        );
        assert_eq!(
            graph.neighbours(cells[3]).into_iter().collect_vec(),
            vec![cells[1], cells[0]]
        );
    }
}
