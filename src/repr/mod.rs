/*!
# Representations

Storage strategies for [`MazeGraph`]:

- [`EdgeListGraph`]: a flat list of `(u, v, wall)` records. Cheap vertex insertion, linear edge
  lookups. The natural choice for sparse grids.
- [`IncidenceMatrixGraph`]: one fixed-width incidence column per edge. Every vertex insertion
  rewrites all columns, so populate vertices before edges where possible.

Both expose identical semantics through [`MazeGraph`]; pick one at construction time, either
directly or at runtime via [`GraphStrategy`].
*/

use std::{fmt::Display, str::FromStr};

use crate::{ops::*, *};

mod edge_list;
mod incidence_matrix;

pub mod digest;

pub use edge_list::*;
pub use incidence_matrix::*;

/// Identifier for a storage strategy.
///
/// ```
/// use mazegraph::prelude::*;
///
/// let strategy: GraphStrategy = "incidence".parse().unwrap();
/// let mut graph = strategy.build();
/// graph.add_vertices(&[Coordinates::new(0, 0), Coordinates::new(0, 1)]);
/// assert!(graph.add_edge(Coordinates::new(0, 0), Coordinates::new(0, 1), true));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GraphStrategy {
    /// [`EdgeListGraph`]
    EdgeList,
    /// [`IncidenceMatrixGraph`]
    IncidenceMatrix,
}

impl GraphStrategy {
    /// All available strategies
    pub const ALL: [GraphStrategy; 2] = [GraphStrategy::EdgeList, GraphStrategy::IncidenceMatrix];

    /// Creates an empty graph backed by this strategy
    pub fn build(self) -> Box<dyn MazeGraph> {
        match self {
            GraphStrategy::EdgeList => Box::new(EdgeListGraph::new()),
            GraphStrategy::IncidenceMatrix => Box::new(IncidenceMatrixGraph::new()),
        }
    }
}

impl FromStr for GraphStrategy {
    type Err = MazeGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edgelist" | "edge-list" | "edge_list" => Ok(GraphStrategy::EdgeList),
            "incidence" | "incmat" | "incidence-matrix" | "incidence_matrix" => {
                Ok(GraphStrategy::IncidenceMatrix)
            }
            _ => Err(MazeGraphError::UnknownStrategy(s.to_string())),
        }
    }
}

impl Display for GraphStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphStrategy::EdgeList => write!(f, "edge-list"),
            GraphStrategy::IncidenceMatrix => write!(f, "incidence-matrix"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{digest::MazeGraphDigest, *};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parse_strategies() {
        for strategy in GraphStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<GraphStrategy>(), Ok(strategy));
        }
        assert_eq!("EdgeList".parse(), Ok(GraphStrategy::EdgeList));
        assert_eq!("INCMAT".parse(), Ok(GraphStrategy::IncidenceMatrix));
        assert_eq!(
            "adjacency".parse::<GraphStrategy>(),
            Err(MazeGraphError::UnknownStrategy("adjacency".into()))
        );
    }

    #[test]
    fn strategies_agree_on_random_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 4, 7] {
            for _ in 0..10 {
                let mut el = EdgeListGraph::new();
                let mut im = IncidenceMatrixGraph::new();

                for _ in 0..(n * n * 8) {
                    let u = Coordinates::new(rng.random_range(0..n), rng.random_range(0..n));
                    let v = Coordinates::new(rng.random_range(0..n), rng.random_range(0..n));
                    let wall = rng.random_bool(0.5);

                    match rng.random_range(0..10) {
                        0..=2 => {
                            el.add_vertex(u);
                            im.add_vertex(u);
                        }
                        3..=6 => assert_eq!(el.add_edge(u, v, wall), im.add_edge(u, v, wall)),
                        7 => assert_eq!(el.remove_edge(u, v), im.remove_edge(u, v)),
                        _ => assert_eq!(el.update_wall(u, v, wall), im.update_wall(u, v, wall)),
                    }

                    assert_eq!(el.has_vertex(u), im.has_vertex(u));
                    assert_eq!(el.has_edge(u, v), im.has_edge(u, v));
                    assert_eq!(el.wall_status(u, v), im.wall_status(u, v));
                    assert_eq!(
                        el.neighbours(u).into_iter().sorted().collect_vec(),
                        im.neighbours(u).into_iter().sorted().collect_vec()
                    );
                }

                assert_eq!(el.vertices(), im.vertices());
                assert_eq!(el.number_of_edges(), im.number_of_edges());
                assert_eq!(el.digest_sha256(), im.digest_sha256());
            }
        }
    }
}
