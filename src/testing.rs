/// Every storage strategy must satisfy the same `MazeGraph` contract.
/// Instantiates the shared test-suite for `$graph` inside a test module named `$env`.
macro_rules! test_maze_graph {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn init_logger() {
                let _ = env_logger::builder().is_test(true).try_init();
            }

            fn cell(row: Coord, col: Coord) -> Coordinates {
                Coordinates::new(row, col)
            }

            fn square() -> $graph {
                let mut graph = <$graph>::default();
                graph.add_vertices(&[cell(0, 0), cell(0, 1), cell(1, 0), cell(1, 1)]);
                graph
            }

            fn sorted_neighbours(graph: &$graph, u: Coordinates) -> Vec<Coordinates> {
                graph.neighbours(u).into_iter().sorted().collect_vec()
            }

            #[test]
            fn empty_graph() {
                let graph = <$graph>::default();
                assert!(graph.is_empty());
                assert_eq!(graph.number_of_vertices(), 0);
                assert_eq!(graph.number_of_edges(), 0);
                assert!(!graph.has_vertex(cell(0, 0)));
                assert!(!graph.has_edge(cell(0, 0), cell(0, 1)));
                assert!(!graph.wall_status(cell(0, 0), cell(0, 1)));
                assert!(graph.neighbours(cell(0, 0)).is_empty());
                assert_eq!(graph.edges().count(), 0);
            }

            #[test]
            fn add_vertex_is_idempotent() {
                let mut graph = <$graph>::default();
                graph.add_vertex(cell(2, 3));
                graph.add_vertex(cell(2, 3));
                assert_eq!(graph.vertices(), &[cell(2, 3)]);

                graph.add_vertices(&[cell(0, 0), cell(2, 3), cell(0, 0), cell(1, 1)]);
                assert_eq!(graph.vertices(), &[cell(2, 3), cell(0, 0), cell(1, 1)]);
                assert_eq!(graph.number_of_vertices(), 3);
                assert!(!graph.is_empty());
            }

            #[test]
            fn add_edge_exactly_once() {
                init_logger();
                let mut graph = square();
                let (a, b) = (cell(0, 0), cell(0, 1));

                assert!(graph.add_edge(a, b, false));
                assert!(!graph.add_edge(a, b, false));
                assert!(!graph.add_edge(b, a, true));
                assert_eq!(graph.number_of_edges(), 1);
                assert!(!graph.wall_status(a, b));
            }

            #[test]
            fn self_loops_and_absent_vertices_are_rejected() {
                init_logger();
                let mut graph = square();
                let outside = cell(7, 7);

                assert!(!graph.add_edge(cell(0, 0), cell(0, 0), false));
                assert!(!graph.add_edge(cell(1, 1), cell(1, 1), true));
                assert!(!graph.add_edge(cell(0, 0), outside, false));
                assert!(!graph.add_edge(outside, cell(0, 0), false));
                assert_eq!(graph.number_of_edges(), 0);

                assert!(!graph.has_edge(cell(0, 0), cell(0, 0)));
                assert!(!graph.has_edge(cell(0, 0), outside));
                assert!(!graph.update_wall(cell(0, 0), outside, true));
                assert!(!graph.remove_edge(outside, cell(0, 0)));
                assert!(graph.neighbours(outside).is_empty());
                assert_eq!(graph.degree_of(outside), 0);
            }

            #[test]
            fn symmetric_queries() {
                let mut graph = square();
                assert!(graph.add_edge(cell(1, 0), cell(0, 0), true));

                for (u, v) in graph.vertices().iter().copied().tuple_combinations() {
                    assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                    assert_eq!(graph.wall_status(u, v), graph.wall_status(v, u));
                }
                assert!(graph.has_edge(cell(0, 0), cell(1, 0)));
                assert!(graph.wall_status(cell(0, 0), cell(1, 0)));
            }

            #[test]
            fn update_wall() {
                let mut graph = square();
                let (a, b) = (cell(0, 0), cell(0, 1));

                assert!(!graph.update_wall(a, b, true));
                assert!(!graph.has_edge(a, b));

                assert!(graph.add_edge(a, b, true));
                assert!(graph.wall_status(a, b));
                assert!(graph.update_wall(b, a, false));
                assert!(!graph.wall_status(a, b));
                assert!(graph.update_wall(a, b, false));
                assert!(!graph.wall_status(b, a));
                assert!(graph.update_wall(a, b, true));
                assert!(graph.wall_status(b, a));
                assert_eq!(graph.number_of_edges(), 1);
            }

            #[test]
            fn remove_and_readd() {
                let mut graph = square();
                let (a, b) = (cell(0, 0), cell(1, 0));

                assert!(!graph.remove_edge(a, b));
                assert!(graph.add_edge(a, b, true));
                assert!(graph.add_passage(a, cell(0, 1)));

                assert!(graph.remove_edge(b, a));
                assert!(!graph.has_edge(a, b));
                assert!(!graph.wall_status(a, b));
                assert!(!graph.remove_edge(a, b));
                assert_eq!(graph.number_of_edges(), 1);

                assert!(graph.add_edge(a, b, false));
                assert!(!graph.wall_status(a, b));
                assert_eq!(sorted_neighbours(&graph, a), vec![cell(0, 1), cell(1, 0)]);
            }

            #[test]
            fn two_by_two_scenario() {
                let mut graph = square();
                assert!(graph.add_edge(cell(0, 0), cell(0, 1), true));
                assert!(graph.add_edge(cell(0, 0), cell(1, 0), false));

                assert!(graph.has_edge(cell(0, 0), cell(0, 1)));
                assert!(graph.wall_status(cell(0, 0), cell(0, 1)));
                assert!(!graph.wall_status(cell(0, 0), cell(1, 0)));
                assert_eq!(
                    sorted_neighbours(&graph, cell(0, 0)),
                    vec![cell(0, 1), cell(1, 0)]
                );
                assert!(!graph.has_edge(cell(0, 1), cell(1, 1)));
                assert_eq!(sorted_neighbours(&graph, cell(0, 1)), vec![cell(0, 0)]);
                assert!(graph.neighbours(cell(1, 1)).is_empty());
            }

            #[test]
            fn neighbours_are_deterministic() {
                let build = || {
                    let mut graph = square();
                    graph.add_edge(cell(1, 1), cell(0, 1), false);
                    graph.add_edge(cell(1, 0), cell(1, 1), true);
                    graph.add_edge(cell(0, 1), cell(0, 0), true);
                    graph
                };
                let (g1, g2) = (build(), build());
                for &u in g1.vertices() {
                    assert_eq!(g1.neighbours(u), g2.neighbours(u));
                }
            }

            #[test]
            fn random_operations_match_reference() {
                init_logger();
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [3 as Coord, 5, 8] {
                    for _ in 0..5 {
                        let mut graph = <$graph>::default();
                        let mut vertices: Vec<Coordinates> = Vec::new();
                        let mut walls: FxHashMap<Edge, bool> = FxHashMap::default();

                        for _ in 0..(n * n * 10) {
                            let u = cell(rng.random_range(0..n), rng.random_range(0..n));
                            let v = cell(rng.random_range(0..n), rng.random_range(0..n));
                            let key = Edge(u, v).normalized();
                            let wall = rng.random_bool(0.5);

                            match rng.random_range(0..8) {
                                0 | 1 => {
                                    graph.add_vertex(u);
                                    if !vertices.contains(&u) {
                                        vertices.push(u);
                                    }
                                }
                                2..=4 => {
                                    let expected = vertices.contains(&u)
                                        && vertices.contains(&v)
                                        && u != v
                                        && !walls.contains_key(&key);
                                    assert_eq!(graph.add_edge(u, v, wall), expected);
                                    if expected {
                                        walls.insert(key, wall);
                                    }
                                }
                                5 => {
                                    assert_eq!(graph.remove_edge(u, v), walls.remove(&key).is_some());
                                }
                                _ => {
                                    let expected = walls.get_mut(&key).map(|w| *w = wall).is_some();
                                    assert_eq!(graph.update_wall(u, v, wall), expected);
                                }
                            }

                            assert_eq!(graph.vertices(), &vertices[..]);
                            assert_eq!(graph.number_of_edges() as usize, walls.len());
                        }

                        for &u in &vertices {
                            let neighbours = graph.neighbours(u);
                            assert_eq!(neighbours.iter().unique().count(), neighbours.len());
                            assert!(!neighbours.contains(&u));

                            let expected = vertices
                                .iter()
                                .copied()
                                .filter(|&v| graph.has_edge(u, v))
                                .sorted()
                                .collect_vec();
                            assert_eq!(sorted_neighbours(&graph, u), expected);

                            for &v in &vertices {
                                let key = Edge(u, v).normalized();
                                assert_eq!(graph.has_edge(u, v), walls.contains_key(&key));
                                assert_eq!(
                                    graph.wall_status(u, v),
                                    walls.get(&key).copied().unwrap_or(false)
                                );
                            }
                        }

                        let stored = graph
                            .edges()
                            .map(|e| (e.edge.normalized(), e.wall))
                            .sorted()
                            .collect_vec();
                        assert_eq!(stored, walls.into_iter().sorted().collect_vec());
                    }
                }
            }
        }
    };
}

pub(crate) use test_maze_graph;
