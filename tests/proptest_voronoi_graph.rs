//! Property-based tests for Voronoi graphs built from random Delaunay
//! triangulations.
//!
//! The properties checked are the structural guarantees of the builder:
//!
//! - Node adjacency is symmetric, loop-free and has no repeated entries.
//! - Every vertex position is distinct.
//! - Closed (interior) cells have one entry per incident triangle; open
//!   (hull) cells see at most their incident triangles when walked as
//!   reached, and exactly those when the fan is rewound first.
//! - Vertex adjacency is symmetric, also when cocircular triangles merge.
//! - Building twice from the same triangulation gives the same graph.

use proptest::prelude::*;
use std::collections::HashSet;
use voronoi_graph::triangulation::{HalfEdgeTriangulation, Triangulation};
use voronoi_graph::voronoi::{BuildConfig, GraphBuilder, HullFan, PositionEquality};
use voronoi_graph::{voronoi_graph, Point2, VoronoiGraph};

// =============================================================================
// STRATEGIES
// =============================================================================

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_cloud() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y)),
        3..=40,
    )
}

/// Points on a small integer lattice; many cocircular quadruples.
fn lattice_cloud() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::hash_set((0_i32..6, 0_i32..6), 3..=20).prop_map(|cells| {
        let mut cells: Vec<(i32, i32)> = cells.into_iter().collect();
        cells.sort_unstable();
        cells
            .into_iter()
            .map(|(x, y)| Point2::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

fn count_unique_by_bits(points: &[Point2<f64>]) -> usize {
    points
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

fn triangulate(points: Vec<Point2<f64>>) -> Option<HalfEdgeTriangulation<f64>> {
    HalfEdgeTriangulation::delaunay(points).ok()
}

fn complete_fans() -> GraphBuilder<f64> {
    GraphBuilder::new(BuildConfig::new().with_hull_fan(HullFan::Complete))
}

fn incident_triangles(triangulation: &HalfEdgeTriangulation<f64>, node: usize) -> usize {
    triangulation
        .triangles()
        .iter()
        .filter(|&&point| point == node)
        .count()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Property: neighbours are symmetric, loop-free and duplicate-free.
    #[test]
    fn prop_neighbours_symmetric(points in point_cloud()) {
        prop_assume!(count_unique_by_bits(&points) == points.len());
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let graph = voronoi_graph(&triangulation).unwrap();

        for node in 0..graph.node_count() {
            let neighbours = graph.neighbours(node);
            let unique: HashSet<usize> = neighbours.iter().copied().collect();
            prop_assert_eq!(unique.len(), neighbours.len());
            prop_assert!(!unique.contains(&node));
            for &other in neighbours {
                prop_assert!(graph.neighbours(other).contains(&node));
            }
        }
    }

    /// Property: no two vertices share a position.
    #[test]
    fn prop_vertex_positions_distinct(points in point_cloud()) {
        prop_assume!(count_unique_by_bits(&points) == points.len());
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let graph = voronoi_graph(&triangulation).unwrap();
        let positions = graph.vertices_position();

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                prop_assert_ne!(positions[i], positions[j]);
            }
        }
        prop_assert!(positions.len() <= triangulation.triangle_count());
    }

    /// Property: closed cells have one vertex per incident triangle; open
    /// cells walked as reached see at most their incident triangles.
    #[test]
    fn prop_cell_lengths(points in point_cloud()) {
        prop_assume!(count_unique_by_bits(&points) == points.len());
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let graph = voronoi_graph(&triangulation).unwrap();

        for (i, node) in graph.nodes().iter().enumerate() {
            let incident = incident_triangles(&triangulation, i);
            if node.is_closed() {
                prop_assert_eq!(node.cell().len(), incident);
                prop_assert_eq!(node.neighbours().len(), incident);
            } else if !node.cell().is_empty() {
                prop_assert!(node.cell().len() <= incident);
                prop_assert!(node.cell().len() < node.neighbours().len());
            }
        }
    }

    /// Property: rewound hull fans see every incident triangle and stay
    /// shorter than the node's edge count.
    #[test]
    fn prop_complete_open_cells_cover_fan(points in point_cloud()) {
        prop_assume!(count_unique_by_bits(&points) == points.len());
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let graph = complete_fans().build(&triangulation).unwrap();

        for (i, node) in graph.nodes().iter().enumerate() {
            if node.is_closed() || node.cell().is_empty() {
                continue;
            }
            prop_assert_eq!(node.cell().len(), incident_triangles(&triangulation, i));
            prop_assert_eq!(node.cell().len() + 1, node.neighbours().len());
        }
    }

    /// Property: every vertex touches each node that lists it in its cell.
    #[test]
    fn prop_vertex_node_relations_consistent(points in point_cloud()) {
        prop_assume!(count_unique_by_bits(&points) == points.len());
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let graph = voronoi_graph(&triangulation).unwrap();

        for node in 0..graph.node_count() {
            for &vertex in graph.vertices_by_node(node) {
                prop_assert!(graph.nodes_by_vertex(vertex).contains(&node));
            }
        }
        for vertex in 0..graph.vertex_count() {
            prop_assert_eq!(graph.neighbours_nodes_by_vertex(vertex).len(), 3);
            for &node in graph.nodes_by_vertex(vertex) {
                prop_assert!(graph.vertices_by_node(node).contains(&vertex));
            }
            for &other in graph.neighbours_vertex_by_vertex(vertex) {
                prop_assert_ne!(other, vertex);
                prop_assert!(graph.neighbours_vertex_by_vertex(other).contains(&vertex));
            }
        }
    }

    /// Property: rebuilding from the same triangulation is index-for-index identical.
    #[test]
    fn prop_build_is_deterministic(points in point_cloud()) {
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let first = voronoi_graph(&triangulation).unwrap();
        let second = voronoi_graph(&triangulation).unwrap();

        prop_assert_eq!(first.vertex_count(), second.vertex_count());
        for node in 0..first.node_count() {
            prop_assert_eq!(first.neighbours(node), second.neighbours(node));
            prop_assert_eq!(first.vertices_by_node(node), second.vertices_by_node(node));
        }
    }

    /// Property: cocircular lattice points never produce duplicate vertices,
    /// and quantized equality never yields more vertices than exact equality.
    #[test]
    fn prop_lattice_dedup(points in lattice_cloud()) {
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let exact = voronoi_graph(&triangulation).unwrap();
        let positions = exact.vertices_position();
        let unique: HashSet<(u64, u64)> = positions
            .iter()
            .map(|p| ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()))
            .collect();
        prop_assert_eq!(unique.len(), positions.len());

        let config = BuildConfig::new().with_equality(PositionEquality::Quantized { cell: 1e-9 });
        let quantized = GraphBuilder::new(config).build(&triangulation).unwrap();
        prop_assert!(quantized.vertex_count() <= exact.vertex_count());

        for graph in [&exact, &quantized] {
            for vertex in 0..graph.vertex_count() {
                for &other in graph.neighbours_vertex_by_vertex(vertex) {
                    prop_assert_ne!(other, vertex);
                    prop_assert!(graph.neighbours_vertex_by_vertex(other).contains(&vertex));
                }
            }
            let edges = graph.edges();
            let total: usize = (0..graph.vertex_count())
                .map(|v| graph.neighbours_vertex_by_vertex(v).len())
                .sum();
            prop_assert_eq!(edges.len() * 2, total);
        }
    }

    /// Property: a fan walked as reached is the tail of the rewound fan, and
    /// the two agree on closed cells.
    #[test]
    fn prop_walked_fans_are_tails(points in point_cloud()) {
        prop_assume!(count_unique_by_bits(&points) == points.len());
        let Some(triangulation) = triangulate(points) else {
            prop_assume!(false);
            unreachable!();
        };
        let walked = voronoi_graph(&triangulation).unwrap();
        let complete = complete_fans().build(&triangulation).unwrap();

        for node in 0..walked.node_count() {
            let ring = |graph: &VoronoiGraph<f64>| -> Vec<Point2<f64>> {
                graph
                    .vertices_by_node(node)
                    .iter()
                    .map(|&v| graph.vertices()[v].position())
                    .collect()
            };
            let (tail, full) = (ring(&walked), ring(&complete));
            prop_assert!(tail.len() <= full.len());
            prop_assert_eq!(&full[full.len() - tail.len()..], tail.as_slice());
            if walked.node(node).unwrap().is_closed() {
                prop_assert_eq!(tail.len(), full.len());
            }
        }
    }
}
