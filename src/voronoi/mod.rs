//! Voronoi graphs as the dual of a Delaunay triangulation.
//!
//! Each Delaunay triangle's circumcenter becomes a Voronoi vertex, each input
//! point becomes a node whose cell is the ring of circumcenters around it,
//! and adjacency is recorded in both directions: node to node, vertex to
//! vertex and vertex to node.

mod builder;
mod config;
mod graph;
mod index;

pub use builder::{voronoi_graph, GraphBuilder};
pub use config::{BuildConfig, HullFan, PositionEquality};
pub use graph::{Node, Vertex, VoronoiGraph};
