//! voronoi-graph - Voronoi dual graphs of planar Delaunay triangulations
//!
//! Turns a half-edge triangulation into a graph of Voronoi cells: for every
//! input point the ordered ring of circumcenters around it, plus the
//! node-to-node, vertex-to-vertex and vertex-to-node adjacency needed to walk
//! the diagram.
//!
//! # Example
//!
//! ```
//! use voronoi_graph::triangulation::HalfEdgeTriangulation;
//! use voronoi_graph::{voronoi_graph, Point2};
//!
//! let triangulation = HalfEdgeTriangulation::delaunay(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(0.9, 1.2),
//! ])?;
//!
//! let graph = voronoi_graph(&triangulation)?;
//!
//! // The interior point has a closed cell, one vertex per incident triangle
//! assert!(graph.node(4).unwrap().is_closed());
//! assert_eq!(graph.vertices_by_node(4).len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod primitives;
pub mod triangulation;
pub mod voronoi;

pub use error::{TriangulationError, VoronoiError};
pub use primitives::Point2;
pub use triangulation::{HalfEdgeTriangulation, Triangulation};
pub use voronoi::{voronoi_graph, BuildConfig, GraphBuilder, VoronoiGraph};
