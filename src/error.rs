//! Error types for triangulation and Voronoi graph construction.

use thiserror::Error;

/// Errors that can occur while building a Voronoi graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoronoiError {
    /// A vertex position that was just inserted into the position index
    /// could not be found again.
    #[error("position index lost vertex {vertex} immediately after insertion")]
    LookupInconsistency {
        /// Index of the vertex that was inserted.
        vertex: usize,
    },

    /// An edge endpoint does not match any point of the triangulation.
    #[error("edge endpoint ({x}, {y}) does not match any input point")]
    UnresolvedEndpoint {
        /// X coordinate of the endpoint.
        x: f64,
        /// Y coordinate of the endpoint.
        y: f64,
    },

    /// The quantization cell size is not a positive finite number.
    #[error("quantization cell must be positive and finite")]
    InvalidTolerance,
}

/// Errors that can occur while assembling a half-edge triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// A triangle references a point that does not exist.
    #[error("triangle {triangle} references point {point}, but only {len} points exist")]
    IndexOutOfBounds {
        /// Index of the offending triangle.
        triangle: usize,
        /// The out-of-range point index.
        point: usize,
        /// Number of available points.
        len: usize,
    },

    /// The same directed edge appears in two triangles.
    #[error("directed edge {from} -> {to} appears in more than one triangle")]
    DuplicateHalfEdge {
        /// Start point of the edge.
        from: usize,
        /// End point of the edge.
        to: usize,
    },
}
