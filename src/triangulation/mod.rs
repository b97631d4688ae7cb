//! Triangulations of point sets.
//!
//! This module provides the half-edge triangulation queries the Voronoi
//! graph builder consumes, together with a Bowyer-Watson Delaunay
//! triangulation that produces them.

mod circumcenter;
mod delaunay;
mod halfedge;

pub use circumcenter::circumcenter;
pub use delaunay::{delaunay_triangulation, in_circumcircle, Triangle};
pub use halfedge::{
    edges_of_triangle, next_halfedge, prev_halfedge, triangle_of_edge, Edge,
    HalfEdgeTriangulation, Triangulation,
};
