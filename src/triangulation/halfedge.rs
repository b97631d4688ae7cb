//! Half-edge representation of a planar triangulation.
//!
//! Triangles are stored flat: triangle `t` owns half-edges `3t`, `3t + 1`
//! and `3t + 2`. Half-edge `e` starts at point `triangles[e]` and ends at
//! `triangles[next_halfedge(e)]`. Each half-edge may have an opposite
//! half-edge in the neighbouring triangle; half-edges on the convex hull
//! have none.
//!
//! # Example
//!
//! ```
//! use voronoi_graph::triangulation::{HalfEdgeTriangulation, Triangle, Triangulation};
//! use voronoi_graph::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let triangles = [Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
//!
//! let mesh = HalfEdgeTriangulation::from_triangles(points, &triangles).unwrap();
//!
//! assert_eq!(mesh.triangle_count(), 2);
//! // Four hull edges plus the shared diagonal
//! assert_eq!(mesh.edges().len(), 5);
//! ```

use super::circumcenter::circumcenter;
use super::delaunay::{delaunay_triangulation, Triangle};
use crate::error::TriangulationError;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;

/// Returns the half-edge following `e` within its triangle.
#[inline]
pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

/// Returns the half-edge preceding `e` within its triangle.
#[inline]
pub fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

/// Returns the triangle that owns half-edge `e`.
#[inline]
pub fn triangle_of_edge(e: usize) -> usize {
    e / 3
}

/// Returns the three half-edges of triangle `t`.
#[inline]
pub fn edges_of_triangle(t: usize) -> [usize; 3] {
    [3 * t, 3 * t + 1, 3 * t + 2]
}

/// An undirected Delaunay edge given by its endpoint positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<F> {
    pub p: Point2<F>,
    pub q: Point2<F>,
}

impl<F: Float> Edge<F> {
    /// Creates a new edge.
    #[inline]
    pub fn new(p: Point2<F>, q: Point2<F>) -> Self {
        Self { p, q }
    }
}

/// Read-only queries over a half-edge triangulation.
///
/// Implementors supply the point list, the flat triangle array, the
/// opposite-half-edge relation and the triangle centers. Everything else has
/// a default derived from those.
pub trait Triangulation<F: Float> {
    /// The triangulated points, in input order.
    fn points(&self) -> &[Point2<F>];

    /// Point indices, three per triangle.
    fn triangles(&self) -> &[usize];

    /// The half-edge opposite `e`, or `None` when `e` lies on the hull.
    fn halfedge(&self, e: usize) -> Option<usize>;

    /// The circumcenter of triangle `t`.
    fn triangle_center(&self, t: usize) -> Point2<F>;

    /// Number of half-edges.
    fn halfedge_count(&self) -> usize {
        self.triangles().len()
    }

    /// Number of triangles.
    fn triangle_count(&self) -> usize {
        self.triangles().len() / 3
    }

    /// The half-edge following `e` within its triangle.
    fn next_halfedge(&self, e: usize) -> usize {
        next_halfedge(e)
    }

    /// The triangle that owns half-edge `e`.
    fn triangle_of_edge(&self, e: usize) -> usize {
        triangle_of_edge(e)
    }

    /// The first incoming half-edge of the fan around the point `e` ends at.
    ///
    /// Walks the fan backwards until it reaches the hull. For an interior
    /// point the walk wraps around and `e` itself is returned.
    fn fan_start(&self, e: usize) -> usize {
        let mut incoming = e;
        for _ in 0..self.halfedge_count() {
            let Some(outgoing) = self.halfedge(incoming) else {
                return incoming;
            };
            let previous = prev_halfedge(outgoing);
            if previous == e {
                break;
            }
            incoming = previous;
        }
        e
    }

    /// Incoming half-edges around the point that `start` ends at.
    ///
    /// Walks the fan in rotational order starting from `start`. The walk
    /// stops when it returns to `start` (interior point) or reaches a hull
    /// half-edge with no opposite (boundary point). A boundary fan is only
    /// complete when `start` happens to be the first half-edge of the fan.
    fn edges_around_point(&self, start: usize) -> Vec<usize> {
        let mut fan = Vec::new();
        let mut incoming = start;
        loop {
            fan.push(incoming);
            match self.halfedge(self.next_halfedge(incoming)) {
                Some(e) if e != start && fan.len() < self.halfedge_count() => incoming = e,
                _ => break,
            }
        }
        fan
    }

    /// The three point indices of triangle `t`.
    fn points_of_triangle(&self, t: usize) -> [usize; 3] {
        edges_of_triangle(t).map(|e| self.triangles()[e])
    }

    /// Triangles sharing an edge with triangle `t`; hull edges contribute nothing.
    fn triangles_adjacent_to_triangle(&self, t: usize) -> Vec<usize> {
        edges_of_triangle(t)
            .into_iter()
            .filter_map(|e| self.halfedge(e))
            .map(|opposite| self.triangle_of_edge(opposite))
            .collect()
    }

    /// Every undirected edge exactly once, as a pair of endpoint positions.
    ///
    /// An interior edge is reported from the half-edge with the larger index
    /// of the pair; a hull edge from its only half-edge.
    fn edges(&self) -> Vec<Edge<F>> {
        let points = self.points();
        let triangles = self.triangles();
        (0..self.halfedge_count())
            .filter(|&e| self.halfedge(e).map_or(true, |opposite| e > opposite))
            .map(|e| {
                Edge::new(
                    points[triangles[e]],
                    points[triangles[self.next_halfedge(e)]],
                )
            })
            .collect()
    }
}

/// A triangulation stored as a flat triangle array plus opposite half-edges.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfEdgeTriangulation<F> {
    points: Vec<Point2<F>>,
    triangles: Vec<usize>,
    halfedges: Vec<Option<usize>>,
}

impl<F: Float> HalfEdgeTriangulation<F> {
    /// Builds the half-edge structure for an explicit triangle list.
    ///
    /// Triangles should share a consistent orientation so that every
    /// interior edge appears once in each direction. Opposite half-edges are
    /// paired by their endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::IndexOutOfBounds`] if a triangle refers
    /// to a missing point, and [`TriangulationError::DuplicateHalfEdge`] if
    /// the same directed edge is used by two triangles.
    pub fn from_triangles(
        points: Vec<Point2<F>>,
        triangles: &[Triangle],
    ) -> Result<Self, TriangulationError> {
        let mut flat = Vec::with_capacity(triangles.len() * 3);
        for (t, tri) in triangles.iter().enumerate() {
            for point in tri.indices() {
                if point >= points.len() {
                    return Err(TriangulationError::IndexOutOfBounds {
                        triangle: t,
                        point,
                        len: points.len(),
                    });
                }
                flat.push(point);
            }
        }

        let mut directed: HashMap<(usize, usize), usize> = HashMap::with_capacity(flat.len());
        for e in 0..flat.len() {
            let key = (flat[e], flat[next_halfedge(e)]);
            if directed.insert(key, e).is_some() {
                return Err(TriangulationError::DuplicateHalfEdge {
                    from: key.0,
                    to: key.1,
                });
            }
        }

        let halfedges = (0..flat.len())
            .map(|e| directed.get(&(flat[next_halfedge(e)], flat[e])).copied())
            .collect();

        Ok(Self {
            points,
            triangles: flat,
            halfedges,
        })
    }

    /// Computes the Delaunay triangulation of `points` in half-edge form.
    ///
    /// # Errors
    ///
    /// Propagates [`TriangulationError`] from [`from_triangles`]; with the
    /// bundled Bowyer-Watson output this only happens for inputs containing
    /// non-finite coordinates.
    ///
    /// [`from_triangles`]: Self::from_triangles
    pub fn delaunay(points: Vec<Point2<F>>) -> Result<Self, TriangulationError> {
        let triangles = delaunay_triangulation(&points);
        Self::from_triangles(points, &triangles)
    }
}

impl<F: Float> Triangulation<F> for HalfEdgeTriangulation<F> {
    fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    fn triangles(&self) -> &[usize] {
        &self.triangles
    }

    fn halfedge(&self, e: usize) -> Option<usize> {
        self.halfedges[e]
    }

    fn triangle_center(&self, t: usize) -> Point2<F> {
        let [a, b, c] = self.points_of_triangle(t);
        circumcenter(self.points[a], self.points[b], self.points[c])
    }
}
