//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! This is the reference triangulation used to feed the Voronoi graph
//! builder. The output is a plain triangle list; [`HalfEdgeTriangulation`]
//! turns it into the half-edge form the builder consumes.
//!
//! # Algorithm
//!
//! 1. Start with a super-triangle enclosing every point
//! 2. Insert points one at a time; triangles whose circumcircle contains the
//!    new point are removed and the cavity is re-fanned from the point
//! 3. Drop every triangle that still touches the super-triangle
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, O(n log n) expected for random points
//! - Space: O(n)
//!
//! [`HalfEdgeTriangulation`]: super::HalfEdgeTriangulation

use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;

/// A triangle represented by indices into a point array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three directed edges of this triangle.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns the vertex indices in order.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Checks if the triangle uses a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// Undirected edge key, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct UndirectedEdge(usize, usize);

impl UndirectedEdge {
    fn new(a: usize, b: usize) -> Self {
        if a < b {
            UndirectedEdge(a, b)
        } else {
            UndirectedEdge(b, a)
        }
    }
}

/// Tests if `p` lies strictly inside the circumcircle of the CCW triangle `a, b, c`.
///
/// Points exactly on the circle are reported as outside, so cocircular
/// inputs keep their existing triangles.
///
/// # Example
///
/// ```
/// use voronoi_graph::triangulation::in_circumcircle;
/// use voronoi_graph::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.5, 0.866);
///
/// assert!(in_circumcircle(Point2::new(0.5, 0.29), a, b, c));
/// assert!(!in_circumcircle(Point2::new(10.0, 10.0), a, b, c));
/// ```
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);

    det > F::zero()
}

/// Twice the signed area of `a, b, c`; positive for counter-clockwise.
fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Returns counter-clockwise triangles indexing into `points`. Fewer than
/// three points, or an all-collinear input, produce no triangles.
///
/// # Example
///
/// ```
/// use voronoi_graph::triangulation::delaunay_triangulation;
/// use voronoi_graph::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// assert_eq!(delaunay_triangulation(&points).len(), 4);
/// ```
pub fn delaunay_triangulation<F: Float>(points: &[Point2<F>]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let (min, max) = points.iter().skip(1).fold((points[0], points[0]), |(lo, hi), p| {
        (
            Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });

    let span = (max.x - min.x).max(max.y - min.y);
    let mid = min.midpoint(max);
    let margin = F::from(10.0).unwrap_or_else(F::max_value);

    let n = points.len();
    let mut all_points = points.to_vec();
    all_points.push(Point2::new(mid.x - margin * span, mid.y - span));
    all_points.push(Point2::new(mid.x + margin * span, mid.y - span));
    all_points.push(Point2::new(mid.x, mid.y + margin * span));

    let mut triangles = vec![Triangle::new(n, n + 1, n + 2)];

    for (i, &p) in points.iter().enumerate() {
        let mut cavity = Vec::new();
        triangles.retain(|tri| {
            let bad = in_circumcircle(p, all_points[tri.a], all_points[tri.b], all_points[tri.c]);
            if bad {
                cavity.push(*tri);
            }
            !bad
        });

        // Cavity boundary: edges used by exactly one removed triangle
        let mut uses: HashMap<UndirectedEdge, usize> = HashMap::new();
        for tri in &cavity {
            for (ea, eb) in tri.edges() {
                *uses.entry(UndirectedEdge::new(ea, eb)).or_insert(0) += 1;
            }
        }

        let mut boundary: Vec<UndirectedEdge> = uses
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|(edge, _)| edge)
            .collect();
        // HashMap iteration order is random; keep the output reproducible
        boundary.sort_unstable_by_key(|edge| (edge.0, edge.1));

        for UndirectedEdge(ea, eb) in boundary {
            let side = orient2d(all_points[ea], all_points[eb], p);
            if side > F::zero() {
                triangles.push(Triangle::new(ea, eb, i));
            } else if side < F::zero() {
                triangles.push(Triangle::new(eb, ea, i));
            }
        }
    }

    triangles.retain(|tri| !(n..n + 3).any(|s| tri.contains_vertex(s)));
    triangles
}
