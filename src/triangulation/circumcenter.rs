//! Triangle circumcenters.
//!
//! The circumcenter of a Delaunay triangle is a vertex of the Voronoi diagram:
//! it is equidistant from the three sites of the triangle and no other site
//! is closer to it.

use crate::primitives::Point2;
use num_traits::Float;

/// Computes the circumcenter of a triangle.
///
/// Collinear (zero-area) triangles have no circumcenter; for those the
/// centroid is returned so the result is always finite for finite input.
///
/// # Example
///
/// ```
/// use voronoi_graph::triangulation::circumcenter;
/// use voronoi_graph::Point2;
///
/// // Right triangle: the circumcenter is the midpoint of the hypotenuse
/// let center = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// );
///
/// assert_eq!(center, Point2::new(0.5, 0.5));
/// ```
pub fn circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Point2<F> {
    let two = F::one() + F::one();
    let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

    if d.abs() < F::epsilon() {
        let three = two + F::one();
        return Point2::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three);
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;

    Point2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    )
}
