//! Build options for the Voronoi graph builder.

use crate::error::VoronoiError;
use num_traits::Float;

/// How circumcenter positions are compared when deduplicating vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionEquality<F> {
    /// Positions are equal when their coordinates are equal as values.
    /// `-0.0` and `0.0` compare equal.
    Exact,
    /// Positions are snapped to a square grid of side `cell` and compared by
    /// grid cell. Two circumcenters that differ only by rounding noise
    /// collapse to one vertex, as long as they do not straddle a cell border.
    Quantized {
        /// Grid cell size; must be positive and finite.
        cell: F,
    },
}

impl<F> Default for PositionEquality<F> {
    fn default() -> Self {
        PositionEquality::Exact
    }
}

/// Where the builder starts the fan of triangles around a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HullFan {
    /// Walk from the first half-edge that reaches the node. Hull nodes may
    /// stop at the hull before seeing all of their triangles.
    #[default]
    AsWalked,
    /// Rewind to the first triangle of the fan before walking it, so hull
    /// nodes get every incident triangle as an open fan.
    Complete,
}

/// Options for [`GraphBuilder`](super::GraphBuilder).
///
/// # Example
///
/// ```
/// use voronoi_graph::voronoi::{BuildConfig, HullFan, PositionEquality};
///
/// let config = BuildConfig::new()
///     .with_equality(PositionEquality::Quantized { cell: 1e-9_f64 })
///     .with_hull_fan(HullFan::Complete);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig<F> {
    pub equality: PositionEquality<F>,
    pub hull_fan: HullFan,
}

impl<F: Float> BuildConfig<F> {
    /// Exact equality, hull fans walked as reached.
    pub fn new() -> Self {
        Self {
            equality: PositionEquality::Exact,
            hull_fan: HullFan::AsWalked,
        }
    }

    /// Sets the vertex position equality.
    pub fn with_equality(mut self, equality: PositionEquality<F>) -> Self {
        self.equality = equality;
        self
    }

    /// Sets the hull fan policy.
    pub fn with_hull_fan(mut self, hull_fan: HullFan) -> Self {
        self.hull_fan = hull_fan;
        self
    }

    /// Checks that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`VoronoiError::InvalidTolerance`] for a quantization cell that
    /// is zero, negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), VoronoiError> {
        match self.equality {
            PositionEquality::Quantized { cell } if !(cell.is_finite() && cell > F::zero()) => {
                Err(VoronoiError::InvalidTolerance)
            }
            _ => Ok(()),
        }
    }
}

impl<F: Float> Default for BuildConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
