//! Position-keyed index used to deduplicate nodes and vertices.
//!
//! Floats are not `Hash`, so positions are turned into an integer key first:
//! the decoded mantissa/exponent/sign triple for exact equality, or the grid
//! cell coordinates for quantized equality.

use super::config::PositionEquality;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;

type ExactScalar = (u64, i16, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PositionKey {
    Exact(ExactScalar, ExactScalar),
    Cell(i64, i64),
}

fn exact_scalar<F: Float>(value: F) -> ExactScalar {
    // -0.0 and 0.0 are equal values but decode with different signs
    if value == F::zero() {
        F::zero().integer_decode()
    } else {
        value.integer_decode()
    }
}

/// Maps positions to the first index registered for them.
#[derive(Debug, Clone)]
pub(crate) struct PositionIndex<F> {
    equality: PositionEquality<F>,
    map: HashMap<PositionKey, usize>,
}

impl<F: Float> PositionIndex<F> {
    pub(crate) fn with_capacity(equality: PositionEquality<F>, capacity: usize) -> Self {
        Self {
            equality,
            map: HashMap::with_capacity(capacity),
        }
    }

    fn key(&self, p: Point2<F>) -> PositionKey {
        if let PositionEquality::Quantized { cell } = self.equality {
            let snapped = (p.x / cell).round().to_i64().zip((p.y / cell).round().to_i64());
            if let Some((x, y)) = snapped {
                return PositionKey::Cell(x, y);
            }
        }
        PositionKey::Exact(exact_scalar(p.x), exact_scalar(p.y))
    }

    /// Returns the index registered for `p`, if any.
    pub(crate) fn get(&self, p: Point2<F>) -> Option<usize> {
        self.map.get(&self.key(p)).copied()
    }

    /// Registers `index` for `p` unless the position is already taken.
    ///
    /// Returns the index now associated with `p`.
    pub(crate) fn insert(&mut self, p: Point2<F>, index: usize) -> usize {
        let key = self.key(p);
        *self.map.entry(key).or_insert(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_first_index_wins() {
        let mut index = PositionIndex::with_capacity(PositionEquality::Exact, 4);
        assert_eq!(index.insert(Point2::new(1.0_f64, 2.0), 0), 0);
        assert_eq!(index.insert(Point2::new(1.0, 2.0), 5), 0);
        assert_eq!(index.insert(Point2::new(2.0, 1.0), 1), 1);

        assert_eq!(index.get(Point2::new(1.0, 2.0)), Some(0));
        assert_eq!(index.get(Point2::new(2.0, 1.0)), Some(1));
        assert_eq!(index.get(Point2::new(1.0, 2.000_000_1)), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_exact_signed_zero_is_one_position() {
        let mut index = PositionIndex::with_capacity(PositionEquality::Exact, 1);
        index.insert(Point2::new(0.0_f64, -0.0), 3);
        assert_eq!(index.get(Point2::new(-0.0, 0.0)), Some(3));
    }

    #[test]
    fn test_quantized_merges_rounding_noise() {
        let mut index = PositionIndex::with_capacity(PositionEquality::Quantized { cell: 1e-6 }, 2);
        index.insert(Point2::new(0.5_f64, 0.25), 0);
        assert_eq!(index.get(Point2::new(0.5 + 1e-12, 0.25 - 1e-12)), Some(0));
        assert_eq!(index.get(Point2::new(0.5 + 1e-3, 0.25)), None);
    }

    #[test]
    fn test_quantized_non_finite_falls_back_to_exact() {
        let mut index = PositionIndex::with_capacity(PositionEquality::Quantized { cell: 1.0 }, 2);
        index.insert(Point2::new(f64::INFINITY, 0.0), 7);
        assert_eq!(index.get(Point2::new(f64::INFINITY, 0.0)), Some(7));
        assert_eq!(index.get(Point2::new(f64::NEG_INFINITY, 0.0)), None);
    }
}
