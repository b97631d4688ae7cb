//! Floating-point geometric primitives.

mod point2;

pub use point2::Point2;
