//! SIMD point type.
//!
//! Holds 4 2D points in `f64x4` lanes for parallel evaluation.

use wide::f64x4;

use crate::primitives::Point2;

/// A batch of 4 2D points using SIMD.
#[derive(Clone, Copy, Debug)]
pub struct Point2x4 {
    pub x: f64x4,
    pub y: f64x4,
}

impl Point2x4 {
    /// Creates a batch from 4 individual points.
    #[inline]
    pub fn from_points(p0: Point2<f64>, p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> Self {
        Self {
            x: f64x4::new([p0.x, p1.x, p2.x, p3.x]),
            y: f64x4::new([p0.y, p1.y, p2.y, p3.y]),
        }
    }

    /// Creates a batch where all 4 points are the same.
    #[inline]
    pub fn splat(p: Point2<f64>) -> Self {
        Self {
            x: f64x4::splat(p.x),
            y: f64x4::splat(p.y),
        }
    }

    /// Linearly interpolates each lane with its own parameter.
    ///
    /// Same `(1 - t)·a + t·b` form as [`Point2::lerp`], lane by lane.
    #[inline]
    pub fn lerp(self, other: Self, t: f64x4) -> Self {
        let mt = f64x4::splat(1.0) - t;
        Self {
            x: mt * self.x + t * other.x,
            y: mt * self.y + t * other.y,
        }
    }

    /// Extracts the 4 points as an array.
    #[inline]
    pub fn to_array(self) -> [Point2<f64>; 4] {
        let x = self.x.to_array();
        let y = self.y.to_array();
        [
            Point2::new(x[0], y[0]),
            Point2::new(x[1], y[1]),
            Point2::new(x[2], y[2]),
            Point2::new(x[3], y[3]),
        ]
    }
}
