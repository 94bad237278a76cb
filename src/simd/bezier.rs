//! SIMD-accelerated Bézier curve evaluation.
//!
//! Runs the de Casteljau triangle for 4 parameter values at once. Each lane
//! performs exactly the scalar arithmetic, so results match
//! [`BezierCurve2::eval`].

use wide::f64x4;

use crate::curves::{check_step_count, step_param, BezierCurve2};
use crate::error::Result;
use crate::primitives::Point2;

use super::point::Point2x4;

/// A Bézier curve that can evaluate 4 parameter values at once.
#[derive(Clone, Debug)]
pub struct BezierCurve2x4 {
    /// Control points splatted across all lanes.
    points: Vec<Point2x4>,
    /// Scalar copy for batch remainders.
    scalar: BezierCurve2<f64>,
}

impl BezierCurve2x4 {
    /// Creates from an existing curve.
    pub fn from_curve(curve: &BezierCurve2<f64>) -> Self {
        Self {
            points: curve
                .control_points()
                .iter()
                .map(|&p| Point2x4::splat(p))
                .collect(),
            scalar: curve.clone(),
        }
    }

    /// Evaluates the curve at 4 parameter values simultaneously.
    pub fn eval(&self, t: f64x4) -> Point2x4 {
        let mut scratch = Vec::with_capacity(self.points.len());
        self.eval_with_scratch(t, &mut scratch)
    }

    /// Evaluates at 4 parameter values reusing `scratch` as the triangle row.
    pub fn eval_with_scratch(&self, t: f64x4, scratch: &mut Vec<Point2x4>) -> Point2x4 {
        scratch.clear();
        scratch.extend_from_slice(&self.points);
        for remaining in (1..scratch.len()).rev() {
            for i in 0..remaining {
                scratch[i] = scratch[i].lerp(scratch[i + 1], t);
            }
        }
        scratch[0]
    }

    /// Evaluates the curve at every value in `params`.
    ///
    /// Processes in batches of 4; the remainder goes through the scalar curve.
    pub fn eval_many(&self, params: &[f64]) -> Vec<Point2<f64>> {
        let mut result = Vec::with_capacity(params.len());
        let mut scratch = Vec::with_capacity(self.points.len());

        let mut chunks = params.chunks_exact(4);
        for chunk in &mut chunks {
            let t = f64x4::new([chunk[0], chunk[1], chunk[2], chunk[3]]);
            result.extend_from_slice(&self.eval_with_scratch(t, &mut scratch).to_array());
        }

        let mut scalar_scratch = Vec::with_capacity(self.points.len());
        for &t in chunks.remainder() {
            result.push(self.scalar.eval_with_scratch(t, &mut scalar_scratch));
        }

        result
    }

    /// Samples the curve into `step_count + 1` points, like
    /// [`BezierCurve2::to_polyline`].
    pub fn to_polyline(&self, step_count: usize) -> Result<Vec<Point2<f64>>> {
        check_step_count(step_count)?;
        log::trace!(
            "simd sampling order {} curve with {} steps",
            self.scalar.order(),
            step_count
        );

        let params: Vec<f64> = (0..=step_count)
            .map(|i| step_param(i, step_count))
            .collect();
        Ok(self.eval_many(&params))
    }
}

/// Samples a curve into a polyline using 4-wide evaluation.
///
/// Convenience wrapper that builds a [`BezierCurve2x4`] internally.
pub fn to_polyline_batch(curve: &BezierCurve2<f64>, step_count: usize) -> Result<Vec<Point2<f64>>> {
    BezierCurve2x4::from_curve(curve).to_polyline(step_count)
}
