//! Bézier curves of arbitrary order.
//!
//! A curve is defined by N ≥ 1 control points and has order N − 1. Points
//! on the curve are computed with de Casteljau's algorithm: the control
//! points are copied into a scratch row which is then collapsed in place,
//! one lerp pass per order, until a single point remains.
//!
//! Both coordinates go through the same [`Point2::lerp`], so x and y always
//! follow an identical recurrence. There is no recursion; evaluating one
//! point costs O(order²) lerps and a full sweep reuses one scratch buffer.

use rand::distr::uniform::SampleUniform;
use rand::Rng;

use crate::error::{CurveError, Result};
use crate::primitives::{Point2, Segment2};
use crate::sampling::{random_control_points, RandomPointsConfig};
use num_traits::Float;

/// Number of polyline steps used by [`BezierCurve2::to_default_polyline`].
pub const DEFAULT_STEP_COUNT: usize = 1000;

/// A Bézier curve of order `N - 1` defined by `N` control points.
///
/// The first control point is the start of the curve and, for `N >= 2`, the
/// last one is its end. A single control point describes a constant curve.
///
/// # Example
///
/// ```
/// use casteljau::{BezierCurve2, Point2};
///
/// let curve = BezierCurve2::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(20.0, 0.0),
/// ])
/// .unwrap();
///
/// assert_eq!(curve.order(), 2);
/// assert_eq!(curve.eval(0.5), Point2::new(10.0, 5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve2<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> BezierCurve2<F> {
    /// Creates a curve from its control points.
    ///
    /// Returns [`CurveError::InvalidInput`] if `points` is empty.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self> {
        check_control_points(&points)?;
        log::debug!(
            "bezier curve created with {} control points (order {})",
            points.len(),
            points.len() - 1
        );
        Ok(Self { points })
    }

    /// Replaces the control points.
    ///
    /// On error the previous control points are kept.
    pub fn set_control_points(&mut self, points: Vec<Point2<F>>) -> Result<()> {
        check_control_points(&points)?;
        log::debug!(
            "control points replaced: {} -> {} points (order {})",
            self.points.len(),
            points.len(),
            points.len() - 1
        );
        self.points = points;
        Ok(())
    }

    /// Returns the control points in curve order.
    #[inline]
    pub fn control_points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the number of control points (always at least 1).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the degree of the curve, one less than the control point count.
    #[inline]
    pub fn order(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the first control point, which is also `eval(0)`.
    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.points[0]
    }

    /// Returns the last control point, which is also `eval(1)`.
    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.points[self.points.len() - 1]
    }

    /// Evaluates the curve at parameter `t`.
    ///
    /// `t` is meant to lie in [0, 1]. Other values are not rejected and
    /// return the polynomial extrapolation of the curve.
    pub fn eval(&self, t: F) -> Point2<F> {
        let mut scratch = Vec::with_capacity(self.points.len());
        self.eval_with_scratch(t, &mut scratch)
    }

    /// Evaluates the curve at `t` using `scratch` as the de Casteljau row.
    ///
    /// The buffer is cleared and refilled, so any previous contents are
    /// ignored. Reusing one buffer across many calls avoids an allocation
    /// per point.
    pub fn eval_with_scratch(&self, t: F, scratch: &mut Vec<Point2<F>>) -> Point2<F> {
        scratch.clear();
        scratch.extend_from_slice(&self.points);
        de_casteljau(scratch, t)
    }

    /// Samples the curve into a polyline.
    ///
    /// Returns exactly `step_count + 1` points at `t = i / step_count` for
    /// `i` in `0..=step_count`; the last sample is taken at exactly `t = 1`.
    ///
    /// Returns [`CurveError::InvalidInput`] if `step_count` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use casteljau::{BezierCurve2, Point2};
    ///
    /// let curve = BezierCurve2::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 2.0),
    ///     Point2::new(3.0, 2.0),
    ///     Point2::new(4.0, 0.0),
    /// ])
    /// .unwrap();
    ///
    /// let polyline = curve.to_polyline(100).unwrap();
    /// assert_eq!(polyline.len(), 101);
    /// assert_eq!(polyline[0], Point2::new(0.0, 0.0));
    /// assert_eq!(polyline[100], Point2::new(4.0, 0.0));
    /// ```
    pub fn to_polyline(&self, step_count: usize) -> Result<Vec<Point2<F>>> {
        check_step_count(step_count)?;
        Ok(self.sweep(step_count))
    }

    /// Samples the curve with [`DEFAULT_STEP_COUNT`] steps.
    pub fn to_default_polyline(&self) -> Vec<Point2<F>> {
        self.sweep(DEFAULT_STEP_COUNT)
    }

    fn sweep(&self, step_count: usize) -> Vec<Point2<F>> {
        log::trace!(
            "sampling order {} curve with {} steps",
            self.order(),
            step_count
        );

        let mut scratch = Vec::with_capacity(self.points.len());
        (0..=step_count)
            .map(|i| self.eval_with_scratch(step_param(i, step_count), &mut scratch))
            .collect()
    }

    /// Splits the curve at parameter `t`, returning two curves of the same
    /// order.
    ///
    /// The left curve covers [0, t] and the right one [t, 1]; both share the
    /// point `eval(t)`.
    pub fn split(&self, t: F) -> (Self, Self) {
        let n = self.points.len();
        let mut row = self.points.clone();
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);

        // Left edge of the de Casteljau triangle, then the right edge.
        left.push(row[0]);
        right.push(row[n - 1]);
        for remaining in (1..n).rev() {
            for i in 0..remaining {
                row[i] = row[i].lerp(row[i + 1], t);
            }
            left.push(row[0]);
            right.push(row[remaining - 1]);
        }
        right.reverse();

        (Self { points: left }, Self { points: right })
    }

    /// Returns the bounding box of the control points as `(min, max)`.
    ///
    /// The curve lies inside the convex hull of its control points, so this
    /// also bounds every point with `t` in [0, 1].
    pub fn control_bounds(&self) -> (Point2<F>, Point2<F>) {
        let first = self.points[0];
        self.points
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), p| {
                (
                    Point2::new(min.x.min(p.x), min.y.min(p.y)),
                    Point2::new(max.x.max(p.x), max.y.max(p.y)),
                )
            })
    }

    /// Returns the segments joining consecutive control points.
    ///
    /// Empty for a single-point curve.
    pub fn control_polygon(&self) -> Vec<Segment2<F>> {
        self.points
            .windows(2)
            .map(|pair| Segment2::new(pair[0], pair[1]))
            .collect()
    }

    /// Returns the length of the curve approximated by a polyline with
    /// `step_count` steps.
    pub fn arc_length(&self, step_count: usize) -> Result<F> {
        let points = self.to_polyline(step_count)?;
        Ok(points
            .windows(2)
            .fold(F::zero(), |length, pair| length + pair[0].distance(pair[1])))
    }
}

impl<F: Float + SampleUniform> BezierCurve2<F> {
    /// Creates a curve from randomly generated control points.
    ///
    /// See [`random_control_points`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &RandomPointsConfig<F>) -> Result<Self> {
        Self::new(random_control_points(rng, config)?)
    }
}

/// Collapses `row` in place and returns the point at `t`.
///
/// After the pass for order `k`, `row[..n - k]` holds the k-th row of the
/// de Casteljau triangle.
fn de_casteljau<F: Float>(row: &mut [Point2<F>], t: F) -> Point2<F> {
    for remaining in (1..row.len()).rev() {
        for i in 0..remaining {
            row[i] = row[i].lerp(row[i + 1], t);
        }
    }
    row[0]
}

/// Parameter of sample `i` in a sweep of `step_count` steps.
///
/// Computed as a ratio rather than accumulated, so the sweep ends on exactly 1.
pub(crate) fn step_param<F: Float>(i: usize, step_count: usize) -> F {
    if i >= step_count {
        return F::one();
    }
    F::from(i as f64 / step_count as f64).unwrap_or_else(F::one)
}

fn check_control_points<F>(points: &[Point2<F>]) -> Result<()> {
    if points.is_empty() {
        return Err(CurveError::invalid("at least one control point is required"));
    }
    Ok(())
}

pub(crate) fn check_step_count(step_count: usize) -> Result<()> {
    if step_count == 0 {
        return Err(CurveError::invalid("step count must be at least 1"));
    }
    Ok(())
}
