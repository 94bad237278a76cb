//! casteljau - N-th order Bézier curves
//!
//! Evaluates the Bézier curve defined by any number of control points with
//! de Casteljau's algorithm and discretizes it into a polyline. The engine is
//! pure computation: callers hand it control points and get points back.

pub mod curves;
pub mod error;
pub mod primitives;
pub mod sampling;
#[cfg(feature = "simd")]
pub mod simd;

pub use curves::{BezierCurve2, DEFAULT_STEP_COUNT};
pub use error::{CurveError, Result};
pub use primitives::{Point2, Segment2};
pub use sampling::{random_control_points, RandomPointsConfig};
