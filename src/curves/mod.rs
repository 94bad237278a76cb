//! Curve evaluation and discretization.

mod bezier;

pub use bezier::{BezierCurve2, DEFAULT_STEP_COUNT};
#[cfg(feature = "simd")]
pub(crate) use bezier::{check_step_count, step_param};
