//! SIMD-accelerated curve evaluation.
//!
//! Evaluates `f64` curves at 4 parameter values per pass.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! casteljau = { version = "0.1", features = ["simd"] }
//! ```

mod bezier;
mod point;

pub use bezier::{to_polyline_batch, BezierCurve2x4};
pub use point::Point2x4;
