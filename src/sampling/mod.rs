//! Control point generation.

mod random;

pub use random::{random_control_points, RandomPointsConfig};
