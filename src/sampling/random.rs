//! Random control point generation.
//!
//! Produces demo control polygons: a fixed number of points with both
//! coordinates drawn uniformly from a half-open range. The random source is
//! injected, so a seeded rng gives reproducible curves and the curve itself
//! stays deterministic.

use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use rand::distr::Uniform;
use rand::Rng;

use crate::error::{CurveError, Result};
use crate::primitives::Point2;

/// Settings for [`random_control_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomPointsConfig<F> {
    /// Number of control points to generate.
    pub count: usize,
    /// Inclusive lower bound for both coordinates.
    pub min: F,
    /// Exclusive upper bound for both coordinates.
    pub max: F,
}

impl<F: Float> Default for RandomPointsConfig<F> {
    /// 9 points in [200, 1000) on both axes.
    fn default() -> Self {
        Self {
            count: 9,
            min: F::from(200.0).unwrap_or_else(F::zero),
            max: F::from(1000.0).unwrap_or_else(F::one),
        }
    }
}

/// Generates `config.count` control points with coordinates uniformly
/// distributed in `[config.min, config.max)`.
///
/// Returns [`CurveError::InvalidInput`] if `count` is 0, if either bound is
/// not finite, if `min >= max`, or if `max - min` overflows.
///
/// # Example
///
/// ```
/// use casteljau::{random_control_points, RandomPointsConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = random_control_points::<f64, _>(&mut rng, &RandomPointsConfig::default()).unwrap();
///
/// assert_eq!(points.len(), 9);
/// assert!(points.iter().all(|p| p.x >= 200.0 && p.x < 1000.0));
/// ```
pub fn random_control_points<F, R>(
    rng: &mut R,
    config: &RandomPointsConfig<F>,
) -> Result<Vec<Point2<F>>>
where
    F: Float + SampleUniform,
    R: Rng + ?Sized,
{
    if config.count == 0 {
        return Err(CurveError::invalid("at least one control point is required"));
    }
    if !config.min.is_finite() || !config.max.is_finite() {
        return Err(CurveError::invalid("coordinate bounds must be finite"));
    }
    if config.min >= config.max {
        return Err(CurveError::invalid("coordinate range is empty"));
    }

    // Rejects ranges whose width overflows, e.g. [-MAX, MAX)
    let coord = Uniform::new(config.min, config.max)
        .map_err(|_| CurveError::invalid("coordinate range is not finite"))?;

    let points: Vec<Point2<F>> = (0..config.count)
        .map(|_| Point2::new(rng.sample(&coord), rng.sample(&coord)))
        .collect();

    log::debug!("generated {} random control points", points.len());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_config() {
        let config: RandomPointsConfig<f64> = RandomPointsConfig::default();
        assert_eq!(config.count, 9);
        assert_eq!(config.min, 200.0);
        assert_eq!(config.max, 1000.0);
    }

    #[test]
    fn test_points_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = RandomPointsConfig {
            count: 500,
            min: -5.0,
            max: 5.0,
        };
        let points: Vec<Point2<f64>> = random_control_points(&mut rng, &config).unwrap();
        assert_eq!(points.len(), 500);
        for p in &points {
            assert!(p.x >= -5.0 && p.x < 5.0);
            assert!(p.y >= -5.0 && p.y < 5.0);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = RandomPointsConfig::default();
        let a: Vec<Point2<f64>> =
            random_control_points(&mut StdRng::seed_from_u64(99), &config).unwrap();
        let b: Vec<Point2<f64>> =
            random_control_points(&mut StdRng::seed_from_u64(99), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let config = RandomPointsConfig::default();
        let a: Vec<Point2<f64>> =
            random_control_points(&mut StdRng::seed_from_u64(1), &config).unwrap();
        let b: Vec<Point2<f64>> =
            random_control_points(&mut StdRng::seed_from_u64(2), &config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_f32_points() {
        let mut rng = StdRng::seed_from_u64(3);
        let points: Vec<Point2<f32>> =
            random_control_points(&mut rng, &RandomPointsConfig::default()).unwrap();
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.y >= 200.0 && p.y < 1000.0));
    }

    #[test]
    fn test_invalid_configs() {
        let mut rng = StdRng::seed_from_u64(0);

        let zero_count = RandomPointsConfig {
            count: 0,
            min: 0.0,
            max: 1.0,
        };
        let empty_range = RandomPointsConfig {
            count: 3,
            min: 1.0,
            max: 1.0,
        };
        let infinite = RandomPointsConfig {
            count: 3,
            min: 0.0,
            max: f64::INFINITY,
        };

        let overflowing_width = RandomPointsConfig {
            count: 3,
            min: -f64::MAX,
            max: f64::MAX,
        };

        for config in [zero_count, empty_range, infinite, overflowing_width] {
            let result = random_control_points(&mut rng, &config);
            assert!(matches!(result, Err(CurveError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_wide_finite_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = RandomPointsConfig {
            count: 4,
            min: -f64::MAX / 4.0,
            max: f64::MAX / 4.0,
        };
        let points: Vec<Point2<f64>> = random_control_points(&mut rng, &config).unwrap();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.is_finite()));
    }
}
