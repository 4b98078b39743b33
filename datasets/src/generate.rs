//! Noisy samples of a radially damped cosine

use log::info;
use rand::Rng;
use svrkit::{Point, Sample, SampleSet};

/// Smallest number of samples drawn by [`Oracle::samples`]
pub const MIN_SAMPLES: usize = 50;

/// Draw a uniform value in `[min, max)`
///
/// Returns `min` when both bounds are equal.
pub fn uniform(min: f64, max: f64, rng: &mut impl Rng) -> f64 {
    min + (max - min) * rng.gen::<f64>()
}

/// `exp(-2.5 r) cos(8 sqrt(r))` with `r = x² + y²`
pub fn clean_signal(x: f64, y: f64) -> f64 {
    let r = x * x + y * y;
    (-2.5 * r).exp() * (8.0 * r.sqrt()).cos()
}

/// The clean signal plus uniform noise in `[-noise_level, noise_level)`
pub fn evaluate(x: f64, y: f64, noise_level: f64, rng: &mut impl Rng) -> f64 {
    clean_signal(x, y) + uniform(-noise_level, noise_level, rng)
}

/// Source of noisy observations of [`clean_signal`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oracle {
    noise_level: f64,
}

impl Default for Oracle {
    fn default() -> Self {
        Oracle::new(Self::DEFAULT_NOISE_LEVEL)
    }
}

impl Oracle {
    pub const DEFAULT_NOISE_LEVEL: f64 = 0.2;

    /// # Panics
    ///
    /// If `noise_level` is negative or not finite.
    pub fn new(noise_level: f64) -> Self {
        assert!(
            noise_level.is_finite() && noise_level >= 0.0,
            "noise level should be non-negative and finite, but is {}",
            noise_level
        );
        Oracle { noise_level }
    }

    /// Oracle without noise
    pub fn clean() -> Self {
        Oracle { noise_level: 0.0 }
    }

    pub fn noise_level(&self) -> f64 {
        self.noise_level
    }

    /// Standard deviation of the noise, `U(a, b)` has a variance of `(b - a)² / 12`
    pub fn noise_std_dev(&self) -> f64 {
        (4.0 * self.noise_level * self.noise_level / 12.0).sqrt()
    }

    pub fn observe(&self, point: &Point, rng: &mut impl Rng) -> f64 {
        if self.noise_level == 0.0 {
            clean_signal(point.x, point.y)
        } else {
            evaluate(point.x, point.y, self.noise_level, rng)
        }
    }

    /// Observe `nsamples` points drawn uniformly from `[-1, 1)²`
    ///
    /// Fewer than [`MIN_SAMPLES`] are never drawn, smaller requests are raised to
    /// that floor.
    pub fn samples(&self, nsamples: usize, rng: &mut impl Rng) -> SampleSet {
        let nsamples = if nsamples < MIN_SAMPLES {
            info!("using at least {} samples", MIN_SAMPLES);
            MIN_SAMPLES
        } else {
            nsamples
        };

        (0..nsamples)
            .map(|_| {
                let point = Point::new(uniform(-1.0, 1.0, rng), uniform(-1.0, 1.0, rng));
                Sample::new(point, self.observe(&point, rng))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn origin_is_one() {
        assert_eq!(clean_signal(0.0, 0.0), 1.0);

        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        assert_eq!(evaluate(0.0, 0.0, 0.0, &mut rng), 1.0);
    }

    #[test]
    fn signal_is_radial() {
        assert_abs_diff_eq!(clean_signal(0.3, 0.4), clean_signal(0.5, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(clean_signal(-0.3, 0.4), clean_signal(0.0, -0.5), epsilon = 1e-12);
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform(-2.0, 3.0, &mut rng);
            assert!((-2.0..3.0).contains(&v));
        }
        assert_eq!(uniform(1.5, 1.5, &mut rng), 1.5);
    }

    #[test]
    fn noise_is_bounded() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let level = 0.2;
        for i in 0..500 {
            let (x, y) = (i as f64 / 500.0, 1.0 - i as f64 / 250.0);
            let clean = clean_signal(x, y);
            let noisy = evaluate(x, y, level, &mut rng);
            assert!(noisy >= clean - level && noisy <= clean + level);
        }
    }

    #[test]
    fn clean_oracle_is_deterministic() {
        let oracle = Oracle::clean();
        let point = Point::new(0.1, -0.7);
        let mut a = Xoshiro256Plus::seed_from_u64(1);
        let mut b = Xoshiro256Plus::seed_from_u64(2);
        assert_eq!(oracle.observe(&point, &mut a), oracle.observe(&point, &mut b));
    }

    #[test]
    fn sample_count_has_a_floor() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let oracle = Oracle::default();

        assert_eq!(oracle.samples(0, &mut rng).len(), MIN_SAMPLES);
        assert_eq!(oracle.samples(49, &mut rng).len(), MIN_SAMPLES);
        assert_eq!(oracle.samples(50, &mut rng).len(), 50);
        assert_eq!(oracle.samples(123, &mut rng).len(), 123);
    }

    #[test]
    fn samples_lie_in_the_unit_square() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let oracle = Oracle::new(0.1);
        for sample in &oracle.samples(200, &mut rng) {
            assert!((-1.0..1.0).contains(&sample.input.x));
            assert!((-1.0..1.0).contains(&sample.input.y));
            let clean = clean_signal(sample.input.x, sample.input.y);
            assert!((sample.output - clean).abs() <= 0.1 + 1e-12);
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let oracle = Oracle::default();
        let a = oracle.samples(60, &mut Xoshiro256Plus::seed_from_u64(9));
        let b = oracle.samples(60, &mut Xoshiro256Plus::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn noise_deviation() {
        assert_abs_diff_eq!(Oracle::default().noise_std_dev(), 0.4 / 12f64.sqrt(), epsilon = 1e-12);
        assert_eq!(Oracle::clean().noise_std_dev(), 0.0);
    }
}
