//! Scalar sampling from a symmetric range.

use crate::common::*;

/// Draws scalars uniformly from `[-max, max]`.
///
/// Every transform takes exactly one draw per invocation and shares it across
/// all pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomScalarSampler {
    max: f64,
}

impl RandomScalarSampler {
    pub fn new(max: f64) -> Result<Self> {
        ensure!(
            max.is_finite() && max >= 0.0,
            "the range bound must be finite and non-negative, but get {}",
            max
        );
        Ok(Self { max })
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true if every draw is zero.
    pub fn is_degenerate(&self) -> bool {
        self.max == 0.0
    }

    /// Draws `U(-max, max)`.
    pub fn sample_additive<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        let draw = rng.gen_range(-self.max..=self.max);
        trace!("sampled {} from [-{}, {}]", draw, self.max, self.max);
        draw
    }

    /// Draws `1 + U(-max, max)`.
    pub fn sample_multiplicative<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        1.0 + self.sample_additive(rng)
    }
}
