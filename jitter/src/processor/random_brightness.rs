//! The random brightness algorithm.

use crate::{
    common::*, element::Element, processor::PhotometricTransform, sampler::RandomScalarSampler,
    shape::ImageShape, write::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomBrightnessInit {
    pub max_brightness: R64,
}

impl RandomBrightnessInit {
    pub fn build(self) -> Result<RandomBrightness> {
        let Self { max_brightness } = self;
        ensure!(max_brightness >= 0.0, "max_brightness must be non-negative");

        Ok(RandomBrightness {
            sampler: RandomScalarSampler::new(max_brightness.raw())?,
        })
    }
}

impl Default for RandomBrightnessInit {
    fn default() -> Self {
        Self {
            max_brightness: r64(0.0),
        }
    }
}

/// Scales every element by `1 + U(-max_brightness, max_brightness)`.
#[derive(Debug, Clone)]
pub struct RandomBrightness {
    sampler: RandomScalarSampler,
}

impl PhotometricTransform for RandomBrightness {
    fn forward<T, R>(
        &self,
        input: ArrayView3<'_, T>,
        output: ArrayViewMut3<'_, T>,
        req: WriteRequest,
        rng: &mut R,
    ) -> Result<()>
    where
        T: Element,
        R: Rng + ?Sized,
    {
        let shape = ImageShape::of(&input)?;
        shape.ensure_same(&output)?;

        let alpha = self.sampler.sample_multiplicative(rng);
        debug!("random brightness: alpha = {}", alpha);

        assign_map(output, input, req, |value| {
            T::from_scalar(value.to_scalar() * alpha)
        })
    }
}
