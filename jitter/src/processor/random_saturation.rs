//! The random saturation algorithm.

use crate::{
    common::*, element::Element, processor::PhotometricTransform, sampler::RandomScalarSampler,
    shape::ImageShape, write::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomSaturationInit {
    pub max_saturation: R64,
}

impl RandomSaturationInit {
    pub fn build(self) -> Result<RandomSaturation> {
        let Self { max_saturation } = self;
        ensure!(max_saturation >= 0.0, "max_saturation must be non-negative");

        Ok(RandomSaturation {
            sampler: RandomScalarSampler::new(max_saturation.raw())?,
        })
    }
}

impl Default for RandomSaturationInit {
    fn default() -> Self {
        Self {
            max_saturation: r64(0.0),
        }
    }
}

/// Blends every channel with the pixel's luma.
///
/// With `alpha = 1 + U(-max_saturation, max_saturation)`, each channel `x`
/// becomes `x * alpha + gray * (1 - alpha)`, oriented so that `alpha = 1`
/// is the identity. Single-channel images carry no saturation and are passed
/// through.
#[derive(Debug, Clone)]
pub struct RandomSaturation {
    sampler: RandomScalarSampler,
}

impl PhotometricTransform for RandomSaturation {
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
        let beta = 1.0 - alpha;
        debug!("random saturation: alpha = {}", alpha);

        match shape.channels {
            1 => assign_map(output, input, req, |value| value),
            3 => assign_map_pixels(output, input, req, |pixel| {
                let [r, g, b] = pixel.map(T::to_scalar);
                let gray = luma(r, g, b);
                [r, g, b].map(|value| T::from_scalar(value * alpha + gray * beta))
            }),
            channels => bail!("unsupported channel size {}", channels),
        }
    }
}
