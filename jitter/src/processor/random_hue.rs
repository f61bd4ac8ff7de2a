//! The random hue algorithm.
//!
//! Each pixel is converted to HLS, its hue shifted by one random offset in
//! degrees and clamped into `[0, 180]`, and converted back to RGB.

use crate::{
    common::*, element::Element, processor::PhotometricTransform, sampler::RandomScalarSampler,
    shape::ImageShape, write::*,
};

/// The upper bound of the shifted hue in degrees.
pub const MAX_SHIFTED_HUE: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomHueInit {
    /// The maximum hue offset in degrees.
    pub max_hue: R64,
}

impl RandomHueInit {
    pub fn build(self) -> Result<RandomHue> {
        let Self { max_hue } = self;
        ensure!(max_hue >= 0.0, "max_hue must be non-negative");

        Ok(RandomHue {
            sampler: RandomScalarSampler::new(max_hue.raw())?,
        })
    }
}

impl Default for RandomHueInit {
    fn default() -> Self {
        Self { max_hue: r64(0.0) }
    }
}

#[derive(Debug, Clone)]
pub struct RandomHue {
    sampler: RandomScalarSampler,
}

impl PhotometricTransform for RandomHue {
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

        let alpha = self.sampler.sample_additive(rng);
        debug!("random hue: alpha = {}", alpha);

        // gray images have no hue, and a zero range leaves the hue unchanged
        if !shape.is_rgb() || self.sampler.is_degenerate() {
            return assign_map(output, input, req, |value| value);
        }

        assign_map_pixels(output, input, req, |pixel| {
            let rgb = Rgb::from(pixel.map(T::to_scalar));
            shift_hue(rgb, alpha, T::epsilon())
                .to_rgb()
                .into_array()
                .map(T::from_scalar)
        })
    }
}

/// Converts `rgb` to HLS and shifts its hue by `alpha` degrees, clamped into
/// `[0, MAX_SHIFTED_HUE]`.
///
/// Pixels whose channel spread does not exceed `epsilon`, the machine epsilon
/// of the stored element type, are achromatic and keep their gray level.
pub fn shift_hue(rgb: Rgb<f64>, alpha: f64, epsilon: f64) -> Hls<f64> {
    rgb.to_hls_with_epsilon(epsilon)
        .shift_hue_clamped(alpha, 0.0, MAX_SHIFTED_HUE)
}
