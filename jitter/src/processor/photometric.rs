//! The common interface of photometric transforms.

use super::{
    RandomBrightness, RandomBrightnessInit, RandomContrast, RandomContrastInit, RandomHue,
    RandomHueInit, RandomSaturation, RandomSaturationInit,
};
use crate::{common::*, element::Element, write::WriteRequest};

/// A transform that perturbs pixel intensities by one random scalar per call.
pub trait PhotometricTransform {
    /// Transforms `input` and commits the result into `output` as `req` asks.
    ///
    /// The scalar is drawn from `rng` exactly once. The input is validated
    /// before anything is written, so an error leaves `output` untouched.
    fn forward<T, R>(
        &self,
        input: ArrayView3<'_, T>,
        output: ArrayViewMut3<'_, T>,
        req: WriteRequest,
        rng: &mut R,
    ) -> Result<()>
    where
        T: Element,
        R: Rng + ?Sized;

    /// Transforms `input` into a newly allocated array.
    fn apply<T, R>(&self, input: ArrayView3<'_, T>, rng: &mut R) -> Result<Array3<T>>
    where
        T: Element,
        R: Rng + ?Sized,
    {
        let mut output = Array3::zeros(input.raw_dim());
        self.forward(input, output.view_mut(), WriteRequest::Overwrite, rng)?;
        Ok(output)
    }

    /// Transforms `image` in place.
    fn apply_<T, R>(&self, image: ArrayViewMut3<'_, T>, rng: &mut R) -> Result<()>
    where
        T: Element,
        R: Rng + ?Sized,
    {
        let input = image.to_owned();
        self.forward(input.view(), image, WriteRequest::InPlace, rng)
    }
}

/// The configuration of any one photometric transform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RandomPhotometricInit {
    RandomBrightness(RandomBrightnessInit),
    RandomContrast(RandomContrastInit),
    RandomSaturation(RandomSaturationInit),
    RandomHue(RandomHueInit),
}

impl RandomPhotometricInit {
    pub fn build(self) -> Result<RandomPhotometric> {
        let transform = match self {
            Self::RandomBrightness(init) => RandomPhotometric::Brightness(init.build()?),
            Self::RandomContrast(init) => RandomPhotometric::Contrast(init.build()?),
            Self::RandomSaturation(init) => RandomPhotometric::Saturation(init.build()?),
            Self::RandomHue(init) => RandomPhotometric::Hue(init.build()?),
        };
        Ok(transform)
    }

    /// The name and range bound of the configured transform.
    pub fn describe(&self) -> (&'static str, R64) {
        match self {
            Self::RandomBrightness(init) => ("max_brightness", init.max_brightness),
            Self::RandomContrast(init) => ("max_contrast", init.max_contrast),
            Self::RandomSaturation(init) => ("max_saturation", init.max_saturation),
            Self::RandomHue(init) => ("max_hue", init.max_hue),
        }
    }
}

/// Any one photometric transform.
#[derive(Debug, Clone)]
pub enum RandomPhotometric {
    Brightness(RandomBrightness),
    Contrast(RandomContrast),
    Saturation(RandomSaturation),
    Hue(RandomHue),
}

impl PhotometricTransform for RandomPhotometric {
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
        match self {
            Self::Brightness(transform) => transform.forward(input, output, req, rng),
            Self::Contrast(transform) => transform.forward(input, output, req, rng),
            Self::Saturation(transform) => transform.forward(input, output, req, rng),
            Self::Hue(transform) => transform.forward(input, output, req, rng),
        }
    }
}
