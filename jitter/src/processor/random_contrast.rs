//! The random contrast algorithm.
//!
//! The image is first reduced to its luma-weighted gray mean, then every
//! element is mapped by `x * alpha + (1 - alpha) * gray_mean`, which scales
//! the image around its gray mean instead of around zero.

use crate::{
    common::*, element::Element, processor::PhotometricTransform, reduce::gray_mean,
    sampler::RandomScalarSampler, shape::ImageShape, write::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomContrastInit {
    pub max_contrast: R64,
}

impl RandomContrastInit {
    pub fn build(self) -> Result<RandomContrast> {
        let Self { max_contrast } = self;
        ensure!(max_contrast >= 0.0, "max_contrast must be non-negative");

        Ok(RandomContrast {
            sampler: RandomScalarSampler::new(max_contrast.raw())?,
        })
    }
}

impl Default for RandomContrastInit {
    fn default() -> Self {
        Self {
            max_contrast: r64(0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomContrast {
    sampler: RandomScalarSampler,
}

impl PhotometricTransform for RandomContrast {
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
        let gray_mean = gray_mean(input.view())?;
        let beta = (1.0 - alpha) * gray_mean;
        debug!(
            "random contrast: alpha = {}, gray_mean = {}, beta = {}",
            alpha, gray_mean, beta
        );

        assign_map(output, input, req, |value| {
            T::from_scalar(value.to_scalar() * alpha + beta)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn gradient_image() -> Array3<f64> {
        Array3::from_shape_fn((3, 5, 4), |(c, h, w)| {
            ((c * 7 + h * 3 + w) % 11) as f64 / 10.0
        })
    }

    #[test]
    fn contrast_preserves_gray_mean() -> Result<()> {
        let transform = RandomContrastInit {
            max_contrast: r64(0.8),
        }
        .build()?;
        let input = gradient_image();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..10 {
            let output = transform.apply(input.view(), &mut rng)?;
            assert_abs_diff_eq!(
                gray_mean(output.view())?,
                gray_mean(input.view())?,
                epsilon = 1e-9
            );
        }
        Ok(())
    }

    #[test]
    fn contrast_is_affine_around_gray_mean() -> Result<()> {
        let transform = RandomContrastInit {
            max_contrast: r64(0.5),
        }
        .build()?;
        let input = gradient_image();
        let mean = gray_mean(input.view())?;
        let output = transform.apply(input.view(), &mut StdRng::seed_from_u64(9))?;

        // recover alpha from one element whose value differs from the mean
        let index = input
            .indexed_iter()
            .find(|&(_, &value)| (value - mean).abs() > 0.1)
            .map(|(index, _)| index)
            .ok_or_else(|| format_err!("no element far from the mean"))?;
        let alpha = (output[index] - mean) / (input[index] - mean);
        assert!((0.5..=1.5).contains(&alpha));

        Zip::from(&output).and(&input).for_each(|&out, &inp| {
            assert_abs_diff_eq!(out, inp * alpha + (1.0 - alpha) * mean, epsilon = 1e-9);
        });
        Ok(())
    }

    #[test]
    fn contrast_on_single_channel() -> Result<()> {
        let transform = RandomContrastInit {
            max_contrast: r64(0.3),
        }
        .build()?;
        let input = Array3::from_shape_vec((1, 2, 2), vec![0.1f64, 0.2, 0.3, 0.6])?;
        let output = transform.apply(input.view(), &mut StdRng::seed_from_u64(2))?;
        assert_abs_diff_eq!(output.mean().unwrap(), 0.3, epsilon = 1e-12);
        Ok(())
    }
}
