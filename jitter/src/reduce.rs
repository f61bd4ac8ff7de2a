//! The luminance reduction used by the contrast transform.

use crate::{common::*, element::Element, shape::ImageShape};

/// Computes the luma-weighted mean of an image.
///
/// Each channel plane is weighted by its BT.601 coefficient, summed over all
/// pixels and divided by the pixel count. A single-channel image is taken to
/// be luma already and weighted by one. Empty images have zero mean.
pub fn gray_mean<T>(image: ArrayView3<'_, T>) -> Result<f64>
where
    T: Element,
{
    let shape = ImageShape::of(&image)?;
    let weights: &[f64] = if shape.is_rgb() { &LUMA_WEIGHTS } else { &[1.0] };

    if shape.num_pixels() == 0 {
        warn!("computing gray mean of an empty image");
        return Ok(0.0);
    }

    let sum: f64 = image
        .outer_iter()
        .zip(weights)
        .map(|(plane, &weight)| plane.fold(0.0, |sum, &value| sum + value.to_scalar() * weight))
        .sum();
    let mean = sum / shape.num_pixels() as f64;
    trace!("gray mean = {}", mean);

    Ok(mean)
}
