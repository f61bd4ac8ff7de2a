//! Conversions between `image` buffers and channel-major arrays.
//!
//! Arrays produced here hold `f32` components in `[0, 1]`, the domain the
//! color formulas assume.

use crate::common::*;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel, RgbImage};

pub trait IntoImageArray {
    fn into_image_array(self) -> Array3<f32>;
}

impl<P, Container> IntoImageArray for &ImageBuffer<P, Container>
where
    P: Pixel<Subpixel = u8> + 'static,
    Container: Deref<Target = [u8]>,
{
    fn into_image_array(self) -> Array3<f32> {
        let (width, height) = self.dimensions();
        let channels = P::CHANNEL_COUNT as usize;
        let mut array = Array3::zeros((channels, height as usize, width as usize));

        self.enumerate_pixels().for_each(|(x, y, pixel)| {
            pixel
                .channels()
                .iter()
                .enumerate()
                .for_each(|(c, &component)| {
                    array[[c, y as usize, x as usize]] = component as f32 / 255.0;
                });
        });

        array
    }
}

impl IntoImageArray for &DynamicImage {
    /// Gray images keep one channel. Everything else is converted to 8-bit
    /// RGB, dropping the alpha channel if any.
    fn into_image_array(self) -> Array3<f32> {
        match self {
            DynamicImage::ImageLuma8(image) => image.into_image_array(),
            DynamicImage::ImageRgb8(image) => image.into_image_array(),
            image => {
                debug!("converting {:?} image to 8-bit RGB", image.color());
                (&image.to_rgb8()).into_image_array()
            }
        }
    }
}

/// Converts a 1 or 3-channel array in `[0, 1]` into an 8-bit image.
///
/// Components outside of the unit range are clamped.
pub fn image_array_to_dynamic_image(array: ArrayView3<'_, f32>) -> Result<DynamicImage> {
    let (channels, height, width) = array.dim();
    let to_u8 = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;

    let image = match channels {
        1 => DynamicImage::ImageLuma8(GrayImage::from_fn(width as u32, height as u32, |x, y| {
            Luma([to_u8(array[[0, y as usize, x as usize]])])
        })),
        3 => DynamicImage::ImageRgb8(RgbImage::from_fn(width as u32, height as u32, |x, y| {
            let (x, y) = (x as usize, y as usize);
            image::Rgb([
                to_u8(array[[0, y, x]]),
                to_u8(array[[1, y, x]]),
                to_u8(array[[2, y, x]]),
            ])
        })),
        _ => bail!("channel size must be 1 or 3, but get {}", channels),
    };

    Ok(image)
}
