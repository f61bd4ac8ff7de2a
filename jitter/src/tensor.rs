//! Applying photometric transforms to `tch` tensors.

use crate::{common::*, processor::PhotometricTransform};

pub trait TensorPhotometricExt {
    /// Applies `transform` to a `[channels, height, width]` tensor.
    ///
    /// The result has the kind and device of the input.
    fn f_random_photometric<P, R>(&self, transform: &P, rng: &mut R) -> Result<Tensor>
    where
        P: PhotometricTransform,
        R: Rng + ?Sized;

    fn random_photometric<P, R>(&self, transform: &P, rng: &mut R) -> Tensor
    where
        P: PhotometricTransform,
        R: Rng + ?Sized,
    {
        self.f_random_photometric(transform, rng).unwrap()
    }
}

impl TensorPhotometricExt for Tensor {
    fn f_random_photometric<P, R>(&self, transform: &P, rng: &mut R) -> Result<Tensor>
    where
        P: PhotometricTransform,
        R: Rng + ?Sized,
    {
        tch::no_grad(|| -> Result<_> {
            let (channels, height, width) = self.size3()?;
            let kind = self.kind();
            let device = self.device();

            let values: Vec<f32> = self
                .to_kind(Kind::Float)
                .to_device(Device::Cpu)
                .contiguous()
                .view([-1])
                .into();
            let input = Array3::from_shape_vec(
                (channels as usize, height as usize, width as usize),
                values,
            )?;

            let output = transform.apply(input.view(), rng)?;
            let output = Tensor::of_slice(&output.into_raw_vec())
                .view([channels, height, width])
                .to_kind(kind)
                .to_device(device);

            Ok(output)
        })
    }
}
