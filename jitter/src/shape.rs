use crate::common::*;

/// The validated shape of a channel-major image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageShape {
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl ImageShape {
    /// Reads the shape of `image`, which must have either 1 or 3 channels.
    pub fn of<S>(image: &ArrayBase<S, Ix3>) -> Result<Self>
    where
        S: Data,
    {
        let (channels, height, width) = image.dim();
        ensure!(
            matches!(channels, 1 | 3),
            "channel size must be 1 or 3, but get {}",
            channels
        );
        Ok(Self {
            channels,
            height,
            width,
        })
    }

    /// Checks that `output` has the same shape.
    pub fn ensure_same<S>(&self, output: &ArrayBase<S, Ix3>) -> Result<()>
    where
        S: Data,
    {
        let dim = output.dim();
        ensure!(
            dim == (self.channels, self.height, self.width),
            "output shape {:?} does not match input shape {:?}",
            dim,
            (self.channels, self.height, self.width)
        );
        Ok(())
    }

    pub fn num_pixels(&self) -> usize {
        self.height * self.width
    }

    pub fn is_rgb(&self) -> bool {
        self.channels == 3
    }
}
