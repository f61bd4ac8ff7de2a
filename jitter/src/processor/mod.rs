//! Random photometric transforms.

pub mod photometric;
pub mod random_brightness;
pub mod random_contrast;
pub mod random_hue;
pub mod random_saturation;

pub use photometric::*;
pub use random_brightness::*;
pub use random_contrast::*;
pub use random_hue::*;
pub use random_saturation::*;
