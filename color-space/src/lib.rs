//! Per-pixel color space conversions used by the photometric transforms.

mod common;

pub use component::*;
pub mod component;

pub use hls::*;
pub mod hls;

pub use luma::*;
pub mod luma;

pub mod prelude {
    pub use crate::hls::{hls_to_rgb, rgb_to_hls, rgb_to_hls_with_epsilon, Hls, Rgb};
    pub use crate::luma::{luma, LUMA_WEIGHTS};
}
