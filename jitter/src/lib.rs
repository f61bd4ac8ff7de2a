//! Randomized photometric augmentation of channel-major image arrays.

mod common;
pub mod convert;
pub mod element;
pub mod processor;
pub mod reduce;
pub mod sampler;
pub mod shape;
#[cfg(feature = "with-tch")]
pub mod tensor;
pub mod write;

pub use convert::*;
pub use element::*;
pub use processor::*;
pub use reduce::*;
pub use sampler::*;
pub use shape::*;
#[cfg(feature = "with-tch")]
pub use tensor::*;
pub use write::*;
