pub use anyhow::{bail, ensure, format_err, Context as _, Error, Result};
pub use color_space::{hls_to_rgb, luma, rgb_to_hls, Hls, Rgb, LUMA_WEIGHTS};
pub use log::{debug, trace, warn};
pub use ndarray::{
    Array3, ArrayBase, ArrayView3, ArrayViewMut3, Axis, Data, Ix3, Zip,
};
pub use noisy_float::prelude::*;
pub use num_traits::Zero;
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt::{self, Debug, Display},
    ops::Deref,
};
#[cfg(feature = "with-tch")]
pub use tch::{Device, Kind, Tensor};
