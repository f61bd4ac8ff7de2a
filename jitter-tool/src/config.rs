//! Augmentation tool configuration format.

use anyhow::Result;
use jitter::{RandomPhotometricInit, WriteRequest};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The transform to apply.
    pub transform: RandomPhotometricInit,
    /// How results are written into the output image.
    ///
    /// The output image starts as a copy of the input image.
    #[serde(default)]
    pub write_request: WriteRequest,
    /// The random engine seed. The engine is seeded from entropy if unset.
    pub seed: Option<u64>,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}
