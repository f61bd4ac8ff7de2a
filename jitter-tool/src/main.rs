mod config;

use anyhow::{Context, Result};
use clap::Parser;
use color_space::{hls_to_rgb, rgb_to_hls};
use config::Config;
use jitter::{image_array_to_dynamic_image, IntoImageArray, PhotometricTransform};
use log::info;
use prettytable::{cell, row, Table};
use rand::prelude::*;
use std::{
    env,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Parser)]
/// Randomized photometric image augmentation
enum Opts {
    /// Augment an image file
    Apply {
        /// configuration file
        config_file: PathBuf,
        /// input image file
        input_file: PathBuf,
        /// output image file
        output_file: PathBuf,
        /// random engine seed, overriding the configuration
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Show the HLS representation of an RGB color in [0, 1]
    Hls { r: f64, g: f64, b: f64 },
    /// Show a configuration file
    Info {
        /// configuration file
        config_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();

    match Opts::parse() {
        Opts::Apply {
            config_file,
            input_file,
            output_file,
            seed,
        } => {
            apply(&config_file, &input_file, &output_file, seed)?;
        }
        Opts::Hls { r, g, b } => {
            hls(r, g, b);
        }
        Opts::Info { config_file } => {
            show_info(&config_file)?;
        }
    }

    Ok(())
}

fn load_config(config_file: &Path) -> Result<Config> {
    Config::open(config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))
}

fn apply(
    config_file: &Path,
    input_file: &Path,
    output_file: &Path,
    seed: Option<u64>,
) -> Result<()> {
    let Config {
        transform,
        write_request,
        seed: config_seed,
    } = load_config(config_file)?;
    let transform = transform.build()?;

    let mut rng = match seed.or(config_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let image = image::open(input_file)
        .with_context(|| format!("failed to open image '{}'", input_file.display()))?;
    let input = (&image).into_image_array();
    let (channels, height, width) = input.dim();
    info!(
        "loaded '{}' with {} channels, {}x{}",
        input_file.display(),
        channels,
        width,
        height
    );

    let mut output = input.clone();
    transform.forward(input.view(), output.view_mut(), write_request, &mut rng)?;

    image_array_to_dynamic_image(output.view())?
        .save(output_file)
        .with_context(|| format!("failed to save image '{}'", output_file.display()))?;
    info!(
        "saved '{}' using {} write request",
        output_file.display(),
        write_request
    );

    Ok(())
}

fn hls(r: f64, g: f64, b: f64) {
    let (h, l, s) = rgb_to_hls(r, g, b);
    let (rr, gg, bb) = hls_to_rgb(h, l, s);

    let mut table = Table::new();
    table.add_row(row!["space", "c0", "c1", "c2"]);
    table.add_row(row!["rgb", r, g, b]);
    table.add_row(row!["hls", h, l, s]);
    table.add_row(row!["rgb (round trip)", rr, gg, bb]);
    table.printstd();
}

fn show_info(config_file: &Path) -> Result<()> {
    let Config {
        transform,
        write_request,
        seed,
    } = load_config(config_file)?;
    let (name, bound) = transform.describe();

    let mut table = Table::new();
    table.add_row(row!["key", "value"]);
    table.add_row(row![name, bound]);
    table.add_row(row!["write_request", write_request]);
    table.add_row(row![
        "seed",
        seed.map(|seed| seed.to_string())
            .unwrap_or_else(|| "entropy".to_string())
    ]);
    table.printstd();

    Ok(())
}
