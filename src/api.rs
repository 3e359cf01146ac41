//! Pipeline entry points
//!
//! Each function runs one tool end to end: filesystem guards, decoding,
//! geometry validation, pixel transfer, encoding and writing. Nothing is
//! written unless every check before the write has passed.

use std::path::Path;

use image::DynamicImage;
use log::info;

use crate::errors::{ImageRole, StatusResult};
use crate::io::image_io::{ensure_input_exists, ensure_output_absent, load_image, save_image};
use crate::raster::{composite_dynamic, crop_dynamic};

/// Extract the bottom `height` rows of `input` into a new image at `output`
///
/// # Arguments
/// * `input` - Source image path
/// * `height` - Strip height in rows, counted from the bottom edge
/// * `output` - Path of the image to create; must not exist yet
pub fn extract_bottom_strip(input: &Path, height: i64, output: &Path) -> StatusResult<()> {
    info!("Extracting {} row status bar from {} to {}", height, input.display(), output.display());

    ensure_input_exists(input)?;
    ensure_output_absent(output)?;

    let source = load_image(input, ImageRole::Input)?;
    let strip = crop_dynamic(&source, height)?;
    save_image(strip, output)?;

    info!("Status bar written to {}", output.display());
    Ok(())
}

/// Replace the bottom of `input` with `status_bar` and write the result to `output`
///
/// # Arguments
/// * `input` - Base image path
/// * `status_bar` - Status bar image path; must be as wide as the base and no taller
/// * `output` - Path of the image to create; must not exist yet
pub fn composite_status_bar(input: &Path, status_bar: &Path, output: &Path) -> StatusResult<()> {
    info!("Compositing {} onto {} into {}", status_bar.display(), input.display(), output.display());

    let base = load_image(input, ImageRole::Input)?;
    let bar = load_image(status_bar, ImageRole::StatusBar)?;
    composite_images(&base, &bar, output)
}

/// Replace the bottom of an already decoded image and write the result to `output`
///
/// # Arguments
/// * `base` - Decoded base image
/// * `bar` - Decoded status bar image
/// * `output` - Path of the image to create; must not exist yet
pub fn composite_images(base: &DynamicImage, bar: &DynamicImage, output: &Path) -> StatusResult<()> {
    ensure_output_absent(output)?;

    let merged = composite_dynamic(base, bar)?;
    save_image(merged, output)?;

    info!("Composite written to {}", output.display());
    Ok(())
}
