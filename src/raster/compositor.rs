//! Bottom strip replacement
//!
//! Produces a copy of a base image whose bottom rows are overwritten by a
//! status bar image. This is a full replace: alpha in the bar is copied as
//! data, never blended with the base.

use image::{ColorType, DynamicImage, GenericImageView, ImageBuffer};
use log::{debug, info, warn};

use crate::errors::StatusResult;
use crate::geometry::{validate_composition_geometry, Region};

use super::PixelBuffer;

/// Replace the bottom rows of `base` with the pixels of `bar`
///
/// # Arguments
/// * `base` - Image providing the output dimensions and the untouched rows
/// * `bar` - Status bar; must be as wide as `base` and no taller
///
/// # Returns
/// A new image with `base`'s dimensions, or `WidthMismatch`/`HeightExceedsImage`
pub fn replace_bottom_strip<B, S>(base: &B, bar: &S) -> StatusResult<PixelBuffer<B::Pixel>>
where
    B: GenericImageView,
    S: GenericImageView<Pixel = B::Pixel>,
{
    let (base_width, base_height) = base.dimensions();
    let (bar_width, bar_height) = bar.dimensions();
    validate_composition_geometry(base_width, base_height, bar_width, bar_height)?;

    let region = Region::new(0, base_height - bar_height, bar_width, bar_height);
    debug!("Replacing region x={}, y={}, width={}, height={}",
           region.x, region.y, region.width, region.height);

    let mut output = ImageBuffer::new(base_width, base_height);
    for y in 0..base_height {
        for x in 0..base_width {
            output.put_pixel(x, y, base.get_pixel(x, y));
        }
    }

    for y in 0..region.height {
        for x in 0..region.width {
            output.put_pixel(region.x + x, region.y + y, bar.get_pixel(x, y));
        }
    }

    Ok(output)
}

/// Convert an image into the given channel layout
///
/// Used when a status bar was saved in a different layout than the base
/// image (for example an RGBA PNG bar and an RGB JPEG screenshot).
/// Unknown layouts fall back to 8-bit RGBA.
pub fn conform_layout(image: &DynamicImage, color: ColorType) -> DynamicImage {
    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        _ => DynamicImage::ImageRgba8(image.to_rgba8()),
    }
}

/// Replace the bottom strip of a decoded base image with a decoded status bar
///
/// Geometry is validated before anything else. The output keeps the base's
/// pixel layout; a bar in a different layout is converted first.
pub fn composite_dynamic(base: &DynamicImage, bar: &DynamicImage) -> StatusResult<DynamicImage> {
    info!("Compositing {}x{} {:?} status bar onto {}x{} {:?} image",
          bar.width(), bar.height(), bar.color(),
          base.width(), base.height(), base.color());

    validate_composition_geometry(base.width(), base.height(), bar.width(), bar.height())?;

    let conformed;
    let bar = if bar.color() == base.color() {
        bar
    } else {
        warn!("Converting status bar from {:?} to {:?} to match the input image",
              bar.color(), base.color());
        conformed = conform_layout(bar, base.color());
        &conformed
    };

    let output = match (base, bar) {
        (DynamicImage::ImageLuma8(b), DynamicImage::ImageLuma8(s)) => {
            DynamicImage::ImageLuma8(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageLumaA8(b), DynamicImage::ImageLumaA8(s)) => {
            DynamicImage::ImageLumaA8(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageRgb8(b), DynamicImage::ImageRgb8(s)) => {
            DynamicImage::ImageRgb8(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageRgba8(b), DynamicImage::ImageRgba8(s)) => {
            DynamicImage::ImageRgba8(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageLuma16(b), DynamicImage::ImageLuma16(s)) => {
            DynamicImage::ImageLuma16(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageLumaA16(b), DynamicImage::ImageLumaA16(s)) => {
            DynamicImage::ImageLumaA16(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageRgb16(b), DynamicImage::ImageRgb16(s)) => {
            DynamicImage::ImageRgb16(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageRgba16(b), DynamicImage::ImageRgba16(s)) => {
            DynamicImage::ImageRgba16(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageRgb32F(b), DynamicImage::ImageRgb32F(s)) => {
            DynamicImage::ImageRgb32F(replace_bottom_strip(b, s)?)
        }
        (DynamicImage::ImageRgba32F(b), DynamicImage::ImageRgba32F(s)) => {
            DynamicImage::ImageRgba32F(replace_bottom_strip(b, s)?)
        }
        (b, s) => DynamicImage::ImageRgba8(replace_bottom_strip(&b.to_rgba8(), &s.to_rgba8())?),
    };

    Ok(output)
}
