//! Bottom strip extraction

use image::{DynamicImage, GenericImageView, ImageBuffer};
use log::{debug, info};

use crate::errors::StatusResult;
use crate::geometry::Region;

use super::PixelBuffer;

/// Crop the bottom `strip_height` rows of an image, full width
///
/// The height is validated before anything is allocated. Pixels are copied
/// by value; the output has the source's width and exactly `strip_height`
/// rows.
///
/// # Arguments
/// * `source` - Image to crop from
/// * `strip_height` - Number of rows to keep, counted from the bottom edge
///
/// # Returns
/// The cropped strip, or `InvalidHeight`/`HeightExceedsImage`
pub fn crop_bottom_strip<I>(source: &I, strip_height: i64) -> StatusResult<PixelBuffer<I::Pixel>>
where
    I: GenericImageView,
{
    let (width, height) = source.dimensions();
    let region = Region::bottom_strip(width, height, strip_height)?;
    debug!("Cropping region x={}, y={}, width={}, height={}",
           region.x, region.y, region.width, region.height);

    let mut strip = ImageBuffer::new(region.width, region.height);
    for y in 0..region.height {
        for x in 0..region.width {
            strip.put_pixel(x, y, source.get_pixel(region.x + x, region.y + y));
        }
    }

    Ok(strip)
}

/// Crop the bottom strip of a decoded image, keeping its pixel layout
///
/// 8-bit, 16-bit and float images are cropped in their own sample type.
/// Layouts the dispatcher does not know are cropped as 8-bit RGBA.
pub fn crop_dynamic(source: &DynamicImage, strip_height: i64) -> StatusResult<DynamicImage> {
    info!("Extracting {} rows from {}x{} {:?} image",
          strip_height, source.width(), source.height(), source.color());

    let strip = match source {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(crop_bottom_strip(buf, strip_height)?),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(crop_bottom_strip(buf, strip_height)?),
        other => DynamicImage::ImageRgba8(crop_bottom_strip(&other.to_rgba8(), strip_height)?),
    };

    Ok(strip)
}
