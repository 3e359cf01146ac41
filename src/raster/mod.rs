//! Pixel-region transfer
//!
//! Cropping the bottom strip out of an image and replacing the bottom strip
//! of an image with another one. The generic functions work on any
//! `GenericImageView` and copy pixels by value in the source's own pixel
//! type; the `*_dynamic` variants dispatch on the layout of a decoded image.

mod compositor;
mod extractor;

use image::{ImageBuffer, Pixel};

pub use compositor::{composite_dynamic, conform_layout, replace_bottom_strip};
pub use extractor::{crop_bottom_strip, crop_dynamic};

/// Owned image buffer holding pixels of type `P`
pub type PixelBuffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
