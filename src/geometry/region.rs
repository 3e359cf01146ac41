//! Region structure for the status bar area
//!
//! A region is a rectangle in pixel coordinates, with (0,0) at the top-left
//! corner of the image. Status bar regions are always full width and
//! anchored to the bottom edge.

use crate::errors::StatusResult;

use super::validation::validate_strip_height;

/// Rectangular area of an image (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Derive the full-width strip at the bottom of an image
    ///
    /// # Arguments
    /// * `image_width` - Width of the image
    /// * `image_height` - Height of the image
    /// * `strip_height` - Requested number of rows, counted from the bottom
    ///
    /// # Returns
    /// The region, or a validation error when the height is not positive or
    /// is taller than the image
    pub fn bottom_strip(image_width: u32, image_height: u32, strip_height: i64) -> StatusResult<Self> {
        let height = validate_strip_height(image_height, strip_height)?;
        Ok(Region::new(0, image_height - height, image_width, height))
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the pixel (x, y) lies inside the region
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }

    /// Whether the region covers an entire image of the given size
    pub fn is_full_image(&self, image_width: u32, image_height: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == image_width && self.height == image_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_bottom_strip_is_anchored() {
        let region = Region::bottom_strip(800, 600, 60).unwrap();
        assert_eq!(region, Region::new(0, 540, 800, 60));
        assert_eq!(region.end_y(), 600);
        assert_eq!(region.end_x(), 800);
        assert!(region.contains(0, 540));
        assert!(region.contains(799, 599));
        assert!(!region.contains(0, 539));
        assert!(!region.is_full_image(800, 600));
    }

    #[test]
    fn test_full_height_strip() {
        let region = Region::bottom_strip(800, 600, 600).unwrap();
        assert_eq!(region.y, 0);
        assert!(region.is_full_image(800, 600));
    }

    #[test]
    fn test_invalid_strip_is_an_error() {
        let err = Region::bottom_strip(800, 600, 601).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeightExceedsImage);
        let err = Region::bottom_strip(800, 600, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHeight);
    }
}
