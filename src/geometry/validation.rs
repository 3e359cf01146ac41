//! Geometry validation
//!
//! Pure checks run ahead of pixel transfer. Each check reports only the
//! first violated condition.

use log::debug;

use crate::errors::{StatusBarError, StatusResult};

/// Validates a requested strip height against the height of an image
///
/// # Arguments
/// * `image_height` - Height of the image the strip is taken from
/// * `requested_height` - Requested number of rows, counted from the bottom
///
/// # Returns
/// The height as an unsigned row count, or `InvalidHeight` when it is not
/// positive and `HeightExceedsImage` when it is taller than the image
pub fn validate_strip_height(image_height: u32, requested_height: i64) -> StatusResult<u32> {
    debug!("Validating strip height {} against image height {}", requested_height, image_height);

    if requested_height <= 0 {
        return Err(StatusBarError::InvalidHeight(requested_height));
    }

    if requested_height > i64::from(image_height) {
        return Err(StatusBarError::HeightExceedsImage {
            image_height,
            strip_height: requested_height as u64,
        });
    }

    // Bounded by image_height above, so the cast is lossless
    Ok(requested_height as u32)
}

/// Validates that a status bar can replace the bottom of a base image
///
/// Width is checked before height: a bar that is both too wide and too tall
/// is reported as a width mismatch.
///
/// # Arguments
/// * `base_width`, `base_height` - Dimensions of the base image
/// * `bar_width`, `bar_height` - Dimensions of the status bar image
pub fn validate_composition_geometry(
    base_width: u32,
    base_height: u32,
    bar_width: u32,
    bar_height: u32,
) -> StatusResult<()> {
    debug!("Validating composition of {}x{} bar onto {}x{} base",
           bar_width, bar_height, base_width, base_height);

    if bar_width != base_width {
        return Err(StatusBarError::WidthMismatch {
            image_width: base_width,
            bar_width,
        });
    }

    if bar_height > base_height {
        return Err(StatusBarError::HeightExceedsImage {
            image_height: base_height,
            strip_height: u64::from(bar_height),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_strip_height_bounds() {
        assert_eq!(validate_strip_height(600, 1).unwrap(), 1);
        assert_eq!(validate_strip_height(600, 60).unwrap(), 60);
        assert_eq!(validate_strip_height(600, 600).unwrap(), 600);
    }

    #[test]
    fn test_zero_and_negative_heights_are_invalid() {
        assert_eq!(validate_strip_height(600, 0).unwrap_err().kind(), ErrorKind::InvalidHeight);
        assert_eq!(validate_strip_height(600, -20).unwrap_err().kind(), ErrorKind::InvalidHeight);
    }

    #[test]
    fn test_too_tall_strip() {
        let err = validate_strip_height(600, 601).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeightExceedsImage);
    }

    #[test]
    fn test_composition_geometry() {
        assert!(validate_composition_geometry(800, 600, 800, 60).is_ok());
        assert!(validate_composition_geometry(800, 600, 800, 600).is_ok());

        let err = validate_composition_geometry(800, 600, 801, 60).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WidthMismatch);

        let err = validate_composition_geometry(800, 600, 800, 700).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeightExceedsImage);
    }

    #[test]
    fn test_width_reported_before_height() {
        let err = validate_composition_geometry(800, 600, 640, 700).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WidthMismatch);
    }

    proptest! {
        #[test]
        fn valid_heights_always_pass(image_height in 1u32..10_000, frac in 0.0f64..1.0) {
            let strip = 1 + ((image_height - 1) as f64 * frac) as i64;
            prop_assert_eq!(validate_strip_height(image_height, strip).unwrap(), strip as u32);
        }

        #[test]
        fn oversized_heights_always_fail(image_height in 1u32..10_000, extra in 1i64..10_000) {
            let err = validate_strip_height(image_height, i64::from(image_height) + extra).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::HeightExceedsImage);
        }

        #[test]
        fn non_positive_heights_always_fail(image_height in 1u32..10_000, requested in i64::MIN..=0) {
            let err = validate_strip_height(image_height, requested).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidHeight);
        }
    }
}
