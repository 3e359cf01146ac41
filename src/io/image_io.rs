//! Image decoding and encoding
//!
//! Thin wrappers around the `image` crate plus the filesystem guards both
//! tools apply before and after the pixel work.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use log::{debug, info, warn};

use crate::errors::{ImageRole, StatusBarError, StatusResult};

/// Decode an image file
///
/// The format is guessed from the file contents, falling back to the
/// extension. Any open or decode failure is reported as `FileOpenFailure`
/// for the given role.
pub fn load_image(path: &Path, role: ImageRole) -> StatusResult<DynamicImage> {
    info!("Loading {} from {}", role, path.display());

    let open_failure = |source: image::ImageError| StatusBarError::FileOpenFailure {
        role,
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(|e| open_failure(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| open_failure(image::ImageError::IoError(e)))?
        .decode()
        .map_err(open_failure)?;

    debug!("Decoded {}: {}x{} {:?}", role, image.width(), image.height(), image.color());
    Ok(image)
}

/// Fail with `InputNotFound` unless `path` exists
pub fn ensure_input_exists(path: &Path) -> StatusResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(StatusBarError::InputNotFound(path.to_path_buf()))
    }
}

/// Fail with `OutputAlreadyExists` if something is already at `path`
pub fn ensure_output_absent(path: &Path) -> StatusResult<()> {
    if path.exists() {
        Err(StatusBarError::OutputAlreadyExists(path.to_path_buf()))
    } else {
        Ok(())
    }
}

/// Prepare an image for an encoder that only takes 8-bit RGB or gray
fn fit_for_format(image: DynamicImage, format: ImageFormat) -> DynamicImage {
    if format != ImageFormat::Jpeg {
        return image;
    }

    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => image,
        other => {
            warn!("JPEG cannot store {:?} pixels; writing 8-bit RGB", other);
            DynamicImage::ImageRgb8(image.to_rgb8())
        }
    }
}

/// Encode an image to a new file
///
/// The format is taken from the output extension. The file is created
/// exclusively, so an existing file is never overwritten, and it is removed
/// again if encoding fails part way.
pub fn save_image(image: DynamicImage, path: &Path) -> StatusResult<()> {
    let format = ImageFormat::from_path(path).map_err(|source| StatusBarError::EncodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let image = fit_for_format(image, format);
    info!("Writing {}x{} {:?} image to {}", image.width(), image.height(), format, path.display());

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(StatusBarError::OutputAlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = write_encoded(&image, file, format) {
        warn!("Removing incomplete output {}", path.display());
        let _ = fs::remove_file(path);
        return Err(match e {
            image::ImageError::IoError(io) => StatusBarError::IoError(io),
            source => StatusBarError::EncodeFailure { path: path.to_path_buf(), source },
        });
    }

    Ok(())
}

fn write_encoded(image: &DynamicImage, file: File, format: ImageFormat) -> image::ImageResult<()> {
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, format)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_missing_file_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("some"), ImageRole::Input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOpenFailure);
        assert!(err.to_string().starts_with("failed to open the input file:"));
    }

    #[test]
    fn test_garbage_file_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bar.png");
        fs::write(&path, b"not an image").unwrap();
        let err = load_image(&path, ImageRole::StatusBar).unwrap_err();
        assert!(err.to_string().starts_with("failed to open the status bar image file:"));
    }

    #[test]
    fn test_save_and_reload_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4])));
        save_image(image.clone(), &path).unwrap();
        assert_eq!(load_image(&path, ImageRole::Input).unwrap(), image);
    }

    #[test]
    fn test_save_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"keep me").unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let err = save_image(image, &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputAlreadyExists);
        assert_eq!(fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn test_rgba_to_jpeg_is_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([9, 9, 9, 128])));
        save_image(image, &path).unwrap();
        let reloaded = load_image(&path, ImageRole::Input).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (8, 8));
    }

    #[test]
    fn test_unknown_extension_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknownext");
        let err = save_image(DynamicImage::ImageRgb8(image::RgbImage::new(1, 1)), &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputWriteFailure);
        assert!(!path.exists());
    }

    #[test]
    fn test_guards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x");
        assert_eq!(ensure_input_exists(&path).unwrap_err().kind(), ErrorKind::FileOpenFailure);
        assert!(ensure_output_absent(&path).is_ok());
        fs::write(&path, b"").unwrap();
        assert!(ensure_input_exists(&path).is_ok());
        assert_eq!(ensure_output_absent(&path).unwrap_err().kind(), ErrorKind::OutputAlreadyExists);
    }
}
