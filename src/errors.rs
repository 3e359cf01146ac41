//! Error types for status bar extraction and composition
//!
//! Every failure carries a kind (used for the process exit code) and a
//! single-line diagnostic (its `Display` output).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which decoded image a failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// The source image (`get_status_bar`) or the base image (`csb`)
    Input,
    /// The previously extracted status bar image
    StatusBar,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Input => write!(f, "input"),
            ImageRole::StatusBar => write!(f, "status bar image"),
        }
    }
}

/// Failure classification, independent of the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArgument,
    FileOpenFailure,
    InvalidHeight,
    HeightExceedsImage,
    WidthMismatch,
    OutputAlreadyExists,
    OutputWriteFailure,
}

impl ErrorKind {
    /// Process exit code reported for this kind of failure
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::MissingArgument => 2,
            ErrorKind::FileOpenFailure => 3,
            ErrorKind::InvalidHeight => 4,
            ErrorKind::HeightExceedsImage => 5,
            ErrorKind::WidthMismatch => 6,
            ErrorKind::OutputAlreadyExists => 7,
            ErrorKind::OutputWriteFailure => 8,
        }
    }
}

/// Errors produced by the status bar tools
#[derive(Debug)]
pub enum StatusBarError {
    /// A required parameter is absent or empty; carries the diagnostic
    MissingArgument(String),
    /// The input path does not exist
    InputNotFound(PathBuf),
    /// An image could not be opened or decoded
    FileOpenFailure {
        role: ImageRole,
        path: PathBuf,
        source: image::ImageError,
    },
    /// Requested strip height is zero or negative
    InvalidHeight(i64),
    /// Strip or status bar is taller than the reference image
    HeightExceedsImage { image_height: u32, strip_height: u64 },
    /// Status bar width differs from the base image width
    WidthMismatch { image_width: u32, bar_width: u32 },
    /// Refusing to overwrite an existing output file
    OutputAlreadyExists(PathBuf),
    /// Encoding or writing the output failed
    EncodeFailure { path: PathBuf, source: image::ImageError },
    /// I/O error while writing the output
    IoError(io::Error),
}

impl StatusBarError {
    /// Failure kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatusBarError::MissingArgument(_) => ErrorKind::MissingArgument,
            StatusBarError::InputNotFound(_) => ErrorKind::FileOpenFailure,
            StatusBarError::FileOpenFailure { .. } => ErrorKind::FileOpenFailure,
            StatusBarError::InvalidHeight(_) => ErrorKind::InvalidHeight,
            StatusBarError::HeightExceedsImage { .. } => ErrorKind::HeightExceedsImage,
            StatusBarError::WidthMismatch { .. } => ErrorKind::WidthMismatch,
            StatusBarError::OutputAlreadyExists(_) => ErrorKind::OutputAlreadyExists,
            StatusBarError::EncodeFailure { .. } => ErrorKind::OutputWriteFailure,
            StatusBarError::IoError(_) => ErrorKind::OutputWriteFailure,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

impl fmt::Display for StatusBarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusBarError::MissingArgument(msg) => write!(f, "{}", msg),
            StatusBarError::InputNotFound(_) => write!(f, "input file does not exist"),
            StatusBarError::FileOpenFailure { role: ImageRole::Input, path, .. } => {
                write!(f, "failed to open the input file: {}", path.display())
            }
            StatusBarError::FileOpenFailure { role: ImageRole::StatusBar, path, .. } => {
                write!(f, "failed to open the status bar image file: {}", path.display())
            }
            StatusBarError::InvalidHeight(_) => write!(f, "status bar height value is invalid"),
            StatusBarError::HeightExceedsImage { .. } => {
                write!(f, "input image height is less than status bar image height; aborting")
            }
            StatusBarError::WidthMismatch { .. } => {
                write!(f, "input image width does not match status bar image width; aborting")
            }
            StatusBarError::OutputAlreadyExists(path) => {
                write!(f, "output file already exists: {}", path.display())
            }
            StatusBarError::EncodeFailure { path, source } => {
                write!(f, "failed to write the output file: {}: {}", path.display(), source)
            }
            StatusBarError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StatusBarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusBarError::FileOpenFailure { source, .. } => Some(source),
            StatusBarError::EncodeFailure { source, .. } => Some(source),
            StatusBarError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StatusBarError {
    fn from(error: io::Error) -> Self {
        StatusBarError::IoError(error)
    }
}

/// Result type for status bar operations
pub type StatusResult<T> = Result<T, StatusBarError>;
