pub mod errors;
pub mod geometry;
pub mod raster;
pub mod io;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{composite_images, composite_status_bar, extract_bottom_strip};

pub use errors::{ErrorKind, StatusBarError, StatusResult};
pub use geometry::{validate_composition_geometry, validate_strip_height, Region};
pub use raster::{composite_dynamic, crop_bottom_strip, crop_dynamic, replace_bottom_strip};
