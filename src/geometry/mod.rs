//! Bottom-anchored region geometry
//!
//! This module decides, before any pixel is touched, whether a requested
//! crop or composition is well formed, and derives the full-width region
//! at the bottom of an image that both tools operate on.

mod region;
mod validation;

pub use region::Region;
pub use validation::{validate_composition_geometry, validate_strip_height};
