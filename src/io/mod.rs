//! I/O utilities for file handling
//!
//! Image decoding and encoding plus the filesystem guards around them.

pub mod image_io;
