//! Pixel records and same-sized pixel grids shared by every overlay operation

/// Channel-named pixel and colour triple types
pub mod color;
/// Two-dimensional pixel storage with dimension checks
pub mod grid;

pub use color::{Pixel, Rgb};
pub use grid::{PixelGrid, ensure_same_dimensions};
