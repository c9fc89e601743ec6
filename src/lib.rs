//! Proximity risk overlays and gap filling for segmented image slices
//!
//! Distance fields rendered as images are decoded per pixel and used to
//! recolour a segmented slice by how close each structure pixel lies to the
//! vessel/foramen and bone surfaces. A separate compositor fills the empty
//! pixels of a segmented slice from a distance field image.

#![forbid(unsafe_code)]

/// Image I/O, batch driver, command-line interface and error handling
pub mod io;
/// Compositing and proximity classification over pixel grids
pub mod overlay;
/// Pixel and pixel grid types
pub mod pixel;

pub use io::error::{OverlayError, Result};
pub use overlay::{ClassifierConfig, DecodeStrategy, ProximityClassifier, SeverityLevel, combine};
pub use pixel::{Pixel, PixelGrid, Rgb};
