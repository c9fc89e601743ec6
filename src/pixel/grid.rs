//! Fixed-size pixel grids backed by ndarray
//!
//! Grids are indexed `[row, col]` internally, with the origin at the top-left.
//! The public accessors take `(x, y)` the way raster images are addressed.

use ndarray::Array2;

use crate::io::error::{OverlayError, Result, invalid_parameter};
use crate::pixel::color::Pixel;

/// Two-dimensional grid of pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<Pixel>,
}

impl PixelGrid {
    /// Create a grid filled with one pixel value
    pub fn new(width: usize, height: usize, fill: Pixel) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), fill),
        }
    }

    /// Build a grid from row-major pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `pixels.len()` differs from `width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let count = pixels.len();
        Array2::from_shape_vec((height, width), pixels)
            .map(|pixels| Self { pixels })
            .map_err(|e| {
                invalid_parameter(
                    "pixels",
                    &count,
                    &format!("cannot form a {width}x{height} grid: {e}"),
                )
            })
    }

    /// Wrap an existing `[row, col]` array
    pub fn from_array(pixels: Array2<Pixel>) -> Self {
        Self { pixels }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Grid size as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get([y, x]).copied()
    }

    /// Overwrite the pixel at column `x`, row `y`
    ///
    /// Returns `false` when the position lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> bool {
        let Some(slot) = self.pixels.get_mut([y, x]) else {
            return false;
        };
        *slot = pixel;
        true
    }

    /// Underlying `[row, col]` array
    pub const fn pixels(&self) -> &Array2<Pixel> {
        &self.pixels
    }

    /// Whether any pixel carries an alpha channel
    pub fn has_alpha(&self) -> bool {
        self.pixels.iter().any(|pixel| pixel.has_alpha())
    }

    /// Copy of the grid with every alpha channel dropped
    pub fn to_rgb(&self) -> Self {
        Self {
            pixels: self.pixels.mapv(Pixel::to_rgb),
        }
    }

    /// Copy of the grid normalised to four channels
    pub fn to_rgba(&self) -> Self {
        Self {
            pixels: self.pixels.mapv(Pixel::to_rgba),
        }
    }
}

/// Check that every grid matches the first one in width and height
///
/// # Errors
///
/// Returns `DimensionMismatch` naming `operation` for the first grid whose
/// size differs from the first grid's size
pub fn ensure_same_dimensions(operation: &'static str, grids: &[&PixelGrid]) -> Result<()> {
    let Some((first, rest)) = grids.split_first() else {
        return Ok(());
    };
    let expected = first.dimensions();

    match rest.iter().find(|grid| grid.dimensions() != expected) {
        Some(grid) => Err(OverlayError::DimensionMismatch {
            operation,
            expected,
            found: grid.dimensions(),
        }),
        None => Ok(()),
    }
}
