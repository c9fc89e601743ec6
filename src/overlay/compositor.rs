//! Gap filling: substitute fallback pixels wherever the primary image is empty

use ndarray::Zip;

use crate::io::error::Result;
use crate::pixel::{Pixel, PixelGrid, ensure_same_dimensions};

/// Merge two same-sized grids pixel by pixel
///
/// Both inputs are normalised to RGBA first, with RGB pixels treated as
/// opaque. A primary pixel that is fully transparent or pure black is replaced
/// by the fallback pixel; any other primary pixel is kept as is. There is no
/// blending. The result is always RGBA and the inputs are left untouched.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in width or height
pub fn combine(primary: &PixelGrid, fallback: &PixelGrid) -> Result<PixelGrid> {
    ensure_same_dimensions("combine", &[primary, fallback])?;

    let combined = Zip::from(primary.pixels())
        .and(fallback.pixels())
        .map_collect(|&front, &back| composite_pixel(front, back));

    Ok(PixelGrid::from_array(combined))
}

/// Compositing rule for a single position
pub const fn composite_pixel(primary: Pixel, fallback: Pixel) -> Pixel {
    let primary = primary.to_rgba();
    if primary.is_transparent() || primary.is_black() {
        fallback.to_rgba()
    } else {
        primary
    }
}
