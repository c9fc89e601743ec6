//! PNG decoding into pixel grids and encoding back, preserving the channel layout

use std::path::Path;

use image::{DynamicImage, Rgb as RgbPixel, RgbImage, Rgba as RgbaPixel, RgbaImage};
use ndarray::Array2;

use crate::io::error::{OverlayError, Result, file_system_error};
use crate::pixel::{Pixel, PixelGrid};

/// Decode an image file into a pixel grid
///
/// Sources with an alpha channel become RGBA pixels, everything else RGB.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).map_err(|e| OverlayError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(grid_from_image(&img))
}

/// Convert a decoded image into a pixel grid
pub fn grid_from_image(img: &DynamicImage) -> PixelGrid {
    let shape = (img.height() as usize, img.width() as usize);

    let pixels = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        Array2::from_shape_fn(shape, |(row, col)| {
            let RgbaPixel([r, g, b, a]) = *rgba.get_pixel(col as u32, row as u32);
            Pixel::rgba(r, g, b, a)
        })
    } else {
        let rgb = img.to_rgb8();
        Array2::from_shape_fn(shape, |(row, col)| {
            let RgbPixel([r, g, b]) = *rgb.get_pixel(col as u32, row as u32);
            Pixel::rgb(r, g, b)
        })
    };

    PixelGrid::from_array(pixels)
}

/// Convert a pixel grid into an encodable image
///
/// The grid is written as RGBA if any pixel carries alpha, otherwise as RGB.
pub fn image_from_grid(grid: &PixelGrid) -> DynamicImage {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let at = |x: u32, y: u32| grid.get(x as usize, y as usize).unwrap_or_default();

    if grid.has_alpha() {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            let pixel = at(x, y).to_rgba();
            RgbaPixel([
                pixel.red,
                pixel.green,
                pixel.blue,
                pixel.alpha.unwrap_or(u8::MAX),
            ])
        }))
    } else {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let pixel = at(x, y);
            RgbPixel([pixel.red, pixel.green, pixel.blue])
        }))
    }
}

/// Encode a pixel grid to disk, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn save_pixel_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image_from_grid(grid)
        .save(path)
        .map_err(|e| OverlayError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
