//! Tests for PNG decoding and encoding of pixel grids

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use visual_sdf::OverlayError;
    use visual_sdf::io::image::{load_pixel_grid, save_pixel_grid};
    use visual_sdf::pixel::{Pixel, PixelGrid};

    fn sample(alpha: bool) -> PixelGrid {
        let pixels = (0..12u8)
            .map(|i| {
                if alpha {
                    Pixel::rgba(i * 20, 255 - i, i, i * 10)
                } else {
                    Pixel::rgb(i * 20, 255 - i, i)
                }
            })
            .collect();
        PixelGrid::from_pixels(4, 3, pixels).unwrap()
    }

    // Tests RGB grids are written and read back as RGB
    // Verified by always encoding as RGBA
    #[test]
    fn test_rgb_layout_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rgb.png");
        let grid = sample(false);

        save_pixel_grid(&grid, &path).unwrap();
        let loaded = load_pixel_grid(&path).unwrap();

        assert_eq!(loaded, grid);
        assert!(!loaded.has_alpha());
    }

    // Tests RGBA grids keep their alpha values
    // Verified by decoding through to_rgb8
    #[test]
    fn test_rgba_layout_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rgba.png");
        let grid = sample(true);

        save_pixel_grid(&grid, &path).unwrap();
        let loaded = load_pixel_grid(&path).unwrap();

        assert_eq!(loaded, grid);
        assert_eq!(loaded.get(3, 2), Some(Pixel::rgba(220, 244, 11, 110)));
    }

    // Tests missing parent directories are created on save
    // Verified by removing create_dir_all
    #[test]
    fn test_save_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.png");

        save_pixel_grid(&sample(false), &path).unwrap();
        assert!(path.exists());
    }

    // Tests loading a missing or invalid file reports ImageLoad with its path
    // Verified by mapping decode failures to FileSystem
    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.png");
        assert!(matches!(
            load_pixel_grid(&missing),
            Err(OverlayError::ImageLoad { path, .. }) if path == missing
        ));

        let garbage = dir.path().join("garbage.png");
        std::fs::write(&garbage, b"not a png").unwrap();
        assert!(matches!(
            load_pixel_grid(&garbage),
            Err(OverlayError::ImageLoad { .. })
        ));
    }
}
