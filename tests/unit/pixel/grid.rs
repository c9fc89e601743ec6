//! Tests for pixel grid construction, access and dimension checks

#[cfg(test)]
mod tests {
    use visual_sdf::OverlayError;
    use visual_sdf::pixel::{Pixel, PixelGrid, ensure_same_dimensions};

    // Tests row-major construction maps (x, y) correctly
    // Verified by swapping row and column indices in get
    #[test]
    fn test_from_pixels_row_major() {
        let pixels = (0..6).map(|v| Pixel::rgb(v, 0, 0)).collect();
        let grid = PixelGrid::from_pixels(3, 2, pixels).unwrap();

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(2, 0), Some(Pixel::rgb(2, 0, 0)));
        assert_eq!(grid.get(0, 1), Some(Pixel::rgb(3, 0, 0)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    // Tests a pixel count that does not fit the shape is rejected
    // Verified by removing the shape error mapping
    #[test]
    fn test_from_pixels_wrong_length() {
        let result = PixelGrid::from_pixels(2, 2, vec![Pixel::default(); 3]);
        assert!(matches!(
            result,
            Err(OverlayError::InvalidParameter {
                parameter: "pixels",
                ..
            })
        ));
    }

    // Tests set writes in bounds and reports out-of-bounds writes
    // Verified by returning true unconditionally
    #[test]
    fn test_set() {
        let mut grid = PixelGrid::new(2, 2, Pixel::rgb(0, 0, 0));
        assert!(grid.set(1, 1, Pixel::rgb(9, 9, 9)));
        assert_eq!(grid.get(1, 1), Some(Pixel::rgb(9, 9, 9)));
        assert!(!grid.set(2, 0, Pixel::rgb(9, 9, 9)));
    }

    #[test]
    fn test_layout_detection_and_normalisation() {
        let mut grid = PixelGrid::new(2, 1, Pixel::rgb(4, 5, 6));
        assert!(!grid.has_alpha());

        let rgba = grid.to_rgba();
        assert!(rgba.pixels().iter().all(|p| p.alpha == Some(255)));

        grid.set(0, 0, Pixel::rgba(1, 1, 1, 0));
        assert!(grid.has_alpha());

        let flattened = grid.to_rgb();
        assert!(!flattened.has_alpha());
        assert_eq!(flattened.get(0, 0), Some(Pixel::rgb(1, 1, 1)));
    }

    // Tests both width and height differences are detected with sizes reported
    // Verified by comparing only widths
    #[test]
    fn test_ensure_same_dimensions() {
        let a = PixelGrid::new(4, 3, Pixel::default());
        let b = PixelGrid::new(4, 3, Pixel::default());
        let taller = PixelGrid::new(4, 5, Pixel::default());
        let wider = PixelGrid::new(6, 3, Pixel::default());

        assert!(ensure_same_dimensions("test", &[&a, &b]).is_ok());
        assert!(ensure_same_dimensions("test", &[]).is_ok());

        match ensure_same_dimensions("test", &[&a, &b, &taller]) {
            Err(OverlayError::DimensionMismatch {
                operation,
                expected,
                found,
            }) => {
                assert_eq!(operation, "test");
                assert_eq!(expected, (4, 3));
                assert_eq!(found, (4, 5));
            }
            other => unreachable!("Expected DimensionMismatch, got {other:?}"),
        }

        assert!(ensure_same_dimensions("test", &[&a, &wider]).is_err());
    }
}
