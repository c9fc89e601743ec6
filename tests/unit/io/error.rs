//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use visual_sdf::OverlayError;
    use visual_sdf::io::error::{file_system_error, invalid_parameter};

    // Tests DimensionMismatch names the operation and both sizes
    // Verified by omitting found dimensions from message
    #[test]
    fn test_dimension_mismatch_message() {
        let error = OverlayError::DimensionMismatch {
            operation: "classify",
            expected: (512, 512),
            found: (512, 256),
        };

        let message = error.to_string();
        assert!(message.contains("classify"));
        assert!(message.contains("512x512"));
        assert!(message.contains("512x256"));
        assert!(error.source().is_none());
    }

    // Tests MissingInput reports slice and path
    // Verified by omitting path from message
    #[test]
    fn test_missing_input_message() {
        let error = OverlayError::MissingInput {
            slice: "42".to_string(),
            path: PathBuf::from("/data/vf/edtplane_42.png"),
        };

        let message = error.to_string();
        assert!(message.contains("slice 42"));
        assert!(message.contains("edtplane_42.png"));
    }

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = file_system_error(
            "/tmp/out",
            "create directory",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let load = OverlayError::ImageLoad {
            path: PathBuf::from("/tmp/in.png"),
            source: image_error,
        };
        assert!(load.source().is_some());
        assert!(load.to_string().contains("/tmp/in.png"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("space_resolution", &-1.5, &"must be finite and positive");

        let message = error.to_string();
        assert!(message.contains("space_resolution"));
        assert!(message.contains("-1.5"));
        assert!(message.contains("must be finite and positive"));
    }

    // Tests per-slice conditions are distinguishable from fatal ones
    // Verified by marking every variant as slice-local
    #[test]
    fn test_slice_local() {
        assert!(
            OverlayError::MissingInput {
                slice: "1".to_string(),
                path: PathBuf::new(),
            }
            .is_slice_local()
        );
        assert!(!invalid_parameter("x", &1, &"bad").is_slice_local());
    }
}
