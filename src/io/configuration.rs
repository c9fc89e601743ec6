//! Calibration constants, severity thresholds, palette colours and file naming

use crate::pixel::Rgb;

/// Distance represented by a full-scale channel value, before spatial resolution
///
/// Opaque calibration of the field encoding; its physical unit is fixed by
/// whatever produced the distance field images.
pub const CALIBRATION_SCALE: f64 = 600.0;

// Channel-difference decoding thresholds, compared with strict `<`
/// Upper bound (exclusive) of the critical bucket
pub const CRITICAL_THRESHOLD: f64 = 0.1;
/// Upper bound (exclusive) of the near bucket
pub const NEAR_THRESHOLD: f64 = 2.0;
/// Upper bound (exclusive) of the caution bucket
pub const CAUTION_THRESHOLD: f64 = 4.0;

// Single-channel decoding used a different distance scale; never mix these with the above
/// Critical bound for single-channel decoding
pub const SINGLE_CHANNEL_CRITICAL_THRESHOLD: f64 = 0.1;
/// Near bound for single-channel decoding
pub const SINGLE_CHANNEL_NEAR_THRESHOLD: f64 = 0.2;
/// Caution bound for single-channel decoding
pub const SINGLE_CHANNEL_CAUTION_THRESHOLD: f64 = 0.4;

/// Dark red
pub const CRITICAL_COLOR: Rgb = Rgb::new(139, 0, 0);
/// Red
pub const NEAR_COLOR: Rgb = Rgb::new(255, 0, 0);
/// Yellow
pub const CAUTION_COLOR: Rgb = Rgb::new(255, 255, 0);
/// Green
pub const SAFE_COLOR: Rgb = Rgb::new(0, 128, 0);

/// Segmentation label colour of the first bone segment
pub const BONE_PRIMARY_COLOR: Rgb = Rgb::new(241, 214, 145);
/// Segmentation label colour of the second bone segment
pub const BONE_SECONDARY_COLOR: Rgb = Rgb::new(255, 250, 220);
/// Segmentation label colour of the foramen
pub const FORAMEN_COLOR: Rgb = Rgb::new(111, 184, 210);

/// Anatomical colours that are never recoloured
pub const DEFAULT_RESERVED_COLORS: [Rgb; 3] =
    [BONE_PRIMARY_COLOR, BONE_SECONDARY_COLOR, FORAMEN_COLOR];

// Batch file naming
/// Prefix of segmented slice images; the slice index follows it
pub const ORIGINAL_PREFIX: &str = "plane00";
/// Prefix of distance field images; the slice index follows it
pub const FIELD_PREFIX: &str = "edtplane_";
/// Prefix of generated overlay images; the slice index follows it
pub const OUTPUT_PREFIX: &str = "overlayed_image_";
/// Extension of every image the batch driver reads or writes
pub const IMAGE_EXTENSION: &str = "png";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
