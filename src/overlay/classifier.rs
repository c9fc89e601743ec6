//! Proximity classification of a segmented slice against three distance fields
//!
//! Each coloured pixel of the segmented slice is recoloured by the most severe
//! of its three decoded distances: vessel/foramen field, first bone field and
//! second bone field. Background pixels and reserved anatomical colours keep
//! their colour.

use std::collections::HashSet;

use ndarray::Zip;

use crate::io::configuration::{CALIBRATION_SCALE, DEFAULT_RESERVED_COLORS};
use crate::io::error::{Result, invalid_parameter};
use crate::overlay::decode::{DecodeStrategy, decode_distance};
use crate::overlay::severity::{SeverityLevel, SeverityPalette, SeverityThresholds};
use crate::pixel::{Pixel, PixelGrid, Rgb, ensure_same_dimensions};

/// Classifier parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Distance represented by a full-scale normalised value
    pub calibration_scale: f64,
    /// Bucket bounds, in the same unit as the decoded distances
    pub thresholds: SeverityThresholds,
    /// Output colour per bucket
    pub palette: SeverityPalette,
    /// Exact colours that are never recoloured
    pub reserved_colors: HashSet<Rgb>,
    /// Field encoding
    pub strategy: DecodeStrategy,
    /// Map rows across the rayon thread pool
    pub parallel: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            calibration_scale: CALIBRATION_SCALE,
            thresholds: SeverityThresholds::default(),
            palette: SeverityPalette::default(),
            reserved_colors: DEFAULT_RESERVED_COLORS.into_iter().collect(),
            strategy: DecodeStrategy::ChannelDifference,
            parallel: false,
        }
    }
}

impl ClassifierConfig {
    /// Configuration for single-channel fields with their own threshold scale
    pub fn single_channel() -> Self {
        Self {
            thresholds: SeverityThresholds::single_channel(),
            strategy: DecodeStrategy::SingleChannel,
            ..Self::default()
        }
    }

    /// Check the calibration scale and thresholds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the calibration scale is not finite and
    /// positive, or the thresholds fail validation
    pub fn validate(&self) -> Result<()> {
        if !(self.calibration_scale.is_finite() && self.calibration_scale > 0.0) {
            return Err(invalid_parameter(
                "calibration_scale",
                &self.calibration_scale,
                &"must be finite and positive",
            ));
        }
        self.thresholds.validate()
    }
}

/// Recolours segmented slices by proximity to three distance fields
#[derive(Debug, Clone, Default)]
pub struct ProximityClassifier {
    config: ClassifierConfig,
}

impl ProximityClassifier {
    /// Create a classifier from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Recolour `original` by the nearest of the `vf`, `bone1` and `bone2` distances
    ///
    /// `space_resolution` converts the calibrated field unit into physical
    /// units. A fresh grid is returned; skipped pixels keep their original
    /// value, recoloured pixels keep their alpha channel if they had one.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if any of the four grids differs in size
    /// from `original`, or `InvalidParameter` if `space_resolution` is not
    /// finite and positive. No output is produced in either case.
    pub fn classify(
        &self,
        original: &PixelGrid,
        vf: &PixelGrid,
        bone1: &PixelGrid,
        bone2: &PixelGrid,
        space_resolution: f64,
    ) -> Result<PixelGrid> {
        ensure_same_dimensions("classify", &[original, vf, bone1, bone2])?;
        validate_space_resolution(space_resolution)?;

        let zip = Zip::from(original.pixels())
            .and(vf.pixels())
            .and(bone1.pixels())
            .and(bone2.pixels());
        let recolor = |&pixel: &Pixel, &to_vf: &Pixel, &to_bone1: &Pixel, &to_bone2: &Pixel| {
            self.classify_pixel(pixel, [to_vf, to_bone1, to_bone2], space_resolution)
        };

        let classified = if self.config.parallel {
            zip.par_map_collect(recolor)
        } else {
            zip.map_collect(recolor)
        };

        Ok(PixelGrid::from_array(classified))
    }

    /// Output value for one pixel given its three field pixels
    pub fn classify_pixel(&self, pixel: Pixel, fields: [Pixel; 3], space_resolution: f64) -> Pixel {
        self.severity(pixel, fields, space_resolution)
            .map_or(pixel, |level| pixel.with_color(self.config.palette.color(level)))
    }

    /// Severity of one pixel, or `None` when the pixel is skipped
    pub fn severity(
        &self,
        pixel: Pixel,
        fields: [Pixel; 3],
        space_resolution: f64,
    ) -> Option<SeverityLevel> {
        let strategy = self.config.strategy;
        if strategy.skips_protected_pixels() && self.is_protected(pixel) {
            return None;
        }

        let distances = fields.map(|field| {
            decode_distance(
                field,
                strategy,
                self.config.calibration_scale,
                space_resolution,
            )
        });
        if strategy.skips_negative_distances() && distances.iter().any(|&d| d < 0.0) {
            return None;
        }

        let nearest = distances.into_iter().fold(f64::INFINITY, f64::min);
        Some(self.config.thresholds.classify(nearest))
    }

    /// Background or a reserved anatomical colour
    pub fn is_protected(&self, pixel: Pixel) -> bool {
        pixel.is_uncolored() || self.config.reserved_colors.contains(&pixel.color())
    }
}

/// Check a spatial resolution is usable for decoding
///
/// # Errors
///
/// Returns `InvalidParameter` if `space_resolution` is not finite and positive
pub fn validate_space_resolution(space_resolution: f64) -> Result<()> {
    if space_resolution.is_finite() && space_resolution > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            "space_resolution",
            &space_resolution,
            &"must be finite and positive",
        ))
    }
}
