//! Severity buckets for decoded proximity distances

use crate::io::configuration::{
    CAUTION_COLOR, CAUTION_THRESHOLD, CRITICAL_COLOR, CRITICAL_THRESHOLD, NEAR_COLOR,
    NEAR_THRESHOLD, SAFE_COLOR, SINGLE_CHANNEL_CAUTION_THRESHOLD,
    SINGLE_CHANNEL_CRITICAL_THRESHOLD, SINGLE_CHANNEL_NEAR_THRESHOLD,
};
use crate::io::error::{Result, invalid_parameter};
use crate::pixel::Rgb;

/// Proximity class, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityLevel {
    /// Touching or nearly touching a structure
    Critical,
    /// Close to a structure
    Near,
    /// Within the caution margin
    Caution,
    /// Outside every margin
    Safe,
}

/// Exclusive upper bounds of the three non-safe buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityThresholds {
    /// Distances below this are critical
    pub critical: f64,
    /// Distances below this (and not critical) are near
    pub near: f64,
    /// Distances below this (and not near) call for caution
    pub caution: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            critical: CRITICAL_THRESHOLD,
            near: NEAR_THRESHOLD,
            caution: CAUTION_THRESHOLD,
        }
    }
}

impl SeverityThresholds {
    /// Thresholds of the single-channel decoding
    pub const fn single_channel() -> Self {
        Self {
            critical: SINGLE_CHANNEL_CRITICAL_THRESHOLD,
            near: SINGLE_CHANNEL_NEAR_THRESHOLD,
            caution: SINGLE_CHANNEL_CAUTION_THRESHOLD,
        }
    }

    /// Bucket for a decoded distance
    ///
    /// Comparisons are strict, so a distance equal to a bound falls into the
    /// next safer bucket. `NaN` compares false everywhere and lands in `Safe`.
    pub fn classify(&self, distance: f64) -> SeverityLevel {
        if distance < self.critical {
            SeverityLevel::Critical
        } else if distance < self.near {
            SeverityLevel::Near
        } else if distance < self.caution {
            SeverityLevel::Caution
        } else {
            SeverityLevel::Safe
        }
    }

    /// Check the bounds are finite and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a bound is not finite or the bounds are
    /// not in increasing order
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.critical, self.near, self.caution];
        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(invalid_parameter(
                "thresholds",
                &format!("{bounds:?}"),
                &"every threshold must be finite",
            ));
        }
        if !(self.critical < self.near && self.near < self.caution) {
            return Err(invalid_parameter(
                "thresholds",
                &format!("{bounds:?}"),
                &"thresholds must increase from critical to caution",
            ));
        }
        Ok(())
    }
}

/// Output colour of each severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityPalette {
    /// Colour for `Critical`
    pub critical: Rgb,
    /// Colour for `Near`
    pub near: Rgb,
    /// Colour for `Caution`
    pub caution: Rgb,
    /// Colour for `Safe`
    pub safe: Rgb,
}

impl Default for SeverityPalette {
    fn default() -> Self {
        Self {
            critical: CRITICAL_COLOR,
            near: NEAR_COLOR,
            caution: CAUTION_COLOR,
            safe: SAFE_COLOR,
        }
    }
}

impl SeverityPalette {
    /// Colour bound to `level`
    pub const fn color(&self, level: SeverityLevel) -> Rgb {
        match level {
            SeverityLevel::Critical => self.critical,
            SeverityLevel::Near => self.near,
            SeverityLevel::Caution => self.caution,
            SeverityLevel::Safe => self.safe,
        }
    }
}
