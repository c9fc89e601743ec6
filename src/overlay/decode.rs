//! Distance decoding from distance field pixels
//!
//! Two field encodings exist and they are not interchangeable. Single-channel
//! fields store the normalised distance in red. Channel-difference fields
//! store it as red minus green, so the value can go negative inside a
//! structure. Each encoding comes with its own threshold scale (see
//! [`SeverityThresholds::single_channel`](crate::overlay::SeverityThresholds::single_channel)).

use crate::pixel::Pixel;

/// Field encoding used to turn a pixel into a distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DecodeStrategy {
    /// `red / 255`, earlier encoding
    ///
    /// Classification under this encoding recolours every pixel, including
    /// background and reserved colours, but leaves a pixel untouched when any
    /// decoded distance is negative.
    SingleChannel,
    /// `red / 255 - green / 255`
    ///
    /// Classification under this encoding leaves background and reserved
    /// colours untouched and has no negative-distance rule.
    #[default]
    ChannelDifference,
}

impl DecodeStrategy {
    /// Normalised distance in `[-1, 1]`, before calibration
    pub fn normalized(self, pixel: Pixel) -> f64 {
        let red = f64::from(pixel.red) / 255.0;
        match self {
            Self::SingleChannel => red,
            Self::ChannelDifference => red - f64::from(pixel.green) / 255.0,
        }
    }

    /// Whether uncoloured and reserved pixels bypass classification
    pub const fn skips_protected_pixels(self) -> bool {
        matches!(self, Self::ChannelDifference)
    }

    /// Whether a negative decoded distance leaves the pixel untouched
    pub const fn skips_negative_distances(self) -> bool {
        matches!(self, Self::SingleChannel)
    }
}

/// Physical distance encoded by a field pixel
///
/// `normalized × calibration_scale × space_resolution`
pub fn decode_distance(
    pixel: Pixel,
    strategy: DecodeStrategy,
    calibration_scale: f64,
    space_resolution: f64,
) -> f64 {
    strategy.normalized(pixel) * calibration_scale * space_resolution
}
