//! Per-pixel compositing and proximity classification
//!
//! Both operations are pure functions over same-sized grids: every output
//! pixel depends only on the input pixels at the same coordinates.

/// Proximity classification against three distance fields
pub mod classifier;
/// Gap filling from a fallback image
pub mod compositor;
/// Distance decoding from field pixel channels
pub mod decode;
/// Severity buckets, thresholds and palette
pub mod severity;

pub use classifier::{ClassifierConfig, ProximityClassifier};
pub use compositor::combine;
pub use decode::DecodeStrategy;
pub use severity::{SeverityLevel, SeverityPalette, SeverityThresholds};
