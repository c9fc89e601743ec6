//! Outer layer around the overlay core: raster I/O, batch pairing, CLI and logging

/// Slice pairing and batch execution
pub mod batch;
/// Command-line parsing and dispatch
pub mod cli;
/// Fixed calibration, thresholds, colours and file naming
pub mod configuration;
/// Error types
pub mod error;
/// PNG decoding and encoding of pixel grids
pub mod image;
/// Tracing subscriber setup
pub mod logger;
/// Batch progress display
pub mod progress;
