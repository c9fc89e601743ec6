//! Slice pairing and batch execution of the proximity overlay
//!
//! Segmented slices named `plane00<N>.png` are matched with `edtplane_<N>.png`
//! in each of the three field directories. A slice whose inputs are missing or
//! disagree in size is skipped and recorded; the batch carries on. Slices are
//! flattened to RGB before classification and overlays are written as RGB.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::io::configuration::{FIELD_PREFIX, IMAGE_EXTENSION, ORIGINAL_PREFIX, OUTPUT_PREFIX};
use crate::io::error::{OverlayError, Result, file_system_error, invalid_parameter};
use crate::io::image::{load_pixel_grid, save_pixel_grid};
use crate::io::progress::BatchProgress;
use crate::overlay::classifier::validate_space_resolution;
use crate::overlay::{ProximityClassifier, combine};

/// Slice index embedded in a segmented slice file name
///
/// The index is the run of digits directly after the `plane00` prefix, so
/// `plane0012.png` and `plane0012_label.png` both yield `"12"`.
pub fn slice_index(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(&format!(".{IMAGE_EXTENSION}"))?;
    let rest = stem.strip_prefix(ORIGINAL_PREFIX)?;
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| rest.get(..end).unwrap_or_default());
    (!digits.is_empty()).then_some(digits)
}

/// File name of the distance field image for a slice
pub fn field_file_name(index: &str) -> String {
    format!("{FIELD_PREFIX}{index}.{IMAGE_EXTENSION}")
}

/// File name of the overlay written for a slice
pub fn output_file_name(index: &str) -> String {
    format!("{OUTPUT_PREFIX}{index}.{IMAGE_EXTENSION}")
}

/// Directories holding the three distance field series
#[derive(Debug, Clone)]
pub struct FieldDirectories {
    /// Vessel/foramen field
    pub vf: PathBuf,
    /// First bone field
    pub bone1: PathBuf,
    /// Second bone field
    pub bone2: PathBuf,
}

/// Every path involved in one slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceInputs {
    /// Slice index
    pub index: String,
    /// Segmented slice
    pub original: PathBuf,
    /// Vessel/foramen field
    pub vf: PathBuf,
    /// First bone field
    pub bone1: PathBuf,
    /// Second bone field
    pub bone2: PathBuf,
}

impl FieldDirectories {
    /// Locate the three field images for a slice
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` for the first field image that does not exist
    pub fn pair(&self, index: &str, original: &Path) -> Result<SliceInputs> {
        let name = field_file_name(index);
        let locate = |dir: &Path| {
            let path = dir.join(&name);
            if path.is_file() {
                Ok(path)
            } else {
                Err(OverlayError::MissingInput {
                    slice: index.to_string(),
                    path,
                })
            }
        };

        Ok(SliceInputs {
            index: index.to_string(),
            original: original.to_path_buf(),
            vf: locate(&self.vf)?,
            bone1: locate(&self.bone1)?,
            bone2: locate(&self.bone2)?,
        })
    }
}

/// List segmented slices in a directory as (index, path), sorted by path
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read
pub fn collect_slices(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| file_system_error(dir, "read directory", e))?;

    let mut slices = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "read directory entry", e))?
            .path();
        if !path.is_file() {
            continue;
        }
        let index = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(slice_index)
            .map(str::to_string);
        if let Some(index) = index {
            slices.push((index, path));
        }
    }
    slices.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(slices)
}

/// Slice that was left out of a batch, with the reason
#[derive(Debug)]
pub struct SkippedSlice {
    /// Slice index
    pub index: String,
    /// Why it was skipped
    pub error: OverlayError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Slices whose overlay was written
    pub processed: Vec<String>,
    /// Slices left out because of a per-slice input problem
    pub skipped: Vec<SkippedSlice>,
    /// Slices whose overlay already existed
    pub existing: Vec<String>,
}

impl BatchReport {
    /// Indices of skipped slices
    pub fn skipped_indices(&self) -> Vec<&str> {
        self.skipped.iter().map(|s| s.index.as_str()).collect()
    }
}

/// Proximity overlay over a directory of slices
#[derive(Debug, Clone)]
pub struct OverlayBatch {
    /// Directory of segmented slices
    pub original_dir: PathBuf,
    /// Directories of the three field series
    pub fields: FieldDirectories,
    /// Directory receiving overlays, created if missing
    pub output_dir: PathBuf,
    /// Physical size of one field unit
    pub space_resolution: f64,
    /// Classifier applied to each slice
    pub classifier: ProximityClassifier,
    /// Leave slices alone whose overlay already exists
    pub skip_existing: bool,
    /// Draw a progress bar
    pub show_progress: bool,
}

impl OverlayBatch {
    /// Classify every pairable slice and write its overlay
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The space resolution is not finite and positive
    /// - The original directory does not exist or cannot be read
    /// - The output directory cannot be created
    /// - An overlay cannot be written
    pub fn run(&self) -> Result<BatchReport> {
        validate_space_resolution(self.space_resolution)?;
        if !self.original_dir.is_dir() {
            return Err(invalid_parameter(
                "original",
                &self.original_dir.display(),
                &"must be a directory",
            ));
        }
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| file_system_error(&self.output_dir, "create directory", e))?;

        let slices = collect_slices(&self.original_dir)?;
        info!(slices = slices.len(), dir = %self.original_dir.display(), "starting overlay batch");

        let progress = BatchProgress::new(slices.len(), self.show_progress);
        let mut report = BatchReport::default();

        for (index, original) in slices {
            progress.start_slice(&index);
            let output = self.output_dir.join(output_file_name(&index));

            if self.skip_existing && output.exists() {
                debug!(slice = %index, "overlay exists, skipping");
                report.existing.push(index);
                progress.complete_slice();
                continue;
            }

            match self.process_slice(&index, &original, &output) {
                Ok(()) => {
                    debug!(slice = %index, output = %output.display(), "overlay written");
                    report.processed.push(index);
                }
                Err(error) if error.is_slice_local() => {
                    warn!(slice = %index, %error, "skipping slice");
                    report.skipped.push(SkippedSlice { index, error });
                }
                Err(error) => {
                    progress.abandon();
                    return Err(error);
                }
            }
            progress.complete_slice();
        }

        progress.finish(report.processed.len(), report.skipped.len());
        Ok(report)
    }

    fn process_slice(&self, index: &str, original: &Path, output: &Path) -> Result<()> {
        let inputs = self.fields.pair(index, original)?;

        // Slices are classified as flattened RGB, so opaque black counts as background
        let segmented = load_pixel_grid(&inputs.original)?.to_rgb();
        let vf = load_pixel_grid(&inputs.vf)?;
        let bone1 = load_pixel_grid(&inputs.bone1)?;
        let bone2 = load_pixel_grid(&inputs.bone2)?;

        let overlay =
            self.classifier
                .classify(&segmented, &vf, &bone1, &bone2, self.space_resolution)?;
        save_pixel_grid(&overlay, output)
    }
}

/// Fill the empty pixels of one image from another and write the result
///
/// # Errors
///
/// Returns an error if either input cannot be loaded, the sizes differ, or
/// the output cannot be written
pub fn combine_files(primary: &Path, fallback: &Path, output: &Path) -> Result<()> {
    let primary_grid = load_pixel_grid(primary)?;
    let fallback_grid = load_pixel_grid(fallback)?;
    let combined = combine(&primary_grid, &fallback_grid)?;
    save_pixel_grid(&combined, output)?;
    info!(output = %output.display(), "combined image saved");
    Ok(())
}
