//! Command-line interface for gap filling and batch proximity overlays

use crate::io::batch::{BatchReport, FieldDirectories, OverlayBatch, combine_files};
use crate::io::error::Result;
use crate::overlay::classifier::validate_space_resolution;
use crate::overlay::{ClassifierConfig, DecodeStrategy, ProximityClassifier};
use crate::pixel::Rgb;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "visual-sdf")]
#[command(
    author,
    version,
    about = "Visualise distance fields over segmented slices"
)]
/// Command-line arguments for the overlay tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill transparent or black pixels of a segmented slice from a distance field image
    Combine {
        /// Segmented slice
        #[arg(long = "ori", value_name = "PNG")]
        original: PathBuf,
        /// Distance field image used as fallback
        #[arg(long, value_name = "PNG")]
        sdf: PathBuf,
        /// Where the combined image is written
        #[arg(long, value_name = "PNG")]
        output: PathBuf,
    },
    /// Recolour every slice of a directory by proximity to three distance fields
    Overlay(OverlayArgs),
}

/// Field encoding selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Distance is red minus green, thresholds 0.1/2.0/4.0
    ChannelDifference,
    /// Distance is red alone, thresholds 0.1/0.2/0.4
    SingleChannel,
}

impl From<StrategyArg> for DecodeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ChannelDifference => Self::ChannelDifference,
            StrategyArg::SingleChannel => Self::SingleChannel,
        }
    }
}

/// Arguments of the `overlay` subcommand
#[derive(Args, Debug, Clone)]
// Independent switches; an enum would not make them clearer
#[allow(clippy::struct_excessive_bools)]
pub struct OverlayArgs {
    /// Directory of segmented slices (`plane00<N>.png`)
    #[arg(long, value_name = "DIR")]
    pub original: PathBuf,
    /// Directory of vessel/foramen distance fields (`edtplane_<N>.png`)
    #[arg(long, value_name = "DIR")]
    pub vf: PathBuf,
    /// Directory of first bone distance fields
    #[arg(long, value_name = "DIR")]
    pub bone1: PathBuf,
    /// Directory of second bone distance fields
    #[arg(long, value_name = "DIR")]
    pub bone2: PathBuf,
    /// Directory receiving `overlayed_image_<N>.png`
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,
    /// Physical size of one field unit
    #[arg(long = "sr", visible_alias = "spaceresolution", value_name = "VALUE")]
    pub space_resolution: f64,
    /// Field encoding
    #[arg(long, value_enum, default_value_t = StrategyArg::ChannelDifference)]
    pub strategy: StrategyArg,
    /// Additional colour never recoloured, as R,G,B (repeatable)
    #[arg(long = "reserved", value_name = "R,G,B")]
    pub reserved: Vec<Rgb>,
    /// Do not protect the built-in bone and foramen colours
    #[arg(long)]
    pub no_default_reserved: bool,
    /// Classify pixels on all cores
    #[arg(short, long)]
    pub parallel: bool,
    /// Process slices even if their overlay exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl OverlayArgs {
    /// Check if existing overlays should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Classifier configuration selected by the arguments
    pub fn classifier_config(&self) -> ClassifierConfig {
        let mut config = match self.strategy {
            StrategyArg::ChannelDifference => ClassifierConfig::default(),
            StrategyArg::SingleChannel => ClassifierConfig::single_channel(),
        };
        if self.no_default_reserved {
            config.reserved_colors.clear();
        }
        config.reserved_colors.extend(self.reserved.iter().copied());
        config.parallel = self.parallel;
        config
    }

    /// Batch described by the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the space resolution or the classifier
    /// configuration is invalid
    pub fn to_batch(&self, show_progress: bool) -> Result<OverlayBatch> {
        validate_space_resolution(self.space_resolution)?;
        Ok(OverlayBatch {
            original_dir: self.original.clone(),
            fields: FieldDirectories {
                vf: self.vf.clone(),
                bone1: self.bone1.clone(),
                bone2: self.bone2.clone(),
            },
            output_dir: self.output.clone(),
            space_resolution: self.space_resolution,
            classifier: ProximityClassifier::new(self.classifier_config())?,
            skip_existing: self.skip_existing(),
            show_progress,
        })
    }
}

/// Runs the selected subcommand
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the subcommand
    ///
    /// Returns the batch report for `overlay`, `None` for `combine`.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails as a whole; slices skipped by
    /// a batch are reported, not returned as errors
    pub fn run(&self) -> Result<Option<BatchReport>> {
        match &self.cli.command {
            Command::Combine {
                original,
                sdf,
                output,
            } => {
                combine_files(original, sdf, output)?;
                Ok(None)
            }
            Command::Overlay(args) => {
                let batch = args.to_batch(self.cli.should_show_progress())?;
                if args.strategy == StrategyArg::SingleChannel {
                    warn!(
                        "single-channel decoding uses a different threshold scale and ignores reserved colours"
                    );
                }
                let report = batch.run()?;
                info!(
                    processed = report.processed.len(),
                    existing = report.existing.len(),
                    skipped = report.skipped.len(),
                    "image processing complete"
                );
                if !report.skipped.is_empty() {
                    warn!(slices = ?report.skipped_indices(), "slices skipped");
                }
                Ok(Some(report))
            }
        }
    }
}
