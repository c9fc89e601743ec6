//! Slice-level progress display for overlay batches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Slices: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress over the slices of one batch
///
/// A hidden bar still counts positions, so quiet runs track the same state.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a bar for `slice_count` slices, drawn only when `visible`
    pub fn new(slice_count: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(slice_count as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(slice_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show which slice is being processed
    pub fn start_slice(&self, slice: &str) {
        self.bar.set_message(format!("slice {slice}"));
    }

    /// Advance past the current slice, whatever its outcome
    pub fn complete_slice(&self) {
        self.bar.inc(1);
    }

    /// Number of slices completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a final summary line
    pub fn finish(&self, processed: usize, skipped: usize) {
        self.bar
            .finish_with_message(format!("{processed} written, {skipped} skipped"));
    }

    /// Leave the bar where it stopped after a fatal error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
