//! Batch progress display for CLI runs
//!
//! Analysis of a single file is fast, so the display is a single bar across
//! the batch with the current file name as its message.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch analysis runs
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the batch bar for a known file count
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show the file currently being analyzed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark the current file as completed
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All files analyzed");
        }
    }
}
