//! Command-line interface for batch analysis of PNG screenshots
//!
//! Each input file produces a `<stem>_analysis.json` report beside it, and
//! optionally a `<stem>_edges.png` debug export of the Sobel edge map.

use crate::analysis::edges::detect_edges;
use crate::analysis::pipeline::{Analyzer, AnalyzerConfig};
use crate::io::configuration::{COLOR_TOLERANCE, EDGE_MAP_SUFFIX, OUTPUT_SUFFIX, SEED_STRIDE};
use crate::io::error::Result;
use crate::io::image::{export_edge_map_png, load_pixel_buffer};
use crate::io::progress::ProgressManager;
use crate::io::report::write_report;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "uilens")]
#[command(
    author,
    version,
    about = "Analyze UI screenshots into palette, elements, and layout"
)]
/// Command-line arguments for the analysis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pretty-print the JSON reports
    #[arg(short, long)]
    pub pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a report exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Export the Sobel edge map as a debug PNG
    #[arg(short, long)]
    pub edge_map: bool,

    /// Seed grid spacing for region detection, in pixels
    #[arg(long, default_value_t = SEED_STRIDE)]
    pub seed_stride: usize,

    /// Color distance tolerance for region growth
    #[arg(long, default_value_t = COLOR_TOLERANCE)]
    pub color_tolerance: f64,
}

impl Cli {
    /// Check if existing report files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Analyzer configuration with the CLI overrides applied
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            seed_stride: self.seed_stride,
            color_tolerance: self.color_tolerance,
            ..AnalyzerConfig::default()
        }
    }
}

/// Orchestrates batch analysis of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, analysis, or report export
    /// fails for any file.
    pub fn process(&mut self) -> Result<()> {
        let analyzer = Analyzer::with_config(self.cli.analyzer_config())?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(&analyzer, file)?;
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (report exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, analyzer: &Analyzer, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress {
            pm.start_file(input_path);
        }

        let buffer = load_pixel_buffer(input_path)?;
        let result = analyzer.analyze(Some(&buffer))?;

        let output_path = Self::get_output_path(input_path);
        write_report(
            &result,
            output_path
                .to_str()
                .ok_or_else(|| crate::io::error::io_error("Invalid report path"))?,
            self.cli.pretty,
        )?;

        if self.cli.edge_map {
            let edge_map = detect_edges(&buffer, analyzer.config());
            let edge_path = Self::get_edge_map_path(input_path);
            export_edge_map_png(
                &edge_map,
                edge_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid edge map path"))?,
            )?;
        }

        if let Some(ref pm) = self.progress {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.json", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn get_edge_map_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let edge_name = format!("{}{}.png", stem.to_string_lossy(), EDGE_MAP_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(edge_name)
        } else {
            PathBuf::from(edge_name)
        }
    }
}
