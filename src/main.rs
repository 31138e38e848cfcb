//! CLI entry point for the screenshot layout analysis tool

use clap::Parser;
use uilens::io::cli::{Cli, FileProcessor};

fn main() -> uilens::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
