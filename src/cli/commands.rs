//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keeporg")]
#[command(about = "Convert a Google Keep Takeout to org-mode files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the exported Keep notes in .html format
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory to write the per-label .org files into
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}
