//! CLI argument definitions using clap's derive API.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan (falls back to $PROJECT_DIR, then ".")
    #[arg(short = 'p', long, env = "PROJECT_DIR", default_value = ".")]
    pub project_path: PathBuf,

    /// Directory name to exclude from traversal (repeatable)
    #[arg(short = 'e', long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Maximum number of warnings to emit before stopping
    #[arg(short = 'n', long, value_name = "N", default_value_t = 50)]
    pub max_warnings: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
