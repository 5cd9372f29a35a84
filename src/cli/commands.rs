//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Upload serialized course JSON to the search index
#[derive(Parser, Debug)]
#[command(name = "course-indexer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Glob pattern selecting course files (overrides FILES)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Review counts JSON ({objectID: count})
    #[arg(short, long)]
    pub counts: PathBuf,

    /// Ratings JSON ({objectID: {current_score, ...}})
    #[arg(short, long)]
    pub ratings: PathBuf,

    /// Index settings (YAML); environment variables override it
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Normalize and log without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Course files (JSON arrays); reads stdin when empty or "-"
    pub files: Vec<PathBuf>,
}
