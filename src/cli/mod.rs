//! CLI module
//!
//! Command-line interface for uploading course files.
//!
//! ```text
//! course-indexer -c counts.json -r ratings.json -p 'data/*.json'
//! course-indexer -c counts.json -r ratings.json cs.json math.json
//! cat cs.json | course-indexer -c counts.json -r ratings.json --dry-run
//! ```

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
