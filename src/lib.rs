// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Course Indexer
//!
//! Normalizes scraped university course listings and bulk-uploads them to a
//! search index.
//!
//! ## Features
//!
//! - **Course Numbers**: `"106A"` split into `numberInt` and `numberSuffix`
//! - **Reviews and Ratings**: joined from lookup tables by `objectID`
//! - **Section Filtering**: clock sections dropped, lecture-only views
//! - **GER Normalization**: consistent requirement tags
//! - **File-Level Isolation**: a bad file is skipped, the run continues
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use course_indexer::{IndexConfig, AlgoliaIndex, LookupTables, UploadDriver, InputSource};
//!
//! #[tokio::main]
//! async fn main() -> course_indexer::Result<()> {
//!     let tables = LookupTables::load("counts.json".as_ref(), "ratings.json".as_ref())?;
//!     let config = IndexConfig::new("APP_ID", "API_KEY", "courses");
//!     let driver = UploadDriver::new(AlgoliaIndex::new(&config)?, tables);
//!
//!     let sources = InputSource::resolve(&[], Some("data/*.json"))?;
//!     let summary = driver.run(&sources).await;
//!     println!("uploaded {} records", summary.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ InputSource  │──▶│ UploadDriver │──▶│ SearchIndex  │──▶│   HTTP API   │
//! │ files/glob/  │   │ parse, per-  │   │ Algolia /    │   │ POST /batch  │
//! │ stdin        │   │ file isolate │   │ dry run      │   │              │
//! └──────────────┘   └──────┬───────┘   └──────────────┘   └──────────────┘
//!                           │
//!                    ┌──────┴───────┐   ┌──────────────┐
//!                    │ normalize_   │◀──│ LookupTables │
//!                    │ course       │   │ counts,      │
//!                    │              │   │ ratings      │
//!                    └──────────────┘   └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Course record types and normalization rules
pub mod course;

/// Review count and rating lookup tables
pub mod lookup;

/// HTTP client
pub mod http;

/// Search index destinations
pub mod index;

/// Index configuration
pub mod config;

/// Batch upload driver
pub mod upload;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::IndexConfig;
pub use course::{normalize_course, CourseRecord, IndexedCourse};
pub use error::{Error, Result};
pub use index::{AlgoliaIndex, DryRunIndex, SearchIndex};
pub use lookup::LookupTables;
pub use upload::{InputSource, UploadDriver, UploadSummary};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
