//! Batch upload driver
//!
//! Reads course files one at a time, normalizes every record and saves the
//! whole file in one call to the search index.
//!
//! A file is all or nothing: if any record fails to parse or normalize, or the
//! index rejects the batch, nothing from that file is uploaded. The error is
//! logged and the driver moves on to the next file.

mod source;

pub use source::InputSource;

use crate::course::{normalize_course, CourseRecord, IndexedCourse};
use crate::error::Result;
use crate::index::{SaveObjectsResponse, SearchIndex};
use crate::lookup::LookupTables;
use std::time::Instant;
use tracing::{error, info, warn};

/// A file that could not be uploaded
#[derive(Debug)]
pub struct FileFailure {
    pub source: String,
    pub error: crate::error::Error,
}

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct UploadSummary {
    /// Sources uploaded successfully
    pub uploaded: Vec<String>,
    /// Sources skipped because of an error
    pub failed: Vec<FileFailure>,
    /// Records sent to the index
    pub records: usize,
}

impl UploadSummary {
    pub fn files_total(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Drives normalization and upload for a list of sources
pub struct UploadDriver {
    index: Box<dyn SearchIndex>,
    tables: LookupTables,
}

impl UploadDriver {
    pub fn new(index: impl SearchIndex + 'static, tables: LookupTables) -> Self {
        Self {
            index: Box::new(index),
            tables,
        }
    }

    /// Parse and normalize a JSON array of course records
    pub fn prepare(&self, content: &str) -> Result<Vec<IndexedCourse>> {
        let records: Vec<CourseRecord> = serde_json::from_str(content)?;
        records
            .iter()
            .map(|r| normalize_course(r, &self.tables))
            .collect()
    }

    /// Upload one source. Returns the number of records sent.
    pub async fn process_source(&self, source: &InputSource) -> Result<usize> {
        let content = source.read_to_string()?;
        let courses = self.prepare(&content)?;

        if courses.is_empty() {
            warn!(file = %source, "No courses in file");
        }

        let response: SaveObjectsResponse = self.index.save_objects(&courses).await?;
        info!(
            file = %source,
            index = self.index.name(),
            task_ids = ?response.task_ids(),
            objects = response.object_count(),
            "Got index response"
        );

        Ok(courses.len())
    }

    /// Upload every source in order, skipping the ones that fail
    pub async fn run(&self, sources: &[InputSource]) -> UploadSummary {
        let mut summary = UploadSummary::default();

        for source in sources {
            info!(file = %source, "Uploading");
            let started = Instant::now();

            match self.process_source(source).await {
                Ok(count) => {
                    info!(
                        file = %source,
                        records = count,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Uploaded"
                    );
                    summary.records += count;
                    summary.uploaded.push(source.to_string());
                }
                Err(e) => {
                    error!(file = %source, error = %e, "Error encountered processing file");
                    summary.failed.push(FileFailure {
                        source: source.to_string(),
                        error: e,
                    });
                }
            }
        }

        summary
    }
}

impl std::fmt::Debug for UploadDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadDriver")
            .field("index", &self.index.name())
            .field("counts", &self.tables.counts_len())
            .field("ratings", &self.tables.ratings_len())
            .finish()
    }
}
