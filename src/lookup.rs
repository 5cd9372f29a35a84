//! Auxiliary lookup tables
//!
//! Review counts and rating summaries keyed by course `objectID`. Both tables
//! are loaded once before any course file is processed and are shared
//! read-only afterwards. A table that cannot be read or parsed is fatal.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Number of reviews per course
pub type ReviewCounts = HashMap<String, u64>;

/// Rating summary per course
pub type RatingTable = HashMap<String, RatingSummary>;

/// Aggregated rating data for one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub current_score: f64,
    pub current_score_normalized: f64,
    pub current_score_count: u64,
    /// Historical scores, oldest first
    #[serde(default)]
    pub scores: Vec<JsonValue>,
}

/// Both lookup tables used to enrich course records
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    counts: ReviewCounts,
    ratings: RatingTable,
}

impl LookupTables {
    /// Create lookup tables from already-parsed maps
    pub fn new(counts: ReviewCounts, ratings: RatingTable) -> Self {
        Self { counts, ratings }
    }

    /// Load both tables from JSON files
    pub fn load(counts_path: &Path, ratings_path: &Path) -> Result<Self> {
        let tables = Self::from_readers(
            open_table(counts_path)?,
            &counts_path.display().to_string(),
            open_table(ratings_path)?,
            &ratings_path.display().to_string(),
        )?;

        info!(
            counts = tables.counts_len(),
            ratings = tables.ratings_len(),
            "Loaded lookup tables"
        );

        Ok(tables)
    }

    /// Load both tables from readers, labelling errors with the given names
    pub fn from_readers(
        counts: impl Read,
        counts_name: &str,
        ratings: impl Read,
        ratings_name: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            parse_table(counts, counts_name)?,
            parse_table(ratings, ratings_name)?,
        ))
    }

    /// Review count for a course, 0 when unknown
    pub fn review_count(&self, object_id: &str) -> u64 {
        self.counts.get(object_id).copied().unwrap_or(0)
    }

    /// Rating summary for a course, if one exists
    pub fn rating(&self, object_id: &str) -> Option<&RatingSummary> {
        self.ratings.get(object_id)
    }

    /// Number of courses with a review count
    pub fn counts_len(&self) -> usize {
        self.counts.len()
    }

    /// Number of courses with a rating summary
    pub fn ratings_len(&self) -> usize {
        self.ratings.len()
    }
}

fn open_table(path: &Path) -> Result<BufReader<fs::File>> {
    let file = fs::File::open(path)
        .map_err(|e| Error::auxiliary(path.display().to_string(), e.to_string()))?;
    Ok(BufReader::new(file))
}

fn parse_table<T: DeserializeOwned>(reader: impl Read, name: &str) -> Result<T> {
    serde_json::from_reader(reader).map_err(|e| Error::auxiliary(name, e.to_string()))
}
