//! Search index destinations
//!
//! The index is treated as a key-value store of course records keyed by
//! `objectID`. Saving a record that already exists replaces it.
//!
//! - [`AlgoliaIndex`] - Algolia REST batch API
//! - [`DryRunIndex`] - accepts records without sending them anywhere

mod algolia;
mod dry_run;

pub use algolia::{AlgoliaIndex, BatchAction, BatchOperation, BatchRequest};
pub use dry_run::DryRunIndex;

use crate::course::IndexedCourse;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A destination that stores course records by object id
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Name of the index, used in logs
    fn name(&self) -> &str;

    /// Insert or replace all given records
    async fn save_objects(&self, objects: &[IndexedCourse]) -> Result<SaveObjectsResponse>;
}

/// Response to a single batch request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(rename = "taskID")]
    pub task_id: u64,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<String>,
}

/// Responses for every batch sent by one `save_objects` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveObjectsResponse {
    pub batches: Vec<BatchResponse>,
}

impl SaveObjectsResponse {
    /// Task ids of all batches, in send order
    pub fn task_ids(&self) -> Vec<u64> {
        self.batches.iter().map(|b| b.task_id).collect()
    }

    /// Total number of object ids acknowledged
    pub fn object_count(&self) -> usize {
        self.batches.iter().map(|b| b.object_ids.len()).sum()
    }
}
