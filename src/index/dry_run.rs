//! Index that only logs what would be uploaded

use super::{BatchResponse, SaveObjectsResponse, SearchIndex};
use crate::course::IndexedCourse;
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Accepts records without contacting any service
#[derive(Debug, Clone)]
pub struct DryRunIndex {
    name: String,
}

impl DryRunIndex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for DryRunIndex {
    fn default() -> Self {
        Self::new("dry-run")
    }
}

#[async_trait]
impl SearchIndex for DryRunIndex {
    fn name(&self) -> &str {
        &self.name
    }

    async fn save_objects(&self, objects: &[IndexedCourse]) -> Result<SaveObjectsResponse> {
        for object in objects {
            debug!(
                object_id = %object.object_id,
                code = %object.code,
                sections = object.sections.len(),
                "Would upload"
            );
        }
        info!(index = %self.name, records = objects.len(), "Dry run, nothing uploaded");

        if objects.is_empty() {
            return Ok(SaveObjectsResponse::default());
        }

        Ok(SaveObjectsResponse {
            batches: vec![BatchResponse {
                task_id: 0,
                object_ids: objects.iter().map(|o| o.object_id.clone()).collect(),
            }],
        })
    }
}
