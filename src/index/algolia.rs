//! Algolia batch API client

use super::{BatchResponse, SaveObjectsResponse, SearchIndex};
use crate::config::IndexConfig;
use crate::course::IndexedCourse;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

const HEADER_APPLICATION_ID: &str = "X-Algolia-Application-Id";
const HEADER_API_KEY: &str = "X-Algolia-API-Key";

/// Operation applied to one record in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchAction {
    /// Replace the record with the given objectID, creating it if needed
    UpdateObject,
}

/// One entry of a batch request
#[derive(Debug, Clone, Serialize)]
pub struct BatchOperation<'a> {
    pub action: BatchAction,
    pub body: &'a IndexedCourse,
}

/// Body of `POST /1/indexes/{index}/batch`
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequest<'a> {
    pub requests: Vec<BatchOperation<'a>>,
}

impl<'a> BatchRequest<'a> {
    /// Build a request that upserts every record
    pub fn update_objects(objects: &'a [IndexedCourse]) -> Self {
        Self {
            requests: objects
                .iter()
                .map(|body| BatchOperation {
                    action: BatchAction::UpdateObject,
                    body,
                })
                .collect(),
        }
    }
}

/// Algolia index reached over HTTPS
#[derive(Debug)]
pub struct AlgoliaIndex {
    client: HttpClient,
    index_name: String,
    batch_url: Url,
    batch_size: usize,
}

impl AlgoliaIndex {
    /// Create an index client from validated settings
    pub fn new(config: &IndexConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .timeout(config.timeout())
            .header(HEADER_APPLICATION_ID, config.account_id.as_str())
            .header(HEADER_API_KEY, config.api_key.as_str())
            .build();

        Ok(Self {
            client: HttpClient::with_config(http_config)?,
            index_name: config.index_name.clone(),
            batch_url: batch_url(&config.base_url()?, &config.index_name)?,
            batch_size: config.batch_size,
        })
    }
}

/// `{base}/1/indexes/{index}/batch`, with the index name encoded as one path segment
pub(super) fn batch_url(base: &str, index_name: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| Error::config(format!("Host {base} cannot carry a path")))?
        .pop_if_empty()
        .extend(["1", "indexes", index_name, "batch"]);
    Ok(url)
}

#[async_trait]
impl SearchIndex for AlgoliaIndex {
    fn name(&self) -> &str {
        &self.index_name
    }

    async fn save_objects(&self, objects: &[IndexedCourse]) -> Result<SaveObjectsResponse> {
        let mut response = SaveObjectsResponse::default();

        for chunk in objects.chunks(self.batch_size) {
            debug!(
                index = %self.index_name,
                records = chunk.len(),
                url = %self.batch_url,
                "Sending batch"
            );

            let batch: BatchResponse = self
                .client
                .post_json(self.batch_url.as_str(), &BatchRequest::update_objects(chunk))
                .await
                .map_err(|e| Error::upload(&self.index_name, e.to_string()))?;

            info!(
                index = %self.index_name,
                task_id = batch.task_id,
                objects = batch.object_ids.len(),
                "Batch accepted"
            );
            response.batches.push(batch);
        }

        Ok(response)
    }
}
