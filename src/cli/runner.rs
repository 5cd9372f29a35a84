//! CLI runner - executes an upload

use crate::cli::commands::Cli;
use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::{AlgoliaIndex, DryRunIndex};
use crate::lookup::LookupTables;
use crate::upload::{InputSource, UploadDriver, UploadSummary};
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the upload.
    ///
    /// Lookup tables, input resolution and index configuration are fatal.
    /// Failures inside individual files are reported in the summary.
    pub async fn run(&self) -> Result<UploadSummary> {
        info!("Uploading serialized JSON to the search index");

        let tables = LookupTables::load(&self.cli.counts, &self.cli.ratings)?;
        let sources = InputSource::resolve(&self.cli.files, self.cli.pattern.as_deref())?;

        let driver = if self.cli.dry_run {
            UploadDriver::new(DryRunIndex::default(), tables)
        } else {
            let config = self.load_index_config()?;
            info!(index = %config.index_name, account = %config.account_id, "Using index");
            UploadDriver::new(AlgoliaIndex::new(&config)?, tables)
        };

        let summary = driver.run(&sources).await;

        info!(
            files = summary.files_total(),
            uploaded = summary.uploaded.len(),
            failed = summary.failed.len(),
            records = summary.records,
            "Finished uploading serialized JSON"
        );
        for failure in &summary.failed {
            warn!(file = %failure.source, error = %failure.error, "File was not uploaded");
        }

        Ok(summary)
    }

    /// Index settings from the config file (if any), overridden by the environment
    fn load_index_config(&self) -> Result<IndexConfig> {
        let base = match &self.cli.config {
            Some(path) => IndexConfig::from_file(path)?,
            None => IndexConfig::default(),
        };
        let config = base.merge_env();
        config.validate()?;
        Ok(config)
    }
}
