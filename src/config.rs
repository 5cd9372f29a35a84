//! Search index configuration
//!
//! Settings can come from a YAML file and from the environment. Environment
//! variables override file values. The environment is only read by the CLI
//! runner; library code receives a finished [`IndexConfig`].
//!
//! ```yaml
//! account_id: ABCDEF1234
//! api_key: 0123456789abcdef
//! index_name: courses
//! batch_size: 500
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the account (application) id
pub const ENV_ACCOUNT: &str = "ALGOLIA_ACCOUNT";
/// Environment variable holding the API key
pub const ENV_TOKEN: &str = "ALGOLIA_TOKEN";
/// Environment variable holding the index name
pub const ENV_INDEX: &str = "ALGOLIA_INDEX";
/// Environment variable overriding the API host
pub const ENV_HOST: &str = "ALGOLIA_HOST";

// ============================================================================
// Index Configuration
// ============================================================================

/// Connection settings for the search index
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Account (application) id
    #[serde(default)]
    pub account_id: String,

    /// API key with write access
    #[serde(default)]
    pub api_key: String,

    /// Name of the target index
    #[serde(default)]
    pub index_name: String,

    /// API host override, e.g. for a proxy or a test server
    #[serde(default)]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum records per batch request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_timeout() -> u64 {
    30
}

fn default_batch_size() -> usize {
    1000
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            api_key: String::new(),
            index_name: String::new(),
            host: None,
            timeout_secs: default_timeout(),
            batch_size: default_batch_size(),
        }
    }
}

impl std::fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexConfig")
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("host", &self.host)
            .field("timeout_secs", &self.timeout_secs)
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl IndexConfig {
    /// Create a config from the three required settings
    pub fn new(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
            index_name: index_name.into(),
            ..Self::default()
        }
    }

    /// Set the API host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the batch size
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Override fields with values from the process environment
    #[must_use]
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Override fields with values from a variable lookup
    #[must_use]
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(account) = get(ENV_ACCOUNT) {
            self.account_id = account;
        }
        if let Some(token) = get(ENV_TOKEN) {
            self.api_key = token;
        }
        if let Some(index) = get(ENV_INDEX) {
            self.index_name = index;
        }
        if let Some(host) = get(ENV_HOST) {
            self.host = Some(host);
        }
        self
    }

    /// Check that every required setting is present
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::missing_field(ENV_ACCOUNT));
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field(ENV_TOKEN));
        }
        if self.index_name.trim().is_empty() {
            return Err(Error::missing_field(ENV_INDEX));
        }
        if self.batch_size == 0 {
            return Err(Error::config("batch_size must be greater than zero"));
        }
        self.base_url()?;
        Ok(())
    }

    /// Base URL of the index API
    pub fn base_url(&self) -> Result<String> {
        let base = match &self.host {
            Some(host) if host.contains("://") => host.clone(),
            Some(host) => format!("https://{host}"),
            None => format!("https://{}-dsn.algolia.net", self.account_id),
        };
        url::Url::parse(&base)?;
        Ok(base.trim_end_matches('/').to_string())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
