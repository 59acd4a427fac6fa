//! Client configuration
//!
//! Configuration can be built in code, loaded from a YAML file, or picked
//! up from the environment. Only the pieces that vary between deployments
//! live here (endpoint, credentials, HTTP tuning); request-level options
//! belong to the individual calls.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, QuotaConfig};
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Production endpoint of the cluster-manager API
pub const DEFAULT_ENDPOINT: &str = "https://container.googleapis.com";

/// Environment variable overriding the API endpoint
pub const ENDPOINT_ENV_VAR: &str = "GKE_API_ENDPOINT";

/// Environment variable holding a pre-resolved access token
pub const TOKEN_ENV_VAR: &str = "GKE_ACCESS_TOKEN";

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API endpoint, without a trailing `/v1`
    pub endpoint: String,

    /// Credentials attached to every request
    pub credentials: Credentials,

    /// HTTP transport tuning
    pub http: HttpSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials: Credentials::default(),
            http: HttpSettings::default(),
        }
    }
}

/// HTTP transport tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum retries for transient failures
    pub max_retries: u32,

    /// Backoff strategy between retries
    pub backoff: BackoffType,

    /// Initial backoff delay in milliseconds
    pub initial_backoff_ms: u64,

    /// Backoff delay ceiling in milliseconds
    pub max_backoff_ms: u64,

    /// Client-side quota pacing; None disables it
    pub quota: Option<QuotaConfig>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            max_backoff_ms: 32_000,
            quota: Some(QuotaConfig::default()),
        }
    }
}

impl ClientConfig {
    /// Create a config with the production endpoint and the given
    /// credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    /// Point the client at a different endpoint (emulator, mock server,
    /// private instance)
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the HTTP settings
    #[must_use]
    pub fn with_http(mut self, http: HttpSettings) -> Self {
        self.http = http;
        self
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Build configuration from the environment.
    ///
    /// Reads `GKE_API_ENDPOINT` (optional) and `GKE_ACCESS_TOKEN`
    /// (optional; anonymous when unset).
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(endpoint) = std::env::var(ENDPOINT_ENV_VAR).ok().none_if_empty() {
            config.endpoint = endpoint;
        }
        if std::env::var(TOKEN_ENV_VAR).ok().none_if_empty().is_some() {
            config.credentials = Credentials::from_env_var(TOKEN_ENV_VAR);
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::missing_field("endpoint"));
        }
        // Reject endpoints that cannot form request URLs at all.
        url::Url::parse(&self.endpoint)?;
        if self.http.timeout_secs == 0 {
            return Err(Error::config("http.timeout_secs must be positive"));
        }
        Ok(())
    }

    /// Derive the transport-level configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.endpoint.clone())
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            );
        builder = match &self.http.quota {
            Some(quota) => builder.quota(quota.clone()),
            None => builder.no_quota(),
        };
        builder.build()
    }
}
