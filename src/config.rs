//! Runtime configuration
//!
//! Resolved from environment variables; CLI flags override individual values.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default location of the schema document
pub const DEFAULT_SCHEMA_PATH: &str = "schemas/schema.json";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// GitHub REST API base URL
    pub api_url: String,
    /// Path to the schema document
    pub schema_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment
    ///
    /// API URL priority:
    /// 1. `CODEJSON_API_URL`
    /// 2. `https://{GH_HOST}/api/v3` when `GH_HOST` names an Enterprise host
    /// 3. `https://api.github.com`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("GH_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty() && h != "github.com");
        let api_url = match (lookup("CODEJSON_API_URL"), host) {
            (Some(url), _) => url,
            (None, Some(host)) => format!("https://{host}/api/v3"),
            (None, None) => DEFAULT_API_URL.to_string(),
        };

        let schema_path = lookup("CODEJSON_SCHEMA")
            .map_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH), PathBuf::from);

        Self {
            api_url,
            schema_path,
        }
        .validated()
    }

    /// Apply CLI overrides
    pub fn with_overrides(self, api_url: Option<String>, schema: Option<PathBuf>) -> Result<Self> {
        Self {
            api_url: api_url.unwrap_or(self.api_url),
            schema_path: schema.unwrap_or(self.schema_path),
        }
        .validated()
    }

    fn validated(self) -> Result<Self> {
        let parsed = url::Url::parse(&self.api_url)
            .map_err(|e| Error::Config(format!("invalid API URL {}: {e}", self.api_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API URL must use http or https: {}",
                self.api_url
            )));
        }
        Ok(self)
    }
}
