//! Content-store identity, sourced from the environment.
//!
//! The store is addressed by a project/dataset/API-version triple. Project
//! id and dataset have no sensible default and are a hard failure when
//! unset; the API version defaults to a known-good date.

use super::error::ConfigError;
use serde::Serialize;

/// Default API version used when `SANITY_API_VERSION` is unset.
pub const DEFAULT_API_VERSION: &str = "2023-01-01";

/// Identity of the remote content store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
}

impl StoreConfig {
    /// Read the store identity from the environment.
    ///
    /// # Errors
    /// `ConfigError::MissingEnv` when `SANITY_PROJECT_ID` or
    /// `SANITY_DATASET` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: require_env("SANITY_PROJECT_ID")?,
            dataset: require_env("SANITY_DATASET")?,
            api_version: std::env::var("SANITY_API_VERSION")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        })
    }

    /// Base URL of the query endpoint (CDN-backed).
    pub fn query_endpoint(&self) -> String {
        format!(
            "https://{}.apicdn.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// Base URL of the image CDN for this project/dataset.
    pub fn image_cdn(&self) -> String {
        format!(
            "https://cdn.sanity.io/images/{}/{}",
            self.project_id, self.dataset
        )
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingEnv(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> StoreConfig {
        StoreConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: DEFAULT_API_VERSION.into(),
        }
    }

    #[test]
    fn test_query_endpoint() {
        assert_eq!(
            test_store().query_endpoint(),
            "https://abc123.apicdn.sanity.io/v2023-01-01/data/query/production"
        );
    }

    #[test]
    fn test_image_cdn() {
        assert_eq!(
            test_store().image_cdn(),
            "https://cdn.sanity.io/images/abc123/production"
        );
    }
}
