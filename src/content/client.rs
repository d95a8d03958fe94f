//! Thin, memoized access point to the remote content store.
//!
//! Wraps catalog execution with the store identity from configuration, an
//! optional per-call revalidation TTL backed by an in-memory cache, and
//! typed decoding helpers where absence (`null` / empty) is a normal
//! outcome.
//!
//! # Architecture
//!
//! ```text
//! assemble::*             shared() ──► ContentClient (process-wide, once)
//!     │                                    │
//!     ▼                                    ▼
//!  fetch_one / fetch_many ──► TTL cache ──► GET {endpoint}?query=…&$var=…
//!                                  ▲              │
//!                                  └── "result" ◄─┘  (envelope unwrapped)
//! ```

use super::query::{Params, Query};
use crate::{
    config::{StoreConfig, cfg},
    utils::hash,
};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::OnceLock,
    time::{Duration, Instant},
};
use thiserror::Error;

/// Request timeout for store queries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Content-fetch errors. All of these are caught at the assembler
/// boundary and turn into fallback view models, never a crash.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed")]
    Http(#[from] reqwest::Error),

    #[error("content store returned HTTP {status} for query `{query}`")]
    Status { query: &'static str, status: u16 },

    #[error("unexpected result shape from query `{query}`")]
    Decode {
        query: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-call cache hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    revalidate: Option<u64>,
}

impl FetchOptions {
    /// Always hit the store.
    pub const fn none() -> Self {
        Self { revalidate: None }
    }

    /// Reuse a cached result younger than `secs` seconds.
    pub const fn revalidate(secs: u64) -> Self {
        Self {
            revalidate: Some(secs),
        }
    }
}

struct CacheEntry {
    fetched_at: Instant,
    value: Value,
}

/// Executes catalog queries against one project/dataset/API-version.
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: String,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl ContentClient {
    /// Build a client for the given store identity.
    pub fn new(store: &StoreConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("brandlink/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: store.query_endpoint(),
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Execute a catalog query and return the raw `result` value.
    ///
    /// A missing match is `Value::Null` (single) or an empty array
    /// (collection), not an error. Errors mean the store could not be
    /// reached or answered abnormally.
    pub async fn fetch(
        &self,
        query: &Query,
        params: Params<'_>,
        options: FetchOptions,
    ) -> Result<Value, ContentError> {
        let ttl = options.revalidate.map(Duration::from_secs);
        let key = cache_key(query, params);

        if let Some(ttl) = ttl
            && let Some(cached) = self.cache_get(&key, ttl)
        {
            return Ok(cached);
        }

        let mut request = self.http.get(&self.endpoint).query(&[("query", query.groq)]);
        for (name, value) in params {
            // Parameter values travel JSON-encoded, never spliced into
            // the query text.
            request = request.query(&[(format!("${name}"), value.to_string())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                query: query.name,
                status: status.as_u16(),
            });
        }

        let mut envelope: Value = response.json().await?;
        let result = envelope
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null);

        if ttl.is_some() {
            self.cache_put(key, result.clone());
        }
        Ok(result)
    }

    /// Fetch a single document. `null` decodes to `Ok(None)`.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        query: &Query,
        params: Params<'_>,
        options: FetchOptions,
    ) -> Result<Option<T>, ContentError> {
        let result = self.fetch(query, params, options).await?;
        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result)
            .map(Some)
            .map_err(|source| ContentError::Decode {
                query: query.name,
                source,
            })
    }

    /// Fetch a collection. `null` decodes to an empty vector.
    pub async fn fetch_many<T: DeserializeOwned>(
        &self,
        query: &Query,
        params: Params<'_>,
        options: FetchOptions,
    ) -> Result<Vec<T>, ContentError> {
        let result = self.fetch(query, params, options).await?;
        if result.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(result).map_err(|source| ContentError::Decode {
            query: query.name,
            source,
        })
    }

    fn cache_get(&self, key: &str, ttl: Duration) -> Option<Value> {
        let cache = self.cache.lock();
        let entry = cache.get(key)?;
        (entry.fetched_at.elapsed() < ttl).then(|| entry.value.clone())
    }

    fn cache_put(&self, key: String, value: Value) {
        self.cache.lock().insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                value,
            },
        );
    }
}

/// Cache key: digest of the query text plus its bound parameters.
fn cache_key(query: &Query, params: Params<'_>) -> String {
    let mut material = query.groq.as_bytes().to_vec();
    for (name, value) in params {
        material.push(0);
        material.extend_from_slice(name.as_bytes());
        material.push(b'=');
        material.extend_from_slice(value.to_string().as_bytes());
    }
    hash::hex_digest(&material)
}

// ============================================================================
// Shared instance
// ============================================================================

static SHARED: OnceLock<ContentClient> = OnceLock::new();

/// The process-wide client, built once from the loaded configuration.
pub fn shared() -> anyhow::Result<&'static ContentClient> {
    if let Some(client) = SHARED.get() {
        return Ok(client);
    }
    let config = cfg();
    let client = ContentClient::new(config.store()?)?;
    Ok(SHARED.get_or_init(|| client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::query;

    fn test_client() -> ContentClient {
        let store = StoreConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: "2023-01-01".into(),
        };
        ContentClient::new(&store).unwrap()
    }

    #[test]
    fn test_cache_key_depends_on_params() {
        let a = cache_key(
            &query::INFLUENCER_BY_HANDLE,
            &[("handle", serde_json::json!("jane"))],
        );
        let b = cache_key(
            &query::INFLUENCER_BY_HANDLE,
            &[("handle", serde_json::json!("john"))],
        );
        assert_ne!(a, b);

        let a2 = cache_key(
            &query::INFLUENCER_BY_HANDLE,
            &[("handle", serde_json::json!("jane"))],
        );
        assert_eq!(a, a2);
    }

    #[test]
    fn test_cache_roundtrip_within_ttl() {
        let client = test_client();
        let value = serde_json::json!({"hello": "world"});
        client.cache_put("k".into(), value.clone());

        assert_eq!(
            client.cache_get("k", Duration::from_secs(60)),
            Some(value)
        );
    }

    #[test]
    fn test_cache_expires_after_ttl() {
        let client = test_client();
        client.cache_put("k".into(), serde_json::json!(1));

        assert_eq!(client.cache_get("k", Duration::ZERO), None);
    }

    #[test]
    fn test_fetch_options() {
        assert!(FetchOptions::none().revalidate.is_none());
        assert_eq!(FetchOptions::revalidate(30).revalidate, Some(30));
    }
}
