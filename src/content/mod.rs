//! The content layer: schema contracts, the query catalog, and the
//! client that executes queries against the remote store.

pub mod client;
pub mod image;
pub mod portable_text;
pub mod query;
pub mod schema;
pub mod types;

pub use client::{ContentClient, ContentError, FetchOptions};
