//! Database adapters for the platform's two backing stores.
//!
//! Both adapters implement the same [`DatabaseClient`] lifecycle contract but
//! share no behavior beyond it: the relational side is a thin pass-through
//! over a sqlx connection pool, the document side a thin pass-through over
//! the CouchDB HTTP API. No retries, caching, or transaction coordination
//! beyond what the wrapped libraries already provide.

pub mod couchdb;
pub mod postgres;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub use couchdb::{CouchDbClient, Document, DocumentResponse};
pub use postgres::{PostgresClient, SqlParam};

#[derive(Debug, Error)]
pub enum DbError {
    /// Pool/query errors propagate unmodified from sqlx.
    #[error(transparent)]
    Postgres(#[from] sqlx::Error),
    /// Transport errors propagate unmodified from reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to connect to CouchDB: {0}")]
    CouchConnection(String),
    #[error("document {0} not found")]
    NotFound(String),
    #[error("document {0} carries no revision")]
    MissingRevision(String),
    #[error("unexpected CouchDB status {0}")]
    UnexpectedStatus(u16),
}

/// Lifecycle contract shared by every adapter.
///
/// `is_connected` is a synchronous best-effort check; see each adapter for
/// how strong (or weak) its answer actually is.
#[async_trait]
pub trait DatabaseClient {
    async fn connect(&self) -> Result<(), DbError>;
    async fn disconnect(&self) -> Result<(), DbError>;
    fn is_connected(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub rows: Vec<T>,
    pub row_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    #[serde(default)]
    pub ssl: Option<bool>,
    #[serde(default)]
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CouchDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    /// Overrides `username`/`password` when present.
    #[serde(default)]
    pub auth: Option<Credentials>,
}
