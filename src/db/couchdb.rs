use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::{CouchDbConfig, DatabaseClient, DbError, Protocol};

/// A stored document: `_id`, optional `_rev`, arbitrary extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            rev: None,
            fields,
        }
    }
}

/// Server acknowledgment for a write.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentResponse {
    pub ok: bool,
    pub id: String,
    pub rev: String,
}

/// Document-store adapter over the CouchDB HTTP API.
///
/// Construction never fails and performs no I/O; `connect` is the first
/// point at which the server is actually contacted.
pub struct CouchDbClient {
    http: reqwest::Client,
    database_url: String,
    username: String,
    password: String,
}

impl CouchDbClient {
    pub fn new(config: &CouchDbConfig) -> Self {
        let protocol = config.protocol.unwrap_or(Protocol::Http);
        let base_url = format!("{}://{}:{}", protocol.as_str(), config.host, config.port);
        let (username, password) = match &config.auth {
            Some(auth) => (auth.username.clone(), auth.password.clone()),
            None => (config.username.clone(), config.password.clone()),
        };

        Self {
            http: reqwest::Client::new(),
            database_url: format!("{}/{}", base_url, config.database),
            username,
            password,
        }
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(&self.password))
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.database_url, id)
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response, DbError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(DbError::UnexpectedStatus(response.status().as_u16()))
        }
    }

    pub async fn get(&self, id: &str) -> Result<Document, DbError> {
        let response = self
            .request(self.http.get(self.document_url(id)))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DbError::NotFound(id.to_string()));
        }
        let response = Self::check(response)?;
        Ok(response.json::<Document>().await?)
    }

    pub async fn insert(&self, doc: &Document) -> Result<DocumentResponse, DbError> {
        let response = self
            .request(self.http.put(self.document_url(&doc.id)).json(doc))
            .send()
            .await?;
        let response = Self::check(response)?;
        let ack = response.json::<DocumentResponse>().await?;
        debug!(id = %ack.id, rev = %ack.rev, "document inserted");
        Ok(ack)
    }

    /// Read-modify-write: fetches the current revision, then overwrites.
    /// A concurrent writer makes the server reject the PUT with a conflict,
    /// which surfaces as an error; there is no retry.
    pub async fn update(&self, id: &str, doc: &Document) -> Result<DocumentResponse, DbError> {
        let existing = self.get(id).await?;
        let mut updated = doc.clone();
        updated.id = id.to_string();
        updated.rev = existing.rev;

        let response = self
            .request(self.http.put(self.document_url(id)).json(&updated))
            .send()
            .await?;
        let response = Self::check(response)?;
        Ok(response.json::<DocumentResponse>().await?)
    }

    /// Read-then-destroy using the current revision token.
    pub async fn delete(&self, id: &str) -> Result<DocumentResponse, DbError> {
        let existing = self.get(id).await?;
        let rev = existing
            .rev
            .ok_or_else(|| DbError::MissingRevision(id.to_string()))?;

        let url = format!("{}?rev={}", self.document_url(id), rev);
        let response = self.request(self.http.delete(url)).send().await?;
        let response = Self::check(response)?;
        Ok(response.json::<DocumentResponse>().await?)
    }
}

#[async_trait]
impl DatabaseClient for CouchDbClient {
    /// Probes the database-info endpoint. Any failure is re-thrown as a
    /// single connection error carrying the underlying message.
    async fn connect(&self) -> Result<(), DbError> {
        let response = self
            .request(self.http.get(&self.database_url))
            .send()
            .await
            .map_err(|e| DbError::CouchConnection(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DbError::CouchConnection(format!(
                "server answered {}",
                response.status()
            )));
        }
        debug!(url = %self.database_url, "couchdb reachable");
        Ok(())
    }

    /// CouchDB is stateless over HTTP; there is nothing to release.
    async fn disconnect(&self) -> Result<(), DbError> {
        Ok(())
    }

    /// Handle-only check: true does not imply the server is reachable.
    /// Weaker than the pool-based adapter's answer, by contract.
    fn is_connected(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Credentials;

    fn test_config() -> CouchDbConfig {
        CouchDbConfig {
            host: "localhost".into(),
            port: 5984,
            username: "test".into(),
            password: "test".into(),
            database: "test_db".into(),
            protocol: None,
            auth: None,
        }
    }

    #[test]
    fn construction_never_fails_and_reports_connected() {
        let client = CouchDbClient::new(&test_config());
        assert!(client.is_connected());
        assert_eq!(client.database_url, "http://localhost:5984/test_db");
    }

    #[test]
    fn protocol_override_changes_scheme() {
        let config = CouchDbConfig {
            protocol: Some(Protocol::Https),
            ..test_config()
        };
        let client = CouchDbClient::new(&config);
        assert_eq!(client.database_url, "https://localhost:5984/test_db");
    }

    #[test]
    fn explicit_auth_overrides_config_credentials() {
        let config = CouchDbConfig {
            auth: Some(Credentials {
                username: "admin".into(),
                password: "hunter2".into(),
            }),
            ..test_config()
        };
        let client = CouchDbClient::new(&config);
        assert_eq!(client.username, "admin");
        assert_eq!(client.password, "hunter2");
    }

    #[test]
    fn document_serializes_rev_only_when_present() {
        let mut fields = Map::new();
        fields.insert("type".into(), Value::String("foodItem".into()));
        let doc = Document::new("food-1", fields);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["_id"], "food-1");
        assert_eq!(json["type"], "foodItem");
        assert!(json.get("_rev").is_none());

        let stored = serde_json::json!({
            "_id": "food-1",
            "_rev": "1-abc",
            "type": "foodItem",
        });
        let back: Document = serde_json::from_value(stored).unwrap();
        assert_eq!(back.rev.as_deref(), Some("1-abc"));
        assert_eq!(back.fields["type"], "foodItem");
    }
}
