use serde::Deserialize;

use crate::db::{CouchDbConfig, PostgresConfig, Protocol};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub postgres: PostgresConfig,
    pub couchdb: CouchDbConfig,
}

impl AppConfig {
    /// Everything defaults to a local development setup; any value can be
    /// overridden from the environment (`.env` is loaded by the binary).
    pub fn from_env() -> Self {
        let postgres = PostgresConfig {
            host: env_or("POSTGRES_HOST", "localhost"),
            port: std::env::var("POSTGRES_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5432),
            username: env_or("POSTGRES_USER", "postgres"),
            password: env_or("POSTGRES_PASSWORD", "postgres"),
            database: env_or("POSTGRES_DB", "nutriplan"),
            ssl: std::env::var("POSTGRES_SSL").ok().map(|v| v == "true"),
            max_connections: std::env::var("POSTGRES_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok()),
        };
        let couchdb = CouchDbConfig {
            host: env_or("COUCHDB_HOST", "localhost"),
            port: std::env::var("COUCHDB_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5984),
            username: env_or("COUCHDB_USER", "admin"),
            password: env_or("COUCHDB_PASSWORD", "admin"),
            database: env_or("COUCHDB_DB", "nutriplan"),
            protocol: std::env::var("COUCHDB_PROTOCOL")
                .ok()
                .and_then(|v| match v.as_str() {
                    "http" => Some(Protocol::Http),
                    "https" => Some(Protocol::Https),
                    _ => None,
                }),
            auth: None,
        };
        Self { postgres, couchdb }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_stores() {
        let config = AppConfig::from_env();
        assert_eq!(config.postgres.port, 5432);
        assert_eq!(config.couchdb.port, 5984);
        assert_eq!(config.couchdb.database, "nutriplan");
    }
}
