//! Integration tests against a live local PostgreSQL instance.
//!
//! Run with: cargo test --features db-tests
//!
//! Prerequisites: PostgreSQL on localhost:5432 with a `test`/`test` role
//! and a `test_db` database.

#![cfg(feature = "db-tests")]

use nutriplan::db::{DatabaseClient, PostgresClient, PostgresConfig, SqlParam};
use sqlx::FromRow;

fn live_config() -> PostgresConfig {
    PostgresConfig {
        host: "localhost".into(),
        port: 5432,
        username: "test".into(),
        password: "test".into(),
        database: "test_db".into(),
        ssl: None,
        max_connections: Some(2),
    }
}

#[derive(Debug, FromRow)]
struct ValueRow {
    value: i32,
}

#[tokio::test]
async fn connect_then_query_round_trip() {
    let client = PostgresClient::new(&live_config());
    client.connect().await.expect("postgres reachable");
    assert!(client.is_connected());

    let result = client
        .query::<ValueRow>("SELECT $1::int AS value", &[SqlParam::Int(42)])
        .await
        .expect("query succeeds");
    assert_eq!(result.row_count, 1);
    assert_eq!(result.rows[0].value, 42);

    client.disconnect().await.expect("disconnect succeeds");
    assert!(!client.is_connected());
}

#[tokio::test]
async fn zero_matching_rows_is_an_empty_result_not_null() {
    let client = PostgresClient::new(&live_config());
    client.connect().await.expect("postgres reachable");

    let result = client
        .query::<ValueRow>(
            "SELECT 1 AS value WHERE $1::bool",
            &[SqlParam::Bool(false)],
        )
        .await
        .expect("query succeeds");
    assert!(result.rows.is_empty());
    assert_eq!(result.row_count, 0);
}
