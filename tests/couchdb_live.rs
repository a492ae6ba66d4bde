//! End-to-end tests against a live local CouchDB instance.
//!
//! Run with: cargo test --features db-tests
//!
//! Prerequisites: CouchDB on localhost:5984 with a `test`/`test` admin and
//! an existing `test_db` database.

#![cfg(feature = "db-tests")]

use nutriplan::db::{CouchDbClient, CouchDbConfig, DatabaseClient, DbError, Document};
use serde_json::{Map, Value};

fn live_config() -> CouchDbConfig {
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

fn food_doc(id: &str) -> Document {
    let mut fields = Map::new();
    fields.insert("type".into(), Value::String("foodItem".into()));
    fields.insert("unit".into(), Value::String("g".into()));
    Document::new(id, fields)
}

#[tokio::test]
async fn insert_then_get_returns_document_with_revision() {
    let client = CouchDbClient::new(&live_config());
    client.connect().await.expect("couchdb reachable");

    let id = format!("food-{}", uuid::Uuid::new_v4());
    let ack = client.insert(&food_doc(&id)).await.expect("insert succeeds");
    assert!(ack.ok);
    assert_eq!(ack.id, id);

    let stored = client.get(&id).await.expect("get succeeds");
    assert_eq!(stored.id, id);
    assert!(stored.rev.is_some());
    assert_eq!(stored.fields["type"], "foodItem");

    client.delete(&id).await.expect("cleanup");
}

#[tokio::test]
async fn update_bumps_the_revision() {
    let client = CouchDbClient::new(&live_config());
    let id = format!("food-{}", uuid::Uuid::new_v4());
    client.insert(&food_doc(&id)).await.expect("insert succeeds");

    let before = client.get(&id).await.expect("get succeeds");

    let mut changed = food_doc(&id);
    changed
        .fields
        .insert("unit".into(), Value::String("ml".into()));
    client.update(&id, &changed).await.expect("update succeeds");

    let after = client.get(&id).await.expect("get succeeds");
    assert_ne!(after.rev, before.rev);
    assert_eq!(after.fields["unit"], "ml");

    client.delete(&id).await.expect("cleanup");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let client = CouchDbClient::new(&live_config());
    let id = format!("food-{}", uuid::Uuid::new_v4());
    client.insert(&food_doc(&id)).await.expect("insert succeeds");
    client.delete(&id).await.expect("delete succeeds");

    match client.get(&id).await {
        Err(DbError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("expected NotFound, got {:?}", other.map(|d| d.id)),
    }
}
