//! Nutritionist/client platform: web dashboard, shared domain types, and
//! database adapters for the platform's relational and document stores.
//!
//! The `types` and `db` modules are consumable as standalone libraries; the
//! web layer does not call the adapters.

pub mod app;
pub mod config;
pub mod db;
pub mod pages;
pub mod state;
pub mod types;
pub mod ui;
