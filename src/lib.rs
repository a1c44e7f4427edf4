//! Library catalog service
//!
//! Authors, books, customers and borrowing records behind a JSON HTTP API,
//! persisted in PostgreSQL.

pub mod adapters;
pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use config::AppConfig;
