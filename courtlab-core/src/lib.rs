//! CourtLab Core — domain types, data pipeline, team search.
//!
//! This crate contains everything below the UI:
//! - The `TeamRecord` domain type and the `StatColumn` column catalog
//! - CSV ingestion with schema validation (polars), conversion to domain
//!   records, and load-time invariant checks
//! - The case-insensitive substring search that drives every view
//! - Optional TOML configuration discovery

pub mod config;
pub mod data;
pub mod domain;
pub mod search;

pub use data::league::League;
pub use domain::{StatColumn, TeamRecord};
