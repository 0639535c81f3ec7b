//! Data pipeline: CSV ingest, schema validation, conversion, league table.

pub mod convert;
pub mod ingest;
pub mod league;
pub mod schema;

pub use ingest::{DataError, DataIngestor};
pub use league::League;
pub use schema::{SchemaError, TeamSchema};
