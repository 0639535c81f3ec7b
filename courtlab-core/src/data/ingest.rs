use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::data::schema::{SchemaError, TeamSchema};

/// CSV ingestor for the league table.
pub struct DataIngestor {
    schema: Schema,
}

impl DataIngestor {
    pub fn new() -> Self {
        Self {
            schema: TeamSchema::schema(),
        }
    }

    /// Ingest the league CSV and validate it against the canonical schema.
    pub fn ingest_csv(&self, path: &Path) -> Result<DataFrame, DataError> {
        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }
        let df = LazyCsvReader::new(path)
            .with_schema(Some(Arc::new(self.schema.clone())))
            .with_has_header(true)
            .finish()
            .and_then(|lf| lf.collect())
            .map_err(|e| DataError::IngestFailed(e.to_string()))?;

        TeamSchema::validate(&df)?;

        if df.height() == 0 {
            return Err(DataError::EmptyTable(path.display().to_string()));
        }

        Ok(df)
    }
}

impl Default for DataIngestor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Ingest failed: {0}")]
    IngestFailed(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Table is empty: {0}")]
    EmptyTable(String),

    #[error("Missing value in column {column}, row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Duplicate school: {0}")]
    DuplicateSchool(String),

    #[error("Value out of range in column {column} for {school}: {value}")]
    OutOfRange {
        column: String,
        school: String,
        value: f64,
    },
}
