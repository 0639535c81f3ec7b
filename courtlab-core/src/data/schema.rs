use polars::prelude::*;

use crate::domain::StatColumn;

/// Expected schema for the league CSV.
pub struct TeamSchema;

impl TeamSchema {
    /// Get the canonical league schema: `School` plus one column per
    /// `StatColumn`, in table order. Counts are Int64, everything else
    /// Float64.
    pub fn schema() -> Schema {
        let mut fields = vec![Field::new("School".into(), DataType::String)];
        for col in StatColumn::ALL {
            let dtype = if col.is_count() {
                DataType::Int64
            } else {
                DataType::Float64
            };
            fields.push(Field::new(col.csv_header().into(), dtype));
        }
        Schema::from_iter(fields)
    }

    /// Validate a DataFrame against the schema.
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let expected = Self::schema();
        let actual = df.schema();

        // Check all required columns exist
        for field in expected.iter_fields() {
            if !actual.contains(field.name()) {
                return Err(SchemaError::MissingColumn(field.name().to_string()));
            }
        }

        // Check data types match
        for field in expected.iter_fields() {
            let actual_dtype = actual
                .get(field.name())
                .ok_or_else(|| SchemaError::MissingColumn(field.name().to_string()))?;
            if actual_dtype != field.dtype() {
                return Err(SchemaError::TypeMismatch {
                    column: field.name().to_string(),
                    expected: field.dtype().clone(),
                    actual: actual_dtype.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Type mismatch in column {column}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: DataType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_all_required_columns() {
        let schema = TeamSchema::schema();
        assert!(schema.contains("School"));
        for col in StatColumn::ALL {
            assert!(schema.contains(col.csv_header()), "missing {}", col.csv_header());
        }
        assert_eq!(schema.len(), 1 + StatColumn::ALL.len());
    }

    #[test]
    fn test_count_columns_are_integers() {
        let schema = TeamSchema::schema();
        assert_eq!(
            schema.get("NCAAChampCount"),
            Some(&DataType::Int64)
        );
        assert_eq!(
            schema.get("WinPct2023"),
            Some(&DataType::Float64)
        );
    }

    #[test]
    fn test_validate_rejects_missing_column() {
        let df = DataFrame::new(vec![
            Column::Series(Series::new("School".into(), &["Kansas"]).into()),
            Column::Series(Series::new("AllTimeWins".into(), &[2385i64]).into()),
            // Everything else missing
        ])
        .unwrap();

        let result = TeamSchema::validate(&df);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SchemaError::MissingColumn(_)));
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let mut columns = vec![Column::Series(Series::new("School".into(), &["Kansas"]).into())];
        for col in StatColumn::ALL {
            if col == StatColumn::AllTimeWins {
                // Wrong type: string where Int64 is expected
                columns.push(Column::Series(Series::new(
                    col.csv_header().into(),
                    &["not_a_number"],
                ).into()));
            } else if col.is_count() {
                columns.push(Column::Series(Series::new(col.csv_header().into(), &[1i64]).into()));
            } else {
                columns.push(Column::Series(Series::new(col.csv_header().into(), &[0.5f64]).into()));
            }
        }
        let df = DataFrame::new(columns).unwrap();

        let result = TeamSchema::validate(&df);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SchemaError::TypeMismatch { .. }));
    }
}
