//! Conversion from the ingested DataFrame to domain records.
//!
//! The data pipeline hands the UI a `Vec<TeamRecord>`, not a DataFrame; this
//! module bridges the gap with a one-time conversion before the event loop
//! begins. Row order is preserved.

use polars::prelude::*;

use crate::data::ingest::DataError;
use crate::domain::{StatColumn, TeamRecord};

/// Convert a schema-validated DataFrame into domain records, row order
/// preserved.
///
/// Nulls are rejected (`MissingValue`), as are count values that do not fit
/// a `u32` (`OutOfRange`).
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<TeamRecord>, DataError> {
    let schools = df
        .column("School")
        .and_then(|c| c.str())
        .map_err(map_err)?;

    // Bind every numeric column's chunked array once, up front.
    let counts = CountColumns::bind(df)?;
    let floats = FloatColumns::bind(df)?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let school = schools
            .get(row)
            .ok_or_else(|| missing("School", row))?
            .to_string();

        records.push(TeamRecord {
            all_time_wins: count_at(counts.all_time_wins, StatColumn::AllTimeWins, row, &school)?,
            all_time_win_pct: float_at(floats.all_time_win_pct, StatColumn::AllTimeWinPct, row)?,
            conf_champ_post_count: count_at(counts.conf_champ_post, StatColumn::ConfChampPost, row, &school)?,
            ncaa_app_count: count_at(counts.ncaa_apps, StatColumn::NcaaAppearances, row, &school)?,
            ncaa_final_four_count: count_at(counts.final_fours, StatColumn::NcaaFinalFours, row, &school)?,
            ncaa_champ_count: count_at(counts.champs, StatColumn::NcaaChampionships, row, &school)?,
            reg_season_conf_champ_count: count_at(counts.reg_season, StatColumn::RegSeasonConfChamps, row, &school)?,
            wins_2023: count_at(counts.wins_2023, StatColumn::Wins2023, row, &school)?,
            win_pct_2023: float_at(floats.win_pct_2023, StatColumn::WinPct2023, row)?,
            fg_pct_2023: float_at(floats.fg_pct, StatColumn::FgPct2023, row)?,
            three_p_pct_2023: float_at(floats.three_p_pct, StatColumn::ThreePPct2023, row)?,
            ft_pct_2023: float_at(floats.ft_pct, StatColumn::FtPct2023, row)?,
            tot_reb_2023: float_at(floats.tot_reb, StatColumn::TotReb2023, row)?,
            assists_2023: float_at(floats.assists, StatColumn::Assists2023, row)?,
            off_reb_2023: float_at(floats.off_reb, StatColumn::OffReb2023, row)?,
            steals_2023: float_at(floats.steals, StatColumn::Steals2023, row)?,
            blocks_2023: float_at(floats.blocks, StatColumn::Blocks2023, row)?,
            turnovers_2023: float_at(floats.turnovers, StatColumn::Turnovers2023, row)?,
            points_2023: float_at(floats.points, StatColumn::Points2023, row)?,
            school,
        });
    }

    Ok(records)
}

/// The Int64 count columns, bound once.
struct CountColumns<'a> {
    all_time_wins: &'a Int64Chunked,
    conf_champ_post: &'a Int64Chunked,
    ncaa_apps: &'a Int64Chunked,
    final_fours: &'a Int64Chunked,
    champs: &'a Int64Chunked,
    reg_season: &'a Int64Chunked,
    wins_2023: &'a Int64Chunked,
}

impl<'a> CountColumns<'a> {
    fn bind(df: &'a DataFrame) -> Result<Self, DataError> {
        Ok(Self {
            all_time_wins: count_column(df, StatColumn::AllTimeWins)?,
            conf_champ_post: count_column(df, StatColumn::ConfChampPost)?,
            ncaa_apps: count_column(df, StatColumn::NcaaAppearances)?,
            final_fours: count_column(df, StatColumn::NcaaFinalFours)?,
            champs: count_column(df, StatColumn::NcaaChampionships)?,
            reg_season: count_column(df, StatColumn::RegSeasonConfChamps)?,
            wins_2023: count_column(df, StatColumn::Wins2023)?,
        })
    }
}

/// The Float64 columns, bound once.
struct FloatColumns<'a> {
    all_time_win_pct: &'a Float64Chunked,
    win_pct_2023: &'a Float64Chunked,
    fg_pct: &'a Float64Chunked,
    three_p_pct: &'a Float64Chunked,
    ft_pct: &'a Float64Chunked,
    tot_reb: &'a Float64Chunked,
    assists: &'a Float64Chunked,
    off_reb: &'a Float64Chunked,
    steals: &'a Float64Chunked,
    blocks: &'a Float64Chunked,
    turnovers: &'a Float64Chunked,
    points: &'a Float64Chunked,
}

impl<'a> FloatColumns<'a> {
    fn bind(df: &'a DataFrame) -> Result<Self, DataError> {
        Ok(Self {
            all_time_win_pct: float_column(df, StatColumn::AllTimeWinPct)?,
            win_pct_2023: float_column(df, StatColumn::WinPct2023)?,
            fg_pct: float_column(df, StatColumn::FgPct2023)?,
            three_p_pct: float_column(df, StatColumn::ThreePPct2023)?,
            ft_pct: float_column(df, StatColumn::FtPct2023)?,
            tot_reb: float_column(df, StatColumn::TotReb2023)?,
            assists: float_column(df, StatColumn::Assists2023)?,
            off_reb: float_column(df, StatColumn::OffReb2023)?,
            steals: float_column(df, StatColumn::Steals2023)?,
            blocks: float_column(df, StatColumn::Blocks2023)?,
            turnovers: float_column(df, StatColumn::Turnovers2023)?,
            points: float_column(df, StatColumn::Points2023)?,
        })
    }
}

fn count_at(
    ca: &Int64Chunked,
    col: StatColumn,
    row: usize,
    school: &str,
) -> Result<u32, DataError> {
    let value = ca
        .get(row)
        .ok_or_else(|| missing(col.csv_header(), row))?;
    u32::try_from(value).map_err(|_| DataError::OutOfRange {
        column: col.csv_header().to_string(),
        school: school.to_string(),
        value: value as f64,
    })
}

fn float_at(ca: &Float64Chunked, col: StatColumn, row: usize) -> Result<f64, DataError> {
    ca.get(row).ok_or_else(|| missing(col.csv_header(), row))
}

fn count_column<'a>(df: &'a DataFrame, col: StatColumn) -> Result<&'a Int64Chunked, DataError> {
    df.column(col.csv_header())
        .and_then(|c| c.i64())
        .map_err(map_err)
}

fn float_column<'a>(df: &'a DataFrame, col: StatColumn) -> Result<&'a Float64Chunked, DataError> {
    df.column(col.csv_header())
        .and_then(|c| c.f64())
        .map_err(map_err)
}

fn map_err(e: PolarsError) -> DataError {
    DataError::IngestFailed(e.to_string())
}

fn missing(column: &str, row: usize) -> DataError {
    DataError::MissingValue {
        column: column.to_string(),
        row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_frame() -> DataFrame {
        let mut columns = vec![Column::Series(Series::new(
            "School".into(),
            &["Kansas", "Duke"],
        ).into())];
        for col in StatColumn::ALL {
            if col.is_count() {
                columns.push(Column::Series(Series::new(
                    col.csv_header().into(),
                    &[4i64, 5i64],
                ).into()));
            } else {
                columns.push(Column::Series(Series::new(
                    col.csv_header().into(),
                    &[0.25f64, 0.75f64],
                ).into()));
            }
        }
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn converts_rows_in_order() {
        let records = dataframe_to_records(&two_row_frame()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].school, "Kansas");
        assert_eq!(records[1].school, "Duke");
        assert_eq!(records[0].ncaa_champ_count, 4);
        assert_eq!(records[1].ncaa_champ_count, 5);
        assert_eq!(records[0].win_pct_2023, 0.25);
        assert_eq!(records[1].fg_pct_2023, 0.75);
    }

    #[test]
    fn rejects_negative_counts() {
        let df = two_row_frame()
            .lazy()
            .with_column(lit(-1i64).cast(DataType::Int64).alias("NCAAChampCount"))
            .collect()
            .unwrap();

        let err = dataframe_to_records(&df).unwrap_err();
        assert!(matches!(err, DataError::OutOfRange { .. }));
    }

    #[test]
    fn rejects_null_values() {
        let mut columns = vec![Column::Series(Series::new(
            "School".into(),
            &[Some("Kansas"), None],
        ).into())];
        for col in StatColumn::ALL {
            if col.is_count() {
                columns.push(Column::Series(Series::new(
                    col.csv_header().into(),
                    &[1i64, 1i64],
                ).into()));
            } else {
                columns.push(Column::Series(Series::new(
                    col.csv_header().into(),
                    &[0.5f64, 0.5f64],
                ).into()));
            }
        }
        let df = DataFrame::new(columns).unwrap();

        let err = dataframe_to_records(&df).unwrap_err();
        assert!(matches!(err, DataError::MissingValue { .. }));
    }
}
