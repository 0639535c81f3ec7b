//! The league table: loaded once at startup, immutable afterwards.

use std::collections::HashSet;
use std::path::Path;

use crate::data::convert::dataframe_to_records;
use crate::data::ingest::{DataError, DataIngestor};
use crate::domain::{StatColumn, TeamRecord};

/// The full set of team records. Owns the rows and hands out references;
/// nothing mutates or persists the table after load.
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<TeamRecord>,
}

impl League {
    /// Load the league from a CSV file: ingest, validate the schema,
    /// convert to records, then validate the table invariants.
    pub fn load_csv(path: &Path) -> Result<Self, DataError> {
        let df = DataIngestor::new().ingest_csv(path)?;
        let records = dataframe_to_records(&df)?;
        Self::from_records(records)
    }

    /// Build a league from in-memory records, running the same invariant
    /// checks as the CSV path. Used by tests and the built-in demo data.
    pub fn from_records(teams: Vec<TeamRecord>) -> Result<Self, DataError> {
        if teams.is_empty() {
            return Err(DataError::EmptyTable("in-memory records".to_string()));
        }
        validate_invariants(&teams)?;
        Ok(Self { teams })
    }

    /// All teams, in table order.
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Resolve a school name to its record. Exact match, the selection
    /// semantics of the original table.
    pub fn find(&self, school: &str) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.school == school)
    }
}

/// Table invariants: unique school names, finite non-negative values,
/// percentages within `[0, 1]`.
fn validate_invariants(teams: &[TeamRecord]) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team.school.as_str()) {
            return Err(DataError::DuplicateSchool(team.school.clone()));
        }

        for col in StatColumn::ALL {
            let value = col.value(team);
            if !value.is_finite() || value < 0.0 {
                return Err(out_of_range(col, team, value));
            }
            if col.is_percentage() && value > 1.0 {
                return Err(out_of_range(col, team, value));
            }
        }
    }
    Ok(())
}

fn out_of_range(col: StatColumn, team: &TeamRecord, value: f64) -> DataError {
    DataError::OutOfRange {
        column: col.csv_header().to_string(),
        school: team.school.clone(),
        value,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(school: &str) -> TeamRecord {
        TeamRecord {
            school: school.to_string(),
            all_time_wins: 1500,
            all_time_win_pct: 0.65,
            conf_champ_post_count: 5,
            ncaa_app_count: 30,
            ncaa_final_four_count: 4,
            ncaa_champ_count: 1,
            reg_season_conf_champ_count: 20,
            wins_2023: 22,
            win_pct_2023: 0.647,
            fg_pct_2023: 0.46,
            three_p_pct_2023: 0.35,
            ft_pct_2023: 0.72,
            tot_reb_2023: 34.0,
            assists_2023: 14.5,
            off_reb_2023: 9.0,
            steals_2023: 6.5,
            blocks_2023: 3.1,
            turnovers_2023: 12.0,
            points_2023: 72.4,
        }
    }

    #[test]
    fn from_records_accepts_valid_table() {
        let league = League::from_records(vec![record("Kansas"), record("Duke")]).unwrap();
        assert_eq!(league.len(), 2);
        assert_eq!(league.teams()[0].school, "Kansas");
    }

    #[test]
    fn find_is_exact_match() {
        let league = League::from_records(vec![record("Kansas"), record("Kansas State")]).unwrap();
        assert_eq!(league.find("Kansas").unwrap().school, "Kansas");
        assert_eq!(
            league.find("Kansas State").unwrap().school,
            "Kansas State"
        );
        assert!(league.find("kansas").is_none());
        assert!(league.find("Kan").is_none());
    }

    #[test]
    fn rejects_duplicate_school() {
        let err = League::from_records(vec![record("Kansas"), record("Kansas")]).unwrap_err();
        assert!(matches!(err, DataError::DuplicateSchool(s) if s == "Kansas"));
    }

    #[test]
    fn rejects_percentage_above_one() {
        let mut bad = record("Duke");
        bad.fg_pct_2023 = 1.2;
        let err = League::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, DataError::OutOfRange { column, .. } if column == "FGPct2023"));
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut bad = record("Duke");
        bad.points_2023 = f64::NAN;
        assert!(League::from_records(vec![bad]).is_err());

        let mut bad = record("Duke");
        bad.assists_2023 = -3.0;
        assert!(League::from_records(vec![bad]).is_err());
    }

    #[test]
    fn rejects_empty_table() {
        let err = League::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, DataError::EmptyTable(_)));
    }

    #[test]
    fn percentage_of_exactly_one_is_allowed() {
        let mut team = record("Perfect U");
        team.ft_pct_2023 = 1.0;
        assert!(League::from_records(vec![team]).is_ok());
    }
}
