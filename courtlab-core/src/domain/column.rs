//! `StatColumn` — the closed catalog of numeric columns.
//!
//! Every chart, leaderboard, and CLI command selects columns through this
//! enum, so the set of valid columns is fixed at compile time and each one
//! knows its CSV header, display label, CLI name, and how to read itself
//! out of a `TeamRecord`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::TeamRecord;

/// A numeric column of the league table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatColumn {
    AllTimeWins,
    AllTimeWinPct,
    ConfChampPost,
    NcaaAppearances,
    NcaaFinalFours,
    NcaaChampionships,
    RegSeasonConfChamps,
    Wins2023,
    WinPct2023,
    FgPct2023,
    ThreePPct2023,
    FtPct2023,
    TotReb2023,
    Assists2023,
    OffReb2023,
    Steals2023,
    Blocks2023,
    Turnovers2023,
    Points2023,
}

impl StatColumn {
    /// Every numeric column, in table order.
    pub const ALL: [StatColumn; 19] = [
        StatColumn::AllTimeWins,
        StatColumn::AllTimeWinPct,
        StatColumn::ConfChampPost,
        StatColumn::NcaaAppearances,
        StatColumn::NcaaFinalFours,
        StatColumn::NcaaChampionships,
        StatColumn::RegSeasonConfChamps,
        StatColumn::Wins2023,
        StatColumn::WinPct2023,
        StatColumn::FgPct2023,
        StatColumn::ThreePPct2023,
        StatColumn::FtPct2023,
        StatColumn::TotReb2023,
        StatColumn::Assists2023,
        StatColumn::OffReb2023,
        StatColumn::Steals2023,
        StatColumn::Blocks2023,
        StatColumn::Turnovers2023,
        StatColumn::Points2023,
    ];

    /// The all-time program history columns, in display order.
    pub const ALL_TIME: [StatColumn; 7] = [
        StatColumn::AllTimeWins,
        StatColumn::AllTimeWinPct,
        StatColumn::ConfChampPost,
        StatColumn::NcaaAppearances,
        StatColumn::NcaaFinalFours,
        StatColumn::NcaaChampionships,
        StatColumn::RegSeasonConfChamps,
    ];

    /// The 2023-season columns, in display order.
    pub const SEASON_2023: [StatColumn; 12] = [
        StatColumn::Wins2023,
        StatColumn::WinPct2023,
        StatColumn::FgPct2023,
        StatColumn::ThreePPct2023,
        StatColumn::FtPct2023,
        StatColumn::TotReb2023,
        StatColumn::Assists2023,
        StatColumn::OffReb2023,
        StatColumn::Steals2023,
        StatColumn::Blocks2023,
        StatColumn::Turnovers2023,
        StatColumn::Points2023,
    ];

    /// Column header as it appears in the source CSV.
    pub fn csv_header(self) -> &'static str {
        match self {
            StatColumn::AllTimeWins => "AllTimeWins",
            StatColumn::AllTimeWinPct => "AllTimeWinPct",
            StatColumn::ConfChampPost => "ConfChampPostCount",
            StatColumn::NcaaAppearances => "NCAAAppCount",
            StatColumn::NcaaFinalFours => "NCAAFinalFourCount",
            StatColumn::NcaaChampionships => "NCAAChampCount",
            StatColumn::RegSeasonConfChamps => "RegSeasonConfChampCount",
            StatColumn::Wins2023 => "Wins2023",
            StatColumn::WinPct2023 => "WinPct2023",
            StatColumn::FgPct2023 => "FGPct2023",
            StatColumn::ThreePPct2023 => "3PPct2023",
            StatColumn::FtPct2023 => "FTPct2023",
            StatColumn::TotReb2023 => "TotReb2023",
            StatColumn::Assists2023 => "Assists2023",
            StatColumn::OffReb2023 => "OffReb2023",
            StatColumn::Steals2023 => "Steals2023",
            StatColumn::Blocks2023 => "Blocks2023",
            StatColumn::Turnovers2023 => "Turnovers2023",
            StatColumn::Points2023 => "Points2023",
        }
    }

    /// Human-readable label for tables, chart axes, and reports.
    pub fn label(self) -> &'static str {
        match self {
            StatColumn::AllTimeWins => "All-Time Wins",
            StatColumn::AllTimeWinPct => "All-Time Win %",
            StatColumn::ConfChampPost => "Conf Tournament Titles",
            StatColumn::NcaaAppearances => "NCAA Appearances",
            StatColumn::NcaaFinalFours => "Final Fours",
            StatColumn::NcaaChampionships => "NCAA Championships",
            StatColumn::RegSeasonConfChamps => "Reg Season Conf Titles",
            StatColumn::Wins2023 => "2023 Wins",
            StatColumn::WinPct2023 => "2023 Win %",
            StatColumn::FgPct2023 => "2023 FG %",
            StatColumn::ThreePPct2023 => "2023 3P %",
            StatColumn::FtPct2023 => "2023 FT %",
            StatColumn::TotReb2023 => "2023 Rebounds",
            StatColumn::Assists2023 => "2023 Assists",
            StatColumn::OffReb2023 => "2023 Off Rebounds",
            StatColumn::Steals2023 => "2023 Steals",
            StatColumn::Blocks2023 => "2023 Blocks",
            StatColumn::Turnovers2023 => "2023 Turnovers",
            StatColumn::Points2023 => "2023 Points",
        }
    }

    /// Kebab-case name used on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            StatColumn::AllTimeWins => "all-time-wins",
            StatColumn::AllTimeWinPct => "all-time-win-pct",
            StatColumn::ConfChampPost => "conf-champ-post",
            StatColumn::NcaaAppearances => "ncaa-appearances",
            StatColumn::NcaaFinalFours => "final-fours",
            StatColumn::NcaaChampionships => "ncaa-champs",
            StatColumn::RegSeasonConfChamps => "reg-season-conf-champs",
            StatColumn::Wins2023 => "wins-2023",
            StatColumn::WinPct2023 => "win-pct-2023",
            StatColumn::FgPct2023 => "fg-pct-2023",
            StatColumn::ThreePPct2023 => "3p-pct-2023",
            StatColumn::FtPct2023 => "ft-pct-2023",
            StatColumn::TotReb2023 => "rebounds-2023",
            StatColumn::Assists2023 => "assists-2023",
            StatColumn::OffReb2023 => "off-rebounds-2023",
            StatColumn::Steals2023 => "steals-2023",
            StatColumn::Blocks2023 => "blocks-2023",
            StatColumn::Turnovers2023 => "turnovers-2023",
            StatColumn::Points2023 => "points-2023",
        }
    }

    /// Read this column's value out of a record.
    pub fn value(self, record: &TeamRecord) -> f64 {
        match self {
            StatColumn::AllTimeWins => record.all_time_wins as f64,
            StatColumn::AllTimeWinPct => record.all_time_win_pct,
            StatColumn::ConfChampPost => record.conf_champ_post_count as f64,
            StatColumn::NcaaAppearances => record.ncaa_app_count as f64,
            StatColumn::NcaaFinalFours => record.ncaa_final_four_count as f64,
            StatColumn::NcaaChampionships => record.ncaa_champ_count as f64,
            StatColumn::RegSeasonConfChamps => record.reg_season_conf_champ_count as f64,
            StatColumn::Wins2023 => record.wins_2023 as f64,
            StatColumn::WinPct2023 => record.win_pct_2023,
            StatColumn::FgPct2023 => record.fg_pct_2023,
            StatColumn::ThreePPct2023 => record.three_p_pct_2023,
            StatColumn::FtPct2023 => record.ft_pct_2023,
            StatColumn::TotReb2023 => record.tot_reb_2023,
            StatColumn::Assists2023 => record.assists_2023,
            StatColumn::OffReb2023 => record.off_reb_2023,
            StatColumn::Steals2023 => record.steals_2023,
            StatColumn::Blocks2023 => record.blocks_2023,
            StatColumn::Turnovers2023 => record.turnovers_2023,
            StatColumn::Points2023 => record.points_2023,
        }
    }

    /// True for fraction-valued columns constrained to `[0, 1]`.
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            StatColumn::AllTimeWinPct
                | StatColumn::WinPct2023
                | StatColumn::FgPct2023
                | StatColumn::ThreePPct2023
                | StatColumn::FtPct2023
        )
    }

    /// True for integer count columns (stored as `u32` on the record).
    pub fn is_count(self) -> bool {
        matches!(
            self,
            StatColumn::AllTimeWins
                | StatColumn::ConfChampPost
                | StatColumn::NcaaAppearances
                | StatColumn::NcaaFinalFours
                | StatColumn::NcaaChampionships
                | StatColumn::RegSeasonConfChamps
                | StatColumn::Wins2023
        )
    }

    /// Format a value of this column for display.
    pub fn format_value(self, value: f64) -> String {
        if self.is_percentage() {
            format!("{:.1}%", value * 100.0)
        } else if self.is_count() {
            format!("{}", value as u64)
        } else {
            format!("{value:.1}")
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next column in table order, wrapping.
    pub fn next(self) -> StatColumn {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous column in table order, wrapping.
    pub fn prev(self) -> StatColumn {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StatColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failed to parse a column name from the command line.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown column '{input}' (valid: {valid})")]
pub struct ColumnParseError {
    pub input: String,
    pub valid: String,
}

impl FromStr for StatColumn {
    type Err = ColumnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.cli_name() == lowered || c.csv_header().to_lowercase() == lowered)
            .ok_or_else(|| ColumnParseError {
                input: s.to_string(),
                valid: Self::ALL
                    .iter()
                    .map(|c| c.cli_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
