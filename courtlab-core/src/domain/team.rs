//! `TeamRecord` — one school's combined all-time and 2023-season statistics.

use serde::{Deserialize, Serialize};

/// A single row of the league table.
///
/// Count-valued columns are `u32`; shooting percentages are fractions in
/// `[0, 1]`; box-score aggregates are `f64` since season tables commonly
/// carry per-game averages. The table owning these records is immutable for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// School name — unique key within the table.
    pub school: String,

    // All-time program history
    pub all_time_wins: u32,
    pub all_time_win_pct: f64,
    pub conf_champ_post_count: u32,
    pub ncaa_app_count: u32,
    pub ncaa_final_four_count: u32,
    pub ncaa_champ_count: u32,
    pub reg_season_conf_champ_count: u32,

    // 2023 season
    pub wins_2023: u32,
    pub win_pct_2023: f64,
    pub fg_pct_2023: f64,
    pub three_p_pct_2023: f64,
    pub ft_pct_2023: f64,
    pub tot_reb_2023: f64,
    pub assists_2023: f64,
    pub off_reb_2023: f64,
    pub steals_2023: f64,
    pub blocks_2023: f64,
    pub turnovers_2023: f64,
    pub points_2023: f64,
}
