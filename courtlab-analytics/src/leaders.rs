//! Top-N leaderboards — bounded, deterministically ordered.
//!
//! Descending by the chosen column; ties break by school name ascending so
//! the same table always produces the same board.

use serde::{Deserialize, Serialize};

use courtlab_core::{League, StatColumn};

/// A single leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub rank: usize,
    pub school: String,
    pub value: f64,
}

/// Top `n` teams by `column`. `n` is clamped to the league size.
pub fn leaders(league: &League, column: StatColumn, n: usize) -> Vec<LeaderEntry> {
    let mut ranked: Vec<(&str, f64)> = league
        .teams()
        .iter()
        .map(|t| (t.school.as_str(), column.value(t)))
        .collect();

    // Values are validated finite at load, so total ordering is safe here.
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    ranked
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, (school, value))| LeaderEntry {
            rank: i + 1,
            school: school.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtlab_core::TeamRecord;

    fn record(school: &str, champs: u32) -> TeamRecord {
        TeamRecord {
            school: school.to_string(),
            all_time_wins: 1000,
            all_time_win_pct: 0.6,
            conf_champ_post_count: 2,
            ncaa_app_count: 15,
            ncaa_final_four_count: 3,
            ncaa_champ_count: champs,
            reg_season_conf_champ_count: 8,
            wins_2023: 18,
            win_pct_2023: 0.55,
            fg_pct_2023: 0.45,
            three_p_pct_2023: 0.33,
            ft_pct_2023: 0.70,
            tot_reb_2023: 32.0,
            assists_2023: 13.0,
            off_reb_2023: 8.5,
            steals_2023: 6.0,
            blocks_2023: 2.8,
            turnovers_2023: 11.5,
            points_2023: 69.0,
        }
    }

    fn league() -> League {
        League::from_records(vec![
            record("UCLA", 11),
            record("Kentucky", 8),
            record("North Carolina", 6),
            record("Duke", 5),
            record("Indiana", 5),
            record("Gonzaga", 0),
        ])
        .unwrap()
    }

    #[test]
    fn descending_by_value() {
        let board = leaders(&league(), StatColumn::NcaaChampionships, 3);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].school, "UCLA");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].school, "Kentucky");
        assert_eq!(board[2].school, "North Carolina");
    }

    #[test]
    fn ties_break_by_school_name() {
        let board = leaders(&league(), StatColumn::NcaaChampionships, 5);
        // Duke and Indiana both have 5; Duke sorts first.
        assert_eq!(board[3].school, "Duke");
        assert_eq!(board[4].school, "Indiana");
    }

    #[test]
    fn n_is_clamped_to_league_size() {
        let board = leaders(&league(), StatColumn::NcaaChampionships, 50);
        assert_eq!(board.len(), 6);
        assert_eq!(board[5].school, "Gonzaga");
    }

    #[test]
    fn zero_n_is_empty() {
        assert!(leaders(&league(), StatColumn::NcaaChampionships, 0).is_empty());
    }

    #[test]
    fn ranks_are_sequential() {
        let board = leaders(&league(), StatColumn::AllTimeWins, 6);
        for (i, entry) in board.iter().enumerate() {
            assert_eq!(entry.rank, i + 1);
        }
    }
}
