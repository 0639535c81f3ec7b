//! Built-in demo league so the TUI runs without a CSV on disk.
//!
//! A dozen well-known programs with plausible (not authoritative) numbers.
//! Goes through `League::from_records`, so it passes the same invariant
//! checks as a real file.

use courtlab_core::{League, TeamRecord};

#[allow(clippy::too_many_arguments)]
fn team(
    school: &str,
    all_time_wins: u32,
    all_time_win_pct: f64,
    conf_post: u32,
    apps: u32,
    final_fours: u32,
    champs: u32,
    reg_season: u32,
    wins_2023: u32,
    win_pct_2023: f64,
    fg: f64,
    three_p: f64,
    ft: f64,
    reb: f64,
    ast: f64,
    oreb: f64,
    stl: f64,
    blk: f64,
    tov: f64,
    pts: f64,
) -> TeamRecord {
    TeamRecord {
        school: school.to_string(),
        all_time_wins,
        all_time_win_pct,
        conf_champ_post_count: conf_post,
        ncaa_app_count: apps,
        ncaa_final_four_count: final_fours,
        ncaa_champ_count: champs,
        reg_season_conf_champ_count: reg_season,
        wins_2023,
        win_pct_2023,
        fg_pct_2023: fg,
        three_p_pct_2023: three_p,
        ft_pct_2023: ft,
        tot_reb_2023: reb,
        assists_2023: ast,
        off_reb_2023: oreb,
        steals_2023: stl,
        blocks_2023: blk,
        turnovers_2023: tov,
        points_2023: pts,
    }
}

/// The demo league.
pub fn demo_league() -> League {
    let teams = vec![
        team("UConn", 1810, 0.658, 12, 36, 6, 5, 27, 31, 0.795, 0.486, 0.359, 0.742, 37.8, 17.5, 11.2, 6.3, 5.0, 10.9, 78.5),
        team("Kansas", 2385, 0.723, 13, 51, 16, 4, 64, 28, 0.718, 0.475, 0.344, 0.721, 35.2, 16.1, 9.4, 7.8, 3.6, 11.9, 74.9),
        team("Kentucky", 2377, 0.720, 32, 59, 17, 8, 54, 22, 0.647, 0.462, 0.341, 0.706, 36.4, 14.8, 10.8, 6.1, 4.2, 11.1, 75.3),
        team("UCLA", 1970, 0.662, 5, 49, 19, 11, 41, 31, 0.795, 0.455, 0.328, 0.730, 33.9, 14.2, 8.7, 7.9, 3.9, 9.8, 71.8),
        team("Duke", 2264, 0.712, 22, 45, 17, 5, 23, 27, 0.711, 0.471, 0.352, 0.731, 36.1, 14.9, 10.1, 5.9, 4.8, 10.7, 76.4),
        team("North Carolina", 2354, 0.733, 18, 52, 21, 6, 33, 20, 0.556, 0.441, 0.309, 0.754, 38.9, 13.8, 10.3, 6.4, 3.8, 10.5, 76.1),
        team("Gonzaga", 1611, 0.691, 20, 24, 2, 0, 22, 31, 0.838, 0.525, 0.368, 0.713, 34.7, 16.3, 8.8, 6.8, 3.1, 10.2, 86.2),
        team("Villanova", 1843, 0.645, 8, 40, 7, 3, 16, 17, 0.486, 0.437, 0.350, 0.781, 31.6, 12.4, 7.9, 5.5, 2.8, 10.8, 68.8),
        team("Michigan State", 1752, 0.638, 6, 36, 10, 2, 16, 21, 0.618, 0.462, 0.372, 0.749, 35.0, 15.9, 9.0, 4.9, 3.3, 10.4, 71.6),
        team("Indiana", 1918, 0.645, 0, 40, 8, 5, 22, 23, 0.657, 0.491, 0.339, 0.729, 33.9, 14.7, 7.8, 5.6, 4.6, 11.6, 74.7),
        team("Houston", 1512, 0.617, 6, 24, 6, 0, 14, 33, 0.892, 0.455, 0.339, 0.708, 37.4, 14.0, 12.8, 8.3, 4.9, 10.6, 75.0),
        team("Wisconsin", 1624, 0.583, 4, 26, 4, 1, 20, 20, 0.571, 0.425, 0.309, 0.694, 30.8, 11.8, 7.2, 6.2, 2.4, 8.5, 65.2),
    ];
    League::from_records(teams).expect("demo league satisfies the table invariants")
}
