//! Report export — markdown league report and CSV leaderboard artifacts.

use std::path::Path;

use courtlab_core::{League, StatColumn};

use crate::leaders::leaders;
use crate::stats::{correlation, ColumnSummary};

/// What goes into the markdown report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Leaderboard metric and size.
    pub leader_column: StatColumn,
    pub top_n: usize,
    /// Column pairs for the correlation section.
    pub correlations: Vec<(StatColumn, StatColumn)>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            leader_column: StatColumn::NcaaChampionships,
            top_n: 10,
            correlations: vec![
                (StatColumn::WinPct2023, StatColumn::FgPct2023),
                (StatColumn::WinPct2023, StatColumn::ThreePPct2023),
                (StatColumn::Assists2023, StatColumn::Points2023),
            ],
        }
    }
}

/// Build the full markdown report as a string.
pub fn markdown_report(league: &League, options: &ReportOptions) -> String {
    let mut report = format!(
        "# CourtLab League Report\n\nGenerated: {}\nTeams: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M"),
        league.len()
    );

    // Column summaries
    report.push_str("\n## Column Summaries\n\n");
    report.push_str("| Column | Mean | Std Dev | Min | Max |\n");
    report.push_str("|--------|------|---------|-----|-----|\n");
    for col in StatColumn::ALL {
        let s = ColumnSummary::compute(league, col);
        report.push_str(&format!(
            "| {} | {} | {:.3} | {} | {} |\n",
            col.label(),
            col.format_value(s.mean),
            s.std_dev,
            col.format_value(s.min),
            col.format_value(s.max),
        ));
    }

    // Leaderboard
    report.push_str(&format!(
        "\n## Top {} — {}\n\n| Rank | School | {} |\n|------|--------|-------|\n",
        options.top_n,
        options.leader_column.label(),
        options.leader_column.label(),
    ));
    for entry in leaders(league, options.leader_column, options.top_n) {
        report.push_str(&format!(
            "| {} | {} | {} |\n",
            entry.rank,
            entry.school,
            options.leader_column.format_value(entry.value),
        ));
    }

    // Correlations
    if !options.correlations.is_empty() {
        report.push_str("\n## Correlations\n\n");
        report.push_str("| X | Y | r | r² | Slope | Intercept |\n");
        report.push_str("|---|---|---|----|-------|-----------|\n");
        for (x, y) in &options.correlations {
            let c = correlation(league, *x, *y);
            match c.fit {
                Some(fit) => report.push_str(&format!(
                    "| {} | {} | {:.3} | {:.3} | {:.4} | {:.4} |\n",
                    x.label(),
                    y.label(),
                    c.r,
                    fit.r_squared,
                    fit.slope,
                    fit.intercept,
                )),
                None => report.push_str(&format!(
                    "| {} | {} | n/a | n/a | n/a | n/a |\n",
                    x.label(),
                    y.label(),
                )),
            }
        }
    }

    report
}

/// Write the markdown report to disk.
pub fn write_report(
    path: &Path,
    league: &League,
    options: &ReportOptions,
) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, markdown_report(league, options))?;
    Ok(())
}

/// Export a leaderboard as CSV: `rank,school,value`.
pub fn export_leaders_csv(
    path: &Path,
    league: &League,
    column: StatColumn,
    n: usize,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["rank", "school", column.csv_header()])?;
    for entry in leaders(league, column, n) {
        writer.write_record([
            entry.rank.to_string(),
            entry.school,
            entry.value.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtlab_core::TeamRecord;

    fn record(school: &str, champs: u32, win_pct: f64) -> TeamRecord {
        TeamRecord {
            school: school.to_string(),
            all_time_wins: 1100,
            all_time_win_pct: 0.62,
            conf_champ_post_count: 4,
            ncaa_app_count: 18,
            ncaa_final_four_count: 3,
            ncaa_champ_count: champs,
            reg_season_conf_champ_count: 12,
            wins_2023: 21,
            win_pct_2023: win_pct,
            fg_pct_2023: 0.44 + win_pct / 10.0,
            three_p_pct_2023: 0.33,
            ft_pct_2023: 0.71,
            tot_reb_2023: 33.0,
            assists_2023: 14.0,
            off_reb_2023: 9.0,
            steals_2023: 6.0,
            blocks_2023: 3.0,
            turnovers_2023: 12.0,
            points_2023: 70.0,
        }
    }

    fn league() -> League {
        League::from_records(vec![
            record("UCLA", 11, 0.60),
            record("Kentucky", 8, 0.72),
            record("Gonzaga", 0, 0.85),
        ])
        .unwrap()
    }

    #[test]
    fn report_contains_all_sections() {
        let report = markdown_report(&league(), &ReportOptions::default());
        assert!(report.contains("# CourtLab League Report"));
        assert!(report.contains("## Column Summaries"));
        assert!(report.contains("NCAA Championships"));
        assert!(report.contains("## Correlations"));
        assert!(report.contains("UCLA"));
    }

    #[test]
    fn leaderboard_section_respects_options() {
        let options = ReportOptions {
            leader_column: StatColumn::WinPct2023,
            top_n: 1,
            correlations: Vec::new(),
        };
        let report = markdown_report(&league(), &options);
        assert!(report.contains("Top 1"));
        assert!(report.contains("| 1 | Gonzaga |"));
        assert!(!report.contains("## Correlations"));
    }

    #[test]
    fn write_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("league.md");
        write_report(&path, &league(), &ReportOptions::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("CourtLab League Report"));
    }

    #[test]
    fn csv_export_roundtrips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaders.csv");
        export_leaders_csv(&path, &league(), StatColumn::NcaaChampionships, 2).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "UCLA");
        assert_eq!(&rows[0][2], "11");
    }
}
