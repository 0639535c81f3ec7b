//! Panel 3 — Season 2023: box-score and shooting statistics for the
//! selected team.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use courtlab_analytics::ColumnSummary;
use courtlab_core::StatColumn;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(team) = app.selected_team() else {
        render_empty(f, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("2023 Season Statistics for {}", team.school),
            theme::accent_bold(),
        )),
        Line::from(""),
    ];

    for col in StatColumn::SEASON_2023 {
        let value = col.value(team);
        let league_mean = ColumnSummary::compute(&app.league, col).mean;
        let value_style = if col == StatColumn::WinPct2023 {
            ratatui::style::Style::default().fg(theme::win_pct_color(value))
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>24}: ", col.label()), theme::muted()),
            Span::styled(format!("{:>8}", col.format_value(value)), value_style),
            Span::styled(
                format!("   league avg {}", col.format_value(league_mean)),
                theme::muted(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No team selected yet.", theme::muted())),
        Line::from(""),
        Line::from(Span::styled(
            "Search and select a team in the Teams panel (press 1).",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_content(app: &AppState) -> String {
        let backend = TestBackend::new(70, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn no_selection_shows_the_prompt() {
        let app = test_app();
        let content = buffer_content(&app);
        assert!(content.contains("No team selected yet."));
    }

    #[test]
    fn selected_team_shows_season_columns() {
        let mut app = test_app();
        app.selected_school = Some("Gonzaga".into());
        let content = buffer_content(&app);
        assert!(content.contains("2023 Season Statistics for Gonzaga"));
        assert!(content.contains("2023 FG %"));
        // Gonzaga's 86.2 points per game
        assert!(content.contains("86.2"));
    }
}
