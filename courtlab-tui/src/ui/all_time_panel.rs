//! Panel 2 — All-Time: program history statistics for the selected team.

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
            format!("All-Time Statistics for {}", team.school),
            theme::accent_bold(),
        )),
        Line::from(""),
    ];

    for col in StatColumn::ALL_TIME {
        let value = col.value(team);
        let league_mean = ColumnSummary::compute(&app.league, col).mean;
        let value_style = if col == StatColumn::AllTimeWinPct {
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
        Line::from(Span::styled(
            "No team selected yet.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Search and select a team in the Teams panel (press 1).",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
