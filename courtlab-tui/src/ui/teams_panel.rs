//! Panel 1 — Teams: live search field and match list.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // Search field
    lines.push(Line::from(vec![
        Span::styled("Choose a team: ", theme::muted()),
        Span::styled(app.teams.query.as_str(), theme::accent_bold()),
        Span::styled("_", theme::accent()),
    ]));
    lines.push(Line::from(Span::styled(
        "[Enter]select [Up/Down]move [Esc]clear [Tab]switch panel",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    if app.teams.query.is_empty() {
        lines.push(Line::from(Span::styled(
            "Start typing to search for a team",
            theme::muted(),
        )));
        if let Some(team) = app.selected_team() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Selected: ", theme::muted()),
                Span::styled(team.school.as_str(), theme::accent_bold()),
            ]));
        }
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let matches = app.teams.matches(&app.league);
    if matches.is_empty() {
        lines.push(Line::from(Span::styled(
            "No teams match your search",
            theme::warning(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    lines.push(Line::from(vec![
        Span::styled("Matches: ", theme::muted()),
        Span::styled(
            format!("{}/{}", matches.len(), app.league.len()),
            theme::accent(),
        ),
    ]));
    lines.push(Line::from(""));

    // Match list, cursor-highlighted. Leave room for the header lines.
    let visible = (area.height as usize).saturating_sub(lines.len());
    let start = app.teams.cursor.saturating_sub(visible.saturating_sub(1));
    for (i, team) in matches.iter().enumerate().skip(start).take(visible) {
        let is_cursor = i == app.teams.cursor;
        let is_selected = app.selected_school.as_deref() == Some(team.school.as_str());

        let marker = if is_selected { "● " } else { "  " };
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_selected {
            theme::accent()
        } else {
            theme::secondary()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(team.school.as_str(), style),
            Span::styled(
                format!("  ({} wins in 2023)", team.wins_2023),
                theme::muted(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_content(app: &AppState) -> String {
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, f.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_query_shows_the_prompt() {
        let app = test_app();
        let content = buffer_content(&app);
        assert!(content.contains("Start typing to search for a team"));
    }

    #[test]
    fn no_match_shows_the_message() {
        let mut app = test_app();
        app.teams.query = "zzzz".into();
        let content = buffer_content(&app);
        assert!(content.contains("No teams match your search"));
    }

    #[test]
    fn matches_are_listed() {
        let mut app = test_app();
        app.teams.query = "kansas".into();
        let content = buffer_content(&app);
        assert!(content.contains("Kansas"));
        assert!(content.contains("1/12"));
    }
}
