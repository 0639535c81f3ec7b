//! Panel 6 — Help: keyboard shortcuts and documentation.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-6", "Switch to panel by number (outside Teams)");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit (outside Teams); Ctrl+C quits anywhere");
    key(&mut lines, "e", "Open error history overlay (outside Teams)");
    key(&mut lines, "w", "Write report (in Leaders: leaderboard CSV)");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Teams");
    key(&mut lines, "a-z …", "Type to search (case-insensitive substring)");
    key(&mut lines, "Up / Down", "Move cursor through matches");
    key(&mut lines, "Enter", "Select the team under the cursor");
    key(&mut lines, "Esc", "Clear the query, then the selection");
    lines.push(Line::from(""));

    section(&mut lines, "Panels 2/3 — All-Time & Season 2023");
    key(&mut lines, "", "Stat tables for the selected team, with league averages");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 4 — Leaders");
    key(&mut lines, "[ / ]", "Cycle the leaderboard metric");
    key(&mut lines, "+ / -", "Grow / shrink the leaderboard");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 5 — Scatter");
    key(&mut lines, "[ / ]", "Cycle the X metric");
    key(&mut lines, "{ / }", "Cycle the Y metric");
    key(&mut lines, "", "Regression line and Pearson r drawn over all teams");
    lines.push(Line::from(""));

    section(&mut lines, "Data");
    lines.push(Line::from(vec![
        Span::styled("  Source: ", theme::muted()),
        Span::styled(app.data_source.label(), theme::accent()),
    ]));
    lines.push(Line::from(Span::styled(
        "  The table is loaded once at startup and never modified.",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &'static str) {
    lines.push(Line::from(Span::styled(title, theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &'static str, desc: &'static str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:<16}"), theme::warning()),
        Span::styled(desc, theme::secondary()),
    ]));
}
