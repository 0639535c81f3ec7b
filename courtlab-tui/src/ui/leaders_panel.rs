//! Panel 4 — Leaders: horizontal bar chart of the top N teams by a
//! cyclable metric.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;
use ratatui::Frame;

use courtlab_analytics::{leaders, LeaderEntry};
use courtlab_core::StatColumn;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let entries = leaders(&app.league, app.leaders.column, app.leaders.top_n);
    let chart = LeaderBars {
        entries: &entries,
        column: app.leaders.column,
        highlight: app.selected_school.as_deref(),
    };
    f.render_widget(chart, area);
}

/// Horizontal bar chart widget for a leaderboard.
struct LeaderBars<'a> {
    entries: &'a [LeaderEntry],
    column: StatColumn,
    highlight: Option<&'a str>,
}

impl Widget for LeaderBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 30 || area.height < 3 {
            return;
        }

        // Header
        buf.set_string(
            area.x,
            area.y,
            format!("Top {} by {}", self.entries.len(), self.column.label()),
            theme::accent_bold(),
        );
        buf.set_string(
            area.x,
            area.y + 1,
            "[ [ / ] ]metric  [+/-]count",
            theme::muted(),
        );

        let max_value = self
            .entries
            .iter()
            .map(|e| e.value)
            .fold(f64::NEG_INFINITY, f64::max);

        // Column layout: rank + school | bars | value
        let label_width: u16 = 26;
        let value_width: u16 = 9;
        let plot_left = area.x + label_width;
        let plot_width = area
            .width
            .saturating_sub(label_width)
            .saturating_sub(value_width);

        let first_row = area.y + 3;
        for (i, entry) in self.entries.iter().enumerate() {
            let y = first_row + i as u16;
            if y >= area.bottom() {
                break;
            }

            let is_highlight = self.highlight == Some(entry.school.as_str());
            let label_style = if is_highlight {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::secondary()
            };
            let bar_style = if is_highlight {
                theme::accent()
            } else {
                theme::neutral()
            };

            let label = format!("{:>2} {:<22}", entry.rank, truncate(&entry.school, 22));
            buf.set_string(area.x, y, label, label_style);

            if max_value > 0.0 && plot_width > 0 {
                let frac = (entry.value / max_value).clamp(0.0, 1.0);
                let bar_len = (frac * plot_width as f64).round() as u16;
                for x in plot_left..(plot_left + bar_len) {
                    if x < area.right() {
                        buf.set_string(x, y, "\u{2587}", bar_style); // ▇
                    }
                }
            }

            let value_label = self.column.format_value(entry.value);
            let value_x = area.right().saturating_sub(value_width);
            buf.set_string(value_x, y, format!("{value_label:>8}"), theme::text());
        }

        if self.entries.is_empty() {
            buf.set_string(
                area.x,
                first_row,
                "Leaderboard is empty.",
                theme::muted(),
            );
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn render_to_buffer(app: &AppState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let entries = leaders(&app.league, app.leaders.column, app.leaders.top_n);
        let chart = LeaderBars {
            entries: &entries,
            column: app.leaders.column,
            highlight: app.selected_school.as_deref(),
        };
        chart.render(area, &mut buf);
        buf
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_without_panic() {
        let app = test_app();
        let buf = render_to_buffer(&app, 80, 20);
        let content = content(&buf);
        assert!(content.contains("NCAA Championships"));
        assert!(content.contains("UCLA"));
    }

    #[test]
    fn tiny_area_is_a_no_op() {
        let app = test_app();
        let buf = render_to_buffer(&app, 10, 2);
        assert!(content(&buf).trim().is_empty());
    }

    #[test]
    fn top_team_gets_the_longest_bar() {
        let app = test_app();
        let buf = render_to_buffer(&app, 80, 20);
        let text = content(&buf);
        // UCLA (11 championships) leads the demo league.
        let ucla_row: String = text.chars().skip(3 * 80).take(80 * 2).collect();
        assert!(ucla_row.contains("UCLA"));
        assert!(ucla_row.contains('\u{2587}'));
    }

    #[test]
    fn truncate_long_school_names() {
        assert_eq!(truncate("Kansas", 22), "Kansas");
        let long = "University of Extremely Long Names";
        let cut = truncate(long, 22);
        assert_eq!(cut.chars().count(), 22);
        assert!(cut.ends_with('\u{2026}'));
    }
}
