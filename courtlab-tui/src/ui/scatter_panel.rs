//! Panel 5 — Scatter: full-league scatterplot of a metric pair with a
//! least-squares regression line and Pearson r.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use courtlab_analytics::correlation;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.league.len() < 2 {
        render_empty(f, area);
        return;
    }

    let x_col = app.scatter.x;
    let y_col = app.scatter.y;

    let points: Vec<(f64, f64)> = app
        .league
        .teams()
        .iter()
        .map(|t| (x_col.value(t), y_col.value(t)))
        .collect();

    let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(points.iter().map(|p| p.1));

    let report = correlation(&app.league, x_col, y_col);

    // Regression line clipped to the data's x-range.
    let fit_points: Vec<(f64, f64)> = report
        .fit
        .map(|fit| vec![(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))])
        .unwrap_or_default();

    // Selected team's point, drawn on top.
    let highlight: Vec<(f64, f64)> = app
        .selected_team()
        .map(|t| vec![(x_col.value(t), y_col.value(t))])
        .unwrap_or_default();

    let mut datasets = vec![Dataset::default()
        .name("teams")
        .marker(symbols::Marker::Dot)
        .style(theme::neutral())
        .graph_type(GraphType::Scatter)
        .data(&points)];

    if !fit_points.is_empty() {
        datasets.push(
            Dataset::default()
                .name(format!("fit r={:.2}", report.r))
                .marker(symbols::Marker::Braille)
                .style(theme::warning())
                .graph_type(GraphType::Line)
                .data(&fit_points),
        );
    }

    if !highlight.is_empty() {
        datasets.push(
            Dataset::default()
                .name("selected")
                .marker(symbols::Marker::Block)
                .style(theme::accent())
                .graph_type(GraphType::Scatter)
                .data(&highlight),
        );
    }

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled(x_col.label(), theme::muted()))
                .style(theme::muted())
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::styled(x_col.format_value(x_min), theme::muted()),
                    Span::styled(x_col.format_value(x_max), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(y_col.label(), theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(y_col.format_value(y_min), theme::muted()),
                    Span::styled(y_col.format_value(y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Not enough teams to plot.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Min/max of an iterator, padded 5% on each side so points do not sit on
/// the frame. A degenerate (constant) range still gets visible breathing
/// room.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;
    let padding = if range > 0.0 {
        range * 0.05
    } else {
        min.abs() * 0.05 + 1e-3
    };
    (min - padding, max + padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_content(app: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
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
    fn renders_axis_titles() {
        let app = test_app();
        let content = buffer_content(&app);
        assert!(content.contains("2023 FG %"));
    }

    #[test]
    fn renders_with_a_selected_team() {
        let mut app = test_app();
        app.selected_school = Some("Houston".into());
        // Should not panic with the extra highlight dataset.
        let _ = buffer_content(&app);
    }

    #[test]
    fn bounds_pad_the_range() {
        let (min, max) = bounds([1.0, 2.0, 3.0].into_iter());
        assert!(min < 1.0 && min > 0.85);
        assert!(max > 3.0 && max < 3.15);
    }

    #[test]
    fn constant_values_still_get_a_visible_range() {
        let (min, max) = bounds([2.0, 2.0].into_iter());
        assert!(max > min);
    }
}
