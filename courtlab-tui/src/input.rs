//! Keyboard input dispatch — overlays → Teams text capture → global keys →
//! panel-specific handlers.
//!
//! The Teams panel owns printable characters while it is active (the search
//! field is permanently focused there, like the original sidebar input), so
//! panel switching from Teams goes through Tab and quitting through Ctrl+C.
//! Everywhere else the global `q` / number keys apply.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use courtlab_analytics::{export_leaders_csv, write_report, ReportOptions};

use crate::app::{AppState, ErrorCategory, Overlay, Panel};

/// Maximum leaderboard size reachable from the UI.
const MAX_TOP_N: usize = 25;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere, including the search field.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. The Teams panel captures text input while active.
    if app.active_panel == Panel::Teams && handle_teams_key(app, key) {
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Teams; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::AllTime; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Season; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Leaders; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Scatter; return; }
        KeyCode::Char('6') => { app.active_panel = Panel::Help; return; }
        KeyCode::Char('e') => {
            app.error_scroll = 0;
            app.overlay = Overlay::ErrorHistory;
            return;
        }
        KeyCode::Char('w') => {
            write_artifacts(app);
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 4. Panel-specific keys.
    match app.active_panel {
        Panel::Teams => {} // handled above
        Panel::AllTime | Panel::Season | Panel::Help => {} // display only
        Panel::Leaders => handle_leaders_key(app, key),
        Panel::Scatter => handle_scatter_key(app, key),
    }
}

/// Write an artifact for the current view: the leaderboard CSV from the
/// Leaders panel, the full markdown report everywhere else.
fn write_artifacts(app: &mut AppState) {
    match app.active_panel {
        Panel::Leaders => {
            let path = PathBuf::from("courtlab_leaders.csv");
            match export_leaders_csv(&path, &app.league, app.leaders.column, app.leaders.top_n) {
                Ok(()) => app.set_status(format!("Leaderboard written to {}", path.display())),
                Err(e) => app.push_error(
                    ErrorCategory::Export,
                    e.to_string(),
                    path.display().to_string(),
                ),
            }
        }
        _ => {
            let path = PathBuf::from("courtlab_report.md");
            let options = ReportOptions {
                leader_column: app.leaders.column,
                top_n: app.leaders.top_n,
                ..ReportOptions::default()
            };
            match write_report(&path, &app.league, &options) {
                Ok(()) => app.set_status(format!("Report written to {}", path.display())),
                Err(e) => app.push_error(
                    ErrorCategory::Export,
                    e.to_string(),
                    path.display().to_string(),
                ),
            }
        }
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

/// Teams panel input. Returns true when the key was consumed; Tab (and
/// anything unhandled) falls through to the global keys.
fn handle_teams_key(app: &mut AppState, key: KeyEvent) -> bool {
    let match_count = app.teams.matches(&app.league).len();

    match key.code {
        KeyCode::Down => {
            if match_count > 0 && app.teams.cursor + 1 < match_count {
                app.teams.cursor += 1;
            }
            true
        }
        KeyCode::Up => {
            app.teams.cursor = app.teams.cursor.saturating_sub(1);
            true
        }
        KeyCode::Enter => {
            app.select_under_cursor();
            true
        }
        KeyCode::Backspace => {
            app.teams.query.pop();
            let count = app.teams.matches(&app.league).len();
            app.teams.clamp_cursor(count);
            true
        }
        KeyCode::Esc => {
            if app.teams.query.is_empty() {
                if app.selected_school.take().is_some() {
                    app.set_status("Selection cleared");
                }
            } else {
                app.teams.query.clear();
                app.teams.cursor = 0;
            }
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.teams.query.push(c);
            app.teams.cursor = 0;
            true
        }
        _ => false,
    }
}

fn handle_leaders_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(']') => {
            app.leaders.column = app.leaders.column.next();
            app.set_status(format!("Leaders: {}", app.leaders.column.label()));
        }
        KeyCode::Char('[') => {
            app.leaders.column = app.leaders.column.prev();
            app.set_status(format!("Leaders: {}", app.leaders.column.label()));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if app.leaders.top_n < MAX_TOP_N.min(app.league.len()) {
                app.leaders.top_n += 1;
            }
        }
        KeyCode::Char('-') => {
            if app.leaders.top_n > 1 {
                app.leaders.top_n -= 1;
            }
        }
        _ => {}
    }
}

fn handle_scatter_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(']') => {
            app.scatter.x = app.scatter.x.next();
            app.set_status(format!("Scatter X: {}", app.scatter.x.label()));
        }
        KeyCode::Char('[') => {
            app.scatter.x = app.scatter.x.prev();
            app.set_status(format!("Scatter X: {}", app.scatter.x.label()));
        }
        KeyCode::Char('}') => {
            app.scatter.y = app.scatter.y.next();
            app.set_status(format!("Scatter Y: {}", app.scatter.y.label()));
        }
        KeyCode::Char('{') => {
            app.scatter.y = app.scatter.y.prev();
            app.set_status(format!("Scatter Y: {}", app.scatter.y.label()));
        }
        _ => {}
    }
}
