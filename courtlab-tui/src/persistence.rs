//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use courtlab_core::StatColumn;

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_panel: Panel,
    pub query: String,
    pub selected_school: Option<String>,
    pub leader_column: StatColumn,
    pub top_n: usize,
    pub scatter_x: StatColumn,
    pub scatter_y: StatColumn,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_panel: Panel::Teams,
            query: String::new(),
            selected_school: None,
            leader_column: StatColumn::NcaaChampionships,
            top_n: 10,
            scatter_x: StatColumn::WinPct2023,
            scatter_y: StatColumn::FgPct2023,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_panel: app.active_panel,
        query: app.teams.query.clone(),
        selected_school: app.selected_school.clone(),
        leader_column: app.leaders.column,
        top_n: app.leaders.top_n,
        scatter_x: app.scatter.x,
        scatter_y: app.scatter.y,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. A selected school that no longer
/// resolves in the loaded table is dropped.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    app.teams.query = state.query;
    let count = app.teams.matches(&app.league).len();
    app.teams.clamp_cursor(count);

    app.selected_school = state
        .selected_school
        .filter(|school| app.league.find(school).is_some());

    app.leaders.column = state.leader_column;
    app.leaders.top_n = state.top_n.max(1);
    app.scatter.x = state.scatter_x;
    app.scatter.y = state.scatter_y;

    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("courtlab_persist_test");
        let path = dir.join("state.json");

        let mut state = PersistedState::default();
        state.query = "kan".into();
        state.selected_school = Some("Kansas".into());
        state.top_n = 15;
        state.welcome_dismissed = true;

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.query, "kan");
        assert_eq!(loaded.selected_school.as_deref(), Some("Kansas"));
        assert_eq!(loaded.top_n, 15);
        assert!(loaded.welcome_dismissed);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.query.is_empty());
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("courtlab_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.query.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_drops_unresolvable_selection() {
        let mut app = crate::app::tests::test_app();
        let state = PersistedState {
            selected_school: Some("Closed College".into()),
            welcome_dismissed: true,
            ..PersistedState::default()
        };
        apply(&mut app, state);
        assert!(app.selected_school.is_none());
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn apply_keeps_resolvable_selection() {
        let mut app = crate::app::tests::test_app();
        let state = PersistedState {
            selected_school: Some("Kansas".into()),
            welcome_dismissed: false,
            ..PersistedState::default()
        };
        apply(&mut app, state);
        assert_eq!(app.selected_school.as_deref(), Some("Kansas"));
        assert_eq!(app.overlay, Overlay::Welcome);
    }
}
