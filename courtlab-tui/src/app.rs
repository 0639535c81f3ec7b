//! Application state — single-owner, main-thread only.
//!
//! The league table is loaded once before the event loop and never mutated;
//! everything the panels draw is recomputed from it on each frame.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use courtlab_core::config::AppConfig;
use courtlab_core::search::search;
use courtlab_core::{League, StatColumn, TeamRecord};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Teams,
    AllTime,
    Season,
    Leaders,
    Scatter,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Teams => 0,
            Panel::AllTime => 1,
            Panel::Season => 2,
            Panel::Leaders => 3,
            Panel::Scatter => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Teams),
            1 => Some(Panel::AllTime),
            2 => Some(Panel::Season),
            3 => Some(Panel::Leaders),
            4 => Some(Panel::Scatter),
            5 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Teams => "Teams",
            Panel::AllTime => "All-Time",
            Panel::Season => "Season 2023",
            Panel::Leaders => "Leaders",
            Panel::Scatter => "Scatter",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Export,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Data => "DATA",
            ErrorCategory::Export => "EXPORT",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Where the league table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Csv(PathBuf),
    Demo,
}

impl DataSource {
    pub fn label(&self) -> String {
        match self {
            DataSource::Csv(path) => path.display().to_string(),
            DataSource::Demo => "built-in demo league".to_string(),
        }
    }
}

/// Teams panel state: the live search query and list cursor.
#[derive(Debug, Default)]
pub struct TeamsPanelState {
    pub query: String,
    pub cursor: usize,
}

impl TeamsPanelState {
    /// Teams matching the current query, table order.
    pub fn matches<'a>(&self, league: &'a League) -> Vec<&'a TeamRecord> {
        search(league, &self.query)
    }

    /// Keep the cursor inside the match list after the query changes.
    pub fn clamp_cursor(&mut self, match_count: usize) {
        if match_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= match_count {
            self.cursor = match_count - 1;
        }
    }
}

/// Leaders panel state: leaderboard metric and size.
#[derive(Debug)]
pub struct LeadersPanelState {
    pub column: StatColumn,
    pub top_n: usize,
}

/// Scatter panel state: the plotted column pair.
#[derive(Debug)]
pub struct ScatterPanelState {
    pub x: StatColumn,
    pub y: StatColumn,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Data
    pub league: League,
    pub data_source: DataSource,

    // Panel states
    pub teams: TeamsPanelState,
    pub selected_school: Option<String>,
    pub leaders: LeadersPanelState,
    pub scatter: ScatterPanelState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        league: League,
        data_source: DataSource,
        state_path: PathBuf,
        config: &AppConfig,
    ) -> Self {
        Self {
            active_panel: Panel::Teams,
            running: true,
            league,
            data_source,
            teams: TeamsPanelState::default(),
            selected_school: None,
            leaders: LeadersPanelState {
                column: config.leader_column,
                top_n: config.top_n,
            },
            scatter: ScatterPanelState {
                x: config.scatter_x,
                y: config.scatter_y,
            },
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            state_path,
        }
    }

    /// The selected team's record, if a selection exists and still resolves.
    pub fn selected_team(&self) -> Option<&TeamRecord> {
        self.selected_school
            .as_deref()
            .and_then(|school| self.league.find(school))
    }

    /// Select the team under the Teams panel cursor, if any.
    pub fn select_under_cursor(&mut self) {
        let school = self
            .teams
            .matches(&self.league)
            .get(self.teams.cursor)
            .map(|t| t.school.clone());
        if let Some(school) = school {
            self.set_status(format!("Selected {school}"));
            self.selected_school = Some(school);
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
