//! CourtLab TUI — college basketball statistics dashboard.
//!
//! Panels:
//! 1. Teams — live search over school names, selection
//! 2. All-Time — program history table for the selected team
//! 3. Season 2023 — box-score and shooting table for the selected team
//! 4. Leaders — top-N bar chart by a cyclable metric
//! 5. Scatter — league scatterplot with regression line and Pearson r
//! 6. Help — keyboard shortcuts and documentation

mod app;
mod input;
mod persistence;
mod sample_data;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use courtlab_core::config::AppConfig;
use courtlab_core::League;

use crate::app::{AppState, DataSource};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Config and paths
    let config = AppConfig::discover()?;
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("courtlab")
        .join("state.json");

    // Load the league once; it is immutable for the rest of the process.
    let (league, data_source) = match config.resolve_data_path(None) {
        Some(path) => {
            let league = League::load_csv(&path)
                .with_context(|| format!("loading league table from {}", path.display()))?;
            (league, DataSource::Csv(path))
        }
        None => (sample_data::demo_league(), DataSource::Demo),
    };

    // Load persisted UI state
    let persisted = persistence::load(&state_path);

    // Build app state
    let mut app = AppState::new(league, data_source, state_path.clone(), &config);
    persistence::apply(&mut app, persisted);

    if app.data_source == DataSource::Demo {
        app.set_warning(format!(
            "No {} found; showing the built-in demo league",
            courtlab_core::config::DEFAULT_DATA_FILE
        ));
    } else {
        app.set_status(format!(
            "Loaded {} teams from {}",
            app.league.len(),
            app.data_source.label()
        ));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
