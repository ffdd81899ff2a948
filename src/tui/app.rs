//! Application state and main event loop for the TUI dashboard.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::core::dashboard::{DashboardOptions, build_dashboard};
use crate::core::models::Dashboard;
use crate::core::provider::StaticDataProvider;
use crate::error::Result;
use crate::storage::config::Config;

use super::Tui;
use super::dashboard::DashboardView;
use super::event::{Event, EventHandler, KeyAction};

/// Application state for the TUI dashboard.
pub struct App {
    /// Config file re-read on reload. `None` reads the default location.
    config_path: Option<PathBuf>,
    /// Range and source applied on every build.
    options: DashboardOptions,
    /// Current page model.
    dashboard: Dashboard,
    /// Outcome of the last reload, if it needs attention.
    status: Option<String>,
    /// When the current dashboard was built.
    last_reload: DateTime<Utc>,
    /// Whether to show help overlay.
    show_help: bool,
    /// Whether the app should quit.
    should_quit: bool,
}

impl App {
    /// Create the app from an already loaded configuration.
    #[must_use]
    pub fn new(config: &Config, config_path: Option<PathBuf>, options: DashboardOptions) -> Self {
        Self {
            config_path,
            options,
            dashboard: Self::build(config, &options),
            status: None,
            last_reload: Utc::now(),
            show_help: false,
            should_quit: false,
        }
    }

    fn build(config: &Config, options: &DashboardOptions) -> Dashboard {
        build_dashboard(&StaticDataProvider::from_config(config), options)
    }

    /// The current page model.
    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Status message from the last reload, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the event loop should stop.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing to the terminal fails.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let event_handler = EventHandler::new(250);

        while !self.should_quit {
            terminal.draw(|frame| {
                let view = DashboardView::new(
                    &self.dashboard,
                    self.status.as_deref(),
                    self.last_reload,
                    self.show_help,
                );
                frame.render_widget(view, frame.area());
            })?;

            match event_handler.next() {
                Ok(Event::Key(key)) => self.handle_action(KeyAction::from_key_event(key)),
                Ok(Event::Tick | Event::Resize(_, _)) => {}
                Err(e) => {
                    tracing::warn!("Event error: {e}");
                }
            }
        }

        Ok(())
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        // If help is shown, any key dismisses it
        if self.show_help && action != KeyAction::None {
            self.show_help = false;
            return;
        }

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Reload => self.reload(),
            KeyAction::Help => self.show_help = true,
            KeyAction::None => {}
        }
    }

    /// Re-read the config file and rebuild the dashboard.
    ///
    /// A failed reload keeps the previous dashboard and reports the error in
    /// the status line.
    pub fn reload(&mut self) {
        match self.load_config() {
            Ok(config) => {
                self.dashboard = Self::build(&config, &self.options);
                self.last_reload = Utc::now();
                self.status = None;
                tracing::info!(path = ?self.config_path, "Reloaded dashboard");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Reload failed");
                self.status = Some(format!("Reload failed [{}]: {err}", err.error_code()));
            }
        }
    }

    fn load_config(&self) -> Result<Config> {
        let config = match &self.config_path {
            Some(path) => Config::load_required(path)?,
            None => Config::load()?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EDITED: &str = r#"
[page]
title = "Edited board"
"#;

    #[test]
    fn quit_and_help() {
        let mut app = App::new(&Config::default(), None, DashboardOptions::default());
        app.handle_action(KeyAction::Help);
        assert!(app.show_help);

        // Any key closes the overlay first
        app.handle_action(KeyAction::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit());

        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn reload_picks_up_edits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let mut app = App::new(&Config::default(), Some(path.clone()), DashboardOptions::default());
        assert_eq!(app.dashboard().title, Config::default().page.title);

        std::fs::write(&path, EDITED).unwrap();
        app.handle_action(KeyAction::Reload);
        assert_eq!(app.dashboard().title, "Edited board");
        assert!(app.status().is_none());
    }

    #[test]
    fn failed_reload_keeps_dashboard() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[page\n").unwrap();

        let mut app = App::new(&Config::default(), Some(path), DashboardOptions::default());
        let before = app.dashboard().title.clone();
        app.reload();

        assert_eq!(app.dashboard().title, before);
        assert!(app.status().unwrap().starts_with("Reload failed [CHB-C"));
    }
}
