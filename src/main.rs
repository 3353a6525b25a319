//! stock-tui - A terminal UI for managing stock catalog entities
//!
//! This is the main entry point for the stock-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod messages;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::messages::Locale;
use crate::services::{EntityService, HttpEntityService, InMemoryEntityService};
use crate::tui::{Tui, TuiEvent};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Manage brands and categories of a stock catalog from the terminal
#[derive(Debug, Parser)]
#[command(name = "stock-tui", version, about)]
struct Cli {
    /// Base URL of the inventory API (overrides the config file)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Config file to use instead of ~/.stock-tui/config.json
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Interface language: en or pt-BR
    #[arg(long = "locale", value_name = "LOCALE")]
    locale: Option<Locale>,

    /// Use a built-in sample catalog instead of the API
    #[arg(long = "demo")]
    demo: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, save_error) = load_config(&cli)?;

    if let Some(path) = config.log_path() {
        logging::init_logging(&path, &config.log_level)?;
    }
    if let Some(err) = save_error {
        tracing::warn!(error = %format!("{:#}", err), "could not write default config");
    }
    tracing::info!(
        api = config.base_url(),
        demo = cli.demo,
        locale = ?config.locale,
        "starting"
    );

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config, |kind| -> Arc<dyn EntityService> {
        if cli.demo {
            Arc::new(InMemoryEntityService::demo(kind))
        } else {
            Arc::new(HttpEntityService::new(
                config.base_url(),
                kind.resource(),
                config.request_timeout(),
            ))
        }
    });
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %format!("{:#}", err), "application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Load the config file and apply command-line overrides
///
/// A missing file yields the defaults, which are written back so the user
/// has something to edit. Failing to write them is not fatal; the error is
/// returned for logging once the subscriber is up.
fn load_config(cli: &Cli) -> Result<(Config, Option<anyhow::Error>)> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => Config::default_path(),
    };

    let mut save_error = None;
    let mut config = match &path {
        Some(path) => match Config::load_from(path)? {
            Some(config) => config,
            None => {
                let config = Config::default();
                if let Err(err) = config.save_to(path) {
                    save_error = Some(err.context(format!("saving {}", path.display())));
                }
                config
            }
        },
        None => Config::default(),
    };

    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    if config.api_base_url.trim().is_empty() {
        anyhow::bail!("Invalid configuration: api_base_url must not be empty");
    }
    Ok((config, save_error))
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw error");
            }
        })?;

        // The frame is on screen; apply deferred focus changes
        app.after_render();

        let action = match tui.next_event()? {
            TuiEvent::Key(key) => app.handle_key_event(key)?,
            TuiEvent::Mouse(mouse) => app.handle_mouse_event(mouse)?,
            TuiEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            // Nothing to handle; collect finished requests
            TuiEvent::Tick => Some(Action::Tick),
        };

        // Process the action and any follow-up it produces
        if let Some(action) = action {
            tracing::trace!(%action, "dispatch");
            app.dispatch(action)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let dir = std::env::temp_dir().join(format!("stock-tui-main-{}", std::process::id()));
        let path = dir.join("config.json");
        let cli = Cli::parse_from([
            "stock-tui",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://stock.local",
            "--locale",
            "pt-BR",
            "--log-level",
            "debug",
        ]);

        let (config, save_error) = load_config(&cli).unwrap();
        let written = Config::load_from(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(save_error.is_none());
        assert_eq!(config.api_base_url, "http://stock.local");
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.log_level, "debug");
        // defaults are written before overrides
        assert_eq!(written, Some(Config::default()));
    }

    #[test]
    fn test_cli_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["stock-tui", "--locale", "fr"]).is_err());
    }

    #[test]
    fn test_empty_api_url_is_rejected() {
        let dir = std::env::temp_dir().join(format!("stock-tui-empty-{}", std::process::id()));
        let path = dir.join("config.json");
        let cli = Cli::parse_from([
            "stock-tui",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            " ",
        ]);
        let result = load_config(&cli);
        let _ = std::fs::remove_dir_all(&dir);
        assert!(result.is_err());
    }
}
