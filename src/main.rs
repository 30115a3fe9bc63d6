//! foodboard - terminal menu manager for a REST `/foods` backend.

mod api;
mod app;
mod cli;
mod config;
mod constants;
mod core;
mod event;
mod logging;
mod message;
mod state;
mod theme;
mod ui;

use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use crate::api::HttpFoodsApi;
use crate::app::App;
use crate::cli::args::Args;
use crate::config::AppConfig;
use crate::event::EventHandler;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = config::resolve_config_path(&args)?;
    let (config, source) = AppConfig::load(&config_path)?;
    let config = config.with_overrides(&args);

    let log_dir = config::config_dir()?.join(constants::LOGS_DIR_NAME);
    let log_path = logging::init(&log_dir, &config.log_level)?;
    tracing::info!(
        version = constants::APP_VERSION,
        config = %source,
        log = %log_path.display(),
        api_url = %config.api_url,
        "starting"
    );

    let api = HttpFoodsApi::new(&config.api_url, config.request_timeout())?;

    let terminal = ratatui::init();
    let result = run(terminal, &config, Arc::new(api));
    ratatui::restore();

    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    } else {
        tracing::info!("exited");
    }
    result
}

fn run(mut terminal: DefaultTerminal, config: &AppConfig, api: Arc<HttpFoodsApi>) -> Result<()> {
    let events = EventHandler::new(config.tick_rate_ms);
    let mut app = App::new(config.api_url.clone(), api, events.sender());
    app.start();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &mut app))?;
        app.handle_event(events.next()?);
    }
    Ok(())
}
