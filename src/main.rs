mod app;
mod cli;
mod color;
mod error;
mod event;
mod flicker;
mod logging;
mod tui;
mod ui;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let log_path = cli_opts
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config = cli_opts.flicker_config()?;
    if let Some(command) = cli_opts.command {
        return cli::run(command, config);
    }

    let mut app = app::App::new(config, Instant::now())?;
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;
    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }

    result
}
