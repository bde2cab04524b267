mod app;
mod components;
mod display;
mod draw;
mod error;
mod goals;
mod keys;
mod pipeline;
mod pitch;
mod state;
mod ui;

use crate::display::{DisplaySink, HeadlessSink, TerminalSink};
use crate::pipeline::{MatchFigure, PipelineConfig};
use crate::state::app_settings::Settings;
use clap::Parser;
use log::info;
use statsbomb_api::client::{LocalEventFile, StatsBombApi};
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();

    better_panic::install();

    tui_logger::init_logger(settings.log_level)?;
    tui_logger::set_default_level(settings.log_level);

    let config = settings.pipeline_config()?;
    let figure = build(&settings, &config).await?;

    match settings.headless {
        Some((width, height)) => HeadlessSink::new(width, height, io::stdout().lock()).show(&figure),
        None => TerminalSink.show(&figure),
    }
}

async fn build(settings: &Settings, config: &PipelineConfig) -> anyhow::Result<MatchFigure> {
    let figure = match &settings.events_json {
        Some(path) => {
            info!("reading events for match {} from {}", config.match_id, path.display());
            pipeline::run(&LocalEventFile::new(path), config).await?
        }
        None => {
            info!("fetching events for match {}", config.match_id);
            pipeline::run(&StatsBombApi::new(), config).await?
        }
    };
    Ok(figure)
}
