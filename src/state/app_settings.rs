use crate::error::PipelineError;
use crate::pipeline::PipelineConfig;
use crate::pitch::{Dimensions, FieldTheme, PitchProfile};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// goalmap: plot where a match's goals were scored from
///
/// Fetches the StatsBomb event stream for one match, finds the shots that
/// ended in a goal and draws each one as a pair of markers (shot location and
/// end location) on a football pitch in the terminal.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Settings {
    /// StatsBomb match id.
    #[arg(short, long, env = "GOALMAP_MATCH_ID", default_value_t = 267533)]
    pub match_id: u64,

    /// Pitch layout to draw on.
    #[arg(short, long, value_enum, default_value_t = ProfileKind::Provider)]
    pub profile: ProfileKind,

    /// Field length. Defaults to 120 (provider) or 110 (meter).
    #[arg(long)]
    pub length: Option<f64>,

    /// Field width. Defaults to 80.
    #[arg(long)]
    pub width: Option<f64>,

    /// Field colours for the meter pitch: green or white.
    #[arg(short, long, default_value = "green")]
    pub theme: String,

    /// Read the event JSON from this file instead of the network.
    #[arg(long, env = "GOALMAP_EVENTS_JSON")]
    pub events_json: Option<PathBuf>,

    /// Print a single WIDTHxHEIGHT frame to stdout and exit.
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    pub headless: Option<(u16, u16)>,

    /// Log level for the log pane.
    #[arg(long, default_value = "error")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    Provider,
    Meter,
}

impl Settings {
    pub fn profile(&self) -> Result<PitchProfile, PipelineError> {
        let profile = match self.profile {
            ProfileKind::Provider => {
                let default = PitchProfile::PROVIDER_DEFAULT;
                PitchProfile::Provider { dimensions: self.dimensions_or(default) }
            }
            ProfileKind::Meter => {
                let theme: FieldTheme = self.theme.parse()?;
                PitchProfile::meter(self.dimensions_or(PitchProfile::METER_DEFAULT), theme)
            }
        };
        Ok(profile)
    }

    pub fn pipeline_config(&self) -> Result<PipelineConfig, PipelineError> {
        Ok(PipelineConfig { match_id: self.match_id, profile: self.profile()? })
    }

    fn dimensions_or(&self, default: Dimensions) -> Dimensions {
        Dimensions::new(self.length.unwrap_or(default.length), self.width.unwrap_or(default.width))
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `120x40`.
fn parse_size(size: &str) -> Result<(u16, u16), String> {
    let (w, h) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("`{size}` is not WIDTHxHEIGHT"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u16>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| format!("`{v}` is not a positive cell count"))
    };
    Ok((parse(w)?, parse(h)?))
}
