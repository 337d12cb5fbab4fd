mod check;
mod scan;


pub use check::*;
pub use scan::*;

use crate::conf::{ConfigError, OutputFormat, RunConfig, SizeSetting, load_run_config};
use clap::Args;
use std::path::PathBuf;

/// Exit status of a pass that could not be configured.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit status of a pass that could not read its source to the end.
pub const EXIT_SCAN_ERROR: u8 = 2;

#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Log file to scan, `-` for stdin (plain or gzip)
    pub source: Option<PathBuf>,

    /// TOML file with defaults; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working buffer size in bytes, `K` suffix for KiB
    #[arg(short = 'b', long, value_name = "SIZE")]
    pub buffer_size: Option<String>,

    /// Bucket width: hourly, daily or <n>s|m|h|d
    #[arg(short = 'i', long)]
    pub interval: Option<String>,

    /// Report format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Buckets to skip before rendering
    #[arg(short = 'k', long)]
    pub skip: Option<usize>,

    /// Buckets to render, 0 for all
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Records must match this pattern (`^`, `$`, `.`, `*`)
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// First instant counted
    #[arg(short = 's', long)]
    pub start: Option<String>,

    /// Last bucket start counted; records run one interval past it
    #[arg(short = 't', long)]
    pub stop: Option<String>,

    /// Records at or after this instant are not counted
    #[arg(short = 'u', long)]
    pub until: Option<String>,

    /// Offset of the log clock from UTC, e.g. +0100 or -05:00
    #[arg(short = 'z', long, allow_hyphen_values = true)]
    pub tz_offset: Option<String>,
}

impl ScanArgs {
    /// The flags alone, as a configuration layer.
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            source: self.source.clone(),
            format: self.format,
            pattern: self.pattern.clone(),
            limit: self.limit,
            skip: self.skip,
            start: self.start.clone(),
            stop: self.stop.clone(),
            until: self.until.clone(),
            tz_offset: self.tz_offset.clone(),
            buffer_size: self.buffer_size.clone().map(SizeSetting::Text),
            interval: self.interval.clone(),
        }
    }

    /// The `--config` file, if any, overlaid by the flags.
    pub fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => load_run_config(path)?,
            None => RunConfig::default(),
        };
        Ok(base.overlay(self.to_run_config()))
    }
}
