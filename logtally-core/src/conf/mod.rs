//! Run configuration: raw settings from a TOML file and command-line flags,
//! overlaid and validated into an immutable [`RunPlan`].

mod error;
mod loader;
mod merge;
mod parse;
mod types;
mod validate;


pub use error::ConfigError;
pub use loader::load_run_config;
pub use parse::{
    DEFAULT_BUFFER_SIZE, DEFAULT_INTERVAL, MAX_BUFFER_SIZE, MIN_BUFFER_SIZE, parse_buffer_size,
    parse_interval, parse_time, parse_tz_offset,
};
pub use types::{OutputFormat, Page, RunConfig, RunPlan, SizeSetting};
