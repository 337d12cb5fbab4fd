use crate::aggregate::RunWindow;
use crate::conf::error::ConfigError;
use crate::conf::parse::{
    DEFAULT_BUFFER_SIZE, DEFAULT_INTERVAL, parse_buffer_size, parse_interval, parse_time,
    parse_tz_offset,
};
use crate::conf::types::{Page, RunConfig, RunPlan};
use crate::matcher::Pattern;
use crate::time::TzOffset;

impl RunConfig {
    /// Applies defaults and checks every value, producing the plan for one
    /// pass. Fails on the first bad value.
    pub fn validate(&self) -> Result<RunPlan, ConfigError> {
        let source = self.source.clone().ok_or(ConfigError::MissingSource)?;

        let pattern = match self.pattern.as_deref() {
            Some(text) => Pattern::compile(text)?,
            None => Pattern::always(),
        };

        //----------------------------------------------------------------------
        // Time window
        //----------------------------------------------------------------------
        let tz = match self.tz_offset.as_deref() {
            Some(text) => parse_tz_offset(text)?,
            None => TzOffset::UTC,
        };
        let start = self
            .start
            .as_deref()
            .map(|v| parse_time("start", v, tz))
            .transpose()?;
        let stop = self
            .stop
            .as_deref()
            .map(|v| parse_time("stop", v, tz))
            .transpose()?;
        let until = self
            .until
            .as_deref()
            .map(|v| parse_time("until", v, tz))
            .transpose()?;
        let width = match self.interval.as_deref() {
            Some(text) => parse_interval(text)?,
            None => DEFAULT_INTERVAL,
        };
        let window = RunWindow::new(start, stop, until, width, tz)?;

        let buffer_size = match &self.buffer_size {
            Some(setting) => parse_buffer_size(setting)?,
            None => DEFAULT_BUFFER_SIZE,
        };

        Ok(RunPlan {
            source,
            format: self.format.unwrap_or_default(),
            pattern,
            window,
            buffer_size,
            page: Page {
                skip: self.skip.unwrap_or(0),
                limit: self.limit.unwrap_or(0),
            },
        })
    }
}
