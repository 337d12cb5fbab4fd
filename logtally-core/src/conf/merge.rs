use crate::conf::types::RunConfig;

impl RunConfig {
    /// Layers `over` on top of `self`; any value set in `over` wins.
    pub fn overlay(self, over: RunConfig) -> RunConfig {
        RunConfig {
            source: over.source.or(self.source),
            format: over.format.or(self.format),
            pattern: over.pattern.or(self.pattern),
            limit: over.limit.or(self.limit),
            skip: over.skip.or(self.skip),
            start: over.start.or(self.start),
            stop: over.stop.or(self.stop),
            until: over.until.or(self.until),
            tz_offset: over.tz_offset.or(self.tz_offset),
            buffer_size: over.buffer_size.or(self.buffer_size),
            interval: over.interval.or(self.interval),
        }
    }
}
