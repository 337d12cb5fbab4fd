//! Time-windowed bucketing of matched records.
//!
//! ```text
//! index = floor((ts + tz_offset - aligned_start) / bucket_width)
//! aligned_start = floor((start + tz_offset) / bucket_width) * bucket_width
//! ```
//!
//! Slots are aligned on the writer's local clock, so hourly buckets start on
//! the hour and daily buckets at local midnight.

mod aggregator;
mod window;

#[cfg(test)]
mod tests;

pub use aggregator::{Aggregator, Bucket, ResolvedBucket};
pub use window::{DAY, HOUR, MAX_BUCKETS, RunWindow};
