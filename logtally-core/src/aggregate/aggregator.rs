use crate::aggregate::window::{MAX_BUCKETS, RunWindow};
use crate::time::Timestamp;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub count: u64,
}

/// A bucket together with the local-clock instant its slot begins at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBucket {
    pub index: usize,
    /// Local-clock seconds (`aligned start + index * width`).
    pub local_start: i64,
    pub count: u64,
}

/// Counts matching records per fixed-width slot.
///
/// With a bounded window every bucket is allocated up front. With an open
/// start the grid is anchored at the first observed record; with an open
/// stop trailing buckets are appended as later slots show up. Existing
/// buckets are never moved.
#[derive(Debug, Clone)]
pub struct Aggregator {
    window: RunWindow,
    origin: Option<i64>,
    buckets: Vec<Bucket>,
    overflowed: u64,
}

impl Aggregator {
    pub fn new(window: RunWindow) -> Self {
        let mut agg = Self {
            window,
            origin: None,
            buckets: Vec::new(),
            overflowed: 0,
        };
        if let Some(start) = agg.window.start() {
            agg.anchor(agg.window.align_local(start));
        }
        agg
    }

    fn anchor(&mut self, origin: i64) {
        self.origin = Some(origin);
        if let Some(slots) = self.window.slots_from(origin) {
            self.buckets = vec![Bucket::default(); (slots as usize).min(MAX_BUCKETS)];
        }
    }

    pub fn window(&self) -> &RunWindow {
        &self.window
    }

    /// Counts `ts` in its slot. Returns `false`, changing nothing, when the
    /// timestamp is outside the window.
    pub fn observe(&mut self, ts: Timestamp) -> bool {
        if !self.window.contains(ts) {
            return false;
        }

        let origin = match self.origin {
            Some(origin) => origin,
            None => {
                let origin = self.window.align_local(ts);
                self.anchor(origin);
                origin
            }
        };

        let local = self.window.tz_offset().to_local(ts);
        if local < origin {
            // earlier than a lazily anchored grid
            return false;
        }
        let index = (local.saturating_sub(origin) / self.window.bucket_width()) as usize;

        if index >= self.buckets.len() {
            // a bounded grid is sized up front, so only the cap lands here
            if index >= MAX_BUCKETS {
                self.overflowed += 1;
                if self.overflowed == 1 {
                    warn!(index, max = MAX_BUCKETS, "record beyond bucket limit dropped");
                }
                return false;
            }
            self.buckets.resize(index + 1, Bucket::default());
        }

        match self.buckets.get_mut(index) {
            Some(bucket) => {
                bucket.count += 1;
                true
            }
            None => false,
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Local-clock start of the first slot, once known.
    pub fn origin(&self) -> Option<i64> {
        self.origin
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Records dropped because they fell past [`MAX_BUCKETS`].
    pub fn overflowed(&self) -> u64 {
        self.overflowed
    }

    pub fn resolved(&self) -> Vec<ResolvedBucket> {
        let Some(origin) = self.origin else {
            return Vec::new();
        };
        let width = self.window.bucket_width();
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| ResolvedBucket {
                index,
                local_start: origin.saturating_add((index as i64).saturating_mul(width)),
                count: bucket.count,
            })
            .collect()
    }
}
