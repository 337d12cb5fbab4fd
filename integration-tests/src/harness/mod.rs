pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogDir, access_log, gzip};
pub use self::tracing::{CapturedEvent, capture_events};

use logtally_core::conf::{RunConfig, RunPlan};
use std::path::Path;

/// Validated plan over `source` with the remaining settings from `config`.
pub fn plan_for(source: &Path, config: RunConfig) -> RunPlan {
    RunConfig {
        source: Some(source.to_path_buf()),
        ..config
    }
    .validate()
    .unwrap()
}
