use crate::aggregate::RunWindow;
use crate::matcher::Pattern;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Xml,
    Json,
}

/// A size written either as a bare number of bytes or as text such as `"64K"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SizeSetting {
    Bytes(u64),
    Text(String),
}

/// Raw settings as read from a config file or the command line.
///
/// Every field is optional so layers can be overlaid; [`RunConfig::validate`]
/// applies defaults and turns the result into a [`RunPlan`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Log file path, `-` for stdin.
    pub source: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub pattern: Option<String>,
    /// Rendered buckets per page; 0 renders all.
    pub limit: Option<usize>,
    /// Buckets skipped before the page starts.
    pub skip: Option<usize>,
    pub start: Option<String>,
    /// Inclusive; records count until one bucket width past it.
    pub stop: Option<String>,
    /// Exclusive.
    pub until: Option<String>,
    /// e.g. `+0100`, `-05:00`, `Z`.
    pub tz_offset: Option<String>,
    pub buffer_size: Option<SizeSetting>,
    /// `hourly`, `daily`, or `<n>s|m|h|d`.
    pub interval: Option<String>,
}

/// Which slice of the bucket sequence gets rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub skip: usize,
    /// 0 means no limit.
    pub limit: usize,
}

impl Page {
    pub fn apply<T>(self, items: &[T]) -> &[T] {
        let from = self.skip.min(items.len());
        let rest = &items[from..];
        if self.limit == 0 {
            rest
        } else {
            &rest[..self.limit.min(rest.len())]
        }
    }
}

/// Validated, immutable settings for one pass.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub source: PathBuf,
    pub format: OutputFormat,
    pub pattern: Pattern,
    pub window: RunWindow,
    pub buffer_size: usize,
    pub page: Page,
}
