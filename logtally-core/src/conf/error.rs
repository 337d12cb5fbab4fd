use crate::matcher::PatternError;
use crate::time::Timestamp;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    //-------------------------------------------------------------------------
    // Values
    //-------------------------------------------------------------------------
    #[error("no log source given")]
    MissingSource,

    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("invalid {field} time '{value}'")]
    InvalidTime { field: &'static str, value: String },

    #[error("invalid time zone offset '{value}'")]
    InvalidTzOffset { value: String },

    #[error("invalid buffer size '{value}': {reason}")]
    InvalidBufferSize { value: String, reason: String },

    #[error("invalid interval '{value}'")]
    InvalidInterval { value: String },

    //-------------------------------------------------------------------------
    // Window
    //-------------------------------------------------------------------------
    #[error("bucket width must be positive, got {seconds}s")]
    NonPositiveBucketWidth { seconds: i64 },

    #[error("stop ({stop}) is before start ({start})")]
    StopBeforeStart { start: Timestamp, stop: Timestamp },

    #[error("until ({until}) is not after start ({start})")]
    UntilNotAfterStart { start: Timestamp, until: Timestamp },

    #[error("window spans {buckets} buckets, the limit is {max}")]
    WindowTooLarge { buckets: u64, max: usize },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
