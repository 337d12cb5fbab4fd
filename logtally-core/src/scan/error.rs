use crate::scan::source::InflateError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal to the current pass. Whatever was counted before the failure is
/// still a valid summary of the prefix that was read.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open log source {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed after {offset} bytes: {source}")]
    Read {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("compressed stream is corrupt or truncated after {offset} bytes: {source}")]
    Decompress {
        offset: u64,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Classifies a read failure; errors raised by the gzip decoder carry an
    /// [`InflateError`] payload.
    pub fn read(offset: u64, source: io::Error) -> Self {
        let inflate = source
            .get_ref()
            .is_some_and(|inner| inner.is::<InflateError>());
        if inflate {
            Self::Decompress { offset, source }
        } else {
            Self::Read { offset, source }
        }
    }

    /// Bytes of decompressed input consumed before the failure, if any.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::Open { .. } => None,
            Self::Read { offset, .. } | Self::Decompress { offset, .. } => Some(*offset),
        }
    }
}
