use crate::scan::error::ScanError;
use flate2::bufread::MultiGzDecoder;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::None => f.write_str("plain"),
            Compression::Gzip => f.write_str("gzip"),
        }
    }
}

/// Wraps errors coming out of the gzip decoder so they can be told apart
/// from plain I/O failures further up.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InflateError(#[source] io::Error);

enum Inner {
    Plain(BufReader<Box<dyn Read>>),
    Gzip(MultiGzDecoder<BufReader<Box<dyn Read>>>),
}

/// A log byte stream, decompressed on the fly when it starts with the gzip
/// magic number. Dropping it closes the underlying handle.
pub struct LogSource {
    name: String,
    compression: Compression,
    inner: Inner,
}

impl LogSource {
    /// Sniffs the first bytes of `reader` without consuming them.
    pub fn from_reader(name: impl Into<String>, reader: impl Read + 'static) -> io::Result<Self> {
        let boxed: Box<dyn Read> = Box::new(reader);
        let mut buffered = BufReader::new(boxed);
        let compression = if buffered.fill_buf()?.starts_with(&GZIP_MAGIC) {
            Compression::Gzip
        } else {
            Compression::None
        };

        let inner = match compression {
            Compression::Gzip => Inner::Gzip(MultiGzDecoder::new(buffered)),
            Compression::None => Inner::Plain(buffered),
        };

        Ok(Self {
            name: name.into(),
            compression,
            inner,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }
}

impl Read for LogSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Inner::Plain(r) => r.read(buf),
            Inner::Gzip(r) => r.read(buf).map_err(|e| {
                if e.kind() == io::ErrorKind::Interrupted {
                    e
                } else {
                    io::Error::new(e.kind(), InflateError(e))
                }
            }),
        }
    }
}

impl fmt::Debug for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSource")
            .field("name", &self.name)
            .field("compression", &self.compression)
            .finish_non_exhaustive()
    }
}

/// Opens a log file, or standard input for `-`.
pub fn open_source(path: &Path) -> Result<LogSource, ScanError> {
    if path.as_os_str() == STDIN_PATH {
        return LogSource::from_reader("<stdin>", io::stdin())
            .map_err(|e| ScanError::open(path, e));
    }

    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
    LogSource::from_reader(path.display().to_string(), file).map_err(|e| ScanError::open(path, e))
}
