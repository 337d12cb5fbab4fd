//! Streaming record scanner.
//!
//! ```text
//! file / stdin
//!   -> LogSource      (gzip sniffed and inflated on the fly)
//!   -> ScanBuffer     (fixed capacity, partial lines carried across refills)
//!   -> Scanner        (line boundaries, leading timestamp, undated skip)
//!   -> Record<'_>     (borrowed view, valid for one iteration)
//! ```
//!
//! Memory use is bounded by the buffer size no matter how large the log is.
//! A line longer than the buffer is cut: the part that fits is handed out
//! with `truncated = true` and the rest is discarded.

mod buffer;
mod error;
mod scanner;
mod source;
pub mod timestamp;


pub use buffer::ScanBuffer;
pub use error::ScanError;
pub use scanner::{Record, ScanCounters, Scanner};
pub use source::{Compression, LogSource, STDIN_PATH, open_source};
