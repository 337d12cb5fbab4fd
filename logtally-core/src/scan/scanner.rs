use crate::matcher::LINE_TERMINATOR;
use crate::scan::buffer::ScanBuffer;
use crate::scan::error::ScanError;
use crate::scan::timestamp::parse_leading;
use crate::time::{Timestamp, TzOffset};
use std::io::Read;
use std::ops::Range;
use tracing::{debug, trace};

/// One log line, borrowed from the scanner's buffer.
///
/// Valid until the next call on the [`Scanner`]; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Line bytes without the terminator (and without a trailing `\r`).
    pub raw_text: &'a [u8],
    pub timestamp: Option<Timestamp>,
    /// Bytes the line occupied in the stream, terminator included. For a
    /// truncated line this is the part that fit in the buffer.
    pub len: usize,
    pub truncated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No byte of the next line seen yet.
    LineStart,
    /// Inside a line; the first `scanned` pending bytes hold no terminator.
    InLine { scanned: usize },
    /// The current line overflowed the buffer; drop bytes up to its end.
    Overflow,
}

struct LineSpan {
    text: Range<usize>,
    len: usize,
    truncated: bool,
    timestamp: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Decompressed bytes pulled from the source so far.
    pub bytes_read: u64,
    pub lines: u64,
    pub undated_lines: u64,
    pub truncated_lines: u64,
}

/// Forward-only record reader over a (decompressed) byte stream.
pub struct Scanner<R> {
    source: R,
    buf: ScanBuffer,
    /// Longest line kept whole; the buffer holds one byte more so a line of
    /// exactly this length still has room for its terminator.
    line_limit: usize,
    state: ScanState,
    tz_offset: TzOffset,
    eof: bool,
    counters: ScanCounters,
}

impl<R: Read> Scanner<R> {
    pub fn new(source: R, buffer_size: usize, tz_offset: TzOffset) -> Self {
        Self {
            source,
            buf: ScanBuffer::with_capacity(buffer_size.max(1) + 1),
            line_limit: buffer_size.max(1),
            state: ScanState::LineStart,
            tz_offset,
            eof: false,
            counters: ScanCounters::default(),
        }
    }

    pub fn counters(&self) -> ScanCounters {
        self.counters
    }

    pub fn buffer_size(&self) -> usize {
        self.line_limit
    }

    /// Next line, dated or not. `Ok(None)` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<Record<'_>>, ScanError> {
        match self.advance()? {
            Some(span) => Ok(Some(self.record(span))),
            None => Ok(None),
        }
    }

    /// Next line that carries a leading timestamp. Undated lines are skipped
    /// and only show up in [`ScanCounters::undated_lines`].
    pub fn next_record(&mut self) -> Result<Option<Record<'_>>, ScanError> {
        loop {
            let Some(span) = self.advance()? else {
                return Ok(None);
            };
            if span.timestamp.is_some() {
                return Ok(Some(self.record(span)));
            }
            self.counters.undated_lines += 1;
            trace!(line = self.counters.lines, "skipping line without timestamp");
        }
    }

    fn record(&self, span: LineSpan) -> Record<'_> {
        Record {
            raw_text: self.buf.slice(span.text),
            timestamp: span.timestamp,
            len: span.len,
            truncated: span.truncated,
        }
    }

    fn advance(&mut self) -> Result<Option<LineSpan>, ScanError> {
        loop {
            match self.state {
                ScanState::Overflow => {
                    let pending = self.buf.pending();
                    match pending.iter().position(|&b| b == LINE_TERMINATOR) {
                        Some(pos) => {
                            self.buf.take(pos + 1);
                            self.state = ScanState::LineStart;
                            continue;
                        }
                        None => {
                            let n = pending.len();
                            self.buf.take(n);
                        }
                    }
                }
                ScanState::LineStart | ScanState::InLine { .. } => {
                    let scanned = match self.state {
                        ScanState::InLine { scanned } => scanned,
                        _ => 0,
                    };
                    let pending = self.buf.pending();
                    if let Some(pos) = pending[scanned..]
                        .iter()
                        .position(|&b| b == LINE_TERMINATOR)
                    {
                        let line_len = scanned + pos;
                        self.state = ScanState::LineStart;
                        return Ok(Some(self.take_line(line_len, line_len + 1, false)));
                    }

                    if self.buf.is_full() {
                        // the byte past the limit stays pending for Overflow
                        let len = self.line_limit;
                        self.state = ScanState::Overflow;
                        self.counters.truncated_lines += 1;
                        debug!(
                            line = self.counters.lines + 1,
                            buffer_size = self.line_limit,
                            "line exceeds buffer, truncating"
                        );
                        return Ok(Some(self.take_line(len, len, true)));
                    }

                    self.state = if pending.is_empty() {
                        ScanState::LineStart
                    } else {
                        ScanState::InLine {
                            scanned: pending.len(),
                        }
                    };
                }
            }

            if self.eof {
                if let ScanState::InLine { .. } = self.state {
                    // final line without a terminator
                    let len = self.buf.pending().len();
                    self.state = ScanState::LineStart;
                    return Ok(Some(self.take_line(len, len, false)));
                }
                return Ok(None);
            }

            let n = self
                .buf
                .fill_from(&mut self.source)
                .map_err(|e| ScanError::read(self.counters.bytes_read, e))?;
            self.counters.bytes_read += n as u64;
            if n == 0 {
                self.eof = true;
            }
        }
    }

    fn take_line(&mut self, text_len: usize, len: usize, truncated: bool) -> LineSpan {
        let taken = self.buf.take(len);
        let mut text = taken.start..taken.start + text_len;
        if !truncated && self.buf.slice(text.clone()).last() == Some(&b'\r') {
            text.end -= 1;
        }
        // a truncated line still gets its prefix parsed
        let timestamp = parse_leading(self.buf.slice(text.clone()))
            .and_then(|civil| self.tz_offset.normalize(&civil));
        self.counters.lines += 1;
        LineSpan {
            text,
            len,
            truncated,
            timestamp,
        }
    }
}
