use std::io::{self, Read};
use std::ops::Range;

/// Fixed-capacity working buffer.
///
/// Holds `data[start..end]` as unread bytes. A refill first moves the unread
/// tail to the front so a line cut by the previous read is completed in
/// place; the buffer never grows.
#[derive(Debug)]
pub struct ScanBuffer {
    data: Box<[u8]>,
    start: usize,
    end: usize,
}

impl ScanBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity.max(1)].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn pending(&self) -> &[u8] {
        &self.data[self.start..self.end]
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when unread bytes occupy every slot, so a refill has no room.
    pub fn is_full(&self) -> bool {
        self.start == 0 && self.end == self.data.len()
    }

    /// Marks the next `n` unread bytes as consumed and returns their
    /// position; the bytes stay readable through [`ScanBuffer::slice`]
    /// until the next refill.
    pub fn take(&mut self, n: usize) -> Range<usize> {
        let n = n.min(self.end - self.start);
        let range = self.start..self.start + n;
        self.start += n;
        range
    }

    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        &self.data[range]
    }

    /// Reads once from `reader` into the free space, compacting first.
    ///
    /// Returns the number of bytes added; `Ok(0)` means end of stream (or a
    /// full buffer, which callers rule out before refilling).
    pub fn fill_from<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        self.compact();
        if self.end == self.data.len() {
            return Ok(0);
        }
        loop {
            match reader.read(&mut self.data[self.end..]) {
                Ok(n) => {
                    self.end += n;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn compact(&mut self) {
        if self.start == 0 {
            return;
        }
        if self.start < self.end {
            self.data.copy_within(self.start..self.end, 0);
        }
        self.end -= self.start;
        self.start = 0;
    }
}
