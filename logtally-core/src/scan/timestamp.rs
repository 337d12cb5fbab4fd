//! Leading timestamp grammar.
//!
//! ```text
//! [ws] ['['] YYYY [-/] MM [-/] DD [' '|'T'] HH [':'] MM [':'] SS
//! ```
//!
//! Every separator is optional, so `2021-06-01 00:05:00`,
//! `2021/06/01T00:05:00` and `20210601000500` all parse. Whatever follows the
//! seconds field (fractions, zone names, the message) is ignored.

use crate::time::CivilTime;

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn eat_one_of(&mut self, set: &[u8]) {
        if self.peek().is_some_and(|b| set.contains(&b)) {
            self.pos += 1;
        }
    }

    fn digits(&mut self, width: usize) -> Option<u32> {
        let field = self.bytes.get(self.pos..self.pos + width)?;
        let mut value = 0u32;
        for &b in field {
            if !b.is_ascii_digit() {
                return None;
            }
            value = value * 10 + u32::from(b - b'0');
        }
        self.pos += width;
        Some(value)
    }
}

fn date(cur: &mut Cursor<'_>) -> Option<(i32, u32, u32)> {
    let year = cur.digits(4)?;
    cur.eat_one_of(b"-/");
    let month = cur.digits(2)?;
    cur.eat_one_of(b"-/");
    let day = cur.digits(2)?;
    Some((year as i32, month, day))
}

fn time_of_day(cur: &mut Cursor<'_>) -> Option<(u32, u32, u32)> {
    let hour = cur.digits(2)?;
    cur.eat_one_of(b":");
    let minute = cur.digits(2)?;
    cur.eat_one_of(b":");
    let second = cur.digits(2)?;
    Some((hour, minute, second))
}

/// Parses the timestamp at the start of `line`, returning the fields and the
/// number of bytes they occupied. Calendar validity is not checked here.
pub fn parse_prefix(line: &[u8]) -> Option<(CivilTime, usize)> {
    let mut cur = Cursor::new(line);
    cur.skip_blanks();
    cur.eat_one_of(b"[");
    let (year, month, day) = date(&mut cur)?;
    cur.eat_one_of(b" T");
    let (hour, minute, second) = time_of_day(&mut cur)?;
    let civil = CivilTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    };
    Some((civil, cur.pos))
}

/// Parses a bare date (`YYYY-MM-DD`, separators optional) filling the whole
/// input; used for configuration values such as `--start 2021-06-01`.
pub fn parse_date_only(text: &[u8]) -> Option<CivilTime> {
    let mut cur = Cursor::new(text);
    let (year, month, day) = date(&mut cur)?;
    (cur.pos == text.len()).then(|| CivilTime::midnight(year, month, day))
}

/// Convenience over [`parse_prefix`] for callers that only need the fields.
pub fn parse_leading(line: &[u8]) -> Option<CivilTime> {
    parse_prefix(line).map(|(civil, _)| civil)
}
