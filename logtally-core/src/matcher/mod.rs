//! Line filter.
//!
//! A record is kept when its text matches the configured [`Pattern`]. The
//! search is the classic "try the anchor, otherwise slide the window" scheme:
//! an anchored pattern is tried at offset zero only, an unanchored one at
//! every offset up to and including the end of the line, stopping at the
//! first success.
//!
//! Text is always an explicit byte slice. The line ends at the first
//! terminator byte or at the end of the slice, whichever comes first; nothing
//! after that point is ever inspected.

mod error;
mod pattern;


pub use error::PatternError;
pub use pattern::{Atom, MAX_PATTERN_LEN, Pattern, Repeat};

pub const LINE_TERMINATOR: u8 = b'\n';

#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
    terminator: u8,
}

impl Matcher {
    pub fn new(pattern: Pattern) -> Self {
        Self::with_terminator(pattern, LINE_TERMINATOR)
    }

    pub fn with_terminator(pattern: Pattern, terminator: u8) -> Self {
        Self {
            pattern,
            terminator,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn matches(&self, text: &[u8]) -> bool {
        search_line(&self.pattern, self.terminator, text)
    }
}

/// One-shot form of [`Matcher::matches`] using `\n` as the terminator.
pub fn matches(pattern: &Pattern, text: &[u8]) -> bool {
    search_line(pattern, LINE_TERMINATOR, text)
}

fn search_line(pattern: &Pattern, terminator: u8, text: &[u8]) -> bool {
    let end = text
        .iter()
        .position(|&b| b == terminator)
        .unwrap_or(text.len());
    search(pattern.atoms(), &text[..end])
}

fn search(atoms: &[Atom], line: &[u8]) -> bool {
    if let [Atom::AnchorStart, rest @ ..] = atoms {
        return match_here(rest, line);
    }
    (0..=line.len()).any(|start| match_here(atoms, &line[start..]))
}

// Literal steps are a loop; only `*` recurses, so depth is bounded by the
// number of starred atoms rather than by line length.
fn match_here(mut atoms: &[Atom], mut line: &[u8]) -> bool {
    loop {
        match atoms {
            [] => return true,
            [Atom::Star(repeat), rest @ ..] => return match_star(*repeat, rest, line),
            [Atom::AnchorEnd] => return line.is_empty(),
            [atom, rest @ ..] => {
                let Some((&c, tail)) = line.split_first() else {
                    return false;
                };
                let accepted = match atom {
                    Atom::AnyChar => true,
                    Atom::Literal(l) => *l == c,
                    _ => false,
                };
                if !accepted {
                    return false;
                }
                atoms = rest;
                line = tail;
            }
        }
    }
}

/// Greedy: take the longest run first, then give bytes back one at a time.
fn match_star(repeat: Repeat, rest: &[Atom], line: &[u8]) -> bool {
    let run = line.iter().take_while(|&&c| repeat.accepts(c)).count();
    (0..=run)
        .rev()
        .any(|taken| match_here(rest, &line[taken..]))
}
