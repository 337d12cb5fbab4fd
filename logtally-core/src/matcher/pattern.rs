use crate::matcher::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Longest pattern accepted.
pub const MAX_PATTERN_LEN: usize = 1024;

/// The atom a `*` repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Literal(u8),
    Any,
}

impl Repeat {
    pub(crate) fn accepts(self, c: u8) -> bool {
        match self {
            Repeat::Literal(l) => l == c,
            Repeat::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    Literal(u8),
    AnyChar,
    AnchorStart,
    AnchorEnd,
    Star(Repeat),
}

/// A compiled filter expression.
///
/// The language is deliberately tiny:
///
/// | syntax | meaning                                      |
/// |--------|----------------------------------------------|
/// | `c`    | the literal byte `c`                         |
/// | `.`    | any single byte                              |
/// | `^`    | start of line (first position only)          |
/// | `$`    | end of line (last position only)             |
/// | `*`    | zero or more of the preceding byte or `.`    |
///
/// `^` and `$` anywhere else are plain literals. The empty pattern matches
/// every line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    source: String,
    atoms: Vec<Atom>,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let bytes = source.as_bytes();
        if bytes.len() > MAX_PATTERN_LEN {
            return Err(PatternError::TooLong {
                len: bytes.len(),
                max: MAX_PATTERN_LEN,
            });
        }

        let mut atoms: Vec<Atom> = Vec::with_capacity(bytes.len());
        for (position, &b) in bytes.iter().enumerate() {
            let last = position + 1 == bytes.len();
            let atom = match b {
                b'^' if position == 0 => Atom::AnchorStart,
                b'$' if last => Atom::AnchorEnd,
                b'.' => Atom::AnyChar,
                b'*' => Atom::Star(match atoms.pop() {
                    Some(Atom::Literal(c)) => Repeat::Literal(c),
                    Some(Atom::AnyChar) => Repeat::Any,
                    Some(Atom::Star(_)) => return Err(PatternError::RepeatedStar { position }),
                    Some(Atom::AnchorStart | Atom::AnchorEnd) => {
                        return Err(PatternError::StarAfterAnchor { position });
                    }
                    None => return Err(PatternError::DanglingStar { position }),
                }),
                c => Atom::Literal(c),
            };
            atoms.push(atom);
        }

        Ok(Self {
            source: source.to_string(),
            atoms,
        })
    }

    /// The pattern that accepts every line.
    pub fn always() -> Self {
        Self::default()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
