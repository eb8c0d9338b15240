use std::fmt;

use crate::chordforge::util::iterable_to_str;

/// A chord type: a label and the semitone offsets of its notes above the root.
///
/// Only the entries of [`FORMULAS`] exist outside this crate.
#[derive(Debug, PartialEq, Eq)]
pub struct ChordFormula {
    name: &'static str,
    offsets: &'static [u8],
}

/// Registered chord types, in the order they are offered to the user.
pub static FORMULAS: [ChordFormula; 7] = [
    ChordFormula::new("Major", &[0, 4, 7]),
    ChordFormula::new("Minor", &[0, 3, 7]),
    ChordFormula::new("Diminished", &[0, 3, 6]),
    ChordFormula::new("Augmented", &[0, 4, 8]),
    ChordFormula::new("Dominant 7th", &[0, 4, 7, 10]),
    ChordFormula::new("Major 7th", &[0, 4, 7, 11]),
    ChordFormula::new("Minor 7th", &[0, 3, 7, 10]),
];

impl ChordFormula {
    pub(crate) const fn new(name: &'static str, offsets: &'static [u8]) -> Self {
        ChordFormula { name, offsets }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Semitones above the root, lowest first.
    pub fn offsets(&self) -> &'static [u8] {
        self.offsets
    }

    /// Exact, case-sensitive lookup by label.
    pub fn lookup(name: &str) -> Option<&'static ChordFormula> {
        FORMULAS.iter().find(|formula| formula.name == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        FORMULAS.iter().map(|formula| formula.name)
    }

    /// number of notes produced by this formula
    pub fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl fmt::Display for ChordFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, iterable_to_str(self.offsets))
    }
}
