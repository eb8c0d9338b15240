use std::fmt;
use std::str::FromStr;

use crate::chordforge::error::ChordError;

/// Number of pitch classes in the chromatic scale.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// The chromatic scale in canonical spelling. Black keys are always spelled
/// with a sharp.
pub const ALL_NOTES: [&str; PITCH_CLASS_COUNT as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Letter name of a white key; the discriminant is its pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stepname {
    C = 0,
    D = 2,
    E = 4,
    F = 5,
    G = 7,
    A = 9,
    B = 11,
}

const STEPNAMES: [Stepname; 7] = [
    Stepname::C,
    Stepname::D,
    Stepname::E,
    Stepname::F,
    Stepname::G,
    Stepname::A,
    Stepname::B,
];

impl Stepname {
    fn from_natural(index: u8) -> Option<Stepname> {
        STEPNAMES.iter().copied().find(|step| *step as u8 == index)
    }
}

impl fmt::Display for Stepname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(ALL_NOTES[*self as usize])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Natural,
    Sharp,
}

impl Accidental {
    /// Semitones above the step name.
    pub fn alteration(&self) -> u8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == Accidental::Sharp {
            f.write_str("#")?;
        }
        Ok(())
    }
}

/// A note name without octave, stored as its index (0 = C) in [`ALL_NOTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(index: u8) -> Self {
        PitchClass(index % PITCH_CLASS_COUNT)
    }

    /// Exact lookup in the canonical table. Flat spellings are not accepted.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        ALL_NOTES
            .iter()
            .position(|note| *note == name)
            .map(|index| PitchClass(index as u8))
    }

    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT).map(PitchClass)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        ALL_NOTES[self.0 as usize]
    }

    pub fn transpose(&self, semitones: u8) -> PitchClass {
        PitchClass((self.0 + semitones % PITCH_CLASS_COUNT) % PITCH_CLASS_COUNT)
    }

    /// White keys on a piano.
    pub fn is_natural(&self) -> bool {
        Stepname::from_natural(self.0).is_some()
    }

    pub fn to_step_name(&self) -> (Stepname, Accidental) {
        let accidental = if self.is_natural() { Accidental::Natural } else { Accidental::Sharp };
        match Stepname::from_natural(self.0 - accidental.alteration()) {
            Some(step_name) => (step_name, accidental),
            None => unreachable!("Unknown pitch class {}", self.0),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s).ok_or_else(|| ChordError::UnknownRoot(s.to_string()))
    }
}
