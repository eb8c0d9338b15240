/*
   ChordForge chord calculator.

   A chord is a root pitch class plus a registered formula. Notes are the
   formula offsets added to the root modulo 12; an inversion rotates the
   notes left, moving the bass note up an octave each step.
 */

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::chordforge::chordparser::ChordQuery;
use crate::chordforge::error::ChordError;
use crate::chordforge::formula::ChordFormula;
use crate::chordforge::pitch::PitchClass;

/// Notes of `chord_type` built on `root`, in root position.
///
/// Unknown roots or chord types yield an empty vector; callers treat an empty
/// result as invalid input. Use [`Chord::new`] for the reason.
pub fn build(root: &str, chord_type: &str) -> Vec<String> {
    match Chord::new(root, chord_type) {
        Ok(chord) => chord.note_names(),
        Err(_) => Vec::new(),
    }
}

/// Rotates `notes` left by `k` positions (the `k`th inversion).
///
/// `k` wraps modulo the number of notes; an empty slice stays empty.
pub fn invert<T: Clone>(notes: &[T], k: usize) -> Vec<T> {
    if notes.is_empty() || k == 0 {
        return notes.to_vec();
    }
    let shift = k % notes.len();
    notes[shift..].iter().chain(notes[..shift].iter()).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: PitchClass,
    formula: &'static ChordFormula,
    notes: Vec<PitchClass>,
}

impl Chord {
    pub fn new(root: &str, chord_type: &str) -> Result<Chord, ChordError> {
        let root = PitchClass::from_str(root)?;
        let formula = ChordFormula::lookup(chord_type)
            .ok_or_else(|| ChordError::UnknownChordType(chord_type.to_string()))?;
        Ok(Chord::from_parts(root, formula))
    }

    pub(crate) fn from_parts(root: PitchClass, formula: &'static ChordFormula) -> Chord {
        Chord {
            root,
            formula,
            notes: formula.offsets().iter().map(|offset| root.transpose(*offset)).collect(),
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn formula(&self) -> &'static ChordFormula {
        self.formula
    }

    /// Root position; the first note is always the root.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(|note| note.name().to_string()).collect()
    }

    /// Distinct inversions, root position included.
    pub fn inversion_count(&self) -> usize {
        self.notes.len()
    }

    pub fn inversion(&self, k: usize) -> Vec<PitchClass> {
        invert(&self.notes, k)
    }

    /// Root position followed by each inversion in turn.
    pub fn inversions(&self) -> Vec<Vec<PitchClass>> {
        (0..self.inversion_count()).map(|k| self.inversion(k)).collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: {}", self.root, self.formula.name(), self.notes.iter().join(", "))
    }
}

impl FromStr for Chord {
    type Err = ChordError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = ChordQuery::from_str(s)?;
        if query.inversion != 0 {
            return Err(ChordError::Syntax {
                msg: format!("a chord cannot carry an inversion, got '/ {}'", query.inversion),
            });
        }
        Chord::new(&query.root, &query.chord_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordforge::formula::FORMULAS;
    use crate::chordforge::pitch::ALL_NOTES;

    fn names(notes: &[&str]) -> Vec<String> {
        notes.iter().map(|note| note.to_string()).collect()
    }

    #[test]
    fn build_major() {
        assert_eq!(build("C", "Major"), names(&["C", "E", "G"]));
    }

    #[test]
    fn build_minor() {
        assert_eq!(build("A", "Minor"), names(&["A", "C", "E"]));
    }

    #[test]
    fn build_dominant_7() {
        assert_eq!(build("C", "Dominant 7th"), names(&["C", "E", "G", "A#"]));
    }

    #[test]
    fn build_wraps_around_octave() {
        assert_eq!(build("B", "Major 7th"), names(&["B", "D#", "F#", "A#"]));
        assert_eq!(build("G#", "Augmented"), names(&["G#", "C", "E"]));
        assert_eq!(build("F#", "Diminished"), names(&["F#", "A", "C"]));
    }

    #[test]
    fn build_unknown_input_is_empty() {
        assert!(build("X", "Major").is_empty());
        assert!(build("C", "Unknown").is_empty());
        assert!(build("Db", "Major").is_empty());
        assert!(build("", "").is_empty());
    }

    #[test]
    fn strict_errors() {
        assert_eq!(Chord::new("X", "Major"), Err(ChordError::UnknownRoot(String::from("X"))));
        assert_eq!(Chord::new("C", "Unknown"), Err(ChordError::UnknownChordType(String::from("Unknown"))));
    }

    #[test]
    fn root_comes_first() {
        for root in ALL_NOTES {
            for formula in FORMULAS.iter() {
                let notes = build(root, formula.name());
                assert_eq!(notes.len(), formula.offsets().len());
                assert_eq!(notes[0], root);
            }
        }
    }

    #[test]
    fn invert_by_one() {
        assert_eq!(invert(&names(&["C", "E", "G"]), 1), names(&["E", "G", "C"]));
        assert_eq!(invert(&names(&["C", "E", "G"]), 2), names(&["G", "C", "E"]));
    }

    #[test]
    fn invert_full_cycle() {
        assert_eq!(invert(&names(&["C", "E", "G"]), 3), names(&["C", "E", "G"]));
    }

    #[test]
    fn invert_empty() {
        assert!(invert::<String>(&[], 5).is_empty());
    }

    #[test]
    fn invert_zero_is_identity() {
        for root in ALL_NOTES {
            for formula in FORMULAS.iter() {
                let notes = build(root, formula.name());
                assert_eq!(invert(&notes, 0), notes);
            }
        }
    }

    #[test]
    fn invert_is_modular() {
        for root in ALL_NOTES {
            for formula in FORMULAS.iter() {
                let notes = build(root, formula.name());
                for k in 0..20 {
                    assert_eq!(invert(&notes, k), invert(&notes, k % notes.len()), "{} {} / {}", root, formula.name(), k);
                }
            }
        }
    }

    #[test]
    fn inversions_of_seventh() {
        let chord = Chord::new("G", "Dominant 7th").unwrap();
        assert_eq!(chord.inversion_count(), 4);
        let rendered = chord.inversions().iter().map(|notes| notes.iter().join(" ")).collect::<Vec<String>>();
        assert_eq!(rendered, vec!["G B D F", "B D F G", "D F G B", "F G B D"]);
    }

    #[test]
    fn formatting() {
        let chord = Chord::new("D", "Minor 7th").unwrap();
        assert_eq!(chord.to_string(), "D Minor 7th: D, F, A, C");
    }

    #[test]
    fn from_query() {
        let chord: Chord = Chord::from_str("E Minor").unwrap();
        assert_eq!(chord.note_names(), names(&["E", "G", "B"]));
        assert_eq!(chord.root().name(), "E");
        assert_eq!(chord.formula().name(), "Minor");
        assert_eq!(Chord::from_str("E# Minor"), Err(ChordError::UnknownRoot(String::from("E#"))));
    }

    #[test]
    fn inversion_suffix_is_rejected() {
        assert!(matches!(Chord::from_str("C Major / 2"), Err(ChordError::Syntax { .. })));
        assert_eq!(Chord::from_str("C Major / 0"), Chord::from_str("C Major"));
    }
}
