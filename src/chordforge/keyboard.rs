use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::chordforge::pitch::{PitchClass, PITCH_CLASS_COUNT};

/// Two octaves, C to B twice.
pub const KEY_COUNT: usize = 2 * PITCH_CLASS_COUNT as usize;

const KEY_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyHighlight {
    Plain,
    /// lowest note of the voicing
    Bass,
    Note,
}

impl KeyHighlight {
    fn marker(&self) -> &'static str {
        match self {
            KeyHighlight::Plain => "",
            KeyHighlight::Bass => "B",
            KeyHighlight::Note => "*",
        }
    }
}

/// A two-octave keyboard with the notes of one voicing highlighted.
///
/// The first note is the bass and sits in the lower octave. Every other note
/// is placed on the lowest key above the bass, so an inversion reads upwards
/// from left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: [KeyHighlight; KEY_COUNT],
}

impl Default for Keyboard {
    fn default() -> Self {
        Keyboard { keys: [KeyHighlight::Plain; KEY_COUNT] }
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights `notes`, unrecognised names are skipped.
    pub fn with_notes<S: AsRef<str>>(notes: &[S]) -> Keyboard {
        let mut keyboard = Keyboard::new();
        let bass = notes.first().and_then(|note| PitchClass::from_name(note.as_ref()));
        if let Some(bass) = bass {
            keyboard.keys[bass.index() as usize] = KeyHighlight::Bass;
        }

        let floor = bass.map(|bass| bass.index() as usize);
        for note in notes.iter().filter_map(|note| PitchClass::from_name(note.as_ref())) {
            if Some(note) == bass {
                continue;
            }
            let mut position = note.index() as usize;
            if matches!(floor, Some(floor) if position <= floor) {
                position += PITCH_CLASS_COUNT as usize;
            }
            keyboard.keys[position] = KeyHighlight::Note;
        }
        keyboard
    }

    pub fn key(&self, position: usize) -> Option<KeyHighlight> {
        self.keys.get(position).copied()
    }

    /// Positions (semitones above the lowest C) of every highlighted key.
    pub fn highlighted(&self) -> Vec<(usize, KeyHighlight)> {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| **key != KeyHighlight::Plain)
            .map(|(position, key)| (position, *key))
            .collect()
    }

    pub fn render(&self) -> String {
        let names = (0..KEY_COUNT)
            .map(|position| format!("{:<width$}", PitchClass::new(position as u8).name(), width = KEY_WIDTH))
            .join("");
        let markers = self.keys
            .iter()
            .map(|key| format!("{:<width$}", key.marker(), width = KEY_WIDTH))
            .join("");
        format!("{}\n{}", names.trim_end(), markers.trim_end())
    }
}

impl fmt::Display for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
