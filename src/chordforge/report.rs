use std::fmt;

use serde::Serialize;

use crate::chordforge::chord::Chord;
use crate::chordforge::keyboard::{KeyHighlight, Keyboard};
use crate::chordforge::pitch::PitchClass;
use crate::chordforge::util::{notes_to_str, ordinal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InversionLine {
    pub label: String,
    pub notes: Vec<String>,
}

impl fmt::Display for InversionLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.label, notes_to_str(&self.notes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedKey {
    pub position: usize,
    pub note: String,
    pub highlight: KeyHighlight,
}

/// Everything shown for one chord: root position, every inversion, and the
/// keyboard for the selected voicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub root: String,
    pub chord_type: String,
    pub notes: Vec<String>,
    pub inversions: Vec<InversionLine>,
    pub selected_inversion: usize,
    pub keyboard: Vec<HighlightedKey>,
    #[serde(skip)]
    keyboard_text: String,
}

impl Report {
    /// `selected` wraps modulo the number of notes; a chord without notes
    /// always shows root position.
    pub fn for_chord(chord: &Chord, selected: usize) -> Report {
        let inversions = chord
            .inversions()
            .into_iter()
            .enumerate()
            .map(|(k, notes)| InversionLine {
                label: match k {
                    0 => String::from("Root Position"),
                    _ => format!("{} Inversion", ordinal(k)),
                },
                notes: notes.iter().map(|note| note.name().to_string()).collect(),
            })
            .collect::<Vec<InversionLine>>();

        let selected_inversion = selected.checked_rem(chord.inversion_count()).unwrap_or(0);
        let keyboard = match inversions.get(selected_inversion) {
            Some(line) => Keyboard::with_notes(&line.notes),
            None => Keyboard::new(),
        };
        Report {
            root: chord.root().name().to_string(),
            chord_type: chord.formula().name().to_string(),
            notes: chord.note_names(),
            selected_inversion,
            keyboard: keyboard
                .highlighted()
                .into_iter()
                .map(|(position, highlight)| HighlightedKey {
                    position,
                    note: PitchClass::new(position as u8).name().to_string(),
                    highlight,
                })
                .collect(),
            keyboard_text: keyboard.render(),
            inversions,
        }
    }

    pub fn keyboard_text(&self) -> &str {
        &self.keyboard_text
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", self.root, self.chord_type)?;
        for line in &self.inversions {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
