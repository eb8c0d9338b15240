//! Chord notes and inversions.
//!
//! ```
//! use chordforge::{build, invert};
//!
//! let notes = build("C", "Major");
//! assert_eq!(notes, ["C", "E", "G"]);
//! assert_eq!(invert(&notes, 1), ["E", "G", "C"]);
//! ```

pub mod chordforge {
    pub mod chord;
    pub mod chordparser;
    pub mod error;
    pub mod formula;
    pub mod keyboard;
    pub mod pitch;
    pub mod report;
    pub mod util;
}

pub use crate::chordforge::chord::{build, invert, Chord};
pub use crate::chordforge::chordparser::ChordQuery;
pub use crate::chordforge::error::ChordError;
pub use crate::chordforge::formula::{ChordFormula, FORMULAS};
pub use crate::chordforge::keyboard::{KeyHighlight, Keyboard};
pub use crate::chordforge::pitch::{PitchClass, ALL_NOTES};
pub use crate::chordforge::report::Report;
