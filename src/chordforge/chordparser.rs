use std::str::FromStr;

use pest::Parser;
use pest_derive::Parser;

use crate::chordforge::error::ChordError;

#[derive(Parser)]
#[grammar = "chordforge/chord.pest"]
pub struct ChordQueryParser;

/// A parsed `ROOT CHORD_TYPE [/ INVERSION]` query.
///
/// Parsing only checks the shape of the query; whether the root and chord
/// type are registered is decided when the chord is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordQuery {
    pub root: String,
    pub chord_type: String,
    pub inversion: usize,
}

fn syntax_error<E: ToString>(e: E) -> ChordError {
    ChordError::Syntax { msg: e.to_string() }
}

impl FromStr for ChordQuery {
    type Err = ChordError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = ChordQueryParser::parse(Rule::QUERY, s).map_err(syntax_error)?;
        let query = match pairs.next() {
            Some(pair) => pair,
            None => return Err(syntax_error(format!("{:?}", pairs))),
        };

        let mut root = None;
        let mut chord_type = None;
        let mut inversion = 0;
        for pair in query.into_inner() {
            match pair.as_rule() {
                Rule::ROOT => root = Some(pair.as_str().to_string()),
                Rule::CHORD_TYPE => chord_type = Some(pair.as_str().to_string()),
                Rule::INVERSION => inversion = pair.as_str().parse::<usize>().map_err(syntax_error)?,
                Rule::EOI => {}
                rule => return Err(syntax_error(format!("Unknown rule {:?}", rule))),
            }
        }

        match (root, chord_type) {
            (Some(root), Some(chord_type)) => Ok(ChordQuery { root, chord_type, inversion }),
            _ => Err(syntax_error(format!("incomplete query '{}'", s))),
        }
    }
}
