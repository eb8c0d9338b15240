use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ChordError {
    #[error("unknown root note '{0}'")]
    UnknownRoot(String),
    #[error("unknown chord type '{0}'")]
    UnknownChordType(String),
    #[error("cannot parse chord query: {msg}")]
    Syntax { msg: String },
}
