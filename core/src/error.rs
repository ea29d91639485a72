use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed index: {0}")]
    Malformed(#[from] MalformedIndexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// A record in the serialized input is missing a required field.
///
/// The whole load fails on the first malformed record; no partial index is
/// ever exposed.
#[derive(Error, Debug)]
pub enum MalformedIndexError {
    #[error("record {record}: missing search key")]
    MissingKey { record: usize },

    #[error("record {record} ({key:?}): missing target page")]
    MissingPage { record: usize, key: String },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("missing `var searchData=` prefix")]
    MissingPrefix,

    #[error("byte {offset}: expected {expected}")]
    Unexpected { offset: usize, expected: &'static str },

    #[error("byte {offset}: unterminated string literal")]
    UnterminatedString { offset: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
