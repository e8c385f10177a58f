//! Structured error types for the conversion pipeline.
//!
//! Every fatal condition aborts the whole conversion; no partial output is
//! usable. Unrecognized scene elements are deliberately not represented
//! here — they are a stderr diagnostic, not an error.

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The numeric cursor found no digit/`.`/`-`/`e` characters where a
    /// number was expected in path data.
    #[error("expected a number at offset {offset} in path data")]
    EmptyNumber { offset: usize },

    /// A required literal separator was missing in path data.
    #[error("expected '{expected}' at offset {offset} in path data, found {found:?}")]
    UnexpectedChar {
        expected: char,
        found: Option<char>,
        offset: usize,
    },

    /// A command letter outside {M, L, Q, C, Z}.
    #[error("unknown path command '{0}'")]
    UnknownPathCommand(char),

    /// A present, non-"none" fill attribute without a valid `rgb(r,g,b)`
    /// substring.
    #[error("malformed fill color {0:?}")]
    MalformedFillColor(String),

    /// The document markup itself failed to parse.
    #[error("malformed svg document: {0}")]
    Xml(#[from] quick_xml::Error),
}
