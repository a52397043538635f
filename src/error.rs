//! Error types for the Twitch IRC protocol core.
//!
//! Only the line parser can fail. Every other irregularity (missing tags,
//! malformed badges, absent trailing text) degrades to an empty value or to
//! "no projection" instead of an error.

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing a raw protocol line.
///
/// A failed line should be discarded by the caller; parsing it again will
/// fail the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Line was empty or contained only whitespace.
    #[error("empty line")]
    EmptyLine,

    /// Line held tags and/or a prefix but no command token.
    #[error("missing command")]
    MissingCommand,
}
