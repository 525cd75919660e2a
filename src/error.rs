//! Error types for record parsing and command execution.
//!
//! Neither kind is fatal: a bad record is skipped during loading and a bad
//! command line produces a single error marker on stdout.

use thiserror::Error;

/// Text printed on stdout for any command that cannot be executed
pub const INVALID_COMMAND_MARKER: &str = "<INVALID COMMAND>";

/// Why a polygon record (or polygon literal) was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing vertex count")]
    MissingCount,

    #[error("invalid vertex count {0:?}")]
    InvalidCount(String),

    #[error("polygon needs at least {min} vertices, got {count}")]
    TooFewVertices { count: usize, min: usize },

    #[error("expected {expected} points, found only {found}")]
    MissingPoints { expected: usize, found: usize },

    #[error("expected {expected} points, found surplus token {token:?}")]
    SurplusPoints { expected: usize, token: String },

    #[error("malformed point {0:?}, expected (x;y)")]
    MalformedPoint(String),
}

/// Failure of a single command line
///
/// Both variants display as [`INVALID_COMMAND_MARKER`]; the reason is kept
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Keyword not recognised
    #[error("<INVALID COMMAND>")]
    InvalidCommand(String),

    /// Keyword recognised, but its arguments are bad or its precondition
    /// does not hold
    #[error("<INVALID COMMAND>")]
    InvalidArgument(String),
}

impl CommandError {
    pub fn reason(&self) -> String {
        match self {
            CommandError::InvalidCommand(keyword) => format!("unknown command {:?}", keyword),
            CommandError::InvalidArgument(reason) => reason.clone(),
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        CommandError::InvalidArgument(format!("bad polygon literal: {}", err))
    }
}
