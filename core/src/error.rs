//! Error types for argument parsing.
//!
//! Parsing fails with one of two kinds. A [`ConfigError`] means the input
//! used something no schema entry accounts for in a way that points at the
//! schema author; an [`InvalidInputError`] is a user-facing complaint about
//! missing, malformed or extraneous arguments. Both are fatal to the parse
//! and are surfaced unchanged through [`ParseError`].

use thiserror::Error;

/// Schema-level failures observed while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A `--long` token matches no registered flag.
    #[error("flag '{0}' is unknown")]
    UnknownFlag(String),
}

/// User-facing parse failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A required option was not supplied in either form.
    #[error("{markers} is required, and wasn't found")]
    MissingOption {
        /// Short and long markers, e.g. `-t/--test1`.
        markers: String,
    },

    /// A single-valued option is the last token.
    #[error("option {option} expects a value")]
    MissingValue { option: String },

    /// A fixed-arity option got too few or too many values.
    #[error("option {option} expects {expected} value(s), found {found}")]
    WrongValueCount {
        option: String,
        expected: usize,
        found: usize,
    },

    /// A one-or-more option got no values.
    #[error("option {option} expects at least one value")]
    NoValues { option: String },

    /// A number option got a token that does not parse as a number.
    #[error("option {option} expects a number, got '{value}'")]
    NotANumber { option: String, value: String },

    /// A character of a short-flag cluster matches no registered flag.
    #[error("flag '-{flag}' in '{cluster}' is unknown")]
    UnknownShortFlag { flag: char, cluster: String },

    /// A required command group had no matching command.
    #[error("command group {group} is required and cannot be omitted")]
    MissingCommand { group: String },

    /// Tokens left over once every resolver has run.
    #[error("invalid extra params supplied: {}", .0.join(", "))]
    ExtraArguments(Vec<String>),
}

/// Any failure of a parse call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl ParseError {
    /// Returns `true` for schema/caller errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns `true` for end-user input errors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
