//! Error types for mdtoc operations.

use thiserror::Error;

/// Errors that can occur while creating or refreshing a table of contents.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "header level out of bound at line {line}: \"{content}\" \
         (level {level} is above the initial level {initial})"
    )]
    HeaderLevelOutOfBound {
        line: usize,
        content: String,
        level: usize,
        initial: usize,
    },

    #[error(
        "header levels not continuous at line {line}: \"{content}\" \
         (level drops from {prev} to {level} in one step)"
    )]
    HeaderLevelNotContinuous {
        line: usize,
        content: String,
        prev: usize,
        level: usize,
    },

    #[error("invalid style \"{0}\": must be \"github\" or \"gitlab\"")]
    InvalidStyle(String),

    #[error("invalid horizontal rule style \"{0}\": must be \"mdformat\" or \"prettier\"")]
    InvalidHorizontalRuleStyle(String),

    #[error("invalid exclude pattern: {0}")]
    InvalidExcludePattern(#[from] regex::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
