//! Error types

use std::path::PathBuf;

use miette::Diagnostic;
use sqlparser::tokenizer::TokenizerError;
use thiserror::Error;

/// Errors raised while comparing SQL schemas
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The SQL tokenizer rejected the input
    #[error(transparent)]
    #[diagnostic(code(sqlcompare::tokenize))]
    Tokenize(#[from] TokenizerError),

    /// An order-insensitive group could not be split into members
    #[error(
        "Unbalanced separators ({separators}) and member groups ({groups}) in {members:?}"
    )]
    #[diagnostic(
        code(sqlcompare::unbalanced_separators),
        help("check for a trailing comma or an empty element between two commas")
    )]
    UnbalancedSeparators {
        separators: usize,
        groups: usize,
        /// Text of every member group that was found
        members: Vec<String>,
    },

    /// A SQL file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    #[diagnostic(code(sqlcompare::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be loaded
    #[error("Invalid configuration {}: {message}", .path.display())]
    #[diagnostic(code(sqlcompare::config))]
    Config { path: PathBuf, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_message() {
        let err = Error::UnbalancedSeparators {
            separators: 2,
            groups: 1,
            members: vec!["a".to_string()],
        };
        assert_eq!(
            err.to_string(),
            r#"Unbalanced separators (2) and member groups (1) in ["a"]"#
        );
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("sqlcompare::unbalanced_separators")
        );
    }
}
