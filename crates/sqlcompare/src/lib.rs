//! sqlcompare: semantic comparison of SQL schemas
//!
//! Two schema dumps are considered equal when they only differ by whitespace,
//! comments, the order of column definitions inside `CREATE TABLE` or the
//! order of enum members inside `CREATE TYPE ... AS ENUM`. Order stays
//! significant everywhere else (index columns, primary keys, function bodies).

pub mod canonical;
pub mod classify;
pub mod compare;
pub mod config;
pub mod dialect;
pub mod error;
pub mod lexer;
pub mod token;

use std::path::Path;

pub use canonical::CanonicalKey;
pub use classify::StatementType;
pub use compare::{Comparator, SchemaDiff};
pub use config::CompareConfig;
pub use dialect::SqlDialect;
pub use error::{Error, Result};
pub use lexer::{parse_statements, Statement};
pub use token::{Leaf, LeafKind};

/// Compare two SQL strings using the PostgreSQL dialect.
pub fn compare(first_sql: &str, second_sql: &str) -> Result<bool> {
    Comparator::default().compare(first_sql, second_sql)
}

/// Statements only present on one side, ignoring non-significant changes.
pub fn get_diff(first_sql: &str, second_sql: &str) -> Result<SchemaDiff> {
    Comparator::default().get_diff(first_sql, second_sql)
}

/// Compare two SQL files using the PostgreSQL dialect.
pub fn compare_files(first: impl AsRef<Path>, second: impl AsRef<Path>) -> Result<bool> {
    Comparator::default().compare_files(first, second)
}
