//! SQL dialect support

use serde::{Deserialize, Serialize};
use sqlparser::dialect::{
    Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect,
};
use std::str::FromStr;

/// Dialects the tokenizer can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    PostgreSQL,
    MySQL,
    SQLite,
    Generic,
}

impl SqlDialect {
    /// Get the sqlparser dialect used for tokenizing
    pub fn tokenizer_dialect(&self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::PostgreSQL => Box::new(PostgreSqlDialect {}),
            SqlDialect::MySQL => Box::new(MySqlDialect {}),
            SqlDialect::SQLite => Box::new(SQLiteDialect {}),
            SqlDialect::Generic => Box::new(GenericDialect {}),
        }
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(SqlDialect::PostgreSQL),
            "mysql" | "mysql8" => Ok(SqlDialect::MySQL),
            "sqlite" | "sqlite3" => Ok(SqlDialect::SQLite),
            "generic" | "ansi" => Ok(SqlDialect::Generic),
            _ => Err(format!(
                "Unknown dialect: '{}'. Supported dialects: postgresql, mysql, sqlite, generic.",
                s
            )),
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlDialect::PostgreSQL => write!(f, "postgresql"),
            SqlDialect::MySQL => write!(f, "mysql"),
            SqlDialect::SQLite => write!(f, "sqlite"),
            SqlDialect::Generic => write!(f, "generic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("pg".parse::<SqlDialect>(), Ok(SqlDialect::PostgreSQL));
        assert_eq!("MySQL8".parse::<SqlDialect>(), Ok(SqlDialect::MySQL));
        assert_eq!("sqlite3".parse::<SqlDialect>(), Ok(SqlDialect::SQLite));
        assert_eq!("ansi".parse::<SqlDialect>(), Ok(SqlDialect::Generic));
    }

    #[test]
    fn test_unknown_dialect() {
        let err = "oracle".parse::<SqlDialect>().unwrap_err();
        assert!(err.contains("Unknown dialect: 'oracle'"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for dialect in [
            SqlDialect::PostgreSQL,
            SqlDialect::MySQL,
            SqlDialect::SQLite,
            SqlDialect::Generic,
        ] {
            assert_eq!(dialect.to_string().parse::<SqlDialect>(), Ok(dialect));
        }
    }
}
