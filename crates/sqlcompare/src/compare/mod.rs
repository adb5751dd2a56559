//! Schema comparison and diffing

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::canonical::CanonicalKey;
use crate::config::CompareConfig;
use crate::dialect::SqlDialect;
use crate::error::{Error, Result};
use crate::lexer::{parse_statements, Statement};

/// Statements found on only one side of a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaDiff {
    /// Statements of the first input missing from the second
    pub left_only: Vec<Vec<String>>,
    /// Statements of the second input missing from the first
    pub right_only: Vec<Vec<String>>,
}

impl SchemaDiff {
    pub fn is_empty(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty()
    }
}

impl From<SchemaDiff> for (Vec<Vec<String>>, Vec<Vec<String>>) {
    fn from(diff: SchemaDiff) -> Self {
        (diff.left_only, diff.right_only)
    }
}

/// Compares SQL schemas statement by statement
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    dialect: SqlDialect,
}

impl Comparator {
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }

    pub fn from_config(config: &CompareConfig) -> Self {
        Self::new(config.dialect)
    }

    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    /// Parse SQL text into statements
    pub fn statements(&self, sql: &str) -> Result<Vec<Statement>> {
        parse_statements(sql, self.dialect)
    }

    /// Canonical key of every statement, in source order
    pub fn canonical_keys(&self, sql: &str) -> Result<Vec<CanonicalKey>> {
        self.statements(sql)?
            .iter()
            .map(Statement::canonical_key)
            .collect()
    }

    /// Whether both inputs hold the same statements in the same order.
    ///
    /// Statement order and duplicates are significant here, unlike in
    /// [`Comparator::get_diff`].
    pub fn compare(&self, first_sql: &str, second_sql: &str) -> Result<bool> {
        let first = self.canonical_keys(first_sql)?;
        let second = self.canonical_keys(second_sql)?;
        debug!(
            first = first.len(),
            second = second.len(),
            "comparing statements"
        );
        Ok(first == second)
    }

    /// Statements present on one side only.
    ///
    /// Both inputs are treated as sets: statement order is ignored and
    /// duplicates collapse. Each side is sorted by its token strings.
    pub fn get_diff(&self, first_sql: &str, second_sql: &str) -> Result<SchemaDiff> {
        let first = self.keyed_statements(first_sql)?;
        let second = self.keyed_statements(second_sql)?;

        let diff = SchemaDiff {
            left_only: only_in(&first, &second),
            right_only: only_in(&second, &first),
        };
        debug!(
            left_only = diff.left_only.len(),
            right_only = diff.right_only.len(),
            "computed schema diff"
        );
        Ok(diff)
    }

    /// Read two SQL files and [`compare`](Comparator::compare) them
    pub fn compare_files(
        &self,
        first: impl AsRef<Path>,
        second: impl AsRef<Path>,
    ) -> Result<bool> {
        let first_sql = read_sql(first.as_ref())?;
        let second_sql = read_sql(second.as_ref())?;
        self.compare(&first_sql, &second_sql)
    }

    fn keyed_statements(&self, sql: &str) -> Result<IndexMap<CanonicalKey, Vec<String>>> {
        let mut keyed = IndexMap::new();
        for statement in self.statements(sql)? {
            let key = statement.canonical_key()?;
            if !keyed.contains_key(&key) {
                keyed.insert(key, statement.str_tokens()?);
            }
        }
        Ok(keyed)
    }
}

fn only_in(
    this: &IndexMap<CanonicalKey, Vec<String>>,
    other: &IndexMap<CanonicalKey, Vec<String>>,
) -> Vec<Vec<String>> {
    let mut statements: Vec<Vec<String>> = this
        .iter()
        .filter(|(key, _)| !other.contains_key(*key))
        .map(|(_, tokens)| tokens.clone())
        .collect();
    statements.sort();
    statements
}

fn read_sql(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
