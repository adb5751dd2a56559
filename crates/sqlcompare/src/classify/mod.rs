//! Statement classification
//!
//! The statement type only decides which parenthesis groups may be
//! reordered before comparing.

use serde::Serialize;
use tracing::trace;

use crate::lexer::Group;
use crate::token::Leaf;

/// Statement types whose parenthesized member lists are order-insensitive
const ORDER_INSENSITIVE_TYPES: &[&str] = &["CREATE TABLE", "CREATE TYPE"];

/// Leading keywords that need a second keyword to name the statement
const TWO_KEYWORD_PREFIXES: &[&str] = &["CREATE", "ALTER", "DROP"];

/// Type label of a statement, e.g. `CREATE TABLE` or `SELECT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StatementType(String);

impl StatementType {
    pub const UNKNOWN: &'static str = "UNKNOWN";

    /// Classify a statement from the keywords directly under its root group.
    /// Keywords nested in parentheses are not considered.
    pub fn classify(root: &Group) -> Self {
        let statement_type = Self::from_keywords(
            root.direct_leaves()
                .filter(|leaf| leaf.is_keyword())
                .map(Leaf::normalized_text),
        );
        trace!(%statement_type, "classified statement");
        statement_type
    }

    pub fn from_keywords<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        let keywords: Vec<&str> = keywords.into_iter().take(2).collect();
        match keywords.as_slice() {
            [] => Self::unknown(),
            [first, ..] if TWO_KEYWORD_PREFIXES.contains(first) => Self(keywords.join(" ")),
            [first, ..] => Self((*first).to_string()),
        }
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// Whether the immediate parenthesis groups of this statement can be reordered
    pub fn is_order_insensitive(&self) -> bool {
        ORDER_INSENSITIVE_TYPES.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for StatementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StatementType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StatementType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::SqlDialect;
    use crate::lexer::parse_statements;

    fn statement_type(sql: &str) -> StatementType {
        parse_statements(sql, SqlDialect::PostgreSQL).unwrap()[0]
            .statement_type()
            .clone()
    }

    #[test]
    fn test_single_keyword_statements() {
        assert_eq!(statement_type("SELECT id FROM foo"), "SELECT");
        assert_eq!(statement_type("INSERT INTO foo (id) VALUES (1)"), "INSERT");
        assert_eq!(statement_type("UPDATE foo SET id = 1"), "UPDATE");
        assert_eq!(statement_type("DELETE FROM foo WHERE id = 1"), "DELETE");
    }

    #[test]
    fn test_two_keyword_statements() {
        assert_eq!(statement_type("CREATE TABLE foo (id INT)"), "CREATE TABLE");
        assert_eq!(
            statement_type("CREATE TYPE palette AS ENUM ('RED', 'GREEN', 'BLUE')"),
            "CREATE TYPE"
        );
        assert_eq!(
            statement_type(
                "CREATE FUNCTION foo() RETURNS trigger LANGUAGE plpgsql AS $$BEGIN SELECT 1; END;$$;"
            ),
            "CREATE FUNCTION"
        );
        assert_eq!(
            statement_type(
                "CREATE SEQUENCE foo.bar START WITH 1 INCREMENT BY 1 NO MINVALUE NO MAXVALUE CACHE 1;"
            ),
            "CREATE SEQUENCE"
        );
        assert_eq!(statement_type("CREATE INDEX foo_idx ON foo (id)"), "CREATE INDEX");
        assert_eq!(
            statement_type("ALTER TABLE ONLY foo ADD CONSTRAINT foo_pkey PRIMARY KEY (id1, id2);"),
            "ALTER TABLE"
        );
        assert_eq!(statement_type("DROP TABLE foo"), "DROP TABLE");
        assert_eq!(statement_type("DROP INDEX foo_idx"), "DROP INDEX");
    }

    #[test]
    fn test_lowercase_keywords_are_normalized() {
        assert_eq!(statement_type("create table foo (id int)"), "CREATE TABLE");
    }

    #[test]
    fn test_lone_prefix_keyword() {
        assert_eq!(StatementType::from_keywords(["DROP"]), "DROP");
    }

    #[test]
    fn test_no_keywords_is_unknown() {
        let unknown = StatementType::from_keywords(std::iter::empty());
        assert!(unknown.is_unknown());
        assert_eq!(unknown.to_string(), "UNKNOWN");
        assert!(!unknown.is_order_insensitive());
        assert!(statement_type("foo (a, b)").is_unknown());
    }

    #[test]
    fn test_keywords_inside_parentheses_are_ignored() {
        assert!(statement_type("(SELECT 1)").is_unknown());
    }

    #[test]
    fn test_order_insensitive_types() {
        assert!(StatementType::from_keywords(["CREATE", "TABLE"]).is_order_insensitive());
        assert!(StatementType::from_keywords(["CREATE", "TYPE"]).is_order_insensitive());
        assert!(!StatementType::from_keywords(["CREATE", "INDEX"]).is_order_insensitive());
        assert!(!StatementType::from_keywords(["ALTER", "TABLE"]).is_order_insensitive());
    }
}
