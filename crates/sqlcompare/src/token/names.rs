//! Keywords used as names
//!
//! `sqlparser` flags several hundred non-reserved words as keywords (`ID`,
//! `NAME`, `STATUS`, ...). When such a word sits where a name is expected it
//! is an identifier and keeps its source text.

use sqlparser::keywords::{Keyword, RESERVED_FOR_COLUMN_ALIAS, RESERVED_FOR_TABLE_ALIAS};
use sqlparser::tokenizer::Token;

use super::{Leaf, LeafKind};

/// Keywords that are never read as names
const ALWAYS_KEYWORDS: &[Keyword] = &[
    Keyword::ADD,
    Keyword::ALL,
    Keyword::ALTER,
    Keyword::AND,
    Keyword::ANY,
    Keyword::ARRAY,
    Keyword::AS,
    Keyword::ASC,
    Keyword::BOTH,
    Keyword::CASE,
    Keyword::CAST,
    Keyword::CHECK,
    Keyword::COLLATE,
    Keyword::COLUMN,
    Keyword::CONCURRENTLY,
    Keyword::CONSTRAINT,
    Keyword::CREATE,
    Keyword::CURRENT_DATE,
    Keyword::CURRENT_TIME,
    Keyword::CURRENT_TIMESTAMP,
    Keyword::CURRENT_USER,
    Keyword::DEFAULT,
    Keyword::DEFERRABLE,
    Keyword::DELETE,
    Keyword::DESC,
    Keyword::DISTINCT,
    Keyword::DO,
    Keyword::DROP,
    Keyword::ELSE,
    Keyword::END,
    Keyword::EXCEPT,
    Keyword::EXISTS,
    Keyword::FALSE,
    Keyword::FOR,
    Keyword::FOREIGN,
    Keyword::FROM,
    Keyword::GRANT,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::IF,
    Keyword::IN,
    Keyword::INITIALLY,
    Keyword::INSERT,
    Keyword::INTERSECT,
    Keyword::INTO,
    Keyword::JOIN,
    Keyword::KEY,
    Keyword::LEADING,
    Keyword::LIKE,
    Keyword::LIMIT,
    Keyword::NOT,
    Keyword::NULL,
    Keyword::OFFSET,
    Keyword::ON,
    Keyword::ONLY,
    Keyword::OR,
    Keyword::ORDER,
    Keyword::PRIMARY,
    Keyword::REFERENCES,
    Keyword::RETURNING,
    Keyword::SELECT,
    Keyword::SOME,
    Keyword::TABLE,
    Keyword::THEN,
    Keyword::TO,
    Keyword::TRAILING,
    Keyword::TRUE,
    Keyword::TRUNCATE,
    Keyword::UNION,
    Keyword::UNIQUE,
    Keyword::UPDATE,
    Keyword::USER,
    Keyword::USING,
    Keyword::WHEN,
    Keyword::WHERE,
    Keyword::WITH,
];

/// Keywords directly followed by the name of an object
const NAME_INTRODUCERS: &[Keyword] = &[
    Keyword::COLUMN,
    Keyword::CONSTRAINT,
    Keyword::EXISTS,
    Keyword::FROM,
    Keyword::FUNCTION,
    Keyword::INDEX,
    Keyword::INTO,
    Keyword::JOIN,
    Keyword::ON,
    Keyword::ONLY,
    Keyword::REFERENCES,
    Keyword::SCHEMA,
    Keyword::SEQUENCE,
    Keyword::TABLE,
    Keyword::VIEW,
];

fn is_always_keyword(keyword: Keyword) -> bool {
    ALWAYS_KEYWORDS.contains(&keyword)
        || RESERVED_FOR_TABLE_ALIAS.contains(&keyword)
        || RESERVED_FOR_COLUMN_ALIAS.contains(&keyword)
}

/// Convert a whole token stream, demoting keywords found in name position.
///
/// A non-reserved keyword is a name when it is next to a `.`, when it
/// follows `(` or `,`, or when it follows a keyword such as `TABLE`, `ON`
/// or `CREATE TYPE`.
pub fn adapt_tokens(tokens: &[Token]) -> Vec<Leaf> {
    let mut leaves: Vec<Leaf> = tokens.iter().map(Leaf::from_sqlparser).collect();
    let significant: Vec<usize> = (0..tokens.len())
        .filter(|&index| !leaves[index].is_ignorable())
        .collect();

    for (position, &index) in significant.iter().enumerate() {
        let Token::Word(word) = &tokens[index] else {
            continue;
        };
        if !leaves[index].is_keyword() || is_always_keyword(word.keyword) {
            continue;
        }
        if in_name_position(tokens, &leaves, &significant, position) {
            leaves[index] = Leaf::new(word.value.clone(), LeafKind::Other);
        }
    }
    leaves
}

fn in_name_position(
    tokens: &[Token],
    leaves: &[Leaf],
    significant: &[usize],
    position: usize,
) -> bool {
    let before = |n: usize| position.checked_sub(n).map(|p| significant[p]);
    let prev = before(1);
    let next = significant.get(position + 1).copied();

    let token_is = |index: Option<usize>, expected: Token| {
        index.is_some_and(|i| tokens[i] == expected)
    };
    if token_is(prev, Token::Period) || token_is(next, Token::Period) {
        return true;
    }
    if token_is(prev, Token::LParen) || token_is(prev, Token::Comma) {
        return true;
    }

    let keyword_at = |index: Option<usize>| {
        index.and_then(|i| match &tokens[i] {
            Token::Word(word) if leaves[i].is_keyword() => Some(word.keyword),
            _ => None,
        })
    };
    match keyword_at(prev) {
        // ALTER COLUMN x TYPE bigint names a type, not an object
        Some(Keyword::TYPE) => matches!(
            keyword_at(before(2)),
            Some(Keyword::CREATE | Keyword::ALTER | Keyword::DROP)
        ),
        Some(keyword) => NAME_INTRODUCERS.contains(&keyword),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::PostgreSqlDialect;
    use sqlparser::tokenizer::Tokenizer;

    fn significant_texts(sql: &str) -> Vec<String> {
        let dialect = PostgreSqlDialect {};
        let tokens = Tokenizer::new(&dialect, sql).tokenize().unwrap();
        adapt_tokens(&tokens)
            .into_iter()
            .filter(|leaf| !leaf.is_ignorable())
            .map(|leaf| leaf.normalized_text().to_string())
            .collect()
    }

    #[test]
    fn test_column_names_keep_their_text() {
        assert_eq!(
            significant_texts("create table logs (id int, name text)"),
            vec!["CREATE", "TABLE", "logs", "(", "id", "INT", ",", "name", "TEXT", ")"]
        );
    }

    #[test]
    fn test_qualified_names_keep_their_text() {
        assert_eq!(
            significant_texts("CREATE TYPE public.status AS ENUM ('A')"),
            vec!["CREATE", "TYPE", "public", ".", "status", "AS", "ENUM", "(", "'A'", ")"]
        );
    }

    #[test]
    fn test_name_after_create_type() {
        assert_eq!(
            significant_texts("CREATE TYPE status AS ENUM ('A')")[2],
            "status"
        );
    }

    #[test]
    fn test_type_after_alter_column_stays_a_keyword() {
        assert_eq!(
            significant_texts("ALTER TABLE foo ALTER COLUMN name TYPE text"),
            vec!["ALTER", "TABLE", "foo", "ALTER", "COLUMN", "name", "TYPE", "TEXT"]
        );
    }

    #[test]
    fn test_index_columns_keep_their_text() {
        assert_eq!(
            significant_texts("CREATE INDEX user_status_idx ON users (status)"),
            vec!["CREATE", "INDEX", "user_status_idx", "ON", "users", "(", "status", ")"]
        );
    }

    #[test]
    fn test_reserved_words_stay_keywords() {
        assert_eq!(
            significant_texts("alter table only foo add constraint foo_pkey primary key (id1, id2)"),
            vec![
                "ALTER", "TABLE", "ONLY", "foo", "ADD", "CONSTRAINT", "foo_pkey", "PRIMARY",
                "KEY", "(", "id1", ",", "id2", ")"
            ]
        );
        assert_eq!(
            significant_texts("create table if not exists foo (id int)")[..5],
            ["CREATE", "TABLE", "IF", "NOT", "EXISTS"]
        );
    }
}
