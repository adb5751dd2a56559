//! Tokenizing and grouping of raw SQL text
//!
//! Tokenizing is delegated to the `sqlparser` tokenizer. Its flat token
//! stream is grouped here into statements and nested parenthesis groups;
//! nothing downstream looks at `sqlparser` types.

mod tree;

use sqlparser::tokenizer::{Token, Tokenizer};
use tracing::debug;

use crate::dialect::SqlDialect;
use crate::error::Result;
use crate::token::{adapt_tokens, Leaf};

pub use tree::{Group, GroupKind, Node, Statement};

/// Split SQL text into statement trees.
///
/// A top-level `;` closes a statement and stays its last leaf. Statements
/// made only of whitespace and comments are dropped.
pub fn parse_statements(sql: &str, dialect: SqlDialect) -> Result<Vec<Statement>> {
    let tokenizer_dialect = dialect.tokenizer_dialect();
    let tokens = Tokenizer::new(tokenizer_dialect.as_ref(), sql).tokenize()?;

    let mut builder = TreeBuilder::new();
    for (token, leaf) in tokens.iter().zip(adapt_tokens(&tokens)) {
        builder.push(token, leaf);
    }
    let statements = builder.finish();

    debug!(
        %dialect,
        tokens = tokens.len(),
        statements = statements.len(),
        "parsed SQL"
    );
    Ok(statements)
}

/// Groups a flat token stream; `stack[0]` is the current statement.
struct TreeBuilder {
    stack: Vec<Vec<Node>>,
    statements: Vec<Statement>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Vec::new()],
            statements: Vec::new(),
        }
    }

    fn push(&mut self, token: &Token, leaf: Leaf) {
        let leaf = Node::Leaf(leaf);
        match token {
            Token::LParen => self.stack.push(vec![leaf]),
            Token::RParen if self.stack.len() > 1 => {
                let mut children = self.stack.pop().unwrap_or_default();
                children.push(leaf);
                self.top()
                    .push(Node::Group(Group::new(GroupKind::Parenthesis, children)));
            }
            Token::SemiColon if self.stack.len() == 1 => {
                self.top().push(leaf);
                self.end_statement();
            }
            _ => self.top().push(leaf),
        }
    }

    fn top(&mut self) -> &mut Vec<Node> {
        if self.stack.is_empty() {
            self.stack.push(Vec::new());
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn end_statement(&mut self) {
        // Unclosed parentheses are kept as plain leaves
        while self.stack.len() > 1 {
            let children = self.stack.pop().unwrap_or_default();
            self.top().extend(children);
        }
        let children = std::mem::take(self.top());
        let root = Group::new(GroupKind::Statement, children);
        if root.flatten().iter().any(|leaf| !leaf.is_ignorable()) {
            self.statements.push(Statement::new(root));
        }
    }

    fn finish(mut self) -> Vec<Statement> {
        self.end_statement();
        self.statements
    }
}
