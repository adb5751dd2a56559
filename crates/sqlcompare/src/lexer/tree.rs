//! Statement trees built from tokenizer output

use crate::canonical::{self, CanonicalKey};
use crate::classify::StatementType;
use crate::error::Result;
use crate::token::Leaf;

/// Child of a group: either a leaf token or a nested group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Group(Group),
}

/// What produced a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Root group of a statement
    Statement,
    /// `(` ... `)`, including both parentheses as its first and last leaves
    Parenthesis,
}

/// Composite node owning its children in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    children: Vec<Node>,
}

impl Group {
    pub fn new(kind: GroupKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn is_parenthesis(&self) -> bool {
        self.kind == GroupKind::Parenthesis
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Leaves that are direct children of this group
    pub fn direct_leaves(&self) -> impl Iterator<Item = &Leaf> {
        self.children.iter().filter_map(|child| match child {
            Node::Leaf(leaf) => Some(leaf),
            Node::Group(_) => None,
        })
    }

    /// Every leaf of the subtree, depth-first in source order
    pub fn flatten(&self) -> Vec<&Leaf> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        for child in &self.children {
            match child {
                Node::Leaf(leaf) => out.push(leaf),
                Node::Group(group) => group.collect_leaves(out),
            }
        }
    }
}

/// One parsed SQL statement and its derived type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    root: Group,
    statement_type: StatementType,
}

impl Statement {
    pub fn new(root: Group) -> Self {
        let statement_type = StatementType::classify(&root);
        Self {
            root,
            statement_type,
        }
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn statement_type(&self) -> &StatementType {
        &self.statement_type
    }

    /// Non-ignorable leaves with order-insensitive groups sorted
    pub fn canonical_leaves(&self) -> Result<Vec<&Leaf>> {
        canonical::canonical_leaves(&self.root, &self.statement_type)
    }

    /// Key used to decide whether two statements are equivalent
    pub fn canonical_key(&self) -> Result<CanonicalKey> {
        Ok(CanonicalKey::from_leaves(self.canonical_leaves()?))
    }

    /// Reconstructed statement as a list of token strings
    pub fn str_tokens(&self) -> Result<Vec<String>> {
        Ok(self
            .canonical_leaves()?
            .into_iter()
            .map(Leaf::normalized_text)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}
