//! Canonical, order-normalized form of statement trees

mod unordered;

use serde::Serialize;

use crate::classify::StatementType;
use crate::error::Result;
use crate::lexer::{Group, Node};
use crate::token::Leaf;

pub use unordered::normalize_unordered;

/// A child of a group after canonicalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalNode<'a> {
    Leaf(&'a Leaf),
    /// Group whose children keep their source order
    Ordered(Vec<CanonicalNode<'a>>),
    /// Flattened group whose members were sorted
    Unordered(Vec<&'a Leaf>),
}

impl<'a> CanonicalNode<'a> {
    fn collect_leaves(&self, out: &mut Vec<&'a Leaf>) {
        match self {
            CanonicalNode::Leaf(leaf) => out.push(*leaf),
            CanonicalNode::Ordered(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            CanonicalNode::Unordered(leaves) => out.extend(leaves.iter().copied()),
        }
    }
}

/// Canonicalize the children of `group`.
///
/// `statement_type` is the type of the enclosing statement; a parenthesis
/// group inside an order-insensitive statement is normalized as a whole,
/// any other group is walked recursively with the same statement type.
pub fn canonicalize<'a>(
    group: &'a Group,
    statement_type: &StatementType,
) -> Result<Vec<CanonicalNode<'a>>> {
    group
        .children()
        .iter()
        .map(|child| match child {
            Node::Leaf(leaf) => Ok(CanonicalNode::Leaf(leaf)),
            Node::Group(inner)
                if inner.is_parenthesis() && statement_type.is_order_insensitive() =>
            {
                normalize_unordered(inner).map(CanonicalNode::Unordered)
            }
            Node::Group(inner) => canonicalize(inner, statement_type).map(CanonicalNode::Ordered),
        })
        .collect()
}

/// Non-ignorable leaves of `group` in canonical order
pub fn canonical_leaves<'a>(
    group: &'a Group,
    statement_type: &StatementType,
) -> Result<Vec<&'a Leaf>> {
    let mut leaves = Vec::new();
    for node in canonicalize(group, statement_type)? {
        node.collect_leaves(&mut leaves);
    }
    leaves.retain(|leaf| !leaf.is_ignorable());
    Ok(leaves)
}

/// Equality basis of a statement: its canonical leaf texts, in order.
///
/// Keeping the texts apart rather than concatenating them means `ab c` and
/// `a bc` never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(Vec<String>);

impl CanonicalKey {
    pub fn from_leaves<'a>(leaves: impl IntoIterator<Item = &'a Leaf>) -> Self {
        Self(
            leaves
                .into_iter()
                .filter(|leaf| !leaf.is_ignorable())
                .map(|leaf| leaf.normalized_text().to_string())
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
