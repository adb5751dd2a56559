//! Normalization of order-insensitive parenthesis groups

use tracing::trace;

use crate::error::{Error, Result};
use crate::lexer::Group;
use crate::token::Leaf;

/// Leaves of an order-insensitive group split on separators
#[derive(Debug)]
struct SplitMembers<'a> {
    open: &'a Leaf,
    members: Vec<Vec<&'a Leaf>>,
    separators: Vec<&'a Leaf>,
    close: &'a Leaf,
}

/// Flatten a parenthesis group and sort its comma-separated members.
///
/// `(b INT, a TEXT)` becomes `( a TEXT , b INT )`. Members are compared on
/// the concatenation of their leaf texts; the sort is stable. Every comma of
/// the subtree is a split point, including commas of nested parentheses.
pub fn normalize_unordered(group: &Group) -> Result<Vec<&Leaf>> {
    let leaves: Vec<&Leaf> = group
        .flatten()
        .into_iter()
        .filter(|leaf| !leaf.is_ignorable())
        .collect();

    let [open, inner @ .., close] = leaves.as_slice() else {
        return Ok(leaves);
    };
    if inner.is_empty() {
        return Ok(vec![*open, *close]);
    }

    let mut split = split_members(*open, inner, *close)?;
    split.members.sort_by_cached_key(|member| member_text(member));
    trace!(members = split.members.len(), "sorted order-insensitive group");
    Ok(join_members(split))
}

fn split_members<'a>(
    open: &'a Leaf,
    inner: &[&'a Leaf],
    close: &'a Leaf,
) -> Result<SplitMembers<'a>> {
    let mut members = Vec::new();
    let mut separators = Vec::new();
    let mut current = Vec::new();

    for &leaf in inner {
        if leaf.is_separator() {
            separators.push(leaf);
            if !current.is_empty() {
                members.push(std::mem::take(&mut current));
            }
        } else {
            current.push(leaf);
        }
    }
    if !current.is_empty() {
        members.push(current);
    }

    // (id INT, name TEXT) has one separator for two members
    if separators.len() + 1 != members.len() {
        return Err(Error::UnbalancedSeparators {
            separators: separators.len(),
            groups: members.len(),
            members: members.iter().map(|member| member_text(member)).collect(),
        });
    }

    Ok(SplitMembers {
        open,
        members,
        separators,
        close,
    })
}

fn join_members<'a>(split: SplitMembers<'a>) -> Vec<&'a Leaf> {
    let mut leaves = vec![split.open];
    let mut separators = split.separators.into_iter();
    for (index, member) in split.members.into_iter().enumerate() {
        if index > 0 {
            leaves.extend(separators.next());
        }
        leaves.extend(member);
    }
    leaves.push(split.close);
    leaves
}

fn member_text(member: &[&Leaf]) -> String {
    member.iter().map(|leaf| leaf.normalized_text()).collect()
}
