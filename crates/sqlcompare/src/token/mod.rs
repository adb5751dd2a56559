//! Leaf tokens - adapts `sqlparser` tokens into this crate's leaves

mod names;

use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, Whitespace};

pub use names::adapt_tokens;

/// Classification of a leaf token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Whitespace,
    Comment,
    Keyword,
    /// A punctuation comma
    Separator,
    /// Identifiers, literals, operators and other punctuation
    Other,
}

/// A single, immutable leaf of a statement tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    text: String,
    kind: LeafKind,
}

impl Leaf {
    pub fn new(text: impl Into<String>, kind: LeafKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Convert a single token produced by the `sqlparser` tokenizer.
    ///
    /// Unquoted keywords are upper-cased; every other token keeps the
    /// rendering of its `Display` implementation, so quoted identifiers and
    /// string literals stay case-sensitive. Keywords used as names are only
    /// recognised by [`adapt_tokens`], which sees the neighbouring tokens.
    pub fn from_sqlparser(token: &Token) -> Self {
        match token {
            Token::Whitespace(ws) => {
                let kind = match ws {
                    Whitespace::SingleLineComment { .. } | Whitespace::MultiLineComment(_) => {
                        LeafKind::Comment
                    }
                    _ => LeafKind::Whitespace,
                };
                Self::new(ws.to_string(), kind)
            }
            Token::Word(word)
                if word.quote_style.is_none() && word.keyword != Keyword::NoKeyword =>
            {
                Self::new(word.value.to_uppercase(), LeafKind::Keyword)
            }
            Token::Comma => Self::new(",", LeafKind::Separator),
            other => Self::new(other.to_string(), LeafKind::Other),
        }
    }

    /// Normalized rendering of the token
    pub fn normalized_text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LeafKind {
        self.kind
    }

    /// Whitespace and comments never take part in a comparison
    pub fn is_ignorable(&self) -> bool {
        matches!(self.kind, LeafKind::Whitespace | LeafKind::Comment)
    }

    pub fn is_separator(&self) -> bool {
        self.kind == LeafKind::Separator
    }

    pub fn is_keyword(&self) -> bool {
        self.kind == LeafKind::Keyword
    }
}
