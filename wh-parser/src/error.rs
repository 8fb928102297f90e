//! Errors produced while tokenizing and parsing.

use crate::lexer::{Token, TokenKind};
use crate::parser::MAX_DEPTH;
use std::fmt;
use wh_source::{Location, Span};

/// The input contains text outside of the lexical rules.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unknown character `{text}` at {location}")]
    UnknownCharacter {
        text: String,
        span: Span,
        location: Location,
    },

    #[error("malformed number `{text}` at {location}, identifiers cannot start with a digit")]
    MalformedNumber {
        text: String,
        span: Span,
        location: Location,
    },
}

impl LexError {
    /// The offending text.
    pub fn text(&self) -> &str {
        match self {
            LexError::UnknownCharacter { text, .. } | LexError::MalformedNumber { text, .. } => {
                text
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownCharacter { span, .. } | LexError::MalformedNumber { span, .. } => {
                span.clone()
            }
        }
    }

    pub fn location(&self) -> Location {
        match self {
            LexError::UnknownCharacter { location, .. }
            | LexError::MalformedNumber { location, .. } => *location,
        }
    }
}

/// The grammar production being parsed when a [`ParseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    Program,
    Statement,
    Assignment,
    If,
    While,
    MathExpr,
    Predicate,
    RelationalPredicate,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Why the parser gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// `found` is not one of the `expected` kinds.
    Unexpected,
    /// `found` would open a construct nested deeper than [`MAX_DEPTH`] levels.
    TooDeep,
}

/// The token stream does not match the grammar.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "in {production}: {}, found {found} at {location}",
    problem(*.kind, .expected)
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub production: Production,
    /// Token kinds that would have been accepted, in grammar order.
    /// Empty for [`ParseErrorKind::TooDeep`].
    pub expected: Vec<TokenKind>,
    pub found: Token,
    pub location: Location,
}

impl ParseError {
    pub fn span(&self) -> Span {
        self.found.span.clone()
    }
}

fn problem(kind: ParseErrorKind, expected: &[TokenKind]) -> String {
    match kind {
        ParseErrorKind::Unexpected => format!("expected {}", one_of(expected)),
        ParseErrorKind::TooDeep => format!("nesting deeper than {} levels", MAX_DEPTH),
    }
}

fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => "nothing".to_string(),
        [kind] => kind.to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(|kind| kind.name()).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}

/// Any failure of the front end. Both kinds abort the whole parse.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Lex(err) => err.span(),
            Error::Parse(err) => err.span(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Error::Lex(err) => err.location(),
            Error::Parse(err) => err.location,
        }
    }
}
