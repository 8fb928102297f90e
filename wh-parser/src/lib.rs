//! Front end for the WHILE language.
//!
//! Source text goes through the [`lexer::Tokenizer`], the [`parser::Parser`]
//! pulls significant tokens from it one at a time and builds an [`ast::Program`].
//! The first lex or parse error aborts the whole parse.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod visitor;

pub use error::{Error, LexError, ParseError, ParseErrorKind, Production};
pub use printer::PrintTree;
pub use wh_source::{Location, Source, Span};

/// Parses `source` into a [`ast::Program`].
pub fn parse(source: &Source) -> Result<ast::Program, Error> {
    parser::Parser::new(source)?.parse_program()
}
