use crate::ast::*;
use crate::error::{Error, LexError, ParseError, ParseErrorKind, Production};
use crate::lexer::{Token, TokenKind, Tokenizer};
use std::mem;
use tracing::{debug, trace};
use wh_source::Source;

mod expr;
mod pred;
mod stmt;

pub type ParseResult<T> = Result<T, Error>;

/// Deepest nesting the parser accepts. Counts `if`/`while` bodies, parentheses,
/// `not`s and the length of a left-folded operator chain.
pub const MAX_DEPTH: usize = 256;

/// Token kinds that can start a statement.
const STMT_START: &[TokenKind] = &[
    TokenKind::While,
    TokenKind::If,
    TokenKind::Skip,
    TokenKind::Identifier,
];

/// Recursive descent parser with a single token of lookahead.
pub struct Parser<'a> {
    /// Cached token for peeking. Never trivia.
    current_token: Token,
    tokenizer: Tokenizer<'a>,
    /// Number of nested constructs currently open.
    depth: usize,
    /// Source code
    source: &'a Source<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first significant token of `source`.
    pub fn new(source: &'a Source<'a>) -> Result<Self, LexError> {
        let mut tokenizer = Tokenizer::new(source);
        let current_token = next_significant(&mut tokenizer)?;
        Ok(Self {
            current_token,
            tokenizer,
            depth: 0,
            source,
        })
    }

    /// Parses the whole token stream. Stops at the first error.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();
        loop {
            match self.current_token.kind {
                TokenKind::EndOfFile => break,
                TokenKind::While | TokenKind::If | TokenKind::Skip | TokenKind::Identifier => {
                    statements.push(self.parse_stmt()?)
                }
                _ => {
                    let mut expected = STMT_START.to_vec();
                    expected.push(TokenKind::EndOfFile);
                    return Err(self.unexpected(Production::Program, &expected));
                }
            }
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    /// Moves to the next significant token and returns the one that was current.
    fn next(&mut self) -> Result<Token, LexError> {
        let token = next_significant(&mut self.tokenizer)?;
        trace!(token = %token, "advance");
        Ok(mem::replace(&mut self.current_token, token))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    /// Eats the current token if it is of `kind`, otherwise raises an unexpected token error.
    fn expect(&mut self, kind: TokenKind, production: Production) -> ParseResult<Token> {
        if self.at(kind) {
            Ok(self.next()?)
        } else {
            Err(self.unexpected(production, &[kind]))
        }
    }

    /// Runs `f` one nesting level deeper. Fails on the current token if that
    /// goes past [`MAX_DEPTH`].
    fn nested<T>(
        &mut self,
        production: Production,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.check_depth(1, production)?;
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Fails on the current token if `levels` more levels would go past [`MAX_DEPTH`].
    fn check_depth(&self, levels: usize, production: Production) -> ParseResult<()> {
        if self.depth + levels > MAX_DEPTH {
            return Err(self.error(ParseErrorKind::TooDeep, production, &[]));
        }
        Ok(())
    }

    /// Builds an unexpected token error for the current token.
    fn unexpected(&self, production: Production, expected: &[TokenKind]) -> Error {
        self.error(ParseErrorKind::Unexpected, production, expected)
    }

    fn error(
        &self,
        kind: ParseErrorKind,
        production: Production,
        expected: &[TokenKind],
    ) -> Error {
        ParseError {
            kind,
            production,
            expected: expected.to_vec(),
            found: self.current_token.clone(),
            location: self.source.location(self.current_token.span.start),
        }
        .into()
    }
}

/// Pulls tokens until one that is not trivia shows up.
fn next_significant(tokenizer: &mut Tokenizer<'_>) -> Result<Token, LexError> {
    loop {
        let token = tokenizer.next_token()?;
        if !token.is_trivia() {
            return Ok(token);
        }
    }
}
