//! On-demand tokenizer for WHILE source code.

use crate::error::LexError;
use logos::Logos;
use std::fmt;
use wh_source::{Source, Span};

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[regex("[0-9]+")]
    // a digit run glued to an identifier is rejected as a whole
    #[regex("[0-9]+[a-zA-Z_][a-zA-Z0-9_]*", |_| false)]
    Number,

    // keywords
    #[token("skip")]
    Skip,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("endif")]
    Endif,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("endwhile")]
    Endwhile,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,

    // operators
    // - assignment
    #[token(":=")]
    Assign,
    // - relational
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token("<=")]
    Lte,
    #[token(">")]
    Gt,
    #[token(">=")]
    Gte,
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mult,
    #[token("/")]
    Div,

    // punctuation
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // trivia, never handed to the parser
    #[regex(r"[ \t\r\f]+")]
    Whitespace,
    #[regex(r"\r?\n")]
    EndOfLine,

    #[error]
    Unknown,

    /// Only generated by [`Tokenizer::next_token`] when the lexer is exhausted.
    EndOfFile,
}

impl TokenKind {
    /// Name used when reporting this kind in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Skip => "SKIP",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Endif => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Endwhile => "ENDWHILE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::Lte => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::Gte => "GTE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::EndOfLine => "END_OF_LINE",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfFile => "END_OF_FILE",
        }
    }

    /// Returns `true` for whitespace and line breaks.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::EndOfLine)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexeme together with its kind and position in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "{}", self.kind),
            TokenKind::EndOfLine => write!(f, "{} `\\n`", self.kind),
            _ => write!(f, "{} `{}`", self.kind, self.lexeme),
        }
    }
}

/// Pulls [`Token`]s out of a [`Source`] one at a time.
///
/// Whitespace and line breaks are returned as tokens too, it is up to the
/// caller to skip them.
pub struct Tokenizer<'a> {
    lexer: logos::Lexer<'a, TokenKind>,
    source: &'a Source<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        Self {
            lexer: TokenKind::lexer(source.content),
            source,
        }
    }

    /// Returns the next token, or an [`TokenKind::EndOfFile`] token once the
    /// input is exhausted (repeatedly, if called again).
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let kind = match self.lexer.next() {
            Some(kind) => kind,
            None => {
                let end = self.source.content.len();
                return Ok(Token::new(TokenKind::EndOfFile, "", end..end));
            }
        };

        let span = self.lexer.span();
        if kind == TokenKind::Unknown {
            return Err(self.lex_error(span));
        }
        Ok(Token::new(kind, self.lexer.slice(), span))
    }

    /// Returns `true` if anything other than whitespace is left to scan.
    pub fn has_more(&self) -> bool {
        !self
            .lexer
            .remainder()
            .trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0c'))
            .is_empty()
    }

    fn lex_error(&self, span: Span) -> LexError {
        let content = self.source.content;
        let location = self.source.location(span.start);
        let first = content[span.start..].chars().next().unwrap_or_default();

        if first.is_ascii_digit() {
            // only produced by the malformed number rule, which is all ASCII
            LexError::MalformedNumber {
                text: content[span.clone()].to_string(),
                span,
                location,
            }
        } else {
            let end = span.start + first.len_utf8();
            LexError::UnknownCharacter {
                text: first.to_string(),
                span: span.start..end,
                location,
            }
        }
    }
}

/// Tokenizes the whole `source`, dropping trivia.
/// The returned tokens always end with exactly one [`TokenKind::EndOfFile`].
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: &Source) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        if token.is_trivia() {
            continue;
        }
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
