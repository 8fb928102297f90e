use super::*;

impl<'a> Parser<'a> {
    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        match self.current_token.kind {
            TokenKind::While => self.nested(Production::While, Self::parse_while_stmt),
            TokenKind::If => self.nested(Production::If, Self::parse_if_stmt),
            TokenKind::Skip => {
                self.next()?;
                Ok(Stmt::Skip)
            }
            TokenKind::Identifier => self.parse_sequence_stmt(),
            _ => Err(self.unexpected(Production::Statement, STMT_START)),
        }
    }

    /// Parses one or more assignments into a single [`Stmt::Sequence`].
    /// The run ends at the first token that is not an identifier.
    fn parse_sequence_stmt(&mut self) -> ParseResult<Stmt> {
        let first = self.parse_assignment()?;
        let mut rest = Vec::new();
        while self.at(TokenKind::Identifier) {
            rest.push(self.parse_assignment()?);
        }
        Ok(Stmt::Sequence(Sequence::new(first, rest)))
    }

    fn parse_assignment(&mut self) -> ParseResult<Stmt> {
        let ident = self
            .expect(TokenKind::Identifier, Production::Assignment)?
            .lexeme;
        self.expect(TokenKind::Assign, Production::Assignment)?;
        let value = self.parse_math_expr(Production::Assignment)?;
        self.expect(TokenKind::Semicolon, Production::Assignment)?;
        Ok(Stmt::Assignment(Assignment { ident, value }))
    }

    fn parse_if_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::If, Production::If)?;
        let condition = self.parse_pred()?;
        self.expect(TokenKind::Then, Production::If)?;
        let then_branch = self.parse_stmt()?;
        self.expect(TokenKind::Else, Production::If)?;
        let else_branch = self.parse_stmt()?;
        self.expect(TokenKind::Endif, Production::If)?;

        Ok(Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    fn parse_while_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::While, Production::While)?;
        let condition = self.parse_pred()?;
        self.expect(TokenKind::Do, Production::While)?;
        let body = self.parse_stmt()?;
        self.expect(TokenKind::Endwhile, Production::While)?;

        Ok(Stmt::While {
            condition,
            body: Box::new(body),
        })
    }
}
