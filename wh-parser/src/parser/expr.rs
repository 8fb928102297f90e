use super::*;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses an arithmetic expression on its own.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_math_expr(Production::MathExpr)
    }

    /// Parses operands joined by `+ - * /`.
    /// All four operators share one precedence level and fold to the left, so
    /// `a + b * c` is `(a + b) * c`.
    /// Errors are reported against the enclosing `production`.
    pub(super) fn parse_math_expr(&mut self, production: Production) -> ParseResult<Expr> {
        let mut lhs = self.parse_operand(production)?;

        let mut folds = 0;
        while let Some(op) = MathOp::from_kind(self.current_token.kind) {
            folds += 1;
            self.check_depth(folds, production)?;
            self.next()?;
            let rhs = self.parse_operand(production)?;

            lhs = Expr::BinaryMath {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            }
        }

        Ok(lhs)
    }

    /* Expressions.Literals */
    /// Parses a numeral or an identifier.
    fn parse_operand(&mut self, production: Production) -> ParseResult<Expr> {
        match self.current_token.kind {
            TokenKind::Identifier | TokenKind::Number => Ok(Expr::Literal(self.next()?.lexeme)),
            _ => Err(self.unexpected(
                production,
                &[TokenKind::Identifier, TokenKind::Number],
            )),
        }
    }
}
