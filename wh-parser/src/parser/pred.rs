use super::*;

/// Token kinds that can start a predicate operand.
const PRED_START: &[TokenKind] = &[
    TokenKind::True,
    TokenKind::False,
    TokenKind::Not,
    TokenKind::LParen,
    TokenKind::Identifier,
    TokenKind::Number,
];

const REL_OPS: &[TokenKind] = &[
    TokenKind::Eq,
    TokenKind::Lt,
    TokenKind::Lte,
    TokenKind::Gt,
    TokenKind::Gte,
];

impl<'a> Parser<'a> {
    /// Parses predicate operands joined by `and` / `or`, folding to the left.
    pub fn parse_pred(&mut self) -> ParseResult<Pred> {
        let mut lhs = self.parse_pred_operand()?;

        let mut folds = 0;
        while let Some(op) = BoolOp::from_kind(self.current_token.kind) {
            folds += 1;
            self.check_depth(folds, Production::Predicate)?;
            self.next()?;
            let rhs = self.parse_pred_operand()?;

            lhs = Pred::BinaryBool {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            }
        }

        Ok(lhs)
    }

    /// Parses a literal, a negation, a parenthesized predicate or a comparison.
    /// `not` applies to the operand right after it only.
    fn parse_pred_operand(&mut self) -> ParseResult<Pred> {
        match self.current_token.kind {
            TokenKind::True => {
                self.next()?;
                Ok(Pred::BoolLiteral(true))
            }
            TokenKind::False => {
                self.next()?;
                Ok(Pred::BoolLiteral(false))
            }
            TokenKind::Not => {
                let mut nots = 0;
                while self.at(TokenKind::Not) {
                    nots += 1;
                    self.check_depth(nots, Production::Predicate)?;
                    self.next()?;
                }

                self.depth += nots;
                let operand = self.parse_pred_operand();
                self.depth -= nots;

                Ok((0..nots).fold(operand?, |pred, _| Pred::Not(Box::new(pred))))
            }
            TokenKind::LParen => self.nested(Production::Predicate, |parser| {
                parser.next()?;
                let pred = parser.parse_pred()?;
                parser.expect(TokenKind::RParen, Production::Predicate)?;
                Ok(pred)
            }),
            TokenKind::Identifier | TokenKind::Number => self.parse_relational_pred(),
            _ => Err(self.unexpected(Production::Predicate, PRED_START)),
        }
    }

    fn parse_relational_pred(&mut self) -> ParseResult<Pred> {
        let lhs = self.parse_math_expr(Production::RelationalPredicate)?;
        let op = match RelOp::from_kind(self.current_token.kind) {
            Some(op) => op,
            None => return Err(self.unexpected(Production::RelationalPredicate, REL_OPS)),
        };
        self.next()?;
        let rhs = self.parse_math_expr(Production::RelationalPredicate)?;

        Ok(Pred::Relational { lhs, op, rhs })
    }
}
