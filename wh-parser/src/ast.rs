use crate::lexer::TokenKind;

/// The root of a parsed program: its top level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn label(&self) -> &'static str {
        "RootNode"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// An assignment (e.g. `x := y + 1;`).
    Assignment(Assignment),
    If {
        condition: Pred,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },
    Skip,
    /// A run of consecutive assignments.
    Sequence(Sequence),
    While {
        condition: Pred,
        body: Box<Stmt>,
    },
}

impl Stmt {
    pub fn label(&self) -> &'static str {
        match self {
            Stmt::Assignment(_) => "AssignmentNode",
            Stmt::If { .. } => "IfNode",
            Stmt::Skip => "SkipNode",
            Stmt::Sequence(_) => "SequenceNode",
            Stmt::While { .. } => "WhileNode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub ident: String,
    pub value: Expr,
}

/// A non-empty, ordered list of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    statements: Vec<Stmt>,
}

impl Sequence {
    /// Creates a sequence starting with `first`, followed by `rest`.
    pub fn new(first: Stmt, rest: impl IntoIterator<Item = Stmt>) -> Self {
        let mut statements = vec![first];
        statements.extend(rest);
        Self { statements }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Always `false`, a sequence holds at least one statement.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeral or an identifier (e.g. `42`, `foo`).
    Literal(String),
    /// A binary arithmetic expression (e.g. `1 + 1`).
    BinaryMath {
        lhs: Box<Expr>,
        op: MathOp,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn label(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "LiteralNode",
            Expr::BinaryMath { .. } => "BinaryMathNode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pred {
    BoolLiteral(bool),
    Not(Box<Pred>),
    /// `and` / `or` combination of two predicates.
    BinaryBool {
        lhs: Box<Pred>,
        op: BoolOp,
        rhs: Box<Pred>,
    },
    /// A comparison of two expressions (e.g. `x < 10`).
    Relational { lhs: Expr, op: RelOp, rhs: Expr },
}

impl Pred {
    pub fn label(&self) -> &'static str {
        match self {
            Pred::BoolLiteral(_) => "BoolLiteralNode",
            Pred::Not(_) => "NotNode",
            Pred::BinaryBool { .. } => "BinaryBoolNode",
            Pred::Relational { .. } => "RelationalNode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl MathOp {
    /// Returns the operator for `kind` or `None` if `kind` is not an arithmetic operator.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(MathOp::Add),
            TokenKind::Minus => Some(MathOp::Sub),
            TokenKind::Mult => Some(MathOp::Mul),
            TokenKind::Div => Some(MathOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::And => Some(BoolOp::And),
            TokenKind::Or => Some(BoolOp::Or),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BoolOp::And => "and",
            BoolOp::Or => "or",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl RelOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq => Some(RelOp::Eq),
            TokenKind::Lt => Some(RelOp::Lt),
            TokenKind::Lte => Some(RelOp::Lte),
            TokenKind::Gt => Some(RelOp::Gt),
            TokenKind::Gte => Some(RelOp::Gte),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Lt => "<",
            RelOp::Lte => "<=",
            RelOp::Gt => ">",
            RelOp::Gte => ">=",
        }
    }
}
