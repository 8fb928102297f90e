//! Indented tree rendering of the AST.
//!
//! Every node is printed on its own line as its label followed by its payload
//! (assigned identifier, literal text or operator), children one level deeper:
//!
//! ```text
//! RootNode
//!   SequenceNode
//!     AssignmentNode x
//!       LiteralNode 1
//! ```

use crate::ast::{Expr, Pred, Program, Stmt};
use crate::visitor::{walk_expr, walk_pred, walk_program, walk_stmt, Visitor};
use std::fmt;

/// Number of spaces per nesting level.
const INDENT: usize = 2;

pub struct TreePrinter {
    depth: usize,
    output: String,
}

impl TreePrinter {
    /// Creates a printer whose first line is indented by `depth` levels.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            output: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, label: &str, payload: Option<&str>) {
        self.output.push_str(&" ".repeat(self.depth * INDENT));
        self.output.push_str(label);
        if let Some(payload) = payload {
            self.output.push(' ');
            self.output.push_str(payload);
        }
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl<'ast> Visitor<'ast> for TreePrinter {
    fn visit_program(&mut self, program: &'ast Program) {
        self.line(program.label(), None);
        self.nested(|printer| walk_program(printer, program));
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        let payload = match stmt {
            Stmt::Assignment(assignment) => Some(assignment.ident.as_str()),
            Stmt::If { .. } | Stmt::Skip | Stmt::Sequence(_) | Stmt::While { .. } => None,
        };
        self.line(stmt.label(), payload);
        self.nested(|printer| walk_stmt(printer, stmt));
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        let payload = match expr {
            Expr::Literal(text) => text.as_str(),
            Expr::BinaryMath { op, .. } => op.symbol(),
        };
        self.line(expr.label(), Some(payload));
        self.nested(|printer| walk_expr(printer, expr));
    }

    fn visit_pred(&mut self, pred: &'ast Pred) {
        let payload = match pred {
            Pred::BoolLiteral(true) => Some("true"),
            Pred::BoolLiteral(false) => Some("false"),
            Pred::Not(_) => None,
            Pred::BinaryBool { op, .. } => Some(op.symbol()),
            Pred::Relational { op, .. } => Some(op.symbol()),
        };
        self.line(pred.label(), payload);
        self.nested(|printer| walk_pred(printer, pred));
    }
}

/// Renders a node and everything below it.
pub trait PrintTree {
    /// Renders the subtree with its root indented by `depth` levels.
    fn print_tree(&self, depth: usize) -> String;
}

macro_rules! impl_print_tree {
    ($($node: ty => $visit: ident),* $(,)?) => {
        $(
            impl PrintTree for $node {
                fn print_tree(&self, depth: usize) -> String {
                    let mut printer = TreePrinter::new(depth);
                    printer.$visit(self);
                    printer.finish()
                }
            }

            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.print_tree(0))
                }
            }
        )*
    };
}

impl_print_tree! {
    Program => visit_program,
    Stmt => visit_stmt,
    Expr => visit_expr,
    Pred => visit_pred,
}
