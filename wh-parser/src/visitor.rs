//! Visitor pattern for AST nodes.

use crate::ast::{Expr, Pred, Program, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
    fn visit_pred(&mut self, pred: &'ast Pred) {
        walk_pred(self, pred);
    }
}

/// Iteratively visit all statements in a `&[Stmt]`.
macro_rules! visit_stmt_list {
    ($visitor: expr, $body: expr) => {
        for stmt in $body {
            Visitor::visit_stmt($visitor, stmt);
        }
    };
}

pub fn walk_program<'ast>(visitor: &mut impl Visitor<'ast>, program: &'ast Program) {
    visit_stmt_list!(visitor, &program.statements);
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Assignment(assignment) => visitor.visit_expr(&assignment.value),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_pred(condition);
            visitor.visit_stmt(then_branch);
            visitor.visit_stmt(else_branch);
        }
        Stmt::Skip => {}
        Stmt::Sequence(seq) => visit_stmt_list!(visitor, seq.statements()),
        Stmt::While { condition, body } => {
            visitor.visit_pred(condition);
            visitor.visit_stmt(body);
        }
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Literal(_) => {}
        Expr::BinaryMath { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
    }
}

pub fn walk_pred<'ast>(visitor: &mut impl Visitor<'ast>, pred: &'ast Pred) {
    match pred {
        Pred::BoolLiteral(_) => {}
        Pred::Not(arg) => visitor.visit_pred(arg),
        Pred::BinaryBool { lhs, op: _, rhs } => {
            visitor.visit_pred(lhs);
            visitor.visit_pred(rhs);
        }
        Pred::Relational { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
    }
}
