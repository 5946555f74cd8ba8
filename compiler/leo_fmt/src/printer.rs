//! Tree walk that renders statements and expressions.
//!
//! Layout rules:
//!
//! - top-level and block statements go one per line at the current indent
//! - simple statements end with `;`
//! - compound statements print their nested statement on the same line,
//!   so `if (c) x;` stays on one line and `if (c) {` opens a block
//! - blocks print `{`, their statements one level deeper, then `}`;
//!   an empty block prints `{}`
//!
//! Parentheses come from [`Precedence`]: a child is wrapped only when the
//! parser would otherwise attach it to a different operator.

use leo_ir::{Assoc, Block, Expr, ExprKind, Ident, Precedence, Program, Stmt, StmtKind};
use leo_stack::ensure_sufficient_stack;

use crate::{quote_string, Emitter};

/// Which operand of a binary operator is being printed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Side {
    Left,
    Right,
}

/// Returns `true` if `child` needs parentheses as the `side` operand of an
/// operator at `parent` precedence with associativity `assoc`.
fn needs_parens(child: Precedence, parent: Precedence, assoc: Assoc, side: Side) -> bool {
    if child != parent {
        return child < parent;
    }
    matches!(
        (assoc, side),
        (Assoc::Left, Side::Right) | (Assoc::Right, Side::Left)
    )
}

pub struct Printer<'e, E: Emitter> {
    out: &'e mut E,
    indent: usize,
}

impl<'e, E: Emitter> Printer<'e, E> {
    pub fn new(out: &'e mut E) -> Self {
        Printer { out, indent: 0 }
    }

    pub fn program(&mut self, program: &Program) {
        for stmt in &program.stmts {
            self.line(stmt);
        }
    }

    /// One statement on its own line at the current indent.
    fn line(&mut self, stmt: &Stmt) {
        self.out.emit_indent(self.indent);
        self.stmt(stmt);
        self.out.emit_newline();
    }

    /// A statement without leading indent or trailing newline.
    pub fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.stmt_inner(stmt));
    }

    fn stmt_inner(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Let { name, init } => {
                self.out.emit("let ");
                self.ident(name);
                if let Some(init) = init {
                    self.out.emit(" = ");
                    self.expr(init);
                }
            }
            StmtKind::Const { name, value } => {
                self.out.emit("const ");
                self.ident(name);
                self.out.emit(" = ");
                self.expr(value);
            }
            StmtKind::Fn { name, params, body } => {
                self.out.emit("fn ");
                self.ident(name);
                self.out.emit("(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.out.emit(", ");
                    }
                    self.ident(param);
                }
                self.out.emit(") ");
                self.block(body);
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.emit("if (");
                self.expr(cond);
                self.out.emit(") ");
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.emit(" else ");
                    self.stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.out.emit("while (");
                self.expr(cond);
                self.out.emit(") ");
                self.stmt(body);
            }
            StmtKind::For {
                binding,
                iterable,
                body,
            } => {
                self.out.emit("for (");
                self.ident(binding);
                self.out.emit(" in ");
                self.expr(iterable);
                self.out.emit(") ");
                self.stmt(body);
            }
            StmtKind::Return(value) => {
                self.out.emit("return");
                if let Some(value) = value {
                    self.out.emit_space();
                    self.expr(value);
                }
            }
            StmtKind::Break => self.out.emit("break"),
            StmtKind::Continue => self.out.emit("continue"),
            StmtKind::Block(block) => self.block(block),
            StmtKind::Expr(expr) => self.expr(expr),
        }
        if stmt.is_simple() {
            self.out.emit(";");
        }
    }

    fn block(&mut self, block: &Block) {
        if block.stmts.is_empty() {
            self.out.emit("{}");
            return;
        }
        self.out.emit("{");
        self.out.emit_newline();
        self.indent += 1;
        for stmt in &block.stmts {
            self.line(stmt);
        }
        self.indent -= 1;
        self.out.emit_indent(self.indent);
        self.out.emit("}");
    }

    fn ident(&mut self, ident: &Ident) {
        self.out.emit(&ident.name);
    }

    // ─── Expressions ───

    pub fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Int(value) => self.out.emit(&value.to_string()),
            ExprKind::Str(value) => self.out.emit(&quote_string(value)),
            ExprKind::Bool(true) => self.out.emit("true"),
            ExprKind::Bool(false) => self.out.emit("false"),
            ExprKind::Nil => self.out.emit("nil"),
            ExprKind::Ident(name) => self.out.emit(name),
            ExprKind::Array(items) => {
                self.out.emit("[");
                self.expr_list(items);
                self.out.emit("]");
            }
            ExprKind::Unary { op, operand } => {
                self.out.emit(op.as_symbol());
                self.operand(operand, operand.precedence() < Precedence::PREFIX);
            }
            ExprKind::Binary { op, left, right } => {
                let (prec, assoc) = (op.precedence(), op.assoc());
                self.operand(left, needs_parens(left.precedence(), prec, assoc, Side::Left));
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
                self.operand(
                    right,
                    needs_parens(right.precedence(), prec, assoc, Side::Right),
                );
            }
            ExprKind::Assign { op, target, value } => {
                let prec = Precedence::ASSIGN;
                self.operand(
                    target,
                    needs_parens(target.precedence(), prec, Assoc::Right, Side::Left),
                );
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
                self.operand(
                    value,
                    needs_parens(value.precedence(), prec, Assoc::Right, Side::Right),
                );
            }
            ExprKind::Call { callee, args } => {
                self.postfix_target(callee);
                self.out.emit("(");
                self.expr_list(args);
                self.out.emit(")");
            }
            ExprKind::Index { target, index } => {
                self.postfix_target(target);
                self.out.emit("[");
                self.expr(index);
                self.out.emit("]");
            }
            ExprKind::Field { target, name } => {
                self.postfix_target(target);
                self.out.emit(".");
                self.ident(name);
            }
        }
    }

    fn operand(&mut self, expr: &Expr, parens: bool) {
        if parens {
            self.out.emit("(");
            self.expr(expr);
            self.out.emit(")");
        } else {
            self.expr(expr);
        }
    }

    fn postfix_target(&mut self, target: &Expr) {
        self.operand(target, target.precedence() < Precedence::POSTFIX);
    }

    fn expr_list(&mut self, items: &[Expr]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            self.expr(item);
        }
    }
}
