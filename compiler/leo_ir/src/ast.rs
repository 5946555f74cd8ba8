//! Abstract syntax tree for Leo.
//!
//! The tree is owned: every node owns its children through `Box`/`Vec`, so
//! there are no cycles and no shared nodes. Each node carries the span of
//! the source it was parsed from, starting at its leading token.
//!
//! Deep trees are safe to drop and walk: `Stmt` and `Expr` drop their
//! children from an explicit worklist, and [`Program::erase_spans`] grows the
//! stack as it recurses.
//!
//! Parentheses do not produce nodes. Two programs that differ only in
//! formatting or redundant parentheses have equal trees once their spans are
//! erased with [`Program::erase_spans`].

mod operators;

pub use operators::{Assoc, AssignOp, BinaryOp, Precedence, UnaryOp};

use leo_stack::ensure_sufficient_stack;

use crate::Span;

/// An identifier occurrence in a declaration position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// A parsed input unit: zero or more statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    /// The empty-program result for input made only of trivia.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// Replace every span in the tree with [`Span::DUMMY`].
    pub fn erase_spans(&mut self) {
        self.span = Span::DUMMY;
        for stmt in &mut self.stmts {
            stmt.erase_spans();
        }
    }
}

/// `{ stmt* }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    fn erase_spans(&mut self) {
        self.span = Span::DUMMY;
        for stmt in &mut self.stmts {
            stmt.erase_spans();
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let name [= init]`
    Let { name: Ident, init: Option<Expr> },
    /// `const name = value`
    Const { name: Ident, value: Expr },
    /// `fn name(params) { body }`
    Fn {
        name: Ident,
        params: Vec<Ident>,
        body: Block,
    },
    /// `if (cond) then_branch [else else_branch]`
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`
    While { cond: Expr, body: Box<Stmt> },
    /// `for (binding in iterable) body`
    For {
        binding: Ident,
        iterable: Expr,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    Block(Block),
    Expr(Expr),
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Returns `true` for statements that end with their own `;`
    /// terminator. Compound statements end with a nested statement or a
    /// block instead.
    pub fn is_simple(&self) -> bool {
        matches!(
            self.kind,
            StmtKind::Let { .. }
                | StmtKind::Const { .. }
                | StmtKind::Return(_)
                | StmtKind::Break
                | StmtKind::Continue
                | StmtKind::Expr(_)
        )
    }

    pub fn erase_spans(&mut self) {
        ensure_sufficient_stack(|| self.erase_spans_inner());
    }

    fn erase_spans_inner(&mut self) {
        self.span = Span::DUMMY;
        match &mut self.kind {
            StmtKind::Let { name, init } => {
                name.span = Span::DUMMY;
                if let Some(init) = init {
                    init.erase_spans();
                }
            }
            StmtKind::Const { name, value } => {
                name.span = Span::DUMMY;
                value.erase_spans();
            }
            StmtKind::Fn { name, params, body } => {
                name.span = Span::DUMMY;
                for param in params {
                    param.span = Span::DUMMY;
                }
                body.erase_spans();
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                cond.erase_spans();
                then_branch.erase_spans();
                if let Some(else_branch) = else_branch {
                    else_branch.erase_spans();
                }
            }
            StmtKind::While { cond, body } => {
                cond.erase_spans();
                body.erase_spans();
            }
            StmtKind::For {
                binding,
                iterable,
                body,
            } => {
                binding.span = Span::DUMMY;
                iterable.erase_spans();
                body.erase_spans();
            }
            StmtKind::Return(value) => {
                if let Some(value) = value {
                    value.erase_spans();
                }
            }
            StmtKind::Break | StmtKind::Continue => {}
            StmtKind::Block(block) => block.erase_spans(),
            StmtKind::Expr(expr) => expr.erase_spans(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Int(u64),
    /// String literal with escapes already resolved.
    Str(String),
    Bool(bool),
    Nil,
    Ident(String),
    Array(Vec<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    Field {
        target: Box<Expr>,
        name: Ident,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Precedence level of the expression's outermost operator.
    pub fn precedence(&self) -> Precedence {
        match &self.kind {
            ExprKind::Assign { .. } => Precedence::ASSIGN,
            ExprKind::Binary { op, .. } => op.precedence(),
            ExprKind::Unary { .. } => Precedence::PREFIX,
            ExprKind::Call { .. } | ExprKind::Index { .. } | ExprKind::Field { .. } => {
                Precedence::POSTFIX
            }
            ExprKind::Int(_)
            | ExprKind::Str(_)
            | ExprKind::Bool(_)
            | ExprKind::Nil
            | ExprKind::Ident(_)
            | ExprKind::Array(_) => Precedence::ATOM,
        }
    }

    /// Returns `true` if the expression can appear on the left of `=`.
    pub fn is_place(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Ident(_) | ExprKind::Index { .. } | ExprKind::Field { .. }
        )
    }

    pub fn erase_spans(&mut self) {
        ensure_sufficient_stack(|| self.erase_spans_inner());
    }

    fn erase_spans_inner(&mut self) {
        self.span = Span::DUMMY;
        match &mut self.kind {
            ExprKind::Int(_)
            | ExprKind::Str(_)
            | ExprKind::Bool(_)
            | ExprKind::Nil
            | ExprKind::Ident(_) => {}
            ExprKind::Array(items) => {
                for item in items {
                    item.erase_spans();
                }
            }
            ExprKind::Unary { operand, .. } => operand.erase_spans(),
            ExprKind::Binary { left, right, .. } => {
                left.erase_spans();
                right.erase_spans();
            }
            ExprKind::Assign { target, value, .. } => {
                target.erase_spans();
                value.erase_spans();
            }
            ExprKind::Call { callee, args } => {
                callee.erase_spans();
                for arg in args {
                    arg.erase_spans();
                }
            }
            ExprKind::Index { target, index } => {
                target.erase_spans();
                index.erase_spans();
            }
            ExprKind::Field { target, name } => {
                target.erase_spans();
                name.span = Span::DUMMY;
            }
        }
    }
}

// ─── Drop ───

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_stmts(&mut self.kind, &mut pending);
        while let Some(mut stmt) = pending.pop() {
            detach_stmts(&mut stmt.kind, &mut pending);
        }
    }
}

/// Move the nested statements of `kind` onto `out`, leaving `kind` a leaf.
fn detach_stmts(kind: &mut StmtKind, out: &mut Vec<Stmt>) {
    if matches!(
        kind,
        StmtKind::Let { .. }
            | StmtKind::Const { .. }
            | StmtKind::Return(_)
            | StmtKind::Break
            | StmtKind::Continue
            | StmtKind::Expr(_)
    ) {
        return;
    }
    match std::mem::replace(kind, StmtKind::Break) {
        StmtKind::Fn { body, .. } | StmtKind::Block(body) => out.extend(body.stmts),
        StmtKind::If {
            then_branch,
            else_branch,
            ..
        } => {
            out.push(*then_branch);
            if let Some(else_branch) = else_branch {
                out.push(*else_branch);
            }
        }
        StmtKind::While { body, .. } | StmtKind::For { body, .. } => out.push(*body),
        _ => {}
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_exprs(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_exprs(&mut expr.kind, &mut pending);
        }
    }
}

/// Move the operands of `kind` onto `out`, leaving `kind` a leaf.
fn detach_exprs(kind: &mut ExprKind, out: &mut Vec<Expr>) {
    if matches!(
        kind,
        ExprKind::Int(_) | ExprKind::Str(_) | ExprKind::Bool(_) | ExprKind::Nil | ExprKind::Ident(_)
    ) {
        return;
    }
    match std::mem::replace(kind, ExprKind::Nil) {
        ExprKind::Array(items) => out.extend(items),
        ExprKind::Unary { operand, .. } => out.push(*operand),
        ExprKind::Binary { left, right, .. } => {
            out.push(*left);
            out.push(*right);
        }
        ExprKind::Assign { target, value, .. } => {
            out.push(*target);
            out.push(*value);
        }
        ExprKind::Call { callee, args } => {
            out.push(*callee);
            out.extend(args);
        }
        ExprKind::Index { target, index } => {
            out.push(*target);
            out.push(*index);
        }
        ExprKind::Field { target, .. } => out.push(*target),
        _ => {}
    }
}

#[cfg(test)]
mod tests;
