//! Statement parsing.
//!
//! ```text
//! let      = "let" IDENT [ "=" expr ] term
//! const    = "const" IDENT "=" expr term
//! fn       = "fn" IDENT "(" [ IDENT { "," IDENT } [ "," ] ] ")" block
//! if       = "if" "(" expr ")" stmt [ "else" stmt ]
//! while    = "while" "(" expr ")" stmt
//! for      = "for" "(" IDENT "in" expr ")" stmt
//! return   = "return" [ expr ] term
//! block    = "{" { stmt } "}"
//! term     = ";" | before "}" or EOF
//! ```

use leo_ir::{Block, Span, Stmt, StmtKind, TokenKind};
use leo_stack::ensure_sufficient_stack;

use crate::grammar::expr::EXPR_START;
use crate::recovery::{synchronize, RecoveryMode};
use crate::{Expected, Parser, SyntaxError};

impl Parser<'_> {
    /// Statements up to EOF, or up to the closing `}` when `in_block`.
    ///
    /// Stray `;` between statements are skipped. In synchronize mode a
    /// failed statement is recorded, dropped, and parsing resumes at the
    /// next boundary.
    pub(crate) fn statement_list(&mut self, in_block: bool) -> Result<Vec<Stmt>, SyntaxError> {
        let mut stmts = Vec::new();
        loop {
            while self.tokens.eat(TokenKind::Semicolon) {}
            let kind = self.tokens.current_kind();
            if kind == TokenKind::Eof || (in_block && kind == TokenKind::RBrace) {
                return Ok(stmts);
            }

            let start = self.tokens.consumed();
            match self.statement() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => match self.recovery {
                    RecoveryMode::Bail => return Err(error),
                    RecoveryMode::Synchronize => {
                        tracing::debug!(%error, "statement failed, synchronizing");
                        self.errors.push(error);
                        synchronize(&mut self.tokens, start);
                    }
                },
            }
        }
    }

    pub(crate) fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.tokens.current().span;
        match self.tokens.current_kind() {
            TokenKind::Let => self.let_stmt(start),
            TokenKind::Const => self.const_stmt(start),
            TokenKind::Fn => self.fn_stmt(start),
            TokenKind::If => self.if_stmt(start),
            TokenKind::While => self.while_stmt(start),
            TokenKind::For => self.for_stmt(start),
            TokenKind::Return => self.return_stmt(start),
            TokenKind::Break => self.keyword_stmt(start, StmtKind::Break),
            TokenKind::Continue => self.keyword_stmt(start, StmtKind::Continue),
            TokenKind::LBrace => {
                let block = self.block()?;
                let span = block.span;
                Ok(Stmt::new(StmtKind::Block(block), span))
            }
            kind if EXPR_START.contains(kind) => {
                let expr = self.expression()?;
                let span = expr.span;
                self.terminator()?;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
            _ => Err(self.unexpected(Some(Expected::Statement))),
        }
    }

    /// `;`, or nothing when the statement is followed by `}` or EOF.
    fn terminator(&mut self) -> Result<(), SyntaxError> {
        match self.tokens.current_kind() {
            TokenKind::Semicolon => {
                self.tokens.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected(Some(Expected::Token(TokenKind::Semicolon)))),
        }
    }

    fn let_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // let
        let name = self.expect_ident()?;
        let init = if self.tokens.eat(TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        let span = self.span_from(start);
        self.terminator()?;
        Ok(Stmt::new(StmtKind::Let { name, init }, span))
    }

    fn const_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // const
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.expression()?;
        let span = self.span_from(start);
        self.terminator()?;
        Ok(Stmt::new(StmtKind::Const { name, value }, span))
    }

    fn fn_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // fn
        let name = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.tokens.check(TokenKind::RParen) {
            params.push(self.expect_ident()?);
            if !self.tokens.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        let body = self.block()?;
        let span = self.span_from(start);
        Ok(Stmt::new(StmtKind::Fn { name, params, body }, span))
    }

    /// `"(" expr ")"` around a condition.
    fn condition(&mut self) -> Result<leo_ir::Expr, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let cond = self.expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(cond)
    }

    fn if_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // if
        let cond = self.condition()?;
        let then_branch = Box::new(self.statement()?);
        // `else` binds to the nearest unmatched `if`: the innermost
        // `if_stmt` call sees it first.
        let else_branch = if self.tokens.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        let span = self.span_from(start);
        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    fn while_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // while
        let cond = self.condition()?;
        let body = Box::new(self.statement()?);
        let span = self.span_from(start);
        Ok(Stmt::new(StmtKind::While { cond, body }, span))
    }

    fn for_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // for
        self.expect(TokenKind::LParen)?;
        let binding = self.expect_ident()?;
        self.expect(TokenKind::In)?;
        let iterable = self.expression()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.statement()?);
        let span = self.span_from(start);
        Ok(Stmt::new(
            StmtKind::For {
                binding,
                iterable,
                body,
            },
            span,
        ))
    }

    fn return_stmt(&mut self, start: Span) -> Result<Stmt, SyntaxError> {
        self.tokens.advance(); // return
        let value = match self.tokens.current_kind() {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(self.expression()?),
        };
        let span = self.span_from(start);
        self.terminator()?;
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// `break` / `continue`.
    fn keyword_stmt(&mut self, start: Span, kind: StmtKind) -> Result<Stmt, SyntaxError> {
        self.tokens.advance();
        self.terminator()?;
        Ok(Stmt::new(kind, start))
    }

    pub(crate) fn block(&mut self) -> Result<Block, SyntaxError> {
        let open = self.expect(TokenKind::LBrace)?;
        let stmts = self.statement_list(true)?;
        let close = self.expect(TokenKind::RBrace)?;
        Ok(Block {
            stmts,
            span: open.span.merge(close.span),
        })
    }
}
