//! Expression parsing.
//!
//! Binary and assignment operators use precedence climbing: each operator
//! has a `(left, right)` binding power pair from [`leo_ir::Precedence`] and
//! the loop in [`Parser::expr_bp`] only consumes operators whose left power
//! reaches the caller's minimum. Prefix operators parse their operand at
//! the prefix power, which lets `**` (bound tighter) into the operand:
//! `-2 ** 2` is `-(2 ** 2)`.
//!
//! ```text
//! expr     = prefix { infix-op expr }
//! prefix   = ( "-" | "!" ) expr@prefix | postfix
//! postfix  = primary { "(" args ")" | "[" expr "]" | "." IDENT }
//! primary  = INT | STRING | "true" | "false" | "nil" | IDENT
//!          | "(" expr ")" | "[" [ expr { "," expr } [ "," ] ] "]"
//! ```

mod operators;

use leo_ir::{AssignOp, Expr, ExprKind, Precedence, TokenKind};
use leo_stack::ensure_sufficient_stack;

use crate::recovery::TokenSet;
use crate::{Expected, Parser, SyntaxError, SyntaxErrorKind};

use operators::{assign_op, binary_op, unary_op};

/// Tokens that can begin an expression.
pub(crate) const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::Int)
    .with(TokenKind::Str)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Nil)
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::Minus)
    .with(TokenKind::Bang);

impl Parser<'_> {
    /// Parse a full expression, assignment included.
    pub(crate) fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.expr_bp(0)
    }

    /// Parse an expression whose operators all bind at least `min_bp`.
    fn expr_bp(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        ensure_sufficient_stack(|| self.expr_bp_inner(min_bp))
    }

    fn expr_bp_inner(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let lead = self.tokens.current();
        let mut left = self.prefix()?;

        loop {
            let kind = self.tokens.current_kind();

            if let Some(op) = assign_op(kind) {
                let (l_bp, r_bp) = AssignOp::binding_power();
                if l_bp < min_bp {
                    break;
                }
                if !left.is_place() {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::InvalidAssignmentTarget,
                        left.span,
                        lead.position,
                    ));
                }
                self.tokens.advance();
                let value = self.expr_bp(r_bp)?;
                let span = left.span.merge(value.span);
                left = Expr::new(
                    ExprKind::Assign {
                        op,
                        target: Box::new(left),
                        value: Box::new(value),
                    },
                    span,
                );
                continue;
            }

            let Some(op) = binary_op(kind) else {
                break;
            };
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break;
            }
            self.tokens.advance();
            let right = self.expr_bp(r_bp)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Unary operators, or a postfix chain.
    fn prefix(&mut self) -> Result<Expr, SyntaxError> {
        if let Some(op) = unary_op(self.tokens.current_kind()) {
            let op_token = self.tokens.advance();
            let operand = self.expr_bp(Precedence::prefix_binding_power())?;
            let span = op_token.span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        let primary = self.primary()?;
        self.postfix(primary)
    }

    /// Calls, indexing and field access, applied left to right.
    fn postfix(&mut self, mut expr: Expr) -> Result<Expr, SyntaxError> {
        loop {
            match self.tokens.current_kind() {
                TokenKind::LParen => {
                    self.tokens.advance();
                    let args = self.comma_list(TokenKind::RParen)?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    self.tokens.advance();
                    let index = self.expression()?;
                    self.expect(TokenKind::RBracket)?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Index {
                            target: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                TokenKind::Dot => {
                    self.tokens.advance();
                    let name = self.expect_ident()?;
                    let span = expr.span.merge(name.span);
                    expr = Expr::new(
                        ExprKind::Field {
                            target: Box::new(expr),
                            name,
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Expressions separated by `,` up to `close`, which is consumed. A
    /// trailing comma is allowed.
    fn comma_list(&mut self, close: TokenKind) -> Result<Vec<Expr>, SyntaxError> {
        let mut items = Vec::new();
        while !self.tokens.check(close) {
            items.push(self.expression()?);
            if !self.tokens.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(close)?;
        Ok(items)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.tokens.current();
        let kind = match token.kind {
            TokenKind::Int => {
                let lexeme = self.tokens.lexeme(&token);
                match leo_lexer::int_value(lexeme) {
                    Some(value) => ExprKind::Int(value),
                    None => return Err(self.invalid_literal(&token)),
                }
            }
            TokenKind::Str => {
                let lexeme = self.tokens.lexeme(&token);
                match leo_lexer::string_value(lexeme) {
                    Some(value) => ExprKind::Str(value),
                    None => return Err(self.invalid_literal(&token)),
                }
            }
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::Ident => ExprKind::Ident(self.tokens.lexeme_str(&token).into_owned()),
            TokenKind::LParen => return self.parenthesized(),
            TokenKind::LBracket => {
                self.tokens.advance();
                let items = self.comma_list(TokenKind::RBracket)?;
                let span = self.span_from(token.span);
                return Ok(Expr::new(ExprKind::Array(items), span));
            }
            _ => return Err(self.unexpected(Some(Expected::Expression))),
        };
        self.tokens.advance();
        Ok(Expr::new(kind, token.span))
    }

    /// `( expr )`. No node is created: the inner expression is returned
    /// with its span widened to cover the parentheses.
    fn parenthesized(&mut self) -> Result<Expr, SyntaxError> {
        let open = self.tokens.advance();
        let mut inner = self.expression()?;
        let close = self.expect(TokenKind::RParen)?;
        inner.span = open.span.merge(close.span);
        Ok(inner)
    }

    fn invalid_literal(&self, token: &leo_ir::Token) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::InvalidLiteral {
                lexeme: crate::error::snippet(&self.tokens.lexeme_str(token)),
            },
            token.span,
            token.position,
        )
    }
}
