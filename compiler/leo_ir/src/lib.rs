//! Leo intermediate representation shared by the lexer, parser and formatter.
//!
//! # Contents
//!
//! - [`Span`] / [`Position`]: byte ranges and 1-based line/column pairs
//! - [`Token`] / [`TokenKind`] / [`TokenClass`]: lexical tokens
//! - [`LexErrorKind`]: why a token was classified as invalid
//! - [`ast`]: the owned syntax tree produced by `leo_parse`
//!
//! Every type here is plain data. Nothing allocates behind the caller's back
//! and nothing holds global state, so values can move freely across threads.

/// Compile-time assertion that a type has a specific size.
///
/// Guards the hot token types against accidental growth.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{
    Assoc, AssignOp, BinaryOp, Block, Expr, ExprKind, Ident, Precedence, Program, Stmt,
    StmtKind, UnaryOp,
};
pub use span::{Position, Span};
pub use token::{LexErrorKind, Token, TokenClass, TokenKind};
