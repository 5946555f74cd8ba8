//! Grammar productions.
//!
//! Each module extends [`Parser`](crate::Parser) with methods for one part
//! of the grammar:
//!
//! - [`stmt`]: statement lists, statements, blocks, terminators
//! - [`expr`]: expressions (precedence climbing, prefix, postfix, primary)
//!
//! Every recursive entry point runs inside
//! [`leo_stack::ensure_sufficient_stack`], so nesting depth is limited by
//! memory rather than by the thread's stack.

mod expr;
mod stmt;
