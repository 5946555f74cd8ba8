//! On-demand stack growth.
//!
//! The parser and the pretty printer recurse once per nesting level of the
//! input, so `((((…))))` a hundred thousand levels deep would overflow a
//! fixed thread stack. Every recursive entry point runs its body through
//! [`ensure_sufficient_stack`], which switches to a freshly allocated stack
//! segment when the current one runs low.
//!
//! On `wasm32` there is no `stacker` support and the closure runs directly.

/// Grow when less than this much stack remains (128 KiB).
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each new stack segment (2 MiB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes left on the current stack segment, when the platform can tell.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
