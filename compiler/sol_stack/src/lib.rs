//! Stack growth for deep recursion.
//!
//! Both the parser and the evaluator are recursive descent over the AST,
//! so a long `a + b + c + ...` chain or a deeply nested block can exhaust
//! the native stack. Recursive entry points wrap their bodies in
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when the remaining stack runs low.
//!
//! On `wasm32` the closure is called directly.

/// Grow the stack when less than this remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
