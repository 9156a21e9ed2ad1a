//! Stack safety for deep recursion.
//!
//! The parser, the evaluator, and `Value`'s clone, comparison and printing
//! recurse once per level of list nesting, and the evaluator additionally
//! recurses once per user-function call. A deeply nested S-expression or a
//! long call chain would otherwise overflow the native stack before the
//! interpreter's own depth limit is reached.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: passthrough.
//!
//! ```text
//! fn eval(&mut self, value: &Value) -> LispResult<Value> {
//!     ensure_sufficient_stack(|| self.eval_inner(value))
//! }
//! ```

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining native stack in bytes, when the platform can report it.
///
/// Logged by the evaluator when the call-depth limit trips; `None` on WASM.
#[inline]
pub fn remaining_stack() -> Option<usize> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::remaining_stack()
    }
    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}
