//! Stack growth for deeply nested evaluation.
//!
//! Evaluation recurses once per nested expression and once per function
//! call, and FWJS has no recursion limit. `ensure_sufficient_stack` wraps
//! each step so the native stack grows on demand instead of overflowing.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Space that must remain before `f` runs (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each newly allocated segment (2MB).
    const SEGMENT: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// wasm32 manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
