//! Comprehension-style composition macro for [`Xresult`].
//!
//! This module provides the [`fors!`](crate::fors) macro, which
//! composes several `Xresult` values as though performing sequential
//! dependent binds: if every operand is a RIGHT their unwrapped values
//! are combined, and evaluation stops at the first LEFT encountered.
//!
//! # Syntax
//!
//! ```text
//! fors! {
//!     pattern <= xresult;       // Bind: unwrap a RIGHT, stop on a LEFT
//!     let pattern = expression; // Pure let binding
//!     yield expression          // Final expression (wrapped as RIGHT)
//! }
//! ```
//!
//! A bare final expression (without `yield`) must itself be an
//! `Xresult` and is used verbatim: the collapse-one-level form for
//! composition bodies that are themselves fallible.
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//!
//! # Short-Circuiting
//!
//! Binds expand to [`flat_map_right`](crate::xresult::Xresult::flat_map_right)
//! calls, so operands after the first LEFT are never evaluated:
//!
//! ```rust
//! use xfp::fors;
//! use xfp::xresult::Xresult;
//!
//! fn third() -> Xresult<i32, i32> {
//!     unreachable!("never reached past a LEFT")
//! }
//!
//! let stopped = fors! {
//!     x <= Xresult::<i32, i32>::Right(1);
//!     y <= Xresult::<i32, i32>::Left(2);
//!     z <= third();
//!     yield x + y + z
//! };
//! assert_eq!(stopped, Xresult::Left(2));
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= xresult; rest` into:
//!
//! ```rust,ignore
//! xresult.flat_map_right(move |pattern| { /* expanded rest */ })
//! ```
//!
//! The terminal `yield expression` expands to `Xresult::Right(expression)`.
//! The LEFT types of every bound operand must therefore unify, while
//! the RIGHT types are free to differ.

#![forbid(unsafe_code)]

/// A macro for comprehension-style composition of [`Xresult`] values.
///
/// Composes several results as sequential dependent binds: the first
/// LEFT encountered becomes the outcome and later operands are never
/// evaluated; otherwise the `yield` expression combines the unwrapped
/// RIGHT values.
///
/// # Syntax
///
/// ```text
/// fors! {
///     pattern <= xresult;       // Bind operation (flat_map_right)
///     let pattern = expression; // Pure let binding
///     yield expression          // Final expression (wrapped as RIGHT)
/// }
/// ```
///
/// # Examples
///
/// ## Composing successes
///
/// ```rust
/// use xfp::fors;
/// use xfp::xresult::Xresult;
///
/// let composed = fors! {
///     x <= Xresult::<String, i32>::Right(1);
///     y <= Xresult::<String, i32>::Right(2);
///     z <= Xresult::<String, i32>::Right(3);
///     yield x + y + z
/// };
/// assert_eq!(composed, Xresult::Right(6));
/// ```
///
/// ## Stopping at the first LEFT
///
/// ```rust
/// use xfp::fors;
/// use xfp::xresult::Xresult;
///
/// let stopped = fors! {
///     x <= Xresult::<i32, i32>::Right(1);
///     y <= Xresult::<i32, i32>::Left(2);
///     yield x + y
/// };
/// assert_eq!(stopped, Xresult::Left(2));
/// ```
///
/// ## With let bindings
///
/// ```rust
/// use xfp::fors;
/// use xfp::xresult::Xresult;
///
/// let composed = fors! {
///     x <= Xresult::<String, i32>::Right(5);
///     let doubled = x * 2;
///     yield doubled + 1
/// };
/// assert_eq!(composed, Xresult::Right(11));
/// ```
///
/// ## Bare terminal: a body that is itself fallible
///
/// ```rust
/// use xfp::fors;
/// use xfp::xresult::Xresult;
///
/// fn checked_halve(value: i32) -> Xresult<String, i32> {
///     if value % 2 == 0 {
///         Xresult::Right(value / 2)
///     } else {
///         Xresult::Left(format!("{value} is odd"))
///     }
/// }
///
/// let collapsed = fors! {
///     x <= Xresult::<String, i32>::Right(4);
///     y <= Xresult::<String, i32>::Right(2);
///     checked_halve(x + y)
/// };
/// assert_eq!(collapsed, Xresult::Right(3));
/// ```
#[macro_export]
macro_rules! fors {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // yield wraps the composed value as a RIGHT
    (yield $result:expr) => {
        $crate::xresult::Xresult::Right($result)
    };

    // A bare expression is already an Xresult and is used verbatim
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= xresult; rest
    // ==========================================================================

    // Bind with identifier pattern
    ($pattern:ident <= $xresult:expr ; $($rest:tt)+) => {
        $xresult.flat_map_right(move |$pattern| {
            $crate::fors!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $xresult:expr ; $($rest:tt)+) => {
        $xresult.flat_map_right(move |($($pattern)*)| {
            $crate::fors!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $xresult:expr ; $($rest:tt)+) => {
        $xresult.flat_map_right(move |_| {
            $crate::fors!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::fors!($($rest)+)
    }};

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::fors!($($rest)+)
    }};
}
