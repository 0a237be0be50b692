//! Core result container: a biased union of two logical types.
//!
//! This module provides [`Xresult<Y, X>`], an immutable value holding
//! either a `Y` on the LEFT arm or an `X` on the RIGHT arm. By
//! convention the RIGHT arm is the "main" channel and the LEFT arm is
//! the "alternate" (error) channel: the unsuffixed combinators (`map`,
//! `flat_map`, `filter`, ...) operate on RIGHT values and pass LEFT
//! values through unchanged, while the `_left` variants provide the
//! symmetric behavior.

use std::fmt;

#[cfg(feature = "collection")]
use crate::collection::Xlist;

// =============================================================================
// Branch Tag
// =============================================================================

/// The tag discriminating the two arms of an [`Xresult`].
///
/// # Examples
///
/// ```rust
/// use xfp::xresult::XrBranch;
///
/// assert_eq!(XrBranch::Left.invert(), XrBranch::Right);
/// assert_eq!(XrBranch::Right.invert(), XrBranch::Left);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XrBranch {
    /// The alternate arm, conventionally holding errors or fallbacks.
    Left,
    /// The main arm, conventionally holding the happy path.
    Right,
}

impl XrBranch {
    /// Returns the opposite branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::XrBranch;
    ///
    /// assert_eq!(XrBranch::Left.invert(), XrBranch::Right);
    /// ```
    #[inline]
    pub const fn invert(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for XrBranch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("LEFT"),
            Self::Right => formatter.write_str("RIGHT"),
        }
    }
}

// =============================================================================
// Result Container
// =============================================================================

/// An immutable value that is either a `Left(Y)` or a `Right(X)`.
///
/// `Xresult` encapsulates a union of two logical types in a single
/// container. Semantically it helps managing impure outcomes, such as:
///
/// - optional values (`Xresult<(), X>`, see [`Xopt`](crate::xresult::Xopt))
/// - fallible values (`Xresult<E, X>` with `E: Error`, see
///   [`Xtry`](crate::xresult::Xtry))
///
/// Using it for a plain encapsulated union type is fine as well.
///
/// # Bias
///
/// Combinators are RIGHT-biased: `map`, `flat_map`, `foreach`,
/// `recover`, `recover_with` and `filter` are exact aliases for their
/// `_right` counterparts and leave LEFT values untouched. Every
/// combinator also exists in a `_left` variant for full symmetry.
///
/// # Examples
///
/// ```rust
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
/// let chained = checked_halve(12).flat_map(checked_halve);
/// assert_eq!(chained, Xresult::Right(3));
///
/// let stopped = checked_halve(6).flat_map(checked_halve);
/// assert_eq!(stopped, Xresult::Left("3 is odd".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Xresult<Y, X> {
    /// The alternate arm, conventionally holding errors or fallbacks.
    Left(Y),
    /// The main arm, conventionally holding the happy path.
    Right(X),
}

impl<Y, X> Xresult<Y, X> {
    // =========================================================================
    // Branch Inspection
    // =========================================================================

    /// Returns the branch this result currently sits on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::{XrBranch, Xresult};
    ///
    /// let result: Xresult<i32, String> = Xresult::Left(42);
    /// assert_eq!(result.branch(), XrBranch::Left);
    /// ```
    #[inline]
    pub const fn branch(&self) -> XrBranch {
        match self {
            Self::Left(_) => XrBranch::Left,
            Self::Right(_) => XrBranch::Right,
        }
    }

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let result: Xresult<i32, String> = Xresult::Left(42);
    /// assert!(result.is_left());
    /// assert!(!result.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let result: Xresult<i32, String> = Xresult::Right("hello".to_string());
    /// assert!(result.is_right());
    /// assert!(!result.is_left());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<Y>`, consuming the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let result: Xresult<i32, String> = Xresult::Left(42);
    /// assert_eq!(result.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<Y> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<X>`, consuming the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let result: Xresult<i32, String> = Xresult::Right("hello".to_string());
    /// assert_eq!(result.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<X> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&Y> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&X> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Alias for [`map_right`](Self::map_right).
    #[inline]
    pub fn map<T, F>(self, function: F) -> Xresult<Y, T>
    where
        F: FnOnce(X) -> T,
    {
        self.map_right(function)
    }

    /// Applies a function to the left value, passing a RIGHT through.
    ///
    /// Is mainly used to chain effect-free operations on the alternate
    /// channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let result: Xresult<i32, String> = Xresult::Left(42);
    /// assert_eq!(result.map_left(|value| value * 2), Xresult::Left(84));
    ///
    /// let result: Xresult<i32, String> = Xresult::Right("hello".to_string());
    /// assert_eq!(
    ///     result.map_left(|value: i32| value * 2),
    ///     Xresult::Right("hello".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn map_left<U, F>(self, function: F) -> Xresult<U, X>
    where
        F: FnOnce(Y) -> U,
    {
        match self {
            Self::Left(value) => Xresult::Left(function(value)),
            Self::Right(value) => Xresult::Right(value),
        }
    }

    /// Applies a function to the right value, passing a LEFT through.
    ///
    /// Exceptions are not caught here: a panic raised by `function`
    /// propagates to the caller. Only
    /// [`from_unsafe`](Self::from_unsafe) converts failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::{Xopt, Xresult};
    ///
    /// let result = Xopt::from_optional(Some(3))
    ///     .map_right(|value| value + 3)
    ///     .map_right(|value| value * value)
    ///     .map_right(|value| value - 4);
    /// assert_eq!(result, Xresult::Right(32));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Xresult<Y, T>
    where
        F: FnOnce(X) -> T,
    {
        match self {
            Self::Left(value) => Xresult::Left(value),
            Self::Right(value) => Xresult::Right(function(value)),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Alias for [`flat_map_right`](Self::flat_map_right).
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Xresult<Y, T>
    where
        F: FnOnce(X) -> Xresult<Y, T>,
    {
        self.flat_map_right(function)
    }

    /// Returns the result of [`map_left`](Self::map_left) then
    /// [`flatten_left`](Self::flatten_left).
    ///
    /// `function` is only invoked on a LEFT; its output (itself an
    /// `Xresult`, possibly on either branch) becomes the new state.
    #[inline]
    pub fn flat_map_left<U, F>(self, function: F) -> Xresult<U, X>
    where
        F: FnOnce(Y) -> Xresult<U, X>,
    {
        self.map_left(function).flatten_left()
    }

    /// Returns the result of [`map_right`](Self::map_right) then
    /// [`flatten_right`](Self::flatten_right).
    ///
    /// This is how sequencing of fallible computations composes:
    /// `function` is only invoked on a RIGHT, and its output (itself an
    /// `Xresult`, possibly on either branch) becomes the new state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// fn invert(value: f64) -> Xresult<String, f64> {
    ///     if value == 0.0 {
    ///         Xresult::Left("division by zero".to_string())
    ///     } else {
    ///         Xresult::Right(1.0 / value)
    ///     }
    /// }
    ///
    /// let result = Xresult::<String, f64>::Right(4.0).flat_map_right(invert);
    /// assert_eq!(result, Xresult::Right(0.25));
    ///
    /// let stopped = Xresult::<String, f64>::Right(0.0)
    ///     .flat_map_right(invert)
    ///     .flat_map_right(invert);
    /// assert_eq!(stopped, Xresult::Left("division by zero".to_string()));
    /// ```
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Xresult<Y, T>
    where
        F: FnOnce(X) -> Xresult<Y, T>,
    {
        self.map_right(function).flatten_right()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns `default` on a LEFT, otherwise `function(value)`.
    ///
    /// `default` is a precomputed value, not a thunk: it is evaluated
    /// eagerly at the call site, while `function` only runs on a RIGHT.
    ///
    /// Exists as homogenisation with `Xlist::fold`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let present: Xresult<String, i32> = Xresult::Right(3);
    /// assert_eq!(present.fold(0, |value| value * 10), 30);
    ///
    /// let absent: Xresult<String, i32> = Xresult::Left("nope".to_string());
    /// assert_eq!(absent.fold(0, |value| value * 10), 0);
    /// ```
    #[inline]
    pub fn fold<T, F>(self, default: T, function: F) -> T
    where
        F: FnOnce(X) -> T,
    {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => function(value),
        }
    }

    /// Shorthand for `self.fold(default, |value| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let present: Xresult<String, i32> = Xresult::Right(3);
    /// assert_eq!(present.get_or_else(0), 3);
    ///
    /// let absent: Xresult<String, i32> = Xresult::Left("nope".to_string());
    /// assert_eq!(absent.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: X) -> X {
        self.fold(default, |value| value)
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Alias for [`foreach_right`](Self::foreach_right).
    #[inline]
    pub fn foreach<F>(&self, statement: F)
    where
        F: FnOnce(&X),
    {
        self.foreach_right(statement);
    }

    /// Runs `statement` for its side effect if this is a LEFT.
    #[inline]
    pub fn foreach_left<F>(&self, statement: F)
    where
        F: FnOnce(&Y),
    {
        if let Self::Left(value) = self {
            statement(value);
        }
    }

    /// Runs `statement` for its side effect if this is a RIGHT.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let mut seen = Vec::new();
    /// Xresult::<String, i32>::Right(42).foreach_right(|value| seen.push(*value));
    /// Xresult::<String, i32>::Left("ignored".to_string())
    ///     .foreach_right(|value| seen.push(*value));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn foreach_right<F>(&self, statement: F)
    where
        F: FnOnce(&X),
    {
        if let Self::Right(value) = self {
            statement(value);
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Alias for [`recover_with_right`](Self::recover_with_right).
    #[inline]
    pub fn recover_with<U, F>(self, function: F) -> Xresult<U, X>
    where
        F: FnOnce(Y) -> Xresult<U, X>,
    {
        self.recover_with_right(function)
    }

    /// Attempts to replace a RIGHT by another, possibly failing,
    /// computation; passes a LEFT through.
    ///
    /// Operationally identical to
    /// [`flat_map_right`](Self::flat_map_right).
    #[inline]
    pub fn recover_with_left<T, F>(self, function: F) -> Xresult<Y, T>
    where
        F: FnOnce(X) -> Xresult<Y, T>,
    {
        match self {
            Self::Left(value) => Xresult::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Attempts to replace a LEFT by another, possibly failing,
    /// computation; passes a RIGHT through.
    ///
    /// Operationally identical to
    /// [`flat_map_left`](Self::flat_map_left). Semantically: fall back
    /// from a failure with an operation that may itself succeed or fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let failed: Xresult<String, f64> = Xresult::Left("negative".to_string());
    /// let recovered = failed.recover_with_right(|_| Xresult::<String, f64>::Right(0.0));
    /// assert_eq!(recovered, Xresult::Right(0.0));
    ///
    /// let intact: Xresult<String, f64> = Xresult::Right(2.0);
    /// let untouched = intact.recover_with_right(|_| Xresult::<String, f64>::Right(0.0));
    /// assert_eq!(untouched, Xresult::Right(2.0));
    /// ```
    #[inline]
    pub fn recover_with_right<U, F>(self, function: F) -> Xresult<U, X>
    where
        F: FnOnce(Y) -> Xresult<U, X>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Xresult::Right(value),
        }
    }

    /// Alias for [`recover_right`](Self::recover_right).
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Y) -> X,
    {
        self.recover_right(function)
    }

    /// Converts a RIGHT into a LEFT using an effect-free
    /// transformation; passes a LEFT through.
    ///
    /// This is a fallback that always ends up on the alternate channel.
    #[inline]
    pub fn recover_left<F>(self, function: F) -> Self
    where
        F: FnOnce(X) -> Y,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => Self::Left(function(value)),
        }
    }

    /// Converts a LEFT into a RIGHT using an effect-free
    /// transformation; passes a RIGHT through.
    ///
    /// Unlike [`recover_with_right`](Self::recover_with_right), the
    /// fallback cannot itself fail or redirect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let failed: Xresult<String, f64> = Xresult::Left("negative".to_string());
    /// assert_eq!(failed.recover_right(|_| 0.0), Xresult::Right(0.0));
    ///
    /// let intact: Xresult<String, f64> = Xresult::Right(2.0);
    /// assert_eq!(intact.recover_right(|_| 0.0), Xresult::Right(2.0));
    /// ```
    #[inline]
    pub fn recover_right<F>(self, function: F) -> Self
    where
        F: FnOnce(Y) -> X,
    {
        match self {
            Self::Left(value) => Self::Right(function(value)),
            Self::Right(value) => Self::Right(value),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Alias for [`filter_right`](Self::filter_right).
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&X) -> bool,
        Y: From<XresultError<X>>,
    {
        self.filter_right(predicate)
    }

    /// Switches to the RIGHT branch if the predicate rejects a LEFT.
    ///
    /// The replacement RIGHT value is an [`XresultError`] capturing the
    /// pre-filter branch and value, converted into `X` through its
    /// `From` implementation. A RIGHT, or a LEFT accepted by the
    /// predicate, passes through unchanged.
    #[inline]
    pub fn filter_left<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&Y) -> bool,
        X: From<XresultError<Y>>,
    {
        match self {
            Self::Left(value) => {
                if predicate(&value) {
                    Self::Left(value)
                } else {
                    Self::Right(X::from(XresultError::new(XrBranch::Left, value)))
                }
            }
            passthrough @ Self::Right(_) => passthrough,
        }
    }

    /// Switches to the LEFT branch if the predicate rejects a RIGHT.
    ///
    /// The replacement LEFT value is an [`XresultError`] capturing the
    /// pre-filter branch and value, converted into `Y` through its
    /// `From` implementation. A LEFT, or a RIGHT accepted by the
    /// predicate, passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::{XrBranch, Xresult, XresultError};
    ///
    /// let kept: Xresult<XresultError<i32>, i32> =
    ///     Xresult::Right(4).filter_right(|value| *value < 10);
    /// assert_eq!(kept, Xresult::Right(4));
    ///
    /// let rejected: Xresult<XresultError<i32>, i32> =
    ///     Xresult::Right(4).filter_right(|value| *value > 10);
    /// match rejected {
    ///     Xresult::Left(error) => {
    ///         assert_eq!(error.branch(), XrBranch::Right);
    ///         assert_eq!(error.into_value(), 4);
    ///     }
    ///     Xresult::Right(_) => unreachable!(),
    /// }
    /// ```
    #[inline]
    pub fn filter_right<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&X) -> bool,
        Y: From<XresultError<X>>,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(Y::from(XresultError::new(XrBranch::Right, value)))
                }
            }
            passthrough @ Self::Left(_) => passthrough,
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<Y, X> Xresult<Y, Xresult<Y, X>> {
    /// Alias for [`flatten_right`](Self::flatten_right).
    #[inline]
    pub fn flatten(self) -> Xresult<Y, X> {
        self.flatten_right()
    }

    /// Collapses one level of nesting on the RIGHT arm.
    ///
    /// A LEFT is passed through unchanged: flattening is strictly
    /// branch-gated, and only ever unwraps a single level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let nested: Xresult<String, Xresult<String, i32>> =
    ///     Xresult::Right(Xresult::Right(3));
    /// assert_eq!(nested.flatten_right(), Xresult::Right(3));
    ///
    /// let inner_left: Xresult<String, Xresult<String, i32>> =
    ///     Xresult::Right(Xresult::Left("inner".to_string()));
    /// assert_eq!(inner_left.flatten_right(), Xresult::Left("inner".to_string()));
    /// ```
    #[inline]
    pub fn flatten_right(self) -> Xresult<Y, X> {
        match self {
            Self::Left(value) => Xresult::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<Y, X> Xresult<Xresult<Y, X>, X> {
    /// Collapses one level of nesting on the LEFT arm.
    ///
    /// A RIGHT is passed through unchanged.
    #[inline]
    pub fn flatten_left(self) -> Xresult<Y, X> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Xresult::Right(value),
        }
    }
}

// =============================================================================
// Comprehension Composition
// =============================================================================

#[cfg(feature = "collection")]
impl<Y, X> Xresult<Y, X> {
    /// Composes several results, short-circuiting at the first LEFT.
    ///
    /// Iterates `results` in order: the first LEFT encountered is
    /// returned untouched and nothing further is consumed; if every
    /// result is a RIGHT, their values are collected in order into an
    /// [`Xlist`] and handed to `combine`, whose output is wrapped as
    /// RIGHT.
    ///
    /// An empty `results` sequence is defined behavior: `combine`
    /// receives an empty list.
    ///
    /// See also the [`fors!`](crate::fors) macro, which composes
    /// results of heterogeneous RIGHT types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let summed = Xresult::fors(
    ///     [Xresult::<String, i32>::Right(1), Xresult::Right(2)],
    ///     |values| values.fold(0, |total, value| total + value),
    /// );
    /// assert_eq!(summed, Xresult::Right(3));
    ///
    /// let stopped = Xresult::fors(
    ///     [
    ///         Xresult::<String, i32>::Right(1),
    ///         Xresult::Left("second".to_string()),
    ///         Xresult::Right(3),
    ///     ],
    ///     |values| values.fold(0, |total, value| total + value),
    /// );
    /// assert_eq!(stopped, Xresult::Left("second".to_string()));
    /// ```
    pub fn fors<I, F, T>(results: I, combine: F) -> Xresult<Y, T>
    where
        I: IntoIterator<Item = Self>,
        F: FnOnce(Xlist<X>) -> T,
    {
        Self::flat_fors(results, |values| Xresult::Right(combine(values)))
    }

    /// Like [`fors`](Self::fors), but `combine` returns an `Xresult`
    /// used verbatim as the outcome.
    ///
    /// This is the collapse-one-level counterpart for composition
    /// bodies that are themselves fallible.
    pub fn flat_fors<I, F, T>(results: I, combine: F) -> Xresult<Y, T>
    where
        I: IntoIterator<Item = Self>,
        F: FnOnce(Xlist<X>) -> Xresult<Y, T>,
    {
        let mut values = Vec::new();
        for result in results {
            match result {
                Self::Left(alternate) => return Xresult::Left(alternate),
                Self::Right(value) => values.push(value),
            }
        }
        combine(Xlist::from(values))
    }
}

// =============================================================================
// Auto-Generated Filter Error
// =============================================================================

/// The error synthesized when a filter predicate rejects a value.
///
/// Captures the pre-filter snapshot (branch and value) so a consumer
/// can recover the original payload from the error. Constructed only
/// by the filter combinators, never elsewhere.
///
/// # Examples
///
/// ```rust
/// use xfp::xresult::{XrBranch, Xresult, XresultError};
///
/// let rejected: Xresult<XresultError<i32>, i32> =
///     Xresult::Right(4).filter(|value| *value > 10);
/// let error = rejected.left().unwrap();
/// assert_eq!(error.branch(), XrBranch::Right);
/// assert_eq!(*error.value(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct XresultError<T> {
    branch: XrBranch,
    value: T,
}

impl<T> XresultError<T> {
    pub(crate) const fn new(branch: XrBranch, value: T) -> Self {
        Self { branch, value }
    }

    /// The branch the rejected result sat on before filtering.
    #[inline]
    pub const fn branch(&self) -> XrBranch {
        self.branch
    }

    /// A reference to the rejected payload.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Recovers the rejected payload, consuming the error.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Display for XresultError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "auto-generated error for prior result {} : {:?}",
            self.branch, self.value
        )
    }
}

impl<T: fmt::Debug> std::error::Error for XresultError<T> {}

// =============================================================================
// Debug / Display
// =============================================================================

impl<Y: fmt::Debug, X: fmt::Debug> fmt::Debug for Xresult<Y, X> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<Y: fmt::Debug, X: fmt::Debug> fmt::Display for Xresult<Y, X> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "LEFT : {value:?}"),
            Self::Right(value) => write!(formatter, "RIGHT : {value:?}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<Y, X> From<Result<X, Y>> for Xresult<Y, X> {
    /// Converts a `Result`: `Ok` becomes RIGHT, `Err` becomes LEFT.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xresult;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// assert_eq!(Xresult::from(ok), Xresult::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<X, Y>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<Y, X> From<Xresult<Y, X>> for Result<X, Y> {
    /// Converts an `Xresult`: RIGHT becomes `Ok`, LEFT becomes `Err`.
    #[inline]
    fn from(result: Xresult<Y, X>) -> Self {
        match result {
            Xresult::Left(value) => Err(value),
            Xresult::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Auto-Trait Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Xresult<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(XresultError<String>: Send, Sync, std::error::Error);
