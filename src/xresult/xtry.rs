//! Fallible-computation vocabulary for [`Xresult`].

use std::error::Error;

use super::result::Xresult;

/// A type-erased error payload for [`Xtry`] channels.
///
/// The boxed form lets computations with different concrete error
/// types flow through the same LEFT arm, and absorbs an
/// [`XresultError`](crate::xresult::XresultError) produced by the
/// filter combinators through the standard `From` conversion.
pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// Common vocabulary to instantiate and destructure fallible values.
///
/// An `Xtry<X, E>` is an `Xresult<E, X>` whose LEFT arm holds an
/// error-kind payload; use [`BoxedError`] as `E` when computations
/// with different concrete error types share one channel. "Success"
/// is any RIGHT; "failure" is a LEFT whose payload implements
/// [`std::error::Error`]. The asymmetry is deliberate and enforced by
/// the type system: [`is_success`] is available on every result,
/// while [`is_failure`] and [`failure_ref`] only exist when the LEFT
/// payload is error-kind, so a LEFT holding a plain value cannot even
/// ask the question.
///
/// [`is_success`]: Xresult::is_success
/// [`is_failure`]: Xresult::is_failure
/// [`failure_ref`]: Xresult::failure_ref
///
/// # Examples
///
/// ```rust
/// use xfp::xresult::Xtry;
///
/// fn parse(input: &str) -> Xtry<i32, std::num::ParseIntError> {
///     Xtry::from_unsafe(|| input.parse())
/// }
///
/// assert_eq!(parse("3").get_or_else(0), 3);
/// assert!(parse("not a number").is_failure());
/// ```
pub type Xtry<X, E> = Xresult<E, X>;

impl<Y, X> Xresult<Y, X> {
    /// Runs a fallible computation and captures its outcome.
    ///
    /// The computation is invoked exactly once and never retried:
    /// `Ok` wraps as a RIGHT, `Err` wraps as a LEFT. This is the sole
    /// sanctioned boundary converting failures into results; every
    /// other combinator lets failures propagate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::{Xresult, Xtry};
    ///
    /// let parsed: Xtry<i32, std::num::ParseIntError> =
    ///     Xtry::from_unsafe(|| "3".parse());
    /// assert_eq!(parsed, Xresult::Right(3));
    ///
    /// let failed: Xtry<i32, std::num::ParseIntError> =
    ///     Xtry::from_unsafe(|| "oops".parse());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn from_unsafe<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<X, Y>,
    {
        match computation() {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    /// Returns `true` if this is a RIGHT.
    ///
    /// Any RIGHT counts as a success, however it was constructed.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.is_right()
    }
}

impl<Y: Error, X> Xresult<Y, X> {
    /// Wraps a success value as a RIGHT.
    #[inline]
    pub fn success(value: X) -> Self {
        Self::Right(value)
    }

    /// Wraps an error as a LEFT.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xtry;
    ///
    /// let failed: Xtry<i32, std::fmt::Error> = Xtry::failure(std::fmt::Error);
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: Y) -> Self {
        Self::Left(error)
    }

    /// Returns `true` if this is a LEFT holding an error-kind payload.
    ///
    /// Only available when the LEFT type implements
    /// [`std::error::Error`]; a LEFT with a plain payload is not a
    /// failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.is_left()
    }

    /// Returns a reference to the error if this is a failure.
    #[inline]
    pub fn failure_ref(&self) -> Option<&Y> {
        self.left_ref()
    }
}

/// Lifts a unary fallible function into one returning an [`Xresult`].
///
/// The returned function wraps each call in
/// [`from_unsafe`](Xresult::from_unsafe), converting failures into
/// LEFT results instead of propagating them.
///
/// # Examples
///
/// ```rust
/// use xfp::xresult::{Xresult, safed};
///
/// let parse = safed(|input: &str| input.parse::<i32>());
///
/// assert_eq!(parse("3").get_or_else(0), 3);
/// assert!(parse("oops").is_left());
/// ```
pub fn safed<A, X, Y, F>(function: F) -> impl Fn(A) -> Xresult<Y, X>
where
    F: Fn(A) -> Result<X, Y>,
{
    move |argument| Xresult::from_unsafe(|| function(argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_invert(value: f64) -> Result<f64, String> {
        if value == 0.0 {
            Err("division by zero".to_string())
        } else {
            Ok(1.0 / value)
        }
    }

    #[test]
    fn from_unsafe_wraps_both_outcomes() {
        assert_eq!(
            Xresult::from_unsafe(|| checked_invert(4.0)),
            Xresult::Right(0.25)
        );
        assert_eq!(
            Xresult::from_unsafe(|| checked_invert(0.0)),
            Xresult::Left("division by zero".to_string())
        );
    }

    #[test]
    fn safed_decorates_each_call_independently() {
        let inverted = safed(checked_invert);
        assert_eq!(inverted(4.0), Xresult::Right(0.25));
        assert_eq!(
            inverted(0.0),
            Xresult::Left("division by zero".to_string())
        );
        assert_eq!(inverted(2.0), Xresult::Right(0.5));
    }
}
