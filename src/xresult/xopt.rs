//! Optional-value vocabulary for [`Xresult`].

use super::result::Xresult;

/// Common vocabulary to instantiate and destructure optional values.
///
/// An `Xopt<X>` is an `Xresult<(), X>`: the unit type is the absent
/// marker on the LEFT arm, so "some" is any RIGHT and "empty" is the
/// single canonical LEFT. Because the absent marker is a type of its
/// own, a LEFT carrying an unrelated payload (an error, say) is not an
/// `Xopt` at all, and cannot be mistaken for the empty value.
///
/// # Examples
///
/// ```rust
/// use xfp::xresult::Xopt;
///
/// let present = Xopt::from_optional(Some(3));
/// assert_eq!(present, Xopt::some(3));
/// assert!(present.is_some());
///
/// let absent = Xopt::<i32>::from_optional(None);
/// assert_eq!(absent, Xopt::EMPTY);
/// assert!(absent.is_empty());
/// ```
pub type Xopt<X> = Xresult<(), X>;

impl<X> Xresult<(), X> {
    /// The canonical empty value: a LEFT holding the absent marker.
    ///
    /// Shared and stateless; every empty `Xopt` is this value.
    pub const EMPTY: Self = Self::Left(());

    /// Wraps a present value as a RIGHT.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::{Xopt, Xresult};
    ///
    /// assert_eq!(Xopt::some(3), Xresult::Right(3));
    /// ```
    #[inline]
    pub const fn some(value: X) -> Self {
        Self::Right(value)
    }

    /// Lifts a nullable value: `Some` becomes a RIGHT, `None` becomes
    /// [`EMPTY`](Self::EMPTY).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::xresult::Xopt;
    ///
    /// assert_eq!(Xopt::from_optional(Some(3)), Xopt::some(3));
    /// assert_eq!(Xopt::<i32>::from_optional(None), Xopt::EMPTY);
    /// ```
    #[inline]
    pub fn from_optional(value: Option<X>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::EMPTY,
        }
    }

    /// Converts back into an `Option`, consuming the result.
    #[inline]
    pub fn into_option(self) -> Option<X> {
        match self {
            Self::Left(()) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns `true` if this holds a present value (a RIGHT).
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.is_right()
    }

    /// Returns `true` if this is the empty value (the absent LEFT).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_left()
    }
}

impl<X> From<Option<X>> for Xopt<X> {
    #[inline]
    fn from(value: Option<X>) -> Self {
        Self::from_optional(value)
    }
}

impl<X> From<Xopt<X>> for Option<X> {
    #[inline]
    fn from(value: Xopt<X>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_shared_canonical_value() {
        assert_eq!(Xopt::<i32>::EMPTY, Xopt::<i32>::EMPTY);
        assert_eq!(Xopt::<i32>::from_optional(None), Xopt::EMPTY);
    }

    #[test]
    fn option_roundtrip() {
        assert_eq!(Xopt::from_optional(Some(3)).into_option(), Some(3));
        assert_eq!(Xopt::<i32>::from_optional(None).into_option(), None);
    }
}
