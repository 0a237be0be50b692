//! Plain union vocabulary for [`Xresult`].

use super::result::Xresult;

pub use super::result::Xresult::{Left, Right};

/// Common vocabulary to instantiate and destructure a plain union.
///
/// `Xeither` is not a separate data structure: it is the [`Xresult`]
/// type under its neutral, unbiased name, with the [`Left`] and
/// [`Right`] variants re-exported so they read as standalone
/// constructors and match patterns. Values built through either
/// spelling are indistinguishable at runtime.
///
/// # Examples
///
/// ```rust
/// use xfp::xresult::{Left, Right, Xeither};
///
/// fn classify(flag: bool) -> Xeither<&'static str, i32> {
///     if flag { Right(42) } else { Left("no value") }
/// }
///
/// match classify(true) {
///     Right(value) => assert_eq!(value, 42),
///     Left(_) => unreachable!(),
/// }
///
/// // Values built through the raw enum match the same patterns.
/// let raw: Xeither<&str, i32> = xfp::xresult::Xresult::Left("no value");
/// assert_eq!(raw, Left("no value"));
/// ```
pub type Xeither<Y, X> = Xresult<Y, X>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_constructors_build_plain_results() {
        let left: Xeither<i32, &str> = Left(1);
        let right: Xeither<i32, &str> = Right("ok");
        assert_eq!(left, Xresult::Left(1));
        assert_eq!(right, Xresult::Right("ok"));
    }
}
