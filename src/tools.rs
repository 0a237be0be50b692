//! Cross-container helpers.

use crate::collection::Xdict;

/// Tallies the occurrences of each element of an ordered iterable.
///
/// # Examples
///
/// ```rust
/// use xfp::collection::{Xdict, Xlist};
/// use xfp::tools::count;
///
/// let tallied = count(Xlist::from(vec!["a", "b", "a"]));
/// assert_eq!(tallied, Xdict::from_list([("a", 2), ("b", 1)]));
/// ```
pub fn count<I>(elements: I) -> Xdict<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    elements
        .into_iter()
        .fold(Xdict::new(), |accumulator, element| {
            let occurrences = accumulator.get(&element).map_or(1, |found| found + 1);
            accumulator.updated(element, occurrences)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Xiter, Xlist};

    #[test]
    fn count_tallies_every_occurrence() {
        let tallied = count(Xlist::from(vec![1, 2, 1, 1]));
        assert_eq!(tallied, Xdict::from_list([(1, 3), (2, 1)]));
    }

    #[test]
    fn count_accepts_lazy_iterables() {
        let tallied = count(Xiter::new(vec!["x", "y", "x"]));
        assert_eq!(tallied, Xdict::from_list([("x", 2), ("y", 1)]));
    }
}
