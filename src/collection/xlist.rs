//! Eager ordered sequence with functional behaviors.

use std::fmt;

use super::error::OutOfBoundsError;
use crate::xresult::Xresult;

/// An eager ordered sequence over a `Vec`.
///
/// `Xlist` enhances an ordinary vector with the combinators used for
/// declarative programming: element-wise transforms, descriptive
/// accumulation, and accessors that hand their failures to the core as
/// LEFT [`Xresult`]s. Transformation methods consume the receiver and
/// return a new list; iteration follows construction order.
///
/// # Examples
///
/// ```rust
/// use xfp::collection::Xlist;
///
/// let kept = Xlist::from(vec![1, 2, 3, 4])
///     .map(|element| element * element)
///     .filter(|element| element % 2 == 0);
/// assert_eq!(kept, Xlist::from(vec![4, 16]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Xlist<X> {
    data: Vec<X>,
}

impl<X> Xlist<X> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the list holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at `index`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let list = Xlist::from(vec![10, 20, 30]);
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(5), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&X> {
        self.data.get(index)
    }

    /// Returns the element at `index`, wrapping the potential failure
    /// in an [`Xresult`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let list = Xlist::from(vec![10, 20, 30]);
    /// assert!(list.get_fr(1).is_right());
    ///
    /// let missed = list.get_fr(5);
    /// let error = missed.left().unwrap();
    /// assert_eq!(error.index(), 5);
    /// assert_eq!(error.length(), 3);
    /// ```
    #[inline]
    pub fn get_fr(&self, index: usize) -> Xresult<OutOfBoundsError, &X> {
        self.data.get(index).map_or_else(
            || Xresult::Left(OutOfBoundsError::new("get", index, self.data.len())),
            Xresult::Right,
        )
    }

    /// Returns a reference to the first element, if any.
    #[inline]
    pub fn head(&self) -> Option<&X> {
        self.data.first()
    }

    /// Returns the first element, wrapping the potential failure in an
    /// [`Xresult`].
    #[inline]
    pub fn head_fr(&self) -> Xresult<OutOfBoundsError, &X> {
        self.data.first().map_or_else(
            || Xresult::Left(OutOfBoundsError::new("head", 0, 0)),
            Xresult::Right,
        )
    }

    /// Returns the list without its first element, or `None` when the
    /// list is empty.
    #[inline]
    pub fn tail(self) -> Option<Self> {
        if self.data.is_empty() {
            None
        } else {
            let mut data = self.data;
            data.remove(0);
            Some(Self { data })
        }
    }

    /// Returns the list without its first element, wrapping the
    /// potential failure in an [`Xresult`].
    #[inline]
    pub fn tail_fr(self) -> Xresult<OutOfBoundsError, Self> {
        if self.data.is_empty() {
            Xresult::Left(OutOfBoundsError::new("tail", 0, 0))
        } else {
            let mut data = self.data;
            data.remove(0);
            Xresult::Right(Self { data })
        }
    }

    // =========================================================================
    // Structural Edits
    // =========================================================================

    /// Returns a new list with `element` appended at its end.
    #[inline]
    pub fn appended(mut self, element: X) -> Self {
        self.data.push(element);
        self
    }

    /// Returns a new list with `element` prepended at index 0.
    #[inline]
    pub fn prepended(mut self, element: X) -> Self {
        self.data.insert(0, element);
        self
    }

    /// Returns a new list with `element` inserted before position
    /// `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the list length.
    #[inline]
    pub fn inserted(mut self, index: usize, element: X) -> Self {
        self.data.insert(index, element);
        self
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Returns a new list with `function` applied to each element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let squared = Xlist::from(vec![1, 2, 3]).map(|element| element * element);
    /// assert_eq!(squared, Xlist::from(vec![1, 4, 9]));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Xlist<T>
    where
        F: FnMut(X) -> T,
    {
        self.data.into_iter().map(function).collect()
    }

    /// Returns a new list keeping only the elements accepted by the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let even = Xlist::from(vec![1, 2, 3, 4]).filter(|element| element % 2 == 0);
    /// assert_eq!(even, Xlist::from(vec![2, 4]));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&X) -> bool,
    {
        self.data.into_iter().filter(predicate).collect()
    }

    /// Returns the result of map then flatten.
    ///
    /// Exists as homogenisation with
    /// [`Xresult::flat_map`](crate::xresult::Xresult::flat_map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let expanded = Xlist::from(vec![1, 2, 3])
    ///     .flat_map(|element| Xlist::from(vec![element, 5]));
    /// assert_eq!(expanded, Xlist::from(vec![1, 5, 2, 5, 3, 5]));
    /// ```
    #[inline]
    pub fn flat_map<T, I, F>(self, function: F) -> Xlist<T>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(X) -> I,
    {
        self.data.into_iter().flat_map(function).collect()
    }

    /// Returns a new list sorted ascending.
    #[inline]
    pub fn sorted(mut self) -> Self
    where
        X: Ord,
    {
        self.data.sort();
        self
    }

    /// Returns a new list sorted ascending by the key criteria.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let sorted = Xlist::from(vec!["bd", "ae", "cc"]).sorted_by_key(|word| word.as_bytes()[1]);
    /// assert_eq!(sorted, Xlist::from(vec!["cc", "bd", "ae"]));
    /// ```
    #[inline]
    pub fn sorted_by_key<K, F>(mut self, function: F) -> Self
    where
        K: Ord,
        F: FnMut(&X) -> K,
    {
        self.data.sort_by_key(function);
        self
    }

    /// Returns a new list containing the same elements in reverse
    /// order.
    #[inline]
    pub fn reversed(mut self) -> Self {
        self.data.reverse();
        self
    }

    /// Zips this list with another iterable, stopping at the shorter
    /// side.
    #[inline]
    pub fn zip<T, I>(self, other: I) -> Xlist<(X, T)>
    where
        I: IntoIterator<Item = T>,
    {
        self.data.into_iter().zip(other).collect()
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    /// Accumulates the elements from the first to the last.
    ///
    /// The accumulator starts at `zero`; each step computes the next
    /// state as `function(accumulator, element)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// assert_eq!(
    ///     Xlist::from(vec![1, 2, 3]).fold_left(10, |total, element| total + element),
    ///     16,
    /// );
    /// assert_eq!(
    ///     Xlist::from(vec!["1", "2", "3"]).fold_left(String::new(), |text, digit| text + digit),
    ///     "123",
    /// );
    /// ```
    #[inline]
    pub fn fold_left<T, F>(self, zero: T, function: F) -> T
    where
        F: FnMut(T, X) -> T,
    {
        self.data.into_iter().fold(zero, function)
    }

    /// Accumulates the elements from the last to the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// assert_eq!(
    ///     Xlist::from(vec!["1", "2", "3"]).fold_right(String::new(), |digit, text| text + digit),
    ///     "321",
    /// );
    /// ```
    #[inline]
    pub fn fold_right<T, F>(self, zero: T, mut function: F) -> T
    where
        F: FnMut(X, T) -> T,
    {
        self.data
            .into_iter()
            .rfold(zero, |accumulator, element| function(element, accumulator))
    }

    /// Shorthand for [`fold_left`](Self::fold_left).
    #[inline]
    pub fn fold<T, F>(self, zero: T, function: F) -> T
    where
        F: FnMut(T, X) -> T,
    {
        self.fold_left(zero, function)
    }

    /// Accumulates the elements using the first one as the initial
    /// state, or `None` when the list is empty.
    #[inline]
    pub fn reduce<F>(self, function: F) -> Option<X>
    where
        F: FnMut(X, X) -> X,
    {
        self.data.into_iter().reduce(function)
    }

    /// Accumulates the elements using the first one as the initial
    /// state, wrapping the potential failure in an [`Xresult`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    /// use xfp::xresult::Xresult;
    ///
    /// let summed = Xlist::from(vec![1, 2, 3]).reduce_fr(|left, right| left + right);
    /// assert_eq!(summed, Xresult::Right(6));
    ///
    /// let empty = Xlist::<i32>::new().reduce_fr(|left, right| left + right);
    /// assert!(empty.is_left());
    /// ```
    #[inline]
    pub fn reduce_fr<F>(self, function: F) -> Xresult<OutOfBoundsError, X>
    where
        F: FnMut(X, X) -> X,
    {
        self.data.into_iter().reduce(function).map_or_else(
            || Xresult::Left(OutOfBoundsError::new("reduce", 0, 0)),
            Xresult::Right,
        )
    }

    /// Returns the smallest element.
    #[inline]
    pub fn min(&self) -> Option<&X>
    where
        X: Ord,
    {
        self.data.iter().min()
    }

    /// Returns the biggest element.
    #[inline]
    pub fn max(&self) -> Option<&X>
    where
        X: Ord,
    {
        self.data.iter().max()
    }

    /// Returns the smallest element given the key criteria.
    #[inline]
    pub fn min_by_key<K, F>(&self, mut function: F) -> Option<&X>
    where
        K: Ord,
        F: FnMut(&X) -> K,
    {
        self.data.iter().min_by_key(|element| function(element))
    }

    /// Returns the biggest element given the key criteria.
    #[inline]
    pub fn max_by_key<K, F>(&self, mut function: F) -> Option<&X>
    where
        K: Ord,
        F: FnMut(&X) -> K,
    {
        self.data.iter().max_by_key(|element| function(element))
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Runs `statement` once for each element, in order.
    #[inline]
    pub fn foreach<F>(&self, statement: F)
    where
        F: FnMut(&X),
    {
        self.data.iter().for_each(statement);
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, X> {
        self.data.iter()
    }
}

impl<X: IntoIterator> Xlist<X> {
    /// Returns a new list with one less level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xlist;
    ///
    /// let nested = Xlist::from(vec![vec![1, 2], vec![3]]);
    /// assert_eq!(nested.flatten(), Xlist::from(vec![1, 2, 3]));
    /// ```
    #[inline]
    pub fn flatten(self) -> Xlist<X::Item> {
        self.data.into_iter().flatten().collect()
    }
}

impl<X> From<Vec<X>> for Xlist<X> {
    #[inline]
    fn from(data: Vec<X>) -> Self {
        Self { data }
    }
}

impl<X> FromIterator<X> for Xlist<X> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = X>>(iterable: I) -> Self {
        Self {
            data: iterable.into_iter().collect(),
        }
    }
}

impl<X> IntoIterator for Xlist<X> {
    type Item = X;
    type IntoIter = std::vec::IntoIter<X>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, X> IntoIterator for &'a Xlist<X> {
    type Item = &'a X;
    type IntoIter = std::slice::Iter<'a, X>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<X: fmt::Debug> fmt::Debug for Xlist<X> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Xlist").field(&self.data).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<X: serde::Serialize> serde::Serialize for Xlist<X> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct XlistVisitor<X> {
    marker: std::marker::PhantomData<X>,
}

#[cfg(feature = "serde")]
impl<'de, X> serde::de::Visitor<'de> for XlistVisitor<X>
where
    X: serde::Deserialize<'de>,
{
    type Value = Xlist<X>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Xlist::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, X> serde::Deserialize<'de> for Xlist<X>
where
    X: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(XlistVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_impl_all!(Xlist<i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_preserves_order() {
        let list: Xlist<i32> = (1..=3).collect();
        assert_eq!(list, Xlist::from(vec![1, 2, 3]));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn tail_of_empty_is_none() {
        assert_eq!(Xlist::<i32>::new().tail(), None);
    }

    #[test]
    fn fold_directions_differ_on_non_commutative_ops() {
        let forward =
            Xlist::from(vec!["1", "2", "3"]).fold_left(String::new(), |text, digit| text + digit);
        let backward =
            Xlist::from(vec!["1", "2", "3"]).fold_right(String::new(), |digit, text| text + digit);
        assert_eq!(forward, "123");
        assert_eq!(backward, "321");
    }

    #[test]
    fn reduce_fr_reports_empty_list() {
        let empty = Xlist::<i32>::new().reduce_fr(|left, right| left + right);
        let error = empty.left().unwrap();
        assert_eq!(error.operation(), "reduce");
        assert_eq!(error.length(), 0);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn roundtrip_through_json() {
            let list = Xlist::from(vec![1, 2, 3]);
            let encoded = serde_json::to_string(&list).unwrap();
            assert_eq!(encoded, "[1,2,3]");
            let decoded: Xlist<i32> = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, list);
        }
    }
}
