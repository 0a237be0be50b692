//! Keyed container with functional behaviors.

use std::collections::BTreeMap;
use std::fmt;

use super::error::KeyNotFoundError;
use super::xlist::Xlist;
use crate::xresult::Xresult;

/// A keyed container with deterministic key-ordered iteration.
///
/// `Xdict` wraps an ordered map: iteration, `keys`, `values` and
/// `items` all follow ascending key order, so the same dictionary
/// always enumerates the same way. Transformation methods consume the
/// receiver and return a new dictionary.
///
/// # Examples
///
/// ```rust
/// use xfp::collection::Xdict;
///
/// let scores = Xdict::from_list([("ada", 1), ("grace", 2), ("ada", 3)]);
///
/// // Last value wins on key duplication.
/// assert_eq!(scores.get(&"ada"), Some(&3));
///
/// let doubled = scores.map_values(|score| score * 2);
/// assert_eq!(doubled.get(&"grace"), Some(&4));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Xdict<K, V> {
    data: BTreeMap<K, V>,
}

impl<K: Ord, V> Xdict<K, V> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty dictionary.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Builds a dictionary from key/value couples.
    ///
    /// In case of key duplication, the last associated value is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xdict;
    ///
    /// let built = Xdict::from_list([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(built, Xdict::from_list([("a", 3), ("b", 2)]));
    /// ```
    #[inline]
    pub fn from_list<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            data: iterable.into_iter().collect(),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the dictionary holds no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.data.contains_key(key)
    }

    /// Returns a reference to the value associated with `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// Returns the value associated with `key`, or `default` when the
    /// key is absent.
    #[inline]
    pub fn get_or(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.data.get(key).cloned().unwrap_or(default)
    }

    /// Returns the value associated with `key`, wrapping the potential
    /// failure in an [`Xresult`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xdict;
    ///
    /// let scores = Xdict::from_list([("ada", 1)]);
    /// assert!(scores.get_fr(&"ada").is_right());
    ///
    /// let missed = scores.get_fr(&"grace");
    /// assert_eq!(missed.left().unwrap().key(), "\"grace\"");
    /// ```
    #[inline]
    pub fn get_fr(&self, key: &K) -> Xresult<KeyNotFoundError, &V>
    where
        K: fmt::Debug,
    {
        self.data.get(key).map_or_else(
            || Xresult::Left(KeyNotFoundError::new(key)),
            Xresult::Right,
        )
    }

    // =========================================================================
    // Structural Edits
    // =========================================================================

    /// Returns a new dictionary with `key` associated to `value`,
    /// overriding any previous association.
    #[inline]
    pub fn updated(mut self, key: K, value: V) -> Self {
        self.data.insert(key, value);
        self
    }

    /// Returns a new dictionary without `key`.
    #[inline]
    pub fn removed(mut self, key: &K) -> Self {
        self.data.remove(key);
        self
    }

    /// Returns the union of both dictionaries.
    ///
    /// On key conflicts the `other` side wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xfp::collection::Xdict;
    ///
    /// let merged = Xdict::from_list([("a", 1), ("b", 2)])
    ///     .union(Xdict::from_list([("b", 20), ("c", 30)]));
    /// assert_eq!(merged, Xdict::from_list([("a", 1), ("b", 20), ("c", 30)]));
    /// ```
    #[inline]
    pub fn union(mut self, other: Self) -> Self {
        self.data.extend(other.data);
        self
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Returns the keys as an eager list, in ascending order.
    #[inline]
    pub fn keys(&self) -> Xlist<K>
    where
        K: Clone,
    {
        self.data.keys().cloned().collect()
    }

    /// Returns the values as an eager list, in ascending key order.
    #[inline]
    pub fn values(&self) -> Xlist<V>
    where
        V: Clone,
    {
        self.data.values().cloned().collect()
    }

    /// Returns the key/value couples as an eager list, in ascending
    /// key order.
    #[inline]
    pub fn items(&self) -> Xlist<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.data
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Returns a new dictionary with `function` applied to each
    /// key/value couple.
    ///
    /// If the transformation maps two keys onto the same one, the
    /// couple visited last (in ascending key order) wins.
    #[inline]
    pub fn map<K2, V2, F>(self, mut function: F) -> Xdict<K2, V2>
    where
        K2: Ord,
        F: FnMut(K, V) -> (K2, V2),
    {
        Xdict {
            data: self
                .data
                .into_iter()
                .map(|(key, value)| function(key, value))
                .collect(),
        }
    }

    /// Returns a new dictionary with `function` applied to each key.
    #[inline]
    pub fn map_keys<K2, F>(self, mut function: F) -> Xdict<K2, V>
    where
        K2: Ord,
        F: FnMut(K) -> K2,
    {
        self.map(|key, value| (function(key), value))
    }

    /// Returns a new dictionary with `function` applied to each value.
    #[inline]
    pub fn map_values<V2, F>(self, mut function: F) -> Xdict<K, V2>
    where
        F: FnMut(V) -> V2,
    {
        self.map(|key, value| (key, function(value)))
    }

    /// Returns a new dictionary keeping only the couples accepted by
    /// the predicate.
    #[inline]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        Self {
            data: self
                .data
                .into_iter()
                .filter(|(key, value)| predicate(key, value))
                .collect(),
        }
    }

    /// Returns a new dictionary keeping only the couples whose key is
    /// accepted by the predicate.
    #[inline]
    pub fn filter_keys<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&K) -> bool,
    {
        self.filter(|key, _| predicate(key))
    }

    /// Returns a new dictionary keeping only the couples whose value
    /// is accepted by the predicate.
    #[inline]
    pub fn filter_values<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.filter(|_, value| predicate(value))
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Runs `statement` once for each key/value couple, in ascending
    /// key order.
    #[inline]
    pub fn foreach<F>(&self, mut statement: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in &self.data {
            statement(key, value);
        }
    }

    /// Runs `statement` once for each key, in ascending order.
    #[inline]
    pub fn foreach_keys<F>(&self, mut statement: F)
    where
        F: FnMut(&K),
    {
        self.foreach(|key, _| statement(key));
    }

    /// Runs `statement` once for each value, in ascending key order.
    #[inline]
    pub fn foreach_values<F>(&self, mut statement: F)
    where
        F: FnMut(&V),
    {
        self.foreach(|_, value| statement(value));
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for Xdict<K, V> {
    #[inline]
    fn from(data: BTreeMap<K, V>) -> Self {
        Self { data }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Xdict<K, V> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        Self::from_list(iterable)
    }
}

impl<K, V> IntoIterator for Xdict<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Xdict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::btree_map::Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Xdict<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Xdict").field(&self.data).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Xdict<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (key, value) in &self.data {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct XdictVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for XdictVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = Xdict<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry()? {
            entries.insert(key, value);
        }
        Ok(Xdict::from(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Xdict<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(XdictVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_impl_all!(Xdict<String, i32>: Send, Sync, Clone);
