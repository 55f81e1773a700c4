//! Consumable letter multiset
//!
//! Tracks how many unmatched occurrences of each letter remain in the secret
//! word while a guess is being scored. A key whose count drops to zero is
//! removed, so a presence check is just a key lookup.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Multiset of keys with strictly positive counts
///
/// # Examples
/// ```
/// use wordle_season::core::FrequencyCounter;
///
/// let mut counter: FrequencyCounter<char> = "GREET".chars().collect();
/// assert_eq!(counter.count('E'), 2);
///
/// counter.decrease_count('E');
/// counter.decrease_count('E');
/// assert!(!counter.contains('E'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyCounter<K: Eq + Hash> {
    keys: FxHashMap<K, usize>,
}

impl<K: Eq + Hash + Copy> FrequencyCounter<K> {
    /// Create an empty counter
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: FxHashMap::default(),
        }
    }

    /// Increment the count for `key`, inserting it with a count of 1 if absent
    pub fn add_or_insert(&mut self, key: K) {
        *self.keys.entry(key).or_insert(0) += 1;
    }

    /// Decrement the count for `key`, removing it once the count reaches zero
    ///
    /// Absent keys are left alone.
    pub fn decrease_count(&mut self, key: K) {
        let Some(count) = self.keys.get_mut(&key) else {
            return;
        };

        *count -= 1;
        if *count == 0 {
            self.keys.remove(&key);
        }
    }

    /// Current counts; every stored value is at least 1
    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FxHashMap<K, usize> {
        &self.keys
    }

    /// Check whether at least one occurrence of `key` remains
    #[inline]
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.keys.contains_key(&key)
    }

    /// Remaining occurrences of `key` (0 when absent)
    #[inline]
    #[must_use]
    pub fn count(&self, key: K) -> usize {
        self.keys.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct keys still present
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Eq + Hash + Copy> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Copy> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add_or_insert(key);
        }
        counter
    }
}
