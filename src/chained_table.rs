//! Hash table with separate chaining.
//!
//! A fixed number of buckets is chosen at construction (53 by default, a
//! prime for better key distribution) and never changes. Each bucket holds
//! a chain of key/value entries in insertion order; setting an existing key
//! overwrites its value in place and keeps the chain order. There is no
//! delete operation on this variant.

use crate::error::{DsaError, DsaResult};

/// Default bucket count; prime.
pub const DEFAULT_BUCKET_COUNT: usize = 53;

/// How many leading characters of a key participate in the hash.
const HASH_PREFIX_LEN: usize = 50;

/// Multiplier applied to each character code during hashing.
const HASH_PRIME: usize = 31;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// String-keyed hash table resolving collisions with per-bucket chains.
///
/// # Examples
///
/// ```
/// use dsakit::ChainedHashTable;
///
/// let mut table = ChainedHashTable::new();
/// table.set("plum", 3);
/// table.set("pear", 7);
/// assert_eq!(table.set("plum", 5), Some(3)); // overwrite returns the old value
///
/// assert_eq!(table.get("plum"), Some(&5));
/// assert_eq!(table.get("fig"), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ChainedHashTable<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

impl<V> ChainedHashTable<V> {
    /// Create a table with the default bucket count.
    pub fn new() -> Self {
        Self {
            buckets: (0..DEFAULT_BUCKET_COUNT).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Create a table with a caller-chosen bucket count (at least 1).
    pub fn with_buckets(bucket_count: usize) -> DsaResult<Self> {
        if bucket_count == 0 {
            return Err(DsaError::invalid_capacity(bucket_count, 1));
        }
        Ok(Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        })
    }

    // ========================================================================
    // CORE OPERATIONS
    // ========================================================================

    /// Store a value under `key`, returning the previous value if the key
    /// was already present. Overwrites happen in place, preserving the
    /// bucket's chain order.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let index = self.hash(key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }
        chain.push(Entry {
            key: key.to_string(),
            value,
        });
        self.len += 1;
        None
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.hash(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Look up a value by key, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.hash(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the key is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // ========================================================================
    // ENUMERATION
    // ========================================================================

    /// Every stored key, in bucket-index order then chain insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| entry.key.as_str())
            .collect()
    }

    /// Every stored value, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Vec<&V> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| &entry.value)
            .collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets (fixed at construction).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Hash the first characters of a key into a bucket index.
    ///
    /// The modulo is applied at every step so the accumulator never grows
    /// past `bucket_count * HASH_PRIME` plus one character code.
    fn hash(&self, key: &str) -> usize {
        let mut total = 0usize;
        for c in key.chars().take(HASH_PREFIX_LEN) {
            total = (total + c as usize * HASH_PRIME) % self.buckets.len();
        }
        total
    }
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_roundtrip() {
        let mut table = ChainedHashTable::new();
        assert_eq!(table.set("hello", 1), None);
        assert_eq!(table.set("world", 2), None);
        assert_eq!(table.get("hello"), Some(&1));
        assert_eq!(table.get("world"), Some(&2));
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn overwrite_keeps_one_entry() {
        let mut table = ChainedHashTable::new();
        table.set("key", "first");
        assert_eq!(table.set("key", "second"), Some("first"));
        assert_eq!(table.get("key"), Some(&"second"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.keys(), vec!["key"]);
    }

    #[test]
    fn colliding_keys_share_a_bucket() {
        // A single bucket forces every key into one chain.
        let mut table = ChainedHashTable::with_buckets(1).unwrap();
        table.set("a", 1);
        table.set("b", 2);
        table.set("c", 3);
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&3));
        // Chain order is insertion order.
        assert_eq!(table.keys(), vec!["a", "b", "c"]);
        assert_eq!(table.values(), vec![&1, &2, &3]);
    }

    #[test]
    fn overwrite_in_chain_preserves_order() {
        let mut table = ChainedHashTable::with_buckets(1).unwrap();
        table.set("a", 1);
        table.set("b", 2);
        table.set("a", 10);
        assert_eq!(table.keys(), vec!["a", "b"]);
        assert_eq!(table.values(), vec![&10, &2]);
    }

    #[test]
    fn zero_buckets_is_rejected() {
        assert!(ChainedHashTable::<i32>::with_buckets(0).is_err());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut table = ChainedHashTable::new();
        table.set("counter", 0);
        *table.get_mut("counter").unwrap() += 5;
        assert_eq!(table.get("counter"), Some(&5));
    }

    #[test]
    fn long_keys_hash_on_a_bounded_prefix() {
        let mut table = ChainedHashTable::new();
        let long_a = "a".repeat(60);
        let long_b = format!("{}suffix", "a".repeat(55));
        // Both exceed the 50-char hashing window but remain distinct keys.
        table.set(&long_a, 1);
        table.set(&long_b, 2);
        assert_eq!(table.get(&long_a), Some(&1));
        assert_eq!(table.get(&long_b), Some(&2));
        assert_eq!(table.len(), 2);
    }
}
