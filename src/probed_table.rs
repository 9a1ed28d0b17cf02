//! Hash table with open addressing and linear probing.
//!
//! The table is a flat slot array of fixed capacity (53 by default) and
//! never resizes; once every slot has been probed for a new key, `set`
//! fails. Each slot is in one of three tagged states: `Empty` (never
//! used), `Tombstone` (deleted), or `Occupied`. Tombstones keep probe
//! chains intact: a lookup continues past them and only an `Empty` slot
//! proves the key was never inserted along the chain, while `find_space`
//! treats them as reusable.

use crate::error::{DsaError, DsaResult};

/// Default slot count; prime.
pub const DEFAULT_SLOT_COUNT: usize = 53;

/// How many leading characters of a key participate in the hash.
const HASH_PREFIX_LEN: usize = 50;

/// Multiplier applied to the summed character codes during hashing.
const HASH_PRIME: usize = 31;

/// One slot of the probe table.
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never held an entry; terminates probe chains.
    Empty,
    /// Held an entry that was deleted; probe chains continue past it.
    Tombstone,
    /// Holds a live entry.
    Occupied { key: String, value: V },
}

impl<V> Slot<V> {
    fn is_available(&self) -> bool {
        matches!(self, Slot::Empty | Slot::Tombstone)
    }
}

/// String-keyed hash table resolving collisions by linear probing.
///
/// # Examples
///
/// ```
/// use dsakit::LinearProbeTable;
///
/// let mut table = LinearProbeTable::new();
/// table.set("plum", 3).unwrap();
/// table.set("pear", 7).unwrap();
///
/// assert_eq!(table.get("plum"), Some(&3));
/// assert_eq!(table.remove("plum"), Some(3));
/// assert_eq!(table.get("plum"), None);
/// assert_eq!(table.get("pear"), Some(&7));
/// ```
#[derive(Debug, Clone)]
pub struct LinearProbeTable<V> {
    slots: Vec<Slot<V>>,
    len: usize,
}

impl<V> LinearProbeTable<V> {
    /// Create a table with the default slot count.
    pub fn new() -> Self {
        Self {
            slots: (0..DEFAULT_SLOT_COUNT).map(|_| Slot::Empty).collect(),
            len: 0,
        }
    }

    /// Create a table with a caller-chosen slot count (at least 1).
    ///
    /// The capacity is a hard ceiling: the table never grows.
    pub fn with_capacity(capacity: usize) -> DsaResult<Self> {
        if capacity == 0 {
            return Err(DsaError::invalid_capacity(capacity, 1));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            len: 0,
        })
    }

    // ========================================================================
    // CORE OPERATIONS
    // ========================================================================

    /// Store a value under `key`.
    ///
    /// An existing key is overwritten in place and its previous value
    /// returned. A new key claims the first available slot along its probe
    /// sequence; if every slot has been probed without finding one, the
    /// table is full and `CapacityExceeded` is returned.
    pub fn set(&mut self, key: &str, value: V) -> DsaResult<Option<V>> {
        if let Some(index) = self.lookup(key) {
            if let Slot::Occupied { value: slot, .. } = &mut self.slots[index] {
                return Ok(Some(std::mem::replace(slot, value)));
            }
        }

        let index = self
            .find_space(key)
            .ok_or_else(|| DsaError::capacity_exceeded("probe table", self.slots.len()))?;
        self.slots[index] = Slot::Occupied {
            key: key.to_string(),
            value,
        };
        self.len += 1;
        Ok(None)
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.lookup(key)?;
        match &self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Look up a value by key, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.lookup(key)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true if the key is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Delete a key, returning its value.
    ///
    /// The slot becomes a tombstone rather than reverting to empty, so
    /// probe chains that pass through it keep resolving.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.lookup(key)?;
        match std::mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                Some(value)
            }
            // lookup only ever returns occupied indices; restore and miss.
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    // ========================================================================
    // ENUMERATION
    // ========================================================================

    /// Every stored key, in slot-array order.
    pub fn keys(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every stored value, in slot-array order. One entry per occupied
    /// slot; values that happen to compare equal are all kept.
    pub fn values(&self) -> Vec<&V> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            })
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

    /// Number of slots (fixed at construction).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // ========================================================================
    // PROBING
    // ========================================================================

    /// Hash the first characters of a key into a starting slot index.
    fn hash(&self, key: &str) -> usize {
        let total: usize = key
            .chars()
            .take(HASH_PREFIX_LEN)
            .map(|c| c as usize)
            .sum();
        total * HASH_PRIME % self.slots.len()
    }

    /// The `attempt`-th candidate slot for a key: pure linear probing.
    fn probe(&self, key: &str, attempt: usize) -> usize {
        (self.hash(key) + attempt) % self.slots.len()
    }

    /// First available (empty or tombstone) slot along the key's probe
    /// sequence, or `None` once every slot has been probed.
    fn find_space(&self, key: &str) -> Option<usize> {
        for attempt in 0..self.slots.len() {
            let index = self.probe(key, attempt);
            if self.slots[index].is_available() {
                return Some(index);
            }
        }
        None
    }

    /// Slot index holding `key`, or `None`.
    ///
    /// An `Empty` slot ends the search immediately: had the key been
    /// inserted, it would occupy some slot before the first empty one on
    /// its chain. Tombstones are skipped.
    fn lookup(&self, key: &str) -> Option<usize> {
        for attempt in 0..self.slots.len() {
            let index = self.probe(key, attempt);
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => continue,
                Slot::Occupied { key: stored, .. } => {
                    if stored == key {
                        return Some(index);
                    }
                }
            }
        }
        None
    }
}

impl<V> Default for LinearProbeTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
