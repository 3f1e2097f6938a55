//! Open-addressing hash table backing JSON object values.
//!
//! Collisions resolve by linear probing in increasing slot order, wrapping
//! at capacity. There are no tombstones: growth rehashes every live entry
//! into a fresh, larger slot array, and deletion is not part of the design.

use alloc::{string::String, vec, vec::Vec};
use core::fmt;

use crate::{error::CapacityOverflow, value::Value};

// FNV-1a, 64-bit: standard offset basis and prime.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Slot count for tables built by the parser.
pub(crate) const DEFAULT_CAPACITY: usize = 8;

fn fnv1a(key: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in key.as_bytes() {
        hash = (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME);
    }
    hash
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: Value,
}

/// A hash map from string keys to [`Value`]s.
///
/// Before each insertion the load factor (`count / capacity`) is checked
/// against 0.75; past the threshold the table doubles (minimum 16 slots)
/// and rehashes. Capacity arithmetic is checked — overflow surfaces as
/// [`CapacityOverflow`] rather than wrapping.
///
/// # Examples
///
/// ```
/// use jsondom::{ObjectTable, Value};
///
/// let mut table = ObjectTable::new();
/// table.set("answer".into(), Value::Number(42.0))?;
/// assert_eq!(table.get("answer"), Some(&Value::Number(42.0)));
/// assert_eq!(table.get("question"), None);
/// # Ok::<(), jsondom::CapacityOverflow>(())
/// ```
#[derive(Clone)]
pub struct ObjectTable {
    slots: Vec<Option<Entry>>,
    count: usize,
}

impl ObjectTable {
    /// An empty table with the parser's default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty table with `capacity` slots, all empty.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            count: 0,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` if no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current slot count.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Looks up `key`, probing linearly from its hash slot. An empty slot
    /// reached before a match means absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        if self.slots.is_empty() {
            return None;
        }
        self.slots[self.slot_for(key)]
            .as_ref()
            .map(|entry| &entry.value)
    }

    /// Mutable variant of [`get`](Self::get).
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        if self.slots.is_empty() {
            return None;
        }
        let index = self.slot_for(key);
        self.slots[index].as_mut().map(|entry| &mut entry.value)
    }

    /// `true` if `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or replaces, returning the displaced value if any.
    ///
    /// Replacing an existing key never grows the table; only genuine
    /// insertions count against the load threshold.
    ///
    /// # Errors
    ///
    /// [`CapacityOverflow`] if doubling the slot count overflows `usize`.
    pub fn set(&mut self, key: String, value: Value) -> Result<Option<Value>, CapacityOverflow> {
        if !self.slots.is_empty() {
            let index = self.slot_for(&key);
            if let Some(entry) = &mut self.slots[index] {
                return Ok(Some(core::mem::replace(&mut entry.value, value)));
            }
        }
        self.insert_vacant(key, value)?;
        Ok(None)
    }

    /// First-wins insertion: if `key` is already present the existing value
    /// is kept and the rejected `value` is handed back to the caller.
    ///
    /// # Errors
    ///
    /// [`CapacityOverflow`] if doubling the slot count overflows `usize`.
    pub fn insert_new(
        &mut self,
        key: String,
        value: Value,
    ) -> Result<Option<Value>, CapacityOverflow> {
        if !self.slots.is_empty() && self.slots[self.slot_for(&key)].is_some() {
            return Ok(Some(value));
        }
        self.insert_vacant(key, value)?;
        Ok(None)
    }

    /// Inserts a key known to be absent, growing first if needed.
    fn insert_vacant(&mut self, key: String, value: Value) -> Result<(), CapacityOverflow> {
        self.reserve_for_insert()?;
        let index = self.slot_for(&key);
        self.slots[index] = Some(Entry { key, value });
        self.count += 1;
        Ok(())
    }

    /// Iterates the live entries in slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Index of the slot holding `key`, or of the first empty slot on its
    /// probe path. Requires a non-empty slot array and at least one free
    /// slot, both guaranteed by the growth policy.
    fn slot_for(&self, key: &str) -> usize {
        let capacity = self.slots.len();
        let mut index = (fnv1a(key) % capacity as u64) as usize;
        loop {
            match &self.slots[index] {
                None => return index,
                Some(entry) if entry.key == key => return index,
                Some(_) => index = (index + 1) % capacity,
            }
        }
    }

    fn reserve_for_insert(&mut self) -> Result<(), CapacityOverflow> {
        // Grow past the load threshold, and never let the table fill
        // completely: probing relies on at least one empty slot.
        let capacity = self.slots.len();
        if capacity == 0 || self.count + 1 == capacity || self.count * 4 > capacity * 3 {
            self.grow()?;
        }
        Ok(())
    }

    /// Grows to `max(16, 2 * capacity)` and rehashes every live entry.
    /// Keys are unique, so each probe during rehash lands on an empty slot.
    fn grow(&mut self) -> Result<(), CapacityOverflow> {
        let doubled = self.slots.len().checked_mul(2).ok_or(CapacityOverflow)?;
        let new_capacity = core::cmp::max(16, doubled);
        let old = core::mem::replace(&mut self.slots, vec![None; new_capacity]);
        for entry in old.into_iter().flatten() {
            let index = self.slot_for(&entry.key);
            self.slots[index] = Some(entry);
        }
        Ok(())
    }
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same key set, equal values. Slot layout and
/// capacity are representation details and do not participate.
impl PartialEq for ObjectTable {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl fmt::Debug for ObjectTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over `(&key, &value)` pairs in slot order.
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, Option<Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .flatten()
            .map(|entry| (entry.key.as_str(), &entry.value))
            .next()
    }
}

impl<'a> IntoIterator for &'a ObjectTable {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
