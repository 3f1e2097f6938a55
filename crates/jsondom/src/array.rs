//! Ordered container backing JSON array values.
//!
//! Elements live in one contiguous, amortized-doubling buffer. The grammar
//! only ever appends and tears the whole structure down, so the surface is
//! deliberately narrow: append, indexed read, replace-in-place, and forward
//! iteration in insertion order.

use alloc::vec::Vec;
use core::fmt;

use crate::value::Value;

/// An insertion-ordered sequence of [`Value`]s.
///
/// # Examples
///
/// ```
/// use jsondom::{ArrayList, Value};
///
/// let mut list = ArrayList::new();
/// list.push(Value::Boolean(true));
/// list.push(Value::Null);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1), Some(&Value::Null));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct ArrayList {
    items: Vec<Value>,
}

impl ArrayList {
    /// An empty container; no storage is allocated until the first append.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// An empty container with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if no elements are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// The element at `index`, or `None` out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Mutable variant of [`get`](Self::get).
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Replaces the element at `index`, returning the displaced value.
    ///
    /// Replacement never extends the sequence: out of range, `None` is
    /// returned and `value` is discarded.
    pub fn set(&mut self, index: usize, value: Value) -> Option<Value> {
        let slot = self.items.get_mut(index)?;
        Some(core::mem::replace(slot, value))
    }

    /// Forward iteration in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Value>> for ArrayList {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for ArrayList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for ArrayList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ArrayList {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ArrayList {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
