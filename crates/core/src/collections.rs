//! Container payloads behind the composite Value kinds
//!
//! - [`OrderedMap`]: entries in first-insertion order plus an index from
//!   canonical key encoding to position. Updating an existing key keeps its
//!   position.
//! - [`OrderedSet`]: the same layout without values.
//! - [`Record`]: named fields. Field order is not part of the contract.
//! - [`PriorityHeap`]: min-heap on a [`Number`] priority, compared exactly
//!   (Int against Float without rounding). Ties pop in push order, using a
//!   sequence number assigned at push time, so pop order never depends on
//!   `BinaryHeap`'s internal tie behavior.
//!
//! Array and Deque need no wrapper: they are `Vec<Value>` and
//! `VecDeque<Value>`.
//!
//! Every mutating method encodes its key before touching the container, so
//! an `UnhashableKey` failure leaves the container unchanged.

use crate::error::RuntimeResult;
use crate::key::{KeyBytes, encode_key};
use crate::value::{Number, Value};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

#[derive(Debug, Clone, Default)]
pub struct OrderedMap {
    entries: Vec<(Value, Value)>,
    index: HashMap<KeyBytes, usize>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or update
    ///
    /// A new key is appended; an existing key keeps its position and its
    /// original key value, only the mapped value changes.
    pub fn insert(&mut self, key: Value, value: Value) -> RuntimeResult<()> {
        let encoded = encode_key(&key)?;
        match self.index.get(&encoded) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(encoded, self.entries.len());
                self.entries.push((key, value));
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &Value) -> RuntimeResult<Option<&Value>> {
        let encoded = encode_key(key)?;
        Ok(self.index.get(&encoded).map(|&pos| &self.entries[pos].1))
    }

    pub fn contains_key(&self, key: &Value) -> RuntimeResult<bool> {
        let encoded = encode_key(key)?;
        Ok(self.index.contains_key(&encoded))
    }

    /// Remove a key, returning its value
    ///
    /// Entries after the removed one shift down; relative order is kept.
    pub fn remove(&mut self, key: &Value) -> RuntimeResult<Option<Value>> {
        let encoded = encode_key(key)?;
        let Some(pos) = self.index.remove(&encoded) else {
            return Ok(None);
        };
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(Some(value))
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<Value>,
    index: HashMap<KeyBytes, usize>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a member; returns false if it was already present
    pub fn insert(&mut self, item: Value) -> RuntimeResult<bool> {
        let encoded = encode_key(&item)?;
        if self.index.contains_key(&encoded) {
            return Ok(false);
        }
        self.index.insert(encoded, self.items.len());
        self.items.push(item);
        Ok(true)
    }

    pub fn contains(&self, item: &Value) -> RuntimeResult<bool> {
        let encoded = encode_key(item)?;
        Ok(self.index.contains_key(&encoded))
    }

    /// Remove a member; returns false if it was absent
    pub fn remove(&mut self, item: &Value) -> RuntimeResult<bool> {
        let encoded = encode_key(item)?;
        let Some(pos) = self.index.remove(&encoded) else {
            return Ok(false);
        };
        self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(true)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Order-independent comparison of member encodings
    pub fn same_members(&self, other: &OrderedSet) -> bool {
        self.index.len() == other.index.len()
            && self.index.keys().all(|k| other.index.contains_key(k))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[derive(Debug, Clone)]
struct HeapEntry {
    priority: Number,
    seq: u64,
    value: Value,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Reversed: BinaryHeap is a max-heap, we want the smallest
    // (priority, seq) on top.
    fn cmp(&self, other: &Self) -> Ordering {
        priority_cmp(other.priority, self.priority).then_with(|| other.seq.cmp(&self.seq))
    }
}

// Exact numeric order; NaN falls back to the f64 total order so the heap
// still sees a consistent ordering.
fn priority_cmp(a: Number, b: Number) -> Ordering {
    a.compare(b)
        .unwrap_or_else(|| a.as_f64().total_cmp(&b.as_f64()))
}

#[derive(Debug, Clone, Default)]
pub struct PriorityHeap {
    heap: BinaryHeap<HeapEntry>,
    next_seq: u64,
}

impl PriorityHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, priority: Number, value: Value) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry {
            priority,
            seq,
            value,
        });
    }

    /// Remove the lowest-priority value (earliest push among ties)
    pub fn pop(&mut self) -> Option<Value> {
        self.heap.pop().map(|entry| entry.value)
    }

    pub fn peek(&self) -> Option<&Value> {
        self.heap.peek().map(|entry| &entry.value)
    }
}
