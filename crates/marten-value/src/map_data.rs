//! Backing data structures for map and set values.
//!
//! Insertion-ordered storage with tombstone-based deletion, plus a
//! `MapKey → index` hash map for O(1) lookup. Updating an existing key
//! rewrites its entry in place, so insertion order is preserved and a later
//! insertion under the same key wins.

use crate::key::MapKey;
use crate::value::Value;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

// ============================================================================
// MapData
// ============================================================================

/// Internal storage for a map.
///
/// Entries are stored in a `Vec` in insertion order. Deleted entries become
/// `None` (tombstones) so live positions never shift.
pub struct MapData {
    inner: Mutex<MapDataInner>,
}

struct MapDataInner {
    /// Insertion-ordered entries. `None` = tombstone (deleted).
    entries: Vec<Option<(MapKey, Value)>>,
    /// Key → index in `entries` for O(1) lookup.
    index: FxHashMap<MapKey, usize>,
    /// Count of live (non-None) entries.
    size: usize,
}

impl Default for MapData {
    fn default() -> Self {
        Self::new()
    }
}

impl MapData {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MapDataInner {
                entries: Vec::new(),
                index: FxHashMap::default(),
                size: 0,
            }),
        }
    }

    /// Number of live entries.
    pub fn size(&self) -> usize {
        self.inner.lock().size
    }

    /// Get the value associated with `key`, or `None`.
    pub fn get(&self, key: &MapKey) -> Option<Value> {
        let inner = self.inner.lock();
        if let Some(&idx) = inner.index.get(key)
            && let Some(Some((_, v))) = inner.entries.get(idx)
        {
            return Some(v.clone());
        }
        None
    }

    /// Returns `true` if `key` exists.
    pub fn has(&self, key: &MapKey) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    /// Insert or update `key` → `value`. Returns `true` if this was an update.
    pub fn set(&self, key: MapKey, value: Value) -> bool {
        let mut inner = self.inner.lock();
        if let Some(&idx) = inner.index.get(&key) {
            // Update existing entry in-place (preserves insertion order)
            inner.entries[idx] = Some((key, value));
            true
        } else {
            // Append new entry
            let idx = inner.entries.len();
            inner.index.insert(key.clone(), idx);
            inner.entries.push(Some((key, value)));
            inner.size += 1;
            false
        }
    }

    /// Delete `key`. Returns `true` if it existed.
    pub fn delete(&self, key: &MapKey) -> bool {
        let mut inner = self.inner.lock();
        if let Some(idx) = inner.index.remove(key) {
            inner.entries[idx] = None; // tombstone
            inner.size -= 1;
            true
        } else {
            false
        }
    }

    /// Remove all entries.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.index.clear();
        inner.size = 0;
    }

    /// Snapshot of all live entries in insertion order.
    ///
    /// The lock is released before the snapshot is returned, so callers may
    /// recurse into entries (which can alias this very map) while iterating.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        let inner = self.inner.lock();
        let mut result = Vec::with_capacity(inner.size);
        for (k, v) in inner.entries.iter().flatten() {
            result.push((k.value().clone(), v.clone()));
        }
        result
    }
}

impl std::fmt::Debug for MapData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MapData(size={})", self.size())
    }
}

// ============================================================================
// SetData
// ============================================================================

/// Internal storage for a set.
///
/// Same tombstone-based design as [`MapData`], but stores only members.
pub struct SetData {
    inner: Mutex<SetDataInner>,
}

struct SetDataInner {
    entries: Vec<Option<MapKey>>,
    index: FxHashMap<MapKey, usize>,
    size: usize,
}

impl Default for SetData {
    fn default() -> Self {
        Self::new()
    }
}

impl SetData {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SetDataInner {
                entries: Vec::new(),
                index: FxHashMap::default(),
                size: 0,
            }),
        }
    }

    /// Number of live members.
    pub fn size(&self) -> usize {
        self.inner.lock().size
    }

    /// Returns `true` if `key` is a member.
    pub fn has(&self, key: &MapKey) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    /// Add a member. Returns `true` if it was already present (no-op).
    pub fn add(&self, key: MapKey) -> bool {
        let mut inner = self.inner.lock();
        if inner.index.contains_key(&key) {
            return true; // already present
        }
        let idx = inner.entries.len();
        inner.index.insert(key.clone(), idx);
        inner.entries.push(Some(key));
        inner.size += 1;
        false
    }

    /// Delete `key`. Returns `true` if it was a member.
    pub fn delete(&self, key: &MapKey) -> bool {
        let mut inner = self.inner.lock();
        if let Some(idx) = inner.index.remove(key) {
            inner.entries[idx] = None;
            inner.size -= 1;
            true
        } else {
            false
        }
    }

    /// Remove all members.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.index.clear();
        inner.size = 0;
    }

    /// Snapshot of all live members in insertion order.
    pub fn members(&self) -> Vec<Value> {
        let inner = self.inner.lock();
        let mut result = Vec::with_capacity(inner.size);
        for k in inner.entries.iter().flatten() {
            result.push(k.value().clone());
        }
        result
    }
}

impl std::fmt::Debug for SetData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SetData(size={})", self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListData;

    #[test]
    fn test_map_insertion_order() {
        let map = MapData::new();
        map.set(MapKey(Value::from("b")), Value::Int(2));
        map.set(MapKey(Value::from("a")), Value::Int(1));
        map.set(MapKey(Value::from("c")), Value::Int(3));

        let keys: Vec<_> = map.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![Value::from("b"), Value::from("a"), Value::from("c")]
        );
    }

    #[test]
    fn test_map_update_keeps_order() {
        let map = MapData::new();
        map.set(MapKey(Value::from("a")), Value::Int(1));
        map.set(MapKey(Value::from("b")), Value::Int(2));
        assert!(map.set(MapKey(Value::from("a")), Value::Int(10)));

        assert_eq!(map.size(), 2);
        let entries = map.entries();
        assert_eq!(entries[0], (Value::from("a"), Value::Int(10)));
        assert_eq!(entries[1], (Value::from("b"), Value::Int(2)));
    }

    #[test]
    fn test_map_delete_tombstones() {
        let map = MapData::new();
        map.set(MapKey(Value::Int(1)), Value::from("one"));
        map.set(MapKey(Value::Int(2)), Value::from("two"));
        map.set(MapKey(Value::Int(3)), Value::from("three"));

        assert!(map.delete(&MapKey(Value::Int(2))));
        assert!(!map.delete(&MapKey(Value::Int(2))));
        assert_eq!(map.size(), 2);
        assert!(!map.has(&MapKey(Value::Int(2))));

        let keys: Vec<_> = map.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Value::Int(1), Value::Int(3)]);
    }

    #[test]
    fn test_map_container_keys_are_distinct() {
        let map = MapData::new();
        let k1 = Value::list(ListData::with_elements(vec![Value::Int(1)]));
        let k2 = Value::list(ListData::with_elements(vec![Value::Int(1)]));
        map.set(MapKey(k1.clone()), Value::from("first"));
        map.set(MapKey(k2), Value::from("second"));

        assert_eq!(map.size(), 2);
        assert_eq!(map.get(&MapKey(k1)), Some(Value::from("first")));
    }

    #[test]
    fn test_set_dedup_and_order() {
        let set = SetData::new();
        assert!(!set.add(MapKey(Value::Int(1))));
        assert!(!set.add(MapKey(Value::Int(2))));
        assert!(set.add(MapKey(Value::Int(1)))); // already present

        assert_eq!(set.size(), 2);
        assert_eq!(set.members(), vec![Value::Int(1), Value::Int(2)]);

        assert!(set.delete(&MapKey(Value::Int(1))));
        assert_eq!(set.members(), vec![Value::Int(2)]);
    }
}
