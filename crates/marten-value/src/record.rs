//! Backing storage for record values.

use crate::value::Value;
use indexmap::IndexMap;
use parking_lot::Mutex;

/// Internal storage for a record: a plain string-keyed structure whose own
/// keys iterate in insertion order. Overwriting an existing key keeps its
/// original slot.
pub struct RecordData {
    props: Mutex<IndexMap<String, Value>>,
}

impl RecordData {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            props: Mutex::new(IndexMap::new()),
        }
    }

    /// Number of own keys.
    pub fn len(&self) -> usize {
        self.props.lock().len()
    }

    /// Returns `true` if the record has no keys.
    pub fn is_empty(&self) -> bool {
        self.props.lock().is_empty()
    }

    /// Get the value stored under `key`, or `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.props.lock().get(key).cloned()
    }

    /// Returns `true` if `key` is an own key.
    pub fn has(&self, key: &str) -> bool {
        self.props.lock().contains_key(key)
    }

    /// Insert or overwrite `key` → `value`. Returns `true` if this was an
    /// overwrite.
    pub fn set(&self, key: impl Into<String>, value: Value) -> bool {
        self.props.lock().insert(key.into(), value).is_some()
    }

    /// Remove `key`, preserving the order of the remaining keys.
    /// Returns `true` if it existed.
    pub fn delete(&self, key: &str) -> bool {
        self.props.lock().shift_remove(key).is_some()
    }

    /// Snapshot of own keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.props.lock().keys().cloned().collect()
    }

    /// Snapshot of all entries in insertion order.
    ///
    /// The lock is released before the snapshot is returned, so callers may
    /// recurse into values (which can alias this very record) while iterating.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.props
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Default for RecordData {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecordData(len={})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let record = RecordData::new();
        record.set("z", Value::Int(1));
        record.set("a", Value::Int(2));
        record.set("m", Value::Int(3));
        assert_eq!(record.keys(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_overwrite_keeps_slot() {
        let record = RecordData::new();
        record.set("a", Value::Int(1));
        record.set("b", Value::Int(2));
        assert!(record.set("a", Value::Int(10)));

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(Value::Int(10)));
    }

    #[test]
    fn test_get_has_delete() {
        let record = RecordData::new();
        assert!(record.is_empty());
        record.set("x", Value::Bool(true));

        assert!(record.has("x"));
        assert!(!record.has("y"));
        assert_eq!(record.get("y"), None);

        assert!(record.delete("x"));
        assert!(!record.delete("x"));
        assert!(record.is_empty());
    }
}
