//! Backing storage for list values.

use crate::value::Value;
use parking_lot::Mutex;

/// Internal storage for a list: dense, ordered, integer-indexed.
///
/// Elements live behind a mutex so aliased handles observe each other's
/// mutations. The lock is never held across calls back into user values;
/// readers that need to traverse take a snapshot via [`ListData::elements`].
pub struct ListData {
    elements: Mutex<Vec<Value>>,
}

impl ListData {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            elements: Mutex::new(Vec::new()),
        }
    }

    /// Create a list from existing elements.
    pub fn with_elements(elements: Vec<Value>) -> Self {
        Self {
            elements: Mutex::new(elements),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.lock().len()
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.lock().is_empty()
    }

    /// Get the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.elements.lock().get(index).cloned()
    }

    /// Replace the element at `index`. Returns `false` if out of bounds.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut elements = self.elements.lock();
        match elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Append an element.
    pub fn push(&self, value: Value) {
        self.elements.lock().push(value);
    }

    /// Snapshot of all elements in index order.
    ///
    /// The lock is released before the snapshot is returned, so callers may
    /// recurse into elements (which can alias this very list) while iterating.
    pub fn elements(&self) -> Vec<Value> {
        self.elements.lock().clone()
    }
}

impl Default for ListData {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ListData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListData(len={})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_get_set() {
        let list = ListData::new();
        assert!(list.is_empty());

        list.push(Value::Int(1));
        list.push(Value::from("two"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(Value::Int(1)));
        assert_eq!(list.get(1), Some(Value::from("two")));
        assert_eq!(list.get(2), None);

        assert!(list.set(0, Value::Bool(true)));
        assert_eq!(list.get(0), Some(Value::Bool(true)));
        assert!(!list.set(5, Value::Null));
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let list = ListData::with_elements(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
        ]);
        let snapshot = list.elements();
        assert_eq!(snapshot, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

        // Mutating after the snapshot does not affect it.
        list.push(Value::Int(4));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(list.len(), 4);
    }
}
