//! Recursive deep cloning.
//!
//! Produces a fully independent copy of a value: every reachable container is
//! freshly allocated, while aliasing and cycles inside the source are
//! reproduced in the clone rather than unfolded.
//!
//! Key properties:
//! - Handles cyclic structures (a container reachable from itself).
//! - Preserves shared-structure identity within one clone operation.
//! - Fails on non-cloneable values (functions, symbols).
//!
//! The load-bearing rule is *register before populate*: every container
//! helper allocates the empty clone, records it in the visited table under
//! the source's pointer identity, and only then recurses into children. A
//! child that aliases the container (a cycle) resolves through the table
//! instead of recursing forever.

use crate::error::{CloneError, CloneResult};
use crate::key::MapKey;
use crate::list::ListData;
use crate::map_data::{MapData, SetData};
use crate::record::RecordData;
use crate::timestamp::Timestamp;
use crate::value::Value;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Performs recursive deep cloning with cycle and aliasing tracking.
///
/// The visited table lives exactly as long as the cloner: one top-level
/// [`deep_clone`] call builds a fresh cloner, so independent calls never
/// share state. Reusing one `DeepCloner` across several `clone_value` calls
/// is allowed and makes the clones share structure with each other, which is
/// almost never what a caller wants.
pub struct DeepCloner {
    /// Source pointer identity → its in-progress or completed clone.
    memory: FxHashMap<usize, Value>,
}

impl DeepCloner {
    /// Create a cloner with an empty visited table.
    pub fn new() -> Self {
        Self {
            memory: FxHashMap::default(),
        }
    }

    /// Deep-clone `value`.
    pub fn clone_value(&mut self, value: &Value) -> CloneResult<Value> {
        match value {
            // Primitives are immutable or value-semantic: no allocation.
            // Strings share their immutable storage.
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_) => Ok(value.clone()),

            // A fresh instance carrying the same instant. Timestamps are not
            // registered in the visited table: aliased timestamps clone to
            // distinct instances.
            Value::Timestamp(ts) => Ok(Value::timestamp(Timestamp::from_epoch_millis(
                ts.epoch_millis(),
            ))),

            Value::List(list) => self.clone_list(list),
            Value::Map(map) => self.clone_map(map),
            Value::Set(set) => self.clone_set(set),
            Value::Record(record) => self.clone_record(record),

            Value::Function(_) | Value::Symbol(_) => {
                debug!(kind = value.kind_name(), "rejecting non-cloneable value");
                Err(CloneError::UnsupportedType(value.kind_name()))
            }
        }
    }

    fn clone_list(&mut self, list: &Arc<ListData>) -> CloneResult<Value> {
        let ptr = Arc::as_ptr(list) as usize;

        // Cycle or alias: reuse the clone made on first visit.
        if let Some(cloned) = self.memory.get(&ptr) {
            return Ok(cloned.clone());
        }

        let new_list = Arc::new(ListData::new());
        let new_value = Value::List(new_list.clone());

        // Register before populating (required for self-referential lists)
        self.memory.insert(ptr, new_value.clone());

        for element in list.elements() {
            let cloned_element = self.clone_value(&element)?;
            new_list.push(cloned_element);
        }

        Ok(new_value)
    }

    fn clone_map(&mut self, map: &Arc<MapData>) -> CloneResult<Value> {
        let ptr = Arc::as_ptr(map) as usize;

        if let Some(cloned) = self.memory.get(&ptr) {
            return Ok(cloned.clone());
        }

        let new_map = Arc::new(MapData::new());
        let new_value = Value::Map(new_map.clone());

        // Register before populating
        self.memory.insert(ptr, new_value.clone());

        // Both key and value are cloned. If two cloned keys collide under the
        // map's key semantics, the later entry wins.
        for (key, val) in map.entries() {
            let cloned_key = self.clone_value(&key)?;
            let cloned_val = self.clone_value(&val)?;
            new_map.set(MapKey(cloned_key), cloned_val);
        }

        Ok(new_value)
    }

    fn clone_set(&mut self, set: &Arc<SetData>) -> CloneResult<Value> {
        let ptr = Arc::as_ptr(set) as usize;

        if let Some(cloned) = self.memory.get(&ptr) {
            return Ok(cloned.clone());
        }

        let new_set = Arc::new(SetData::new());
        let new_value = Value::Set(new_set.clone());

        // Register before populating
        self.memory.insert(ptr, new_value.clone());

        // Distinct members that clone to equal keys collapse under the set's
        // dedup rules; that is expected, not a defect.
        for member in set.members() {
            let cloned_member = self.clone_value(&member)?;
            new_set.add(MapKey(cloned_member));
        }

        Ok(new_value)
    }

    fn clone_record(&mut self, record: &Arc<RecordData>) -> CloneResult<Value> {
        let ptr = Arc::as_ptr(record) as usize;

        if let Some(cloned) = self.memory.get(&ptr) {
            return Ok(cloned.clone());
        }

        let new_record = Arc::new(RecordData::new());
        let new_value = Value::Record(new_record.clone());

        // Register before populating
        self.memory.insert(ptr, new_value.clone());

        // Own keys only, in insertion order.
        for (key, val) in record.entries() {
            let cloned_val = self.clone_value(&val)?;
            new_record.set(key, cloned_val);
        }

        Ok(new_value)
    }
}

impl Default for DeepCloner {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-clone `value` with a fresh visited table.
///
/// Returns a structurally equivalent, referentially independent value;
/// internal aliasing and cycles are preserved. Fails with
/// [`CloneError::UnsupportedType`] at the first non-cloneable node.
pub fn deep_clone(value: &Value) -> CloneResult<Value> {
    trace!(kind = value.kind_name(), "deep clone");
    DeepCloner::new().clone_value(value)
}
