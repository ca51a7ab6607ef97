//! Key semantics for maps and sets.
//!
//! Map and set keys use SameValueZero-style equality: `NaN` equals `NaN`,
//! `-0` equals `+0`, primitives otherwise compare by value, and every
//! reference kind compares by pointer identity. Identity keying for
//! reference kinds is a correctness requirement: two structurally equal but
//! distinct containers must stay two distinct keys.

use crate::value::Value;
use std::hash::{Hash, Hasher};

/// Key equality used by maps and sets: strict equality relaxed so that
/// `NaN` equals `NaN` (`-0 == +0` already holds under `==`).
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64())
        && x.is_nan()
        && y.is_nan()
    {
        return true;
    }
    a == b
}

/// A wrapper around [`Value`] implementing `Hash` and `Eq` with
/// [`same_value_zero`] semantics, for use as a map/set key.
#[derive(Clone)]
pub struct MapKey(pub Value);

impl MapKey {
    /// Returns a reference to the underlying value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the key and returns the underlying value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

// Type discriminant tags for hashing
const HASH_TAG_NULL: u8 = 0;
const HASH_TAG_BOOL: u8 = 1;
const HASH_TAG_NUMBER: u8 = 2;
const HASH_TAG_STRING: u8 = 3;
const HASH_TAG_REFERENCE: u8 = 4;
const HASH_TAG_SYMBOL: u8 = 5;

/// Normalize a float for SameValueZero hashing: -0 → +0, NaN → canonical NaN bits.
fn normalize_float_bits(n: f64) -> u64 {
    if n == 0.0 {
        0u64 // both +0 and -0 hash the same
    } else if n.is_nan() {
        0x7FF8_0000_0000_0000u64 // canonical NaN
    } else {
        n.to_bits()
    }
}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Value::Null => HASH_TAG_NULL.hash(state),
            Value::Bool(b) => {
                HASH_TAG_BOOL.hash(state);
                b.hash(state);
            }
            // Int and Float with the same numeric value must hash the same.
            Value::Int(i) => {
                HASH_TAG_NUMBER.hash(state);
                normalize_float_bits(*i as f64).hash(state);
            }
            Value::Float(n) => {
                HASH_TAG_NUMBER.hash(state);
                normalize_float_bits(*n).hash(state);
            }
            Value::String(s) => {
                HASH_TAG_STRING.hash(state);
                s.hash(state);
            }
            Value::Symbol(sym) => {
                HASH_TAG_SYMBOL.hash(state);
                sym.id().hash(state);
            }
            // Reference kinds hash by payload pointer.
            other => {
                HASH_TAG_REFERENCE.hash(state);
                other.identity().hash(state);
            }
        }
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        same_value_zero(&self.0, &other.0)
    }
}

impl Eq for MapKey {}

impl std::fmt::Debug for MapKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MapKey({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListData;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(key: &MapKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_nan_is_self_equal_as_key() {
        let a = MapKey(Value::Float(f64::NAN));
        let b = MapKey(Value::Float(f64::NAN));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_zero_signs_collapse() {
        let pos = MapKey(Value::Float(0.0));
        let neg = MapKey(Value::Float(-0.0));
        assert_eq!(pos, neg);
        assert_eq!(hash_of(&pos), hash_of(&neg));
    }

    #[test]
    fn test_int_float_same_number_same_key() {
        let int = MapKey(Value::Int(7));
        let float = MapKey(Value::Float(7.0));
        assert_eq!(int, float);
        assert_eq!(hash_of(&int), hash_of(&float));
    }

    #[test]
    fn test_containers_key_by_identity() {
        let a = Value::list(ListData::with_elements(vec![Value::Int(1)]));
        let b = Value::list(ListData::with_elements(vec![Value::Int(1)]));
        let alias = a.clone();

        // Structurally equal but distinct storage: distinct keys.
        assert_ne!(MapKey(a.clone()), MapKey(b));
        // Aliases of the same storage: the same key.
        assert_eq!(MapKey(a.clone()), MapKey(alias.clone()));
        assert_eq!(hash_of(&MapKey(a)), hash_of(&MapKey(alias)));
    }

    #[test]
    fn test_strings_key_by_content() {
        let a = MapKey(Value::from("key"));
        let b = MapKey(Value::from(String::from("key")));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
