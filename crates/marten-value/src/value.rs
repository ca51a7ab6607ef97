//! Dynamic values as a closed tagged enum
//!
//! Every runtime value belongs to exactly one of the kinds below. Container
//! kinds (`List`, `Map`, `Set`, `Record`) and `Timestamp` hold their payload
//! behind an `Arc` with interior mutability, so several values may alias the
//! same underlying storage and mutation through one handle is visible through
//! all of them. That is what makes aliasing and cycles expressible, and it is
//! why the deep cloner keys its visited table by pointer identity.
//!
//! `Function` and `Symbol` exist in the model but are rejected by the cloner.

use crate::function::{NativeFunction, Symbol};
use crate::list::ListData;
use crate::map_data::{MapData, SetData};
use crate::record::RecordData;
use crate::timestamp::Timestamp;
use std::sync::Arc;

/// A dynamic runtime value.
///
/// This type is `Send + Sync`: all shared payloads are behind `Arc` and use
/// lock-based interior mutability.
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Integer primitive.
    Int(i64),
    /// Floating-point primitive.
    Float(f64),
    /// Immutable string primitive. Clones share the same storage.
    String(Arc<str>),
    /// Calendar instant (mutable millisecond epoch offset).
    Timestamp(Arc<Timestamp>),
    /// Ordered, dense, integer-indexed sequence.
    List(Arc<ListData>),
    /// Insertion-ordered mapping; keys may be any value, including containers.
    Map(Arc<MapData>),
    /// Insertion-ordered collection of unique members.
    Set(Arc<SetData>),
    /// Plain string-keyed record with insertion-ordered own keys.
    Record(Arc<RecordData>),
    /// Callable implemented in Rust. Not cloneable.
    Function(Arc<NativeFunction>),
    /// Unique opaque token. Not cloneable.
    Symbol(Arc<Symbol>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create a timestamp value.
    pub fn timestamp(ts: Timestamp) -> Self {
        Value::Timestamp(Arc::new(ts))
    }

    /// Create a list value.
    pub fn list(list: ListData) -> Self {
        Value::List(Arc::new(list))
    }

    /// Create a map value.
    pub fn map(map: MapData) -> Self {
        Value::Map(Arc::new(map))
    }

    /// Create a set value.
    pub fn set(set: SetData) -> Self {
        Value::Set(Arc::new(set))
    }

    /// Create a record value.
    pub fn record(record: RecordData) -> Self {
        Value::Record(Arc::new(record))
    }

    /// Create a function value.
    pub fn function(func: NativeFunction) -> Self {
        Value::Function(Arc::new(func))
    }

    /// Create a symbol value.
    pub fn symbol(sym: Symbol) -> Self {
        Value::Symbol(Arc::new(sym))
    }

    /// Check if value is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a boolean.
    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is numeric (integer or float).
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Check if value is a string.
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a timestamp.
    #[inline]
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    /// Check if value is one of the container kinds.
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::List(_) | Value::Map(_) | Value::Set(_) | Value::Record(_)
        )
    }

    /// Check if value is callable.
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Get as boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the numeric value as f64 (integers widen).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as timestamp.
    pub fn as_timestamp(&self) -> Option<&Arc<Timestamp>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Get as list.
    pub fn as_list(&self) -> Option<&Arc<ListData>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get as map.
    pub fn as_map(&self) -> Option<&Arc<MapData>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get as set.
    pub fn as_set(&self) -> Option<&Arc<SetData>> {
        match self {
            Value::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Get as record.
    pub fn as_record(&self) -> Option<&Arc<RecordData>> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Get as function.
    pub fn as_function(&self) -> Option<&Arc<NativeFunction>> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Get as symbol.
    pub fn as_symbol(&self) -> Option<&Arc<Symbol>> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Pointer identity of the shared payload, for reference kinds.
    ///
    /// Two values return the same identity exactly when they alias the same
    /// underlying storage. Primitives have no identity.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_) => None,
            Value::Timestamp(ts) => Some(Arc::as_ptr(ts) as usize),
            Value::List(l) => Some(Arc::as_ptr(l) as usize),
            Value::Map(m) => Some(Arc::as_ptr(m) as usize),
            Value::Set(s) => Some(Arc::as_ptr(s) as usize),
            Value::Record(r) => Some(Arc::as_ptr(r) as usize),
            Value::Function(f) => Some(Arc::as_ptr(f) as usize),
            Value::Symbol(s) => Some(Arc::as_ptr(s) as usize),
        }
    }

    /// Check whether two values alias the same underlying storage.
    pub fn same_reference(&self, other: &Value) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Get the kind name (for diagnostics and errors).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Record(_) => "record",
            Value::Function(_) => "function",
            Value::Symbol(_) => "symbol",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Timestamp(ts) => write!(f, "{}", ts),
            // Containers render shallowly; the payload may be cyclic.
            Value::List(l) => write!(f, "[list; {}]", l.len()),
            Value::Map(m) => write!(f, "[map; {}]", m.size()),
            Value::Set(s) => write!(f, "[set; {}]", s.size()),
            Value::Record(r) => write!(f, "[record; {}]", r.len()),
            Value::Function(func) => match func.name() {
                Some(name) => write!(f, "[function {}]", name),
                None => write!(f, "[function]"),
            },
            Value::Symbol(sym) => match sym.description() {
                Some(desc) => write!(f, "Symbol({})", desc),
                None => write!(f, "Symbol()"),
            },
        }
    }
}

/// Strict equality: primitives by value, reference kinds by identity.
///
/// `Int` and `Float` compare numerically; `NaN != NaN` per IEEE 754.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => Arc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Arc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::Symbol(a), Value::Symbol(b)) => a.id() == b.id(),
            _ => false,
        }
    }
}
