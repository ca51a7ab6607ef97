//! The non-cloneable value kinds: callables and symbols.

use crate::value::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Native function handler type.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;

/// A callable implemented in Rust.
///
/// Functions carry behavior, not data, so the deep cloner rejects them.
pub struct NativeFunction {
    name: Option<String>,
    func: NativeFn,
}

impl NativeFunction {
    /// Create a native function with an optional name.
    pub fn new<F>(name: Option<&str>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.map(str::to_string),
            func: Arc::new(f),
        }
    }

    /// The function's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Result<Value, String> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "NativeFunction({})", name),
            None => write!(f, "NativeFunction"),
        }
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A unique opaque token.
///
/// Two symbols are equal only if they are the same symbol; the description
/// is purely diagnostic.
#[derive(Debug)]
pub struct Symbol {
    description: Option<String>,
    id: u64,
}

impl Symbol {
    /// Create a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The symbol's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The symbol's process-unique id.
    pub fn id(&self) -> u64 {
        self.id
    }
}
