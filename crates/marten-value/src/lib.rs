//! # Marten Value
//!
//! A dynamic value model with cyclic-safe deep cloning.
//!
//! [`deep_clone`] produces a fully independent copy of a [`Value`]: every
//! reachable container is freshly allocated, internal aliasing and cycles are
//! preserved rather than unfolded, and non-cloneable kinds (functions,
//! symbols) are rejected with [`CloneError::UnsupportedType`].
//!
//! ```
//! use marten_value::{deep_clone, ListData, Value};
//! use std::sync::Arc;
//!
//! // A list that contains itself
//! let list = Arc::new(ListData::new());
//! list.push(Value::List(list.clone()));
//!
//! let cloned = deep_clone(&Value::List(list.clone())).unwrap();
//! // The clone's first slot is the clone itself
//! assert!(cloned.as_list().unwrap().get(0).unwrap().same_reference(&cloned));
//! # list.set(0, Value::Null);
//! # cloned.as_list().unwrap().set(0, Value::Null);
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod deep_clone;
pub mod error;
pub mod function;
pub mod key;
pub mod list;
pub mod map_data;
pub mod record;
pub mod timestamp;
pub mod value;

pub use deep_clone::{DeepCloner, deep_clone};
pub use error::{CloneError, CloneResult};
pub use function::{NativeFn, NativeFunction, Symbol};
pub use key::{MapKey, same_value_zero};
pub use list::ListData;
pub use map_data::{MapData, SetData};
pub use record::RecordData;
pub use timestamp::Timestamp;
pub use value::Value;
