mod hash_table;
pub mod linked_list;

pub use hash_table::{HashTable, Items};
pub use linked_list::List;

use thiserror::Error;

/// A key-value pair living in one bucket chain
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// The key was not present where it was expected to be.
///
/// Returned by [`HashTable::get`] and [`HashTable::delete`]; whether
/// absence is acceptable is the caller's call, the table never
/// falls back to a default or treats a missing delete as a no-op.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("key not found")]
pub struct KeyNotFound;
