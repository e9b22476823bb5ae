use std::{
    fmt,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash},
};

use crate::{Entry, KeyNotFound, linked_list};

/// Fixed-capacity hash table with separate chaining.
///
/// Keys hash into one of a fixed number of buckets chosen at
/// construction; colliding keys share a bucket chain and are told
/// apart by a linear scan with an equality check. The table never
/// resizes, so chains grow linearly once the entry count outpaces the
/// bucket count.
#[derive(Debug)]
pub struct HashTable<K, V, S = BuildHasherDefault<DefaultHasher>> {
    buckets: Vec<linked_list::List<Entry<K, V>>>,
    hash_builder: S,
}

impl<K, V> HashTable<K, V> {
    pub const DEFAULT_BUCKET_SIZE: usize = 8;

    /// Creates a table with [`Self::DEFAULT_BUCKET_SIZE`] buckets
    pub fn new() -> Self {
        Self::with_buckets(Self::DEFAULT_BUCKET_SIZE)
    }

    /// Creates a table with `init_size` many buckets
    ///
    /// # Panics
    ///
    /// Panics if `init_size` is zero; a table needs at least one bucket.
    pub fn with_buckets(init_size: usize) -> Self {
        Self::with_hasher(init_size, BuildHasherDefault::default())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Like [`Self::with_buckets`], but hashing keys with `hash_builder`.
    /// Equal keys must produce equal hashes for the table to work.
    pub fn with_hasher(init_size: usize, hash_builder: S) -> Self {
        assert!(init_size > 0, "hash table needs at least one bucket");

        let mut buckets = Vec::with_capacity(init_size);
        for _ in 0..init_size {
            buckets.push(linked_list::List::new());
        }

        Self {
            buckets,
            hash_builder,
        }
    }

    /// Returns the number of buckets, or "slots" of the hash table
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries by summing up the bucket sizes
    pub fn len(&self) -> usize {
        self.buckets.iter().map(linked_list::List::len).sum()
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(linked_list::List::is_empty)
    }

    /// Returns the loadfactor of the hash table
    /// computed as num of items / num of buckets
    pub fn load_factor(&self) -> usize {
        self.len() / self.bucket_count()
    }

    // [adapters]

    /// Visits every `(key, value)` pair in bucket-array order, then
    /// front-to-back within each bucket. No ordering guarantee beyond
    /// that; this is the traversal `keys`, `values` and the `Display`
    /// rendering are built on.
    pub fn items(&self) -> Items<'_, K, V> {
        Items {
            buckets: &self.buckets,
            bucket_idx: 0,
            inner: self.buckets[0].iter(),
        }
    }

    pub fn keys(&self) -> Vec<&K> {
        self.items().map(|(key, _)| key).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.items().map(|(_, value)| value).collect()
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns the index of the bucket `key` belongs to, in
    /// `0..bucket_count`. Stable for the table's lifetime since the
    /// bucket count never changes.
    pub fn bucket_index(&self, key: &K) -> usize {
        self.hash_builder.hash_one(key) as usize % self.buckets.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the value associated with `key`, or [`KeyNotFound`]
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        let i = self.bucket_index(key);
        self.buckets[i]
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
            .ok_or(KeyNotFound)
    }

    /// Inserts or updates `key` with its associated value.
    ///
    /// A stale entry for the key is unlinked before the new pair is
    /// prepended, so at most one entry per key ever lives in the
    /// table. Updating reorders the bucket: the fresh entry sits at
    /// the chain front, which `items` makes observable.
    pub fn set(&mut self, key: K, value: V) {
        let i = self.bucket_index(&key);
        let bucket = &mut self.buckets[i];
        bucket.remove(|entry| entry.key == key);
        bucket.push(Entry { key, value });
    }

    /// Deletes `key` from the table, returning its value.
    /// Deleting an absent key is an error, not a no-op.
    pub fn delete(&mut self, key: &K) -> Result<V, KeyNotFound> {
        let i = self.bucket_index(key);
        self.buckets[i]
            .remove(|entry| entry.key == *key)
            .map(|entry| entry.value)
            .ok_or(KeyNotFound)
    }
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Display for HashTable<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.items().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

pub struct Items<'a, K, V> {
    buckets: &'a [linked_list::List<Entry<K, V>>],
    bucket_idx: usize,
    inner: linked_list::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Items<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.inner.next() {
                return Some((&entry.key, &entry.value));
            }
            if self.bucket_idx == self.buckets.len() - 1 {
                return None;
            }
            self.bucket_idx += 1;
            self.inner = self.buckets[self.bucket_idx].iter();
        }
    }
}

#[cfg(test)]
mod test {
    use super::HashTable;
    use crate::KeyNotFound;

    #[test]
    fn set_then_get() {
        let mut t = HashTable::new();

        t.set("peti", "is a baby");
        t.set("sina", "is a tiny baby");

        assert_eq!(t.get(&"peti"), Ok(&"is a baby"));
        assert_eq!(t.get(&"sina"), Ok(&"is a tiny baby"));
        assert!(t.contains(&"peti"));
        assert_eq!(t.len(), 2);
        dbg!(t);
    }

    #[test]
    fn upsert_keeps_one_entry() {
        let mut t = HashTable::new();

        t.set("foo", "bar");
        assert_eq!(t.len(), 1);

        t.set("foo", "baz");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&"foo"), Ok(&"baz"));
    }

    #[test]
    fn delete() {
        let mut t = HashTable::new();

        t.set("hi", "baby");
        assert_eq!(t.delete(&"hi"), Ok("baby"));
        assert!(!t.contains(&"hi"));
        assert_eq!(t.get(&"hi"), Err(KeyNotFound));
        assert!(t.is_empty());
    }

    #[test]
    fn missing_key_is_an_error() {
        let mut t = HashTable::<&str, i32>::new();

        assert_eq!(t.get(&"???"), Err(KeyNotFound));
        assert_eq!(t.delete(&"???"), Err(KeyNotFound));

        t.set("here", 1);
        assert_eq!(t.get(&"gone"), Err(KeyNotFound));
        assert_eq!(t.delete(&"gone"), Err(KeyNotFound));
    }

    #[test]
    fn len_counts_distinct_keys() {
        let mut t = HashTable::new();

        let keys: Vec<String> = (0..25).map(|i| format!("{i}")).collect();
        for k in &keys {
            t.set(k.clone(), k.clone());
        }
        // overwrite a few, delete one
        t.set("3".to_string(), "three".to_string());
        t.set("7".to_string(), "seven".to_string());
        t.delete(&"12".to_string()).unwrap();

        assert_eq!(t.len(), 24);
        assert_eq!(t.keys().len(), t.len());
        assert_eq!(t.values().len(), t.len());
        assert_eq!(t.items().count(), t.len());
        dbg!(t.load_factor(), t);
    }

    #[test]
    fn bucket_index_is_deterministic() {
        let t = HashTable::<&str, i32>::new();

        let i = t.bucket_index(&"stable");
        assert_eq!(i, t.bucket_index(&"stable"));
        assert!(i < t.bucket_count());
    }

    #[test]
    fn roman_numerals() {
        let mut t = HashTable::new();
        assert_eq!(t.bucket_count(), 8);

        for (k, v) in [("I", 1), ("V", 5), ("X", 10)] {
            t.set(k, v);
        }

        assert_eq!(t.len(), 3);
        assert_eq!(t.get(&"X"), Ok(&10));
        assert!(t.contains(&"X"));

        t.delete(&"I").unwrap();
        assert_eq!(t.len(), 2);
        assert!(!t.contains(&"I"));
        assert_eq!(t.get(&"I"), Err(KeyNotFound));
    }

    #[test]
    fn single_bucket_chains() {
        // one bucket forces every key to collide
        let mut t = HashTable::with_buckets(1);

        t.set("a", 1);
        t.set("b", 2);
        t.set("c", 3);

        assert_eq!(t.len(), 3);
        assert_eq!(t.get(&"a"), Ok(&1));
        assert_eq!(t.get(&"b"), Ok(&2));
        assert_eq!(t.get(&"c"), Ok(&3));
        assert_eq!(t.bucket_index(&"a"), 0);
    }

    #[test]
    fn update_moves_entry_to_chain_front() {
        let mut t = HashTable::with_buckets(1);

        t.set("a", 1);
        t.set("b", 2);
        t.set("a", 3);

        let items: Vec<_> = t.items().collect();
        assert_eq!(items, vec![(&"a", &3), (&"b", &2)]);
    }

    #[test]
    fn display_renders_traversal_order() {
        let mut t = HashTable::with_buckets(1);
        assert_eq!(t.to_string(), "{}");

        t.set("a", 1);
        t.set("b", 2);

        // most recent prepend first
        assert_eq!(t.to_string(), "{b: 2, a: 1}");
    }

    #[test]
    #[should_panic(expected = "at least one bucket")]
    fn zero_buckets_panics() {
        let _ = HashTable::<&str, i32>::with_buckets(0);
    }
}
