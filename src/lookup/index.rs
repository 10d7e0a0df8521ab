//! Hashed-bucket order store.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

struct Entry<V> {
    key: u64,
    record: V,
}

/// Fixed-size hashed-bucket store of order records.
///
/// Keys hash into one of a fixed number of buckets; collisions chain
/// linearly within the bucket. `put` upserts (a repeated key replaces
/// the stored record), `get` walks the chain.
///
/// Generic over the record type so the dispatch layer can store
/// whatever serialized shape it likes.
///
/// # Examples
///
/// ```
/// use dispatch_opt::lookup::OrderIndex;
///
/// let mut index = OrderIndex::new();
/// index.put(4711, "2 x Organic Bananas");
/// index.put(4711, "3 x Organic Bananas"); // upsert
///
/// assert_eq!(index.get(4711), Some(&"3 x Organic Bananas"));
/// assert_eq!(index.get(9999), None);
/// ```
pub struct OrderIndex<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

impl<V> OrderIndex<V> {
    /// Default bucket-table size.
    pub const DEFAULT_BUCKETS: usize = 100;

    /// Creates an index with [`DEFAULT_BUCKETS`](Self::DEFAULT_BUCKETS)
    /// buckets.
    pub fn new() -> Self {
        Self::with_buckets(Self::DEFAULT_BUCKETS)
    }

    /// Creates an index with a fixed number of buckets (at least one).
    pub fn with_buckets(count: usize) -> Self {
        let count = count.max(1);
        Self {
            buckets: (0..count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Inserts or replaces the record stored under `order_id`.
    pub fn put(&mut self, order_id: u64, record: V) {
        let bucket = self.bucket_of(order_id);
        let chain = &mut self.buckets[bucket];

        if let Some(entry) = chain.iter_mut().find(|e| e.key == order_id) {
            entry.record = record;
        } else {
            chain.push(Entry {
                key: order_id,
                record,
            });
            self.len += 1;
        }
    }

    /// Returns the record stored under `order_id`, or `None`.
    pub fn get(&self, order_id: u64) -> Option<&V> {
        self.buckets[self.bucket_of(order_id)]
            .iter()
            .find(|e| e.key == order_id)
            .map(|e| &e.record)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_of(&self, key: u64) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }
}

impl<V> Default for OrderIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
