//! Dispatch-side order cache.
//!
//! A fixed-size hashed-bucket store with linear chaining, used by the
//! dispatch layer as an O(1) cache of order details keyed by order id.
//! It is a cache, not an algorithmic core: the sequencing, packing, and
//! routing algorithms never call it, and it never calls them.
//!
//! The contract is deliberately small: `put` upserts a record under its
//! key, `get` returns the stored record or nothing.

mod index;

pub use index::OrderIndex;
