//! Priority Sequencer.
//!
//! Orders a snapshot of pending orders by a derived urgency score, or by
//! any numeric field, using a stable divide-and-conquer merge sort.
//! Express deliveries outrank standard ones; within the same tier,
//! premium members outrank non-members; orders that tie keep their
//! original relative order, so the dispatch queue never reshuffles
//! equals between refreshes.
//!
//! # References
//!
//! - Knuth (1998), *The Art of Computer Programming*, Vol. 3, §5.2.4
//!   (merging and stability)

mod runner;
mod types;

pub use runner::Sequencer;
pub use types::{SortError, SortKey};
