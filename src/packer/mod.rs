//! Capacity Packer (0/1 knapsack).
//!
//! Selects the subset of pending orders that maximizes carried value
//! without exceeding a vehicle's weight budget, via bottom-up dynamic
//! programming over integer-scaled weights.
//!
//! # Fail-soft contract
//!
//! A snapshot containing any malformed record (non-finite or negative
//! weight/value) degrades the whole call to the empty selection:
//! never a panic, never a best-effort partial pack. Callers treat
//! "pack nothing" as the safe answer to bad input.
//!
//! # References
//!
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 2

mod config;
mod runner;

pub use config::PackerConfig;
pub use runner::{PackResult, Packer};
