//! Route Planner (exact TSP).
//!
//! Computes the exact shortest closed delivery tour over a set of
//! locations: start at the depot (index 0), visit every stop exactly
//! once, return to the depot. Bitmask dynamic programming over
//! (visited set, current stop) states, with the memo held in a flat
//! 2^n × n arena rather than a hashed map.
//!
//! Exponential in the number of stops, so only tractable for the small
//! stop lists a single vehicle dispatch produces (tens of locations at
//! most). That boundary is explicit; callers bound the input size.
//!
//! Distances need not be symmetric and need not satisfy the triangle
//! inequality.
//!
//! # References
//!
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem"
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing
//!   Problems"

mod runner;
mod types;

pub use runner::{RouteResult, Router};
pub use types::{DistanceMatrix, Location, RouteError};
