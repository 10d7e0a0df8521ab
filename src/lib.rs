//! Delivery dispatch optimization kernel.
//!
//! Pure, stateless combinatorial algorithms invoked on snapshots of
//! pending orders to produce dispatch sequencing, vehicle-loading
//! selection, and route plans:
//!
//! - **Priority Sequencer**: stable merge sort of an order snapshot by a
//!   derived urgency score (express deliveries and premium members
//!   first) or by any numeric field.
//! - **Capacity Packer**: 0/1 knapsack selection of orders under a
//!   vehicle weight budget, maximizing carried value.
//! - **Route Planner**: exact shortest closed tour over delivery
//!   locations via bitmask dynamic programming, starting and ending at
//!   the depot.
//!
//! # Architecture
//!
//! The three algorithms are independent: none calls the others, there is
//! no required call ordering, and any subset may run concurrently from
//! multiple callers. Every call is a pure function of caller-supplied
//! snapshots: the DP tables and the sort recursion are call-scoped, and
//! the kernel owns no long-lived state and performs no I/O. The dispatch
//! layer that surrounds it (storage, sessions, request handling) builds
//! the snapshots, picks the algorithm, and consumes the result; it is
//! deliberately outside this crate.
//!
//! The `lookup` module is the one exception to "algorithms only": it
//! carries the dispatch-side order cache behind its `put`/`get`
//! contract. The three core algorithms never touch it.

pub mod lookup;
pub mod order;
pub mod packer;
pub mod router;
pub mod sequencer;
