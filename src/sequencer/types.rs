//! Sort key selection and sequencer errors.

use thiserror::Error;

/// Field an order snapshot is sequenced by.
///
/// `Urgency` sorts most-urgent first; every other key sorts ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Derived urgency score, descending (see
    /// [`OrderRecord::urgency`](crate::order::OrderRecord::urgency)).
    #[default]
    Urgency,

    /// Shipping weight, ascending.
    Weight,

    /// Monetary value, ascending.
    Value,

    /// A named passthrough field, ascending. Every record in the
    /// snapshot must carry the field or the sort fails.
    Extra(String),
}

/// Error sequencing an order snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A record is missing the passthrough field named as the sort key.
    /// The whole sort is aborted; records are never silently skipped.
    #[error("order {order_id} has no field named `{field}`")]
    MissingField {
        /// The requested sort key.
        field: String,
        /// Identifier of the first record missing it.
        order_id: u64,
    },
}
