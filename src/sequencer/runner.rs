//! Merge sort over order snapshots.

use tracing::debug;

use super::types::{SortError, SortKey};
use crate::order::OrderRecord;

/// Executes the priority sequencing sort.
pub struct Sequencer;

impl Sequencer {
    /// Returns a new vector holding the same records reordered by `key`.
    ///
    /// The input is never mutated. For [`SortKey::Urgency`] the most
    /// urgent record comes first; for every other key the order is
    /// ascending. The sort is stable: records that compare equal keep
    /// their original relative order.
    ///
    /// Snapshots of length 0 or 1 are returned unchanged.
    ///
    /// # Errors
    ///
    /// [`SortError::MissingField`] when `key` is [`SortKey::Extra`] and
    /// any record lacks the named field. Presence is validated up front,
    /// before any splitting, so a failed sort does no partial work.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispatch_opt::order::{DeliveryType, OrderRecord};
    /// use dispatch_opt::sequencer::{Sequencer, SortKey};
    ///
    /// let orders = vec![
    ///     OrderRecord::new(1, DeliveryType::Standard, false, 2.0, 5.0),
    ///     OrderRecord::new(2, DeliveryType::Express, true, 1.0, 10.0),
    /// ];
    ///
    /// let sorted = Sequencer::sort(&orders, &SortKey::Urgency)?;
    /// assert_eq!(sorted[0].id, 2); // express + premium first
    /// # Ok::<(), dispatch_opt::sequencer::SortError>(())
    /// ```
    pub fn sort(orders: &[OrderRecord], key: &SortKey) -> Result<Vec<OrderRecord>, SortError> {
        let keyed = Self::extract_keys(orders, key)?;

        debug!(n = orders.len(), key = ?key, "sequencing order snapshot");

        // Urgency ranks descending; every other key ranks ascending. In
        // both directions a tie keeps the left (earlier) element, which
        // is what makes the merge stable.
        let descending = matches!(key, SortKey::Urgency);
        let sorted = Self::merge_sort(keyed, descending);

        Ok(sorted.into_iter().map(|(_, order)| order).collect())
    }

    /// Pairs each record with its sort key value, failing the whole call
    /// if any record lacks a requested passthrough field.
    fn extract_keys(
        orders: &[OrderRecord],
        key: &SortKey,
    ) -> Result<Vec<(f64, OrderRecord)>, SortError> {
        match key {
            SortKey::Urgency => Ok(orders
                .iter()
                .map(|o| (f64::from(o.urgency()), o.clone()))
                .collect()),
            SortKey::Weight => Ok(orders.iter().map(|o| (o.weight, o.clone())).collect()),
            SortKey::Value => Ok(orders.iter().map(|o| (o.value, o.clone())).collect()),
            SortKey::Extra(name) => orders
                .iter()
                .map(|o| {
                    o.extras
                        .get(name.as_str())
                        .map(|&v| (v, o.clone()))
                        .ok_or_else(|| SortError::MissingField {
                            field: name.clone(),
                            order_id: o.id,
                        })
                })
                .collect(),
        }
    }

    fn merge_sort(mut items: Vec<(f64, OrderRecord)>, descending: bool) -> Vec<(f64, OrderRecord)> {
        if items.len() <= 1 {
            return items;
        }

        // Divide
        let right = items.split_off(items.len() / 2);
        let left = Self::merge_sort(items, descending);
        let right = Self::merge_sort(right, descending);

        // Conquer
        Self::merge(left, right, descending)
    }

    fn merge(
        left: Vec<(f64, OrderRecord)>,
        right: Vec<(f64, OrderRecord)>,
        descending: bool,
    ) -> Vec<(f64, OrderRecord)> {
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        loop {
            let take_left = match (left.peek(), right.peek()) {
                // `>=` / `<=`: on a tie the left side wins, preserving
                // the original relative order of equal keys.
                (Some(l), Some(r)) if descending => l.0 >= r.0,
                (Some(l), Some(r)) => l.0 <= r.0,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            if take_left {
                if let Some(item) = left.next() {
                    merged.push(item);
                }
            } else if let Some(item) = right.next() {
                merged.push(item);
            }
        }

        merged
    }
}
