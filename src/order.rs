//! Order snapshot types consumed by the sequencing and packing
//! algorithms.
//!
//! An [`OrderRecord`] is a transient value snapshot of a pending order,
//! built by the dispatch layer from persistent storage and discarded
//! after the call returns. The algorithms never mutate a record; they
//! only produce new derived values (orderings, selections, scores).

use std::collections::BTreeMap;

/// Delivery service tier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryType {
    /// Express delivery. Always outranks standard delivery.
    Express,

    /// Standard delivery.
    Standard,
}

/// Snapshot of a single pending order.
///
/// Weight and value are non-negative; a weight of 0 (free item) and a
/// value of 0 are both legal inputs to every algorithm. Fields the
/// algorithms do not touch travel in `extras` as named numeric values.
///
/// # Examples
///
/// ```
/// use dispatch_opt::order::{DeliveryType, OrderRecord};
///
/// let order = OrderRecord::new(17, DeliveryType::Express, true, 2.5, 34.99)
///     .with_extra("distance_km", 12.0);
///
/// assert_eq!(order.urgency(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderRecord {
    /// Opaque order identifier. Never interpreted by the algorithms.
    pub id: u64,

    /// Delivery service tier.
    pub delivery_type: DeliveryType,

    /// Whether the ordering customer is a premium member.
    pub premium_member: bool,

    /// Total shipping weight in kilograms. Non-negative.
    pub weight: f64,

    /// Monetary value of the order. Non-negative.
    pub value: f64,

    /// Arbitrary numeric passthrough fields, untouched by the
    /// algorithms except when named as a sort key.
    pub extras: BTreeMap<String, f64>,
}

impl OrderRecord {
    /// Creates a record with no passthrough fields.
    pub fn new(
        id: u64,
        delivery_type: DeliveryType,
        premium_member: bool,
        weight: f64,
        value: f64,
    ) -> Self {
        Self {
            id,
            delivery_type,
            premium_member,
            weight,
            value,
            extras: BTreeMap::new(),
        }
    }

    /// Adds a named passthrough field.
    pub fn with_extra(mut self, name: impl Into<String>, value: f64) -> Self {
        self.extras.insert(name.into(), value);
        self
    }

    /// Derived urgency score in `{0, 1, 2, 3}`. Higher is more urgent.
    ///
    /// Express delivery contributes 2, premium membership contributes 1,
    /// so express always outranks standard regardless of membership.
    pub fn urgency(&self) -> u8 {
        let mut score = match self.delivery_type {
            DeliveryType::Express => 2,
            DeliveryType::Standard => 0,
        };
        if self.premium_member {
            score += 1;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_scores() {
        let cases = [
            (DeliveryType::Standard, false, 0),
            (DeliveryType::Standard, true, 1),
            (DeliveryType::Express, false, 2),
            (DeliveryType::Express, true, 3),
        ];

        for (delivery_type, premium, expected) in cases {
            let order = OrderRecord::new(1, delivery_type, premium, 1.0, 1.0);
            assert_eq!(
                order.urgency(),
                expected,
                "urgency for {delivery_type:?}, premium={premium}"
            );
        }
    }

    #[test]
    fn test_extras_roundtrip() {
        let order = OrderRecord::new(5, DeliveryType::Standard, false, 0.0, 0.0)
            .with_extra("distance_km", 7.5)
            .with_extra("stops", 2.0);

        assert_eq!(order.extras.get("distance_km"), Some(&7.5));
        assert_eq!(order.extras.get("stops"), Some(&2.0));
        assert_eq!(order.extras.get("missing"), None);
    }

    #[test]
    fn test_zero_weight_and_value_are_legal() {
        let order = OrderRecord::new(9, DeliveryType::Express, false, 0.0, 0.0);
        assert_eq!(order.weight, 0.0);
        assert_eq!(order.value, 0.0);
        assert_eq!(order.urgency(), 2);
    }
}
