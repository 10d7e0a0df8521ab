//! Knapsack DP over an order snapshot.

use tracing::debug;

use super::config::PackerConfig;
use crate::order::OrderRecord;

/// Result of a packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackResult {
    /// Indices of the selected orders, ascending in original snapshot
    /// order.
    pub selected: Vec<usize>,

    /// Sum of `value` over the selected orders, computed from the
    /// original unscaled records.
    pub total_value: f64,
}

impl PackResult {
    /// The empty selection: nothing packed, zero value.
    pub fn empty() -> Self {
        Self {
            selected: Vec::new(),
            total_value: 0.0,
        }
    }
}

/// Executes the 0/1 knapsack selection.
pub struct Packer;

impl Packer {
    /// Selects the best-value subset of `orders` whose total weight fits
    /// within `capacity`, at the default two-decimal weight precision.
    ///
    /// Fail-soft: an empty snapshot, a non-finite or negative capacity,
    /// or any record with a non-finite or negative weight/value yields
    /// [`PackResult::empty`], never a panic and never a partial pack.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispatch_opt::order::{DeliveryType, OrderRecord};
    /// use dispatch_opt::packer::Packer;
    ///
    /// let orders = vec![
    ///     OrderRecord::new(1, DeliveryType::Standard, false, 5.0, 10.0),
    ///     OrderRecord::new(2, DeliveryType::Standard, false, 4.0, 40.0),
    ///     OrderRecord::new(3, DeliveryType::Standard, false, 6.0, 30.0),
    /// ];
    ///
    /// let result = Packer::select(&orders, 10.0);
    /// assert_eq!(result.selected, vec![1, 2]);
    /// assert_eq!(result.total_value, 70.0);
    /// ```
    pub fn select(orders: &[OrderRecord], capacity: f64) -> PackResult {
        Self::select_with(orders, capacity, &PackerConfig::default())
    }

    /// Like [`select`](Self::select) with an explicit weight precision.
    ///
    /// Runs in O(n · scaled capacity) time and space. A large capacity
    /// at a fine scale factor makes the DP table the dominant cost;
    /// callers bound input size rather than interrupting a running call.
    pub fn select_with(
        orders: &[OrderRecord],
        capacity: f64,
        config: &PackerConfig,
    ) -> PackResult {
        config.validate().expect("invalid PackerConfig");

        if orders.is_empty() {
            return PackResult::empty();
        }

        // Fail-soft validation pass: any malformed input means "pack
        // nothing", not an error and not a best-effort subset.
        if !capacity.is_finite() || capacity < 0.0 {
            return PackResult::empty();
        }
        if orders
            .iter()
            .any(|o| !o.weight.is_finite() || !o.value.is_finite() || o.weight < 0.0 || o.value < 0.0)
        {
            return PackResult::empty();
        }

        let n = orders.len();
        let scale = f64::from(config.scale_factor);

        // Truncation toward zero, not rounding: 0.009 kg scales to 0
        // units at the default factor. The ≤ 1/(2·scale) per-item error
        // is part of the contract.
        let scaled_capacity = (capacity * scale) as usize;
        let scaled_weights: Vec<usize> = orders.iter().map(|o| (o.weight * scale) as usize).collect();

        debug!(n, scaled_capacity, "packing order snapshot");

        // table[i][w]: best value using the first i orders within
        // capacity w.
        let mut table = vec![vec![0.0f64; scaled_capacity + 1]; n + 1];
        for i in 1..=n {
            let weight = scaled_weights[i - 1];
            let value = orders[i - 1].value;
            for w in 0..=scaled_capacity {
                table[i][w] = if weight <= w {
                    table[i - 1][w].max(table[i - 1][w - weight] + value)
                } else {
                    table[i - 1][w]
                };
            }
        }

        // Backtrack: a row change at (i, w) means order i-1 was taken.
        let mut selected = Vec::new();
        let mut w = scaled_capacity;
        for i in (1..=n).rev() {
            if table[i][w] != table[i - 1][w] {
                selected.push(i - 1);
                w = w.saturating_sub(scaled_weights[i - 1]);
            }
        }
        selected.reverse();

        // Reported value comes from the unscaled records so scaling
        // artifacts never leak into the result.
        let total_value = selected.iter().map(|&i| orders[i].value).sum();

        PackResult {
            selected,
            total_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::DeliveryType;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn order(id: u64, weight: f64, value: f64) -> OrderRecord {
        OrderRecord::new(id, DeliveryType::Standard, false, weight, value)
    }

    /// Exhaustive oracle over all subsets, using the same scaled-weight
    /// feasibility rule as the DP.
    fn brute_force_best_value(orders: &[OrderRecord], capacity: f64, scale: u32) -> f64 {
        let scaled_capacity = (capacity * f64::from(scale)) as usize;
        let scaled_weights: Vec<usize> = orders
            .iter()
            .map(|o| (o.weight * f64::from(scale)) as usize)
            .collect();

        let mut best = 0.0f64;
        for mask in 0..(1usize << orders.len()) {
            let mut weight = 0usize;
            let mut value = 0.0f64;
            for (i, o) in orders.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    weight += scaled_weights[i];
                    value += o.value;
                }
            }
            if weight <= scaled_capacity && value > best {
                best = value;
            }
        }
        best
    }

    #[test]
    fn test_capacity_ten_example() {
        let orders = vec![
            order(1, 5.0, 10.0),
            order(2, 4.0, 40.0),
            order(3, 6.0, 30.0),
        ];

        let result = Packer::select(&orders, 10.0);
        assert_eq!(result.selected, vec![1, 2]);
        assert_eq!(result.total_value, 70.0);
    }

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(Packer::select(&[], 100.0), PackResult::empty());
    }

    #[test]
    fn test_zero_capacity_positive_weights() {
        let orders = vec![order(1, 1.0, 10.0), order(2, 0.5, 5.0)];
        assert_eq!(Packer::select(&orders, 0.0), PackResult::empty());
    }

    #[test]
    fn test_zero_capacity_zero_weight_item() {
        // A free (zero-weight) item is always worth carrying.
        let orders = vec![order(1, 1.0, 10.0), order(2, 0.0, 5.0)];

        let result = Packer::select(&orders, 0.0);
        assert_eq!(result.selected, vec![1]);
        assert_eq!(result.total_value, 5.0);
    }

    #[test]
    fn test_malformed_weight_degrades_to_empty() {
        let orders = vec![order(1, 2.0, 10.0), order(2, f64::NAN, 5.0)];
        assert_eq!(Packer::select(&orders, 10.0), PackResult::empty());
    }

    #[test]
    fn test_malformed_value_degrades_to_empty() {
        let orders = vec![order(1, 2.0, f64::INFINITY), order(2, 1.0, 5.0)];
        assert_eq!(Packer::select(&orders, 10.0), PackResult::empty());
    }

    #[test]
    fn test_negative_weight_degrades_to_empty() {
        let orders = vec![order(1, -2.0, 10.0)];
        assert_eq!(Packer::select(&orders, 10.0), PackResult::empty());
    }

    #[test]
    fn test_malformed_capacity_degrades_to_empty() {
        let orders = vec![order(1, 2.0, 10.0)];
        assert_eq!(Packer::select(&orders, f64::NAN), PackResult::empty());
        assert_eq!(Packer::select(&orders, -1.0), PackResult::empty());
    }

    #[test]
    fn test_everything_fits() {
        let orders = vec![order(1, 1.0, 1.0), order(2, 2.0, 2.0), order(3, 3.0, 3.0)];

        let result = Packer::select(&orders, 100.0);
        assert_eq!(result.selected, vec![0, 1, 2]);
        assert!((result.total_value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_weights_two_decimal_precision() {
        // 3.33 + 6.67 = 10.00 exactly at the default scale.
        let orders = vec![order(1, 3.33, 20.0), order(2, 6.67, 30.0), order(3, 5.0, 25.0)];

        let result = Packer::select(&orders, 10.0);
        assert_eq!(result.selected, vec![0, 1]);
        assert!((result.total_value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_precision_weight_truncates_to_free() {
        // 0.009 kg is below the two-decimal resolution: it scales to 0
        // units and packs even into a zero-capacity vehicle.
        let orders = vec![order(1, 0.009, 4.0)];

        let result = Packer::select(&orders, 0.0);
        assert_eq!(result.selected, vec![0]);
    }

    #[test]
    fn test_coarser_scale_factor() {
        let orders = vec![order(1, 1.4, 10.0), order(2, 1.4, 10.0)];
        let config = PackerConfig::default().with_scale_factor(1);

        // At whole-kilogram precision both 1.4 kg orders truncate to
        // 1 unit, so both fit a 2 kg budget.
        let result = Packer::select_with(&orders, 2.0, &config);
        assert_eq!(result.selected, vec![0, 1]);
    }

    #[test]
    fn test_matches_brute_force_on_random_snapshots() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let n = rng.random_range(1..=10);
            let orders: Vec<OrderRecord> = (0..n)
                .map(|i| {
                    order(
                        i as u64,
                        rng.random_range(0.0..8.0),
                        rng.random_range(0.0..50.0),
                    )
                })
                .collect();
            let capacity = rng.random_range(0.0..20.0);

            let result = Packer::select(&orders, capacity);
            let best = brute_force_best_value(&orders, capacity, 100);

            assert!(
                (result.total_value - best).abs() < 1e-9,
                "DP value {} vs brute force {} for n={n}, capacity={capacity}",
                result.total_value,
                best
            );
        }
    }

    // ---- Generated snapshots ----

    fn arb_orders(max_len: usize) -> impl Strategy<Value = Vec<OrderRecord>> {
        prop::collection::vec((0.0f64..10.0, 0.0f64..100.0), 0..max_len).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (weight, value))| order(i as u64, weight, value))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_selection_respects_weight_budget(
            orders in arb_orders(20),
            capacity in 0.0f64..40.0,
        ) {
            let result = Packer::select(&orders, capacity);

            let total_weight: f64 = result.selected.iter().map(|&i| orders[i].weight).sum();
            let tolerance = 0.01 * orders.len() as f64;
            prop_assert!(
                total_weight <= capacity + tolerance,
                "selected weight {} exceeds capacity {} (+{})",
                total_weight,
                capacity,
                tolerance
            );
        }

        #[test]
        fn prop_selected_indices_ascending_and_unique(
            orders in arb_orders(20),
            capacity in 0.0f64..40.0,
        ) {
            let result = Packer::select(&orders, capacity);

            for pair in result.selected.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            prop_assert!(result.selected.iter().all(|&i| i < orders.len()));
        }

        #[test]
        fn prop_total_value_matches_selection(
            orders in arb_orders(20),
            capacity in 0.0f64..40.0,
        ) {
            let result = Packer::select(&orders, capacity);

            let recomputed: f64 = result.selected.iter().map(|&i| orders[i].value).sum();
            prop_assert!((result.total_value - recomputed).abs() < 1e-9);
        }
    }
}
