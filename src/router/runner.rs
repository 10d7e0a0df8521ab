//! Bitmask DP tour solver.

use tracing::debug;

use super::types::{DistanceMatrix, RouteError};

/// Result of a route-planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// The closed tour: starts and ends at the depot (index 0) and
    /// visits every other location exactly once in between.
    pub tour: Vec<usize>,

    /// Total cost of the tour, including the closing edge back to the
    /// depot.
    pub total_cost: f64,
}

/// Executes the exact tour search.
pub struct Router;

impl Router {
    /// Finds the minimum-cost closed tour over all locations in the
    /// matrix, starting and ending at the depot (index 0).
    ///
    /// Memory and time are O(2^n · n) and O(2^n · n^2): exact, and only
    /// tractable for small stop lists. A single location (just the
    /// depot) is the degenerate tour `[0]` with cost 0 and bypasses the
    /// DP entirely.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptyMatrix`] when the matrix holds no locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispatch_opt::router::{DistanceMatrix, Router};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![1.0, 0.0, 1.0],
    ///     vec![2.0, 1.0, 0.0],
    /// ])?;
    ///
    /// let route = Router::solve(&matrix)?;
    /// assert_eq!(route.tour.first(), Some(&0));
    /// assert_eq!(route.tour.last(), Some(&0));
    /// assert_eq!(route.total_cost, 4.0);
    /// # Ok::<(), dispatch_opt::router::RouteError>(())
    /// ```
    pub fn solve(distances: &DistanceMatrix) -> Result<RouteResult, RouteError> {
        let n = distances.len();
        if n == 0 {
            return Err(RouteError::EmptyMatrix);
        }
        if n == 1 {
            return Ok(RouteResult {
                tour: vec![0],
                total_cost: 0.0,
            });
        }

        debug!(n, states = (1usize << n) * n, "planning delivery tour");

        let full: usize = (1 << n) - 1;

        // memo[mask * n + v]: minimum cost to finish the tour from v
        // with exactly the locations in mask already visited. INFINITY
        // marks states never reached.
        let mut memo = vec![f64::INFINITY; (1 << n) * n];

        // Terminal layer: everything visited, close the tour.
        for v in 0..n {
            memo[full * n + v] = distances.distance(v, 0);
        }

        // A transition target mask | {u} is always numerically greater
        // than mask, so filling in descending mask order sees every
        // continuation before it is needed. Masks without the depot bit
        // are unreachable from the start state and are skipped.
        for mask in (1..full).rev() {
            if mask & 1 == 0 {
                continue;
            }
            for v in 0..n {
                if mask & (1 << v) == 0 {
                    continue;
                }
                let mut best = f64::INFINITY;
                for u in 0..n {
                    if mask & (1 << u) != 0 {
                        continue;
                    }
                    let cost = distances.distance(v, u) + memo[(mask | (1 << u)) * n + u];
                    if cost < best {
                        best = cost;
                    }
                }
                memo[mask * n + v] = best;
            }
        }

        // State (mask = {0}, pos = 0): the whole tour.
        let total_cost = memo[n];

        // Reconstruct by replaying the minimal-continuation walk. An
        // INFINITY memo entry never wins the comparison, so a vertex
        // with no recorded continuation is never selected.
        let mut tour = Vec::with_capacity(n + 1);
        tour.push(0);
        let mut mask = 1usize;
        let mut pos = 0usize;

        for _ in 0..n - 1 {
            let mut next = None;
            let mut best = f64::INFINITY;
            for u in 0..n {
                if mask & (1 << u) != 0 {
                    continue;
                }
                let cost = distances.distance(pos, u) + memo[(mask | (1 << u)) * n + u];
                if cost < best {
                    best = cost;
                    next = Some(u);
                }
            }

            let Some(u) = next else {
                break;
            };
            tour.push(u);
            mask |= 1 << u;
            pos = u;
        }

        tour.push(0);

        Ok(RouteResult { tour, total_cost })
    }
}
