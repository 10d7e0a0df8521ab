//! Locations, travel costs, and routing errors.

use thiserror::Error;

/// A delivery stop in a 2-D coordinate space.
///
/// For geographic use the coordinates are latitude/longitude; the
/// planner itself only ever sees the pairwise costs derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Opaque location identifier (e.g. the order it delivers).
    pub id: u64,

    /// First coordinate (latitude for geographic data).
    pub x: f64,

    /// Second coordinate (longitude for geographic data).
    pub y: f64,
}

impl Location {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Error planning a route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The distance matrix holds no locations at all. A single
    /// location (just the depot) is a valid degenerate tour, zero is
    /// not.
    #[error("distance matrix has no locations")]
    EmptyMatrix,

    /// A row's length does not match the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A travel cost is negative or non-finite.
    #[error("distance at ({row}, {col}) is {value}, expected finite and non-negative")]
    InvalidDistance { row: usize, col: usize, value: f64 },
}

/// Square matrix of pairwise travel costs, indexed `0..n-1`.
///
/// Index 0 is always the fixed depot/warehouse. Costs are non-negative
/// but need not be symmetric: `distance(i, j)` and `distance(j, i)` may
/// differ (one-way streets, asymmetric travel times).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    len: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit cost rows, validating shape and
    /// cost range.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotSquare`] when any row's length differs from the
    /// row count; [`RouteError::InvalidDistance`] when any cost is
    /// negative or non-finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RouteError> {
        let len = rows.len();
        let mut costs = Vec::with_capacity(len * len);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != len {
                return Err(RouteError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: len,
                });
            }
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(RouteError::InvalidDistance {
                        row: i,
                        col: j,
                        value,
                    });
                }
                costs.push(value);
            }
        }

        Ok(Self { len, costs })
    }

    /// Builds a matrix of pairwise Euclidean distances between
    /// locations, with a zero diagonal.
    ///
    /// The first location is the depot. Coordinates are taken as given:
    /// geocoding, projection, or road-network costs are the caller's
    /// concern.
    pub fn from_locations(locations: &[Location]) -> Self {
        let len = locations.len();
        let mut costs = vec![0.0; len * len];

        for (i, a) in locations.iter().enumerate() {
            for (j, b) in locations.iter().enumerate() {
                if i != j {
                    let dx = a.x - b.x;
                    let dy = a.y - b.y;
                    costs[i * len + j] = (dx * dx + dy * dy).sqrt();
                }
            }
        }

        Self { len, costs }
    }

    /// Number of locations, depot included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Travel cost from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.len + to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_square() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.distance(1, 2), 3.0);
        assert_eq!(matrix.distance(2, 1), 3.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            RouteError::NotSquare {
                row: 1,
                len: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_negative_cost() {
        let err =
            DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidDistance { row: 0, col: 1, .. }
        ));
    }

    #[test]
    fn test_from_rows_rejects_nan_cost() {
        let err =
            DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidDistance { .. }));
    }

    #[test]
    fn test_from_rows_allows_asymmetry() {
        let matrix =
            DistanceMatrix::from_rows(vec![vec![0.0, 5.0], vec![2.0, 0.0]]).unwrap();
        assert_eq!(matrix.distance(0, 1), 5.0);
        assert_eq!(matrix.distance(1, 0), 2.0);
    }

    #[test]
    fn test_from_locations_euclidean() {
        let locations = vec![
            Location::new(0, 0.0, 0.0),
            Location::new(1, 3.0, 4.0),
            Location::new(2, 0.0, 1.0),
        ];

        let matrix = DistanceMatrix::from_locations(&locations);
        assert_eq!(matrix.len(), 3);
        assert!((matrix.distance(0, 1) - 5.0).abs() < 1e-12);
        assert!((matrix.distance(1, 0) - 5.0).abs() < 1e-12);
        assert!((matrix.distance(0, 2) - 1.0).abs() < 1e-12);
        assert_eq!(matrix.distance(1, 1), 0.0);
    }

    #[test]
    fn test_from_locations_empty() {
        let matrix = DistanceMatrix::from_locations(&[]);
        assert!(matrix.is_empty());
    }
}
