//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair, in degrees.
///
/// Range validation is not enforced here: upstream producers are expected
/// to supply sane values, and the travel estimator substitutes a
/// conservative default whenever a computation involving non-finite
/// coordinates would otherwise propagate `NaN`.
///
/// # Examples
///
/// ```
/// use trip_scheduler::domain::Coordinate;
///
/// let louvre = Coordinate::new(48.8606, 2.3376);
/// assert!(louvre.is_finite());
/// assert!(!Coordinate::new(f64::NAN, 2.3376).is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, nominally [-90, 90].
    pub latitude: f64,

    /// Longitude in degrees, nominally [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Convert to a `geo::Point` (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}
