//! Travel between consecutive scheduled items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown travel method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel method: {input}")]
pub struct InvalidTravelMethod {
    input: String,
}

/// How to get from one item's location to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMethod {
    Walking,
    Taxi,
    PublicTransport,
    Driving,
}

impl TravelMethod {
    /// Returns the snake_case wire name for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMethod::Walking => "walking",
            TravelMethod::Taxi => "taxi",
            TravelMethod::PublicTransport => "public_transport",
            TravelMethod::Driving => "driving",
        }
    }
}

impl FromStr for TravelMethod {
    type Err = InvalidTravelMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walking" => Ok(TravelMethod::Walking),
            "taxi" => Ok(TravelMethod::Taxi),
            "public_transport" => Ok(TravelMethod::PublicTransport),
            "driving" => Ok(TravelMethod::Driving),
            other => Err(InvalidTravelMethod {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TravelMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An estimated travel leg between two locations.
///
/// Computed pairwise between consecutive scheduled items; never stored on
/// the candidate item itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelInfo {
    /// Great-circle distance, in kilometres.
    pub distance_km: f64,

    /// Estimated door-to-door travel time, in minutes, including traffic
    /// and airport/hotel surcharges.
    pub duration_minutes: i64,

    /// Suggested travel method for this distance.
    pub method: TravelMethod,

    /// Approximate cost in USD. Walking is free and carries `None`.
    pub cost_usd: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_methods() {
        assert_eq!("walking".parse::<TravelMethod>(), Ok(TravelMethod::Walking));
        assert_eq!("taxi".parse::<TravelMethod>(), Ok(TravelMethod::Taxi));
        assert_eq!(
            "public_transport".parse::<TravelMethod>(),
            Ok(TravelMethod::PublicTransport)
        );
        assert_eq!("driving".parse::<TravelMethod>(), Ok(TravelMethod::Driving));
    }

    #[test]
    fn reject_unknown_method() {
        assert!("bus".parse::<TravelMethod>().is_err());
        assert!("Walking".parse::<TravelMethod>().is_err());
        assert!("".parse::<TravelMethod>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for method in [
            TravelMethod::Walking,
            TravelMethod::Taxi,
            TravelMethod::PublicTransport,
            TravelMethod::Driving,
        ] {
            assert_eq!(method.to_string().parse::<TravelMethod>(), Ok(method));
        }
    }

    #[test]
    fn serde_wire_name() {
        let json = serde_json::to_string(&TravelMethod::PublicTransport).unwrap();
        assert_eq!(json, "\"public_transport\"");
    }
}
