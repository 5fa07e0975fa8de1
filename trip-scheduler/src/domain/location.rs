//! Locations attached to candidate items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Error returned when parsing an unknown location kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location kind: {input}")]
pub struct InvalidLocationKind {
    input: String,
}

/// The kind of place a location represents.
///
/// The kind feeds the travel estimator's fixed surcharges: airports add
/// 15 minutes to any adjacent travel leg, hotels add 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Hotel,
    Airport,
    Activity,
    Restaurant,
    Transport,
}

impl LocationKind {
    /// Returns the snake_case wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Hotel => "hotel",
            LocationKind::Airport => "airport",
            LocationKind::Activity => "activity",
            LocationKind::Restaurant => "restaurant",
            LocationKind::Transport => "transport",
        }
    }
}

impl FromStr for LocationKind {
    type Err = InvalidLocationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hotel" => Ok(LocationKind::Hotel),
            "airport" => Ok(LocationKind::Airport),
            "activity" => Ok(LocationKind::Activity),
            "restaurant" => Ok(LocationKind::Restaurant),
            "transport" => Ok(LocationKind::Transport),
            other => Err(InvalidLocationKind {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named place with coordinates.
///
/// Used both as an item's own location and as an anchor for pairwise
/// travel computation. Immutable once attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Display name, e.g. "Musée d'Orsay".
    pub name: String,

    /// Street address, when known.
    pub address: Option<String>,

    /// WGS84 position.
    pub coordinates: Coordinate,

    /// What kind of place this is.
    pub kind: LocationKind,
}

impl LocationInfo {
    /// Create a location with a name, coordinates, and a kind.
    pub fn new(name: impl Into<String>, coordinates: Coordinate, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            address: None,
            coordinates,
            kind,
        }
    }

    /// Attach a street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_kinds() {
        assert_eq!("hotel".parse::<LocationKind>(), Ok(LocationKind::Hotel));
        assert_eq!("airport".parse::<LocationKind>(), Ok(LocationKind::Airport));
        assert_eq!(
            "activity".parse::<LocationKind>(),
            Ok(LocationKind::Activity)
        );
        assert_eq!(
            "restaurant".parse::<LocationKind>(),
            Ok(LocationKind::Restaurant)
        );
        assert_eq!(
            "transport".parse::<LocationKind>(),
            Ok(LocationKind::Transport)
        );
    }

    #[test]
    fn reject_unknown_kind() {
        assert!("".parse::<LocationKind>().is_err());
        assert!("Hotel".parse::<LocationKind>().is_err());
        assert!("museum".parse::<LocationKind>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for kind in [
            LocationKind::Hotel,
            LocationKind::Airport,
            LocationKind::Activity,
            LocationKind::Restaurant,
            LocationKind::Transport,
        ] {
            assert_eq!(kind.to_string().parse::<LocationKind>(), Ok(kind));
        }
    }

    #[test]
    fn serde_wire_name() {
        let json = serde_json::to_string(&LocationKind::Airport).unwrap();
        assert_eq!(json, "\"airport\"");
    }

    #[test]
    fn builder_with_address() {
        let loc = LocationInfo::new(
            "Gare de Lyon",
            Coordinate::new(48.8443, 2.3744),
            LocationKind::Transport,
        )
        .with_address("Place Louis-Armand, 75012 Paris");

        assert_eq!(loc.name, "Gare de Lyon");
        assert_eq!(loc.address.as_deref(), Some("Place Louis-Armand, 75012 Paris"));
        assert_eq!(loc.kind, LocationKind::Transport);
    }
}
