//! Candidate items: the scheduling input unit.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::location::LocationInfo;

/// Error returned when parsing an unknown item kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid item kind: {input}")]
pub struct InvalidItemKind {
    input: String,
}

/// The kind of bookable item.
///
/// Drives duration estimation (flights and hotels have contractually
/// fixed durations; everything else is classified and estimated) and
/// the type-priority ordering used by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Flight,
    Hotel,
    Activity,
    Restaurant,
    Transport,
}

impl ItemKind {
    /// Returns the snake_case wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Flight => "flight",
            ItemKind::Hotel => "hotel",
            ItemKind::Activity => "activity",
            ItemKind::Restaurant => "restaurant",
            ItemKind::Transport => "transport",
        }
    }
}

impl FromStr for ItemKind {
    type Err = InvalidItemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(ItemKind::Flight),
            "hotel" => Ok(ItemKind::Hotel),
            "activity" => Ok(ItemKind::Activity),
            "restaurant" => Ok(ItemKind::Restaurant),
            "transport" => Ok(ItemKind::Transport),
            other => Err(InvalidItemKind {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coarse slot of the day, used as a soft preference hint and to pick
/// the traffic multiplier for travel estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Classify an hour of day (0-23) into a slot.
    ///
    /// Morning is before 12:00, afternoon before 18:00, evening after.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeSlot::Morning
        } else if hour < 18 {
            TimeSlot::Afternoon
        } else {
            TimeSlot::Evening
        }
    }

    /// Classify a timestamp into a slot by its hour.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        use chrono::Timelike;
        Self::from_hour(at.hour())
    }

    /// Whether this slot carries rush-hour traffic (morning and evening).
    pub fn is_rush_hour(&self) -> bool {
        matches!(self, TimeSlot::Morning | TimeSlot::Evening)
    }
}

/// Kind-specific booking metadata.
///
/// A tagged union instead of an opaque key-value map: flights carry their
/// in-air time, hotel stays carry the booked check-in and check-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemMeta {
    Flight {
        /// In-air flight time, in minutes.
        flight_minutes: i64,
        /// Domestic flights need less airport overhead than international.
        is_domestic: bool,
    },
    Hotel {
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    },
}

/// An unscheduled bookable item, as produced by upstream search or manual
/// user additions.
///
/// Candidate items are never mutated by the engine; each scheduling call
/// reads them and emits fresh [`ScheduledItem`](super::ScheduledItem)s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Caller-assigned unique identifier.
    pub id: String,

    /// What kind of booking this is.
    pub kind: ItemKind,

    /// Display name.
    pub name: String,

    /// Free-text description; consulted by activity classification when
    /// no category tag matches.
    pub description: String,

    /// Where the item takes place.
    pub location: LocationInfo,

    /// Free-text category tags used for activity classification.
    pub categories: Vec<String>,

    /// Hard time anchor, e.g. a flight departure or a hotel check-in.
    /// The sequencer never moves items that carry one.
    pub fixed_time: Option<NaiveDateTime>,

    /// Soft preference hint. Accepted and carried through, but not yet
    /// consulted by the sequencing walk.
    pub preferred_time_slot: Option<TimeSlot>,

    /// Kind-specific booking metadata.
    pub meta: Option<ItemMeta>,
}

impl CandidateItem {
    /// Create a candidate item with the required fields.
    pub fn new(
        id: impl Into<String>,
        kind: ItemKind,
        name: impl Into<String>,
        location: LocationInfo,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: String::new(),
            location,
            categories: Vec::new(),
            fixed_time: None,
            preferred_time_slot: None,
            meta: None,
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category tags.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Anchor the item to a fixed start time.
    pub fn with_fixed_time(mut self, at: NaiveDateTime) -> Self {
        self.fixed_time = Some(at);
        self
    }

    /// Set the soft time-slot preference.
    pub fn with_preferred_time_slot(mut self, slot: TimeSlot) -> Self {
        self.preferred_time_slot = Some(slot);
        self
    }

    /// Attach kind-specific metadata.
    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, LocationKind};

    fn location() -> LocationInfo {
        LocationInfo::new(
            "Test place",
            Coordinate::new(48.85, 2.35),
            LocationKind::Activity,
        )
    }

    #[test]
    fn parse_valid_item_kinds() {
        assert_eq!("flight".parse::<ItemKind>(), Ok(ItemKind::Flight));
        assert_eq!("hotel".parse::<ItemKind>(), Ok(ItemKind::Hotel));
        assert_eq!("activity".parse::<ItemKind>(), Ok(ItemKind::Activity));
        assert_eq!("restaurant".parse::<ItemKind>(), Ok(ItemKind::Restaurant));
        assert_eq!("transport".parse::<ItemKind>(), Ok(ItemKind::Transport));
    }

    #[test]
    fn reject_unknown_item_kind() {
        assert!("airport".parse::<ItemKind>().is_err());
        assert!("FLIGHT".parse::<ItemKind>().is_err());
        assert!("".parse::<ItemKind>().is_err());
    }

    #[test]
    fn time_slot_from_hour() {
        assert_eq!(TimeSlot::from_hour(0), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_hour(11), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_hour(12), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_hour(17), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_hour(18), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_hour(23), TimeSlot::Evening);
    }

    #[test]
    fn rush_hour_slots() {
        assert!(TimeSlot::Morning.is_rush_hour());
        assert!(TimeSlot::Evening.is_rush_hour());
        assert!(!TimeSlot::Afternoon.is_rush_hour());
    }

    #[test]
    fn builder_defaults() {
        let item = CandidateItem::new("a1", ItemKind::Activity, "Louvre", location());

        assert_eq!(item.id, "a1");
        assert!(item.categories.is_empty());
        assert!(item.fixed_time.is_none());
        assert!(item.preferred_time_slot.is_none());
        assert!(item.meta.is_none());
    }

    #[test]
    fn builder_chaining() {
        let item = CandidateItem::new("f1", ItemKind::Flight, "CDG to JFK", location())
            .with_description("Direct flight")
            .with_categories(["transport"])
            .with_meta(ItemMeta::Flight {
                flight_minutes: 480,
                is_domestic: false,
            });

        assert_eq!(item.description, "Direct flight");
        assert_eq!(item.categories, vec!["transport".to_string()]);
        assert!(matches!(
            item.meta,
            Some(ItemMeta::Flight {
                flight_minutes: 480,
                is_domestic: false,
            })
        ));
    }

    #[test]
    fn meta_serde_tagging() {
        let meta = ItemMeta::Flight {
            flight_minutes: 120,
            is_domestic: true,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"type\":\"flight\""));

        let back: ItemMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
