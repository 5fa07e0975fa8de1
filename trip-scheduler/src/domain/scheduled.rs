//! Scheduled items: the engine's output unit.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::duration::DurationInfo;
use super::item::ItemKind;
use super::location::LocationInfo;
use super::travel::TravelInfo;

/// A candidate item placed on the timeline.
///
/// Carries the candidate's identity fields plus the computed start/end
/// times, the duration estimate they derive from, the travel leg to the
/// next item (absent on the final item), and the transition buffer to
/// hold after this item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// Identifier of the candidate this was scheduled from.
    pub id: String,

    /// The candidate's kind.
    pub kind: ItemKind,

    /// Display name.
    pub name: String,

    /// Free-text description, carried through from the candidate.
    pub description: String,

    /// Where the item takes place.
    pub location: LocationInfo,

    /// When the item starts. Equal to the candidate's fixed time when it
    /// carried one, otherwise assigned from the scheduling cursor.
    pub start_time: NaiveDateTime,

    /// When the item ends: always `start_time + duration.estimated`.
    pub end_time: NaiveDateTime,

    /// The duration estimate used to place this item.
    pub duration: DurationInfo,

    /// Travel to the next item in the timeline, absent on the last item.
    pub travel_to_next: Option<TravelInfo>,

    /// Transition buffer held after this item, in minutes. Zero on the
    /// last item.
    pub buffer_after_minutes: i64,
}

impl ScheduledItem {
    /// Minutes between start and end.
    pub fn scheduled_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}
