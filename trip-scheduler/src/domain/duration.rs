//! Duration estimates for scheduled items.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// How long an item is expected to occupy, with a plausible range.
///
/// `flexible` is false for flights and hotel stays (the duration is
/// contractually fixed by the booking) and true for activities, where a
/// later optimization pass may compress or expand within
/// `[minimum, maximum]`. The core sequencing walk always uses
/// `estimated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInfo {
    /// Best estimate, in minutes.
    pub estimated_minutes: i64,

    /// Plausible lower bound, in minutes.
    pub minimum_minutes: i64,

    /// Plausible upper bound, in minutes.
    pub maximum_minutes: i64,

    /// Human-readable rendering of `estimated_minutes`, e.g. "2h 30m".
    pub description: String,

    /// Whether the sequencer may adjust within the range.
    pub flexible: bool,
}

impl DurationInfo {
    /// Create a duration estimate. The description is derived from the
    /// estimated value.
    pub fn new(estimated: i64, minimum: i64, maximum: i64, flexible: bool) -> Self {
        Self {
            estimated_minutes: estimated,
            minimum_minutes: minimum,
            maximum_minutes: maximum,
            description: format_minutes(estimated),
            flexible,
        }
    }

    /// Create a fixed (inflexible) duration where the estimate and both
    /// bounds coincide.
    pub fn fixed(minutes: i64) -> Self {
        Self::new(minutes, minutes, minutes, false)
    }

    /// Returns the estimate as a chrono `Duration`.
    pub fn estimated(&self) -> Duration {
        Duration::minutes(self.estimated_minutes)
    }
}

/// Format a minute count as "Xh Ym" (or "Xh" on the hour), falling back
/// to "X minutes" below one hour.
///
/// # Examples
///
/// ```
/// use trip_scheduler::domain::format_minutes;
///
/// assert_eq!(format_minutes(45), "45 minutes");
/// assert_eq!(format_minutes(60), "1h");
/// assert_eq!(format_minutes(150), "2h 30m");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes} minutes");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;

    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}
