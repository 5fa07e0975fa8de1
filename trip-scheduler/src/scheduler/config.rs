//! Scheduling configuration.

use chrono::Duration;

/// Tunable parameters for the sequencing walk.
///
/// Defaults reproduce the engine's standard pacing; callers that want a
/// tighter or more relaxed itinerary can adjust the buffer terms.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Base transition buffer between any two items (minutes).
    pub base_buffer_mins: i64,

    /// Lower clamp for the computed buffer (minutes).
    pub min_buffer_mins: i64,

    /// Upper clamp for the computed buffer (minutes).
    pub max_buffer_mins: i64,

    /// Extra break between two back-to-back activities (minutes).
    pub activity_break_mins: i64,

    /// Extra transition when either side is a restaurant (minutes).
    pub meal_transition_mins: i64,

    /// Extra transition when either side is a hotel: check-in/out
    /// procedure (minutes).
    pub hotel_transition_mins: i64,

    /// Distance above which the long-haul premium applies (km).
    pub long_haul_threshold_km: f64,

    /// Premium added for legs longer than the threshold (minutes).
    pub long_haul_extra_mins: i64,

    /// Distance below which the short-hop discount applies (km).
    pub short_hop_threshold_km: f64,

    /// Discount subtracted for very short hops (minutes).
    pub short_hop_discount_mins: i64,
}

impl SchedulerConfig {
    /// Returns the base buffer as a Duration.
    pub fn base_buffer(&self) -> Duration {
        Duration::minutes(self.base_buffer_mins)
    }

    /// Returns the upper buffer clamp as a Duration.
    pub fn max_buffer(&self) -> Duration {
        Duration::minutes(self.max_buffer_mins)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            base_buffer_mins: 15,
            min_buffer_mins: 5,
            max_buffer_mins: 90,
            activity_break_mins: 15,
            meal_transition_mins: 10,
            hotel_transition_mins: 15,
            long_haul_threshold_km: 5.0,
            long_haul_extra_mins: 20,
            short_hop_threshold_km: 0.5,
            short_hop_discount_mins: 10,
        }
    }
}
