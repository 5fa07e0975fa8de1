//! Activity classification and duration estimation.
//!
//! Answers "how long will this item take?" for each kind of candidate:
//! flights and hotel stays have contractually fixed durations, while
//! activities are classified into an archetype whose typical duration
//! range is looked up and scaled by group size.

mod classify;
mod duration;

pub use classify::{ActivityType, classify_activity};
pub use duration::{activity_duration, flight_duration, hotel_duration};
