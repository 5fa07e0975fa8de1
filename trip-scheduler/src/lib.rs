//! Itinerary scheduling engine for multi-day trips.
//!
//! Takes an unordered set of bookable candidate items (flights, hotel
//! stays, activities, restaurants, local transport) with approximate
//! locations but no human-specified timings, and produces a deterministic,
//! non-overlapping, realistically-paced timeline with travel time and
//! transition buffers between consecutive items.

pub mod domain;
pub mod estimate;
pub mod geo;
pub mod scheduler;
pub mod summary;
