//! Great-circle distance and travel estimation.
//!
//! Distances are approximated with the Haversine formula rather than a
//! road network, and travel method, duration, and cost are derived from
//! fixed distance buckets. Both functions are pure: any finite coordinate
//! pair produces a result, and non-finite inputs fall back to a
//! conservative default estimate instead of propagating `NaN`.

use geo::{Distance, Haversine};

use crate::domain::{Coordinate, LocationInfo, LocationKind, TimeSlot, TravelInfo, TravelMethod};

/// Walking pace, minutes per kilometre.
const WALKING_MINS_PER_KM: f64 = 12.0;

/// Taxi pace, minutes per kilometre.
const TAXI_MINS_PER_KM: f64 = 8.0;

/// Public transport pace, minutes per kilometre, including waiting.
const TRANSIT_MINS_PER_KM: f64 = 6.0;

/// Driving pace, minutes per kilometre, for out-of-town distances.
const DRIVING_MINS_PER_KM: f64 = 4.0;

/// Rush-hour traffic multiplier applied in morning and evening slots.
const RUSH_HOUR_MULTIPLIER: f64 = 1.3;

/// Extra minutes when either endpoint is an airport (security, terminals).
const AIRPORT_SURCHARGE_MINS: i64 = 15;

/// Extra minutes when either endpoint is a hotel (front desk, luggage).
const HOTEL_SURCHARGE_MINS: i64 = 5;

/// Distance below which a leg is walkable, in km.
const WALKING_MAX_KM: f64 = 0.5;

/// Distance below which a taxi is the sensible choice, in km.
const TAXI_MAX_KM: f64 = 2.0;

/// Distance below which public transport is the sensible choice, in km.
const TRANSIT_MAX_KM: f64 = 10.0;

/// Great-circle distance between two coordinates, in kilometres.
///
/// Symmetric, and zero for identical coordinates, within floating-point
/// tolerance. Non-finite inputs propagate `NaN`; callers that cannot
/// tolerate that should go through [`estimate_travel`], which substitutes
/// a conservative default.
///
/// # Examples
///
/// ```
/// use trip_scheduler::domain::Coordinate;
/// use trip_scheduler::geo::distance_km;
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let london = Coordinate::new(51.5074, -0.1278);
///
/// let d = distance_km(paris, london);
/// assert!((d - 344.0).abs() < 5.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    Haversine.distance(a.to_point(), b.to_point()) / 1000.0
}

/// Estimate a travel leg between two locations.
///
/// Picks a method and base duration from fixed distance buckets, applies
/// the rush-hour multiplier for morning and evening travel, then adds
/// fixed surcharges when either endpoint is an airport or a hotel (both
/// stack when both apply).
///
/// When the distance cannot be computed (non-finite coordinates), returns
/// a fixed conservative estimate: 30 minutes by public transport over a
/// nominal 2 km.
pub fn estimate_travel(from: &LocationInfo, to: &LocationInfo, time_of_day: TimeSlot) -> TravelInfo {
    let d = distance_km(from.coordinates, to.coordinates);
    if !d.is_finite() {
        return fallback_travel();
    }

    let (method, base_mins, cost_usd) = if d < WALKING_MAX_KM {
        (
            TravelMethod::Walking,
            (d * WALKING_MINS_PER_KM).round().max(5.0),
            None,
        )
    } else if d < TAXI_MAX_KM {
        (
            TravelMethod::Taxi,
            (d * TAXI_MINS_PER_KM).round().max(8.0),
            Some((d * 3.0).max(5.0)),
        )
    } else if d < TRANSIT_MAX_KM {
        (
            TravelMethod::PublicTransport,
            (d * TRANSIT_MINS_PER_KM).round().max(15.0),
            Some(3.0),
        )
    } else {
        (
            TravelMethod::Driving,
            (d * DRIVING_MINS_PER_KM).round().max(20.0),
            Some(d * 2.0),
        )
    };

    let multiplier = if time_of_day.is_rush_hour() {
        RUSH_HOUR_MULTIPLIER
    } else {
        1.0
    };
    let mut duration_minutes = (base_mins * multiplier).round() as i64;

    if from.kind == LocationKind::Airport || to.kind == LocationKind::Airport {
        duration_minutes += AIRPORT_SURCHARGE_MINS;
    }
    if from.kind == LocationKind::Hotel || to.kind == LocationKind::Hotel {
        duration_minutes += HOTEL_SURCHARGE_MINS;
    }

    TravelInfo {
        distance_km: d,
        duration_minutes,
        method,
        cost_usd,
    }
}

/// Conservative default used when the distance is not computable.
///
/// 2 km is a mid-range nominal distance: the buffer formula applies
/// neither its long-haul premium nor its short-hop discount to it.
fn fallback_travel() -> TravelInfo {
    TravelInfo {
        distance_km: 2.0,
        duration_minutes: 30,
        method: TravelMethod::PublicTransport,
        cost_usd: Some(3.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    /// Offset in degrees of latitude that spans roughly the given number
    /// of kilometres (1 degree of latitude is ~111.2 km everywhere).
    fn lat_offset_km(km: f64) -> f64 {
        km / 111.2
    }

    fn activity_at(lat: f64, lon: f64) -> LocationInfo {
        LocationInfo::new("place", coord(lat, lon), LocationKind::Activity)
    }

    #[test]
    fn identity_is_zero() {
        let a = coord(48.8566, 2.3522);
        assert!(distance_km(a, a).abs() < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = coord(48.8566, 2.3522);
        let b = coord(51.5074, -0.1278);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn known_distance_paris_london() {
        let paris = coord(48.8566, 2.3522);
        let london = coord(51.5074, -0.1278);
        let d = distance_km(paris, london);
        assert!((d - 344.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn non_finite_propagates_nan() {
        let a = coord(f64::NAN, 0.0);
        let b = coord(0.0, 0.0);
        assert!(distance_km(a, b).is_nan());
    }

    #[test]
    fn short_hop_walks() {
        // ~0.3 km apart: walking, max(5, round(0.3 * 12)) = 5 minutes
        let from = activity_at(48.8600, 2.3500);
        let to = activity_at(48.8600 + lat_offset_km(0.3), 2.3500);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.method, TravelMethod::Walking);
        assert_eq!(travel.duration_minutes, 5);
        assert!(travel.cost_usd.is_none());
    }

    #[test]
    fn mid_range_takes_taxi() {
        // ~1.5 km: taxi, round(1.5 * 8) = 12 minutes, cost max(5, 4.5) = 5
        let from = activity_at(48.8600, 2.3500);
        let to = activity_at(48.8600 + lat_offset_km(1.5), 2.3500);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.method, TravelMethod::Taxi);
        assert_eq!(travel.duration_minutes, 12);
        assert_eq!(travel.cost_usd, Some(5.0));
    }

    #[test]
    fn cross_town_takes_public_transport() {
        // ~3 km: public transport, round(3 * 6) = 18 minutes, flat 3 USD
        let from = activity_at(48.8600, 2.3500);
        let to = activity_at(48.8600 + lat_offset_km(3.0), 2.3500);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.method, TravelMethod::PublicTransport);
        assert_eq!(travel.duration_minutes, 18);
        assert_eq!(travel.cost_usd, Some(3.0));
    }

    #[test]
    fn long_haul_drives() {
        // ~20 km: driving, round(20 * 4) = 80 minutes, cost 2 USD/km
        let from = activity_at(48.8600, 2.3500);
        let to = activity_at(48.8600 + lat_offset_km(20.0), 2.3500);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.method, TravelMethod::Driving);
        assert!((travel.duration_minutes - 80).abs() <= 1);
        let cost = travel.cost_usd.unwrap();
        assert!((cost - 40.0).abs() < 1.0);
    }

    #[test]
    fn walking_floor_applies() {
        // A few metres apart still costs the 5-minute walking floor.
        let from = activity_at(48.86000, 2.35000);
        let to = activity_at(48.86001, 2.35000);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.method, TravelMethod::Walking);
        assert_eq!(travel.duration_minutes, 5);
    }

    #[test]
    fn rush_hour_multiplier_applies() {
        let from = activity_at(48.8600, 2.3500);
        let to = activity_at(48.8600 + lat_offset_km(3.0), 2.3500);

        let off_peak = estimate_travel(&from, &to, TimeSlot::Afternoon);
        let morning = estimate_travel(&from, &to, TimeSlot::Morning);
        let evening = estimate_travel(&from, &to, TimeSlot::Evening);

        // round(18 * 1.3) = 23
        assert_eq!(off_peak.duration_minutes, 18);
        assert_eq!(morning.duration_minutes, 23);
        assert_eq!(evening.duration_minutes, 23);
    }

    #[test]
    fn airport_surcharge() {
        let from = LocationInfo::new(
            "CDG",
            coord(49.0097, 2.5479),
            LocationKind::Airport,
        );
        let to = activity_at(49.0097 + lat_offset_km(3.0), 2.5479);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.duration_minutes, 18 + 15);
    }

    #[test]
    fn hotel_surcharge() {
        let from = LocationInfo::new("hotel", coord(48.8600, 2.3500), LocationKind::Hotel);
        let to = activity_at(48.8600 + lat_offset_km(3.0), 2.3500);

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.duration_minutes, 18 + 5);
    }

    #[test]
    fn airport_and_hotel_surcharges_stack() {
        let from = LocationInfo::new(
            "CDG",
            coord(49.0097, 2.5479),
            LocationKind::Airport,
        );
        let to = LocationInfo::new(
            "hotel",
            coord(49.0097 + lat_offset_km(3.0), 2.5479),
            LocationKind::Hotel,
        );

        let travel = estimate_travel(&from, &to, TimeSlot::Afternoon);
        assert_eq!(travel.duration_minutes, 18 + 15 + 5);
    }

    #[test]
    fn non_finite_falls_back_to_default() {
        let from = LocationInfo::new("lost", coord(f64::NAN, 2.35), LocationKind::Activity);
        let to = activity_at(48.8600, 2.3500);

        let travel = estimate_travel(&from, &to, TimeSlot::Morning);
        assert_eq!(travel.method, TravelMethod::PublicTransport);
        assert_eq!(travel.duration_minutes, 30);
        assert_eq!(travel.distance_km, 2.0);
        assert_eq!(travel.cost_usd, Some(3.0));
    }
}
