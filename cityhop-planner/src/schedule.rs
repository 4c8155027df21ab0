//! Day allocation and travel duration derivations
use crate::catalog::{Activity, Catalog, CityId};
use crate::trip::TripState;

/// Whole days between the trip dates, or `None` while either date is
/// unset. A same-day trip counts as zero days. The dates may be stored in
/// either order because the start date is never validated against the end.
#[must_use]
pub fn total_days(trip: &TripState) -> Option<i64> {
    let start = trip.start_date()?;
    let end = trip.end_date()?;
    Some((end - start).num_days().abs())
}

/// Trip length split evenly across every city of the trip (start, stops,
/// end), rounded to one decimal place.
///
/// `None` until both dates are set, and for a zero-day trip. The split
/// ignores per-city activity load.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn days_per_city(trip: &TripState) -> Option<f64> {
    let days = total_days(trip)?;
    if days == 0 {
        return None;
    }
    let cities = 2 + trip.route().len();
    Some(round_tenth(days as f64 / cities as f64))
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Activities whose ids are in the city's selection set, in catalog order.
#[must_use]
pub fn selected_activities<'a>(
    trip: &TripState,
    catalog: &'a Catalog,
    city: CityId,
) -> Vec<&'a Activity> {
    trip.selected_for(city).map_or_else(Vec::new, |picked| {
        catalog
            .activities
            .iter()
            .filter(|activity| picked.contains(&activity.id))
            .collect()
    })
}

/// Hours of selected activities for the city.
#[must_use]
pub fn activity_hours(trip: &TripState, catalog: &Catalog, city: CityId) -> f64 {
    selected_activities(trip, catalog, city)
        .iter()
        .map(|activity| activity.duration_hours)
        .sum()
}

/// Full visiting order: start city, intermediate stops, end city. Unset
/// endpoints are skipped rather than holding a place.
#[must_use]
pub fn city_sequence(trip: &TripState) -> Vec<CityId> {
    let mut sequence = Vec::with_capacity(trip.route().len() + 2);
    if let Some(start) = trip.start_city() {
        sequence.push(start);
    }
    sequence.extend(trip.route().iter().map(|stop| stop.city));
    if let Some(end) = trip.end_city() {
        sequence.push(end);
    }
    sequence
}

/// Sum of travel hours over consecutive legs of the visiting order. A leg
/// with no table entry contributes zero even though it displays as
/// unavailable.
#[must_use]
pub fn total_travel_hours(trip: &TripState, catalog: &Catalog) -> f64 {
    city_sequence(trip)
        .windows(2)
        .map(|leg| catalog.travel_between(leg[0], leg[1]).hours_or_zero())
        .sum()
}
