//! Static reference data: cities, activities, travel durations
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Canonical city identifier.
///
/// The DOM hands city ids around as strings; they are parsed into this
/// newtype once at the UI boundary so every comparison below that line is
/// numeric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CityId(pub u32);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Identifier of a catalog activity. Unique across the whole catalog, not
/// per city.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActivityId(pub u32);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ActivityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A city available for trip planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

/// A bookable activity, tied to exactly one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "cityId")]
    pub city_id: CityId,
    pub name: String,
    /// Time the activity takes, in hours.
    #[serde(rename = "duration")]
    pub duration_hours: f64,
}

/// Travel time between two cities, or the lack of one.
///
/// A pair missing from the duration table is neither an error nor a zero:
/// it renders as "Duration not available" while aggregate totals count it
/// as zero hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegDuration {
    Hours(f64),
    Unavailable,
}

impl LegDuration {
    /// Contribution of this leg to an aggregate total.
    #[must_use]
    pub fn hours_or_zero(self) -> f64 {
        match self {
            Self::Hours(hours) => hours,
            Self::Unavailable => 0.0,
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Hours(_))
    }
}

impl fmt::Display for LegDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours(hours) => write!(f, "{hours} hours"),
            Self::Unavailable => f.write_str("Duration not available"),
        }
    }
}

/// Order-independent key into the travel-duration table: smaller id first.
#[must_use]
pub fn pair_key(a: CityId, b: CityId) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}-{hi}")
}

/// Container for all static reference data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub cities: Vec<City>,
    pub activities: Vec<Activity>,
    /// Travel hours keyed by [`pair_key`].
    pub travel_hours: HashMap<String, f64>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the three JSON documents that make up the catalog.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if any document is malformed.
    pub fn from_json(
        cities: &str,
        activities: &str,
        travel_hours: &str,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            cities: serde_json::from_str(cities)?,
            activities: serde_json::from_str(activities)?,
            travel_hours: serde_json::from_str(travel_hours)?,
        })
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// City name, or `None` for an id missing from the catalog.
    #[must_use]
    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.city(id).map(|city| city.name.as_str())
    }

    #[must_use]
    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// Activities offered in the given city, in catalog order.
    pub fn activities_for_city(&self, city: CityId) -> impl Iterator<Item = &Activity> {
        self.activities
            .iter()
            .filter(move |activity| activity.city_id == city)
    }

    /// Travel duration between two cities, in either direction.
    #[must_use]
    pub fn travel_between(&self, a: CityId, b: CityId) -> LegDuration {
        self.travel_hours
            .get(&pair_key(a, b))
            .map_or(LegDuration::Unavailable, |hours| LegDuration::Hours(*hours))
    }
}
