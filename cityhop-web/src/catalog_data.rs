//! Reference catalog embedded into the binary
//!
//! The three JSON assets are parsed once on first access; a malformed asset
//! degrades to an empty catalog instead of tearing down the app.

use cityhop_planner::Catalog;
use once_cell::sync::Lazy;
use thiserror::Error;

static CITIES_JSON: &str = include_str!("../static/assets/data/cities.json");
static ACTIVITIES_JSON: &str = include_str!("../static/assets/data/activities.json");
static TRAVEL_JSON: &str = include_str!("../static/assets/data/travel_durations.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| match load_catalog() {
    Ok(catalog) => catalog,
    Err(err) => {
        log::error!("Failed to parse embedded catalog: {err}");
        Catalog::empty()
    }
});

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse the embedded catalog assets.
///
/// # Errors
///
/// Returns an error if any of the three documents fails to parse.
pub fn load_catalog() -> Result<Catalog, CatalogLoadError> {
    Ok(Catalog::from_json(
        CITIES_JSON,
        ACTIVITIES_JSON,
        TRAVEL_JSON,
    )?)
}

/// The session-wide reference catalog.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
