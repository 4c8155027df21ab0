//! Cityhop Planning Engine
//!
//! Platform-agnostic core logic for the Cityhop trip planner. This crate
//! provides the trip state, its validated transitions, and every derived
//! figure the UI displays, without UI or platform-specific dependencies.

pub mod catalog;
pub mod schedule;
pub mod trip;
pub mod view_model;

// Re-export commonly used types
pub use catalog::{Activity, ActivityId, Catalog, City, CityId, LegDuration, pair_key};
pub use schedule::{
    activity_hours, city_sequence, days_per_city, selected_activities, total_days,
    total_travel_hours,
};
pub use trip::{PlanError, RouteStop, StopId, TripState};
pub use view_model::{
    ActivityLine, CardSlot, CityCard, CityOption, LegConnector, PlanView, SummaryEntry,
    TripSummary, plan_view,
};
