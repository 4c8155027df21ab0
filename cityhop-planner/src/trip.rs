//! Trip state and the named transitions that mutate it
//!
//! All session state lives in [`TripState`]; every mutation goes through a
//! transition method so the route invariants are enforced in one place.
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

use crate::catalog::{ActivityId, CityId};

/// Rejection produced by a validated transition.
///
/// Nothing here is fatal: the UI surfaces the message as a blocking alert
/// and the prior valid state is kept, except for the end-date rule which
/// additionally clears the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The city already serves as start, end, or an intermediate stop.
    #[error("City is already selected. Please choose a different city.")]
    CityInUse { city: CityId },
    /// The chosen end date precedes the current start date.
    #[error("End date cannot be before start date.")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// Generated token identifying one route entry.
///
/// Distinct from the city id so a stop keeps its identity while it is
/// reordered, and so a removed city can come back later as a fresh stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One intermediate stop on the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStop {
    pub id: StopId,
    pub city: CityId,
}

/// All mutable planner state for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripState {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_city: Option<CityId>,
    end_city: Option<CityId>,
    route: Vec<RouteStop>,
    selections: BTreeMap<CityId, BTreeSet<ActivityId>>,
    pending_insert: Option<usize>,
    summary_open: bool,
    next_stop_seq: u64,
}

impl TripState {
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[must_use]
    pub const fn start_city(&self) -> Option<CityId> {
        self.start_city
    }

    #[must_use]
    pub const fn end_city(&self) -> Option<CityId> {
        self.end_city
    }

    /// Intermediate stops in visiting order.
    #[must_use]
    pub fn route(&self) -> &[RouteStop] {
        &self.route
    }

    /// Insertion slot currently offering a city picker, if any.
    #[must_use]
    pub const fn pending_insert(&self) -> Option<usize> {
        self.pending_insert
    }

    #[must_use]
    pub const fn summary_open(&self) -> bool {
        self.summary_open
    }

    /// Set or clear the start date. Not validated: changing the start
    /// never touches an already chosen end date.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    /// Set or clear the end date.
    ///
    /// # Errors
    ///
    /// Rejects an end date earlier than the current start date; the end
    /// date is left unset in that case.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) -> Result<(), PlanError> {
        if let (Some(start), Some(end)) = (self.start_date, date)
            && end < start
        {
            self.end_date = None;
            return Err(PlanError::EndBeforeStart { start, end });
        }
        self.end_date = date;
        Ok(())
    }

    /// True when the city is already the start, the end, or one of the
    /// stops.
    #[must_use]
    pub fn is_city_selected(&self, city: CityId) -> bool {
        self.start_city == Some(city)
            || self.end_city == Some(city)
            || self.route.iter().any(|stop| stop.city == city)
    }

    /// Choose the start city, or clear it with `None` (the placeholder
    /// option stays selectable).
    ///
    /// # Errors
    ///
    /// Rejects a city already used anywhere in the trip, including the
    /// current start itself.
    pub fn set_start_city(&mut self, city: Option<CityId>) -> Result<(), PlanError> {
        if let Some(city) = city
            && self.is_city_selected(city)
        {
            return Err(PlanError::CityInUse { city });
        }
        self.start_city = city;
        Ok(())
    }

    /// Choose the end city, or clear it with `None`.
    ///
    /// # Errors
    ///
    /// Rejects a city already used anywhere in the trip.
    pub fn set_end_city(&mut self, city: Option<CityId>) -> Result<(), PlanError> {
        if let Some(city) = city
            && self.is_city_selected(city)
        {
            return Err(PlanError::CityInUse { city });
        }
        self.end_city = city;
        Ok(())
    }

    /// Mark the insertion slot at `index` (0 is before the first stop,
    /// `route().len()` is after the last). Only one slot can be pending; a
    /// new mark replaces the previous one.
    pub fn begin_insert(&mut self, index: usize) {
        self.pending_insert = Some(index);
    }

    /// Drop the pending insertion slot without inserting anything.
    pub fn cancel_insert(&mut self) {
        self.pending_insert = None;
    }

    /// Insert a stop for `city` at the pending slot and clear the slot.
    /// Without a pending slot this is a no-op.
    ///
    /// # Errors
    ///
    /// Rejects a city already used anywhere in the trip; the slot stays
    /// pending so another city can be chosen.
    pub fn commit_insert(&mut self, city: CityId) -> Result<(), PlanError> {
        let Some(index) = self.pending_insert else {
            return Ok(());
        };
        if self.is_city_selected(city) {
            return Err(PlanError::CityInUse { city });
        }
        let id = self.next_stop_id();
        // The route may have shrunk since the slot was marked.
        let index = index.min(self.route.len());
        self.route.insert(index, RouteStop { id, city });
        self.pending_insert = None;
        Ok(())
    }

    /// Remove the stop at `index`. Out-of-range indices are ignored.
    pub fn remove_stop(&mut self, index: usize) {
        if index < self.route.len() {
            self.route.remove(index);
        }
    }

    /// Swap the stop with its predecessor. No-op for the first stop.
    pub fn move_stop_up(&mut self, index: usize) {
        if index > 0 && index < self.route.len() {
            self.route.swap(index - 1, index);
        }
    }

    /// Swap the stop with its successor. No-op for the last stop.
    pub fn move_stop_down(&mut self, index: usize) {
        if index + 1 < self.route.len() {
            self.route.swap(index, index + 1);
        }
    }

    /// Flip one activity in the city's selection set. Other cities'
    /// selections are untouched.
    pub fn toggle_activity(&mut self, city: CityId, activity: ActivityId) {
        let picked = self.selections.entry(city).or_default();
        if !picked.insert(activity) {
            picked.remove(&activity);
        }
    }

    #[must_use]
    pub fn is_activity_selected(&self, city: CityId, activity: ActivityId) -> bool {
        self.selections
            .get(&city)
            .is_some_and(|picked| picked.contains(&activity))
    }

    /// Selected activity ids for a city. Selections survive a city leaving
    /// the trip; they are simply not shown until the city returns.
    #[must_use]
    pub fn selected_for(&self, city: CityId) -> Option<&BTreeSet<ActivityId>> {
        self.selections.get(&city)
    }

    /// Both endpoints chosen; gates the summary control.
    #[must_use]
    pub const fn can_summarize(&self) -> bool {
        self.start_city.is_some() && self.end_city.is_some()
    }

    pub fn toggle_summary(&mut self) {
        self.summary_open = !self.summary_open;
    }

    fn next_stop_id(&mut self) -> StopId {
        self.next_stop_seq += 1;
        StopId(format!("stop-{}", self.next_stop_seq))
    }
}
