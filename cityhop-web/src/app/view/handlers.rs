//! Event wiring: each callback clones the trip state, applies one named
//! transition, and commits the result back to the handle.

use chrono::NaiveDate;
use cityhop_planner::{ActivityId, CityId, PlanError, TripState};
use yew::prelude::*;

use crate::dom;

pub struct AppHandlers {
    pub start_date_change: Callback<Option<NaiveDate>>,
    pub end_date_change: Callback<Option<NaiveDate>>,
    pub start_city_change: Callback<Option<CityId>>,
    pub end_city_change: Callback<Option<CityId>>,
    pub begin_insert: Callback<usize>,
    pub commit_insert: Callback<(usize, CityId)>,
    pub remove_stop: Callback<usize>,
    pub move_stop_up: Callback<usize>,
    pub move_stop_down: Callback<usize>,
    pub toggle_activity: Callback<(CityId, ActivityId)>,
    pub toggle_summary: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(trip: &UseStateHandle<TripState>) -> Self {
        Self {
            start_date_change: build_start_date_handler(trip),
            end_date_change: build_end_date_handler(trip),
            start_city_change: build_start_city_handler(trip),
            end_city_change: build_end_city_handler(trip),
            begin_insert: build_begin_insert_handler(trip),
            commit_insert: build_commit_insert_handler(trip),
            remove_stop: build_remove_stop_handler(trip),
            move_stop_up: build_move_up_handler(trip),
            move_stop_down: build_move_down_handler(trip),
            toggle_activity: build_toggle_activity_handler(trip),
            toggle_summary: build_toggle_summary_handler(trip),
        }
    }
}

fn reject(err: &PlanError) {
    log::warn!("Rejected planner input: {err}");
    dom::alert(&err.to_string());
}

fn build_start_date_handler(trip: &UseStateHandle<TripState>) -> Callback<Option<NaiveDate>> {
    let trip = trip.clone();
    Callback::from(move |date| {
        let mut next = (*trip).clone();
        next.set_start_date(date);
        trip.set(next);
    })
}

fn build_end_date_handler(trip: &UseStateHandle<TripState>) -> Callback<Option<NaiveDate>> {
    let trip = trip.clone();
    Callback::from(move |date| {
        let mut next = (*trip).clone();
        if let Err(err) = next.set_end_date(date) {
            reject(&err);
        }
        // A rejected end date still commits: the transition cleared it.
        trip.set(next);
    })
}

fn build_start_city_handler(trip: &UseStateHandle<TripState>) -> Callback<Option<CityId>> {
    let trip = trip.clone();
    Callback::from(move |city| {
        let mut next = (*trip).clone();
        match next.set_start_city(city) {
            Ok(()) => trip.set(next),
            Err(err) => reject(&err),
        }
    })
}

fn build_end_city_handler(trip: &UseStateHandle<TripState>) -> Callback<Option<CityId>> {
    let trip = trip.clone();
    Callback::from(move |city| {
        let mut next = (*trip).clone();
        match next.set_end_city(city) {
            Ok(()) => trip.set(next),
            Err(err) => reject(&err),
        }
    })
}

fn build_begin_insert_handler(trip: &UseStateHandle<TripState>) -> Callback<usize> {
    let trip = trip.clone();
    Callback::from(move |index| {
        let mut next = (*trip).clone();
        next.begin_insert(index);
        trip.set(next);
    })
}

fn build_commit_insert_handler(trip: &UseStateHandle<TripState>) -> Callback<(usize, CityId)> {
    let trip = trip.clone();
    Callback::from(move |(index, city)| {
        let mut next = (*trip).clone();
        // The direct start-to-end picker is open without a prior "Add
        // City" press; mark its slot before committing.
        if next.pending_insert().is_none() {
            next.begin_insert(index);
        }
        match next.commit_insert(city) {
            Ok(()) => trip.set(next),
            Err(err) => reject(&err),
        }
    })
}

fn build_remove_stop_handler(trip: &UseStateHandle<TripState>) -> Callback<usize> {
    let trip = trip.clone();
    Callback::from(move |index| {
        let mut next = (*trip).clone();
        next.remove_stop(index);
        trip.set(next);
    })
}

fn build_move_up_handler(trip: &UseStateHandle<TripState>) -> Callback<usize> {
    let trip = trip.clone();
    Callback::from(move |index| {
        let mut next = (*trip).clone();
        next.move_stop_up(index);
        trip.set(next);
    })
}

fn build_move_down_handler(trip: &UseStateHandle<TripState>) -> Callback<usize> {
    let trip = trip.clone();
    Callback::from(move |index| {
        let mut next = (*trip).clone();
        next.move_stop_down(index);
        trip.set(next);
    })
}

fn build_toggle_activity_handler(
    trip: &UseStateHandle<TripState>,
) -> Callback<(CityId, ActivityId)> {
    let trip = trip.clone();
    Callback::from(move |(city, activity)| {
        let mut next = (*trip).clone();
        next.toggle_activity(city, activity);
        trip.set(next);
    })
}

fn build_toggle_summary_handler(trip: &UseStateHandle<TripState>) -> Callback<()> {
    let trip = trip.clone();
    Callback::from(move |()| {
        let mut next = (*trip).clone();
        next.toggle_summary();
        trip.set(next);
    })
}
