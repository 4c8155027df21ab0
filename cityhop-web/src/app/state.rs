use cityhop_planner::TripState;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub trip: UseStateHandle<TripState>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        trip: use_state(TripState::default),
    }
}
