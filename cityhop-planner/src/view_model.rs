//! Render model for the planner page
//!
//! [`plan_view`] maps the current [`TripState`] and [`Catalog`] onto plain
//! data the UI can print without computing anything itself.

use crate::catalog::{ActivityId, Catalog, CityId};
use crate::schedule;
use crate::trip::TripState;

/// Position a card occupies in the itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Start,
    Stop { index: usize },
    End,
}

/// One activity checkbox row.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLine {
    pub id: ActivityId,
    pub name: String,
    pub duration_hours: f64,
    pub selected: bool,
}

/// One entry of a city picker.
#[derive(Debug, Clone, PartialEq)]
pub struct CityOption {
    pub id: CityId,
    pub name: String,
    pub disabled: bool,
}

/// One itinerary card: the start city, an intermediate stop, or the end
/// city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityCard {
    pub slot: CardSlot,
    /// Stable render key; stops use their generated stop id.
    pub key: String,
    pub city: Option<CityId>,
    pub city_name: Option<String>,
    /// `Some` once the card has a city and both trip dates are set.
    pub days_badge: Option<String>,
    /// Full catalog for the endpoint pickers, used cities disabled. Empty
    /// for stop cards, which have no picker.
    pub city_options: Vec<CityOption>,
    pub activities: Vec<ActivityLine>,
    pub activity_hours: f64,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

/// Connector between two consecutive cards: the leg's travel time plus the
/// insertion slot at that position.
#[derive(Debug, Clone, PartialEq)]
pub struct LegConnector {
    /// Formatted travel time, or empty while either neighbouring city is
    /// unset.
    pub duration_label: String,
    pub insert_index: usize,
    /// Whether the slot shows the city picker instead of its button.
    pub picker_open: bool,
    /// Cities not yet part of the trip, offered by the picker.
    pub choices: Vec<CityOption>,
}

/// Summary line for one visited city.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub heading: String,
    pub city_name: String,
    /// Selected activities only, in catalog order.
    pub activities: Vec<ActivityLine>,
}

/// Read-only trip summary shown by the popup.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub entries: Vec<SummaryEntry>,
    pub total_travel_hours: f64,
}

/// Complete render model for the planner page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    pub title: String,
    pub cards: Vec<CityCard>,
    /// `connectors[i]` sits between `cards[i]` and `cards[i + 1]`. The
    /// start-to-end connector of an empty route is `None` until both
    /// endpoints are chosen.
    pub connectors: Vec<Option<LegConnector>>,
    pub can_summarize: bool,
    pub summary_open: bool,
    pub summary: Option<TripSummary>,
}

/// Derive the full render model for the current state.
#[must_use]
pub fn plan_view(trip: &TripState, catalog: &Catalog) -> PlanView {
    let cards = build_cards(trip, catalog);
    let connectors = build_connectors(trip, catalog, &cards);
    let can_summarize = trip.can_summarize();
    let summary =
        (trip.summary_open() && can_summarize).then(|| build_summary(trip, catalog));
    PlanView {
        title: title_for(trip),
        cards,
        connectors,
        can_summarize,
        summary_open: trip.summary_open(),
        summary,
    }
}

fn title_for(trip: &TripState) -> String {
    match schedule::total_days(trip) {
        Some(days) if days > 0 => format!("{days} Day Travel Planner"),
        _ => "Travel Planner".to_string(),
    }
}

/// Badge text for a card with a city, once both trip dates are set. A
/// zero-day trip shows "0 Days"; the noun is singular exactly for the
/// rendered figure "1.0".
fn days_badge(trip: &TripState, city: Option<CityId>) -> Option<String> {
    if city.is_none() || trip.start_date().is_none() || trip.end_date().is_none() {
        return None;
    }
    Some(schedule::days_per_city(trip).map_or_else(
        || "0 Days".to_string(),
        |days| {
            let figure = format!("{days:.1}");
            let noun = if figure == "1.0" { "Day" } else { "Days" };
            format!("{figure} {noun}")
        },
    ))
}

fn activity_lines(trip: &TripState, catalog: &Catalog, city: CityId) -> Vec<ActivityLine> {
    catalog
        .activities_for_city(city)
        .map(|activity| ActivityLine {
            id: activity.id,
            name: activity.name.clone(),
            duration_hours: activity.duration_hours,
            selected: trip.is_activity_selected(city, activity.id),
        })
        .collect()
}

/// Options for the endpoint pickers: the whole catalog, used cities
/// disabled.
fn endpoint_options(trip: &TripState, catalog: &Catalog) -> Vec<CityOption> {
    catalog
        .cities
        .iter()
        .map(|city| CityOption {
            id: city.id,
            name: city.name.clone(),
            disabled: trip.is_city_selected(city.id),
        })
        .collect()
}

/// Options for the insert pickers: used cities are left out entirely.
fn insert_choices(trip: &TripState, catalog: &Catalog) -> Vec<CityOption> {
    catalog
        .cities
        .iter()
        .filter(|city| !trip.is_city_selected(city.id))
        .map(|city| CityOption {
            id: city.id,
            name: city.name.clone(),
            disabled: false,
        })
        .collect()
}

fn endpoint_card(
    trip: &TripState,
    catalog: &Catalog,
    slot: CardSlot,
    city: Option<CityId>,
    city_options: Vec<CityOption>,
) -> CityCard {
    let key = if matches!(slot, CardSlot::Start) { "start" } else { "end" };
    CityCard {
        slot,
        key: key.to_string(),
        city,
        city_name: city.and_then(|id| catalog.city_name(id)).map(str::to_string),
        days_badge: days_badge(trip, city),
        city_options,
        activities: city.map_or_else(Vec::new, |id| activity_lines(trip, catalog, id)),
        activity_hours: city.map_or(0.0, |id| schedule::activity_hours(trip, catalog, id)),
        can_move_up: false,
        can_move_down: false,
    }
}

fn build_cards(trip: &TripState, catalog: &Catalog) -> Vec<CityCard> {
    let options = endpoint_options(trip, catalog);
    let stop_count = trip.route().len();
    let mut cards = Vec::with_capacity(stop_count + 2);

    cards.push(endpoint_card(
        trip,
        catalog,
        CardSlot::Start,
        trip.start_city(),
        options.clone(),
    ));
    for (index, stop) in trip.route().iter().enumerate() {
        cards.push(CityCard {
            slot: CardSlot::Stop { index },
            key: stop.id.to_string(),
            city: Some(stop.city),
            city_name: catalog.city_name(stop.city).map(str::to_string),
            days_badge: days_badge(trip, Some(stop.city)),
            city_options: Vec::new(),
            activities: activity_lines(trip, catalog, stop.city),
            activity_hours: schedule::activity_hours(trip, catalog, stop.city),
            can_move_up: index > 0,
            can_move_down: index + 1 < stop_count,
        });
    }
    cards.push(endpoint_card(
        trip,
        catalog,
        CardSlot::End,
        trip.end_city(),
        options,
    ));
    cards
}

fn leg_label(catalog: &Catalog, from: Option<CityId>, to: Option<CityId>) -> String {
    match (from, to) {
        (Some(a), Some(b)) => catalog.travel_between(a, b).to_string(),
        _ => String::new(),
    }
}

fn build_connectors(
    trip: &TripState,
    catalog: &Catalog,
    cards: &[CityCard],
) -> Vec<Option<LegConnector>> {
    let choices = insert_choices(trip, catalog);
    let route_len = trip.route().len();
    cards
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            // Direct start-to-end slot appears only once both endpoints
            // are chosen; its picker never collapses to a button.
            if route_len == 0 && !trip.can_summarize() {
                return None;
            }
            Some(LegConnector {
                duration_label: leg_label(catalog, pair[0].city, pair[1].city),
                insert_index: index,
                picker_open: route_len == 0 || trip.pending_insert() == Some(index),
                choices: choices.clone(),
            })
        })
        .collect()
}

fn summary_entry(
    trip: &TripState,
    catalog: &Catalog,
    heading: String,
    city: CityId,
) -> SummaryEntry {
    SummaryEntry {
        heading,
        city_name: catalog.city_name(city).unwrap_or_default().to_string(),
        activities: activity_lines(trip, catalog, city)
            .into_iter()
            .filter(|line| line.selected)
            .collect(),
    }
}

fn build_summary(trip: &TripState, catalog: &Catalog) -> TripSummary {
    let mut entries = Vec::with_capacity(trip.route().len() + 2);
    if let Some(start) = trip.start_city() {
        entries.push(summary_entry(trip, catalog, "Start City".to_string(), start));
    }
    for (index, stop) in trip.route().iter().enumerate() {
        entries.push(summary_entry(
            trip,
            catalog,
            format!("Stop {}", index + 1),
            stop.city,
        ));
    }
    if let Some(end) = trip.end_city() {
        entries.push(summary_entry(trip, catalog, "End City".to_string(), end));
    }
    TripSummary {
        entries,
        total_travel_hours: schedule::total_travel_hours(trip, catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date should parse")
    }

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                { "id": 1, "name": "Amsterdam" },
                { "id": 2, "name": "Berlin" },
                { "id": 3, "name": "Prague" },
                { "id": 4, "name": "Vienna" }
            ]"#,
            r#"[
                { "id": 10, "cityId": 1, "name": "Canal cruise", "duration": 1.5 },
                { "id": 11, "cityId": 1, "name": "Rijksmuseum", "duration": 3 },
                { "id": 12, "cityId": 2, "name": "Museum Island", "duration": 4 }
            ]"#,
            r#"{ "1-2": 5, "2-3": 4.5 }"#,
        )
        .expect("fixture catalog should parse")
    }

    fn planned_trip() -> TripState {
        let mut trip = TripState::default();
        trip.set_start_city(Some(CityId(1))).expect("start city");
        trip.set_end_city(Some(CityId(2))).expect("end city");
        trip
    }

    #[test]
    fn title_shows_day_count_only_for_positive_totals() {
        let mut trip = TripState::default();
        assert_eq!(title_for(&trip), "Travel Planner");
        trip.set_start_date(Some(date("2026-09-10")));
        trip.set_end_date(Some(date("2026-09-10"))).expect("same day");
        assert_eq!(title_for(&trip), "Travel Planner");
        trip.set_end_date(Some(date("2026-09-15"))).expect("later end");
        assert_eq!(title_for(&trip), "5 Day Travel Planner");
    }

    #[test]
    fn cards_wrap_the_route_between_the_endpoints() {
        let mut trip = planned_trip();
        trip.begin_insert(0);
        trip.commit_insert(CityId(3)).expect("stop");
        let view = plan_view(&trip, &catalog());

        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.cards[0].slot, CardSlot::Start);
        assert_eq!(view.cards[0].key, "start");
        assert_eq!(view.cards[1].slot, CardSlot::Stop { index: 0 });
        assert_eq!(view.cards[1].city_name.as_deref(), Some("Prague"));
        assert_eq!(view.cards[2].slot, CardSlot::End);
        assert_eq!(view.connectors.len(), 2);
    }

    #[test]
    fn stop_keys_are_their_generated_ids() {
        let mut trip = planned_trip();
        trip.begin_insert(0);
        trip.commit_insert(CityId(3)).expect("stop");
        let view = plan_view(&trip, &catalog());
        assert_eq!(view.cards[1].key, "stop-1");
    }

    #[test]
    fn days_badge_waits_for_city_and_both_dates() {
        let mut trip = planned_trip();
        let view = plan_view(&trip, &catalog());
        assert_eq!(view.cards[0].days_badge, None);

        trip.set_start_date(Some(date("2026-09-10")));
        trip.set_end_date(Some(date("2026-09-12"))).expect("later end");
        let view = plan_view(&trip, &catalog());
        assert_eq!(view.cards[0].days_badge.as_deref(), Some("1.0 Day"));
    }

    #[test]
    fn days_badge_pluralizes_everything_but_the_exact_single_day() {
        let mut trip = planned_trip();
        trip.set_start_date(Some(date("2026-09-10")));
        trip.set_end_date(Some(date("2026-09-14"))).expect("later end");
        let view = plan_view(&trip, &catalog());
        assert_eq!(view.cards[0].days_badge.as_deref(), Some("2.0 Days"));

        trip.set_end_date(Some(date("2026-09-10"))).expect("same day");
        let view = plan_view(&trip, &catalog());
        assert_eq!(view.cards[0].days_badge.as_deref(), Some("0 Days"));
    }

    #[test]
    fn endpoint_pickers_disable_used_cities() {
        let mut trip = planned_trip();
        trip.begin_insert(0);
        trip.commit_insert(CityId(3)).expect("stop");
        let view = plan_view(&trip, &catalog());

        let disabled: Vec<bool> = view.cards[0]
            .city_options
            .iter()
            .map(|option| option.disabled)
            .collect();
        assert_eq!(disabled, [true, true, true, false]);
    }

    #[test]
    fn insert_pickers_offer_only_unused_cities() {
        let mut trip = planned_trip();
        let view = plan_view(&trip, &catalog());
        let connector = view.connectors[0].as_ref().expect("direct connector");
        let names: Vec<&str> = connector
            .choices
            .iter()
            .map(|option| option.name.as_str())
            .collect();
        assert_eq!(names, ["Prague", "Vienna"]);
    }

    #[test]
    fn direct_connector_waits_for_both_endpoints_and_keeps_its_picker_open() {
        let mut trip = TripState::default();
        trip.set_start_city(Some(CityId(1))).expect("start city");
        let view = plan_view(&trip, &catalog());
        assert_eq!(view.connectors, [None]);

        trip.set_end_city(Some(CityId(2))).expect("end city");
        let view = plan_view(&trip, &catalog());
        let connector = view.connectors[0].as_ref().expect("direct connector");
        assert!(connector.picker_open);
        assert_eq!(connector.duration_label, "5 hours");
        assert_eq!(connector.insert_index, 0);
    }

    #[test]
    fn route_connectors_toggle_between_button_and_picker() {
        let mut trip = planned_trip();
        trip.begin_insert(0);
        trip.commit_insert(CityId(3)).expect("stop");
        let view = plan_view(&trip, &catalog());
        assert!(view.connectors.iter().all(|connector| {
            connector.as_ref().is_some_and(|c| !c.picker_open)
        }));

        trip.begin_insert(1);
        let view = plan_view(&trip, &catalog());
        let open: Vec<bool> = view
            .connectors
            .iter()
            .map(|connector| connector.as_ref().expect("route connector").picker_open)
            .collect();
        assert_eq!(open, [false, true]);
    }

    #[test]
    fn unavailable_leg_labels_do_not_hide_the_connector() {
        let mut trip = TripState::default();
        trip.set_start_city(Some(CityId(1))).expect("start city");
        trip.set_end_city(Some(CityId(4))).expect("end city");
        let view = plan_view(&trip, &catalog());
        let connector = view.connectors[0].as_ref().expect("direct connector");
        assert_eq!(connector.duration_label, "Duration not available");
    }

    #[test]
    fn clearing_an_endpoint_empties_the_neighbouring_leg_label() {
        let mut trip = planned_trip();
        trip.begin_insert(0);
        trip.commit_insert(CityId(3)).expect("stop");
        trip.set_start_city(None).expect("clear start");
        let view = plan_view(&trip, &catalog());

        let first = view.connectors[0].as_ref().expect("connector stays");
        assert_eq!(first.duration_label, "");
        let second = view.connectors[1].as_ref().expect("connector stays");
        assert_eq!(second.duration_label, "4.5 hours");
    }

    #[test]
    fn summary_appears_only_while_open_and_summarizable() {
        let mut trip = planned_trip();
        let view = plan_view(&trip, &catalog());
        assert!(view.can_summarize);
        assert!(view.summary.is_none());

        trip.toggle_summary();
        let view = plan_view(&trip, &catalog());
        assert!(view.summary_open);
        let summary = view.summary.expect("open summary");
        assert_eq!(summary.total_travel_hours, 5.0);
    }

    #[test]
    fn summary_lists_cities_in_visiting_order_with_selected_activities() {
        let mut trip = planned_trip();
        trip.begin_insert(0);
        trip.commit_insert(CityId(3)).expect("stop");
        trip.toggle_activity(CityId(1), ActivityId(10));
        trip.toggle_activity(CityId(2), ActivityId(12));
        trip.toggle_summary();
        let view = plan_view(&trip, &catalog());
        let summary = view.summary.expect("open summary");

        let headings: Vec<&str> = summary
            .entries
            .iter()
            .map(|entry| entry.heading.as_str())
            .collect();
        assert_eq!(headings, ["Start City", "Stop 1", "End City"]);
        assert_eq!(summary.entries[0].city_name, "Amsterdam");
        assert_eq!(summary.entries[0].activities.len(), 1);
        assert_eq!(summary.entries[0].activities[0].name, "Canal cruise");
        assert!(summary.entries[1].activities.is_empty());
        assert_eq!(summary.entries[2].activities[0].name, "Museum Island");
    }

    #[test]
    fn stop_cards_report_their_movability() {
        let mut trip = planned_trip();
        for city in [3, 4] {
            trip.begin_insert(trip.route().len());
            trip.commit_insert(CityId(city)).expect("stop");
        }
        let view = plan_view(&trip, &catalog());
        assert!(!view.cards[1].can_move_up);
        assert!(view.cards[1].can_move_down);
        assert!(view.cards[2].can_move_up);
        assert!(!view.cards[2].can_move_down);
    }

    #[test]
    fn activity_rows_mirror_selection_state() {
        let mut trip = planned_trip();
        trip.toggle_activity(CityId(1), ActivityId(11));
        let view = plan_view(&trip, &catalog());
        let rows: Vec<(&str, bool)> = view.cards[0]
            .activities
            .iter()
            .map(|line| (line.name.as_str(), line.selected))
            .collect();
        assert_eq!(rows, [("Canal cruise", false), ("Rijksmuseum", true)]);
        assert_eq!(view.cards[0].activity_hours, 3.0);
    }
}
