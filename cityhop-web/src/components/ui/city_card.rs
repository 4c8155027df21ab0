use cityhop_planner::{ActivityId, CardSlot, CityCard, CityId};
use yew::prelude::*;

use super::city_select::CitySelect;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: CityCard,
    /// Endpoint picker change; unused by stop cards.
    #[prop_or_default]
    pub on_city_change: Callback<Option<CityId>>,
    #[prop_or_default]
    pub on_toggle_activity: Callback<(CityId, ActivityId)>,
    #[prop_or_default]
    pub on_move_up: Callback<usize>,
    #[prop_or_default]
    pub on_move_down: Callback<usize>,
    #[prop_or_default]
    pub on_remove: Callback<usize>,
}

#[function_component(CityCardView)]
pub fn city_card_view(props: &Props) -> Html {
    match props.card.slot {
        CardSlot::Start => endpoint_card(props, "Start City", "start-city"),
        CardSlot::End => endpoint_card(props, "End City", "end-city"),
        CardSlot::Stop { index } => stop_card(props, index),
    }
}

fn endpoint_card(props: &Props, role: &str, select_id: &str) -> Html {
    let card = &props.card;
    html! {
        <div class="city-card">
            { badge(card) }
            <h3>{ role }</h3>
            <label for={select_id.to_string()}>{ format!("{role}: ") }</label>
            <CitySelect
                id={select_id.to_string()}
                placeholder={format!("--Select {role}--")}
                options={card.city_options.clone()}
                value={card.city}
                aria_label={role.to_string()}
                on_change={props.on_city_change.clone()}
            />
            { activities_block(props) }
        </div>
    }
}

fn stop_card(props: &Props, index: usize) -> Html {
    let card = &props.card;
    let on_up = indexed(props.on_move_up.clone(), index);
    let on_down = indexed(props.on_move_down.clone(), index);
    let on_remove = indexed(props.on_remove.clone(), index);
    html! {
        <div class="city-card">
            { badge(card) }
            <h3>{ format!("Stop {}", index + 1) }</h3>
            <h3>{ card.city_name.clone().unwrap_or_default() }</h3>
            { activities_block(props) }
            <div class="city-actions">
                <button onclick={on_up} disabled={!card.can_move_up}>{ "Move Up" }</button>
                <button onclick={on_down} disabled={!card.can_move_down}>{ "Move Down" }</button>
                <button onclick={on_remove}>{ "Remove" }</button>
            </div>
        </div>
    }
}

fn badge(card: &CityCard) -> Html {
    card.days_badge.as_ref().map_or_else(Html::default, |text| {
        html! { <div class="days-per-city">{ text.clone() }</div> }
    })
}

fn activities_block(props: &Props) -> Html {
    let card = &props.card;
    let Some(city) = card.city else {
        return Html::default();
    };
    html! {
        <div class="city-activities">
            <ul class="activities-list">
                { for card.activities.iter().map(|line| {
                    let on_toggle = {
                        let cb = props.on_toggle_activity.clone();
                        let id = line.id;
                        Callback::from(move |_: Event| cb.emit((city, id)))
                    };
                    html! {
                        <li key={line.id.to_string()}>
                            <label>
                                <input
                                    type="checkbox"
                                    checked={line.selected}
                                    onchange={on_toggle}
                                />
                                { format!("{} ({} hours)", line.name, line.duration_hours) }
                            </label>
                        </li>
                    }
                })}
            </ul>
            <div class="total-activity-duration">
                { format!("Activity Duration: {} hrs", card.activity_hours) }
            </div>
        </div>
    }
}

fn indexed(cb: Callback<usize>, index: usize) -> Callback<MouseEvent> {
    Callback::from(move |_| cb.emit(index))
}
