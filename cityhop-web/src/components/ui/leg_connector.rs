use cityhop_planner::{CityId, LegConnector};
use yew::prelude::*;

use super::city_select::CitySelect;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub connector: LegConnector,
    /// "Add City" button press at this connector's insert position.
    #[prop_or_default]
    pub on_begin_insert: Callback<usize>,
    /// City picked for the insert position; placeholder picks never emit.
    #[prop_or_default]
    pub on_choose_city: Callback<(usize, CityId)>,
}

#[function_component(LegConnectorView)]
pub fn leg_connector_view(props: &Props) -> Html {
    let connector = &props.connector;
    let slot = if connector.picker_open {
        let on_change = {
            let cb = props.on_choose_city.clone();
            let index = connector.insert_index;
            Callback::from(move |city: Option<CityId>| {
                if let Some(city) = city {
                    cb.emit((index, city));
                }
            })
        };
        html! {
            <CitySelect
                placeholder="--Add City--"
                options={connector.choices.clone()}
                aria_label="Add City"
                on_change={on_change}
            />
        }
    } else {
        let on_click = {
            let cb = props.on_begin_insert.clone();
            let index = connector.insert_index;
            Callback::from(move |_: MouseEvent| cb.emit(index))
        };
        html! {
            <button class="add-city-button" onclick={on_click}>{ "Add City" }</button>
        }
    };
    html! {
        <div class="duration-column">
            <div class="duration-label">{ connector.duration_label.clone() }</div>
            <div class="add-city-container">{ slot }</div>
        </div>
    }
}
