mod handlers;

pub use handlers::AppHandlers;

use cityhop_planner::{CardSlot, plan_view};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::catalog_data;
use crate::components::ui::city_card::CityCardView;
use crate::components::ui::date_bar::DateBar;
use crate::components::ui::leg_connector::LegConnectorView;
use crate::components::ui::summary_popup::SummaryPopup;

/// Render the whole planner page from the current state.
pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(&state.trip);
    let view = plan_view(&state.trip, catalog_data::catalog());

    let open_summary = {
        let cb = handlers.toggle_summary.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let mut row: Vec<Html> = Vec::with_capacity(view.cards.len() * 2);
    for (index, card) in view.cards.iter().enumerate() {
        if index > 0
            && let Some(connector) = view.connectors.get(index - 1).and_then(Option::as_ref)
        {
            row.push(html! {
                <LegConnectorView
                    key={format!("leg-{}", connector.insert_index)}
                    connector={connector.clone()}
                    on_begin_insert={handlers.begin_insert.clone()}
                    on_choose_city={handlers.commit_insert.clone()}
                />
            });
        }
        let on_city_change = match card.slot {
            CardSlot::Start => handlers.start_city_change.clone(),
            CardSlot::End => handlers.end_city_change.clone(),
            CardSlot::Stop { .. } => Callback::noop(),
        };
        row.push(html! {
            <CityCardView
                key={card.key.clone()}
                card={card.clone()}
                on_city_change={on_city_change}
                on_toggle_activity={handlers.toggle_activity.clone()}
                on_move_up={handlers.move_stop_up.clone()}
                on_move_down={handlers.move_stop_down.clone()}
                on_remove={handlers.remove_stop.clone()}
            />
        });
    }

    html! {
        <div class="app">
            <h1>{ view.title.clone() }</h1>
            { view.can_summarize.then(|| html! {
                <button class="done-button" onclick={open_summary}>{ "Done" }</button>
            }).unwrap_or_default() }
            <SummaryPopup
                open={view.summary_open}
                summary={view.summary.clone()}
                on_close={handlers.toggle_summary.clone()}
            />
            <DateBar
                start={state.trip.start_date()}
                end={state.trip.end_date()}
                on_start_change={handlers.start_date_change.clone()}
                on_end_change={handlers.end_date_change.clone()}
            />
            <div class="itinerary">
                <div class="city-row">
                    { for row }
                </div>
            </div>
        </div>
    }
}
