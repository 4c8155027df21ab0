use cityhop_planner::TripSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Absent until both endpoints are chosen; nothing renders without it.
    #[prop_or_default]
    pub summary: Option<TripSummary>,
    pub on_close: Callback<()>,
}

#[function_component(SummaryPopup)]
pub fn summary_popup(props: &Props) -> Html {
    let container_ref = use_node_ref();
    {
        // Focus the dialog on open so Escape lands on it.
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |is_open| {
            if *is_open
                && let Some(el) = container_ref.cast::<web_sys::HtmlElement>()
            {
                let _ = el.set_attribute("tabindex", "-1");
                let _ = el.focus();
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }
    let Some(summary) = props.summary.as_ref() else {
        return Html::default();
    };

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Clicks inside the dialog must not reach the overlay and close it.
    let on_content_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div class="popup-overlay" role="presentation" onclick={on_close.clone()}>
            <div
                class="popup-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="summary-title"
                onclick={on_content_click}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <h2 id="summary-title">{ "Trip Summary" }</h2>
                <ul class="summary-list">
                    { for summary.entries.iter().map(|entry| html! {
                        <li key={entry.heading.clone()}>
                            <strong>{ format!("{}: ", entry.heading) }</strong>
                            { entry.city_name.clone() }
                            <ul>
                                { for entry.activities.iter().map(|line| html! {
                                    <li key={line.id.to_string()}>
                                        { format!("{} ({} hours)", line.name, line.duration_hours) }
                                    </li>
                                })}
                            </ul>
                        </li>
                    })}
                </ul>
                <p class="summary-total">
                    <strong>{ "Estimated Travel Duration: " }</strong>
                    { format!("{} hours", summary.total_travel_hours) }
                </p>
                <button class="close-button" onclick={on_close.clone()}>{ "Close" }</button>
            </div>
        </div>
    }
}
