use chrono::NaiveDate;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub on_start_change: Callback<Option<NaiveDate>>,
    pub on_end_change: Callback<Option<NaiveDate>>,
}

/// Value of a date input; clearing the control yields an empty string,
/// which means "no selection".
fn parse_date_value(value: &str) -> Option<NaiveDate> {
    value.parse().ok()
}

fn date_value(date: Option<NaiveDate>) -> AttrValue {
    date.map_or_else(AttrValue::default, |d| AttrValue::from(d.to_string()))
}

fn change_handler(cb: Callback<Option<NaiveDate>>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(parse_date_value(&input.value()));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&e, &cb);
        }
    })
}

#[function_component(DateBar)]
pub fn date_bar(props: &Props) -> Html {
    let on_start = change_handler(props.on_start_change.clone());
    let on_end = change_handler(props.on_end_change.clone());
    html! {
        <div class="travel-dates">
            <div class="form-group-inline">
                <label for="start-date">{ "Start Date: " }</label>
                <input
                    id="start-date"
                    type="date"
                    value={date_value(props.start)}
                    onchange={on_start}
                />
            </div>
            <div class="form-group-inline">
                <label for="end-date">{ "End Date: " }</label>
                <input
                    id="end-date"
                    type="date"
                    value={date_value(props.end)}
                    onchange={on_end}
                />
            </div>
        </div>
    }
}
