use cityhop_planner::{CityId, CityOption};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Vec<CityOption>,
    /// Text of the empty first option.
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<CityId>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Emits the parsed selection; `None` for the placeholder.
    #[prop_or_default]
    pub on_change: Callback<Option<CityId>>,
}

/// Empty select values mean "no selection"; everything else is a city id.
fn parse_city_value(value: &str) -> Option<CityId> {
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}

#[function_component(CitySelect)]
pub fn city_select(props: &Props) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                    cb.emit(parse_city_value(&sel.value()));
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let value = props
        .value
        .map_or_else(AttrValue::default, |id| AttrValue::from(id.to_string()));
    html! {
        <select
            id={props.id.clone()}
            aria-label={props.aria_label.clone()}
            value={value}
            onchange={on_change}
        >
            <option value="">{ props.placeholder.clone() }</option>
            { for props.options.iter().map(|option| {
                html! {
                    <option value={option.id.to_string()} disabled={option.disabled}>
                        { option.name.clone() }
                    </option>
                }
            })}
        </select>
    }
}
