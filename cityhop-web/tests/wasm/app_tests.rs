use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlSelectElement;
use yew::Renderer;

use cityhop_web::app::App;
use cityhop_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn fresh_page_shows_the_untitled_planner() {
    render_app();
    let doc = dom::document();
    let heading = doc.query_selector("h1").expect("query h1").expect("h1 exists");
    assert_eq!(heading.text_content().unwrap_or_default(), "Travel Planner");
    assert!(
        doc.query_selector(".done-button")
            .expect("query done button")
            .is_none(),
        "summary button must wait for both endpoints"
    );
}

#[wasm_bindgen_test]
fn date_inputs_are_present_and_empty() {
    render_app();
    let doc = dom::document();
    for id in ["start-date", "end-date"] {
        let input = doc.get_element_by_id(id).expect("date input exists");
        assert_eq!(input.get_attribute("type").unwrap_or_default(), "date");
    }
}

#[wasm_bindgen_test]
fn endpoint_pickers_offer_the_whole_catalog() {
    render_app();
    let doc = dom::document();
    for id in ["start-city", "end-city"] {
        let select: HtmlSelectElement = doc
            .get_element_by_id(id)
            .expect("endpoint select exists")
            .dyn_into()
            .expect("cast to select");
        // Placeholder plus one option per catalog city.
        let expected = cityhop_web::catalog_data::catalog().cities.len() + 1;
        assert_eq!(select.length() as usize, expected);
        assert_eq!(select.value(), "", "fresh pickers start on the placeholder");
    }
}
