// Browser-target checks for the wasm facade: the JSON boundary and the
// JsValue error path, which only exist on wasm32.

#![cfg(target_arch = "wasm32")]

use kinetic_core::Engine;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn engine_round_trips_through_json() {
    let config = r##"{
        "viewport": { "width": 1280, "height": 720 },
        "sections": [{ "id": "about", "top": 500 }],
        "nav_links": [{ "handle": "link-about", "href": "#about" }]
    }"##;
    let mut engine = Engine::new(config).expect("valid config");

    let startup = engine.bootstrap(0).expect("bootstrap serializes");
    assert!(startup.contains("commands"));

    let events = r#"{"events":[{"timestamp":10,"kind":{"type":"Scroll","offset":650.0}}]}"#;
    let out = engine.process_events(events).expect("events serialize");
    assert!(out.contains("link-about"));
}

#[wasm_bindgen_test]
fn invalid_config_surfaces_a_js_error() {
    assert!(Engine::new("not json").is_err());
}

#[wasm_bindgen_test]
fn invalid_events_surface_a_js_error() {
    let mut engine = Engine::new("{}").expect("empty config uses defaults");
    assert!(engine.process_events("[broken").is_err());
}
