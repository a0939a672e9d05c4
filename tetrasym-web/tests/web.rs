// Browser tests, run with `wasm-pack test --headless --firefox tetrasym-web`
#![cfg(target_arch = "wasm32")]

use tetrasym_web::SymmetryViewer;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(320);
    canvas.set_height(240);
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn viewer_runs_one_transition() {
    mount_canvas("viewer-a");
    let viewer = SymmetryViewer::new("viewer-a", JsValue::UNDEFINED).unwrap();
    viewer.set_auto_cycle(false);

    viewer.trigger();
    assert!(viewer.is_transitioning());

    let mut timestamp = 0.0;
    for _ in 0..1000 {
        viewer.frame(timestamp);
        timestamp += 1000.0 / 60.0;
        if !viewer.is_transitioning() {
            break;
        }
    }
    assert!(!viewer.is_transitioning());
    assert_eq!(viewer.rotation_count(), 1);
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(SymmetryViewer::new("no-such-canvas", JsValue::UNDEFINED).is_err());
}
