#![cfg(target_arch = "wasm32")]

use cyber_rain::{CharsetMode, EffectError, MatrixRain, RainStyle, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str, width: u32, height: u32) -> web_sys::HtmlCanvasElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    doc.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_gives_inert_handle() {
    let rain = MatrixRain::new("no-such-canvas", "binary");
    assert!(!rain.is_active());
    rain.start();
    rain.resize(300.0, 150.0);
    rain.stop();
    assert_eq!(rain.column_count(), 0);
    assert!(!rain.is_running());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let div = doc.create_element("div").unwrap();
    div.set_id("rain-div");
    doc.body().unwrap().append_child(&div).unwrap();
    assert!(!MatrixRain::new("rain-div", "hex").is_active());
}

#[wasm_bindgen_test]
fn resize_sets_column_count() {
    add_canvas("rain-test", 10, 10);
    let rain = MatrixRain::new("rain-test", "binary");
    assert!(rain.is_active());
    rain.resize(300.0, 150.0);
    assert_eq!(rain.column_count(), 21);
    rain.start();
    assert!(rain.is_running());
    rain.stop();
    assert!(!rain.is_running());
}

#[wasm_bindgen_test]
fn attach_reports_the_real_cause() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let div = doc.create_element("div").unwrap();
    div.set_id("rain-not-canvas");
    doc.body().unwrap().append_child(&div).unwrap();
    let attached = MatrixRain::attach("rain-not-canvas", CharsetMode::Binary, RainStyle::default());
    assert!(matches!(attached, Err(EffectError::NotACanvas(id)) if id == "rain-not-canvas"));
    let missing = MatrixRain::attach("rain-nowhere", CharsetMode::Binary, RainStyle::default());
    assert!(matches!(missing, Err(EffectError::MissingElement(_))));
}

#[wasm_bindgen_test]
fn rain_site_with_div_target_boots_without_rain() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let div = doc.create_element("div").unwrap();
    div.set_id("site-rain-div");
    doc.body().unwrap().append_child(&div).unwrap();
    let config = SiteConfig { matrix_rain: true, rain_canvas_id: "site-rain-div".into(), ..SiteConfig::team_page() };
    let mut site = cyber_rain::site::boot(&config).unwrap();
    assert!(!site.rain_active());
    site.shutdown();
}
