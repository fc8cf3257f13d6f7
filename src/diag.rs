//! Diagnostics output.
//!
//! On wasm32 messages go to the browser console; on the host (tests, headless
//! tooling) they go to stderr so nothing touches JS imports.

#[cfg(target_arch = "wasm32")]
mod sink {
    use wasm_bindgen::JsValue;

    pub fn info(msg: &str) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }

    pub fn warn(msg: &str) {
        web_sys::console::warn_1(&JsValue::from_str(msg));
    }

    pub fn error(msg: &str) {
        web_sys::console::error_1(&JsValue::from_str(msg));
    }

    /// `console.log("%c" + text, css)`
    pub fn styled(text: &str, css: &str) {
        web_sys::console::log_2(&JsValue::from_str(&format!("%c{text}")), &JsValue::from_str(css));
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    pub fn info(msg: &str) {
        eprintln!("[info] {msg}");
    }

    pub fn warn(msg: &str) {
        eprintln!("[warn] {msg}");
    }

    pub fn error(msg: &str) {
        eprintln!("[error] {msg}");
    }

    pub fn styled(text: &str, _css: &str) {
        eprintln!("{text}");
    }
}

pub use sink::{error, info, styled, warn};
