//! Error type shared by every effect.
//!
//! Effects never abort the page: callers log the error through [`crate::diag`]
//! and skip only the effect that failed.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("could not get 2D context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        EffectError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<EffectError> for JsValue {
    fn from(err: EffectError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = EffectError> = std::result::Result<T, E>;
