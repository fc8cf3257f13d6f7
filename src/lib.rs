//! Cyber Rain core crate.
//!
//! Visual effects for the security club's static site, compiled to WASM. The
//! centrepiece is the falling-character canvas ([`MatrixRain`]); the rest are
//! small page effects installed by [`start_site`] according to a [`SiteConfig`].
//!
//! Browser-free logic (rain columns, frame loop, effect state machines) builds
//! and tests on the host; only `canvas` and `site` touch the DOM at runtime.

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod canvas;
pub mod config;
pub mod diag;
pub mod effects;
pub mod error;
pub mod frame;
pub mod palette;
pub mod rain;
pub mod random;
pub mod site;

pub use animation::RainAnimation;
pub use canvas::MatrixRain;
pub use config::SiteConfig;
pub use error::EffectError;
pub use frame::{FrameLoop, FrameScheduler, ManualScheduler};
pub use palette::{CharsetMode, Palette};
pub use rain::{DigitalRain, RainStyle, RainSurface};
pub use random::RandomSource;
pub use site::Site;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Install the main site's effects. Keep the returned handle alive for as long
/// as the effects should run.
#[wasm_bindgen]
pub fn start_site() -> Result<Site, JsValue> {
    Ok(site::boot(&SiteConfig::default())?)
}

/// Like [`start_site`] with a JSON [`SiteConfig`]; omitted fields keep their
/// defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_site_with_config(config_json: &str) -> Result<Site, JsValue> {
    let config = SiteConfig::from_json(config_json).map_err(|e| JsValue::from_str(&format!("invalid site config: {e}")))?;
    Ok(site::boot(&config)?)
}
