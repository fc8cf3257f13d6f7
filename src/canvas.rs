//! Browser binding for the digital rain: a `<canvas>` surface and the
//! `MatrixRain` handle exported to JS.

use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::animation::RainAnimation;
use crate::diag;
use crate::error::{EffectError, Result};
use crate::frame::BrowserScheduler;
use crate::palette::CharsetMode;
use crate::rain::{DigitalRain, RainStyle, RainSurface};
use crate::random;

// --- Surface -----------------------------------------------------------------

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `canvas_id` and acquire its 2D context.
    pub fn from_id(window: &Window, canvas_id: &str) -> Result<Self> {
        let doc = window.document().ok_or(EffectError::NoDocument)?;
        let el = doc
            .get_element_by_id(canvas_id)
            .ok_or_else(|| EffectError::MissingElement(canvas_id.to_string()))?;
        let canvas: HtmlCanvasElement = el
            .dyn_into()
            .map_err(|_| EffectError::NotACanvas(canvas_id.to_string()))?;
        Self::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(EffectError::NoContext)?
            .dyn_into()
            .map_err(|_| EffectError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl RainSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn fill_all(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.width(), self.height());
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: &str) {
        let mut buf = [0u8; 4];
        self.ctx.set_fill_style_str(color);
        // fillText only fails on detached contexts; a missed glyph is harmless.
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
    }
}

/// Current `innerWidth` / `innerHeight`, or `None` if unavailable.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

// --- JS handle ---------------------------------------------------------------

type Animation = RainAnimation<BrowserScheduler>;

/// Digital rain bound to a canvas element.
///
/// If the canvas or its context is unavailable the handle is inert: the
/// failure is logged once and every method becomes a no-op.
#[wasm_bindgen]
pub struct MatrixRain {
    animation: Option<Rc<Animation>>,
    window: Option<Window>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl MatrixRain {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, mode: &str) -> MatrixRain {
        MatrixRain::with_style(canvas_id, CharsetMode::from_name(mode), RainStyle::default())
    }

    pub fn start(&self) {
        if let Some(anim) = &self.animation {
            if let Err(err) = anim.start() {
                diag::error(&format!("matrix rain failed to start: {err}"));
            }
        }
    }

    pub fn stop(&self) {
        if let Some(anim) = &self.animation {
            anim.stop();
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        if let Some(anim) = &self.animation {
            if let Err(err) = anim.resize(width, height) {
                diag::error(&format!("matrix rain failed to restart after resize: {err}"));
            }
        }
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.animation.is_some()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| a.is_running())
    }

    #[wasm_bindgen(js_name = columnCount)]
    pub fn column_count(&self) -> usize {
        self.animation.as_ref().map_or(0, |a| a.column_count())
    }
}

impl MatrixRain {
    pub fn with_style(canvas_id: &str, mode: CharsetMode, style: RainStyle) -> MatrixRain {
        match Self::attach(canvas_id, mode, style) {
            Ok(rain) => rain,
            Err(err) => {
                diag::error(&format!("matrix rain disabled for `{canvas_id}`: {err}"));
                MatrixRain { animation: None, window: None, on_resize: None }
            }
        }
    }

    /// Like [`MatrixRain::with_style`], but reports why the canvas could not be
    /// used instead of returning an inert handle.
    pub fn attach(canvas_id: &str, mode: CharsetMode, style: RainStyle) -> Result<MatrixRain> {
        let window = web_sys::window().ok_or(EffectError::NoWindow)?;
        let mut surface = CanvasSurface::from_id(&window, canvas_id)?;
        if let Some((w, h)) = viewport_size(&window) {
            surface.set_size(w, h);
        }
        let rain = DigitalRain::new(mode, style, random::default_source());
        let anim = Rc::new(RainAnimation::new(rain, Box::new(surface), BrowserScheduler::new()?));

        let weak: Weak<Animation> = Rc::downgrade(&anim);
        let win = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let (Some(anim), Some((w, h))) = (weak.upgrade(), viewport_size(&win)) else {
                return;
            };
            if let Err(err) = anim.resize(w, h) {
                diag::error(&format!("matrix rain resize failed: {err}"));
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        Ok(MatrixRain { animation: Some(anim), window: Some(window), on_resize: Some(on_resize) })
    }
}

impl Drop for MatrixRain {
    fn drop(&mut self) {
        if let Some(anim) = &self.animation {
            anim.stop();
        }
        if let (Some(window), Some(cb)) = (&self.window, &self.on_resize) {
            let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}
