//! Digital-rain state and the per-frame draw step.
//!
//! [`DigitalRain`] owns one [`Column`] per glyph-wide slot of the surface and
//! knows nothing about the browser: it draws through the [`RainSurface`] trait,
//! which the canvas module implements for `CanvasRenderingContext2d` and tests
//! implement with a recorder.

use crate::palette::{CharsetMode, Palette};
use crate::random::RandomSource;

// --- Drawing seam ------------------------------------------------------------

/// Minimal 2D drawing API the rain needs.
pub trait RainSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_size(&mut self, width: f64, height: f64);
    /// Paint `color` over the whole surface.
    fn fill_all(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: &str);
}

// --- Style -------------------------------------------------------------------

/// Visual and timing parameters of the rain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RainStyle {
    /// Glyph cell size in pixels; also the column width.
    pub glyph_size: f64,
    /// Low-opacity overlay painted every frame to fade the trail.
    pub fade_color: String,
    /// Colour of the leading glyph of every column.
    pub head_color: String,
    pub font_family: String,
    /// Per-column, per-frame chance of restarting at the top.
    pub reset_probability: f64,
    /// Row increment range; each column draws its speed from `[min, max)`.
    pub min_speed: f64,
    pub max_speed: f64,
}

impl Default for RainStyle {
    fn default() -> Self {
        Self {
            glyph_size: 14.0,
            fade_color: "rgba(0, 0, 0, 0.05)".to_string(),
            head_color: "rgba(65, 255, 138, 1)".to_string(),
            font_family: "\"Fira Code\", monospace".to_string(),
            reset_probability: 0.01,
            min_speed: 0.75,
            max_speed: 1.25,
        }
    }
}

impl RainStyle {
    pub fn font(&self) -> String {
        format!("{}px {}", self.glyph_size, self.font_family)
    }
}

// --- Columns -----------------------------------------------------------------

/// Fall state of one column, in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub position: f64,
    pub speed: f64,
}

/// Number of columns that fit into `width` for a given glyph size.
pub fn column_count(width: f64, glyph_size: f64) -> usize {
    if !(glyph_size > 0.0) || !(width > 0.0) {
        return 0;
    }
    (width / glyph_size).floor() as usize
}

// --- Renderer ----------------------------------------------------------------

pub struct DigitalRain {
    palette: Palette,
    style: RainStyle,
    columns: Vec<Column>,
    width: f64,
    height: f64,
    rng: Box<dyn RandomSource>,
}

impl DigitalRain {
    pub fn new(mode: CharsetMode, style: RainStyle, rng: Box<dyn RandomSource>) -> Self {
        Self {
            palette: Palette::new(mode),
            style,
            columns: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn style(&self) -> &RainStyle {
        &self.style
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Rebuild column state for a new surface size.
    ///
    /// Each column gets a fresh speed and starts up to one increment above the
    /// top edge so columns do not move in lockstep.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = column_count(self.width, self.style.glyph_size);
        let (lo, hi) = speed_bounds(&self.style);
        let rng = &mut self.rng;
        self.columns = (0..count)
            .map(|_| {
                let speed = rng.range(lo, hi);
                let offset = rng.next_f64() * speed;
                Column { position: if offset > 0.0 { -offset } else { 0.0 }, speed }
            })
            .collect();
    }

    /// Draw one frame onto `surface` and advance every column.
    pub fn step(&mut self, surface: &mut dyn RainSurface) {
        surface.fill_all(&self.style.fade_color);
        if self.columns.is_empty() || self.palette.is_empty() {
            return;
        }
        surface.set_font(&self.style.font());

        let glyph_size = self.style.glyph_size;
        for (i, col) in self.columns.iter_mut().enumerate() {
            let glyph = self.palette.glyph(self.rng.index(self.palette.len()));
            let x = i as f64 * glyph_size;
            let y = col.position * glyph_size;
            surface.draw_glyph(glyph, x, y, &self.style.head_color);

            let reset = self.rng.next_f64() < self.style.reset_probability;
            if y > self.height || reset {
                col.position = 0.0;
            } else {
                col.position += col.speed;
            }
        }
    }
}

fn speed_bounds(style: &RainStyle) -> (f64, f64) {
    let lo = if style.min_speed > 0.0 { style.min_speed } else { 1.0 };
    let hi = style.max_speed.max(lo);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[derive(Default)]
    struct Recorder {
        w: f64,
        h: f64,
        fills: Vec<String>,
        glyphs: Vec<(char, f64, f64)>,
    }

    impl RainSurface for Recorder {
        fn width(&self) -> f64 {
            self.w
        }
        fn height(&self) -> f64 {
            self.h
        }
        fn set_size(&mut self, width: f64, height: f64) {
            self.w = width;
            self.h = height;
        }
        fn fill_all(&mut self, color: &str) {
            self.fills.push(color.to_string());
        }
        fn set_font(&mut self, _font: &str) {}
        fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, _color: &str) {
            self.glyphs.push((glyph, x, y));
        }
    }

    fn rain(values: Vec<f64>) -> DigitalRain {
        DigitalRain::new(
            CharsetMode::Binary,
            RainStyle::default(),
            Box::new(SequenceRandom::new(values)),
        )
    }

    #[test]
    fn column_count_floors() {
        assert_eq!(column_count(300.0, 14.0), 21);
        assert_eq!(column_count(13.9, 14.0), 0);
        assert_eq!(column_count(300.0, 0.0), 0);
    }

    #[test]
    fn resize_offsets_stay_within_one_increment() {
        let mut r = rain(vec![0.5, 0.9, 0.0, 0.3]);
        r.resize(140.0, 100.0);
        assert_eq!(r.column_count(), 10);
        for c in r.columns() {
            assert!(c.position <= 0.0);
            assert!(c.position > -c.speed - 1e-12);
            assert!(c.speed >= 0.75 && c.speed < 1.25);
        }
    }

    #[test]
    fn overflowing_column_resets_to_zero() {
        // 0.5 -> never below the reset probability, so only overflow resets.
        let mut r = rain(vec![0.5]);
        r.resize(28.0, 100.0);
        let mut s = Recorder::default();
        r.columns[0].position = 8.0; // 8 * 14 = 112 > 100
        r.columns[1].position = 7.0; // 98, still on screen
        let speed1 = r.columns[1].speed;
        r.step(&mut s);
        assert_eq!(r.columns[0].position, 0.0);
        assert!((r.columns[1].position - (7.0 + speed1)).abs() < 1e-12);
    }

    #[test]
    fn random_reset_fires_below_probability() {
        let mut r = rain(vec![0.5]);
        r.resize(14.0, 1000.0);
        r.columns[0].position = 3.0;
        r.rng = Box::new(SequenceRandom::new(vec![0.2, 0.001]));
        let mut s = Recorder::default();
        r.step(&mut s);
        assert_eq!(r.columns[0].position, 0.0);
    }

    #[test]
    fn frame_fades_then_draws_one_glyph_per_column() {
        let mut r = rain(vec![0.4]);
        r.resize(70.0, 70.0);
        let mut s = Recorder::default();
        r.step(&mut s);
        assert_eq!(s.fills, vec!["rgba(0, 0, 0, 0.05)".to_string()]);
        assert_eq!(s.glyphs.len(), 5);
        for (i, (g, x, _)) in s.glyphs.iter().enumerate() {
            assert!(*g == '0' || *g == '1');
            assert_eq!(*x, i as f64 * 14.0);
        }
    }

    #[test]
    fn empty_surface_only_fades() {
        let mut r = rain(vec![0.4]);
        r.resize(0.0, 0.0);
        let mut s = Recorder::default();
        r.step(&mut s);
        assert_eq!(s.fills.len(), 1);
        assert!(s.glyphs.is_empty());
    }
}
