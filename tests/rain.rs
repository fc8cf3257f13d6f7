// Native tests for the rain renderer driven through the public API.
// A recording surface stands in for the canvas.

use cyber_rain::random::{Lcg, SequenceRandom};
use cyber_rain::rain::column_count;
use cyber_rain::{CharsetMode, DigitalRain, RainStyle, RainSurface};

#[derive(Default)]
struct RecordingSurface {
    width: f64,
    height: f64,
    fills: usize,
    glyphs: Vec<(char, f64, f64, String)>,
}

impl RainSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
    fn fill_all(&mut self, _color: &str) {
        self.fills += 1;
    }
    fn set_font(&mut self, _font: &str) {}
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: &str) {
        self.glyphs.push((glyph, x, y, color.to_string()));
    }
}

// binary, 300x150, glyph 14 -> 21 columns; one frame later every column moved by
// its own increment and sits at or below the top edge.
#[test]
fn binary_scenario_300_by_150() {
    // 0.5 keeps every draw above the 1% reset chance.
    let mut rain = DigitalRain::new(
        CharsetMode::Binary,
        RainStyle::default(),
        Box::new(SequenceRandom::new(vec![0.5, 0.3, 0.9, 0.5])),
    );
    rain.resize(300.0, 150.0);
    assert_eq!(rain.column_count(), 21);
    let before: Vec<_> = rain.columns().to_vec();

    let mut surface = RecordingSurface { width: 300.0, height: 150.0, ..Default::default() };
    rain.step(&mut surface);

    assert_eq!(surface.fills, 1);
    assert_eq!(surface.glyphs.len(), 21);
    for (b, a) in before.iter().zip(rain.columns()) {
        assert!((a.position - (b.position + b.speed)).abs() < 1e-9);
        assert!(a.position >= 0.0, "position {} below zero", a.position);
    }
    for (g, _, _, _) in &surface.glyphs {
        assert!(*g == '0' || *g == '1');
    }
}

#[test]
fn column_count_tracks_every_resize() {
    let mut rain = DigitalRain::new(CharsetMode::Hex, RainStyle::default(), Box::new(Lcg::new(11)));
    for w in [0.0, 13.0, 14.0, 300.0, 1919.0, 2560.0] {
        rain.resize(w, 900.0);
        assert_eq!(rain.column_count(), column_count(w, 14.0));
        assert_eq!(rain.column_count(), (w / 14.0).floor() as usize);
    }
}

#[test]
fn columns_reset_after_running_off_the_bottom() {
    let style = RainStyle { reset_probability: 0.0, ..RainStyle::default() };
    let mut rain = DigitalRain::new(CharsetMode::Matrix, style, Box::new(Lcg::new(99)));
    rain.resize(140.0, 140.0);
    let mut surface = RecordingSurface { width: 140.0, height: 140.0, ..Default::default() };

    let mut saw_reset = false;
    for _ in 0..40 {
        let before: Vec<_> = rain.columns().to_vec();
        rain.step(&mut surface);
        for (b, a) in before.iter().zip(rain.columns()) {
            if b.position * 14.0 > 140.0 {
                assert_eq!(a.position, 0.0);
                saw_reset = true;
            }
            assert!(a.position * 14.0 <= 140.0 + 14.0 * 1.25);
        }
    }
    assert!(saw_reset);
}

#[test]
fn head_glyph_uses_head_colour_and_column_x() {
    let style = RainStyle { head_color: "#fff".into(), glyph_size: 10.0, ..RainStyle::default() };
    let mut rain = DigitalRain::new(CharsetMode::Hex, style, Box::new(Lcg::new(5)));
    rain.resize(30.0, 100.0);
    let mut surface = RecordingSurface::default();
    rain.step(&mut surface);
    let xs: Vec<f64> = surface.glyphs.iter().map(|g| g.1).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0]);
    assert!(surface.glyphs.iter().all(|g| g.3 == "#fff"));
    assert!(surface.glyphs.iter().all(|g| rain.palette().contains(g.0)));
}
