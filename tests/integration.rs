// Integration tests (native) for the `cyber-rain` crate.
// These avoid wasm-specific functionality and exercise pure Rust logic so they
// can run under `cargo test` on the host.

use cyber_rain::effects::{Counter, CounterSpec, PortScan, generate_streams, hex_line};
use cyber_rain::random::{Lcg, SequenceRandom};
use cyber_rain::{CharsetMode, Palette, SiteConfig};

#[test]
fn every_mode_has_its_palette() {
    assert_eq!(Palette::new(CharsetMode::Binary).len(), 2);
    let hex = Palette::new(CharsetMode::Hex);
    assert_eq!(hex.len(), 16);
    assert!("0123456789ABCDEF".chars().all(|c| hex.contains(c)));
    let wide = Palette::new(CharsetMode::Matrix);
    assert!(('0'..='9').chain('A'..='Z').all(|c| wide.contains(c)));
}

#[test]
fn site_counters_end_on_their_targets() {
    for spec in CounterSpec::site_defaults() {
        let target = format!("{}{}", spec.target, spec.suffix);
        let mut c = Counter::new(spec);
        let last = std::iter::from_fn(|| c.tick()).last();
        assert_eq!(last, Some(target));
    }
}

#[test]
fn port_scan_transcript_is_deterministic_for_fixed_source() {
    let mut a = PortScan::new();
    let mut b = PortScan::new();
    let (mut ra, mut rb) = (Lcg::new(8), Lcg::new(8));
    while a.tick(&mut ra) {}
    while b.tick(&mut rb) {}
    assert_eq!(a.text(), b.text());
}

#[test]
fn hex_line_and_streams_use_injected_source() {
    let mut one = SequenceRandom::constant(0.999);
    assert_eq!(hex_line(&mut one), "0xFFFFFFFF: FF FF FF FF FF FF FF FF ");
    assert_eq!(generate_streams(100.0, &mut Lcg::new(2)).len(), 5);
}

#[test]
fn variants_differ_only_by_flags() {
    let main = SiteConfig::default();
    let team = SiteConfig::team_page();
    let deploy = SiteConfig::deploy();
    assert_eq!(main.rain_canvas_id, team.rain_canvas_id);
    assert!(main.matrix_rain && !team.matrix_rain && !deploy.matrix_rain);
    assert!(main.mobile_menu && team.mobile_menu && deploy.mobile_menu);
    assert_ne!(main.menu, team.menu);
    assert_eq!(team.menu.links, deploy.menu.links);
    assert_ne!(team.menu.close_on_link, deploy.menu.close_on_link);
    assert!(deploy.scroll_tracking && !team.scroll_tracking);
}
