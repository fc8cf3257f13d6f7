//! Site configuration: which effects run and how they are tuned.
//!
//! The site shipped as several near-identical entry scripts. Every difference
//! between them is a flag here instead.

use crate::effects::{CounterSpec, LinkClose};
use crate::palette::CharsetMode;
use crate::rain::RainStyle;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SiteConfig {
    pub matrix_rain: bool,
    pub rain_canvas_id: String,
    pub rain_mode: CharsetMode,
    pub rain_style: RainStyle,
    pub binary_streams: bool,
    pub hex_display: bool,
    pub port_scan: bool,
    pub intrusion_warning: bool,
    pub counters: bool,
    pub counter_specs: Vec<CounterSpec>,
    pub typewriter: bool,
    pub back_to_top: bool,
    pub mobile_menu: bool,
    pub menu: MenuSelectors,
    pub scroll_tracking: bool,
    /// Hide the header while scrolling down (part of scroll tracking).
    pub header_autohide: bool,
    pub smooth_scroll: bool,
    /// Smooth scrolling stops below the fixed header instead of aligning the
    /// section with the viewport top.
    pub header_offset: bool,
    pub console_banner: bool,
    pub cyber_grid: bool,
}

impl Default for SiteConfig {
    /// Main site: everything on except the port scan.
    fn default() -> Self {
        Self {
            matrix_rain: true,
            rain_canvas_id: "matrixRain".to_string(),
            rain_mode: CharsetMode::Binary,
            rain_style: RainStyle::default(),
            binary_streams: true,
            hex_display: true,
            port_scan: false,
            intrusion_warning: true,
            counters: true,
            counter_specs: CounterSpec::site_defaults(),
            typewriter: true,
            back_to_top: true,
            mobile_menu: true,
            menu: MenuSelectors::default(),
            scroll_tracking: true,
            header_autohide: true,
            smooth_scroll: true,
            header_offset: true,
            console_banner: true,
            cyber_grid: true,
        }
    }
}

/// CSS selectors of the navigation parts; the page variants use different
/// markup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuSelectors {
    pub toggle: String,
    pub nav: String,
    /// Links that close the mobile menu.
    pub links: String,
    pub close_on_link: LinkClose,
    /// `href="#section"` links that scroll tracking highlights and smooth
    /// scrolling intercepts.
    pub scroll_links: String,
}

impl Default for MenuSelectors {
    fn default() -> Self {
        Self {
            toggle: ".mobile-menu-toggle".to_string(),
            nav: ".main-nav".to_string(),
            links: ".nav-button".to_string(),
            close_on_link: LinkClose::Mobile,
            scroll_links: ".nav-menu .scroll-link".to_string(),
        }
    }
}

impl MenuSelectors {
    /// `.nav-menu` markup used by the team and deploy pages.
    pub fn nav_menu(close_on_link: LinkClose) -> Self {
        Self {
            toggle: ".mobile-nav-toggle".to_string(),
            nav: ".nav-menu".to_string(),
            links: ".nav-menu a".to_string(),
            close_on_link,
            scroll_links: ".nav-menu a".to_string(),
        }
    }
}

impl SiteConfig {
    /// Every effect off; presets switch on what they need.
    fn bare() -> Self {
        Self {
            matrix_rain: false,
            binary_streams: false,
            hex_display: false,
            port_scan: false,
            intrusion_warning: false,
            counters: false,
            counter_specs: Vec::new(),
            typewriter: false,
            back_to_top: false,
            mobile_menu: false,
            scroll_tracking: false,
            header_autohide: false,
            smooth_scroll: false,
            console_banner: false,
            cyber_grid: false,
            ..Self::default()
        }
    }

    /// Team page: only the mobile menu, closing on link clicks at mobile widths.
    pub fn team_page() -> Self {
        Self { mobile_menu: true, menu: MenuSelectors::nav_menu(LinkClose::Mobile), ..Self::bare() }
    }

    /// Stand-alone deploy page: mobile menu, section highlighting on
    /// `.nav-menu a`, and smooth scrolling that aligns the section with the
    /// viewport top and always closes the menu.
    pub fn deploy() -> Self {
        Self {
            mobile_menu: true,
            menu: MenuSelectors::nav_menu(LinkClose::Always),
            scroll_tracking: true,
            smooth_scroll: true,
            header_offset: false,
            ..Self::bare()
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_main_site() {
        let c = SiteConfig::default();
        assert!(c.matrix_rain && c.hex_display && c.typewriter);
        assert!(!c.port_scan);
        assert_eq!(c.rain_mode, CharsetMode::Binary);
        assert_eq!(c.counter_specs.len(), 3);
    }

    #[test]
    fn team_page_only_has_menu() {
        let c = SiteConfig::team_page();
        assert!(c.mobile_menu);
        assert!(!c.matrix_rain && !c.counters && !c.scroll_tracking && !c.smooth_scroll);
        assert_eq!(c.menu.nav, ".nav-menu");
        assert_eq!(c.menu.close_on_link, LinkClose::Mobile);
    }

    #[test]
    fn deploy_tracks_and_scrolls_nav_menu_links() {
        let c = SiteConfig::deploy();
        assert!(c.mobile_menu && c.scroll_tracking && c.smooth_scroll);
        assert!(!c.header_autohide && !c.header_offset && !c.back_to_top);
        assert!(!c.matrix_rain && !c.typewriter && !c.console_banner);
        assert_eq!(c.menu.scroll_links, ".nav-menu a");
        assert_eq!(c.menu.toggle, ".mobile-nav-toggle");
        assert_eq!(c.menu.close_on_link, LinkClose::Always);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_fills_defaults() {
        let c = SiteConfig::from_json(r#"{"port_scan": true, "rain_mode": "hex", "rain_style": {"glyph_size": 16.0}}"#)
            .unwrap();
        assert!(c.port_scan);
        assert_eq!(c.rain_mode, CharsetMode::Hex);
        assert_eq!(c.rain_style.glyph_size, 16.0);
        assert_eq!(c.rain_style.reset_probability, 0.01);
        assert!(c.counters);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn menu_policy_parses_by_name() {
        let c = SiteConfig::from_json(r#"{"menu": {"close_on_link": "always"}}"#).unwrap();
        assert_eq!(c.menu.close_on_link, LinkClose::Always);
        assert_eq!(c.menu.scroll_links, MenuSelectors::default().scroll_links);
    }
}
