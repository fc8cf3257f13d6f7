//! Mobile navigation menu.

/// Widths at or below this use the collapsible menu.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// When clicking a nav link closes the open menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinkClose {
    /// Only at mobile widths.
    #[default]
    Mobile,
    Always,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was clicked; returns whether the menu closed.
    pub fn on_link_click(&mut self, viewport_width: f64, policy: LinkClose) -> bool {
        match policy {
            LinkClose::Mobile => self.close_if(viewport_width <= MOBILE_BREAKPOINT),
            LinkClose::Always => self.close_if(true),
        }
    }

    /// Growing past the breakpoint closes the menu.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        self.close_if(viewport_width > MOBILE_BREAKPOINT)
    }

    fn close_if(&mut self, cond: bool) -> bool {
        let changed = cond && self.open;
        if changed {
            self.open = false;
        }
        changed
    }
}
