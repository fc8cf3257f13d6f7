//! Auxiliary page effects.
//!
//! Each submodule holds the pure state machine of one effect; the DOM wiring
//! that drives them lives in [`crate::site`].

pub mod binary_stream;
pub mod counter;
pub mod grid;
pub mod hexdump;
pub mod menu;
pub mod portscan;
pub mod scroll;
pub mod typewriter;

pub use binary_stream::{StreamColumn, generate_streams};
pub use counter::{Counter, CounterSpec};
pub use grid::grid_lines;
pub use hexdump::hex_line;
pub use menu::{LinkClose, MenuState};
pub use portscan::{PortScan, ScanStatus};
pub use scroll::{HeaderState, ScrollTracker, ScrollView, SectionBox, active_section};
pub use typewriter::Typewriter;

use crate::random::RandomSource;

pub const INTRUSION_WARNING_TEXT: &str = "⚠ 入侵检测警告 ⚠";
/// Delay before the intrusion banner appears, when it appears at all.
pub const INTRUSION_DELAY_MS: i32 = 5_000;

/// Roughly three page loads in ten show the intrusion banner.
pub fn roll_intrusion_warning(rng: &mut dyn RandomSource) -> bool {
    rng.next_f64() > 0.7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn intrusion_threshold() {
        assert!(roll_intrusion_warning(&mut SequenceRandom::constant(0.71)));
        assert!(!roll_intrusion_warning(&mut SequenceRandom::constant(0.7)));
    }
}
