//! Fake hex-dump line, refreshed once a second.

use crate::random::RandomSource;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

pub const HEX_REFRESH_MS: i32 = 1_000;

fn hex_digits(rng: &mut dyn RandomSource, n: usize) -> String {
    (0..n).map(|_| HEX[rng.index(16)] as char).collect()
}

/// `0x<8 hex digits>: ` followed by eight space-terminated hex bytes.
pub fn hex_line(rng: &mut dyn RandomSource) -> String {
    let mut bytes = String::with_capacity(24);
    for _ in 0..8 {
        bytes.push_str(&hex_digits(rng, 2));
        bytes.push(' ');
    }
    let address = hex_digits(rng, 8);
    format!("0x{address}: {bytes}")
}
