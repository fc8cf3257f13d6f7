//! Background columns of drifting bits, rendered by CSS animation.

use crate::random::RandomSource;

pub const STREAM_COLUMN_SPACING: f64 = 20.0;
pub const STREAM_REGEN_MS: i32 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct StreamColumn {
    pub left_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    /// Bit glyph and its opacity.
    pub bits: Vec<(char, f64)>,
}

/// One column per 20px of viewport width, each with randomised placement,
/// timing and 10..=29 bits.
pub fn generate_streams(viewport_width: f64, rng: &mut dyn RandomSource) -> Vec<StreamColumn> {
    let count = if viewport_width > 0.0 { (viewport_width / STREAM_COLUMN_SPACING).floor() as usize } else { 0 };
    (0..count)
        .map(|_| {
            let left_percent = rng.range(0.0, 100.0);
            let duration_s = rng.range(10.0, 30.0);
            let delay_s = rng.range(0.0, 10.0);
            let len = 10 + rng.index(20);
            let bits = (0..len)
                .map(|_| {
                    let bit = if rng.next_f64() > 0.5 { '1' } else { '0' };
                    (bit, rng.range(0.5, 1.0))
                })
                .collect();
            StreamColumn { left_percent, duration_s, delay_s, bits }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Lcg;

    #[test]
    fn columns_follow_width_and_ranges() {
        let cols = generate_streams(415.0, &mut Lcg::new(3));
        assert_eq!(cols.len(), 20);
        for c in &cols {
            assert!((0.0..100.0).contains(&c.left_percent));
            assert!((10.0..30.0).contains(&c.duration_s));
            assert!((0.0..10.0).contains(&c.delay_s));
            assert!((10..30).contains(&c.bits.len()));
            for (b, o) in &c.bits {
                assert!(*b == '0' || *b == '1');
                assert!((0.5..1.0).contains(o));
            }
        }
    }

    #[test]
    fn no_width_no_columns() {
        assert!(generate_streams(0.0, &mut Lcg::new(1)).is_empty());
    }
}
