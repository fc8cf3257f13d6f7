//! Cyber grid background: evenly spaced horizontal and vertical lines.

pub const GRID_GAP: f64 = 40.0;

/// Pixel offsets of horizontal (`top`) and vertical (`left`) grid lines,
/// including the line at 0.
pub fn grid_lines(viewport_width: f64, viewport_height: f64, gap: f64) -> (Vec<f64>, Vec<f64>) {
    let offsets = |extent: f64| -> Vec<f64> {
        if gap <= 0.0 || extent < 0.0 {
            return Vec::new();
        }
        let n = (extent / gap).floor() as usize;
        (0..=n).map(|i| i as f64 * gap).collect()
    };
    (offsets(viewport_height), offsets(viewport_width))
}
