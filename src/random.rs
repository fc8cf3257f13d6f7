//! Injectable randomness.
//!
//! Every effect that needs a random choice takes a `Box<dyn RandomSource>` so
//! tests can feed fixed sequences instead of `Math.random()`.

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`; `0` for an empty range.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// Browser `Math.random()`. Only usable on wasm32.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Small seeded linear congruential generator (not crypto secure).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed ^ 0x9E37_79B9_7F4A_7C15 }
    }
}

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        // Knuth MMIX constants; top 53 bits become the mantissa.
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Random source used when the caller does not inject one.
///
/// With the `rng` feature an [`Lcg`] is seeded from the platform RNG. Otherwise
/// wasm32 uses `Math.random()` and the host falls back to a fixed-seed [`Lcg`].
pub fn default_source() -> Box<dyn RandomSource> {
    #[cfg(feature = "rng")]
    {
        let mut seed = [0u8; 8];
        if getrandom::getrandom(&mut seed).is_ok() {
            return Box::new(Lcg::new(u64::from_le_bytes(seed)));
        }
        crate::diag::warn("getrandom unavailable, falling back to default random source");
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(JsRandom)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(Lcg::new(0x5EED))
    }
}
