//! Stat counters that count up to a target on a fixed interval.

/// One counter as configured on the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterSpec {
    pub element_id: String,
    pub start: i64,
    pub target: i64,
    pub step: i64,
    pub interval_ms: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(element_id: &str, start: i64, target: i64, step: i64, interval_ms: i32, suffix: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            start,
            target,
            step,
            interval_ms,
            suffix: suffix.to_string(),
        }
    }

    /// Founding year, member count, award count.
    pub fn site_defaults() -> Vec<CounterSpec> {
        vec![
            CounterSpec::new("stat-year", 2010, 2024, 1, 80, ""),
            CounterSpec::new("stat-members", 0, 200, 5, 40, "+"),
            CounterSpec::new("stat-awards", 0, 50, 1, 60, "+"),
        ]
    }
}

/// Running counter. Each [`Counter::tick`] yields the text to show, until the
/// value has passed the target.
#[derive(Debug, Clone)]
pub struct Counter {
    spec: CounterSpec,
    current: i64,
    done: bool,
}

impl Counter {
    pub fn new(spec: CounterSpec) -> Self {
        let current = spec.start;
        Self { spec, current, done: false }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tick(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if self.spec.step <= 0 {
            // Cannot make progress; settle on the target.
            self.current = self.spec.target;
            self.done = true;
            return Some(format!("{}{}", self.current, self.spec.suffix));
        }
        let text = format!("{}{}", self.current, self.spec.suffix);
        match self.current.checked_add(self.spec.step) {
            Some(next) if next <= self.spec.target => self.current = next,
            _ => self.done = true,
        }
        Some(text)
    }
}
