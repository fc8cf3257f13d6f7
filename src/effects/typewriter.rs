//! Terminal typewriter: lines of the terminal block reappear one by one.

use crate::random::RandomSource;

pub const START_DELAY_MS: i32 = 500;

#[derive(Debug, Clone)]
pub struct Typewriter {
    total: usize,
    next: usize,
}

impl Typewriter {
    /// The first line is shown immediately; the rest are typed.
    pub fn new(total_lines: usize) -> Self {
        Self { total: total_lines, next: total_lines.min(1) }
    }

    /// Index of the next line to append, if any.
    pub fn next_line(&mut self) -> Option<usize> {
        (self.next < self.total).then(|| {
            self.next += 1;
            self.next - 1
        })
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.total
    }

    /// Pause before the following line: 100..250 ms.
    pub fn step_delay(rng: &mut dyn RandomSource) -> i32 {
        rng.range(100.0, 250.0) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn skips_first_line() {
        let mut t = Typewriter::new(3);
        assert_eq!(t.next_line(), Some(1));
        assert_eq!(t.next_line(), Some(2));
        assert_eq!(t.next_line(), None);
        assert!(t.is_done());
    }

    #[test]
    fn empty_terminal_is_done() {
        let mut t = Typewriter::new(0);
        assert!(t.is_done());
        assert_eq!(t.next_line(), None);
    }

    #[test]
    fn delay_range() {
        assert_eq!(Typewriter::step_delay(&mut SequenceRandom::constant(0.0)), 100);
        assert_eq!(Typewriter::step_delay(&mut SequenceRandom::constant(0.5)), 175);
    }
}
