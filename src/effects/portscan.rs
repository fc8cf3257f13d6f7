//! Simulated port scan that prints one port per tick.

use std::fmt;

use crate::random::RandomSource;

pub const SCAN_INTERVAL_MS: i32 = 500;
pub const SCAN_HEADER: &str = "# PORT SCANNING IN PROGRESS...\n";
pub const SCAN_FOOTER: &str = "\n# SCAN COMPLETE";

pub const PORT_TABLE: [(u16, &str); 13] = [
    (21, "FTP"),
    (22, "SSH"),
    (23, "TELNET"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (143, "IMAP"),
    (443, "HTTPS"),
    (445, "SMB"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (8080, "HTTP-ALT"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Open,
    Closed,
    Filtered,
}

impl ScanStatus {
    /// 30% open; the rest split evenly between closed and filtered.
    pub fn roll(rng: &mut dyn RandomSource) -> Self {
        if rng.next_f64() > 0.7 {
            ScanStatus::Open
        } else if rng.next_f64() > 0.5 {
            ScanStatus::Closed
        } else {
            ScanStatus::Filtered
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanStatus::Open => "OPEN",
            ScanStatus::Closed => "CLOSED",
            ScanStatus::Filtered => "FILTERED",
        })
    }
}

/// Accumulated scan transcript.
#[derive(Debug, Clone)]
pub struct PortScan {
    text: String,
    next: usize,
    finished: bool,
}

impl Default for PortScan {
    fn default() -> Self {
        Self::new()
    }
}

impl PortScan {
    pub fn new() -> Self {
        Self { text: SCAN_HEADER.to_string(), next: 0, finished: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Append the next port line (or the footer once the table is exhausted).
    /// Returns `false` when there is nothing left to do.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> bool {
        if self.finished {
            return false;
        }
        match PORT_TABLE.get(self.next) {
            Some(&(port, service)) => {
                let status = ScanStatus::roll(rng);
                self.text.push_str(&format!("\nPORT {port}/tcp\t{status}\t{service}"));
                self.next += 1;
            }
            None => {
                self.text.push_str(SCAN_FOOTER);
                self.finished = true;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn status_thresholds() {
        assert_eq!(ScanStatus::roll(&mut SequenceRandom::constant(0.9)), ScanStatus::Open);
        assert_eq!(ScanStatus::roll(&mut SequenceRandom::new(vec![0.1, 0.6])), ScanStatus::Closed);
        assert_eq!(ScanStatus::roll(&mut SequenceRandom::new(vec![0.1, 0.2])), ScanStatus::Filtered);
    }

    #[test]
    fn full_scan_lists_every_port_then_completes() {
        let mut scan = PortScan::new();
        let mut rng = SequenceRandom::constant(0.9);
        let mut ticks = 0;
        while scan.tick(&mut rng) {
            ticks += 1;
        }
        assert_eq!(ticks, PORT_TABLE.len() + 1);
        assert!(scan.is_finished());
        let text = scan.text();
        assert!(text.starts_with(SCAN_HEADER));
        assert!(text.ends_with(SCAN_FOOTER));
        assert!(text.contains("\nPORT 22/tcp\tOPEN\tSSH"));
        assert_eq!(text.matches("/tcp").count(), 13);
    }
}
