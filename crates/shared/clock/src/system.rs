use chrono::{Local, NaiveDate};
use watchlist_ports::Clock;

/// Real system clock for production use
///
/// Returns the current day in the machine's local time zone.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_matches_local_date() {
        let clock = SystemClock::new();
        let before = Local::now().date_naive();
        let today = clock.today();
        let after = Local::now().date_naive();

        assert!(before <= today && today <= after);
    }
}
