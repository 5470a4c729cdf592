use chrono::NaiveDate;
use watchlist_ports::Clock;

/// Clock frozen on one day
///
/// Makes output file names reproducible in tests and re-generation runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns None for an invalid calendar date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_never_moves() {
        let clock = FixedClock::from_ymd(2021, 12, 31).unwrap();
        assert_eq!(clock.today(), clock.today());
        assert_eq!(clock.today().to_string(), "2021-12-31");
    }

    #[test]
    fn test_invalid_date() {
        assert!(FixedClock::from_ymd(2021, 2, 30).is_none());
    }
}
