use chrono::NaiveDate;

/// Port for the generation date
///
/// Output file names carry the day a run happened. Production uses the
/// local calendar; tests pin a date.
pub trait Clock: Send + Sync {
    /// The calendar day according to this clock
    fn today(&self) -> NaiveDate;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
