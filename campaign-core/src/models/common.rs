//! Common models shared by actions, groups and days.

#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

/// Represents a time as amount of seconds since unix epoch in UTC.
pub type Timestamp = i64;

/// Represents a calendar day as amount of whole days since unix epoch.
pub type DayIndex = i64;

/// Amount of seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Represents a time window.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// Start of time window.
    pub start: Timestamp,
    /// End of time window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Checks whether the other time window starts exactly when this one ends.
    pub fn is_followed_by(&self, other: &Self) -> bool {
        self.end == other.start
    }
}

/// Returns a day index of given timestamp observed with a fixed display offset (in seconds).
pub fn get_day_index(time: Timestamp, offset: i64) -> DayIndex {
    (time + offset).div_euclid(SECONDS_PER_DAY)
}
