use std::fmt;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc,
    Weekday as ChronoWeekday,
};

use crate::format::Formatted;
use crate::layout::Layout;

/// A point in time read from text: calendar date, time of day with
/// nanoseconds, a fixed UTC offset, and the zone abbreviation if one was
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    datetime: DateTime<FixedOffset>,
    zone: Option<String>,
}

impl Timestamp {
    pub(crate) fn new(datetime: DateTime<FixedOffset>, zone: Option<String>) -> Self {
        Self { datetime, zone }
    }

    /// January 1 of year 1, 00:00:00 UTC
    pub fn zero() -> Self {
        let midnight = NaiveDate::from_ymd_opt(1, 1, 1)
            .expect("year 1 is inside chrono's range")
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time");

        Self::new(midnight.and_utc().fixed_offset(), Some(String::from("UTC")))
    }

    /// Whether this is the same instant as [`Timestamp::zero`]
    pub fn is_zero(&self) -> bool {
        self.datetime == Self::zero().datetime
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    /// Day of the year, starting at 1
    pub fn ordinal(&self) -> u32 {
        self.datetime.ordinal()
    }

    pub fn weekday(&self) -> ChronoWeekday {
        self.datetime.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.datetime.nanosecond()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.datetime.offset()
    }

    /// The zone abbreviation, e.g. `"UTC"` or `"PST"`. Timestamps read from
    /// a bare numeric offset have none.
    pub fn zone_abbreviation(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.datetime
    }

    /// Wall clock date and time, ignoring the offset
    pub fn naive_local(&self) -> NaiveDateTime {
        self.datetime.naive_local()
    }

    /// Render the timestamp using a layout.
    ///
    /// ```rust
    /// use layoutdate::{parse, Layout};
    ///
    /// let ts = parse(&Layout::DATE_ONLY, "2021-02-04").unwrap();
    /// assert_eq!(ts.format(&Layout::new("Jan 2, 2006")).to_string(), "Feb 4, 2021");
    /// ```
    pub fn format<'a>(&'a self, layout: &Layout<'a>) -> Formatted<'a> {
        Formatted::new(self, *layout)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::new(datetime, None)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.fixed_offset(), Some(String::from("UTC")))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.format(&Layout::DEFAULT), f)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_zero() {
        let zero = Timestamp::zero();

        assert!(zero.is_zero());
        assert_eq!(zero.year(), 1);
        assert_eq!(zero.month(), 1);
        assert_eq!(zero.day(), 1);
        assert_eq!(zero.hour(), 0);
        assert_eq!(zero.offset().local_minus_utc(), 0);
        assert_eq!(zero.to_string(), "0001-01-01 00:00:00 +0000 UTC");
        assert_eq!(Timestamp::default(), zero);
    }

    #[test]
    fn test_zero_instant_in_other_offset() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let shifted = Timestamp::zero().as_datetime().with_timezone(&offset);

        assert!(Timestamp::from(shifted).is_zero());
    }

    #[test]
    fn test_from_utc() {
        let ts = Timestamp::from(Utc.with_ymd_and_hms(2021, 2, 4, 13, 5, 9).unwrap());

        assert_eq!(ts.zone_abbreviation(), Some("UTC"));
        assert_eq!(ts.weekday(), ChronoWeekday::Thu);
        assert_eq!(ts.ordinal(), 35);
        assert_eq!(ts.to_string(), "2021-02-04 13:05:09 +0000 UTC");
    }

    #[test]
    fn test_from_fixed_offset_has_no_abbreviation() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let ts = Timestamp::from(offset.with_ymd_and_hms(2021, 2, 4, 13, 5, 9).unwrap());

        assert_eq!(ts.zone_abbreviation(), None);
        assert_eq!(ts.to_string(), "2021-02-04 13:05:09 -0800 -0800");
    }
}
