use std::fmt;

use crate::layout::Layout;
use crate::lexer::{Element, Field, OffsetStyle};
use crate::timestamp::Timestamp;

pub(crate) const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) const LONG_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub(crate) const SHORT_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A timestamp paired with the layout to render it with. Created by
/// [`Timestamp::format`], rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    timestamp: &'a Timestamp,
    layout: Layout<'a>,
}

impl<'a> Formatted<'a> {
    pub(crate) fn new(timestamp: &'a Timestamp, layout: Layout<'a>) -> Self {
        Self { timestamp, layout }
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.layout.elements() {
            match element {
                Element::Literal(text) => f.write_str(text)?,
                Element::Field(field, text) => write_field(f, self.timestamp, field, text)?,
            }
        }

        Ok(())
    }
}

fn write_field(
    f: &mut fmt::Formatter<'_>,
    ts: &Timestamp,
    field: Field,
    text: &str,
) -> fmt::Result {
    let month = ts.month() as usize - 1;
    let weekday = ts.weekday().num_days_from_monday() as usize;

    match field {
        Field::LongYear if ts.year() < 0 => write!(f, "-{:04}", ts.year().unsigned_abs()),
        Field::LongYear => write!(f, "{:04}", ts.year()),
        Field::Year => write!(f, "{:02}", ts.year().unsigned_abs() % 100),
        Field::LongMonth => f.write_str(LONG_MONTHS[month]),
        Field::Month => f.write_str(SHORT_MONTHS[month]),
        Field::NumMonth => write!(f, "{}", ts.month()),
        Field::ZeroMonth => write!(f, "{:02}", ts.month()),
        Field::LongWeekday => f.write_str(LONG_WEEKDAYS[weekday]),
        Field::Weekday => f.write_str(SHORT_WEEKDAYS[weekday]),
        Field::Day => write!(f, "{}", ts.day()),
        Field::UnderDay => write!(f, "{:>2}", ts.day()),
        Field::ZeroDay => write!(f, "{:02}", ts.day()),
        Field::UnderYearDay => write!(f, "{:>3}", ts.ordinal()),
        Field::ZeroYearDay => write!(f, "{:03}", ts.ordinal()),
        Field::Hour => write!(f, "{:02}", ts.hour()),
        Field::Hour12 => write!(f, "{}", twelve_hour(ts.hour())),
        Field::ZeroHour12 => write!(f, "{:02}", twelve_hour(ts.hour())),
        Field::Minute => write!(f, "{}", ts.minute()),
        Field::ZeroMinute => write!(f, "{:02}", ts.minute()),
        Field::Second => write!(f, "{}", ts.second()),
        Field::ZeroSecond => write!(f, "{:02}", ts.second()),
        Field::PM => f.write_str(if ts.hour() >= 12 { "PM" } else { "AM" }),
        Field::LowerPM => f.write_str(if ts.hour() >= 12 { "pm" } else { "am" }),
        Field::Zone => match ts.zone_abbreviation() {
            Some(name) => f.write_str(name),
            None => write_offset(f, ts.offset().local_minus_utc(), OffsetStyle::HoursMinutes),
        },
        Field::IsoOffset(_) if ts.offset().local_minus_utc() == 0 => f.write_str("Z"),
        Field::IsoOffset(style) | Field::Offset(style) => {
            write_offset(f, ts.offset().local_minus_utc(), style)
        }
        Field::Fraction { digits, trim } => {
            // the separator is whichever of '.' or ',' the layout used
            let separator = &text[..1];
            write_fraction(f, ts.nanosecond(), separator, digits, trim)
        }
    }
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn write_offset(f: &mut fmt::Formatter<'_>, seconds: i32, style: OffsetStyle) -> fmt::Result {
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let (hours, minutes, seconds) = (seconds / 3600, seconds / 60 % 60, seconds % 60);

    match style {
        OffsetStyle::Hours => write!(f, "{sign}{hours:02}"),
        OffsetStyle::HoursMinutes => write!(f, "{sign}{hours:02}{minutes:02}"),
        OffsetStyle::ColonHoursMinutes => write!(f, "{sign}{hours:02}:{minutes:02}"),
        OffsetStyle::HoursMinutesSeconds => {
            write!(f, "{sign}{hours:02}{minutes:02}{seconds:02}")
        }
        OffsetStyle::ColonHoursMinutesSeconds => {
            write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

fn write_fraction(
    f: &mut fmt::Formatter<'_>,
    nanosecond: u32,
    separator: &str,
    digits: usize,
    trim: bool,
) -> fmt::Result {
    // leap seconds are stored as nanoseconds past 1e9
    let padded = format!("{:09}", nanosecond % 1_000_000_000);
    let mut shown = &padded[..digits.min(9)];

    if trim {
        shown = shown.trim_end_matches('0');
        if shown.is_empty() {
            return Ok(());
        }
    }

    write!(f, "{separator}{shown}")
}
