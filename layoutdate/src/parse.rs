use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::format::{LONG_MONTHS, LONG_WEEKDAYS, SHORT_MONTHS, SHORT_WEEKDAYS};
use crate::layout::Layout;
use crate::lexer::{Element, Field, OffsetStyle};
use crate::timestamp::Timestamp;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    AM,
    PM,
}

/// Everything read from the text so far. Missing date fields are `None`
/// until they are resolved against each other.
#[derive(Debug, Default)]
struct Fields {
    year: i32,
    month: Option<u32>,
    day: Option<(u32, usize)>,
    year_day: Option<(u32, usize)>,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    meridiem: Option<Meridiem>,
    utc: bool,
    offset: Option<(i32, usize)>,
    zone: Option<String>,
}

/// Matches text against the elements of a layout, left to right
struct Parser<'a> {
    layout: Layout<'a>,
    value: &'a str,
    rest: &'a str,
    fields: Fields,
}

/// Parse `value` under `layout`, putting text without zone information in
/// `default`
pub(crate) fn parse_timestamp(
    layout: &Layout<'_>,
    value: &str,
    default: FixedOffset,
) -> Result<Timestamp, Error> {
    let elements = layout.elements();
    let mut parser = Parser {
        layout: *layout,
        value,
        rest: value,
        fields: Fields::default(),
    };

    for (i, element) in elements.iter().enumerate() {
        match *element {
            Element::Literal(text) => parser.literal(text)?,
            Element::Field(field, text) => {
                let fraction_next = elements[i + 1..]
                    .iter()
                    .find_map(|e| match e {
                        Element::Field(f, _) => Some(*f),
                        Element::Literal(_) => None,
                    })
                    .is_some_and(|f| matches!(f, Field::Fraction { .. }));

                parser.field(field, text, fraction_next)?;
            }
        }
    }

    if !parser.rest.is_empty() {
        return Err(Error::ExtraText {
            layout: layout.as_str().to_owned(),
            value: value.to_owned(),
            extra: parser.rest.to_owned(),
            position: parser.position(),
        });
    }

    parser.resolve(default)
}

impl<'a> Parser<'a> {
    /// Byte offset of the unparsed text inside the whole value
    fn position(&self) -> usize {
        self.value.len() - self.rest.len()
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::Mismatch {
            layout: self.layout.as_str().to_owned(),
            value: self.value.to_owned(),
            expected: expected.to_owned(),
            found: self.rest.to_owned(),
            position: self.position(),
        }
    }

    fn out_of_range(&self, field: &'static str, position: usize) -> Error {
        Error::OutOfRange {
            layout: self.layout.as_str().to_owned(),
            value: self.value.to_owned(),
            field,
            position,
        }
    }

    /// Match literal layout text. A space in the layout matches any run of
    /// spaces in the value.
    fn literal(&mut self, text: &str) -> Result<(), Error> {
        let mut expected = text;
        let mut value = self.rest;

        while !expected.is_empty() {
            if let Some(after) = expected.strip_prefix(' ') {
                if !value.is_empty() && !value.starts_with(' ') {
                    return Err(self.mismatch(text));
                }
                expected = after.trim_start_matches(' ');
                value = value.trim_start_matches(' ');
                continue;
            }

            let mut chars = expected.chars();
            let Some(c) = chars.next() else { break };
            match value.strip_prefix(c) {
                Some(after) => value = after,
                None => return Err(self.mismatch(text)),
            }
            expected = chars.as_str();
        }

        self.rest = value;
        Ok(())
    }

    fn field(&mut self, field: Field, text: &str, fraction_next: bool) -> Result<(), Error> {
        let start = self.position();
        let value = self.rest;
        let bad = || self.mismatch(text);

        let rest = match field {
            Field::LongYear => {
                let (year, rest) = digits(value, 4).ok_or_else(bad)?;
                self.fields.year = year as i32;
                rest
            }
            Field::Year => {
                let (year, rest) = digits(value, 2).ok_or_else(bad)?;
                let century = if year >= 69 { 1900 } else { 2000 };
                self.fields.year = century + year as i32;
                rest
            }
            Field::LongMonth | Field::Month => {
                let names = if field == Field::LongMonth {
                    &LONG_MONTHS
                } else {
                    &SHORT_MONTHS
                };
                let (index, rest) = lookup(names, value).ok_or_else(bad)?;
                self.fields.month = Some(index as u32 + 1);
                rest
            }
            Field::NumMonth | Field::ZeroMonth => {
                let (month, rest) = number(value, 2, field == Field::ZeroMonth).ok_or_else(bad)?;
                if !(1..=12).contains(&month) {
                    return Err(self.out_of_range("month", start));
                }
                self.fields.month = Some(month);
                rest
            }
            Field::LongWeekday | Field::Weekday => {
                // validated, but a weekday can't change which date was meant
                let names = if field == Field::LongWeekday {
                    &LONG_WEEKDAYS
                } else {
                    &SHORT_WEEKDAYS
                };
                let (_, rest) = lookup(names, value).ok_or_else(bad)?;
                rest
            }
            Field::Day | Field::UnderDay | Field::ZeroDay => {
                let value = match field {
                    Field::UnderDay => value.strip_prefix(' ').unwrap_or(value),
                    _ => value,
                };
                // the day is checked against its month once everything is read
                let (day, rest) = number(value, 2, field == Field::ZeroDay).ok_or_else(bad)?;
                self.fields.day = Some((day, start));
                rest
            }
            Field::UnderYearDay | Field::ZeroYearDay => {
                let value = match field {
                    Field::UnderYearDay => value
                        .strip_prefix(' ')
                        .map(|v| v.strip_prefix(' ').unwrap_or(v))
                        .unwrap_or(value),
                    _ => value,
                };
                let (year_day, rest) =
                    number(value, 3, field == Field::ZeroYearDay).ok_or_else(bad)?;
                self.fields.year_day = Some((year_day, start));
                rest
            }
            Field::Hour => {
                let (hour, rest) = number(value, 2, false).ok_or_else(bad)?;
                if hour >= 24 {
                    return Err(self.out_of_range("hour", start));
                }
                self.fields.hour = hour;
                rest
            }
            Field::Hour12 | Field::ZeroHour12 => {
                let (hour, rest) =
                    number(value, 2, field == Field::ZeroHour12).ok_or_else(bad)?;
                if hour > 12 {
                    return Err(self.out_of_range("hour", start));
                }
                self.fields.hour = hour;
                rest
            }
            Field::Minute | Field::ZeroMinute => {
                let (minute, rest) =
                    number(value, 2, field == Field::ZeroMinute).ok_or_else(bad)?;
                if minute >= 60 {
                    return Err(self.out_of_range("minute", start));
                }
                self.fields.minute = minute;
                rest
            }
            Field::Second | Field::ZeroSecond => {
                let (second, rest) =
                    number(value, 2, field == Field::ZeroSecond).ok_or_else(bad)?;
                if second >= 60 {
                    return Err(self.out_of_range("second", start));
                }

                // fractional seconds the layout didn't ask for are still read,
                // unless the next marker is going to read them
                let fraction = if !fraction_next && starts_fraction(rest) {
                    Some(nanoseconds(rest, count_digits(&rest[1..])).ok_or_else(bad)?)
                } else {
                    None
                };

                self.fields.second = second;
                match fraction {
                    Some((nanosecond, after)) => {
                        self.fields.nanosecond = nanosecond;
                        after
                    }
                    None => rest,
                }
            }
            Field::PM | Field::LowerPM => {
                let (am, pm) = if field == Field::PM {
                    ("AM", "PM")
                } else {
                    ("am", "pm")
                };
                if let Some(rest) = value.strip_prefix(pm) {
                    self.fields.meridiem = Some(Meridiem::PM);
                    rest
                } else if let Some(rest) = value.strip_prefix(am) {
                    self.fields.meridiem = Some(Meridiem::AM);
                    rest
                } else {
                    return Err(bad());
                }
            }
            Field::Zone => {
                if let Some(rest) = value.strip_prefix("UTC") {
                    self.fields.utc = true;
                    rest
                } else {
                    let len = zone_abbreviation_len(value).ok_or_else(bad)?;
                    self.fields.zone = Some(value[..len].to_owned());
                    &value[len..]
                }
            }
            Field::IsoOffset(_) if value.starts_with('Z') => {
                self.fields.utc = true;
                &value[1..]
            }
            Field::IsoOffset(style) | Field::Offset(style) => {
                let (sign, hours, minutes, seconds, rest) =
                    split_offset(value, style).ok_or_else(bad)?;
                if hours > 24 {
                    return Err(self.out_of_range("time zone offset hour", start));
                }
                if minutes > 60 {
                    return Err(self.out_of_range("time zone offset minute", start));
                }
                if seconds > 60 {
                    return Err(self.out_of_range("time zone offset second", start));
                }
                let offset = (hours * 3600 + minutes * 60 + seconds) as i32;
                self.fields.offset = Some((sign * offset, start));
                rest
            }
            Field::Fraction { digits, trim: false } => {
                let (nanosecond, rest) = nanoseconds(value, digits).ok_or_else(bad)?;
                self.fields.nanosecond = nanosecond;
                rest
            }
            Field::Fraction { trim: true, .. } => {
                // optional: only read when the value actually has a fraction
                if starts_fraction(value) {
                    let len = count_digits(&value[1..]);
                    let (nanosecond, rest) = nanoseconds(value, len).ok_or_else(bad)?;
                    self.fields.nanosecond = nanosecond;
                    rest
                } else {
                    value
                }
            }
        };

        self.rest = rest;
        Ok(())
    }

    /// Combine the fields that were read into a timestamp, checking the ones
    /// that depend on each other
    fn resolve(&self, default: FixedOffset) -> Result<Timestamp, Error> {
        let fields = &self.fields;

        let hour = match fields.meridiem {
            Some(Meridiem::PM) if fields.hour < 12 => fields.hour + 12,
            Some(Meridiem::AM) if fields.hour == 12 => 0,
            _ => fields.hour,
        };

        let date = match (fields.year_day, fields.month, fields.day) {
            (Some((year_day, at)), month, day) => {
                let date = NaiveDate::from_yo_opt(fields.year, year_day)
                    .ok_or_else(|| self.out_of_range("day-of-year", at))?;

                if month.is_some_and(|m| m != date.month()) {
                    return Err(self.year_day_mismatch("month", at));
                }
                if day.is_some_and(|(d, _)| d != date.day()) {
                    return Err(self.year_day_mismatch("day", at));
                }
                date
            }
            (None, month, day) => {
                let (day, at) = day.unwrap_or((1, 0));
                NaiveDate::from_ymd_opt(fields.year, month.unwrap_or(1), day)
                    .ok_or_else(|| self.out_of_range("day", at))?
            }
        };

        let time = NaiveTime::from_hms_nano_opt(
            hour,
            fields.minute,
            fields.second,
            fields.nanosecond,
        )
        .ok_or_else(|| self.out_of_range("time", self.value.len()))?;
        let naive = date.and_time(time);

        let (offset, zone) = if fields.utc {
            (0, Some(String::from("UTC")))
        } else if let Some((offset, _)) = fields.offset {
            (offset, fields.zone.clone())
        } else if let Some(zone) = &fields.zone {
            (gmt_offset(zone), Some(zone.clone()))
        } else {
            let offset = default.local_minus_utc();
            (offset, (offset == 0).then(|| String::from("UTC")))
        };

        let at = fields.offset.map_or(self.value.len(), |(_, at)| at);
        let offset =
            FixedOffset::east_opt(offset).ok_or_else(|| self.out_of_range("time zone offset", at))?;
        let datetime = offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| self.out_of_range("time", self.value.len()))?;

        Ok(Timestamp::new(datetime, zone))
    }

    fn year_day_mismatch(&self, field: &'static str, position: usize) -> Error {
        Error::DayOfYearMismatch {
            layout: self.layout.as_str().to_owned(),
            value: self.value.to_owned(),
            field,
            position,
        }
    }
}

/// Exactly `width` leading ASCII digits
fn digits(s: &str, width: usize) -> Option<(u32, &str)> {
    let digits = s.get(..width)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((digits.parse().ok()?, &s[width..]))
}

/// Between one and `max` leading digits, or exactly `max` when `fixed`
fn number(s: &str, max: usize, fixed: bool) -> Option<(u32, &str)> {
    let len = count_digits(s).min(max);
    if len == 0 || (fixed && len < max) {
        return None;
    }

    digits(s, len)
}

fn count_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// A `.` or `,` followed by at least one digit
fn starts_fraction(s: &str) -> bool {
    let bytes = s.as_bytes();
    matches!(bytes.first(), Some(b'.' | b',')) && bytes.get(1).is_some_and(u8::is_ascii_digit)
}

/// A separator followed by exactly `len` digits. Digits past the ninth are
/// consumed but don't change the result.
fn nanoseconds(s: &str, len: usize) -> Option<(u32, &str)> {
    if len == 0 || !matches!(s.as_bytes().first(), Some(b'.' | b',')) {
        return None;
    }

    let fraction = s.get(1..1 + len)?;
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = &fraction[..len.min(9)];
    let scale = 10u32.pow(9 - significant.len() as u32);
    let nanosecond = significant.parse::<u32>().ok()? * scale;

    Some((nanosecond, &s[1 + len..]))
}

/// Case-insensitively match one of `names` at the start of `s`
fn lookup<'s>(names: &[&str], s: &'s str) -> Option<(usize, &'s str)> {
    names.iter().enumerate().find_map(|(i, name)| {
        s.get(..name.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(name))
            .map(|_| (i, &s[name.len()..]))
    })
}

/// Split a numeric offset into sign, hours, minutes, seconds and the rest
fn split_offset(s: &str, style: OffsetStyle) -> Option<(i32, u32, u32, u32, &str)> {
    let bytes = s.as_bytes();
    let sign = match bytes.first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let two = |range: std::ops::Range<usize>| s.get(range).and_then(|d| digits(d, 2)).map(|d| d.0);
    let colon = |i: usize| bytes.get(i) == Some(&b':');

    let (hours, minutes, seconds, len) = match style {
        OffsetStyle::Hours => (two(1..3)?, 0, 0, 3),
        OffsetStyle::HoursMinutes => (two(1..3)?, two(3..5)?, 0, 5),
        OffsetStyle::ColonHoursMinutes if colon(3) => (two(1..3)?, two(4..6)?, 0, 6),
        OffsetStyle::HoursMinutesSeconds => (two(1..3)?, two(3..5)?, two(5..7)?, 7),
        OffsetStyle::ColonHoursMinutesSeconds if colon(3) && colon(6) => {
            (two(1..3)?, two(4..6)?, two(7..9)?, 9)
        }
        OffsetStyle::ColonHoursMinutes | OffsetStyle::ColonHoursMinutesSeconds => return None,
    };

    Some((sign, hours, minutes, seconds, &s[len..]))
}

/// Length of the zone abbreviation at the start of `s`: `GMT` with an
/// optional signed hour, three capitals, or four or five capitals ending in
/// `T`
fn zone_abbreviation_len(s: &str) -> Option<usize> {
    if s.starts_with("ChST") || s.starts_with("MeST") {
        return Some(4);
    }

    if let Some(rest) = s.strip_prefix("GMT") {
        return Some(3 + signed_hour_len(rest));
    }

    let bytes = s.as_bytes();
    let upper = bytes.iter().take(6).take_while(|b| b.is_ascii_uppercase()).count();
    match upper {
        3 => Some(3),
        4 if bytes[3] == b'T' || s.starts_with("WITA") => Some(4),
        5 if bytes[4] == b'T' => Some(5),
        _ => None,
    }
}

/// Length of a `+h`/`-hh` suffix after `GMT`, or 0 if there isn't a valid one
fn signed_hour_len(s: &str) -> usize {
    if !s.starts_with(['+', '-']) {
        return 0;
    }

    let len = count_digits(&s[1..]);
    match s[1..1 + len].parse::<u32>() {
        Ok(hour) if len > 0 && hour <= 23 => 1 + len,
        _ => 0,
    }
}

/// Offset in seconds named by a `GMT+h` abbreviation. Any other abbreviation
/// is treated as UTC since there's no zone database to consult.
fn gmt_offset(zone: &str) -> i32 {
    zone.strip_prefix("GMT")
        .and_then(|hours| hours.parse::<i32>().ok())
        .map_or(0, |hours| hours * 3600)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, FixedOffset, Timelike};
    use test_case::test_case;

    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn parse(layout: &str, value: &str) -> Result<Timestamp, Error> {
        parse_timestamp(&Layout::new(layout), value, utc())
    }

    #[test]
    fn test_date_only() {
        let ts = parse("2006-01-02", "2021-02-04").unwrap();

        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.month(), 2);
        assert_eq!(ts.day(), 4);
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.minute(), 0);
        assert_eq!(ts.second(), 0);
        assert_eq!(ts.nanosecond(), 0);
        assert_eq!(ts.offset(), utc());
        assert_eq!(ts.zone_abbreviation(), Some("UTC"));
    }

    #[test]
    fn test_reversed_arguments() {
        let err = parse("2021-02-04", "2006-01-02").unwrap_err();

        assert_eq!(
            err,
            Error::Mismatch {
                layout: "2021-02-04".into(),
                value: "2006-01-02".into(),
                expected: "1".into(),
                found: "-01-02".into(),
                position: 4,
            }
        );
        assert_eq!(
            err.to_string(),
            r#"parsing time "2006-01-02" as "2021-02-04": cannot parse "-01-02" as "1""#
        );
    }

    #[test]
    fn test_time_only_defaults_to_year_zero() {
        let ts = parse("15:04", "10:30").unwrap();

        assert_eq!(ts.year(), 0);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
    }

    #[test_case("2006-01-02", "2021-13-04", "month", 5 ; "month thirteen")]
    #[test_case("2006-01-02", "2021-00-04", "month", 5 ; "month zero")]
    #[test_case("2006-01-02", "2021-02-30", "day", 8 ; "february thirtieth")]
    #[test_case("2006-01-02", "2021-02-29", "day", 8 ; "not a leap year")]
    #[test_case("2006-01-02", "2021-04-00", "day", 8 ; "day zero")]
    #[test_case("15:04", "24:00", "hour", 0 ; "hour twenty four")]
    #[test_case("3:04PM", "13:00PM", "hour", 0 ; "twelve hour clock")]
    #[test_case("15:04", "12:60", "minute", 3 ; "minute sixty")]
    #[test_case("15:04:05", "12:00:60", "second", 6 ; "second sixty")]
    #[test_case("2006 002", "2021 366", "day-of-year", 5 ; "day of year in a short year")]
    #[test_case("-07:00", "+25:00", "time zone offset hour", 0 ; "offset hour")]
    #[test_case("-0700", "+0061", "time zone offset minute", 0 ; "offset minute")]
    #[test_case("-07:00", "+24:00", "time zone offset", 0 ; "offset a whole day")]
    fn test_out_of_range(layout: &str, value: &str, field: &str, position: usize) {
        match parse(layout, value) {
            Err(Error::OutOfRange {
                field: f,
                position: p,
                ..
            }) => {
                assert_eq!(f, field);
                assert_eq!(p, position);
            }
            other => panic!("expected {field} out of range, got {other:?}"),
        }
    }

    #[test_case("2006-01-02", "04-02-2021" ; "different order")]
    #[test_case("2006-01-02", "2021/02/04" ; "wrong separator")]
    #[test_case("2006-01-02", "21-02-04" ; "short year")]
    #[test_case("2006-01-02", "2021-2-04" ; "short zero padded month")]
    #[test_case("2006-01-02", "2021-02-" ; "premature end")]
    #[test_case("2006-01-02", "" ; "empty")]
    #[test_case("2006-01-02", "20x1-02-04" ; "letter in year")]
    #[test_case("Jan 2 2006", "Foo 2 2021" ; "unknown month")]
    #[test_case("Mon Jan 2", "Fun Jan 2" ; "unknown weekday")]
    #[test_case("3PM", "3XM" ; "bad meridiem")]
    #[test_case("MST", "Pst" ; "lowercase zone")]
    #[test_case("-07:00", "+0700" ; "missing colon")]
    #[test_case("-0700", "0700" ; "missing sign")]
    #[test_case("05.000", "01.12" ; "short fraction")]
    #[test_case("2006年1月", "2021年2日" ; "non ascii literal")]
    fn test_mismatch(layout: &str, value: &str) {
        assert!(matches!(
            parse(layout, value),
            Err(Error::Mismatch { .. })
        ));
    }

    #[test]
    fn test_extra_text() {
        let err = parse("2006-01-02", "2021-02-04T10:00").unwrap_err();

        assert_eq!(err.position(), 10);
        assert_eq!(
            err.to_string(),
            r#"parsing time "2021-02-04T10:00": extra text: "T10:00""#
        );
    }

    #[test]
    fn test_failure_is_repeatable() {
        let first = parse("2006-01-02", "2021-13-04");
        let second = parse("2006-01-02", "2021-13-04");

        assert!(first.is_err());
        assert_eq!(first, second);
    }

    #[test]
    fn test_leap_day() {
        let ts = parse("2006-01-02", "2024-02-29").unwrap();
        assert_eq!((ts.month(), ts.day()), (2, 29));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse("06", "68").unwrap().year(), 2068);
        assert_eq!(parse("06", "69").unwrap().year(), 1969);
    }

    #[test]
    fn test_month_and_weekday_names_ignore_case() {
        let ts = parse("Monday, January 2 2006", "THURSDAY, february 4 2021").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 2, 4));
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(parse("3:04PM", "12:15AM").unwrap().hour(), 0);
        assert_eq!(parse("3:04PM", "12:15PM").unwrap().hour(), 12);
        assert_eq!(parse("3:04pm", "1:15pm").unwrap().hour(), 13);
    }

    #[test]
    fn test_spaces_are_flexible() {
        let ts = parse("Jan _2 2006", "Feb  4 2021").unwrap();
        assert_eq!(ts.day(), 4);

        let ts = parse("Jan 2 2006", "Feb    4   2021").unwrap();
        assert_eq!(ts.day(), 4);
    }

    #[test]
    fn test_day_of_year() {
        let ts = parse("2006-002", "2024-060").unwrap();
        assert_eq!((ts.month(), ts.day()), (2, 29));

        let ts = parse("2006 __2", "2021  35").unwrap();
        assert_eq!((ts.month(), ts.day()), (2, 4));
    }

    #[test]
    fn test_day_of_year_must_agree() {
        let err = parse("2006-01-02 002", "2021-02-04 036").unwrap_err();

        assert_eq!(
            err,
            Error::DayOfYearMismatch {
                layout: "2006-01-02 002".into(),
                value: "2021-02-04 036".into(),
                field: "day",
                position: 11,
            }
        );
        assert!(parse("2006-01-02 002", "2021-02-04 035").is_ok());
    }

    #[test]
    fn test_fixed_fraction() {
        let ts = parse("15:04:05.000", "10:30:15.250").unwrap();
        assert_eq!(ts.nanosecond(), 250_000_000);

        let ts = parse("15:04:05,000000000", "10:30:15,000000001").unwrap();
        assert_eq!(ts.nanosecond(), 1);
    }

    #[test]
    fn test_optional_fraction() {
        assert_eq!(parse("05.999", "07").unwrap().nanosecond(), 0);
        assert_eq!(parse("05.999", "07.5").unwrap().nanosecond(), 500_000_000);
        assert_eq!(
            parse("05.999", "07.1234567891").unwrap().nanosecond(),
            123_456_789
        );
    }

    #[test]
    fn test_unasked_fraction_after_seconds() {
        let ts = parse("15:04:05", "10:30:15.125").unwrap();

        assert_eq!(ts.second(), 15);
        assert_eq!(ts.nanosecond(), 125_000_000);
    }

    #[test_case("Z07:00", "Z", 0, Some("UTC") ; "iso zulu")]
    #[test_case("Z07:00", "+05:30", 19_800, None ; "iso offset")]
    #[test_case("-0700", "-0800", -28_800, None ; "numeric")]
    #[test_case("-07", "+03", 10_800, None ; "hours only")]
    #[test_case("-07:00:00", "-01:02:03", -3_723, None ; "with seconds")]
    #[test_case("MST", "UTC", 0, Some("UTC") ; "utc by name")]
    #[test_case("MST", "PST", 0, Some("PST") ; "unknown abbreviation")]
    #[test_case("MST", "GMT+3", 10_800, Some("GMT+3") ; "gmt with hours")]
    #[test_case("MST", "AEST", 0, Some("AEST") ; "four letters")]
    #[test_case("-0700 MST", "-0800 PST", -28_800, Some("PST") ; "offset and abbreviation")]
    fn test_zones(layout: &str, value: &str, offset: i32, zone: Option<&str>) {
        let ts = parse(layout, value).unwrap();

        assert_eq!(ts.offset().local_minus_utc(), offset);
        assert_eq!(ts.zone_abbreviation(), zone);
    }

    #[test]
    fn test_offset_shifts_instant_not_wall_clock() {
        let ts = parse(
            "2006-01-02T15:04:05Z07:00",
            "2021-02-04T23:30:00-02:00",
        )
        .unwrap();

        assert_eq!(ts.day(), 4);
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.as_datetime().naive_utc().day(), 5);
        assert_eq!(ts.as_datetime().naive_utc().hour(), 1);
    }

    #[test]
    fn test_default_offset() {
        let paris = FixedOffset::east_opt(3600).unwrap();
        let ts = parse_timestamp(&Layout::DATE_TIME, "2021-02-04 10:00:00", paris).unwrap();

        assert_eq!(ts.offset(), paris);
        assert_eq!(ts.zone_abbreviation(), None);

        // explicit zone information wins over the default
        let ts = parse_timestamp(&Layout::RFC3339, "2021-02-04T10:00:00Z", paris).unwrap();
        assert_eq!(ts.offset(), utc());
    }

    #[test]
    fn test_named_layouts() {
        let ts = parse_timestamp(
            &Layout::RFC1123,
            "Thu, 04 Feb 2021 10:20:30 GMT",
            utc(),
        )
        .unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.zone_abbreviation(), Some("GMT"));

        let ts = parse_timestamp(&Layout::KITCHEN, "9:05PM", utc()).unwrap();
        assert_eq!((ts.hour(), ts.minute()), (21, 5));

        let ts = parse_timestamp(&Layout::ANSIC, "Thu Feb  4 10:20:30 2021", utc()).unwrap();
        assert_eq!(ts.day(), 4);
    }

    #[test_case(Layout::REFERENCE, "02/04 10:20:30AM '21 +0100" ; "reference")]
    #[test_case(Layout::UNIX_DATE, "Thu Feb  4 10:20:30 PST 2021" ; "unix date")]
    #[test_case(Layout::RUBY_DATE, "Thu Feb 04 10:20:30 -0800 2021" ; "ruby date")]
    #[test_case(Layout::RFC822, "04 Feb 21 10:20 CET" ; "rfc822")]
    #[test_case(Layout::RFC822Z, "04 Feb 21 10:20 +0100" ; "rfc822z")]
    #[test_case(Layout::RFC850, "Thursday, 04-Feb-21 10:20:30 UTC" ; "rfc850")]
    #[test_case(Layout::RFC1123Z, "Thu, 04 Feb 2021 10:20:30 -0800" ; "rfc1123z")]
    #[test_case(Layout::RFC3339, "2021-02-04T10:20:30Z" ; "rfc3339")]
    #[test_case(Layout::RFC3339_NANO, "2021-02-04T10:20:30.000123+05:30" ; "rfc3339 nano")]
    #[test_case(Layout::STAMP_NANO, "Feb  4 10:20:30.000000123" ; "stamp nano")]
    #[test_case(Layout::DATE_ONLY, "2021-02-04" ; "date only")]
    #[test_case(Layout::TIME_ONLY, "10:20:30" ; "time only")]
    #[test_case(Layout::DEFAULT, "2021-02-04 10:20:30.5 -0800 PST" ; "default")]
    fn test_round_trip(layout: Layout<'static>, value: &str) {
        let ts = parse_timestamp(&layout, value, utc()).unwrap();
        assert_eq!(ts.format(&layout).to_string(), value);
    }
}
