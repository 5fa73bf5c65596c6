use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Hashmap of layout fragments to the field that they represent
    /// Used as definitive source during lexing, longest fragment wins
    static ref KEYWORDS: HashMap<&'static str, Field> = {
        let mut map = HashMap::new();

        map.insert("2006", Field::LongYear);
        map.insert("06", Field::Year);
        map.insert("January", Field::LongMonth);
        map.insert("Jan", Field::Month);
        map.insert("01", Field::ZeroMonth);
        map.insert("1", Field::NumMonth);
        map.insert("Monday", Field::LongWeekday);
        map.insert("Mon", Field::Weekday);
        map.insert("02", Field::ZeroDay);
        map.insert("_2", Field::UnderDay);
        map.insert("2", Field::Day);
        map.insert("__2", Field::UnderYearDay);
        map.insert("002", Field::ZeroYearDay);
        map.insert("15", Field::Hour);
        map.insert("03", Field::ZeroHour12);
        map.insert("3", Field::Hour12);
        map.insert("04", Field::ZeroMinute);
        map.insert("4", Field::Minute);
        map.insert("05", Field::ZeroSecond);
        map.insert("5", Field::Second);
        map.insert("PM", Field::PM);
        map.insert("pm", Field::LowerPM);
        map.insert("MST", Field::Zone);
        map.insert("-07", Field::Offset(OffsetStyle::Hours));
        map.insert("-0700", Field::Offset(OffsetStyle::HoursMinutes));
        map.insert("-07:00", Field::Offset(OffsetStyle::ColonHoursMinutes));
        map.insert("-070000", Field::Offset(OffsetStyle::HoursMinutesSeconds));
        map.insert("-07:00:00", Field::Offset(OffsetStyle::ColonHoursMinutesSeconds));
        map.insert("Z07", Field::IsoOffset(OffsetStyle::Hours));
        map.insert("Z0700", Field::IsoOffset(OffsetStyle::HoursMinutes));
        map.insert("Z07:00", Field::IsoOffset(OffsetStyle::ColonHoursMinutes));
        map.insert("Z070000", Field::IsoOffset(OffsetStyle::HoursMinutesSeconds));
        map.insert("Z07:00:00", Field::IsoOffset(OffsetStyle::ColonHoursMinutesSeconds));

        map
    };
}

/// Length of the longest entry in `KEYWORDS`
const LONGEST_KEYWORD: usize = 9;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// How the digits of a numeric zone offset are laid out
pub enum OffsetStyle {
    /// `-07`
    Hours,
    /// `-0700`
    HoursMinutes,
    /// `-07:00`
    ColonHoursMinutes,
    /// `-070000`
    HoursMinutesSeconds,
    /// `-07:00:00`
    ColonHoursMinutesSeconds,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Every field marker a layout can contain
pub enum Field {
    LongYear,
    Year,
    LongMonth,
    Month,
    NumMonth,
    ZeroMonth,
    LongWeekday,
    Weekday,
    Day,
    UnderDay,
    ZeroDay,
    UnderYearDay,
    ZeroYearDay,
    Hour,
    Hour12,
    ZeroHour12,
    Minute,
    ZeroMinute,
    Second,
    ZeroSecond,
    PM,
    LowerPM,
    Zone,
    Offset(OffsetStyle),
    /// Like `Offset`, but `Z` stands in for UTC
    IsoOffset(OffsetStyle),
    /// Fractional seconds. `trim` layouts use 9s and may be omitted
    Fraction { digits: usize, trim: bool },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// A piece of a lexed layout. Both variants keep the layout text they came
/// from so that errors can quote it.
pub enum Element<'a> {
    Literal(&'a str),
    Field(Field, &'a str),
}

impl<'a> Element<'a> {
    /// Lex a layout into a list of Elements. Lexing can't fail: anything
    /// that isn't a field marker is a literal.
    pub fn lex_layout(layout: &'a str) -> Vec<Element<'a>> {
        let mut elements = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < layout.len() {
            match match_field(layout, i) {
                Some((field, len)) => {
                    if literal_start < i {
                        elements.push(Element::Literal(&layout[literal_start..i]));
                    }
                    elements.push(Element::Field(field, &layout[i..i + len]));
                    i += len;
                    literal_start = i;
                }
                None => i += 1,
            }
        }

        if literal_start < layout.len() {
            elements.push(Element::Literal(&layout[literal_start..]));
        }

        elements
    }
}

/// Find the field marker starting at byte `i` of `layout`, if any
fn match_field(layout: &str, i: usize) -> Option<(Field, usize)> {
    let rest = layout.get(i..)?;

    // _2006 is a literal underscore followed by a year, not _2 followed by 006
    if rest.starts_with("_2006") {
        return None;
    }

    if let Some(fraction) = match_fraction(rest) {
        return Some(fraction);
    }

    for len in (1..=LONGEST_KEYWORD.min(rest.len())).rev() {
        let Some(candidate) = rest.get(..len) else {
            continue;
        };

        if let Some(field) = KEYWORDS.get(candidate) {
            // "Jan" and "Mon" are only markers when they aren't the start of
            // some other word, e.g. "Janet" or "Month"
            if matches!(field, Field::Month | Field::Weekday)
                && rest[len..].starts_with(|c: char| c.is_ascii_lowercase())
            {
                return None;
            }

            return Some((*field, len));
        }
    }

    None
}

/// `.000`, `,000`, `.999` or `,999`, as long as the run of digits isn't
/// followed by another digit
fn match_fraction(rest: &str) -> Option<(Field, usize)> {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'.' | b',')) {
        return None;
    }

    let repeated = *bytes.get(1).filter(|&&b| b == b'0' || b == b'9')?;
    let digits = bytes[1..].iter().take_while(|&&b| b == repeated).count();

    if bytes.get(1 + digits).is_some_and(u8::is_ascii_digit) {
        return None;
    }

    let field = Field::Fraction {
        digits,
        trim: repeated == b'9',
    };
    Some((field, 1 + digits))
}

#[test]
fn test_date_only() {
    assert_eq!(
        vec![
            Element::Field(Field::LongYear, "2006"),
            Element::Literal("-"),
            Element::Field(Field::ZeroMonth, "01"),
            Element::Literal("-"),
            Element::Field(Field::ZeroDay, "02"),
        ],
        Element::lex_layout("2006-01-02")
    );
}

#[test]
fn test_reversed_arguments_layout() {
    // a concrete date used as a layout still lexes, just not into anything useful
    assert_eq!(
        vec![
            Element::Field(Field::Day, "2"),
            Element::Field(Field::ZeroDay, "02"),
            Element::Field(Field::NumMonth, "1"),
            Element::Literal("-"),
            Element::Field(Field::ZeroDay, "02"),
            Element::Literal("-"),
            Element::Field(Field::ZeroMinute, "04"),
        ],
        Element::lex_layout("2021-02-04")
    );
}

#[test]
fn test_rfc3339_nano() {
    assert_eq!(
        vec![
            Element::Field(Field::LongYear, "2006"),
            Element::Literal("-"),
            Element::Field(Field::ZeroMonth, "01"),
            Element::Literal("-"),
            Element::Field(Field::ZeroDay, "02"),
            Element::Literal("T"),
            Element::Field(Field::Hour, "15"),
            Element::Literal(":"),
            Element::Field(Field::ZeroMinute, "04"),
            Element::Literal(":"),
            Element::Field(Field::ZeroSecond, "05"),
            Element::Field(
                Field::Fraction {
                    digits: 9,
                    trim: true
                },
                ".999999999"
            ),
            Element::Field(
                Field::IsoOffset(OffsetStyle::ColonHoursMinutes),
                "Z07:00"
            ),
        ],
        Element::lex_layout("2006-01-02T15:04:05.999999999Z07:00")
    );
}

#[test]
fn test_names_inside_words_are_literal() {
    assert_eq!(
        vec![Element::Literal("Janet Month")],
        Element::lex_layout("Janet Month")
    );
    assert_eq!(
        vec![
            Element::Field(Field::LongWeekday, "Monday"),
            Element::Literal(", "),
            Element::Field(Field::LongMonth, "January"),
        ],
        Element::lex_layout("Monday, January")
    );
}

#[test]
fn test_underscore_year() {
    assert_eq!(
        vec![
            Element::Literal("_"),
            Element::Field(Field::LongYear, "2006"),
        ],
        Element::lex_layout("_2006")
    );
}

#[test]
fn test_fraction_followed_by_digit_is_literal() {
    assert_eq!(
        vec![
            Element::Field(Field::ZeroSecond, "05"),
            Element::Literal(".0"),
            Element::Field(Field::ZeroMonth, "01"),
        ],
        Element::lex_layout("05.001")
    );
}

#[test]
fn test_kitchen() {
    assert_eq!(
        vec![
            Element::Field(Field::Hour12, "3"),
            Element::Literal(":"),
            Element::Field(Field::ZeroMinute, "04"),
            Element::Field(Field::PM, "PM"),
        ],
        Element::lex_layout("3:04PM")
    );
}

#[test]
fn test_non_ascii_literal() {
    assert_eq!(
        vec![
            Element::Field(Field::LongYear, "2006"),
            Element::Literal("年"),
            Element::Field(Field::NumMonth, "1"),
            Element::Literal("月"),
        ],
        Element::lex_layout("2006年1月")
    );
}
