//! # layoutdate: Dates Read by Example
//!
//! A parser and formatter which reads dates using a *reference layout*:
//! instead of `%Y-%m-%d` style directives, a layout is the reference time
//!
//! ```text
//! Mon Jan 2 15:04:05 MST 2006
//! ```
//!
//! written the way the dates you want to read look. Numerically that's
//! `01/02 03:04:05PM '06 -0700`, so every field has a distinct value.
//!
//! ## Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ```toml
//! layoutdate = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use layoutdate::{parse, Layout};
//!
//! let date = parse(&Layout::DATE_ONLY, "2021-02-04").unwrap();
//! assert_eq!(date.to_string(), "2021-02-04 00:00:00 +0000 UTC");
//!
//! let layout = Layout::new("Jan _2, 2006 at 3:04pm (MST)");
//! let date = parse(&layout, "Feb  4, 2021 at 9:30pm (PST)").unwrap();
//! assert_eq!(date.hour(), 21);
//! assert_eq!(date.format(&layout).to_string(), "Feb  4, 2021 at 9:30pm (PST)");
//! ```
//!
//! Any field the layout doesn't mention takes its zero value: year 0,
//! January, the 1st, midnight, UTC.
//!
//! ## Layout markers
//! ```text
//! <year>      ::= 2006            ; four digits
//!               | 06              ; two digits, 69-99 are 19xx
//!
//! <month>     ::= January | Jan   ; names, any case when parsing
//!               | 01 | 1          ; zero padded | one or two digits
//!
//! <weekday>   ::= Monday | Mon    ; checked but otherwise ignored
//!
//! <day>       ::= 02 | _2 | 2     ; zero padded | space padded | plain
//!
//! <year_day>  ::= 002 | __2       ; zero padded | space padded
//!
//! <hour>      ::= 15              ; 24 hour clock
//!               | 03 | 3          ; 12 hour clock, pair with <meridiem>
//!
//! <minute>    ::= 04 | 4
//!
//! <second>    ::= 05 | 5
//!
//! <fraction>  ::= .000 | ,000     ; exactly as many digits as zeros
//!               | .999 | ,999     ; optional, trailing zeros dropped
//!
//! <meridiem>  ::= PM | pm
//!
//! <zone>      ::= MST             ; abbreviation, e.g. UTC, PST, GMT+3
//!               | -0700 | -07:00 | -07 | -070000 | -07:00:00
//!               | Z0700 | Z07:00 | Z07 | Z070000 | Z07:00:00
//!                                 ; as above, but Z means UTC
//! ```
//!
//! Everything else in a layout is literal text. A space in a layout matches
//! any run of spaces.

mod format;
mod layout;
mod lexer;
mod parse;
mod timestamp;

use chrono::{FixedOffset, Offset, Utc};

pub use format::Formatted;
pub use layout::Layout;
pub use timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("parsing time {value:?} as {layout:?}: cannot parse {found:?} as {expected:?}")]
    /// The text at `position` doesn't match the `expected` part of the layout,
    /// e.g. `"2021/02/04"` under `"2006-01-02"`
    Mismatch {
        layout: String,
        value: String,
        expected: String,
        found: String,
        position: usize,
    },
    #[error("parsing time {value:?}: {field} out of range")]
    /// A field was read but its value can't exist,
    /// e.g. `"2021-13-04"`, `"2021-02-30"`, `"24:00"`
    OutOfRange {
        layout: String,
        value: String,
        field: &'static str,
        position: usize,
    },
    #[error("parsing time {value:?}: extra text: {extra:?}")]
    /// The layout was fully matched but text was left over
    ExtraText {
        layout: String,
        value: String,
        extra: String,
        position: usize,
    },
    #[error("parsing time {value:?}: day-of-year does not match {field}")]
    /// A day of the year was given along with a month or day it disagrees with
    DayOfYearMismatch {
        layout: String,
        value: String,
        field: &'static str,
        position: usize,
    },
}

impl Error {
    /// Byte offset into the parsed text where the problem was found
    pub fn position(&self) -> usize {
        match self {
            Self::Mismatch { position, .. }
            | Self::OutOfRange { position, .. }
            | Self::ExtraText { position, .. }
            | Self::DayOfYearMismatch { position, .. } => *position,
        }
    }

    /// The layout that was being matched
    pub fn layout(&self) -> &str {
        match self {
            Self::Mismatch { layout, .. }
            | Self::OutOfRange { layout, .. }
            | Self::ExtraText { layout, .. }
            | Self::DayOfYearMismatch { layout, .. } => layout,
        }
    }

    /// The text that failed to parse
    pub fn value(&self) -> &str {
        match self {
            Self::Mismatch { value, .. }
            | Self::OutOfRange { value, .. }
            | Self::ExtraText { value, .. }
            | Self::DayOfYearMismatch { value, .. } => value,
        }
    }
}

/// Parse a string into a Timestamp using a layout. Text without any zone
/// information is taken to be UTC.
pub fn parse(layout: &Layout<'_>, text: &str) -> Result<Timestamp, Error> {
    parse_with_offset(layout, text, Utc.fix())
}

/// Parse a string into a Timestamp using a layout. Text without any zone
/// information is taken to be at the `default` offset.
pub fn parse_with_offset(
    layout: &Layout<'_>,
    text: &str,
    default: FixedOffset,
) -> Result<Timestamp, Error> {
    let result = parse::parse_timestamp(layout, text, default);

    match &result {
        Ok(timestamp) => {
            tracing::trace!(layout = layout.as_str(), text, %timestamp, "parsed timestamp");
        }
        Err(err) => {
            tracing::debug!(
                layout = layout.as_str(),
                text,
                position = err.position(),
                error = %err,
                "failed to parse timestamp"
            );
        }
    }

    result
}

#[test]
fn test_parse() {
    let date = parse(&Layout::DATE_ONLY, "2021-02-04").unwrap();

    assert_eq!(2021, date.year());
    assert_eq!(2, date.month());
    assert_eq!(4, date.day());
    assert_eq!(0, date.hour());
    assert_eq!(0, date.offset().local_minus_utc());
    assert_eq!("2021-02-04 00:00:00 +0000 UTC", date.to_string());
}

#[test]
fn test_reversed_arguments_fail() {
    let result = parse(&Layout::new("2021-02-04"), "2006-01-02");
    assert!(result.is_err());

    let date = result.unwrap_or_default();
    assert!(date.is_zero());
    assert_eq!("0001-01-01 00:00:00 +0000 UTC", date.to_string());
}

#[test]
fn test_malformed() {
    let err = parse(&Layout::DATE_ONLY, "Hello World").unwrap_err();

    assert_eq!(0, err.position());
    assert_eq!("2006-01-02", err.layout());
    assert_eq!("Hello World", err.value());
}

#[test]
fn test_empty() {
    assert!(parse(&Layout::DATE_ONLY, "").is_err());
}

#[test]
fn test_empty_layout() {
    assert!(parse(&Layout::new(""), "").is_ok());
    assert!(parse(&Layout::new(""), "2021").is_err());
}

#[test]
fn test_out_of_range_message() {
    let err = parse(&Layout::DATE_ONLY, "2021-13-04").unwrap_err();
    assert_eq!(r#"parsing time "2021-13-04": month out of range"#, err.to_string());
}

#[test]
fn test_parse_with_offset() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let date = parse_with_offset(&Layout::DATE_TIME, "2021-02-04 10:00:00", offset).unwrap();

    assert_eq!(offset, date.offset());
    assert_eq!("2021-02-04 10:00:00 -0500 -0500", date.to_string());
}
