use std::fmt;

use crate::lexer::Element;

/// A reference layout: the reference time `Mon Jan 2 15:04:05 MST 2006`
/// written the way the dates you want to read or write look.
///
/// A layout is deliberately a different type from the text being parsed so
/// the two can't be swapped at a call site.
///
/// ```rust
/// use layoutdate::Layout;
///
/// let layout = Layout::new("02/01/2006");
/// assert_eq!(layout.as_str(), "02/01/2006");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout<'a> {
    source: &'a str,
}

impl<'a> Layout<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub const fn as_str(&self) -> &'a str {
        self.source
    }

    pub(crate) fn elements(&self) -> Vec<Element<'a>> {
        Element::lex_layout(self.source)
    }
}

impl Layout<'static> {
    /// The reference time itself, in numeric order
    pub const REFERENCE: Self = Self::new("01/02 03:04:05PM '06 -0700");
    pub const ANSIC: Self = Self::new("Mon Jan _2 15:04:05 2006");
    pub const UNIX_DATE: Self = Self::new("Mon Jan _2 15:04:05 MST 2006");
    pub const RUBY_DATE: Self = Self::new("Mon Jan 02 15:04:05 -0700 2006");
    pub const RFC822: Self = Self::new("02 Jan 06 15:04 MST");
    pub const RFC822Z: Self = Self::new("02 Jan 06 15:04 -0700");
    pub const RFC850: Self = Self::new("Monday, 02-Jan-06 15:04:05 MST");
    pub const RFC1123: Self = Self::new("Mon, 02 Jan 2006 15:04:05 MST");
    pub const RFC1123Z: Self = Self::new("Mon, 02 Jan 2006 15:04:05 -0700");
    pub const RFC3339: Self = Self::new("2006-01-02T15:04:05Z07:00");
    pub const RFC3339_NANO: Self = Self::new("2006-01-02T15:04:05.999999999Z07:00");
    pub const KITCHEN: Self = Self::new("3:04PM");
    pub const STAMP: Self = Self::new("Jan _2 15:04:05");
    pub const STAMP_MILLI: Self = Self::new("Jan _2 15:04:05.000");
    pub const STAMP_MICRO: Self = Self::new("Jan _2 15:04:05.000000");
    pub const STAMP_NANO: Self = Self::new("Jan _2 15:04:05.000000000");
    pub const DATE_TIME: Self = Self::new("2006-01-02 15:04:05");
    pub const DATE_ONLY: Self = Self::new("2006-01-02");
    pub const TIME_ONLY: Self = Self::new("15:04:05");
    /// What `Timestamp`'s `Display` impl renders with
    pub const DEFAULT: Self = Self::new("2006-01-02 15:04:05.999999999 -0700 MST");
}

impl<'a> From<&'a str> for Layout<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}
