//! Date tokens taken from request paths.

use std::fmt;

/// A user-supplied date in canonical form.
///
/// Canonicalisation removes every space character and lower-cases the rest.
/// Any string is accepted: a token that is not a plausible date is kept as-is
/// and simply never matches a stored measurement.
///
/// # Examples
///
/// ```
/// use climate_server::domain::DateToken;
///
/// let token = DateToken::new(" 2017-01-01 ");
/// assert_eq!(token.as_str(), "2017-01-01");
///
/// // Spaces anywhere are dropped, letters are lower-cased
/// assert_eq!(DateToken::new("2017 - 01 - 01T").as_str(), "2017-01-01t");
///
/// // Garbage is not rejected
/// assert_eq!(DateToken::new("Not A Date").as_str(), "notadate");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DateToken(String);

impl DateToken {
    /// Canonicalise a raw date token.
    pub fn new(raw: &str) -> Self {
        DateToken(canonicalize(raw))
    }

    /// Returns the canonical token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Remove all spaces and lower-case.
fn canonicalize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Debug for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateToken({})", self.0)
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A start date with an optional inclusive end date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateToken,
    pub end: Option<DateToken>,
}

impl DateRange {
    /// Open-ended range: every date on or after `start`.
    pub fn open(start: DateToken) -> Self {
        Self { start, end: None }
    }

    /// Closed range, inclusive at both ends.
    pub fn between(start: DateToken, end: DateToken) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}
