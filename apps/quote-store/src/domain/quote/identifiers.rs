//! Quote identifier.
//!
//! Ids are positive integers allocated by the store. Path segments are
//! matched against them with a lenient base-10 parse: a malformed id is not an
//! error of its own, it simply never matches a record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(u64);

impl QuoteId {
    /// Create an identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parse a path segment into an id.
    ///
    /// Skips leading whitespace, accepts an optional sign, then reads the
    /// longest run of ASCII digits and ignores whatever follows
    /// (`"7abc"` is 7, `"1.9"` is 1). Returns `None` when there are no
    /// digits, the value is negative, or it does not fit in a `u64`: none of
    /// those can ever name a stored quote.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = unsigned
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];
        if digits.is_empty() {
            return None;
        }

        let value: u64 = digits.parse().ok()?;
        if negative && value != 0 {
            return None;
        }
        Some(Self(value))
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1", Some(1); "plain")]
    #[test_case("42", Some(42); "multi digit")]
    #[test_case("007", Some(7); "leading zeros")]
    #[test_case("7abc", Some(7); "trailing garbage")]
    #[test_case("1.9", Some(1); "decimal truncates")]
    #[test_case("  3", Some(3); "leading whitespace")]
    #[test_case("+5", Some(5); "explicit plus")]
    #[test_case("-0", Some(0); "negative zero")]
    #[test_case("-3", None; "negative")]
    #[test_case("abc", None; "letters")]
    #[test_case("", None; "empty")]
    #[test_case("-", None; "sign only")]
    #[test_case("99999999999999999999999", None; "overflow")]
    fn parse_lenient_cases(raw: &str, expected: Option<u64>) {
        assert_eq!(QuoteId::parse_lenient(raw).map(QuoteId::value), expected);
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(QuoteId::new(12).to_string(), "12");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&QuoteId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
