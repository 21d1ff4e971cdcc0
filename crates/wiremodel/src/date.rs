//! Timestamp parsing for date-typed fields.
//!
//! Wire dates arrive as strings in a handful of ISO 8601 shapes. Parsing is
//! lenient: text matching none of the accepted shapes becomes a
//! [`DateStamp::Invalid`] sentinel that keeps the original text, so a bad
//! date is a data-quality signal rather than a fault and dehydration loses
//! nothing.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

/// A parsed date field: a concrete timestamp, or the unparseable original
/// text.
#[derive(Debug, Clone, PartialEq)]
pub enum DateStamp {
    Valid(DateTime<FixedOffset>),
    Invalid(String),
}

impl DateStamp {
    /// Parse wire text into a timestamp.
    ///
    /// Accepted shapes, tried in order: RFC 3339 with offset, offset-free
    /// datetime (taken as UTC), bare date (midnight UTC).
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Valid(dt);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Self::Valid(naive.and_utc().fixed_offset());
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::Valid(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
        }
        Self::Invalid(text.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::Valid(dt) => Some(dt),
            Self::Invalid(_) => None,
        }
    }

    /// Wire rendering: RFC 3339 for valid stamps, the original text for
    /// invalid ones.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Valid(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Self::Invalid(text) => text.clone(),
        }
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let stamp = DateStamp::parse("2024-05-01T10:30:00+02:00");
        assert!(stamp.is_valid());
        let dt = stamp.as_datetime().unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(stamp.to_wire(), "2024-05-01T10:30:00+02:00");
    }

    #[test]
    fn parses_zulu_and_renders_z() {
        let stamp = DateStamp::parse("2024-05-01T10:30:00Z");
        assert_eq!(stamp.to_wire(), "2024-05-01T10:30:00Z");
    }

    #[test]
    fn offset_free_datetime_is_utc() {
        let stamp = DateStamp::parse("2024-05-01T10:30:00.250");
        assert_eq!(stamp.to_wire(), "2024-05-01T10:30:00.250Z");
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let stamp = DateStamp::parse("2024-05-01");
        assert_eq!(stamp.to_wire(), "2024-05-01T00:00:00Z");
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        assert!(DateStamp::parse("  2024-05-01  ").is_valid());
    }

    #[test]
    fn garbage_keeps_original_text() {
        let stamp = DateStamp::parse("next tuesday");
        assert!(!stamp.is_valid());
        assert_eq!(stamp.as_datetime(), None);
        assert_eq!(stamp.to_wire(), "next tuesday");
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(DateStamp::parse("2024-05-01").to_string(), "2024-05-01T00:00:00Z");
    }
}
