//! Calendrical service boundary.
//!
//! The chart and hexagram engines never compute lunisolar astronomy
//! themselves; they consume an [`AlmanacSource`] that reports, for a given
//! civil instant, the four stem-branch pillars, the prevailing solar
//! terms, and the lunar calendar date. Any accurate Chinese lunisolar
//! library can implement the trait; [`FixedAlmanac`] is the deterministic
//! in-memory source used by tests and benches.

pub mod error;
pub mod record;

use chrono::NaiveDateTime;

pub use error::AlmanacError;
pub use record::{AlmanacRecord, AlmanacSource, FixedAlmanac, FourPillars, LunarDate};

/// Accepted civil instant formats.
const INSTANT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a civil instant from its ISO-8601-style text form.
pub fn parse_instant(text: &str) -> Result<NaiveDateTime, AlmanacError> {
    for format in INSTANT_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(instant);
        }
    }
    Err(AlmanacError::InvalidInstant(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_t_separated() {
        let instant = parse_instant("2025-08-04T14:25:00").unwrap();
        assert_eq!(instant.year(), 2025);
        assert_eq!(instant.hour(), 14);
        assert_eq!(instant.minute(), 25);
    }

    #[test]
    fn parses_space_separated() {
        let instant = parse_instant("2025-08-04 14:25:00").unwrap();
        assert_eq!(instant.month(), 8);
        assert_eq!(instant.day(), 4);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_instant("not a date"),
            Err(AlmanacError::InvalidInstant(_))
        ));
        assert!(parse_instant("").is_err());
        assert!(parse_instant("2025-13-40T99:99:99").is_err());
    }
}
