//! Almanac record types and the source trait.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use zhanbu_core::{SolarTerm, StemBranch};

use crate::error::AlmanacError;

/// A lunar calendar date. The month is the absolute month number; leap
/// months carry the `leap` flag instead of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub leap: bool,
}

impl LunarDate {
    /// Build a lunar date, rejecting out-of-range months and days.
    pub fn new(year: i32, month: u8, day: u8, leap: bool) -> Result<LunarDate, AlmanacError> {
        if !(1..=12).contains(&month) {
            return Err(AlmanacError::InvalidLunarDate("month outside 1-12"));
        }
        if !(1..=30).contains(&day) {
            return Err(AlmanacError::InvalidLunarDate("day outside 1-30"));
        }
        Ok(LunarDate {
            year,
            month,
            day,
            leap,
        })
    }

    /// Display label, e.g. "農曆2025年6月11日".
    pub fn label(&self) -> String {
        let leap = if self.leap { "閏" } else { "" };
        format!("農曆{}年{}{}月{}日", self.year, leap, self.month, self.day)
    }
}

/// The four stem-branch pillars of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

/// Everything the chart engines need to know about an instant.
///
/// `prev_term` is the solar term at or nearest before the instant;
/// `month_term` is the term governing the instant's lunar month. Both are
/// optional because a backing service may fail to report a term; the
/// chart engine treats a missing term as a recoverable lookup miss with a
/// documented fallback, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacRecord {
    pub pillars: FourPillars,
    pub prev_term: Option<SolarTerm>,
    pub month_term: Option<SolarTerm>,
    pub lunar: LunarDate,
}

/// A calendrical oracle. Implementations must be pure: the same instant
/// always yields the same record.
pub trait AlmanacSource {
    /// Resolve the pillars, solar terms and lunar date of an instant.
    fn resolve(&self, instant: NaiveDateTime) -> Result<AlmanacRecord, AlmanacError>;
}

/// An almanac that answers every query with one preset record.
///
/// Stands in for a full lunisolar library in tests, benches and demos,
/// keeping chart computations byte-for-byte reproducible.
#[derive(Debug, Clone)]
pub struct FixedAlmanac {
    record: AlmanacRecord,
}

impl FixedAlmanac {
    pub fn new(record: AlmanacRecord) -> FixedAlmanac {
        FixedAlmanac { record }
    }

    /// The preset record.
    pub fn record(&self) -> &AlmanacRecord {
        &self.record
    }
}

impl AlmanacSource for FixedAlmanac {
    fn resolve(&self, _instant: NaiveDateTime) -> Result<AlmanacRecord, AlmanacError> {
        Ok(self.record)
    }
}
