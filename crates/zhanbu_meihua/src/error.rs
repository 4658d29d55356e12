//! Error types for hexagram casting.

use std::error::Error;
use std::fmt::{Display, Formatter};

use zhanbu_almanac::AlmanacError;

/// Errors from casting input validation or almanac resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CastError {
    /// Hour of day outside 0-23.
    HourOutOfRange(u32),
    /// Error from the calendrical boundary (bad lunar date or instant).
    Almanac(AlmanacError),
}

impl Display for CastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourOutOfRange(hour) => write!(f, "hour of day {hour} outside 0-23"),
            Self::Almanac(e) => write!(f, "almanac error: {e}"),
        }
    }
}

impl Error for CastError {}

impl From<AlmanacError> for CastError {
    fn from(e: AlmanacError) -> Self {
        Self::Almanac(e)
    }
}
