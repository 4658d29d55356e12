//! Error types for the calendrical boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant parsing or almanac resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// The civil instant text could not be parsed.
    InvalidInstant(String),
    /// A lunar date field is out of range.
    InvalidLunarDate(&'static str),
    /// The backing almanac cannot resolve the requested instant.
    Unresolvable(String),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInstant(text) => write!(f, "invalid instant: {text}"),
            Self::InvalidLunarDate(msg) => write!(f, "invalid lunar date: {msg}"),
            Self::Unresolvable(msg) => write!(f, "almanac cannot resolve instant: {msg}"),
        }
    }
}

impl Error for AlmanacError {}
