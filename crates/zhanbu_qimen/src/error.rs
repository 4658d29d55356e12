//! Error-flagged chart result.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::Serialize;

use zhanbu_almanac::AlmanacError;

use crate::chart::ChartRequest;
use crate::method::{PillarMethod, Purpose};

/// Failure of a chart computation. Carries the request basis so downstream
/// renderers can echo what was asked without holding the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartError {
    pub message: String,
    pub instant: NaiveDateTime,
    pub method: PillarMethod,
    pub purpose: Purpose,
    pub location: String,
}

impl ChartError {
    /// Flag a request as failed with a message.
    pub fn new(request: &ChartRequest, message: impl Into<String>) -> ChartError {
        ChartError {
            message: message.into(),
            instant: request.instant,
            method: request.method,
            purpose: request.purpose,
            location: request.location.clone(),
        }
    }

    /// Flag a request as failed by an almanac error.
    pub fn from_almanac(request: &ChartRequest, error: AlmanacError) -> ChartError {
        ChartError::new(request, error.to_string())
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chart computation failed ({} {}): {}",
            self.method.label(),
            self.instant,
            self.message
        )
    }
}

impl Error for ChartError {}
