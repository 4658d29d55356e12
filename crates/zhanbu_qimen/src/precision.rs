//! Advanced sub-hour precision: nine segments per double hour.
//!
//! A double hour spans 7200 seconds; the advanced mode splits it into
//! nine 800-second segments and reports which segment the instant falls
//! in. Palace placements are identical to traditional mode; the segment
//! record is informational.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use zhanbu_core::double_hour;

/// Seconds per sub-hour segment (7200 / 9).
pub const SEGMENT_SECONDS: i64 = 800;

/// Which ninth of the double hour an instant falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubHourSegment {
    /// Segment index 1-9.
    pub segment: u8,
    pub total_segments: u8,
    pub segment_seconds: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Locate the instant's sub-hour segment.
pub fn sub_hour_segment(instant: NaiveDateTime) -> SubHourSegment {
    let hour = instant.hour();
    let number = match double_hour(hour) {
        Some((_, number)) => number as u32,
        None => 1,
    };
    // The double hour opens on the odd hour 23, 1, 3, ...
    let open_hour = (23 + 2 * (number - 1)) % 24;
    let date = if open_hour > hour {
        instant.date() - Duration::days(1)
    } else {
        instant.date()
    };
    let open = date.and_time(NaiveTime::from_hms_opt(open_hour, 0, 0).unwrap_or(NaiveTime::MIN));

    let elapsed = (instant - open).num_seconds().clamp(0, 7199);
    let segment = (elapsed / SEGMENT_SECONDS) as u8 + 1;
    let start = open + Duration::seconds((segment as i64 - 1) * SEGMENT_SECONDS);

    SubHourSegment {
        segment,
        total_segments: 9,
        segment_seconds: SEGMENT_SECONDS as u32,
        start,
        end: start + Duration::seconds(SEGMENT_SECONDS),
    }
}
