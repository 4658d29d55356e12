//! Core primitives of the traditional Chinese calendrical cycle.
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches
//! - The sixty-pair sexagenary cycle with xun (ten-pair block) arithmetic
//! - The five elements and their generative/destructive relations
//! - The twenty-four solar terms
//! - The locale tag threaded through every display-name lookup
//!
//! Everything here is pure data plus constant-time lookup; the chart and
//! hexagram engines build on these types without any shared state.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod locale;
pub mod solar_term;
pub mod stem;

use serde::{Deserialize, Serialize};

pub use branch::{ALL_BRANCHES, EarthlyBranch, double_hour};
pub use cycle::{SIXTY_CYCLE, StemBranch, hour_pillar};
pub use element::{ALL_ELEMENTS, FiveElement};
pub use locale::Locale;
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use stem::{ALL_STEMS, HeavenlyStem};

/// Yin/yang polarity. The center palace is the one place that carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
    Balanced,
}

impl Polarity {
    /// Character form (陽 / 陰 / 陰陽).
    pub const fn character(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
            Self::Balanced => "陰陽",
        }
    }
}
