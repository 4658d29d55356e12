//! Static table store: the fixed domain tables every distributor reads.
//!
//! This crate holds:
//! - The nine palaces with their directions, elements and ring orders
//! - The nine stars, eight gates and eight deities with elements,
//!   auspice types, aliases and feature text
//! - The solar-term → configuration-digit-triple formation table
//! - The earth-plate stem sequence and the stem-hosting map
//! - The eight trigrams and the 64-hexagram name table
//!
//! Pure data plus lookup. Display names take an explicit [`Locale`];
//! algorithmic keys never vary with it.

pub mod deity;
pub mod earth_plate;
pub mod formation;
pub mod gate;
pub mod hexagram;
pub mod palace;
pub mod star;
pub mod trigram;

use serde::{Deserialize, Serialize};
use zhanbu_core::Locale;

pub use deity::{DEITY_CYCLE, Deity};
pub use earth_plate::{EARTH_PLATE_SEQUENCE, host_stem};
pub use formation::{Dun, FORMATION_TABLE, FormationRow, formation_row};
pub use gate::{GATE_CYCLE, Gate};
pub use hexagram::{HexagramName, hexagram_name};
pub use palace::{ALL_PALACES, Palace, RING_CLOCKWISE, YANG_LAYOUT_RING, YIN_LAYOUT_RING};
pub use star::{STAR_CYCLE, Star};
pub use trigram::{ALL_TRIGRAMS, Trigram};

/// Auspicious/inauspicious classification shared by gates and deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Auspice {
    Auspicious,
    Inauspicious,
}

impl Auspice {
    /// Display label (吉 / 兇).
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Auspicious, _) => "吉",
            (Self::Inauspicious, Locale::ZhHant) => "兇",
            (Self::Inauspicious, Locale::ZhHans) => "凶",
        }
    }
}
