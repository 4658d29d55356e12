//! The sixty-pair sexagenary cycle (ganzhi) and xun arithmetic.
//!
//! A stem-branch pair is valid when stem and branch share parity; the
//! sixty valid pairs cycle from 甲子. Each run of ten pairs opened by a
//! 甲 pair is a xun; the six xun are keyed to the six chamber stems
//! 戊己庚辛壬癸, which the chart engine uses to locate its command star.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// A stem-branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

/// All sixty pairs in cycle order (index 0 = 甲子).
pub const SIXTY_CYCLE: [StemBranch; 60] = {
    let mut cycle = [StemBranch {
        stem: HeavenlyStem::Jia,
        branch: EarthlyBranch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        cycle[i] = StemBranch {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    cycle
};

/// Chamber stems of the six xun, in xun order (甲子 xun = 戊 .. 甲寅 xun = 癸).
const XUN_CHAMBER_STEMS: [HeavenlyStem; 6] = [
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl StemBranch {
    /// Build a pair, rejecting parity mismatches (e.g. 甲丑 does not occur).
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<StemBranch> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(StemBranch { stem, branch })
        } else {
            None
        }
    }

    /// Pair at a wrapped cycle offset.
    pub const fn from_cycle_index(index: u8) -> StemBranch {
        SIXTY_CYCLE[(index % 60) as usize]
    }

    /// 0-based position in the sixty cycle (甲子 = 0).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index();
        let b = self.branch.index();
        let mut k = 0;
        while k < 6 {
            let candidate = s as u16 + 10 * k;
            if candidate % 12 == b as u16 {
                return candidate as u8;
            }
            k += 1;
        }
        // Unreachable for parity-valid pairs; 甲子 otherwise.
        0
    }

    /// The 甲 pair opening this pair's xun.
    pub const fn xun_lead(self) -> StemBranch {
        SIXTY_CYCLE[(self.cycle_index() / 10 * 10) as usize]
    }

    /// The chamber stem keyed to this pair's xun (甲子旬 → 戊, 甲戌旬 → 己 …).
    pub const fn xun_lead_stem(self) -> HeavenlyStem {
        XUN_CHAMBER_STEMS[(self.cycle_index() / 10) as usize]
    }

    /// Two-character label, e.g. "甲子".
    pub fn label(self) -> String {
        format!("{}{}", self.stem.character(), self.branch.character())
    }

    /// Parse a two-character label.
    pub fn from_label(label: &str) -> Option<StemBranch> {
        let mut chars = label.chars();
        let stem = HeavenlyStem::from_character(chars.next()?.to_string().as_str())?;
        let branch = EarthlyBranch::from_character(chars.next()?.to_string().as_str())?;
        if chars.next().is_some() {
            return None;
        }
        StemBranch::new(stem, branch)
    }
}

/// Hour pillar from the day stem and the hour branch (five-rats rule):
/// a 甲/己 day opens its 子 hour with 甲子, a 乙/庚 day with 丙子, and so on.
pub const fn hour_pillar(day_stem: HeavenlyStem, hour_branch: EarthlyBranch) -> StemBranch {
    let stem_index = (day_stem.index() % 5) * 2 + hour_branch.index();
    StemBranch {
        stem: HeavenlyStem::from_index(stem_index % 10),
        branch: hour_branch,
    }
}
