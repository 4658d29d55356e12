//! The nine palaces of the chart grid.
//!
//! Palaces are numbered 1-9 with palace 5 at the center of the 3x3 grid.
//! The eight outer palaces form a ring; [`RING_CLOCKWISE`] is the single
//! traversal order shared by the star, gate and deity distributors, and
//! the two layout rings drive the earth-plate stem placement.

use serde::{Deserialize, Serialize};

use zhanbu_core::{EarthlyBranch, FiveElement, Locale, Polarity};

/// The nine palaces, named for their trigrams (中 for the center).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Zhong,
    Qian,
    Dui,
    Gen,
    Li,
}

/// All nine palaces in number order (index 0 = palace 1).
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Zhong,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// Clockwise ring traversal of the eight outer palaces (1,8,3,4,9,2,7,6),
/// used by the star, gate and deity rotations.
pub const RING_CLOCKWISE: [Palace; 8] = [
    Palace::Kan,
    Palace::Gen,
    Palace::Zhen,
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Dui,
    Palace::Qian,
];

/// Yang-formation stem layout ring (1,2,3,4,6,7,8,9), walked backward.
pub const YANG_LAYOUT_RING: [Palace; 8] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// Yin-formation stem layout ring (9,8,7,6,4,3,2,1), walked forward.
pub const YIN_LAYOUT_RING: [Palace; 8] = [
    Palace::Li,
    Palace::Gen,
    Palace::Dui,
    Palace::Qian,
    Palace::Xun,
    Palace::Zhen,
    Palace::Kun,
    Palace::Kan,
];

impl Palace {
    /// Palace number 1-9.
    pub const fn number(self) -> u8 {
        match self {
            Self::Kan => 1,
            Self::Kun => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Zhong => 5,
            Self::Qian => 6,
            Self::Dui => 7,
            Self::Gen => 8,
            Self::Li => 9,
        }
    }

    /// Palace for a number 1-9.
    pub const fn from_number(number: u8) -> Option<Palace> {
        if number >= 1 && number <= 9 {
            Some(ALL_PALACES[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Display name of the palace.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Kan, _) => "坎",
            (Self::Kun, _) => "坤",
            (Self::Zhen, _) => "震",
            (Self::Xun, _) => "巽",
            (Self::Zhong, _) => "中",
            (Self::Qian, _) => "乾",
            (Self::Dui, Locale::ZhHant) => "兌",
            (Self::Dui, Locale::ZhHans) => "兑",
            (Self::Gen, _) => "艮",
            (Self::Li, Locale::ZhHant) => "離",
            (Self::Li, Locale::ZhHans) => "离",
        }
    }

    /// Compass direction of the palace.
    pub const fn direction(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Kan, _) => "北",
            (Self::Kun, _) => "西南",
            (Self::Zhen, Locale::ZhHant) => "東",
            (Self::Zhen, Locale::ZhHans) => "东",
            (Self::Xun, Locale::ZhHant) => "東南",
            (Self::Xun, Locale::ZhHans) => "东南",
            (Self::Zhong, _) => "中央",
            (Self::Qian, _) => "西北",
            (Self::Dui, _) => "西",
            (Self::Gen, Locale::ZhHant) => "東北",
            (Self::Gen, Locale::ZhHans) => "东北",
            (Self::Li, _) => "南",
        }
    }

    /// Fixed element of the palace.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Kan => FiveElement::Water,
            Self::Kun | Self::Zhong | Self::Gen => FiveElement::Earth,
            Self::Zhen | Self::Xun => FiveElement::Wood,
            Self::Qian | Self::Dui => FiveElement::Metal,
            Self::Li => FiveElement::Fire,
        }
    }

    /// Yin/yang polarity; only the center carries both.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Kan | Self::Kun | Self::Dui => Polarity::Yin,
            Self::Zhong => Polarity::Balanced,
            _ => Polarity::Yang,
        }
    }

    /// Fixed palace-meaning sentence used by the analysis explanations.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Kan => "坎宮主水，與事業、財運、流動資金有關。",
            Self::Kun => "坤宮主土，與婚姻、母親、女性長輩有關。",
            Self::Zhen => "震宮主木，與創業、開始、長子有關。",
            Self::Xun => "巽宮主木，與女性、柔和、文書有關。",
            Self::Zhong => "中宮為核心，統領八方，與自身狀態有關。",
            Self::Qian => "乾宮主金，與父親、權威、領導有關。",
            Self::Dui => "兌宮主金，與口舌、溝通、少女有關。",
            Self::Gen => "艮宮主土，與停止、障礙、少男有關。",
            Self::Li => "離宮主火，與名聲、眼睛、光明有關。",
        }
    }

    /// Palace a branch maps to for void marking.
    pub const fn for_branch(branch: EarthlyBranch) -> Palace {
        match branch {
            EarthlyBranch::Zi | EarthlyBranch::Shen => Palace::Kan,
            EarthlyBranch::Chou | EarthlyBranch::You => Palace::Gen,
            EarthlyBranch::Yin | EarthlyBranch::Xu => Palace::Zhen,
            EarthlyBranch::Mao | EarthlyBranch::Hai => Palace::Xun,
            EarthlyBranch::Chen => Palace::Li,
            EarthlyBranch::Si => Palace::Kun,
            EarthlyBranch::Wu => Palace::Dui,
            EarthlyBranch::Wei => Palace::Qian,
        }
    }
}
