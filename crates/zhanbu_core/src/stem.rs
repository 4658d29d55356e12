//! The ten heavenly stems (tiangan).

use serde::{Deserialize, Serialize};

use crate::Polarity;
use crate::element::FiveElement;

/// The ten heavenly stems in cycle order (甲 first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Character form. Identical in traditional and simplified script.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based cycle index (甲 = 0 .. 癸 = 9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem (甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal,
    /// 壬癸 water).
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    /// Odd-positioned stems are yang, even-positioned yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Stem at a wrapped cycle offset.
    pub const fn from_index(index: u8) -> HeavenlyStem {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Look a stem up by its character.
    pub fn from_character(ch: &str) -> Option<HeavenlyStem> {
        ALL_STEMS.into_iter().find(|s| s.character() == ch)
    }
}
