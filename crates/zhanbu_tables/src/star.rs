//! The nine stars (jiuxing) of the heaven plate.

use serde::{Deserialize, Serialize};

use zhanbu_core::{FiveElement, Locale};

use crate::palace::Palace;

/// The nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    TianPeng,
    TianRui,
    TianChong,
    TianFu,
    TianQin,
    TianXin,
    TianZhu,
    TianRen,
    TianYing,
}

/// Rotation order of the eight moving stars (天禽 stays at the center).
pub const STAR_CYCLE: [Star; 8] = [
    Star::TianPeng,
    Star::TianRen,
    Star::TianChong,
    Star::TianFu,
    Star::TianYing,
    Star::TianRui,
    Star::TianZhu,
    Star::TianXin,
];

impl Star {
    /// Display name of the star.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::TianPeng, _) => "天蓬",
            (Self::TianRui, _) => "天芮",
            (Self::TianChong, Locale::ZhHant) => "天沖",
            (Self::TianChong, Locale::ZhHans) => "天冲",
            (Self::TianFu, Locale::ZhHant) => "天輔",
            (Self::TianFu, Locale::ZhHans) => "天辅",
            (Self::TianQin, _) => "天禽",
            (Self::TianXin, _) => "天心",
            (Self::TianZhu, _) => "天柱",
            (Self::TianRen, _) => "天任",
            (Self::TianYing, _) => "天英",
        }
    }

    /// Classical alias of the star, by home-palace correspondence.
    pub const fn alias(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::TianPeng, Locale::ZhHant) => "貪狼",
            (Self::TianPeng, Locale::ZhHans) => "贪狼",
            (Self::TianRui, Locale::ZhHant) => "巨門",
            (Self::TianRui, Locale::ZhHans) => "巨门",
            (Self::TianChong, Locale::ZhHant) => "祿存",
            (Self::TianChong, Locale::ZhHans) => "禄存",
            (Self::TianFu, _) => "文曲",
            (Self::TianQin, Locale::ZhHant) => "廉貞",
            (Self::TianQin, Locale::ZhHans) => "廉贞",
            (Self::TianXin, _) => "武曲",
            (Self::TianZhu, Locale::ZhHant) => "破軍",
            (Self::TianZhu, Locale::ZhHans) => "破军",
            (Self::TianRen, Locale::ZhHant) => "左輔",
            (Self::TianRen, Locale::ZhHans) => "左辅",
            (Self::TianYing, _) => "右弼",
        }
    }

    /// Element of the star.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::TianPeng => FiveElement::Water,
            Self::TianRui | Self::TianQin | Self::TianRen => FiveElement::Earth,
            Self::TianChong | Self::TianFu => FiveElement::Wood,
            Self::TianXin | Self::TianZhu => FiveElement::Metal,
            Self::TianYing => FiveElement::Fire,
        }
    }

    /// Feature text used in palace explanations.
    pub const fn feature(self) -> &'static str {
        match self {
            Self::TianPeng => "主智慧、口才、機變",
            Self::TianRui => "主穩重、忠厚、堅韌",
            Self::TianChong => "主衝擊、變化、快速",
            Self::TianFu => "主扶助、支持、輔佐",
            Self::TianQin => "為中宮之神，主樞紐、核心",
            Self::TianXin => "主決斷、判斷、果決",
            Self::TianZhu => "主堅固、支撐、頂天立地",
            Self::TianRen => "主責任、重擔、實際",
            Self::TianYing => "主文采、明亮、智慧",
        }
    }

    /// Home palace of the star (1蓬 2芮 3沖 4輔 5禽 6心 7柱 8任 9英).
    pub const fn home_palace(self) -> Palace {
        match self {
            Self::TianPeng => Palace::Kan,
            Self::TianRui => Palace::Kun,
            Self::TianChong => Palace::Zhen,
            Self::TianFu => Palace::Xun,
            Self::TianQin => Palace::Zhong,
            Self::TianXin => Palace::Qian,
            Self::TianZhu => Palace::Dui,
            Self::TianRen => Palace::Gen,
            Self::TianYing => Palace::Li,
        }
    }

    /// Star whose home is the given palace.
    pub const fn for_home_palace(palace: Palace) -> Star {
        match palace {
            Palace::Kan => Self::TianPeng,
            Palace::Kun => Self::TianRui,
            Palace::Zhen => Self::TianChong,
            Palace::Xun => Self::TianFu,
            Palace::Zhong => Self::TianQin,
            Palace::Qian => Self::TianXin,
            Palace::Dui => Self::TianZhu,
            Palace::Gen => Self::TianRen,
            Palace::Li => Self::TianYing,
        }
    }
}
