//! The eight deities (bashen) of the spirit plate.

use serde::{Deserialize, Serialize};

use zhanbu_core::Locale;

use crate::Auspice;

/// The eight deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deity {
    ZhiFu,
    TengShe,
    TaiYin,
    LiuHe,
    BaiHu,
    XuanWu,
    JiuDi,
    JiuTian,
}

/// Placement order of the deities, anchored at the command palace
/// (值符 first; this sequence is never rotated, only anchored).
pub const DEITY_CYCLE: [Deity; 8] = [
    Deity::ZhiFu,
    Deity::TengShe,
    Deity::TaiYin,
    Deity::LiuHe,
    Deity::BaiHu,
    Deity::XuanWu,
    Deity::JiuDi,
    Deity::JiuTian,
];

impl Deity {
    /// Display name of the deity.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::ZhiFu, _) => "值符",
            (Self::TengShe, Locale::ZhHant) => "騰蛇",
            (Self::TengShe, Locale::ZhHans) => "腾蛇",
            (Self::TaiYin, Locale::ZhHant) => "太陰",
            (Self::TaiYin, Locale::ZhHans) => "太阴",
            (Self::LiuHe, _) => "六合",
            (Self::BaiHu, _) => "白虎",
            (Self::XuanWu, _) => "玄武",
            (Self::JiuDi, _) => "九地",
            (Self::JiuTian, _) => "九天",
        }
    }

    /// Auspice classification.
    pub const fn auspice(self) -> Auspice {
        match self {
            Self::ZhiFu | Self::TaiYin | Self::LiuHe | Self::JiuDi | Self::JiuTian => {
                Auspice::Auspicious
            }
            Self::TengShe | Self::BaiHu | Self::XuanWu => Auspice::Inauspicious,
        }
    }

    /// Feature text used in palace explanations.
    pub const fn feature(self) -> &'static str {
        match self {
            Self::ZhiFu => "為貴神，主吉慶、貴人、福星。",
            Self::TengShe => "為兇神，主口舌是非、波動起伏。",
            Self::TaiYin => "為吉神，主柔和、隱藏、內斂。",
            Self::LiuHe => "為吉神，主和諧、團結、合作。",
            Self::BaiHu => "為兇神，主兇猛、傷害、災禍。",
            Self::XuanWu => "為兇神，主隱秘、盜竊、欺詐。",
            Self::JiuDi => "為吉神，主地利、豐收、穩固。",
            Self::JiuTian => "為吉神，主高升、貴人、成功。",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_opens_with_zhifu() {
        assert_eq!(DEITY_CYCLE[0], Deity::ZhiFu);
        assert_eq!(DEITY_CYCLE.len(), 8);
    }

    #[test]
    fn five_auspicious_three_inauspicious() {
        let auspicious = DEITY_CYCLE
            .iter()
            .filter(|d| d.auspice() == Auspice::Auspicious)
            .count();
        assert_eq!(auspicious, 5);
    }

    #[test]
    fn simplified_names() {
        assert_eq!(Deity::TengShe.name(Locale::ZhHans), "腾蛇");
        assert_eq!(Deity::TaiYin.name(Locale::ZhHans), "太阴");
        assert_eq!(Deity::LiuHe.name(Locale::ZhHans), "六合");
    }
}
