//! Request vocabulary: pillar basis, purpose and time precision.

use serde::{Deserialize, Serialize};

use zhanbu_almanac::FourPillars;
use zhanbu_core::StemBranch;
use zhanbu_tables::Palace;

/// Which pillar the chart is cast from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarMethod {
    #[default]
    Hour,
    Day,
    Month,
    Year,
}

impl PillarMethod {
    /// Traditional label (時家 / 日家 / 月家 / 年家).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "時家",
            Self::Day => "日家",
            Self::Month => "月家",
            Self::Year => "年家",
        }
    }

    /// The basis pillar this method reads from the four pillars.
    pub const fn basis_pillar(self, pillars: &FourPillars) -> StemBranch {
        match self {
            Self::Hour => pillars.hour,
            Self::Day => pillars.day,
            Self::Month => pillars.month,
            Self::Year => pillars.year,
        }
    }
}

/// What the chart is being cast for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    Career,
    Wealth,
    Marriage,
    Health,
    Study,
    #[default]
    General,
}

impl Purpose {
    /// Traditional label (事業 / 財運 / 婚姻 / 健康 / 學業 / 綜合).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Career => "事業",
            Self::Wealth => "財運",
            Self::Marriage => "婚姻",
            Self::Health => "健康",
            Self::Study => "學業",
            Self::General => "綜合",
        }
    }

    /// Palaces granted a +1 bonus when scoring the most favorable palace.
    pub const fn favored_palaces(self) -> &'static [Palace] {
        match self {
            Self::Career => &[Palace::Kan, Palace::Qian, Palace::Li],
            Self::Wealth => &[Palace::Kan, Palace::Dui, Palace::Qian],
            Self::Marriage => &[Palace::Kun, Palace::Dui, Palace::Li],
            Self::Health => &[Palace::Zhen, Palace::Li, Palace::Xun],
            Self::Study => &[Palace::Xun, Palace::Li, Palace::Zhen],
            Self::General => &[],
        }
    }

    /// Purpose-specific closing advice sentence.
    pub const fn advice(self) -> Option<&'static str> {
        match self {
            Self::Career => {
                Some("事業方面，註重穩紮穩打，積累經驗和人脈，時機成熟再大展拳腳。")
            }
            Self::Wealth => {
                Some("財運方面，建議穩健理財，避免投機，重視積累和長期規劃。")
            }
            Self::Marriage => Some("婚姻方面，註重溝通和理解，創造和諧的家庭氛圍。"),
            Self::Health => Some("健康方面，註意作息規律，適當運動，保持心情愉快。"),
            Self::Study => {
                Some("學業方面，製定合理計劃，堅持不懈，善於利用資源和請教他人。")
            }
            Self::General => None,
        }
    }
}

/// Time precision of the hour-basis computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecisionMode {
    #[default]
    Traditional,
    Advanced,
}
