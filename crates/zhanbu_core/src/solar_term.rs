//! The twenty-four solar terms (jieqi) of the solar year.

use serde::{Deserialize, Serialize};

/// The solar terms in annual order, starting from start of spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All twenty-four terms in annual order (index 0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

impl SolarTerm {
    /// Traditional name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "驚蟄",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小滿",
            Self::MangZhong => "芒種",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "處暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
        }
    }

    /// 0-based index in annual order (立春 = 0 .. 大寒 = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look a term up by its traditional name.
    pub fn from_name(name: &str) -> Option<SolarTerm> {
        ALL_SOLAR_TERMS.into_iter().find(|t| t.name() == name)
    }
}
