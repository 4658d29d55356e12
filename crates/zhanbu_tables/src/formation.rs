//! Solar-term formation table.
//!
//! Each solar term carries its canonical dun polarity and a triple of
//! configuration digits indexed by origin (upper, middle, lower). The
//! chart engine derives the working polarity from the instant itself and
//! reads only the digit triple here; the canonical column stays for
//! consistency checks.

use serde::{Deserialize, Serialize};

use zhanbu_core::SolarTerm;

/// Yang or yin formation (dun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dun {
    Yang,
    Yin,
}

impl Dun {
    /// Display label (陽遁 / 陰遁).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yang => "陽遁",
            Self::Yin => "陰遁",
        }
    }

    /// Code used in format strings ("yang" / "yin").
    pub const fn code(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }
}

/// One row of the formation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationRow {
    pub term: SolarTerm,
    pub dun: Dun,
    /// Configuration digits for the upper, middle and lower origins.
    pub digits: [u8; 3],
}

const fn row(term: SolarTerm, dun: Dun, digits: [u8; 3]) -> FormationRow {
    FormationRow { term, dun, digits }
}

/// The 24 formation rows.
pub static FORMATION_TABLE: [FormationRow; 24] = [
    row(SolarTerm::DongZhi, Dun::Yang, [1, 7, 4]),
    row(SolarTerm::JingZhe, Dun::Yang, [1, 7, 4]),
    row(SolarTerm::XiaoHan, Dun::Yang, [2, 8, 5]),
    row(SolarTerm::DaHan, Dun::Yang, [3, 9, 6]),
    row(SolarTerm::ChunFen, Dun::Yang, [3, 9, 6]),
    row(SolarTerm::YuShui, Dun::Yang, [9, 6, 3]),
    row(SolarTerm::QingMing, Dun::Yang, [4, 1, 7]),
    row(SolarTerm::LiXia, Dun::Yang, [4, 1, 7]),
    row(SolarTerm::LiChun, Dun::Yang, [8, 5, 2]),
    row(SolarTerm::GuYu, Dun::Yang, [5, 2, 8]),
    row(SolarTerm::XiaoMan, Dun::Yang, [5, 2, 8]),
    row(SolarTerm::MangZhong, Dun::Yang, [6, 3, 9]),
    row(SolarTerm::XiaZhi, Dun::Yin, [9, 3, 6]),
    row(SolarTerm::BaiLu, Dun::Yin, [9, 3, 6]),
    row(SolarTerm::XiaoShu, Dun::Yin, [8, 2, 5]),
    row(SolarTerm::DaShu, Dun::Yin, [7, 1, 4]),
    row(SolarTerm::QiuFen, Dun::Yin, [7, 1, 4]),
    row(SolarTerm::LiQiu, Dun::Yin, [2, 5, 8]),
    row(SolarTerm::HanLu, Dun::Yin, [6, 9, 3]),
    row(SolarTerm::LiDong, Dun::Yin, [6, 9, 3]),
    row(SolarTerm::ChuShu, Dun::Yin, [1, 4, 7]),
    row(SolarTerm::ShuangJiang, Dun::Yin, [5, 8, 2]),
    row(SolarTerm::XiaoXue, Dun::Yin, [5, 8, 2]),
    row(SolarTerm::DaXue, Dun::Yin, [4, 7, 1]),
];

/// The formation row for a term.
pub fn formation_row(term: SolarTerm) -> &'static FormationRow {
    // Every term has exactly one row; fall back to the opening row in the
    // (unreachable) absence of a match.
    FORMATION_TABLE
        .iter()
        .find(|r| r.term == term)
        .unwrap_or(&FORMATION_TABLE[0])
}
