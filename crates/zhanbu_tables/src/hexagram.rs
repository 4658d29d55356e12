//! The sixty-four hexagram name table, keyed by (upper, lower) trigram.

use serde::Serialize;

use crate::trigram::Trigram;

/// King Wen number and name of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexagramName {
    pub number: u8,
    pub name: &'static str,
}

const fn hx(number: u8, name: &'static str) -> HexagramName {
    HexagramName { number, name }
}

/// `HEXAGRAM_TABLE[upper - 1][lower - 1]`, trigrams in primal numbering.
static HEXAGRAM_TABLE: [[HexagramName; 8]; 8] = [
    [
        hx(1, "乾為天"),
        hx(10, "天澤履"),
        hx(13, "天火同人"),
        hx(25, "天雷无妄"),
        hx(44, "天風姤"),
        hx(6, "天水訟"),
        hx(33, "天山遯"),
        hx(12, "天地否"),
    ],
    [
        hx(43, "澤天夬"),
        hx(58, "兌為澤"),
        hx(49, "澤火革"),
        hx(17, "澤雷隨"),
        hx(28, "澤風大過"),
        hx(47, "澤水困"),
        hx(31, "澤山咸"),
        hx(45, "澤地萃"),
    ],
    [
        hx(14, "火天大有"),
        hx(38, "火澤睽"),
        hx(30, "離為火"),
        hx(21, "火雷噬嗑"),
        hx(50, "火風鼎"),
        hx(64, "火水未濟"),
        hx(56, "火山旅"),
        hx(35, "火地晉"),
    ],
    [
        hx(34, "雷天大壯"),
        hx(54, "雷澤歸妹"),
        hx(55, "雷火豐"),
        hx(51, "震為雷"),
        hx(32, "雷風恆"),
        hx(40, "雷水解"),
        hx(62, "雷山小過"),
        hx(16, "雷地豫"),
    ],
    [
        hx(9, "風天小畜"),
        hx(61, "風澤中孚"),
        hx(37, "風火家人"),
        hx(42, "風雷益"),
        hx(57, "巽為風"),
        hx(59, "風水渙"),
        hx(53, "風山漸"),
        hx(20, "風地觀"),
    ],
    [
        hx(5, "水天需"),
        hx(60, "水澤節"),
        hx(63, "水火既濟"),
        hx(3, "水雷屯"),
        hx(48, "水風井"),
        hx(29, "坎為水"),
        hx(39, "水山蹇"),
        hx(8, "水地比"),
    ],
    [
        hx(26, "山天大畜"),
        hx(41, "山澤損"),
        hx(22, "山火賁"),
        hx(27, "山雷頤"),
        hx(18, "山風蠱"),
        hx(4, "山水蒙"),
        hx(52, "艮為山"),
        hx(23, "山地剝"),
    ],
    [
        hx(11, "地天泰"),
        hx(19, "地澤臨"),
        hx(36, "地火明夷"),
        hx(24, "地雷復"),
        hx(46, "地風升"),
        hx(7, "地水師"),
        hx(15, "地山謙"),
        hx(2, "坤為地"),
    ],
];

/// Name entry for an (upper, lower) trigram pair.
pub fn hexagram_name(upper: Trigram, lower: Trigram) -> &'static HexagramName {
    &HEXAGRAM_TABLE[(upper.number() - 1) as usize][(lower.number() - 1) as usize]
}
