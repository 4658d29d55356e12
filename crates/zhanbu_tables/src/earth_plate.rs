//! Earth-plate stem sequence and the stem-hosting map.

use zhanbu_core::HeavenlyStem;

/// The nine stems of the earth plate in layout order: the three nobles
/// and six chambers 戊己庚辛壬癸丁丙乙. 甲 is always concealed.
pub const EARTH_PLATE_SEQUENCE: [HeavenlyStem; 9] = [
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
    HeavenlyStem::Ding,
    HeavenlyStem::Bing,
    HeavenlyStem::Yi,
];

/// Host stem for a stem that is absent from the earth plate
/// (甲己 lodge with 戊, 乙庚 with 己, 丙辛 with 庚, 丁壬 with 辛, 戊癸 with 壬).
pub const fn host_stem(stem: HeavenlyStem) -> HeavenlyStem {
    match stem {
        HeavenlyStem::Jia | HeavenlyStem::Ji => HeavenlyStem::Wu,
        HeavenlyStem::Yi | HeavenlyStem::Geng => HeavenlyStem::Ji,
        HeavenlyStem::Bing | HeavenlyStem::Xin => HeavenlyStem::Geng,
        HeavenlyStem::Ding | HeavenlyStem::Ren => HeavenlyStem::Xin,
        HeavenlyStem::Wu | HeavenlyStem::Gui => HeavenlyStem::Ren,
    }
}
