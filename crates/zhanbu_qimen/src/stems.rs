//! Earth-plate stem layout (three nobles and six chambers).

use zhanbu_core::HeavenlyStem;
use zhanbu_tables::{Dun, EARTH_PLATE_SEQUENCE, Palace, YANG_LAYOUT_RING, YIN_LAYOUT_RING};

use crate::formation::Formation;
use crate::grid::PalaceGrid;

/// Start palace (where 己 lands) per configuration digit 1-9, yang dun.
const YANG_START: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
    Palace::Kan,
];

/// Start palace per configuration digit 1-9, yin dun.
const YIN_START: [Palace; 9] = [
    Palace::Li,
    Palace::Gen,
    Palace::Dui,
    Palace::Qian,
    Palace::Xun,
    Palace::Zhen,
    Palace::Kun,
    Palace::Kan,
    Palace::Li,
];

/// Lay the nine earth-plate stems for a formation.
///
/// 戊 is fixed at the center and 己 at the formation's start palace; the
/// remaining seven stems of the plate sequence follow the dun's layout
/// ring (yin forward, yang backward).
pub fn distribute_stems(formation: &Formation) -> PalaceGrid<HeavenlyStem> {
    let mut grid = PalaceGrid::from_fn(|_| HeavenlyStem::Wu);

    let digit = formation.number.clamp(1, 9) as usize - 1;
    let (ring, start) = match formation.dun {
        Dun::Yang => (&YANG_LAYOUT_RING, YANG_START[digit]),
        Dun::Yin => (&YIN_LAYOUT_RING, YIN_START[digit]),
    };
    grid.set(start, HeavenlyStem::Ji);

    let Some(start_index) = ring.iter().position(|p| *p == start) else {
        return grid;
    };
    for i in 1..=7 {
        let index = match formation.dun {
            Dun::Yin => (start_index + i) % 8,
            Dun::Yang => (start_index + 8 - i) % 8,
        };
        grid.set(ring[index], EARTH_PLATE_SEQUENCE[i + 1]);
    }
    grid
}

/// Palace holding a stem in the layout, if any (甲 never appears).
pub fn stem_palace(grid: &PalaceGrid<HeavenlyStem>, stem: HeavenlyStem) -> Option<Palace> {
    grid.find(&stem)
}
