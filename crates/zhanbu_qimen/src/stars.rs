//! Nine-star placement on the heaven plate.

use serde::Serialize;
use tracing::warn;

use zhanbu_core::HeavenlyStem;
use zhanbu_tables::{Palace, RING_CLOCKWISE, STAR_CYCLE, Star};

use crate::grid::PalaceGrid;

/// Star placement result: the command palace and star plus the full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarDistribution {
    pub command_palace: Palace,
    pub command_star: Star,
    pub grid: PalaceGrid<Star>,
}

/// Place the nine stars.
///
/// The command palace is wherever the xun chamber stem landed (center if
/// it cannot be found); the command star is that palace's home star. 天禽
/// keeps the center and the other eight stars walk the clockwise ring in
/// cycle order from the command palace. A centered command keeps the home
/// layout.
pub fn distribute_stars(
    stems: &PalaceGrid<HeavenlyStem>,
    xun_lead: HeavenlyStem,
) -> StarDistribution {
    let command_palace = match stems.find(&xun_lead) {
        Some(palace) => palace,
        None => {
            warn!(stem = xun_lead.character(), "xun chamber stem not on the plate, commanding from center");
            Palace::Zhong
        }
    };
    let command_star = Star::for_home_palace(command_palace);

    let mut grid = PalaceGrid::from_fn(Star::for_home_palace);
    if command_palace != Palace::Zhong {
        let cycle_start = STAR_CYCLE.iter().position(|s| *s == command_star);
        let ring_start = RING_CLOCKWISE.iter().position(|p| *p == command_palace);
        if let (Some(cycle_start), Some(ring_start)) = (cycle_start, ring_start) {
            for i in 0..8 {
                grid.set(
                    RING_CLOCKWISE[(ring_start + i) % 8],
                    STAR_CYCLE[(cycle_start + i) % 8],
                );
            }
        }
    }

    StarDistribution {
        command_palace,
        command_star,
        grid,
    }
}
