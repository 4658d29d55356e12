//! Eight-deity placement on the spirit plate.

use zhanbu_tables::{DEITY_CYCLE, Deity, Palace, RING_CLOCKWISE};

use crate::grid::PalaceGrid;

/// Place the eight deities.
///
/// 值符 sits on the command palace and the rest of the deity sequence
/// follows the clockwise ring; the sequence itself is never rotated. A
/// centered command palace lays the sequence from the ring start, and the
/// center never holds a deity.
pub fn distribute_deities(command_palace: Palace) -> PalaceGrid<Option<Deity>> {
    let mut grid = PalaceGrid::from_fn(|_| None);

    let ring_start = if command_palace == Palace::Zhong {
        0
    } else {
        RING_CLOCKWISE
            .iter()
            .position(|p| *p == command_palace)
            .unwrap_or(0)
    };
    for (i, deity) in DEITY_CYCLE.iter().enumerate() {
        grid.set(RING_CLOCKWISE[(ring_start + i) % 8], Some(*deity));
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zhifu_sits_on_command_palace() {
        let grid = distribute_deities(Palace::Gen);
        assert_eq!(*grid.get(Palace::Gen), Some(Deity::ZhiFu));
        assert_eq!(*grid.get(Palace::Zhong), None);
        // 騰蛇 follows on the next ring palace (8 → 3).
        assert_eq!(*grid.get(Palace::Zhen), Some(Deity::TengShe));
    }

    #[test]
    fn centered_command_lays_from_ring_start() {
        let grid = distribute_deities(Palace::Zhong);
        assert_eq!(*grid.get(Palace::Kan), Some(Deity::ZhiFu));
        assert_eq!(*grid.get(Palace::Gen), Some(Deity::TengShe));
        assert_eq!(*grid.get(Palace::Qian), Some(Deity::JiuTian));
        assert_eq!(*grid.get(Palace::Zhong), None);
    }

    #[test]
    fn all_eight_deities_present_once() {
        for command in RING_CLOCKWISE {
            let grid = distribute_deities(command);
            let seen: Vec<Deity> = grid.iter().filter_map(|(_, d)| *d).collect();
            assert_eq!(seen.len(), 8);
            for deity in DEITY_CYCLE {
                assert_eq!(
                    seen.iter().filter(|d| **d == deity).count(),
                    1,
                    "deity repeats for command {command:?}"
                );
            }
        }
    }

    #[test]
    fn sequence_is_anchored_not_rotated() {
        // Whatever the command palace, walking the ring from it always
        // reads the deity cycle in order.
        for command in RING_CLOCKWISE {
            let grid = distribute_deities(command);
            let start = RING_CLOCKWISE.iter().position(|p| *p == command).unwrap();
            for (i, deity) in DEITY_CYCLE.iter().enumerate() {
                assert_eq!(*grid.get(RING_CLOCKWISE[(start + i) % 8]), Some(*deity));
            }
        }
    }
}
