//! Eight-gate placement on the person plate.

use serde::Serialize;
use tracing::warn;

use zhanbu_core::HeavenlyStem;
use zhanbu_tables::{GATE_CYCLE, Gate, Palace, RING_CLOCKWISE, host_stem};

use crate::grid::PalaceGrid;

/// Gate placement result: the duty palace and gate plus the full grid
/// (the center never holds a gate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateDistribution {
    pub duty_palace: Option<Palace>,
    pub duty_gate: Option<Gate>,
    pub grid: PalaceGrid<Option<Gate>>,
}

/// Place the eight gates.
///
/// The duty palace is wherever the basis stem landed; a stem absent from
/// the plate (甲) resolves through its host stem instead. The duty gate
/// is the duty palace's base gate, and the cycle walks the clockwise ring
/// from there. A centered or unresolved duty palace keeps the base
/// layout with no duty gate.
pub fn distribute_gates(
    basis_stem: HeavenlyStem,
    stems: &PalaceGrid<HeavenlyStem>,
) -> GateDistribution {
    let duty_palace = stems
        .find(&basis_stem)
        .or_else(|| stems.find(&host_stem(basis_stem)));

    let base_layout = || PalaceGrid::from_fn(Gate::for_base_palace);

    let Some(duty_palace_found) = duty_palace else {
        warn!(
            stem = basis_stem.character(),
            "basis stem unresolved, keeping base gate layout"
        );
        return GateDistribution {
            duty_palace: None,
            duty_gate: None,
            grid: base_layout(),
        };
    };

    let duty_gate = Gate::for_base_palace(duty_palace_found);
    let mut grid = base_layout();
    if let Some(duty_gate) = duty_gate {
        let ring_start = RING_CLOCKWISE.iter().position(|p| *p == duty_palace_found);
        let cycle_start = GATE_CYCLE.iter().position(|g| *g == duty_gate);
        if let (Some(ring_start), Some(cycle_start)) = (ring_start, cycle_start) {
            for i in 0..8 {
                grid.set(
                    RING_CLOCKWISE[(ring_start + i) % 8],
                    Some(GATE_CYCLE[(cycle_start + i) % 8]),
                );
            }
        }
    }

    GateDistribution {
        duty_palace: Some(duty_palace_found),
        duty_gate,
        grid,
    }
}
