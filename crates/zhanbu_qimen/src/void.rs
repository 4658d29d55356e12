//! Void (kongwang) branches and palaces.

use zhanbu_core::{EarthlyBranch, StemBranch};
use zhanbu_tables::Palace;

/// The two void branches of a pair's xun: the two branches its ten-pair
/// block leaves unpaired (xun lead branch + 10 and + 11, wrapped).
pub fn void_branches(pair: StemBranch) -> [EarthlyBranch; 2] {
    let lead = pair.xun_lead().branch.index();
    [
        EarthlyBranch::from_index(lead + 10),
        EarthlyBranch::from_index(lead + 11),
    ]
}

/// Palaces marked void for the two void branches.
pub fn void_palaces(branches: [EarthlyBranch; 2]) -> [Palace; 2] {
    [
        Palace::for_branch(branches[0]),
        Palace::for_branch(branches[1]),
    ]
}
