//! Qimen Dunjia nine-palace chart engine.
//!
//! Given a civil instant, a pillar-basis method and a purpose tag, the
//! engine resolves the governing formation, lays the earth-plate stems,
//! rotates the nine stars, eight gates and eight deities around the
//! palace ring, marks the void branches, grades every palace and produces
//! an overall reading. Every step is a pure function of its inputs and
//! the static tables; [`compute_chart`] is the single entry point and
//! always returns either a complete chart or an explicit error value.

pub mod analysis;
pub mod chart;
pub mod deities;
pub mod error;
pub mod formation;
pub mod gates;
pub mod grid;
pub mod method;
pub mod precision;
pub mod stars;
pub mod stems;
pub mod void;

pub use analysis::{FortuneGrade, OverallAnalysis, PalaceAnalysis, analyze_overall, analyze_palace};
pub use chart::{ChartBasis, ChartRequest, QimenChart, compute_chart};
pub use deities::distribute_deities;
pub use error::ChartError;
pub use formation::{Formation, Origin, resolve_formation};
pub use gates::{GateDistribution, distribute_gates};
pub use grid::PalaceGrid;
pub use method::{PillarMethod, PrecisionMode, Purpose};
pub use precision::{SubHourSegment, sub_hour_segment};
pub use stars::{StarDistribution, distribute_stars};
pub use stems::{distribute_stems, stem_palace};
pub use void::{void_branches, void_palaces};
