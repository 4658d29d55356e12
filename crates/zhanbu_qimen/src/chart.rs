//! Chart request, result object and the computation entry point.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use zhanbu_almanac::{AlmanacSource, FourPillars, LunarDate};
use zhanbu_core::{EarthlyBranch, HeavenlyStem, Locale};
use zhanbu_tables::{Deity, Gate, Palace, Star};

use crate::analysis::{OverallAnalysis, PalaceAnalysis, analyze_overall, analyze_palace};
use crate::deities::distribute_deities;
use crate::error::ChartError;
use crate::formation::{Formation, resolve_formation};
use crate::gates::distribute_gates;
use crate::grid::PalaceGrid;
use crate::method::{PillarMethod, PrecisionMode, Purpose};
use crate::precision::{SubHourSegment, sub_hour_segment};
use crate::stars::distribute_stars;
use crate::stems::distribute_stems;
use crate::void::{void_branches, void_palaces};

/// A chart computation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub instant: NaiveDateTime,
    pub method: PillarMethod,
    pub purpose: Purpose,
    pub location: String,
    pub precision: PrecisionMode,
    pub locale: Locale,
}

impl ChartRequest {
    /// Request with the default method, purpose, precision and locale.
    pub fn new(instant: NaiveDateTime) -> ChartRequest {
        ChartRequest {
            instant,
            method: PillarMethod::default(),
            purpose: Purpose::default(),
            location: String::new(),
            precision: PrecisionMode::default(),
            locale: Locale::default(),
        }
    }
}

/// Basis facts echoed into the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBasis {
    pub instant: NaiveDateTime,
    pub lunar: LunarDate,
    pub lunar_label: String,
    pub method: PillarMethod,
    pub purpose: Purpose,
    pub location: String,
    pub precision: PrecisionMode,
}

/// A fully populated nine-palace chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QimenChart {
    pub basis: ChartBasis,
    pub pillars: FourPillars,
    pub formation: Formation,
    pub formation_label: String,
    pub xun_lead: HeavenlyStem,
    pub basis_stem: HeavenlyStem,
    pub stems: PalaceGrid<HeavenlyStem>,
    pub stars: PalaceGrid<Star>,
    pub command_palace: Palace,
    pub command_star: Star,
    pub gates: PalaceGrid<Option<Gate>>,
    pub duty_palace: Option<Palace>,
    pub duty_gate: Option<Gate>,
    pub deities: PalaceGrid<Option<Deity>>,
    pub void_branches: [EarthlyBranch; 2],
    pub void_palaces: [Palace; 2],
    pub palaces: PalaceGrid<PalaceAnalysis>,
    pub overall: OverallAnalysis,
    pub sub_hour: Option<SubHourSegment>,
}

/// Compute a chart.
///
/// The only failure source is the almanac; every later step is total.
/// Callers therefore always receive a complete, internally consistent
/// chart or an explicit [`ChartError`] echoing the request basis.
pub fn compute_chart(
    source: &impl AlmanacSource,
    request: &ChartRequest,
) -> Result<QimenChart, ChartError> {
    let record = source
        .resolve(request.instant)
        .map_err(|e| ChartError::from_almanac(request, e))?;

    let formation = resolve_formation(request.instant, request.method, &record);
    let basis_pair = request.method.basis_pillar(&record.pillars);
    let xun_lead = basis_pair.xun_lead_stem();
    let basis_stem = basis_pair.stem;

    let stems = distribute_stems(&formation);
    let stars = distribute_stars(&stems, xun_lead);
    let gates = distribute_gates(basis_stem, &stems);
    let deities = distribute_deities(stars.command_palace);
    let voids = void_branches(basis_pair);

    let palaces = PalaceGrid::from_fn(|palace| {
        analyze_palace(
            palace,
            *stars.grid.get(palace),
            *gates.grid.get(palace),
            *deities.get(palace),
            request.locale,
        )
    });
    let overall = analyze_overall(
        &palaces,
        stars.command_palace,
        gates.duty_palace,
        request.purpose,
        request.locale,
    );

    let sub_hour = (request.method == PillarMethod::Hour
        && request.precision == PrecisionMode::Advanced)
        .then(|| sub_hour_segment(request.instant));

    Ok(QimenChart {
        basis: ChartBasis {
            instant: request.instant,
            lunar: record.lunar,
            lunar_label: record.lunar.label(),
            method: request.method,
            purpose: request.purpose,
            location: request.location.clone(),
            precision: request.precision,
        },
        pillars: record.pillars,
        formation_label: formation.label(),
        formation,
        xun_lead,
        basis_stem,
        stems,
        stars: stars.grid,
        command_palace: stars.command_palace,
        command_star: stars.command_star,
        gates: gates.grid,
        duty_palace: gates.duty_palace,
        duty_gate: gates.duty_gate,
        deities,
        void_branches: voids,
        void_palaces: void_palaces(voids),
        palaces,
        overall,
        sub_hour,
    })
}
