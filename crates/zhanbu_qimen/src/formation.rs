//! Configuration (jushu) resolution: which formation governs the chart.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use zhanbu_almanac::AlmanacRecord;
use zhanbu_core::{EarthlyBranch, SolarTerm};
use zhanbu_tables::{Dun, formation_row};

use crate::method::PillarMethod;

/// Origin (yuan) selected by the basis branch's quartet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Upper,
    Middle,
    Lower,
}

impl Origin {
    /// Index into a formation row's digit triple.
    pub const fn index(self) -> usize {
        match self {
            Self::Upper => 0,
            Self::Middle => 1,
            Self::Lower => 2,
        }
    }

    /// Traditional label (上元 / 中元 / 下元).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upper => "上元",
            Self::Middle => "中元",
            Self::Lower => "下元",
        }
    }

    /// Origin for a basis branch: 子午卯酉 upper, 寅申巳亥 middle,
    /// 辰戌丑未 lower.
    pub const fn for_branch(branch: EarthlyBranch) -> Origin {
        match branch {
            EarthlyBranch::Zi | EarthlyBranch::Wu | EarthlyBranch::Mao | EarthlyBranch::You => {
                Origin::Upper
            }
            EarthlyBranch::Yin | EarthlyBranch::Shen | EarthlyBranch::Si | EarthlyBranch::Hai => {
                Origin::Middle
            }
            _ => Origin::Lower,
        }
    }
}

/// The resolved formation: governing term, dun polarity, configuration
/// digit and origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub term: Option<SolarTerm>,
    pub dun: Dun,
    pub number: u8,
    pub origin: Origin,
}

impl Formation {
    /// Full label, e.g. "陰遁4局 (下元)".
    pub fn label(&self) -> String {
        format!("{}{}局 ({})", self.dun.label(), self.number, self.origin.label())
    }

    /// Compact code, e.g. "yin-4".
    pub fn format_code(&self) -> String {
        format!("{}-{}", self.dun.code(), self.number)
    }
}

/// Dun polarity for an instant: yang from the winter solstice boundary to
/// the summer solstice boundary, yin for the rest of the year. The civil
/// boundary dates Dec 22 and Jun 21 stand in for the exact solstices.
fn dun_for_instant(instant: NaiveDateTime) -> Dun {
    let month_day = (instant.date().month(), instant.date().day());
    if month_day < (6, 21) || month_day >= (12, 22) {
        Dun::Yang
    } else {
        Dun::Yin
    }
}

/// Governing solar term for a method: the nearest prior term for the hour
/// and day bases, the lunar month's term for the month basis, and start
/// of spring for the year basis.
fn governing_term(method: PillarMethod, record: &AlmanacRecord) -> Option<SolarTerm> {
    match method {
        PillarMethod::Hour | PillarMethod::Day => record.prev_term,
        PillarMethod::Month => record.month_term,
        PillarMethod::Year => Some(SolarTerm::LiChun),
    }
}

/// Resolve the formation governing a chart.
///
/// A missing solar term falls back to configuration digit 1; this is the
/// documented lookup-miss recovery, not an error.
pub fn resolve_formation(
    instant: NaiveDateTime,
    method: PillarMethod,
    record: &AlmanacRecord,
) -> Formation {
    let term = governing_term(method, record);
    let basis = method.basis_pillar(&record.pillars);
    let origin = Origin::for_branch(basis.branch);
    let dun = dun_for_instant(instant);

    let number = match term {
        Some(term) => formation_row(term).digits[origin.index()],
        None => {
            warn!(method = method.label(), "solar term missing, defaulting to configuration 1");
            1
        }
    };

    Formation {
        term,
        dun,
        number,
        origin,
    }
}
