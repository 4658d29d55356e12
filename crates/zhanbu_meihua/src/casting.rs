//! Casting entry points and seed arithmetic.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use zhanbu_almanac::{AlmanacSource, LunarDate};
use zhanbu_core::{EarthlyBranch, double_hour};
use zhanbu_tables::{ALL_TRIGRAMS, Trigram};

use crate::error::CastError;
use crate::hexagram::{HexagramFigure, LinePattern, RolePosition, TrigramRole};
use crate::relation::ElementRelation;

/// Trigram for any integer: remainder mod 8 in 1..=8, zero mapping to 8.
pub const fn num_to_trigram(n: i64) -> Trigram {
    let rem = n.rem_euclid(8);
    let number = if rem == 0 { 8 } else { rem as u8 };
    ALL_TRIGRAMS[(number - 1) as usize]
}

/// Changed line for any integer: remainder mod 6 in 1..=6, zero mapping to 6.
pub const fn num_to_line(n: i64) -> u8 {
    let rem = n.rem_euclid(6);
    if rem == 0 { 6 } else { rem as u8 }
}

/// Sum of the decimal digits of a year (sign ignored).
pub const fn digit_sum(year: i32) -> u32 {
    let mut rest = year.unsigned_abs();
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Intermediates of a time-based casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeFigures {
    pub lunar: LunarDate,
    pub double_hour_branch: EarthlyBranch,
    pub double_hour_number: u8,
    pub year_sum: u32,
    pub upper_seed: i64,
    pub lower_seed: i64,
}

/// Intermediates of a numeric casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberFigures {
    pub num1: i64,
    pub num2: i64,
    pub num3: Option<i64>,
}

/// How a casting was seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "figures")]
pub enum CastMethod {
    Time(TimeFigures),
    Numbers(NumberFigures),
}

/// A complete casting: method, primary/mutual/changed hexagrams, body
/// and use roles, and the five-element relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Casting {
    pub method: CastMethod,
    pub changed_line: u8,
    pub primary: HexagramFigure,
    pub mutual: HexagramFigure,
    pub changed: HexagramFigure,
    pub ti: TrigramRole,
    pub yong: TrigramRole,
    pub relation: ElementRelation,
    pub relation_summary: String,
}

/// Shared derivation: everything downstream of the trigram pair and
/// changed line.
fn derive_casting(upper: Trigram, lower: Trigram, changed_line: u8, method: CastMethod) -> Casting {
    let pattern = LinePattern::from_trigrams(upper, lower);
    let primary = HexagramFigure::from_pattern(pattern);
    let mutual = HexagramFigure::from_pattern(pattern.mutual());
    let changed = HexagramFigure::from_pattern(pattern.with_line_flipped(changed_line));

    // A change in the lower trigram makes the lower trigram the use and
    // the upper the body; a change in the upper half swaps them.
    let (ti, yong) = if changed_line <= 3 {
        (
            TrigramRole::new(upper, RolePosition::Upper),
            TrigramRole::new(lower, RolePosition::Lower),
        )
    } else {
        (
            TrigramRole::new(lower, RolePosition::Lower),
            TrigramRole::new(upper, RolePosition::Upper),
        )
    };
    let relation = ElementRelation::classify(ti.element, yong.element);

    Casting {
        method,
        changed_line,
        primary,
        mutual,
        changed,
        ti,
        yong,
        relation,
        relation_summary: relation.summary(),
    }
}

/// Cast from a lunar date and an hour of day.
///
/// Upper seed = year digit sum + month + day; lower seed adds the double
/// hour number; the changed line comes from the lower seed.
pub fn cast_by_time(
    lunar_year: i32,
    lunar_month: u8,
    lunar_day: u8,
    hour: u32,
) -> Result<Casting, CastError> {
    let lunar = LunarDate::new(lunar_year, lunar_month, lunar_day, false)?;
    cast_with_lunar(lunar, hour)
}

/// Cast from a civil instant, resolving the lunar date through an almanac.
pub fn cast_by_instant(
    source: &impl AlmanacSource,
    instant: NaiveDateTime,
) -> Result<Casting, CastError> {
    let record = source.resolve(instant)?;
    cast_with_lunar(record.lunar, instant.hour())
}

fn cast_with_lunar(lunar: LunarDate, hour: u32) -> Result<Casting, CastError> {
    let Some((branch, number)) = double_hour(hour) else {
        return Err(CastError::HourOutOfRange(hour));
    };

    let year_sum = digit_sum(lunar.year);
    let upper_seed = year_sum as i64 + lunar.month as i64 + lunar.day as i64;
    let lower_seed = upper_seed + number as i64;

    let figures = TimeFigures {
        lunar,
        double_hour_branch: branch,
        double_hour_number: number,
        year_sum,
        upper_seed,
        lower_seed,
    };
    Ok(derive_casting(
        num_to_trigram(upper_seed),
        num_to_trigram(lower_seed),
        num_to_line(lower_seed),
        CastMethod::Time(figures),
    ))
}

/// Cast from two or three integers: upper from the first, lower from the
/// second, changed line from the third or from their sum.
pub fn cast_by_numbers(num1: i64, num2: i64, num3: Option<i64>) -> Casting {
    let changed_line = match num3 {
        Some(n) => num_to_line(n),
        None => num_to_line(num1 + num2),
    };
    derive_casting(
        num_to_trigram(num1),
        num_to_trigram(num2),
        changed_line,
        CastMethod::Numbers(NumberFigures { num1, num2, num3 }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigram_wrapping() {
        assert_eq!(num_to_trigram(1), Trigram::Qian);
        assert_eq!(num_to_trigram(8), Trigram::Kun);
        assert_eq!(num_to_trigram(9), Trigram::Qian);
        assert_eq!(num_to_trigram(16), Trigram::Kun);
        assert_eq!(num_to_trigram(0), Trigram::Kun);
        assert_eq!(num_to_trigram(-1), Trigram::Gen);
        assert_eq!(num_to_trigram(-8), Trigram::Kun);
    }

    #[test]
    fn line_wrapping() {
        assert_eq!(num_to_line(1), 1);
        assert_eq!(num_to_line(6), 6);
        assert_eq!(num_to_line(7), 1);
        assert_eq!(num_to_line(0), 6);
        assert_eq!(num_to_line(-1), 5);
        for n in -50..=50 {
            assert!((1..=6).contains(&num_to_line(n)));
            assert!((1..=8).contains(&num_to_trigram(n).number()));
        }
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(2025), 9);
        assert_eq!(digit_sum(1999), 28);
        assert_eq!(digit_sum(-2025), 9);
        assert_eq!(digit_sum(0), 0);
    }

    #[test]
    fn hour_out_of_range_rejected() {
        assert!(matches!(
            cast_by_time(2025, 6, 12, 24),
            Err(CastError::HourOutOfRange(24))
        ));
    }

    #[test]
    fn bad_lunar_date_rejected() {
        assert!(matches!(
            cast_by_time(2025, 13, 1, 10),
            Err(CastError::Almanac(_))
        ));
        assert!(matches!(
            cast_by_time(2025, 6, 31, 10),
            Err(CastError::Almanac(_))
        ));
    }

    #[test]
    fn time_seed_formulas() {
        // 2025 → 9; 9 + 6 + 12 = 27; 未 hour adds 8 → 35.
        let casting = cast_by_time(2025, 6, 12, 14).unwrap();
        let CastMethod::Time(figures) = casting.method else {
            panic!("time casting expected");
        };
        assert_eq!(figures.year_sum, 9);
        assert_eq!(figures.double_hour_branch, EarthlyBranch::Wei);
        assert_eq!(figures.double_hour_number, 8);
        assert_eq!(figures.upper_seed, 27);
        assert_eq!(figures.lower_seed, 35);
        // 27 → 離, 35 → 離, line 35 → 5.
        assert_eq!(casting.primary.upper, Trigram::Li);
        assert_eq!(casting.primary.lower, Trigram::Li);
        assert_eq!(casting.changed_line, 5);
        assert_eq!(casting.primary.number, 30);
        assert_eq!(casting.primary.name, "離為火");
        // Line 5 is in the upper half: body below, use above; both 離.
        assert_eq!(casting.ti.position, RolePosition::Lower);
        assert_eq!(casting.relation, ElementRelation::Parity);
        // Mutual of "101101": 兌 over 巽 (澤風大過); change flips line 5
        // to 乾 over 離 (天火同人).
        assert_eq!(casting.mutual.number, 28);
        assert_eq!(casting.changed.number, 13);
        assert_eq!(casting.changed.pattern, "111101");
    }

    #[test]
    fn midnight_hour_counts_as_zi() {
        let at_23 = cast_by_time(2025, 6, 12, 23).unwrap();
        let at_0 = cast_by_time(2025, 6, 12, 0).unwrap();
        assert_eq!(at_23, at_0);
    }
}
