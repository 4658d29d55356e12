//! End-to-end casting checks, including the documented worked examples.

use chrono::NaiveDate;

use zhanbu_almanac::{AlmanacRecord, FixedAlmanac, FourPillars, LunarDate};
use zhanbu_core::{FiveElement, SolarTerm, StemBranch};
use zhanbu_meihua::{CastMethod, ElementRelation, RolePosition, cast_by_instant, cast_by_numbers};
use zhanbu_tables::Trigram;

#[test]
fn numeric_casting_six_eight_three() {
    // The documented worked example: 6, 8, 3 → 水地比 with 水山蹇 as the
    // changed hexagram and 山地剝 as the mutual.
    let casting = cast_by_numbers(6, 8, Some(3));

    assert_eq!(casting.primary.upper, Trigram::Kan);
    assert_eq!(casting.primary.lower, Trigram::Kun);
    assert_eq!(casting.primary.number, 8);
    assert_eq!(casting.primary.name, "水地比");
    assert_eq!(casting.primary.pattern, "010000");
    assert_eq!(casting.changed_line, 3);

    // Change in the lower half: body is the upper 坎 (water), use the
    // lower 坤 (earth); earth overcomes water.
    assert_eq!(casting.ti.trigram, Trigram::Kan);
    assert_eq!(casting.ti.element, FiveElement::Water);
    assert_eq!(casting.ti.position, RolePosition::Upper);
    assert_eq!(casting.yong.trigram, Trigram::Kun);
    assert_eq!(casting.yong.element, FiveElement::Earth);
    assert_eq!(casting.relation, ElementRelation::UseOvercomesBody);
    assert_eq!(casting.relation_summary, "用克體（凶）");

    assert_eq!(casting.mutual.number, 23);
    assert_eq!(casting.mutual.name, "山地剝");
    assert_eq!(casting.mutual.pattern, "100000");

    assert_eq!(casting.changed.number, 39);
    assert_eq!(casting.changed.name, "水山蹇");
    assert_eq!(casting.changed.pattern, "010100");
}

#[test]
fn numeric_casting_defaults_changed_line_to_sum() {
    // Without a third number the changed line comes from 6 + 8 = 14 → 2.
    let casting = cast_by_numbers(6, 8, None);
    assert_eq!(casting.changed_line, 2);
    assert_eq!(casting.primary.number, 8);
    // Line 2 still sits in the lower trigram: same body/use as line 3.
    assert_eq!(casting.relation, ElementRelation::UseOvercomesBody);
}

#[test]
fn documented_upper_seven_lower_eight_line_two() {
    // 艮 over 坤 is 山地剝; flipping line 2 gives 山水蒙; the middle four
    // lines give 坤為地.
    let casting = cast_by_numbers(7, 8, Some(2));
    assert_eq!(casting.primary.number, 23);
    assert_eq!(casting.primary.pattern, "100000");
    assert_eq!(casting.changed.pattern, "100010");
    assert_eq!(casting.changed.number, 4);
    assert_eq!(casting.changed.name, "山水蒙");
    assert_eq!(casting.mutual.number, 2);
    assert_eq!(casting.mutual.name, "坤為地");
}

#[test]
fn negative_and_zero_inputs_stay_in_range() {
    for (n1, n2, n3) in [(0, 0, Some(0)), (-7, -13, None), (123, -456, Some(-1))] {
        let casting = cast_by_numbers(n1, n2, n3);
        assert!((1..=8).contains(&casting.primary.upper.number()));
        assert!((1..=8).contains(&casting.primary.lower.number()));
        assert!((1..=6).contains(&casting.changed_line));
        assert!((1..=64).contains(&casting.primary.number));
        assert_ne!(casting.relation, ElementRelation::Undetermined);
    }
}

#[test]
fn casting_is_deterministic_and_serializable() {
    let a = cast_by_numbers(6, 8, Some(3));
    let b = cast_by_numbers(6, 8, Some(3));
    assert_eq!(a, b);
    let json = serde_json::to_string(&a).unwrap();
    assert!(json.contains("水地比"));
    assert!(json.contains("\"mode\":\"Numbers\""));
}

#[test]
fn instant_casting_resolves_through_the_almanac() {
    let day = StemBranch::from_label("甲子").unwrap();
    let record = AlmanacRecord {
        pillars: FourPillars {
            year: StemBranch::from_label("乙巳").unwrap(),
            month: StemBranch::from_label("癸未").unwrap(),
            day,
            hour: StemBranch::from_label("庚午").unwrap(),
        },
        prev_term: Some(SolarTerm::DaShu),
        month_term: Some(SolarTerm::XiaoShu),
        lunar: LunarDate::new(2025, 6, 12, false).unwrap(),
    };
    let almanac = FixedAlmanac::new(record);
    let instant = NaiveDate::from_ymd_opt(2025, 8, 5)
        .unwrap()
        .and_hms_opt(14, 10, 0)
        .unwrap();

    let casting = cast_by_instant(&almanac, instant).unwrap();
    let CastMethod::Time(figures) = casting.method else {
        panic!("time casting expected");
    };
    // 2025 → 9; 9 + 6 + 12 = 27; 14:10 is the 未 hour (8) → 35.
    assert_eq!(figures.upper_seed, 27);
    assert_eq!(figures.lower_seed, 35);
    assert_eq!(casting.primary.number, 30);
    assert_eq!(casting.changed_line, 5);
}
