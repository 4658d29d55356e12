//! Palace grading and the overall reading.

use serde::{Deserialize, Serialize};

use zhanbu_core::{FiveElement, Locale};
use zhanbu_tables::{ALL_PALACES, Auspice, Deity, Gate, Palace, Star};

use crate::grid::PalaceGrid;
use crate::method::Purpose;

/// Five-level fortune grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FortuneGrade {
    GreatMisfortune,
    MinorMisfortune,
    Neutral,
    MinorFortune,
    GreatFortune,
}

impl FortuneGrade {
    /// Signed score of the grade, -2 ..= 2.
    pub const fn score(self) -> i8 {
        match self {
            Self::GreatMisfortune => -2,
            Self::MinorMisfortune => -1,
            Self::Neutral => 0,
            Self::MinorFortune => 1,
            Self::GreatFortune => 2,
        }
    }

    /// Grade for a raw score; values beyond the band clamp to the extremes.
    pub const fn from_score(score: i8) -> FortuneGrade {
        if score >= 2 {
            Self::GreatFortune
        } else if score == 1 {
            Self::MinorFortune
        } else if score == 0 {
            Self::Neutral
        } else if score == -1 {
            Self::MinorMisfortune
        } else {
            Self::GreatMisfortune
        }
    }

    /// Display label (大吉 .. 大兇).
    pub const fn label(self) -> &'static str {
        match self {
            Self::GreatMisfortune => "大兇",
            Self::MinorMisfortune => "小兇",
            Self::Neutral => "平",
            Self::MinorFortune => "小吉",
            Self::GreatFortune => "大吉",
        }
    }

    pub const fn is_fortune(self) -> bool {
        matches!(self, Self::MinorFortune | Self::GreatFortune)
    }

    pub const fn is_misfortune(self) -> bool {
        matches!(self, Self::MinorMisfortune | Self::GreatMisfortune)
    }

    /// Closing remark appended to a palace explanation.
    const fn closing_remark(self) -> &'static str {
        match self {
            Self::GreatFortune => " 此宮大吉，事情進展順利，可主動出擊。",
            Self::MinorFortune => " 此宮小吉，事情有貴人相助，穩步推進為宜。",
            Self::Neutral => " 此宮平常，事情進展一般，需謹慎行事。",
            Self::MinorMisfortune => " 此宮小兇，事情多有阻礙，宜守不宜進。",
            Self::GreatMisfortune => " 此宮大兇，事情多有險阻，最好避開此方位活動。",
        }
    }
}

/// Analysis of one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceAnalysis {
    pub palace: Palace,
    pub name: &'static str,
    pub direction: &'static str,
    pub element: FiveElement,
    pub star: Star,
    pub star_alias: &'static str,
    pub gate: Option<Gate>,
    pub deity: Option<Deity>,
    pub score: i8,
    pub grade: FortuneGrade,
    pub explanation: String,
}

fn element_score(element: FiveElement) -> i8 {
    match element {
        FiveElement::Metal | FiveElement::Fire => 1,
        FiveElement::Earth => 0,
        FiveElement::Wood | FiveElement::Water => -1,
    }
}

fn auspice_score(auspice: Auspice) -> i8 {
    match auspice {
        Auspice::Auspicious => 1,
        Auspice::Inauspicious => -1,
    }
}

/// Grade one palace from its star, gate and deity.
pub fn analyze_palace(
    palace: Palace,
    star: Star,
    gate: Option<Gate>,
    deity: Option<Deity>,
    locale: Locale,
) -> PalaceAnalysis {
    let mut score = element_score(star.element());
    if let Some(gate) = gate {
        score += auspice_score(gate.auspice());
    }
    if let Some(deity) = deity {
        score += auspice_score(deity.auspice());
    }
    let grade = FortuneGrade::from_score(score);

    let number = palace.number();
    let mut explanation = palace.meaning().to_string();
    explanation.push_str(&format!(
        " {}({})入{}宮，{}",
        star.name(locale),
        star.alias(locale),
        number,
        star.feature()
    ));
    if let Some(gate) = gate {
        explanation.push_str(&format!(
            " {}入{}宮，{}",
            gate.name(locale),
            number,
            gate.feature()
        ));
    }
    if let Some(deity) = deity {
        explanation.push_str(&format!(
            " {}入{}宮，{}",
            deity.name(locale),
            number,
            deity.feature()
        ));
    }
    explanation.push_str(grade.closing_remark());

    PalaceAnalysis {
        palace,
        name: palace.name(locale),
        direction: palace.direction(locale),
        element: palace.element(),
        star,
        star_alias: star.alias(locale),
        gate,
        deity,
        score,
        grade,
        explanation,
    }
}

/// The overall reading of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallAnalysis {
    pub grade: FortuneGrade,
    pub best_palace: Palace,
    pub suggestions: Vec<String>,
}

/// Overall grade from the command- and duty-palace grades.
fn combine_grades(command: FortuneGrade, duty: FortuneGrade) -> FortuneGrade {
    match (command, duty) {
        (FortuneGrade::GreatFortune, FortuneGrade::GreatFortune) => FortuneGrade::GreatFortune,
        _ if command.is_fortune() && duty.is_fortune() => FortuneGrade::MinorFortune,
        _ if command.is_misfortune() && duty.is_misfortune() => FortuneGrade::GreatMisfortune,
        _ if command.is_misfortune() || duty.is_misfortune() => FortuneGrade::MinorMisfortune,
        _ => FortuneGrade::Neutral,
    }
}

fn grade_suggestions(grade: FortuneGrade) -> [&'static str; 3] {
    match grade {
        FortuneGrade::GreatFortune => [
            "當前時運極佳，可大膽行事，推進重要計劃。",
            "貴人運強，適合社交活動和尋求支持。",
            "財運亨通，可考慮投資或財務規劃。",
        ],
        FortuneGrade::MinorFortune => [
            "時運較好，可穩步推進計劃，但需謹慎。",
            "有貴人相助，但也需自身努力。",
            "財運平穩，宜守不宜進。",
        ],
        FortuneGrade::Neutral => [
            "時運平平，宜按部就班行事，不宜冒險。",
            "人際關系一般，需多加維護。",
            "財運一般，宜節製開支。",
        ],
        FortuneGrade::MinorMisfortune => [
            "時運不佳，宜守不宜進，避免冒險。",
            "謹防小人，保持低調。",
            "財務宜節約，避免大額支出。",
        ],
        FortuneGrade::GreatMisfortune => [
            "當前時運不佳，宜避開重要活動，保持低調。",
            "謹防小人和突發事件，避免沖突。",
            "財務宜嚴格控製，避免任何投資和大額支出。",
        ],
    }
}

/// Combine the nine palace analyses into the overall reading.
///
/// The most favorable palace is the highest grade score plus the purpose
/// bonus, ties resolved to the lowest palace number.
pub fn analyze_overall(
    palaces: &PalaceGrid<PalaceAnalysis>,
    command_palace: Palace,
    duty_palace: Option<Palace>,
    purpose: Purpose,
    locale: Locale,
) -> OverallAnalysis {
    let command_grade = palaces.get(command_palace).grade;
    let duty_grade = duty_palace
        .map(|p| palaces.get(p).grade)
        .unwrap_or(FortuneGrade::Neutral);
    let grade = combine_grades(command_grade, duty_grade);

    let mut best_palace = ALL_PALACES[0];
    let mut best_score = i8::MIN;
    for (palace, analysis) in palaces.iter() {
        let mut score = analysis.grade.score();
        if purpose.favored_palaces().contains(&palace) {
            score += 1;
        }
        if score > best_score {
            best_score = score;
            best_palace = palace;
        }
    }

    let mut suggestions: Vec<String> = grade_suggestions(grade)
        .iter()
        .map(|s| s.to_string())
        .collect();
    suggestions.push(format!(
        "最有利方位在{}方({}宮)，可多往此方位活動。",
        best_palace.direction(locale),
        best_palace.name(locale)
    ));
    if let Some(advice) = purpose.advice() {
        suggestions.push(advice.to_string());
    }

    OverallAnalysis {
        grade,
        best_palace,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_round_trip() {
        for grade in [
            FortuneGrade::GreatMisfortune,
            FortuneGrade::MinorMisfortune,
            FortuneGrade::Neutral,
            FortuneGrade::MinorFortune,
            FortuneGrade::GreatFortune,
        ] {
            assert_eq!(FortuneGrade::from_score(grade.score()), grade);
        }
    }

    #[test]
    fn extreme_scores_clamp() {
        assert_eq!(FortuneGrade::from_score(3), FortuneGrade::GreatFortune);
        assert_eq!(FortuneGrade::from_score(-3), FortuneGrade::GreatMisfortune);
    }

    #[test]
    fn best_triple_scores_great_fortune() {
        // 天心 (metal) + 開門 + 九天: +3, clamped to great fortune.
        let a = analyze_palace(
            Palace::Qian,
            Star::TianXin,
            Some(Gate::Open),
            Some(Deity::JiuTian),
            Locale::ZhHant,
        );
        assert_eq!(a.score, 3);
        assert_eq!(a.grade, FortuneGrade::GreatFortune);
    }

    #[test]
    fn center_scores_star_only() {
        let a = analyze_palace(Palace::Zhong, Star::TianQin, None, None, Locale::ZhHant);
        assert_eq!(a.score, 0);
        assert_eq!(a.grade, FortuneGrade::Neutral);
        assert!(a.explanation.starts_with("中宮為核心"));
        assert!(a.explanation.contains("天禽(廉貞)入5宮"));
        assert!(a.explanation.ends_with("需謹慎行事。"));
    }

    #[test]
    fn explanation_weaves_all_parts() {
        let a = analyze_palace(
            Palace::Kan,
            Star::TianPeng,
            Some(Gate::Rest),
            Some(Deity::ZhiFu),
            Locale::ZhHant,
        );
        // water star -1, auspicious gate +1, auspicious deity +1
        assert_eq!(a.score, 1);
        assert_eq!(a.grade, FortuneGrade::MinorFortune);
        assert!(a.explanation.contains("坎宮主水"));
        assert!(a.explanation.contains("天蓬(貪狼)入1宮"));
        assert!(a.explanation.contains("休門入1宮"));
        assert!(a.explanation.contains("值符入1宮"));
        assert!(a.explanation.contains("此宮小吉"));
    }

    #[test]
    fn simplified_locale_changes_names_only() {
        let hant = analyze_palace(
            Palace::Zhen,
            Star::TianChong,
            Some(Gate::Injury),
            Some(Deity::TengShe),
            Locale::ZhHant,
        );
        let hans = analyze_palace(
            Palace::Zhen,
            Star::TianChong,
            Some(Gate::Injury),
            Some(Deity::TengShe),
            Locale::ZhHans,
        );
        assert_eq!(hant.score, hans.score);
        assert_eq!(hant.grade, hans.grade);
        assert!(hans.explanation.contains("天冲"));
        assert!(hans.explanation.contains("伤门"));
        assert!(hant.explanation.contains("天沖"));
        assert!(hant.explanation.contains("傷門"));
    }

    #[test]
    fn grade_combination_table() {
        use FortuneGrade::*;
        assert_eq!(combine_grades(GreatFortune, GreatFortune), GreatFortune);
        assert_eq!(combine_grades(GreatFortune, MinorFortune), MinorFortune);
        assert_eq!(combine_grades(MinorMisfortune, GreatMisfortune), GreatMisfortune);
        assert_eq!(combine_grades(GreatFortune, MinorMisfortune), MinorMisfortune);
        assert_eq!(combine_grades(Neutral, Neutral), Neutral);
        assert_eq!(combine_grades(GreatFortune, Neutral), Neutral);
    }

    fn uniform_grid(grade_by_palace: impl Fn(Palace) -> i8) -> PalaceGrid<PalaceAnalysis> {
        PalaceGrid::from_fn(|p| {
            let mut a = analyze_palace(p, Star::TianQin, None, None, Locale::ZhHant);
            a.score = grade_by_palace(p);
            a.grade = FortuneGrade::from_score(a.score);
            a
        })
    }

    #[test]
    fn best_palace_ties_break_to_lowest_number() {
        let grid = uniform_grid(|_| 0);
        let overall = analyze_overall(&grid, Palace::Zhong, None, Purpose::General, Locale::ZhHant);
        assert_eq!(overall.best_palace, Palace::Kan);
    }

    #[test]
    fn purpose_bonus_tips_the_balance() {
        // Everything neutral: the wealth bonus palaces (1, 7, 6) win, and
        // palace 1 comes first.
        let grid = uniform_grid(|_| 0);
        let overall = analyze_overall(&grid, Palace::Zhong, None, Purpose::Wealth, Locale::ZhHant);
        assert_eq!(overall.best_palace, Palace::Kan);

        // Palace 7 at +1 plus the wealth bonus outscores the bonused
        // palace 1.
        let grid = uniform_grid(|p| if p == Palace::Dui { 1 } else { 0 });
        let overall = analyze_overall(&grid, Palace::Zhong, None, Purpose::Wealth, Locale::ZhHant);
        assert_eq!(overall.best_palace, Palace::Dui);

        // Without a bonus set the raw leader wins.
        let overall = analyze_overall(&grid, Palace::Zhong, None, Purpose::General, Locale::ZhHant);
        assert_eq!(overall.best_palace, Palace::Dui);
    }

    #[test]
    fn suggestions_include_direction_line_and_advice() {
        let grid = uniform_grid(|_| 0);
        let overall = analyze_overall(&grid, Palace::Zhong, None, Purpose::Career, Locale::ZhHant);
        assert_eq!(overall.suggestions.len(), 5);
        assert!(overall.suggestions[3].contains("最有利方位在"));
        assert!(overall.suggestions[4].contains("事業方面"));

        let general = analyze_overall(&grid, Palace::Zhong, None, Purpose::General, Locale::ZhHant);
        assert_eq!(general.suggestions.len(), 4);
    }

    #[test]
    fn missing_duty_palace_reads_neutral() {
        let grid = uniform_grid(|p| if p == Palace::Kan { 2 } else { 0 });
        let overall = analyze_overall(&grid, Palace::Kan, None, Purpose::General, Locale::ZhHant);
        // Great fortune command + neutral duty → neutral overall.
        assert_eq!(overall.grade, FortuneGrade::Neutral);
    }
}
