// src/sensitivity.rs

//! Линейная модель чувствительности секторов к макро-шоку.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{MacroInputs, Recommendation, Sector, SectorScore};
use crate::utils::round2;

/// Веса по столбцам: rate, oil, fx, consumer_index, investor_sentiment.
/// Порядок строк совпадает с `Sector::ALL`.
const WEIGHTS: [(Sector, [Decimal; 5]); 6] = [
    (Sector::Banking,        [dec!(1.5),  dec!(0),    dec!(0.5), dec!(0),   dec!(0)]),
    (Sector::Construction,   [dec!(-1.2), dec!(-0.3), dec!(0),   dec!(0),   dec!(0)]),
    (Sector::Energy,         [dec!(0),    dec!(1.0),  dec!(0),   dec!(0),   dec!(0)]),
    (Sector::IT,             [dec!(-0.5), dec!(0),    dec!(0.8), dec!(0),   dec!(0)]),
    (Sector::ConsumerGoods,  [dec!(0),    dec!(0),    dec!(0),   dec!(1.2), dec!(0)]),
    (Sector::Semiconductors, [dec!(-0.4), dec!(0),    dec!(1.5), dec!(0),   dec!(0)]),
];

/// Веса одного сектора
pub fn weights(sector: Sector) -> [Decimal; 5] {
    WEIGHTS
        .iter()
        .find(|(s, _)| *s == sector)
        .map(|(_, w)| *w)
        .unwrap_or([Decimal::ZERO; 5])
}

/// Сырое (неокруглённое) влияние шока на сектор.
/// Арифметика с насыщением: вне диапазона ползунков значение упирается
/// в `Decimal::MAX`/`Decimal::MIN`, но не паникует.
pub fn raw_impact(sector: Sector, inputs: &MacroInputs) -> Decimal {
    weights(sector)
        .iter()
        .zip(inputs.as_vector())
        .fold(Decimal::ZERO, |acc, (w, x)| acc.saturating_add(w.saturating_mul(x)))
}

/// Оценки всех секторов в порядке перечисления (не по значению).
pub fn compute_sector_scores(inputs: &MacroInputs) -> Vec<SectorScore> {
    WEIGHTS
        .iter()
        .map(|(sector, _)| SectorScore {
            sector: *sector,
            impact: round2(raw_impact(*sector, inputs)),
        })
        .collect()
}

/// Строгий argmax; при равенстве побеждает первый по порядку.
/// Если максимум <= 0 (или оценок нет) -> `Recommendation::None`.
pub fn select_best_sector(scores: &[SectorScore]) -> Recommendation {
    let mut best: Option<&SectorScore> = None;
    for score in scores {
        match best {
            Some(b) if score.impact <= b.impact => {}
            _ => best = Some(score),
        }
    }

    match best {
        Some(b) if b.impact > Decimal::ZERO => Recommendation::Favorable(b.sector),
        _ => Recommendation::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rate: Decimal, oil: Decimal, fx: Decimal, ci: Decimal) -> MacroInputs {
        MacroInputs {
            rate,
            oil,
            fx,
            consumer_index: ci,
            investor_sentiment: Decimal::ZERO,
        }
    }

    fn impact_of(scores: &[SectorScore], sector: Sector) -> Decimal {
        scores.iter().find(|s| s.sector == sector).unwrap().impact
    }

    #[test]
    fn test_table_rows_follow_enum_order() {
        let order: Vec<Sector> = WEIGHTS.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Sector::ALL.to_vec());
    }

    #[test]
    fn test_zero_inputs() {
        let scores = compute_sector_scores(&MacroInputs::default());
        assert_eq!(scores.len(), 6);
        assert!(scores.iter().all(|s| s.impact == Decimal::ZERO));
        assert_eq!(select_best_sector(&scores), Recommendation::None);
    }

    #[test]
    fn test_single_formulas() {
        let scores = compute_sector_scores(&inputs(dec!(1), dec!(10), dec!(2), dec!(3)));
        assert_eq!(impact_of(&scores, Sector::Banking), dec!(2.5));
        assert_eq!(impact_of(&scores, Sector::Construction), dec!(-4.2));
        assert_eq!(impact_of(&scores, Sector::Energy), dec!(10));
        assert_eq!(impact_of(&scores, Sector::IT), dec!(1.1));
        assert_eq!(impact_of(&scores, Sector::ConsumerGoods), dec!(3.6));
        assert_eq!(impact_of(&scores, Sector::Semiconductors), dec!(2.6));
    }

    #[test]
    fn test_sentiment_is_ignored() {
        let base = inputs(dec!(0.5), dec!(-3), dec!(1.5), dec!(2));
        let mut with_sentiment = base;
        with_sentiment.investor_sentiment = dec!(5);
        assert_eq!(compute_sector_scores(&base), compute_sector_scores(&with_sentiment));
    }

    #[test]
    fn test_all_equal_positive_picks_first() {
        let scores: Vec<SectorScore> = Sector::ALL
            .iter()
            .map(|s| SectorScore { sector: *s, impact: dec!(1.5) })
            .collect();
        assert_eq!(select_best_sector(&scores), Recommendation::Favorable(Sector::Banking));
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let huge = compute_sector_scores(&inputs(Decimal::MAX, dec!(0), dec!(0), dec!(0)));
        assert_eq!(impact_of(&huge, Sector::Banking), Decimal::MAX);
        assert_eq!(impact_of(&huge, Sector::Construction), Decimal::MIN);
        assert_eq!(select_best_sector(&huge), Recommendation::Favorable(Sector::Banking));

        let all_max = MacroInputs {
            rate: Decimal::MAX,
            oil: Decimal::MAX,
            fx: Decimal::MAX,
            consumer_index: Decimal::MAX,
            investor_sentiment: Decimal::MAX,
        };
        assert_eq!(compute_sector_scores(&all_max).len(), 6);

        let all_min = MacroInputs {
            rate: Decimal::MIN,
            oil: Decimal::MIN,
            fx: Decimal::MIN,
            consumer_index: Decimal::MIN,
            investor_sentiment: Decimal::MIN,
        };
        let scores = compute_sector_scores(&all_min);
        assert_eq!(impact_of(&scores, Sector::Energy), Decimal::MIN);
        assert_eq!(impact_of(&scores, Sector::ConsumerGoods), Decimal::MIN);
    }

    #[test]
    fn test_empty_scores() {
        assert_eq!(select_best_sector(&[]), Recommendation::None);
    }

    #[test]
    fn test_max_exactly_zero_is_none() {
        let scores = compute_sector_scores(&inputs(dec!(0), dec!(0), dec!(-1), dec!(0)));
        assert_eq!(impact_of(&scores, Sector::Energy), Decimal::ZERO);
        assert!(scores.iter().all(|s| s.impact <= Decimal::ZERO));
        assert_eq!(select_best_sector(&scores), Recommendation::None);
    }
}
