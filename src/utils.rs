// src/utils.rs
use rust_decimal::{Decimal, RoundingStrategy};

/// Округление до 2 знаков, половина к чётному (1.005 -> 1.00, 1.015 -> 1.02)
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Привязка к сетке `min + k * step` с обрезкой по границам.
/// При нулевом или отрицательном шаге только обрезает.
pub fn snap_to_step(value: Decimal, min: Decimal, max: Decimal, step: Decimal) -> Decimal {
    let clamped = value.clamp(min, max);
    if step <= Decimal::ZERO {
        return clamped;
    }
    let steps = ((clamped - min) / step)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (min + steps * step).clamp(min, max).normalize()
}
