// src/market/returns.rs
use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{Period, PeriodReturn, PricePoint};
use crate::utils::round2;

fn bucket(period: Period, date: NaiveDate) -> (i32, u32) {
    match period {
        Period::Monthly => (date.year(), date.month()),
        Period::Quarterly => (date.year(), (date.month() - 1) / 3),
    }
}

/// Последнее закрытие каждого месяца/квартала, по возрастанию даты.
pub fn period_closes(closes: &[PricePoint], period: Period) -> Vec<PricePoint> {
    let mut sorted = closes.to_vec();
    sorted.sort_by_key(|p| p.date);

    let mut out: Vec<PricePoint> = Vec::new();
    for point in sorted {
        match out.last_mut() {
            Some(last) if bucket(period, last.date) == bucket(period, point.date) => *last = point,
            _ => out.push(point),
        }
    }
    out
}

fn percent_change(prev: Decimal, end: Decimal) -> Option<Decimal> {
    end.checked_div(prev)?
        .checked_sub(Decimal::ONE)?
        .checked_mul(dec!(100))
}

/// `(end / prev - 1) * 100` по периодам; первый период выбрасывается,
/// периоды с нулевой предыдущей ценой пропускаются.
/// Переполнение Decimal на экстремальных ценах -> ошибка, а не паника.
pub fn period_returns(closes: &[PricePoint], period: Period) -> Result<Vec<PeriodReturn>> {
    let mut out = Vec::new();
    for w in period_closes(closes, period).windows(2) {
        let (prev, end) = (w[0], w[1]);
        if prev.close.is_zero() {
            continue;
        }
        let pct = percent_change(prev.close, end.close).ok_or_else(|| {
            anyhow!(
                "Return overflow for {}: {} -> {}",
                period.label(end.date),
                prev.close,
                end.close
            )
        })?;
        out.push(PeriodReturn {
            period: period.label(end.date),
            end_date: end.date,
            return_pct: round2(pct),
        });
    }
    Ok(out)
}
