// src/market/types.rs
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Значение показателя, которое источник может не отдать.
/// В отчёте `None` выводится как "N/A", а не обрывает весь экран.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Metric(pub Option<Decimal>);

impl Metric {
    pub fn value(&self) -> Option<Decimal> {
        self.0
    }

    /// Берём `self`, если есть, иначе `other`
    pub fn or(self, other: Metric) -> Metric {
        Metric(self.0.or(other.0))
    }
}

impl From<Decimal> for Metric {
    fn from(v: Decimal) -> Self {
        Metric(Some(v))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v.normalize()),
            None => write!(f, "N/A"),
        }
    }
}

/// Точечные фундаментальные показатели тикера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Fundamentals {
    #[serde(default)]
    pub trailing_pe: Metric,
    #[serde(default)]
    pub price_to_book: Metric,
    #[serde(default)]
    pub dividend_yield: Metric,
    #[serde(default)]
    pub market_cap: Metric,
}

impl Fundamentals {
    /// Поля `self` перекрывают `fallback` там, где они заданы.
    pub fn overlay(self, fallback: Fundamentals) -> Fundamentals {
        Fundamentals {
            trailing_pe: self.trailing_pe.or(fallback.trailing_pe),
            price_to_book: self.price_to_book.or(fallback.price_to_book),
            dividend_yield: self.dividend_yield.or(fallback.dividend_yield),
            market_cap: self.market_cap.or(fallback.market_cap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

/// Шаг агрегации доходностей
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Quarterly,
}

impl Period {
    pub fn label(&self, date: NaiveDate) -> String {
        use chrono::Datelike;
        match self {
            Period::Monthly => format!("{}-{:02}", date.year(), date.month()),
            Period::Quarterly => format!("{}Q{}", date.year(), (date.month() - 1) / 3 + 1),
        }
    }
}

/// Доходность за один период, %
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReturn {
    pub period: String,
    pub end_date: NaiveDate,
    pub return_pct: Decimal,
}
