// src/market/mod.rs
pub mod feed;
pub mod returns;
pub mod types;

use async_trait::async_trait;

pub use feed::{FileFeed, FixedFundamentalsFeed};
pub use returns::period_returns;
pub use types::{Fundamentals, Metric, Period, PeriodReturn, PricePoint};

/// Внешний источник рыночных данных (только чтение)
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn fundamentals(&self, ticker: &str) -> anyhow::Result<Fundamentals>;
    /// Дневные закрытия за последний год
    async fn daily_closes(&self, ticker: &str) -> anyhow::Result<Vec<PricePoint>>;
}
