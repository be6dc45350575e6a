// src/dashboard.rs

//! Одна перерисовка дашборда: модель секторов + панели по бумагам.

use futures::future::join_all;
use tracing::{info, warn};

use crate::config::EquityConfig;
use crate::market::{Fundamentals, MarketData, Period, PeriodReturn, period_returns};
use crate::models::{MacroInputs, Recommendation, SectorScore};
use crate::sensitivity::{compute_sector_scores, select_best_sector};

/// Блок панели: либо данные, либо причина, по которой их нет.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<T> {
    Ready(T),
    Unavailable(String),
}

impl<T> Panel<T> {
    fn from_result(res: anyhow::Result<T>, what: &str, ticker: &str) -> Self {
        match res {
            Ok(v) => Panel::Ready(v),
            Err(e) => {
                warn!("{} for {} unavailable: {:#}", what, ticker, e);
                Panel::Unavailable(format!("{:#}", e))
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Panel::Ready(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquityPanel {
    pub ticker: String,
    pub name: String,
    pub fundamentals: Panel<Fundamentals>,
    pub returns: Panel<Vec<PeriodReturn>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub inputs: MacroInputs,
    pub scores: Vec<SectorScore>,
    pub recommendation: Recommendation,
    pub period: Period,
    pub equities: Vec<EquityPanel>,
}

/// Только модельная часть, без рыночных данных
pub fn evaluate(inputs: MacroInputs) -> (Vec<SectorScore>, Recommendation) {
    let scores = compute_sector_scores(&inputs);
    let recommendation = select_best_sector(&scores);
    (scores, recommendation)
}

async fn load_equity<M: MarketData + ?Sized>(
    feed: &M,
    equity: &EquityConfig,
    period: Period,
) -> EquityPanel {
    let (fundamentals, closes) = futures::join!(
        feed.fundamentals(&equity.ticker),
        feed.daily_closes(&equity.ticker)
    );

    let returns = closes.and_then(|c| period_returns(&c, period));

    EquityPanel {
        ticker: equity.ticker.clone(),
        name: equity.name.clone(),
        fundamentals: Panel::from_result(fundamentals, "Fundamentals", &equity.ticker),
        returns: Panel::from_result(returns, "Price history", &equity.ticker),
    }
}

/// Полная перерисовка. Ошибки фида по одной бумаге не трогают остальные.
pub async fn redraw<M: MarketData + ?Sized>(
    inputs: MacroInputs,
    equities: &[EquityConfig],
    feed: &M,
    period: Period,
) -> DashboardView {
    let (scores, recommendation) = evaluate(inputs);
    info!("Scenario evaluated, recommendation: {}", recommendation);

    let equities = join_all(equities.iter().map(|e| load_equity(feed, e, period))).await;

    DashboardView {
        inputs,
        scores,
        recommendation,
        period,
        equities,
    }
}
