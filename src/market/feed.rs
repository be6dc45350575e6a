// src/market/feed.rs

//! Источники рыночных данных. Живой фид сюда не входит: читаем
//! локальные JSON-снимки и фиксированные показатели из конфига.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::Duration;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::MarketData;
use super::types::{Fundamentals, PricePoint};

/// Формат файла `<data_dir>/<ticker>.json`
#[derive(Deserialize, Debug)]
struct Snapshot {
    #[serde(default)]
    fundamentals: Fundamentals,
    #[serde(default)]
    closes: Vec<PricePoint>,
}

/// Фид поверх каталога со снимками
#[derive(Debug, Clone)]
pub struct FileFeed {
    data_dir: PathBuf,
}

impl FileFeed {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn snapshot_path(&self, ticker: &str) -> Result<PathBuf> {
        if ticker.is_empty() || ticker.contains(['/', '\\']) || ticker.contains("..") {
            return Err(anyhow!("Invalid ticker `{}`", ticker));
        }
        Ok(self.data_dir.join(format!("{}.json", ticker)))
    }

    async fn load(&self, ticker: &str) -> Result<Snapshot> {
        let path = self.snapshot_path(ticker)?;
        debug!("Reading snapshot {:?}", path);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Не удалось прочитать снимок {:?}", path))?;
        let de = &mut serde_json::Deserializer::from_str(&raw);
        serde_path_to_error::deserialize(de)
            .map_err(|e| anyhow!("Bad snapshot {:?} at `{}`: {}", path, e.path(), e.inner()))
    }
}

/// Оставляет только последний год относительно самой свежей точки.
pub fn trailing_year(mut closes: Vec<PricePoint>) -> Vec<PricePoint> {
    closes.sort_by_key(|p| p.date);
    let Some(last) = closes.last().map(|p| p.date) else {
        return closes;
    };
    let from = last - Duration::days(365);
    closes.retain(|p| p.date > from);
    closes
}

#[async_trait]
impl MarketData for FileFeed {
    async fn fundamentals(&self, ticker: &str) -> Result<Fundamentals> {
        Ok(self.load(ticker).await?.fundamentals)
    }

    async fn daily_closes(&self, ticker: &str) -> Result<Vec<PricePoint>> {
        let snapshot = self.load(ticker).await?;
        Ok(trailing_year(snapshot.closes))
    }
}

/// Обёртка: фиксированные показатели из конфига поверх любого фида.
/// Если фид не смог отдать показатели, но фиксированные есть, используем их.
#[derive(Debug, Clone)]
pub struct FixedFundamentalsFeed<F> {
    inner: F,
    fixed: HashMap<String, Fundamentals>,
}

impl<F: MarketData> FixedFundamentalsFeed<F> {
    pub fn new(inner: F, fixed: HashMap<String, Fundamentals>) -> Self {
        Self { inner, fixed }
    }
}

#[async_trait]
impl<F: MarketData> MarketData for FixedFundamentalsFeed<F> {
    async fn fundamentals(&self, ticker: &str) -> Result<Fundamentals> {
        let fetched = self.inner.fundamentals(ticker).await;
        match (self.fixed.get(ticker), fetched) {
            (Some(fixed), Ok(f)) => Ok(fixed.overlay(f)),
            (Some(fixed), Err(e)) => {
                warn!("Fundamentals for {} unavailable ({}), using fixed values", ticker, e);
                Ok(*fixed)
            }
            (None, res) => res,
        }
    }

    async fn daily_closes(&self, ticker: &str) -> Result<Vec<PricePoint>> {
        self.inner.daily_closes(ticker).await
    }
}
