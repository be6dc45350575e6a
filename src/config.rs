// src/config.rs
use anyhow::{Result, anyhow};
use config::{Config as Loader, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

use crate::market::{Fundamentals, Period};
use crate::models::MacroInputs;

/// Положения ползунков. Всё, что не задано, берётся из положения по умолчанию.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub rate: Decimal,
    pub oil: Decimal,
    pub fx: Decimal,
    pub consumer_index: Decimal,
    pub investor_sentiment: Decimal,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let d = MacroInputs::slider_defaults();
        Self {
            rate: d.rate,
            oil: d.oil,
            fx: d.fx,
            consumer_index: d.consumer_index,
            investor_sentiment: d.investor_sentiment,
        }
    }
}

impl ScenarioConfig {
    /// Сырые значения из конфига -> привязанные к сетке ползунков входы
    pub fn to_inputs(&self) -> MacroInputs {
        MacroInputs::from_raw(
            self.rate,
            self.oil,
            self.fx,
            self.consumer_index,
            self.investor_sentiment,
        )
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EquityConfig {
    pub ticker: String,
    pub name: String,
    /// Фиксированные показатели; перекрывают данные из снимка
    #[serde(default)]
    pub fundamentals: Option<Fundamentals>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub scenario: ScenarioConfig,

    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default)]
    pub return_period: Period,

    #[serde(default = "default_equities")]
    pub equities: Vec<EquityConfig>,
}

fn default_data_dir() -> String { "data".into() }

fn default_equities() -> Vec<EquityConfig> {
    vec![
        EquityConfig {
            ticker: "005930.KS".into(),
            name: "삼성전자".into(),
            fundamentals: None,
        },
        EquityConfig {
            ticker: "005380.KS".into(),
            name: "현대차".into(),
            fundamentals: None,
        },
    ]
}

impl Config {
    /// Файл (MACROSIM_CONFIG или Config.toml) -> переменные MACROSIM__* -> аргументы `key=value`
    pub fn load<I, S>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let file = env::var("MACROSIM_CONFIG").unwrap_or_else(|_| "Config.toml".into());
        let environment = Environment::with_prefix("MACROSIM").separator("__");
        Self::load_with(&file, Some(environment), overrides)
    }

    fn load_with<I, S>(file: &str, environment: Option<Environment>, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Loader::builder().add_source(File::with_name(file).required(false));
        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        for arg in overrides {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected key=value, got `{}`", arg))?;
            builder = builder.set_override(key.trim(), value.trim())?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Фиксированные показатели по тикерам
    pub fn fixed_fundamentals(&self) -> HashMap<String, Fundamentals> {
        self.equities
            .iter()
            .filter_map(|e| e.fundamentals.map(|f| (e.ticker.clone(), f)))
            .collect()
    }
}
