// src/inputs.rs

//! Границы и шаги ползунков. Модель сама ничего не проверяет,
//! поэтому сырые значения привязываются к сетке здесь, до построения `MacroInputs`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::models::MacroInputs;
use crate::utils::snap_to_step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDomain {
    pub label: &'static str,
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
    pub default: Decimal,
}

impl InputDomain {
    pub fn snap(&self, value: Decimal) -> Decimal {
        let snapped = snap_to_step(value, self.min, self.max, self.step);
        if !self.contains(value) {
            warn!("{}: {} вне диапазона [{}, {}], берём {}", self.label, value, self.min, self.max, snapped);
        } else if snapped != value {
            debug!("{}: {} -> {}", self.label, value, snapped);
        }
        snapped
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const RATE: InputDomain = InputDomain {
    label: "기준금리 변화 (%)",
    min: dec!(-2.0),
    max: dec!(2.0),
    step: dec!(0.25),
    default: dec!(0),
};

pub const OIL: InputDomain = InputDomain {
    label: "국제유가 변화율 (%)",
    min: dec!(-20.0),
    max: dec!(20.0),
    step: dec!(1.0),
    default: dec!(0),
};

pub const FX: InputDomain = InputDomain {
    label: "환율 변화율 (%)",
    min: dec!(-10.0),
    max: dec!(10.0),
    step: dec!(0.5),
    default: dec!(0),
};

pub const CONSUMER_INDEX: InputDomain = InputDomain {
    label: "소비심리지수 변화",
    min: dec!(-5.0),
    max: dec!(5.0),
    step: dec!(1.0),
    default: dec!(0),
};

pub const INVESTOR_SENTIMENT: InputDomain = InputDomain {
    label: "투자심리지수 변화",
    min: dec!(-5.0),
    max: dec!(5.0),
    step: dec!(1.0),
    default: dec!(0),
};

impl MacroInputs {
    /// Строит входы из произвольных значений, привязывая каждое к своему ползунку.
    pub fn from_raw(
        rate: Decimal,
        oil: Decimal,
        fx: Decimal,
        consumer_index: Decimal,
        investor_sentiment: Decimal,
    ) -> Self {
        MacroInputs {
            rate: RATE.snap(rate),
            oil: OIL.snap(oil),
            fx: FX.snap(fx),
            consumer_index: CONSUMER_INDEX.snap(consumer_index),
            investor_sentiment: INVESTOR_SENTIMENT.snap(investor_sentiment),
        }
    }

    /// Положение ползунков по умолчанию
    pub fn slider_defaults() -> Self {
        MacroInputs {
            rate: RATE.default,
            oil: OIL.default,
            fx: FX.default,
            consumer_index: CONSUMER_INDEX.default,
            investor_sentiment: INVESTOR_SENTIMENT.default,
        }
    }
}
