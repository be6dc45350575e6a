// src/models.rs
use rust_decimal::Decimal;
use std::fmt;

/// Сценарий макро-шока: пять входов, снятых с ползунков за одну перерисовку.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacroInputs {
    pub rate: Decimal,               // изменение ключевой ставки, %
    pub oil: Decimal,                // изменение цены нефти, %
    pub fx: Decimal,                 // изменение курса, %
    pub consumer_index: Decimal,
    pub investor_sentiment: Decimal, // только для отчёта, в формулы не входит
}

impl MacroInputs {
    /// Вектор входов в порядке столбцов таблицы коэффициентов.
    pub fn as_vector(&self) -> [Decimal; 5] {
        [
            self.rate,
            self.oil,
            self.fx,
            self.consumer_index,
            self.investor_sentiment,
        ]
    }
}

/// Фиксированный набор секторов. Порядок вариантов = порядок вывода.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    Banking,
    Construction,
    Energy,
    IT,
    ConsumerGoods,
    Semiconductors,
}

impl Sector {
    pub const ALL: [Sector; 6] = [
        Sector::Banking,
        Sector::Construction,
        Sector::Energy,
        Sector::IT,
        Sector::ConsumerGoods,
        Sector::Semiconductors,
    ];

    /// Название для отчёта
    pub fn display_name(&self) -> &'static str {
        match self {
            Sector::Banking => "은행",
            Sector::Construction => "건설",
            Sector::Energy => "에너지",
            Sector::IT => "IT",
            Sector::ConsumerGoods => "소비재",
            Sector::Semiconductors => "반도체",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorScore {
    pub sector: Sector,
    pub impact: Decimal, // уже округлено до 2 знаков
}

/// Итог выбора сектора. `None` = ни один сектор не в плюсе.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Favorable(Sector),
    None,
}

impl Recommendation {
    pub fn sector(&self) -> Option<Sector> {
        match self {
            Recommendation::Favorable(s) => Some(*s),
            Recommendation::None => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Favorable(s) => write!(f, "{}", s),
            Recommendation::None => write!(f, "없음"),
        }
    }
}
