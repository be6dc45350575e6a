// src/report.rs

//! Текстовый вывод дашборда.

use std::fmt::Write;

use crate::dashboard::{DashboardView, EquityPanel, Panel};
use crate::market::{Fundamentals, Period};
use crate::models::{MacroInputs, Recommendation, SectorScore};

pub const TITLE: &str = "🧠 시장 변동 시뮬레이터 기반 투자 전략 분석";

/// Баннер с рекомендацией: позитивный или защитный
pub fn banner(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Favorable(sector) => {
            format!("✅ 유리한 산업: {} → 관련 ETF/테마주에 주목", sector)
        }
        Recommendation::None => {
            "📉 모든 산업이 부정적 영향을 받는 상황입니다. 방어적 포트폴리오를 고려하세요.".to_string()
        }
    }
}

pub fn score_table(scores: &[SectorScore]) -> String {
    let mut out = String::new();
    for s in scores {
        let _ = writeln!(out, "  {:<8} {:>8.2}", s.sector.display_name(), s.impact);
    }
    out
}

/// Сводка: все пять входов как есть + рекомендованный сектор или "없음"
pub fn summary(inputs: &MacroInputs, recommendation: &Recommendation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "- 기준금리 변화: {}%", inputs.rate.normalize());
    let _ = writeln!(out, "- 유가 변화: {}%", inputs.oil.normalize());
    let _ = writeln!(out, "- 환율 변화: {}%", inputs.fx.normalize());
    let _ = writeln!(out, "- 소비심리 변화: {}", inputs.consumer_index.normalize());
    let _ = writeln!(out, "- 투자심리 변화: {}", inputs.investor_sentiment.normalize());
    let _ = writeln!(out);
    let _ = writeln!(out, "예상 유리 산업: {}", recommendation);
    if let Some(sector) = recommendation.sector() {
        let _ = writeln!(out, "👉 관련 ETF: KODEX {0}, TIGER {0}", sector);
    }
    out
}

fn fundamentals_line(f: &Fundamentals) -> String {
    format!(
        "PER: {} | PBR: {} | 배당수익률: {} | 시가총액: {}",
        f.trailing_pe, f.price_to_book, f.dividend_yield, f.market_cap
    )
}

fn equity_section(panel: &EquityPanel, period: Period) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📌 {} ({})", panel.name, panel.ticker);

    match &panel.fundamentals {
        Panel::Ready(f) => {
            let _ = writeln!(out, "  {}", fundamentals_line(f));
        }
        Panel::Unavailable(reason) => {
            let _ = writeln!(out, "  ⚠ 지표를 불러올 수 없습니다: {}", reason);
        }
    }

    let title = match period {
        Period::Monthly => "월간 수익률 (%)",
        Period::Quarterly => "분기 수익률 (%)",
    };
    match &panel.returns {
        Panel::Ready(returns) if returns.is_empty() => {
            let _ = writeln!(out, "  {}: 데이터 부족", title);
        }
        Panel::Ready(returns) => {
            let _ = writeln!(out, "  {}:", title);
            for r in returns {
                let _ = writeln!(out, "    {:<8} {:>8.2}", r.period, r.return_pct);
            }
        }
        Panel::Unavailable(reason) => {
            let _ = writeln!(out, "  ⚠ 주가 데이터를 불러올 수 없습니다: {}", reason);
        }
    }
    out
}

/// Весь отчёт целиком
pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", TITLE);

    let _ = writeln!(out, "📊 산업별 영향 예측");
    out.push_str(&score_table(&view.scores));

    let _ = writeln!(out, "\n📈 추천 투자 전략");
    let _ = writeln!(out, "{}", banner(&view.recommendation));

    let _ = writeln!(out, "\n📝 요약 리포트");
    out.push_str(&summary(&view.inputs, &view.recommendation));

    for panel in &view.equities {
        let _ = writeln!(out);
        out.push_str(&equity_section(panel, view.period));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{Metric, PeriodReturn};
    use crate::models::Sector;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_banner_wording() {
        assert!(banner(&Recommendation::Favorable(Sector::Energy)).contains("유리한 산업: 에너지"));
        assert!(banner(&Recommendation::None).contains("방어적 포트폴리오"));
    }

    #[test]
    fn test_summary_echoes_inputs() {
        let inputs = MacroInputs {
            rate: dec!(-0.25),
            oil: dec!(12),
            fx: dec!(1.5),
            consumer_index: dec!(-3),
            investor_sentiment: dec!(4),
        };
        let s = summary(&inputs, &Recommendation::None);
        assert!(s.contains("기준금리 변화: -0.25%"));
        assert!(s.contains("유가 변화: 12%"));
        assert!(s.contains("환율 변화: 1.5%"));
        assert!(s.contains("소비심리 변화: -3"));
        assert!(s.contains("투자심리 변화: 4"));
        assert!(s.contains("예상 유리 산업: 없음"));
        assert!(!s.contains("KODEX"));

        let s = summary(&inputs, &Recommendation::Favorable(Sector::IT));
        assert!(s.contains("KODEX IT, TIGER IT"));
    }

    #[test]
    fn test_equity_section_degrades() {
        let panel = EquityPanel {
            ticker: "005930.KS".into(),
            name: "삼성전자".into(),
            fundamentals: Panel::Ready(Fundamentals {
                trailing_pe: Metric::from(dec!(13.4)),
                ..Default::default()
            }),
            returns: Panel::Unavailable("timeout".into()),
        };
        let s = equity_section(&panel, Period::Monthly);
        assert!(s.contains("PER: 13.4 | PBR: N/A"));
        assert!(s.contains("주가 데이터를 불러올 수 없습니다: timeout"));

        let panel = EquityPanel {
            returns: Panel::Ready(vec![PeriodReturn {
                period: "2025Q2".into(),
                end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
                return_pct: dec!(-4.5),
            }]),
            ..panel
        };
        let s = equity_section(&panel, Period::Quarterly);
        assert!(s.contains("분기 수익률 (%):"));
        assert!(s.contains("2025Q2"));
        assert!(s.contains("-4.50"));
    }
}
