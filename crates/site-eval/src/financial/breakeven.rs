use super::industry::industry_avg_turnover;
use crate::validation::{
    ensure_margin_rate, ensure_non_negative, ensure_positive, ensure_seats, round_to_cents,
    ValidationError,
};
use serde::{Deserialize, Serialize};

/// Month length used to spread fixed costs; not calendar aware.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Share of seats assumed occupied in one seating round.
pub const EFFECTIVE_OCCUPANCY: f64 = 0.7;

const LOW_RISK_RATIO: f64 = 0.8;
const NEAR_AVERAGE_RATIO: f64 = 1.2;
const ELEVATED_RATIO: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInput {
    pub estimated_price: f64,
    pub gross_margin_rate: f64,
    pub monthly_rent: f64,
    pub monthly_labor: f64,
    #[serde(default)]
    pub other_costs: f64,
    pub seats: u32,
    pub restaurant_type: String,
}

impl FinancialInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("estimatedPrice", self.estimated_price)?;
        ensure_margin_rate(self.gross_margin_rate)?;
        ensure_non_negative("monthlyRent", self.monthly_rent)?;
        ensure_non_negative("monthlyLabor", self.monthly_labor)?;
        ensure_non_negative("otherCosts", self.other_costs)?;
        ensure_seats(self.seats)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialResult {
    pub daily_break_even: f64,
    pub daily_turnover: f64,
    pub industry_avg_turnover: f64,
    pub risk_level: RiskLevel,
    pub risk_description: String,
}

/// Daily revenue and table turnover needed to cover fixed costs, with a risk tier taken from
/// the ratio of that turnover to the industry average for the restaurant type.
pub fn compute_break_even(input: &FinancialInput) -> Result<FinancialResult, ValidationError> {
    input.validate()?;

    let monthly_fixed_costs = input.monthly_rent + input.monthly_labor + input.other_costs;
    let daily_fixed_costs = monthly_fixed_costs / DAYS_PER_MONTH;
    let margin_rate = input.gross_margin_rate / 100.0;
    let daily_break_even = daily_fixed_costs / margin_rate;
    let daily_customers = daily_break_even / input.estimated_price;
    let effective_seats = f64::from(input.seats) * EFFECTIVE_OCCUPANCY;
    let daily_turnover = daily_customers / effective_seats;

    let industry_avg = industry_avg_turnover(&input.restaurant_type);
    let (risk_level, risk_description) = classify_risk(daily_turnover, industry_avg);

    Ok(FinancialResult {
        daily_break_even: round_to_cents(daily_break_even),
        daily_turnover: round_to_cents(daily_turnover),
        industry_avg_turnover: industry_avg,
        risk_level,
        risk_description,
    })
}

fn classify_risk(daily_turnover: f64, industry_avg: f64) -> (RiskLevel, String) {
    let ratio = daily_turnover / industry_avg;

    if ratio <= LOW_RISK_RATIO {
        (
            RiskLevel::Low,
            "保本翻台率低于行业平均水平，盈利空间较大".to_string(),
        )
    } else if ratio <= NEAR_AVERAGE_RATIO {
        (
            RiskLevel::Medium,
            "保本翻台率接近行业平均水平，需要精细化运营".to_string(),
        )
    } else if ratio <= ELEVATED_RATIO {
        (
            RiskLevel::Medium,
            "保本翻台率略高于行业平均，存在一定经营压力".to_string(),
        )
    } else {
        (
            RiskLevel::High,
            format!(
                "保本翻台率({:.1}次)远超行业平均({}次)，高风险预警！建议重新评估成本结构或选址",
                daily_turnover, industry_avg
            ),
        )
    }
}
