use super::breakeven::{DAYS_PER_MONTH, EFFECTIVE_OCCUPANCY};
use crate::validation::{
    ensure_margin_rate, ensure_non_negative, ensure_positive, ensure_seats, round_to_cents,
    ValidationError,
};
use serde::{Deserialize, Serialize};

/// Inputs for the monthly profit and payback projection of a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub estimated_price: f64,
    pub gross_margin_rate: f64,
    pub monthly_rent: f64,
    pub monthly_labor: f64,
    #[serde(default)]
    pub other_costs: f64,
    pub seats: u32,
    pub estimated_monthly_revenue: f64,
    pub estimated_investment: f64,
}

impl ProjectionInput {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("estimatedPrice", self.estimated_price)?;
        ensure_margin_rate(self.gross_margin_rate)?;
        ensure_non_negative("monthlyRent", self.monthly_rent)?;
        ensure_non_negative("monthlyLabor", self.monthly_labor)?;
        ensure_non_negative("otherCosts", self.other_costs)?;
        ensure_seats(self.seats)?;
        ensure_non_negative("estimatedMonthlyRevenue", self.estimated_monthly_revenue)?;
        ensure_non_negative("estimatedInvestment", self.estimated_investment)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub monthly_fixed_costs: f64,
    /// Monthly revenue at which gross profit covers fixed costs.
    pub break_even_revenue: f64,
    pub daily_break_even: f64,
    pub daily_turnover: f64,
    /// Negative when the site runs at a loss.
    pub monthly_profit: f64,
    /// Whole months to recover the investment; absent when the site never pays back.
    pub payback_months: Option<u32>,
    /// Annual return on investment in percent; absent without an investment figure.
    pub annual_roi: Option<f64>,
}

pub fn project_investment(input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
    input.validate()?;

    let margin_rate = input.gross_margin_rate / 100.0;
    let monthly_fixed_costs = input.monthly_rent + input.monthly_labor + input.other_costs;
    let break_even_revenue = monthly_fixed_costs / margin_rate;
    let daily_break_even = break_even_revenue / DAYS_PER_MONTH;
    let effective_seats = f64::from(input.seats) * EFFECTIVE_OCCUPANCY;
    let daily_turnover = daily_break_even / (effective_seats * input.estimated_price);
    let monthly_profit = input.estimated_monthly_revenue * margin_rate - monthly_fixed_costs;

    let payback_months = if monthly_profit > 0.0 && input.estimated_investment > 0.0 {
        Some((input.estimated_investment / monthly_profit).ceil() as u32)
    } else {
        None
    };

    let annual_roi = if input.estimated_investment > 0.0 {
        Some(round_to_cents(
            monthly_profit * 12.0 / input.estimated_investment * 100.0,
        ))
    } else {
        None
    };

    Ok(ProjectionResult {
        monthly_fixed_costs: round_to_cents(monthly_fixed_costs),
        break_even_revenue: round_to_cents(break_even_revenue),
        daily_break_even: round_to_cents(daily_break_even),
        daily_turnover: round_to_cents(daily_turnover),
        monthly_profit: round_to_cents(monthly_profit),
        payback_months,
        annual_roi,
    })
}
