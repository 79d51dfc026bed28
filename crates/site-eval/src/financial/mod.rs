//! Break-even and investment arithmetic for a candidate site.

mod breakeven;
mod industry;
mod projection;

pub use breakeven::{
    compute_break_even, FinancialInput, FinancialResult, RiskLevel, DAYS_PER_MONTH,
    EFFECTIVE_OCCUPANCY,
};
pub use industry::{
    industry_avg_turnover, industry_turnover_table, IndustryTurnover, RestaurantType,
    DEFAULT_INDUSTRY_TURNOVER,
};
pub use projection::{project_investment, ProjectionInput, ProjectionResult};
