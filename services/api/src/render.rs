use chrono::Local;
use clap::Args;
use site_eval::comparison::{compare_sites, SiteComparison};
use site_eval::error::AppError;
use site_eval::financial::{compute_break_even, FinancialInput, FinancialResult};
use site_eval::import::CandidateImporter;
use site_eval::scoring::{BusinessModel, CompositeScoreResult, DimensionScores, SiteScorer};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Foot traffic score (1-10)
    #[arg(long)]
    pub(crate) traffic: u8,
    /// Storefront condition score (1-10)
    #[arg(long)]
    pub(crate) location: u8,
    /// Customer fit score (1-10)
    #[arg(long)]
    pub(crate) customer_match: u8,
    /// Area heat score (1-10)
    #[arg(long)]
    pub(crate) heat: u8,
    /// Cost control score (1-10)
    #[arg(long)]
    pub(crate) cost: u8,
    /// Competitive environment score (1-10)
    #[arg(long)]
    pub(crate) competition: u8,
    /// Business model label: 快餐, 正餐, 聚餐 or anything else for balanced
    #[arg(long, default_value = "")]
    pub(crate) business_model: String,
}

#[derive(Args, Debug)]
pub(crate) struct BreakEvenArgs {
    /// Average spend per customer
    #[arg(long)]
    pub(crate) price: f64,
    /// Gross margin rate in percent, e.g. 60
    #[arg(long)]
    pub(crate) margin: f64,
    /// Monthly rent
    #[arg(long)]
    pub(crate) rent: f64,
    /// Monthly labor cost
    #[arg(long)]
    pub(crate) labor: f64,
    /// Other monthly costs
    #[arg(long, default_value_t = 0.0)]
    pub(crate) other: f64,
    /// Seat count
    #[arg(long)]
    pub(crate) seats: u32,
    /// Restaurant type label used for the industry turnover benchmark
    #[arg(long, default_value = "其他")]
    pub(crate) restaurant_type: String,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Candidate CSV with address, area, monthly_rent and the six dimension scores
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Business model label used to pick the weight profile
    #[arg(long, default_value = "")]
    pub(crate) business_model: String,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let scores = DimensionScores {
        traffic: args.traffic,
        location: args.location,
        customer_match: args.customer_match,
        heat: args.heat,
        cost: args.cost,
        competition: args.competition,
    };
    let scorer = SiteScorer::for_business_model(&args.business_model);
    let result = scorer.score(&scores)?;
    print!(
        "{}",
        score_report(BusinessModel::from_label(&args.business_model), &result)
    );
    Ok(())
}

pub(crate) fn run_break_even(args: BreakEvenArgs) -> Result<(), AppError> {
    let input = FinancialInput {
        estimated_price: args.price,
        gross_margin_rate: args.margin,
        monthly_rent: args.rent,
        monthly_labor: args.labor,
        other_costs: args.other,
        seats: args.seats,
        restaurant_type: args.restaurant_type,
    };
    let result = compute_break_even(&input)?;
    print!("{}", break_even_report(&input, &result));
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let candidates = CandidateImporter::from_path(&args.csv)?;
    let comparison = compare_sites(&args.business_model, &candidates)?;
    println!("Site comparison ({})", Local::now().date_naive());
    print!("{}", comparison_report(&comparison));
    Ok(())
}

fn score_report(model: BusinessModel, result: &CompositeScoreResult) -> String {
    let narrative = result.narrative();
    let mut out = String::new();
    out.push_str(&format!("Composite score ({})\n", model.key()));
    out.push_str(&format!(
        "  Total: {:.1} ({})\n",
        result.total_score,
        result.recommendation.label()
    ));
    out.push_str(&format!(
        "  {}: {}\n",
        narrative.title, narrative.description
    ));
    out.push_str("  Dimensions:\n");
    for entry in &result.dimension_scores {
        out.push_str(&format!(
            "    - {} score {} x weight {}% = {:.1}\n",
            entry.name, entry.score, entry.weight, entry.weighted_score
        ));
    }
    out
}

fn break_even_report(input: &FinancialInput, result: &FinancialResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Break-even estimate ({})\n", input.restaurant_type));
    out.push_str(&format!(
        "  Daily break-even revenue: {:.2}\n",
        result.daily_break_even
    ));
    out.push_str(&format!(
        "  Break-even table turnover: {:.2} (industry average {})\n",
        result.daily_turnover, result.industry_avg_turnover
    ));
    out.push_str(&format!(
        "  Risk: {} - {}\n",
        result.risk_level.label(),
        result.risk_description
    ));
    out
}

fn comparison_report(comparison: &SiteComparison) -> String {
    let mut out = String::new();
    if comparison.ranking.is_empty() {
        out.push_str("  No candidate sites supplied\n");
        return out;
    }
    for site in &comparison.ranking {
        out.push_str(&format!(
            "  #{} {} {:.1} ({}) rent/sqm {:.2}\n",
            site.rank,
            site.address,
            site.total_score,
            site.recommendation.label(),
            site.rent_per_sqm
        ));
    }
    if let Some(conclusion) = &comparison.conclusion {
        out.push_str(&format!("  {}\n", conclusion));
    }
    out
}
