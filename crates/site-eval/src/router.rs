//! HTTP binding of the evaluation engines.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::comparison::{compare_sites, CandidateSite, SiteComparison};
use crate::competition::{assess_competition, CompetitionAssessment};
use crate::error::AppError;
use crate::financial::{
    compute_break_even, industry_turnover_table, project_investment, FinancialInput,
    FinancialResult, IndustryTurnover, ProjectionInput, ProjectionResult,
};
use crate::scoring::{
    compute_score, BusinessModel, CompositeScoreResult, DimensionScores, Narrative,
    WeightProfile,
};
use crate::survey::{summarize_occupancy, BrandOccupancy, OccupancySummary};
use crate::validation::ValidationError;

/// Router exposing scoring, break-even and the supporting reference data.
pub fn evaluation_router() -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/breakeven", post(break_even_handler))
        .route("/api/v1/projection", post(projection_handler))
        .route("/api/v1/competition", post(competition_handler))
        .route("/api/v1/survey/occupancy", post(occupancy_handler))
        .route("/api/v1/compare", post(compare_handler))
        .route("/api/v1/reference/turnover", get(turnover_reference_handler))
        .route("/api/v1/reference/weights", get(weights_reference_handler))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub dimension_scores: DimensionScores,
    #[serde(default)]
    pub business_model: String,
    /// Custom profile overriding the one resolved from `business_model`.
    #[serde(default)]
    pub weights: Option<WeightProfile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: CompositeScoreResult,
    pub business_model: BusinessModel,
    pub weights: WeightProfile,
    pub narrative: Narrative,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRequest {
    pub same_category_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OccupancyRequest {
    #[serde(default)]
    pub brands: Vec<BrandOccupancy>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub business_model: String,
    pub candidates: Vec<CandidateSite>,
}

fn rejected(err: ValidationError) -> AppError {
    warn!(kind = err.kind(), field = err.field(), "rejected input: {}", err);
    AppError::Validation(err)
}

pub(crate) async fn score_handler(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let business_model = BusinessModel::from_label(&request.business_model);
    let weights = request
        .weights
        .unwrap_or_else(|| business_model.weights());
    let result = compute_score(&request.dimension_scores, &weights).map_err(rejected)?;

    debug!(
        model = business_model.key(),
        total_score = result.total_score,
        recommendation = result.recommendation.label(),
        "site scored"
    );

    Ok(Json(ScoreResponse {
        narrative: result.narrative(),
        result,
        business_model,
        weights,
    }))
}

pub(crate) async fn break_even_handler(
    Json(input): Json<FinancialInput>,
) -> Result<Json<FinancialResult>, AppError> {
    let result = compute_break_even(&input).map_err(rejected)?;

    debug!(
        restaurant_type = %input.restaurant_type,
        daily_break_even = result.daily_break_even,
        daily_turnover = result.daily_turnover,
        risk = result.risk_level.label(),
        "break-even computed"
    );

    Ok(Json(result))
}

pub(crate) async fn projection_handler(
    Json(input): Json<ProjectionInput>,
) -> Result<Json<ProjectionResult>, AppError> {
    let result = project_investment(&input).map_err(rejected)?;
    debug!(
        monthly_profit = result.monthly_profit,
        payback_months = ?result.payback_months,
        "investment projected"
    );
    Ok(Json(result))
}

pub(crate) async fn competition_handler(
    Json(request): Json<CompetitionRequest>,
) -> Json<CompetitionAssessment> {
    Json(assess_competition(request.same_category_count))
}

pub(crate) async fn occupancy_handler(
    Json(request): Json<OccupancyRequest>,
) -> Result<Json<OccupancySummary>, AppError> {
    let summary = summarize_occupancy(&request.brands).map_err(rejected)?;
    Ok(Json(summary))
}

pub(crate) async fn compare_handler(
    Json(request): Json<CompareRequest>,
) -> Result<Json<SiteComparison>, AppError> {
    let comparison =
        compare_sites(&request.business_model, &request.candidates).map_err(rejected)?;
    debug!(
        candidates = comparison.ranking.len(),
        best = ?comparison.best_address,
        "sites compared"
    );
    Ok(Json(comparison))
}

pub(crate) async fn turnover_reference_handler() -> Json<Vec<IndustryTurnover>> {
    Json(industry_turnover_table())
}

pub(crate) async fn weights_reference_handler() -> Json<BTreeMap<&'static str, WeightProfile>> {
    Json(
        BusinessModel::ordered()
            .into_iter()
            .map(|model| (model.key(), model.weights()))
            .collect(),
    )
}
