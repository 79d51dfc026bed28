//! Side-by-side ranking of candidate sites for one restaurant.

use crate::scoring::{
    BusinessModel, DimensionBreakdown, DimensionScores, Recommendation, SiteScorer, WeightProfile,
};
use crate::validation::{ensure_non_negative, ensure_positive, round_to_cents, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSite {
    pub address: String,
    /// Floor area in square metres.
    pub area: f64,
    pub monthly_rent: f64,
    pub dimension_scores: DimensionScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSite {
    pub rank: usize,
    pub address: String,
    pub total_score: f64,
    pub recommendation: Recommendation,
    pub rent_per_sqm: f64,
    pub dimension_scores: Vec<DimensionBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteComparison {
    pub business_model: BusinessModel,
    pub weights: WeightProfile,
    pub ranking: Vec<RankedSite>,
    pub best_address: Option<String>,
    pub conclusion: Option<String>,
}

/// Scores every candidate with the profile for `business_model` and ranks them by total
/// score, highest first. Ties keep their input order.
pub fn compare_sites(
    business_model: &str,
    candidates: &[CandidateSite],
) -> Result<SiteComparison, ValidationError> {
    let model = BusinessModel::from_label(business_model);
    let scorer = SiteScorer::new(model.weights());

    let mut ranking = candidates
        .iter()
        .map(|candidate| rank_candidate(&scorer, candidate))
        .collect::<Result<Vec<_>, _>>()?;

    ranking.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    for (index, entry) in ranking.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    let conclusion = ranking
        .first()
        .map(|best| conclusion_for(best, ranking.len()));

    Ok(SiteComparison {
        business_model: model,
        weights: *scorer.weights(),
        best_address: ranking.first().map(|best| best.address.clone()),
        conclusion,
        ranking,
    })
}

fn rank_candidate(
    scorer: &SiteScorer,
    candidate: &CandidateSite,
) -> Result<RankedSite, ValidationError> {
    let area = ensure_positive("area", candidate.area)?;
    let rent = ensure_non_negative("monthlyRent", candidate.monthly_rent)?;
    let result = scorer.score(&candidate.dimension_scores)?;

    Ok(RankedSite {
        rank: 0,
        address: candidate.address.clone(),
        total_score: result.total_score,
        recommendation: result.recommendation,
        rent_per_sqm: round_to_cents(rent / area),
        dimension_scores: result.dimension_scores,
    })
}

fn conclusion_for(best: &RankedSite, compared: usize) -> String {
    let verdict = match best.recommendation {
        Recommendation::Recommended => "各项指标表现优秀，建议优先考虑。",
        Recommendation::Cautious => "整体条件尚可，但仍需谨慎评估风险因素。",
        Recommendation::NotRecommended => "但综合评分偏低，建议继续寻找更优选址。",
    };
    format!(
        "在所选的 {} 个选址中，「{}」综合评分最高（{:.0}分），{}",
        compared, best.address, best.total_score, verdict
    )
}
