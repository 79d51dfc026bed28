use super::weights::{WeightProfile, WEIGHT_TOTAL};
use crate::validation::{round_to_cents, ScoreViolation, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_DIMENSION_SCORE: u8 = 1;
pub const MAX_DIMENSION_SCORE: u8 = 10;

const RECOMMENDED_THRESHOLD: f64 = 75.0;
const CAUTIOUS_THRESHOLD: f64 = 60.0;

/// The six evaluation dimensions, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Traffic,
    Location,
    CustomerMatch,
    Heat,
    Cost,
    Competition,
}

impl Dimension {
    pub fn ordered() -> [Self; 6] {
        [
            Self::Traffic,
            Self::Location,
            Self::CustomerMatch,
            Self::Heat,
            Self::Cost,
            Self::Competition,
        ]
    }

    /// Display name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Traffic => "客流量",
            Self::Location => "铺位条件",
            Self::CustomerMatch => "客群匹配",
            Self::Heat => "区域热力",
            Self::Cost => "成本控制",
            Self::Competition => "竞争环境",
        }
    }

    /// Wire name of the matching score and weight fields.
    pub fn field(self) -> &'static str {
        match self {
            Self::Traffic => "traffic",
            Self::Location => "location",
            Self::CustomerMatch => "customerMatch",
            Self::Heat => "heat",
            Self::Cost => "cost",
            Self::Competition => "competition",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Caller-assessed 1-10 ratings for a candidate site. `cost` and `competition` are inverted:
/// a higher rating means a lighter rent burden or a less saturated market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub traffic: u8,
    pub location: u8,
    pub customer_match: u8,
    pub heat: u8,
    pub cost: u8,
    pub competition: u8,
}

impl DimensionScores {
    pub fn uniform(score: u8) -> Self {
        Self {
            traffic: score,
            location: score,
            customer_match: score,
            heat: score,
            cost: score,
            competition: score,
        }
    }

    pub fn score_for(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Traffic => self.traffic,
            Dimension::Location => self.location,
            Dimension::CustomerMatch => self.customer_match,
            Dimension::Heat => self.heat,
            Dimension::Cost => self.cost,
            Dimension::Competition => self.competition,
        }
    }
}

/// Three-tier verdict attached to every composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    Recommended,
    Cautious,
    NotRecommended,
}

impl Recommendation {
    /// Tier lower bounds are inclusive: 75.00 is recommended, 60.00 is cautious.
    pub fn from_total_score(total_score: f64) -> Self {
        if total_score >= RECOMMENDED_THRESHOLD {
            Self::Recommended
        } else if total_score >= CAUTIOUS_THRESHOLD {
            Self::Cautious
        } else {
            Self::NotRecommended
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Cautious => "cautious",
            Self::NotRecommended => "notRecommended",
        }
    }
}

/// Audit line for one dimension of a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    pub name: String,
    pub score: u8,
    pub weight: u32,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScoreResult {
    pub total_score: f64,
    pub recommendation: Recommendation,
    pub dimension_scores: Vec<DimensionBreakdown>,
}

/// Computes the 10-100 composite score for a site.
///
/// Each dimension contributes `(score / 10) * weight`. The contributions are accumulated as
/// integer `score * weight` products and divided by ten once, so the total is independent of
/// summation order. The total is rounded to two decimals (ties away from zero) and the
/// recommendation tier is taken from the rounded value.
pub fn compute_score(
    scores: &DimensionScores,
    weights: &WeightProfile,
) -> Result<CompositeScoreResult, ValidationError> {
    validate(scores, weights)?;

    let mut points: u64 = 0;
    let dimension_scores: Vec<DimensionBreakdown> = Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let score = scores.score_for(dimension);
            let weight = weights.weight_for(dimension);
            let product = u64::from(score) * u64::from(weight);
            points += product;
            DimensionBreakdown {
                dimension,
                name: dimension.label().to_string(),
                score,
                weight,
                weighted_score: product as f64 / 10.0,
            }
        })
        .collect();

    let total_score = round_to_cents(points as f64 / 10.0);

    Ok(CompositeScoreResult {
        total_score,
        recommendation: Recommendation::from_total_score(total_score),
        dimension_scores,
    })
}

fn validate(scores: &DimensionScores, weights: &WeightProfile) -> Result<(), ScoreViolation> {
    for dimension in Dimension::ordered() {
        let value = scores.score_for(dimension);
        if !(MIN_DIMENSION_SCORE..=MAX_DIMENSION_SCORE).contains(&value) {
            return Err(ScoreViolation::ScoreOutOfRange { dimension, value });
        }
    }

    let total = weights.total();
    if total != WEIGHT_TOTAL {
        return Err(ScoreViolation::WeightSum { total });
    }

    Ok(())
}

/// Scorer bound to one weight profile, for evaluating several sites of the same restaurant.
#[derive(Debug, Clone)]
pub struct SiteScorer {
    weights: WeightProfile,
}

impl SiteScorer {
    pub fn new(weights: WeightProfile) -> Self {
        Self { weights }
    }

    pub fn for_business_model(label: &str) -> Self {
        Self::new(super::resolve_weights(label))
    }

    pub fn weights(&self) -> &WeightProfile {
        &self.weights
    }

    pub fn score(&self, scores: &DimensionScores) -> Result<CompositeScoreResult, ValidationError> {
        compute_score(scores, &self.weights)
    }
}
