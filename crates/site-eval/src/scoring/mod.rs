//! Weighted multi-dimension site scoring.

mod composite;
mod narrative;
mod weights;

pub use composite::{
    compute_score, CompositeScoreResult, Dimension, DimensionBreakdown, DimensionScores,
    Recommendation, SiteScorer, MAX_DIMENSION_SCORE, MIN_DIMENSION_SCORE,
};
pub use narrative::{narrative_for, Narrative};
pub use weights::{
    resolve_weights, BusinessModel, WeightProfile, BALANCED_WEIGHTS, DINE_IN_WEIGHTS,
    FAST_FOOD_WEIGHTS, WEIGHT_TOTAL,
};
