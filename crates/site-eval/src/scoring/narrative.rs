use super::composite::CompositeScoreResult;
use serde::Serialize;

const STRONG_THRESHOLD: f64 = 85.0;
const RECOMMEND_THRESHOLD: f64 = 75.0;
const CAUTION_THRESHOLD: f64 = 60.0;

/// Report headline for a composite score.
///
/// Four tiers where [`super::Recommendation`] has three: 85 and above reads as a strong
/// recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn narrative_for(total_score: f64) -> Narrative {
    if total_score >= STRONG_THRESHOLD {
        Narrative {
            title: "强烈推荐",
            description: "该选址各项指标优秀，建议优先考虑。客流充足、位置优越、成本可控，是理想的开店位置。",
        }
    } else if total_score >= RECOMMEND_THRESHOLD {
        Narrative {
            title: "推荐",
            description: "该选址综合条件良好，可以考虑。建议关注个别较低分项，针对性优化经营策略。",
        }
    } else if total_score >= CAUTION_THRESHOLD {
        Narrative {
            title: "谨慎考虑",
            description: "该选址存在一定风险因素，主要风险点可能在于租金占比过高或客流不足。建议与房东协商租金或调整经营模式。",
        }
    } else {
        Narrative {
            title: "建议放弃",
            description: "该选址综合评分较低，可能存在工程条件不符、客流严重不足或成本过高等问题。建议寻找其他更合适的位置。",
        }
    }
}

impl CompositeScoreResult {
    pub fn narrative(&self) -> Narrative {
        narrative_for(self.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_four_tiers() {
        assert_eq!(narrative_for(88.0).title, "强烈推荐");
        assert_eq!(narrative_for(78.0).title, "推荐");
        assert_eq!(narrative_for(65.0).title, "谨慎考虑");
        assert_eq!(narrative_for(55.0).title, "建议放弃");
    }

    #[test]
    fn tier_edges_belong_to_the_upper_tier() {
        assert_eq!(narrative_for(85.0).title, "强烈推荐");
        assert_eq!(narrative_for(84.99).title, "推荐");
        assert_eq!(narrative_for(75.0).title, "推荐");
        assert_eq!(narrative_for(74.99).title, "谨慎考虑");
        assert_eq!(narrative_for(60.0).title, "谨慎考虑");
        assert_eq!(narrative_for(59.99).title, "建议放弃");
    }

    #[test]
    fn strong_and_plain_recommendations_share_a_tag() {
        use crate::scoring::Recommendation;

        assert_eq!(
            Recommendation::from_total_score(90.0),
            Recommendation::from_total_score(76.0)
        );
        assert_ne!(narrative_for(90.0), narrative_for(76.0));
    }
}
