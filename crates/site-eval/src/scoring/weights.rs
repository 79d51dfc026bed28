use super::composite::Dimension;
use serde::{Deserialize, Serialize};

/// Every valid profile distributes exactly this many points across the six dimensions.
pub const WEIGHT_TOTAL: u64 = 100;

/// Traffic dominates for quick-service concepts.
pub const FAST_FOOD_WEIGHTS: WeightProfile = WeightProfile {
    traffic: 60,
    location: 10,
    customer_match: 10,
    heat: 5,
    cost: 10,
    competition: 5,
};

/// Storefront, neighbourhood maturity and rent matter most for sit-down dining.
pub const DINE_IN_WEIGHTS: WeightProfile = WeightProfile {
    traffic: 15,
    location: 25,
    customer_match: 15,
    heat: 15,
    cost: 20,
    competition: 10,
};

pub const BALANCED_WEIGHTS: WeightProfile = WeightProfile {
    traffic: 20,
    location: 20,
    customer_match: 20,
    heat: 15,
    cost: 15,
    competition: 10,
};

/// Operating model of the restaurant, which selects the weight profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessModel {
    FastFood,
    DineIn,
    Balanced,
}

impl BusinessModel {
    /// Maps the stored business-model label onto a model. Unknown labels, including `均衡`
    /// and the empty string, fall back to [`BusinessModel::Balanced`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "快餐" => Self::FastFood,
            "正餐" | "聚餐" => Self::DineIn,
            _ => Self::Balanced,
        }
    }

    pub fn ordered() -> [Self; 3] {
        [Self::FastFood, Self::DineIn, Self::Balanced]
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::FastFood => "fastFood",
            Self::DineIn => "dineIn",
            Self::Balanced => "balanced",
        }
    }

    pub fn weights(self) -> WeightProfile {
        match self {
            Self::FastFood => FAST_FOOD_WEIGHTS,
            Self::DineIn => DINE_IN_WEIGHTS,
            Self::Balanced => BALANCED_WEIGHTS,
        }
    }
}

/// Per-dimension weights, aligned field for field with [`super::DimensionScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightProfile {
    pub traffic: u32,
    pub location: u32,
    pub customer_match: u32,
    pub heat: u32,
    pub cost: u32,
    pub competition: u32,
}

impl WeightProfile {
    pub fn weight_for(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Traffic => self.traffic,
            Dimension::Location => self.location,
            Dimension::CustomerMatch => self.customer_match,
            Dimension::Heat => self.heat,
            Dimension::Cost => self.cost,
            Dimension::Competition => self.competition,
        }
    }

    pub fn total(&self) -> u64 {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| u64::from(self.weight_for(dimension)))
            .sum()
    }
}

/// Resolves the canonical weight profile for a business-model label. Never fails.
pub fn resolve_weights(business_model: &str) -> WeightProfile {
    BusinessModel::from_label(business_model).weights()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_profiles_sum_to_one_hundred() {
        for model in BusinessModel::ordered() {
            assert_eq!(model.weights().total(), WEIGHT_TOTAL, "{}", model.key());
        }
    }

    #[test]
    fn fast_food_profile_is_traffic_heavy() {
        let weights = resolve_weights("快餐");
        assert_eq!(weights, FAST_FOOD_WEIGHTS);
        assert_eq!(weights.traffic, 60);
        assert_eq!(weights.cost, 10);
        assert_eq!(weights.location, 10);
    }

    #[test]
    fn regular_and_group_dining_share_the_dine_in_profile() {
        assert_eq!(resolve_weights("正餐"), DINE_IN_WEIGHTS);
        assert_eq!(resolve_weights("聚餐"), DINE_IN_WEIGHTS);
        assert_eq!(DINE_IN_WEIGHTS.location, 25);
        assert_eq!(DINE_IN_WEIGHTS.cost, 20);
    }

    #[test]
    fn unknown_labels_fall_back_to_balanced() {
        for label in ["均衡", "其他", "", "fastFood", " 快餐", "FAST"] {
            assert_eq!(resolve_weights(label), BALANCED_WEIGHTS, "label {label:?}");
        }
    }

    #[test]
    fn weight_lookup_follows_dimension_slots() {
        let weights = DINE_IN_WEIGHTS;
        let collected: Vec<u32> = Dimension::ordered()
            .into_iter()
            .map(|dimension| weights.weight_for(dimension))
            .collect();
        assert_eq!(collected, vec![15, 25, 15, 15, 20, 10]);
    }

    #[test]
    fn profile_deserializes_from_camel_case() {
        let weights: WeightProfile = serde_json::from_str(
            r#"{"traffic":20,"location":20,"customerMatch":20,"heat":15,"cost":15,"competition":10}"#,
        )
        .expect("weights parse");
        assert_eq!(weights, BALANCED_WEIGHTS);
    }
}
