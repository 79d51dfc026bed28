use serde::Serialize;

/// Reference turnover for restaurant types missing from the table.
pub const DEFAULT_INDUSTRY_TURNOVER: f64 = 2.5;

/// Restaurant categories with a published average table turnover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantType {
    FastFood,
    Chinese,
    Western,
    Japanese,
    Korean,
    Hotpot,
    Barbecue,
    CafeAndTea,
    Other,
}

impl RestaurantType {
    pub fn ordered() -> [Self; 9] {
        [
            Self::FastFood,
            Self::Chinese,
            Self::Western,
            Self::Japanese,
            Self::Korean,
            Self::Hotpot,
            Self::Barbecue,
            Self::CafeAndTea,
            Self::Other,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FastFood => "快餐",
            Self::Chinese => "中餐",
            Self::Western => "西餐",
            Self::Japanese => "日料",
            Self::Korean => "韩餐",
            Self::Hotpot => "火锅",
            Self::Barbecue => "烧烤",
            Self::CafeAndTea => "咖啡茶饮",
            Self::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label() == label)
    }

    /// Average daily table turns for the category.
    pub fn avg_turnover(self) -> f64 {
        match self {
            Self::FastFood => 4.5,
            Self::Chinese => 2.5,
            Self::Western => 2.0,
            Self::Japanese => 2.2,
            Self::Korean => 2.3,
            Self::Hotpot => 2.8,
            Self::Barbecue => 2.5,
            Self::CafeAndTea => 3.5,
            Self::Other => 2.5,
        }
    }
}

/// Looks up the industry average for a restaurant-type label, defaulting to 2.5.
pub fn industry_avg_turnover(restaurant_type: &str) -> f64 {
    RestaurantType::from_label(restaurant_type)
        .map(RestaurantType::avg_turnover)
        .unwrap_or(DEFAULT_INDUSTRY_TURNOVER)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryTurnover {
    pub restaurant_type: &'static str,
    pub avg_turnover: f64,
}

pub fn industry_turnover_table() -> Vec<IndustryTurnover> {
    RestaurantType::ordered()
        .into_iter()
        .map(|kind| IndustryTurnover {
            restaurant_type: kind.label(),
            avg_turnover: kind.avg_turnover(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_use_reference_values() {
        assert_eq!(industry_avg_turnover("快餐"), 4.5);
        assert_eq!(industry_avg_turnover("中餐"), 2.5);
        assert_eq!(industry_avg_turnover("西餐"), 2.0);
        assert_eq!(industry_avg_turnover("日料"), 2.2);
        assert_eq!(industry_avg_turnover("韩餐"), 2.3);
        assert_eq!(industry_avg_turnover("火锅"), 2.8);
        assert_eq!(industry_avg_turnover("烧烤"), 2.5);
        assert_eq!(industry_avg_turnover("咖啡茶饮"), 3.5);
        assert_eq!(industry_avg_turnover("其他"), 2.5);
    }

    #[test]
    fn unknown_types_default() {
        assert_eq!(industry_avg_turnover("fusion"), DEFAULT_INDUSTRY_TURNOVER);
        assert_eq!(industry_avg_turnover(""), DEFAULT_INDUSTRY_TURNOVER);
        assert!(RestaurantType::from_label("快餐 ").is_none());
    }

    #[test]
    fn labels_round_trip() {
        for kind in RestaurantType::ordered() {
            assert_eq!(RestaurantType::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn table_lists_every_type_once() {
        let table = industry_turnover_table();
        assert_eq!(table.len(), 9);
        assert_eq!(table[0].restaurant_type, "快餐");
        assert_eq!(table[0].avg_turnover, 4.5);
    }
}
