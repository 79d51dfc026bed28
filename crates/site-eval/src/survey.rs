//! Occupancy survey of neighbouring restaurants, observed at six meal slots.

use crate::validation::{round_to_cents, FinancialViolation, ValidationError};
use serde::{Deserialize, Serialize};

const MAX_OCCUPANCY: f64 = 100.0;

/// Observed seat occupancy (percent) of one nearby brand. Unobserved slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandOccupancy {
    pub name: String,
    pub mon_lunch: Option<f64>,
    pub mon_dinner: Option<f64>,
    pub fri_lunch: Option<f64>,
    pub fri_dinner: Option<f64>,
    pub sat_lunch: Option<f64>,
    pub sat_dinner: Option<f64>,
}

impl BrandOccupancy {
    fn slots(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("monLunch", self.mon_lunch),
            ("monDinner", self.mon_dinner),
            ("friLunch", self.fri_lunch),
            ("friDinner", self.fri_dinner),
            ("satLunch", self.sat_lunch),
            ("satDinner", self.sat_dinner),
        ]
    }

    /// Mean of the observed slots.
    pub fn average(&self) -> Option<f64> {
        mean(self.slots().into_iter().filter_map(|(_, value)| value))
    }

    fn validate(&self) -> Result<(), FinancialViolation> {
        for (slot, value) in self.slots() {
            if let Some(value) = value {
                if !(0.0..=MAX_OCCUPANCY).contains(&value) {
                    return Err(FinancialViolation::OccupancyOutOfRange {
                        brand: self.name.clone(),
                        slot,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandAverage {
    pub name: String,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    pub brands: Vec<BrandAverage>,
    pub overall_average: Option<f64>,
}

/// Averages each named brand, then averages those brand means. Unnamed survey rows are
/// validated but left out of the summary.
pub fn summarize_occupancy(brands: &[BrandOccupancy]) -> Result<OccupancySummary, ValidationError> {
    for brand in brands {
        brand.validate()?;
    }

    let named: Vec<(&BrandOccupancy, Option<f64>)> = brands
        .iter()
        .filter(|brand| !brand.name.trim().is_empty())
        .map(|brand| (brand, brand.average()))
        .collect();

    let overall_average = mean(named.iter().filter_map(|(_, average)| *average));

    Ok(OccupancySummary {
        brands: named
            .into_iter()
            .map(|(brand, average)| BrandAverage {
                name: brand.name.clone(),
                average: average.map(round_to_cents),
            })
            .collect(),
        overall_average: overall_average.map(round_to_cents),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str, slots: [Option<f64>; 6]) -> BrandOccupancy {
        BrandOccupancy {
            name: name.to_string(),
            mon_lunch: slots[0],
            mon_dinner: slots[1],
            fri_lunch: slots[2],
            fri_dinner: slots[3],
            sat_lunch: slots[4],
            sat_dinner: slots[5],
        }
    }

    #[test]
    fn brand_average_ignores_missing_slots() {
        let surveyed = brand(
            "海底捞",
            [Some(60.0), Some(90.0), None, Some(80.0), None, Some(100.0)],
        );
        assert_eq!(surveyed.average(), Some(82.5));
        assert_eq!(brand("空", [None; 6]).average(), None);
    }

    #[test]
    fn boundary_percentages_are_valid() {
        let summary = summarize_occupancy(&[brand(
            "边界",
            [Some(0.0), Some(100.0), None, None, None, None],
        )])
        .expect("0 and 100 accepted");
        assert_eq!(summary.overall_average, Some(50.0));
    }

    #[test]
    fn overall_average_skips_unnamed_and_unobserved_brands() {
        let brands = vec![
            brand("A", [Some(50.0); 6]),
            brand("B", [Some(70.0), Some(90.0), None, None, None, None]),
            brand("C", [None; 6]),
            brand("", [Some(10.0); 6]),
        ];
        let summary = summarize_occupancy(&brands).expect("valid survey");
        assert_eq!(summary.brands.len(), 3);
        assert_eq!(summary.brands[2].average, None);
        assert_eq!(summary.overall_average, Some(65.0));
    }

    #[test]
    fn empty_survey_has_no_average() {
        let summary = summarize_occupancy(&[]).expect("empty survey is valid");
        assert!(summary.brands.is_empty());
        assert_eq!(summary.overall_average, None);
    }

    #[test]
    fn rejects_out_of_range_slots() {
        let err = summarize_occupancy(&[brand(
            "超额",
            [None, None, None, Some(120.0), None, None],
        )])
        .expect_err("120% rejected");
        assert_eq!(err.field(), "friDinner");
        assert!(err.to_string().contains("超额"));

        let err = summarize_occupancy(&[brand("负", [Some(-1.0), None, None, None, None, None])])
            .expect_err("negative rejected");
        assert_eq!(err.kind(), "invalid_financial_input");
    }

    #[test]
    fn missing_fields_deserialize_as_unobserved() {
        let parsed: BrandOccupancy =
            serde_json::from_str(r#"{"name":"A","monLunch":40}"#).expect("parses");
        assert_eq!(parsed.mon_lunch, Some(40.0));
        assert_eq!(parsed.sat_dinner, None);
    }
}
