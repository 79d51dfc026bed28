//! Competitive saturation from the count of same-category restaurants nearby.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    Saturated,
}

impl CompetitionLevel {
    pub fn from_same_category_count(count: u32) -> Self {
        match count {
            0..=2 => Self::Low,
            3..=5 => Self::Medium,
            6..=10 => Self::High,
            _ => Self::Saturated,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "蓝海",
            Self::Medium => "正常",
            Self::High => "红海",
            Self::Saturated => "过饱和",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "竞争小，市场空白",
            Self::Medium => "竞争适中，有差异化空间",
            Self::High => "竞争较大，需要特色",
            Self::Saturated => "竞争激烈，建议谨慎",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionAssessment {
    pub same_category_count: u32,
    pub level: CompetitionLevel,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn assess_competition(same_category_count: u32) -> CompetitionAssessment {
    let level = CompetitionLevel::from_same_category_count(same_category_count);
    CompetitionAssessment {
        same_category_count,
        level,
        label: level.label(),
        description: level.description(),
    }
}
