//! Training plan derived from an analysis' scores.

use serde::{Deserialize, Serialize};

use super::{SkillDimension, SkillScores};

/// How urgently a plan item should be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanPriority {
    High,
    Medium,
    Low,
}

/// A suggested training block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanItem {
    #[serde(rename = "type")]
    pub category: SkillDimension,
    pub title: String,
    /// Minutes.
    pub duration: u32,
    pub priority: PlanPriority,
}

impl TrainingPlanItem {
    fn new(category: SkillDimension, title: &str, duration: u32, priority: PlanPriority) -> Self {
        Self {
            category,
            title: title.to_string(),
            duration,
            priority,
        }
    }
}

/// Ordered list of suggested training blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    pub items: Vec<TrainingPlanItem>,
}

impl TrainingPlan {
    /// Builds a plan: high-priority remediation for weak fundamentals,
    /// medium-priority maintenance for elite striking and for technique.
    pub fn from_scores(scores: &SkillScores) -> Self {
        use PlanPriority::*;
        use SkillDimension::*;

        let rules: [(bool, SkillDimension, &str, u32, PlanPriority); 5] = [
            (scores.striking < 70, Striking, "Striking Fundamentals", 90, High),
            (scores.grappling < 70, Grappling, "Grappling Defense Training", 120, High),
            (scores.cardio < 70, Cardio, "Cardiovascular Conditioning", 60, High),
            (scores.striking >= 80, Striking, "Advanced Striking Combinations", 75, Medium),
            (scores.technique < 75, Technique, "Technical Refinement", 90, Medium),
        ];

        let items = rules
            .into_iter()
            .filter(|(applies, ..)| *applies)
            .map(|(_, category, title, duration, priority)| {
                TrainingPlanItem::new(category, title, duration, priority)
            })
            .collect();

        Self { items }
    }

    pub fn total_minutes(&self) -> u32 {
        self.items.iter().map(|item| item.duration).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
