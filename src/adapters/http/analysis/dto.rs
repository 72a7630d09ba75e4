//! HTTP DTOs for analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::analysis::RecordAnalysisCommand;
use crate::domain::analysis::{Insights, TrainingPlan, TrainingPlanItem};

pub use crate::domain::analysis::{
    Analysis as AnalysisResponse, PerformancePrediction as PredictionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/analyses`.
///
/// Any `overallScore` sent by the client is ignored; it is always derived.
/// When all three insight lists are absent they are generated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAnalysisRequest {
    pub fighter_id: String,
    pub striking: i64,
    pub grappling: i64,
    pub cardio: i64,
    pub defense: i64,
    pub aggression: i64,
    pub technique: i64,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    #[serde(default)]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

impl From<RecordAnalysisRequest> for RecordAnalysisCommand {
    fn from(req: RecordAnalysisRequest) -> Self {
        let insights = if req.strengths.is_none()
            && req.weaknesses.is_none()
            && req.recommendations.is_none()
        {
            None
        } else {
            Some(Insights {
                strengths: req.strengths.unwrap_or_default(),
                weaknesses: req.weaknesses.unwrap_or_default(),
                recommendations: req.recommendations.unwrap_or_default(),
            })
        };

        RecordAnalysisCommand {
            fighter_id: req.fighter_id,
            scores: [
                req.striking,
                req.grappling,
                req.cardio,
                req.defense,
                req.aggression,
                req.technique,
            ],
            insights,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanResponse {
    pub items: Vec<TrainingPlanItem>,
    pub total_minutes: u32,
}

impl From<TrainingPlan> for TrainingPlanResponse {
    fn from(plan: TrainingPlan) -> Self {
        Self {
            total_minutes: plan.total_minutes(),
            items: plan.items,
        }
    }
}
