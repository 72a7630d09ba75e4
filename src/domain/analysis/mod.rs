//! Analysis module - skill scoring and insight generation.
//!
//! # Components
//!
//! - `SkillScores` / `SkillDimension` - The six scored aspects and their values
//! - `ScoringHeuristic` - Randomized style/record/age scoring
//! - `InsightGenerator` - Threshold-based strengths, weaknesses, recommendations
//! - `Analysis` - Persisted snapshot combining both
//! - `TrainingPlan` - Suggested training blocks derived from scores
//! - `PerformancePrediction` - Next-fight score estimate
//!
//! Everything here is pure apart from the injected `RandomSource`.

mod analysis;
mod errors;
mod insights;
mod prediction;
mod scoring;
mod skills;
mod training_plan;

pub use analysis::Analysis;
pub use errors::AnalysisError;
pub use insights::{
    InsightGenerator, Insights, BALANCED_STRENGTH, CONTINUE_RECOMMENDATION, STRENGTH_THRESHOLD,
    WEAKNESS_THRESHOLD,
};
pub use prediction::{predict_performance, PerformancePrediction, PREDICTION_SPREAD};
pub use scoring::{
    base_range, cardio_age_factor, style_adjustment, win_rate_bonus, BaseRange, RawSkills,
    ScoringHeuristic, ScoringInput, SkillProfile, SCORE_CEILING, SCORE_FLOOR,
    VETERAN_CARDIO_FACTOR, WIN_RATE_BONUS_SCALE, YOUNG_CARDIO_FACTOR,
};
pub use skills::{SkillDimension, SkillScores};
pub use training_plan::{PlanPriority, TrainingPlan, TrainingPlanItem};
