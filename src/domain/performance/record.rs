//! Per-fight performance record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FighterId, PerformanceRecordId, ValidationError};

/// Historical scores for one fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    id: PerformanceRecordId,
    fighter_id: FighterId,
    fight_number: u32,
    performance_score: f64,
    striking: f64,
    grappling: f64,
    cardio: f64,
    defense: f64,
}

/// Unvalidated input for recording a fight.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDraft {
    pub fighter_id: String,
    pub fight_number: i64,
    pub performance_score: f64,
    pub striking: f64,
    pub grappling: f64,
    pub cardio: f64,
    pub defense: f64,
}

impl PerformanceRecord {
    /// Validates a draft: fight numbers start at 1, scores lie in `[0, 100]`.
    pub fn new(id: PerformanceRecordId, draft: PerformanceDraft) -> Result<Self, ValidationError> {
        let fighter_id = FighterId::new(draft.fighter_id)?;
        if draft.fight_number < 1 || draft.fight_number > i64::from(u32::MAX) {
            return Err(ValidationError::out_of_range(
                "fightNumber",
                1,
                i64::from(u32::MAX),
                draft.fight_number,
            ));
        }

        Ok(Self {
            id,
            fighter_id,
            fight_number: draft.fight_number as u32,
            performance_score: score("performanceScore", draft.performance_score)?,
            striking: score("striking", draft.striking)?,
            grappling: score("grappling", draft.grappling)?,
            cardio: score("cardio", draft.cardio)?,
            defense: score("defense", draft.defense)?,
        })
    }

    pub fn id(&self) -> &PerformanceRecordId {
        &self.id
    }

    pub fn fighter_id(&self) -> &FighterId {
        &self.fighter_id
    }

    pub fn fight_number(&self) -> u32 {
        self.fight_number
    }

    pub fn performance_score(&self) -> f64 {
        self.performance_score
    }

    pub fn striking(&self) -> f64 {
        self.striking
    }

    pub fn grappling(&self) -> f64 {
        self.grappling
    }

    pub fn cardio(&self) -> f64 {
        self.cardio
    }

    pub fn defense(&self) -> f64 {
        self.defense
    }
}

fn score(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::out_of_range(field, 0, 100, value as i64));
    }
    Ok(value)
}
