//! Fixtures shared by handler tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryAnalysisRepository, InMemoryFighterRepository, InMemoryPerformanceRepository,
    InMemoryTrainingSessionRepository,
};
use crate::domain::fighter::{Fighter, FighterDraft};
use crate::domain::foundation::{FighterId, Repository};

/// Fresh, empty in-memory repositories.
pub struct Repos {
    pub fighters: Arc<InMemoryFighterRepository>,
    pub analyses: Arc<InMemoryAnalysisRepository>,
    pub training: Arc<InMemoryTrainingSessionRepository>,
    pub performance: Arc<InMemoryPerformanceRepository>,
}

impl Repos {
    pub fn new() -> Self {
        Self {
            fighters: Arc::new(InMemoryFighterRepository::new()),
            analyses: Arc::new(InMemoryAnalysisRepository::new()),
            training: Arc::new(InMemoryTrainingSessionRepository::new()),
            performance: Arc::new(InMemoryPerformanceRepository::new()),
        }
    }

    /// Stores a fighter built from `draft(style)` under `id`.
    pub async fn add_fighter(&self, id: &str, style: &str) -> Fighter {
        let fighter = Fighter::new(FighterId::new(id).unwrap(), draft(style)).unwrap();
        self.fighters.save(&fighter).await.unwrap();
        fighter
    }
}

pub fn draft(style: &str) -> FighterDraft {
    FighterDraft {
        name: "Dana Reyes".to_string(),
        nickname: Some("Viper".to_string()),
        age: 27,
        weight_class: "Welterweight".to_string(),
        weight: 170.0,
        reach: 74.0,
        record: "15-3-0".to_string(),
        fighting_style: style.to_string(),
        image_url: None,
    }
}

pub fn fighter_id(id: &str) -> FighterId {
    FighterId::new(id).unwrap()
}
