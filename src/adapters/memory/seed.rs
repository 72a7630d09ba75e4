//! Demo records loaded at startup when `storage.seed_demo_data` is set.

use crate::domain::analysis::{Analysis, Insights, SkillScores};
use crate::domain::fighter::{Fighter, FighterDraft};
use crate::domain::foundation::{
    AnalysisId, DomainError, FighterId, PerformanceRecordId, Repository, Timestamp,
    TrainingSessionId,
};
use crate::domain::performance::{PerformanceDraft, PerformanceRecord};
use crate::domain::training::{TrainingSession, TrainingSessionDraft};
use crate::ports::{
    AnalysisRepository, FighterRepository, PerformanceRepository, TrainingSessionRepository,
};

/// The fixed demo dataset, built relative to `now`.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub fighters: Vec<Fighter>,
    pub analyses: Vec<Analysis>,
    pub training_sessions: Vec<TrainingSession>,
    pub performance: Vec<PerformanceRecord>,
}

struct FighterSeed {
    id: &'static str,
    name: &'static str,
    nickname: &'static str,
    age: i64,
    weight_class: &'static str,
    weight: f64,
    reach: f64,
    record: &'static str,
    style: &'static str,
    image_url: &'static str,
}

const FIGHTERS: [FighterSeed; 3] = [
    FighterSeed {
        id: "1",
        name: "Alex Thompson",
        nickname: "Thunder",
        age: 27,
        weight_class: "Welterweight",
        weight: 170.0,
        reach: 74.0,
        record: "15-3-0",
        style: "Striker",
        image_url: "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?ixlib=rb-4.0.3&auto=format&fit=crop&w=120&h=120",
    },
    FighterSeed {
        id: "2",
        name: "Mike Rodriguez",
        nickname: "Storm",
        age: 29,
        weight_class: "Welterweight",
        weight: 170.0,
        reach: 72.0,
        record: "12-4-1",
        style: "Grappler",
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=120&h=120",
    },
    FighterSeed {
        id: "3",
        name: "Jake Williams",
        nickname: "Iron",
        age: 25,
        weight_class: "Lightweight",
        weight: 155.0,
        reach: 70.0,
        record: "18-2-0",
        style: "Mixed",
        image_url: "https://images.unsplash.com/photo-1566753323558-f4e0952af115?ixlib=rb-4.0.3&auto=format&fit=crop&w=120&h=120",
    },
];

// (id, title, type, minutes, days from now)
const SESSIONS: [(&str, &str, &str, i64, i64); 3] = [
    ("t1", "Striking Technique", "striking", 90, 0),
    ("t2", "Grappling Defense", "grappling", 120, 1),
    ("t3", "Cardio & Conditioning", "cardio", 60, 3),
];

// (id, fight, performance, striking, grappling, cardio, defense)
const PERFORMANCES: [(&str, i64, f64, f64, f64, f64, f64); 6] = [
    ("p1", 1, 72.0, 75.0, 65.0, 70.0, 78.0),
    ("p2", 2, 78.0, 80.0, 68.0, 75.0, 80.0),
    ("p3", 3, 85.0, 88.0, 70.0, 85.0, 82.0),
    ("p4", 4, 79.0, 82.0, 72.0, 75.0, 85.0),
    ("p5", 5, 88.0, 90.0, 75.0, 88.0, 87.0),
    ("p6", 6, 91.0, 92.0, 78.0, 90.0, 90.0),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DemoData {
    /// Builds the dataset; every record goes through normal validation.
    pub fn build(now: Timestamp) -> Result<Self, DomainError> {
        let fighters = FIGHTERS
            .iter()
            .map(|seed| {
                Fighter::new(
                    FighterId::new(seed.id)?,
                    FighterDraft {
                        name: seed.name.to_string(),
                        nickname: Some(seed.nickname.to_string()),
                        age: seed.age,
                        weight_class: seed.weight_class.to_string(),
                        weight: seed.weight,
                        reach: seed.reach,
                        record: seed.record.to_string(),
                        fighting_style: seed.style.to_string(),
                        image_url: Some(seed.image_url.to_string()),
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let analyses = vec![Analysis::restore(
            AnalysisId::new("a1")?,
            FighterId::new("1")?,
            SkillScores::try_from_values([85, 67, 72, 78, 82, 79])?,
            Insights {
                strengths: strings(&[
                    "Exceptional striking accuracy",
                    "Strong power in combinations",
                    "Good distance management",
                ]),
                weaknesses: strings(&[
                    "Ground defense needs work",
                    "Cardio drops in later rounds",
                    "Takedown defense",
                ]),
                recommendations: strings(&[
                    "Focus on defensive grappling with 2 BJJ sessions per week",
                    "Increase stamina with HIIT training 3x per week",
                    "Work on combinations to maximize striking strength",
                ]),
            },
            now,
        )];

        let training_sessions = SESSIONS
            .iter()
            .map(|&(id, title, category, duration, days)| {
                TrainingSession::new(
                    TrainingSessionId::new(id)?,
                    TrainingSessionDraft {
                        fighter_id: "1".to_string(),
                        title: title.to_string(),
                        category: category.to_string(),
                        duration,
                        scheduled_for: now.add_days(days),
                        completed: false,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let performance = PERFORMANCES
            .iter()
            .map(|&(id, fight_number, score, striking, grappling, cardio, defense)| {
                PerformanceRecord::new(
                    PerformanceRecordId::new(id)?,
                    PerformanceDraft {
                        fighter_id: "1".to_string(),
                        fight_number,
                        performance_score: score,
                        striking,
                        grappling,
                        cardio,
                        defense,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fighters,
            analyses,
            training_sessions,
            performance,
        })
    }
}

/// Loads the demo dataset into the given repositories.
pub async fn seed_demo_data(
    fighters: &dyn FighterRepository,
    analyses: &dyn AnalysisRepository,
    training: &dyn TrainingSessionRepository,
    performance: &dyn PerformanceRepository,
) -> Result<DemoData, DomainError> {
    let data = DemoData::build(Timestamp::now())?;

    for fighter in &data.fighters {
        fighters.save(fighter).await?;
    }
    for analysis in &data.analyses {
        analyses.save(analysis).await?;
    }
    for session in &data.training_sessions {
        training.save(session).await?;
    }
    for record in &data.performance {
        performance.save(record).await?;
    }

    tracing::info!(
        fighters = data.fighters.len(),
        analyses = data.analyses.len(),
        training_sessions = data.training_sessions.len(),
        performance_records = data.performance.len(),
        "Seeded demo data"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAnalysisRepository, InMemoryFighterRepository, InMemoryPerformanceRepository,
        InMemoryTrainingSessionRepository,
    };
    use crate::domain::performance::{PerformanceTrend, TrendAnalysis};

    #[test]
    fn demo_dataset_is_valid() {
        let data = DemoData::build(Timestamp::now()).unwrap();

        assert_eq!(data.fighters.len(), 3);
        assert_eq!(data.analyses.len(), 1);
        assert_eq!(data.training_sessions.len(), 3);
        assert_eq!(data.performance.len(), 6);
    }

    #[test]
    fn seeded_analysis_overall_matches_scores() {
        let data = DemoData::build(Timestamp::now()).unwrap();
        assert_eq!(data.analyses[0].overall_score(), 77);
    }

    #[test]
    fn seeded_performance_is_improving() {
        let data = DemoData::build(Timestamp::now()).unwrap();
        let trend = TrendAnalysis::from_records(&data.performance);
        assert_eq!(trend.trend, PerformanceTrend::Improving);
    }

    #[test]
    fn sessions_are_spread_over_days() {
        let now = Timestamp::now();
        let data = DemoData::build(now).unwrap();
        let durations: Vec<u32> = data.training_sessions.iter().map(|s| s.duration()).collect();

        assert_eq!(durations, vec![90, 120, 60]);
        assert_eq!(data.training_sessions[2].scheduled_for(), &now.add_days(3));
    }

    #[tokio::test]
    async fn seed_populates_repositories() {
        let fighters = InMemoryFighterRepository::new();
        let analyses = InMemoryAnalysisRepository::new();
        let training = InMemoryTrainingSessionRepository::new();
        let performance = InMemoryPerformanceRepository::new();

        seed_demo_data(&fighters, &analyses, &training, &performance)
            .await
            .unwrap();

        let alex = FighterId::new("1").unwrap();
        assert_eq!(fighters.find_all().await.unwrap().len(), 3);
        assert!(fighters.exists(&FighterId::new("3").unwrap()).await.unwrap());
        assert_eq!(analyses.find_by_fighter(&alex).await.unwrap().len(), 1);
        assert_eq!(training.find_by_fighter(&alex).await.unwrap().len(), 3);
        assert_eq!(performance.find_by_fighter(&alex).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn seeding_twice_fails_on_duplicates() {
        let fighters = InMemoryFighterRepository::new();
        let analyses = InMemoryAnalysisRepository::new();
        let training = InMemoryTrainingSessionRepository::new();
        let performance = InMemoryPerformanceRepository::new();

        seed_demo_data(&fighters, &analyses, &training, &performance)
            .await
            .unwrap();
        assert!(seed_demo_data(&fighters, &analyses, &training, &performance)
            .await
            .is_err());
    }
}
