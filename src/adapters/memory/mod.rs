//! In-memory storage adapters.
//!
//! Every repository keeps its records in an `Arc<RwLock<HashMap>>`, so
//! clones share state. Data lives for the lifetime of the process.

mod analysis_repository;
mod fighter_repository;
mod performance_repository;
mod seed;
mod training_session_repository;

pub use analysis_repository::InMemoryAnalysisRepository;
pub use fighter_repository::InMemoryFighterRepository;
pub use performance_repository::InMemoryPerformanceRepository;
pub use seed::{seed_demo_data, DemoData};
pub use training_session_repository::InMemoryTrainingSessionRepository;
