//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `FighterRepository` - Fighter CRUD and listing
//! - `AnalysisRepository` - Append-only analysis snapshots
//! - `TrainingSessionRepository` - Scheduled training sessions
//! - `PerformanceRepository` - Per-fight performance history
//!
//! ## Randomness
//!
//! - `RandomSource` - Uniform noise for the scoring heuristic

mod analysis_repository;
mod fighter_repository;
mod performance_repository;
mod random_source;
mod training_session_repository;

pub use analysis_repository::AnalysisRepository;
pub use fighter_repository::FighterRepository;
pub use performance_repository::PerformanceRepository;
pub use random_source::RandomSource;
pub use training_session_repository::TrainingSessionRepository;
