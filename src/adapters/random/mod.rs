//! Random source adapters.
//!
//! - `ThreadRandomSource` - entropy-backed, used in production
//! - `SeededRandomSource` - reproducible sequence from a fixed seed
//! - `FixedRandomSource` - constant value, for tests and demos

mod fixed;
mod seeded;
mod thread;

pub use fixed::FixedRandomSource;
pub use seeded::SeededRandomSource;
pub use thread::ThreadRandomSource;
