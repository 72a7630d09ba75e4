//! Training session command and query handlers.

mod list_sessions;
mod schedule_session;
mod update_session;

pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use schedule_session::{ScheduleSessionCommand, ScheduleSessionHandler};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
