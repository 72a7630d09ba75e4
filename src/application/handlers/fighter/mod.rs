//! Fighter command and query handlers.

mod create_fighter;
mod delete_fighter;
mod get_fighter;
mod list_fighters;
mod update_fighter;

pub use create_fighter::{CreateFighterCommand, CreateFighterHandler};
pub use delete_fighter::{DeleteFighterCommand, DeleteFighterHandler, DeleteFighterResult};
pub use get_fighter::{GetFighterHandler, GetFighterQuery};
pub use list_fighters::ListFightersHandler;
pub use update_fighter::{UpdateFighterCommand, UpdateFighterHandler};
