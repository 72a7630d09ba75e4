//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod dashboard;
pub mod fighter;
pub mod performance;
pub mod training;

#[cfg(test)]
pub(crate) mod test_support;
