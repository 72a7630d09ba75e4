//! HTTP DTOs for dashboard endpoints.
//!
//! Dashboard is read-only, so we only have response DTOs.
//! The domain view model is already designed for serialization,
//! so we re-export it directly.

pub use crate::domain::dashboard::DashboardStats as DashboardStatsResponse;
