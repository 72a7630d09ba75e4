//! HTTP DTOs for performance endpoints.

pub use crate::domain::performance::{
    PerformanceDraft as RecordPerformanceRequest, PerformanceRecord as PerformanceResponse,
    TrendAnalysis as TrendResponse,
};
