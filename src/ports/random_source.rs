//! Random source port.
//!
//! The scoring heuristic draws its noise through this trait instead of an
//! ambient generator, so callers decide between entropy-backed, seeded
//! or fixed sequences.

/// Supplier of uniform draws in `[0, 1)`.
///
/// Implementations are shared across requests, so they must synchronize
/// any internal state themselves.
pub trait RandomSource: Send + Sync {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}
