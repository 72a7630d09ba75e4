use rand::Rng;

use crate::ports::RandomSource;

/// Draws from the thread-local generator on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
