//! Generic parallel genetic search: a population of candidates is scored
//! concurrently, the fittest member seeds the next generation through
//! mutation alone, and the loop runs until a cooperative stop is requested.

use thiserror::Error;

pub mod engine;
pub mod evaluator;

/// Error produced by a candidate's own fitness computation.
pub type ScoreError = Box<dyn std::error::Error + Send + Sync>;

/// Capability set every population member implements.
///
/// Implementations are value-like: `mutate` derives a fresh candidate and
/// never touches the receiver, and `score` is deterministic for a fixed
/// internal state so repeated evaluation is reproducible.
pub trait Candidate: Send + Sync {
    /// Fitness of this candidate. Higher is better, unbounded. A failure
    /// here is fatal to the enclosing run.
    fn score(&self) -> Result<f64, ScoreError>;

    /// Derives a new, independent candidate. May use internal randomness.
    fn mutate(&self) -> Self;
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("scoring failed for candidate at position {index}")]
    Scoring {
        index: usize,
        #[source]
        source: ScoreError,
    },
    #[error("could not set up the scoring worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid simulation settings")]
    InvalidSettings(#[from] validator::ValidationErrors),
    #[error("cannot evaluate an empty population")]
    EmptyPopulation,
}
