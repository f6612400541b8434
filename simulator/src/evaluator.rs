use std::{num::NonZeroUsize, thread};

use log::trace;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::{Candidate, SimulationError};

/// Where the fittest candidate sits in the evaluated population, and the
/// score it reached. Consumed immediately during selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestFit {
    pub index: usize,
    pub score: f64,
}

/// Scores a whole population concurrently and identifies the fittest
/// member. Stateless: the worker pool is created and torn down within each
/// `evaluate` call.
#[derive(Debug, Default)]
pub struct ParallelEvaluator;

impl ParallelEvaluator {
    pub fn new() -> Self {
        ParallelEvaluator
    }

    /// Blocks until every candidate is scored, then selects the maximum
    /// score. Ties resolve to the earliest position in the input, so the
    /// result is reproducible for deterministic scorers. Any scoring
    /// failure aborts the whole call; no partial aggregate is returned.
    pub fn evaluate<C: Candidate>(&self, population: &[C]) -> Result<BestFit, SimulationError> {
        if population.is_empty() {
            return Err(SimulationError::EmptyPopulation);
        }

        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
        trace!("scoring {} candidates on {workers} workers", population.len());

        let scores = pool.install(|| {
            population
                .par_iter()
                .enumerate()
                .map(|(index, candidate)| {
                    candidate
                        .score()
                        .map_err(|source| SimulationError::Scoring { index, source })
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        let mut index = 0;
        for (position, score) in scores.iter().enumerate() {
            if *score > scores[index] {
                index = position;
            }
        }
        Ok(BestFit {
            index,
            score: scores[index],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{BestFit, ParallelEvaluator};
    use crate::{Candidate, ScoreError, SimulationError};

    #[derive(Clone)]
    struct Static {
        score: f64,
        broken: bool,
    }

    impl Static {
        fn with_score(score: f64) -> Self {
            Static {
                score,
                broken: false,
            }
        }

        fn failing() -> Self {
            Static {
                score: 0.0,
                broken: true,
            }
        }
    }

    impl Candidate for Static {
        fn score(&self) -> Result<f64, ScoreError> {
            if self.broken {
                return Err("synthetic scoring failure".into());
            }
            Ok(self.score)
        }

        fn mutate(&self) -> Self {
            self.clone()
        }
    }

    fn population_of(scores: &[f64]) -> Vec<Static> {
        scores.iter().copied().map(Static::with_score).collect()
    }

    #[test]
    fn test_evaluate_returns_strict_maximum() {
        // Given
        let evaluator = ParallelEvaluator::new();
        let population = population_of(&[3.0, 9.0, 1.0, 7.5]);

        // When
        let result = evaluator.evaluate(&population).unwrap();

        // Then
        assert_eq!(BestFit { index: 1, score: 9.0 }, result);
    }

    #[test]
    fn test_evaluate_breaks_ties_towards_earliest_position() {
        // Given
        let evaluator = ParallelEvaluator::new();
        let population = population_of(&[1.0, 5.0, 5.0, 2.0]);

        // Then
        for _ in 0..20 {
            let result = evaluator.evaluate(&population).unwrap();
            assert_eq!(
                BestFit { index: 1, score: 5.0 },
                result,
                "First occurrence of the maximum should win every run"
            );
        }
    }

    #[test]
    fn test_evaluate_rejects_empty_population() {
        // Given
        let evaluator = ParallelEvaluator::new();
        let population: Vec<Static> = vec![];

        // When
        let result = evaluator.evaluate(&population);

        // Then
        assert!(matches!(result, Err(SimulationError::EmptyPopulation)));
    }

    #[test]
    fn test_evaluate_propagates_scoring_failure_with_position() {
        // Given
        let evaluator = ParallelEvaluator::new();
        let population = vec![
            Static::with_score(1.0),
            Static::with_score(2.0),
            Static::failing(),
            Static::with_score(3.0),
        ];

        // When
        let result = evaluator.evaluate(&population);

        // Then
        assert!(matches!(
            result,
            Err(SimulationError::Scoring { index: 2, .. })
        ));
    }

    #[test]
    fn test_evaluate_aborts_when_every_candidate_fails() {
        // Given
        let evaluator = ParallelEvaluator::new();
        let population = vec![Static::failing(), Static::failing()];

        // When
        let result = evaluator.evaluate(&population);

        // Then
        assert!(matches!(result, Err(SimulationError::Scoring { .. })));
    }
}
