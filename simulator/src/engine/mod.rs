mod genetic_engine;

pub use genetic_engine::GeneticEngine;

use serde::{Deserialize, Serialize};
use strum::Display;
use validator::Validate;

/// Engine settings, checked before any generation executes.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct SimulationConfig {
    #[validate(range(min = 1))]
    pub population_size: usize,
}

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum EngineStatus {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Terminal result of a run: the final generation number and its fittest
/// candidate.
#[derive(Clone, Debug)]
pub struct Outcome<C> {
    pub generation: u64,
    pub best: C,
}
