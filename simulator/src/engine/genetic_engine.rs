use std::rc::Rc;

use common::{stop_signal::StopSignal, update_callback::UpdateCallback};
use log::debug;
use validator::Validate;

use crate::{evaluator::ParallelEvaluator, Candidate, SimulationError};

use super::{EngineStatus, Outcome, SimulationConfig};

type Callbacks<C> = Vec<Rc<dyn UpdateCallback<C>>>;

/// Drives the generation loop: seed, evaluate in parallel, notify
/// callbacks, check the stop flag, regenerate from the fittest member.
///
/// The loop itself is strictly sequential; concurrency lives entirely
/// inside [`ParallelEvaluator::evaluate`]. Callbacks run on the engine's
/// thread, in registration order, and may request a stop at any time
/// through [`GeneticEngine::request_stop`] or a cloned stop handle.
pub struct GeneticEngine<C> {
    config: SimulationConfig,
    callbacks: Callbacks<C>,
    evaluator: ParallelEvaluator,
    stop: StopSignal,
    status: EngineStatus,
    generation: u64,
    best: Option<C>,
}

impl<C> GeneticEngine<C>
where
    C: Candidate + Clone,
{
    pub fn new(population_size: usize) -> Self {
        GeneticEngine {
            config: SimulationConfig { population_size },
            callbacks: vec![],
            evaluator: ParallelEvaluator::new(),
            stop: StopSignal::new(),
            status: EngineStatus::Idle,
            generation: 0,
            best: None,
        }
    }

    /// Registers a callback invoked once per generation with the
    /// generation's fittest candidate. Registration happens before the run
    /// starts; registration order is invocation order.
    pub fn register_update(&mut self, callback: Rc<dyn UpdateCallback<C>>) {
        self.callbacks.push(callback);
    }

    /// Handle to the engine's stop flag, shareable across threads.
    pub fn stop_handle(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Requests a cooperative stop. Idempotent, callable from any thread.
    /// Never interrupts an in-flight evaluation: the stop takes effect at a
    /// generation boundary, at most one full generation after the request.
    pub fn request_stop(&self) {
        self.stop.request();
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fittest candidate of the last completed generation.
    pub fn best(&self) -> Option<&C> {
        self.best.as_ref()
    }

    /// Seeds the initial population from the factory and runs the
    /// generation loop until a stop is requested. Blocks for the whole run
    /// and returns the final best candidate with the generation count.
    pub fn simulate<F>(&mut self, mut seed_factory: F) -> Result<Outcome<C>, SimulationError>
    where
        F: FnMut() -> C,
    {
        self.config.validate()?;
        let size = self.config.population_size;

        let mut population: Vec<C> = (0..size).map(|_| seed_factory()).collect();
        self.set_status(EngineStatus::Running);

        let outcome = loop {
            let best_fit = self.evaluator.evaluate(&population)?;
            self.generation += 1;

            // Single flag read per generation, taken at the evaluation
            // barrier. A request issued by a callback below is picked up at
            // the next boundary, one generation later.
            let stop_now = self.stop.is_requested();

            let best = population.swap_remove(best_fit.index);
            debug!(
                "generation {}: best score {} at position {}",
                self.generation, best_fit.score, best_fit.index
            );
            for callback in &self.callbacks {
                callback.call(&best);
            }

            if stop_now {
                self.set_status(EngineStatus::Stopped);
                break Outcome {
                    generation: self.generation,
                    best,
                };
            }

            // The previous best is not carried into the next population:
            // every slot is a fresh mutant of it. Retention is deliberately
            // disabled in favor of exploration.
            population = (0..size).map(|_| best.mutate()).collect();
            self.best = Some(best);
        };

        self.best = Some(outcome.best.clone());
        Ok(outcome)
    }

    fn set_status(&mut self, status: EngineStatus) {
        if self.status != status {
            debug!("engine status: {} -> {}", self.status, status);
            self.status = status;
        }
    }
}
