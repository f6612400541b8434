use std::{fmt, sync::Arc};

use rand::{distributions::Standard, thread_rng, Rng};
use simulator::{Candidate, ScoreError};

const MUTATION_RATE: f64 = 0.01;

/// Byte-string candidate scored by the fraction of positions matching a
/// target phrase.
#[derive(Clone)]
pub struct TargetPhrase {
    value: Vec<u8>,
    target: Arc<[u8]>,
}

impl TargetPhrase {
    pub fn random(target: Arc<[u8]>, rng: &mut impl Rng) -> Self {
        let value = rng.sample_iter(Standard).take(target.len()).collect();
        TargetPhrase { value, target }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl Candidate for TargetPhrase {
    fn score(&self) -> Result<f64, ScoreError> {
        if self.target.is_empty() {
            return Err("target phrase is empty".into());
        }
        let matching = self
            .value
            .iter()
            .zip(self.target.iter())
            .filter(|(a, b)| a == b)
            .count();
        Ok(matching as f64 / self.target.len() as f64)
    }

    fn mutate(&self) -> Self {
        let mut rng = thread_rng();
        let value = self
            .value
            .iter()
            .map(|&byte| {
                if rng.gen::<f64>() < MUTATION_RATE {
                    rng.gen::<u8>()
                } else {
                    byte
                }
            })
            .collect();
        TargetPhrase {
            value,
            target: Arc::clone(&self.target),
        }
    }
}

impl fmt::Display for TargetPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.value))
    }
}
