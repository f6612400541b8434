use std::{env, sync::OnceLock};

use rand::{random, rngs::StdRng, SeedableRng};

pub const TEST_SEED_ENV: &str = "TEST_SEED";

static SEED: OnceLock<u64> = OnceLock::new();

fn resolve_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = env::var(TEST_SEED_ENV)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using test seed {seed} (override with {TEST_SEED_ENV})");
        seed
    })
}

/// Returns an StdRng seeded once per process, from the `TEST_SEED` env var
/// when set. The seed is printed so a failing randomized test can be
/// replayed.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(resolve_seed())
}
