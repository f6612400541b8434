use std::{rc::Rc, sync::Arc};

use candidates::substitution::{encrypt, KeySequence};
use log::{error, info, LevelFilter};
use rand::thread_rng;
use simple_logger::SimpleLogger;
use simulator::engine::GeneticEngine;
use simulator_ext::watchers::{GenerationCap, ThresholdWatcher};

const KEY: &[u8; 26] = b"JULIASWEOMBCDFGHKNPQRTVXYZ";

const PLAINTEXT: &str = "People assume that genetic search needs a crowd of \
elaborate operators, but a single well chosen mutation applied to the best \
member of each generation is often enough. The population explores around \
the current champion, the scorer rewards decryptions that read like \
English, and generation after generation the key drifts towards the one \
that produced the ciphertext in the first place.";

fn similarity(left: &str, right: &str) -> f64 {
    let matching = left
        .chars()
        .zip(right.chars())
        .filter(|(a, b)| a == b)
        .count();
    matching as f64 / left.chars().count().max(1) as f64
}

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .unwrap();

    let ciphertext: Arc<str> = Arc::from(encrypt(PLAINTEXT, KEY));

    let mut engine: GeneticEngine<KeySequence> = GeneticEngine::new(75);
    let stop = engine.stop_handle();

    engine.register_update(Rc::new(|best: &KeySequence| info!("{best}")));
    engine.register_update(Rc::new(ThresholdWatcher::new(
        |best: &KeySequence| similarity(&best.decrypt(), PLAINTEXT),
        0.999,
        stop.clone(),
    )));
    engine.register_update(Rc::new(GenerationCap::new(500, stop)));

    let seeds = Arc::clone(&ciphertext);
    let result = engine.simulate(move || KeySequence::random(Arc::clone(&seeds), &mut thread_rng()));

    match result {
        Ok(outcome) => info!(
            "stopped after {} generations: {}",
            outcome.generation,
            outcome.best.decrypt()
        ),
        Err(err) => error!("{err}"),
    };
}
