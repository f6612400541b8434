use std::cell::Cell;

use common::{stop_signal::StopSignal, update_callback::UpdateCallback};
use log::info;

/// Stops the search after a fixed number of generations.
pub struct GenerationCap {
    limit: u64,
    seen: Cell<u64>,
    stop: StopSignal,
}

impl GenerationCap {
    pub fn new(limit: u64, stop: StopSignal) -> Self {
        GenerationCap {
            limit,
            seen: Cell::new(0),
            stop,
        }
    }
}

impl<C> UpdateCallback<C> for GenerationCap {
    fn call(&self, _best: &C) {
        let seen = self.seen.get() + 1;
        self.seen.set(seen);
        if seen >= self.limit {
            info!("generation cap {} reached, requesting stop", self.limit);
            self.stop.request();
        }
    }
}
