use std::{cell::RefCell, collections::VecDeque};

use common::{stop_signal::StopSignal, update_callback::UpdateCallback};
use log::info;

/// Moving-window convergence detector.
///
/// Keeps the last `window` best measures; once the window is full and the
/// incoming value sits within `tolerance` of the window mean, the search is
/// considered stalled and a stop is requested. The measure is supplied as a
/// closure because callbacks only receive the best candidate itself.
pub struct StabilityWatcher<M> {
    measure: M,
    window: usize,
    tolerance: f64,
    recent: RefCell<VecDeque<f64>>,
    stop: StopSignal,
}

impl<M> StabilityWatcher<M> {
    /// `window` is clamped to at least one sample.
    pub fn new(measure: M, window: usize, tolerance: f64, stop: StopSignal) -> Self {
        let window = window.max(1);
        StabilityWatcher {
            measure,
            window,
            tolerance,
            recent: RefCell::new(VecDeque::with_capacity(window)),
            stop,
        }
    }
}

impl<C, M> UpdateCallback<C> for StabilityWatcher<M>
where
    M: Fn(&C) -> f64,
{
    fn call(&self, best: &C) {
        let value = (self.measure)(best);
        let mut recent = self.recent.borrow_mut();
        if recent.len() == self.window {
            let mean = recent.iter().sum::<f64>() / recent.len() as f64;
            if (value - mean).abs() <= self.tolerance {
                info!("best measure stable around {mean:.4}, requesting stop");
                self.stop.request();
            }
            recent.pop_front();
        }
        recent.push_back(value);
    }
}
