use common::{stop_signal::StopSignal, update_callback::UpdateCallback};
use log::info;

/// Stops the search once the best measure reaches a target value.
pub struct ThresholdWatcher<M> {
    measure: M,
    threshold: f64,
    stop: StopSignal,
}

impl<M> ThresholdWatcher<M> {
    pub fn new(measure: M, threshold: f64, stop: StopSignal) -> Self {
        ThresholdWatcher {
            measure,
            threshold,
            stop,
        }
    }
}

impl<C, M> UpdateCallback<C> for ThresholdWatcher<M>
where
    M: Fn(&C) -> f64,
{
    fn call(&self, best: &C) {
        let value = (self.measure)(best);
        if value >= self.threshold {
            info!(
                "best measure {value:.4} reached threshold {}, requesting stop",
                self.threshold
            );
            self.stop.request();
        }
    }
}
