use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::update_callback::UpdateCallback;
use dipstick::{Input, Statsd};
use log::trace;

use super::{BEST_SCORE, SEARCH_PROXY};

/// Publishes the per-generation best measure to a statsd endpoint, scaled
/// by `factor` (statsd carries integers, so fractional fitness values need
/// scaling up to survive the trip).
pub struct StatsdGateway<M> {
    measure: M,
    factor: f64,
}

impl<M> StatsdGateway<M> {
    pub fn new<A>(address: A, measure: M, factor: f64) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)?.metrics();
        SEARCH_PROXY.target(statsd_scope);

        Ok(StatsdGateway { measure, factor })
    }
}

impl<C, M> UpdateCallback<C> for StatsdGateway<M>
where
    M: Fn(&C) -> f64,
{
    fn call(&self, best: &C) {
        let value = (self.measure)(best) * self.factor;
        trace!("publishing best score {value}");
        BEST_SCORE.value(value);
    }
}
