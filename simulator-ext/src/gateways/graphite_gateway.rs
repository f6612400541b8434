use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::update_callback::UpdateCallback;
use dipstick::{Graphite, Input};

use super::{BEST_SCORE, SEARCH_PROXY};

/// Publishes the per-generation best measure to a graphite endpoint.
pub struct GraphiteGateway<M> {
    measure: M,
}

impl<M> GraphiteGateway<M> {
    pub fn new<A>(address: A, measure: M) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let graphite_scope = Graphite::send_to(address)?.metrics();
        SEARCH_PROXY.target(graphite_scope);
        Ok(GraphiteGateway { measure })
    }
}

impl<C, M> UpdateCallback<C> for GraphiteGateway<M>
where
    M: Fn(&C) -> f64,
{
    fn call(&self, best: &C) {
        BEST_SCORE.value((self.measure)(best));
    }
}
