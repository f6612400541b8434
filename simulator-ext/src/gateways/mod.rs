mod graphite_gateway;
mod statsd_gateway;

pub use graphite_gateway::GraphiteGateway;
pub use statsd_gateway::StatsdGateway;

use dipstick::*;

metrics! {
    SEARCH_PROXY: Proxy = "genetic_search" => {
        BEST_SCORE: Gauge = "best-score";
    }
}
