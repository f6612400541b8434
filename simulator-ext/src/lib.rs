//! Reusable update callbacks for the genetic search engine: convergence
//! watchers that decide when to stop, and metrics gateways that publish the
//! per-generation best score.

pub mod gateways;
pub mod watchers;
