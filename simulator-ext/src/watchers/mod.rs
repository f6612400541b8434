mod generation_cap;
mod stability;
mod threshold;

pub use generation_cap::GenerationCap;
pub use stability::StabilityWatcher;
pub use threshold::ThresholdWatcher;
