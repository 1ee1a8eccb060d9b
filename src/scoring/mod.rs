pub mod channel;
pub mod config;
pub mod curve;
pub mod engine;
pub mod validation;

pub use channel::Channel;
pub use config::{ChannelSpec, ScoringConfig};
pub use curve::{Curve, Segment};
pub use engine::{compute_score, ChannelContribution, ScoreResult};
pub use validation::validate_scoring;
