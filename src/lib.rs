//! Wellness scoring: a fixed table of biometric channels, per-channel
//! normalization curves, and an availability-weighted 0-100 score.

pub mod config;
pub mod input;
pub mod output;
pub mod scoring;
