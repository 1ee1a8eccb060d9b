use super::channel::Channel;
use super::config::ScoringConfig;
use crate::input::Readings;

/// One channel's share of the final score.
#[derive(Debug, Clone)]
pub struct ChannelContribution {
    pub channel: Channel,
    /// Raw reading as supplied
    pub raw: f64,
    /// Normalized 0-100 goodness, before weighting
    pub goodness: f64,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Overall wellness score, always in 0..=100
    pub score: u8,
    /// Channels that were present, in fixed channel order
    pub breakdown: Vec<ChannelContribution>,
}

/// Compute the wellness score for one set of readings.
///
/// Absent channels are skipped, as are non-finite readings (a NaN from a
/// faulty sensor is treated as "not measured", never an error). Per-channel
/// goodness values stay unrounded; the weighted average is rounded once at
/// the end. With no weighted channels present the score is 0 by definition.
pub fn compute_score(readings: &Readings, config: &ScoringConfig) -> ScoreResult {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut breakdown = Vec::new();

    for channel in Channel::ALL {
        let Some(raw) = readings.get(channel) else {
            continue;
        };
        if !raw.is_finite() {
            continue;
        }

        let spec = config.channel(channel);
        let goodness = spec.curve.goodness(raw);
        weighted_sum += goodness * spec.weight;
        weight_sum += spec.weight;

        // Zero-weight channels are tracked in the breakdown but cannot
        // influence either sum
        breakdown.push(ChannelContribution {
            channel,
            raw,
            goodness,
            weight: spec.weight,
        });
    }

    let score = if weight_sum > 0.0 {
        (weighted_sum / weight_sum).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    ScoreResult { score, breakdown }
}
