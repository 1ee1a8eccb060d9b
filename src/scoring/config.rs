use serde::{Deserialize, Serialize};

use super::channel::Channel;
use super::curve::{Curve, Segment};

/// Weight and normalization curve for one channel.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChannelSpec {
    /// Relative importance in the weighted average; 0 makes the channel inert
    pub weight: f64,
    pub curve: Curve,
}

/// The full channel table: one spec per biometric channel.
///
/// The built-in table is the default; a config file may override any subset
/// of channels, with the rest falling back to the defaults.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   steps:
///     weight: 2.0
///     curve: { shape: linear_up, low: 0.0, high: 12000.0 }
///   resting_heart_rate:
///     weight: 1.0
///     curve: { shape: linear_down, low: 40.0, high: 100.0 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "default_deep_sleep")]
    pub deep_sleep: ChannelSpec,

    #[serde(default = "default_rem_sleep")]
    pub rem_sleep: ChannelSpec,

    #[serde(default = "default_steps")]
    pub steps: ChannelSpec,

    #[serde(default = "default_active_calories")]
    pub active_calories: ChannelSpec,

    #[serde(default = "default_resting_heart_rate")]
    pub resting_heart_rate: ChannelSpec,

    #[serde(default = "default_bmi")]
    pub bmi: ChannelSpec,

    /// Informational only: weight 0, never influences the score
    #[serde(default = "default_body_weight")]
    pub body_weight: ChannelSpec,

    #[serde(default = "default_avg_glucose")]
    pub avg_glucose: ChannelSpec,
}

impl ScoringConfig {
    pub fn channel(&self, channel: Channel) -> &ChannelSpec {
        match channel {
            Channel::DeepSleep => &self.deep_sleep,
            Channel::RemSleep => &self.rem_sleep,
            Channel::Steps => &self.steps,
            Channel::ActiveCalories => &self.active_calories,
            Channel::RestingHeartRate => &self.resting_heart_rate,
            Channel::Bmi => &self.bmi,
            Channel::BodyWeight => &self.body_weight,
            Channel::AvgGlucose => &self.avg_glucose,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            deep_sleep: default_deep_sleep(),
            rem_sleep: default_rem_sleep(),
            steps: default_steps(),
            active_calories: default_active_calories(),
            resting_heart_rate: default_resting_heart_rate(),
            bmi: default_bmi(),
            body_weight: default_body_weight(),
            avg_glucose: default_avg_glucose(),
        }
    }
}

fn default_deep_sleep() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::LinearUp { low: 0.0, high: 3.0 },
    }
}

fn default_rem_sleep() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::LinearUp { low: 0.0, high: 2.5 },
    }
}

fn default_steps() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::LinearUp { low: 0.0, high: 10000.0 },
    }
}

fn default_active_calories() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::LinearUp { low: 0.0, high: 800.0 },
    }
}

fn default_resting_heart_rate() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::LinearDown { low: 40.0, high: 100.0 },
    }
}

fn default_bmi() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::Piecewise {
            segments: vec![
                Segment { raw_low: 16.0, raw_high: 18.5, out_low: 40.0, out_high: 90.0 },
                Segment { raw_low: 18.5, raw_high: 24.9, out_low: 90.0, out_high: 100.0 },
                Segment { raw_low: 24.9, raw_high: 29.9, out_low: 100.0, out_high: 50.0 },
                Segment { raw_low: 29.9, raw_high: 40.0, out_low: 50.0, out_high: 10.0 },
            ],
        },
    }
}

fn default_body_weight() -> ChannelSpec {
    ChannelSpec {
        weight: 0.0,
        curve: Curve::Constant { value: 0.0 },
    }
}

fn default_avg_glucose() -> ChannelSpec {
    ChannelSpec {
        weight: 1.0,
        curve: Curve::Piecewise {
            segments: vec![
                Segment { raw_low: 40.0, raw_high: 70.0, out_low: 40.0, out_high: 80.0 },
                Segment { raw_low: 70.0, raw_high: 100.0, out_low: 80.0, out_high: 100.0 },
                Segment { raw_low: 100.0, raw_high: 140.0, out_low: 100.0, out_high: 60.0 },
                Segment { raw_low: 140.0, raw_high: 250.0, out_low: 60.0, out_high: 0.0 },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_all_channels() {
        let config = ScoringConfig::default();
        for channel in Channel::ALL {
            let spec = config.channel(channel);
            if channel == Channel::BodyWeight {
                assert_eq!(spec.weight, 0.0);
            } else {
                assert_eq!(spec.weight, 1.0);
            }
        }
    }

    #[test]
    fn test_body_weight_is_inert() {
        let config = ScoringConfig::default();
        let spec = config.channel(Channel::BodyWeight);
        assert_eq!(spec.weight, 0.0);
        assert_eq!(spec.curve, Curve::Constant { value: 0.0 });
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let yaml = r#"
steps:
  weight: 2.0
  curve: { shape: linear_up, low: 0.0, high: 12000.0 }
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.steps.weight, 2.0);
        assert_eq!(
            config.steps.curve,
            Curve::LinearUp { low: 0.0, high: 12000.0 }
        );
        // Untouched channels keep the built-in table
        assert_eq!(config.deep_sleep, default_deep_sleep());
        assert_eq!(config.avg_glucose, default_avg_glucose());
    }

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_channel_rejected() {
        let yaml = r#"
blood_oxygen:
  weight: 1.0
  curve: { shape: linear_up, low: 0.0, high: 100.0 }
"#;
        assert!(serde_saphyr::from_str::<ScoringConfig>(yaml).is_err());
    }
}
