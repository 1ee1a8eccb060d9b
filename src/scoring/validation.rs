use super::channel::Channel;
use super::config::ScoringConfig;
use super::curve::{Curve, Segment};

/// Validate the channel table at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for channel in Channel::ALL {
        let spec = config.channel(channel);
        let path = format!("scoring.{}", channel.key());

        if !spec.weight.is_finite() || spec.weight < 0.0 {
            errors.push(format!(
                "{}.weight: must be a non-negative number, got {}",
                path, spec.weight
            ));
        }

        validate_curve(&spec.curve, &path, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_curve(curve: &Curve, path: &str, errors: &mut Vec<String>) {
    match curve {
        Curve::LinearUp { low, high } | Curve::LinearDown { low, high } => {
            if !low.is_finite() || !high.is_finite() {
                errors.push(format!("{}.curve: bounds must be finite", path));
            } else if low >= high {
                errors.push(format!(
                    "{}.curve: low ({}) must be below high ({})",
                    path, low, high
                ));
            }
        }
        Curve::Piecewise { segments } => {
            if segments.is_empty() {
                errors.push(format!("{}.curve: needs at least one segment", path));
                return;
            }
            for (i, seg) in segments.iter().enumerate() {
                validate_segment(seg, &format!("{}.curve.segments[{}]", path, i), errors);
            }
            for (i, pair) in segments.windows(2).enumerate() {
                if pair[0].raw_high != pair[1].raw_low {
                    errors.push(format!(
                        "{}.curve.segments[{}]: must start at {} where the previous segment ends, got {}",
                        path,
                        i + 1,
                        pair[0].raw_high,
                        pair[1].raw_low
                    ));
                }
            }
        }
        Curve::Constant { value } => {
            if !value.is_finite() || !(0.0..=100.0).contains(value) {
                errors.push(format!(
                    "{}.curve: constant must lie in 0-100, got {}",
                    path, value
                ));
            }
        }
    }
}

fn validate_segment(seg: &Segment, path: &str, errors: &mut Vec<String>) {
    let params = [seg.raw_low, seg.raw_high, seg.out_low, seg.out_high];
    if params.iter().any(|p| !p.is_finite()) {
        errors.push(format!("{}: bounds must be finite", path));
        return;
    }
    if seg.raw_low >= seg.raw_high {
        errors.push(format!(
            "{}: raw_low ({}) must be below raw_high ({})",
            path, seg.raw_low, seg.raw_high
        ));
    }
    for out in [seg.out_low, seg.out_high] {
        if !(0.0..=100.0).contains(&out) {
            errors.push(format!("{}: output {} outside 0-100", path, out));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::ChannelSpec;

    #[test]
    fn test_default_config_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let mut config = ScoringConfig::default();
        config.steps.weight = -1.0;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.steps.weight"));
    }

    #[test]
    fn test_nan_weight() {
        let mut config = ScoringConfig::default();
        config.bmi.weight = f64::NAN;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.bmi.weight"));
    }

    #[test]
    fn test_inverted_linear_bounds() {
        let mut config = ScoringConfig::default();
        config.deep_sleep.curve = Curve::LinearUp { low: 3.0, high: 0.0 };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.deep_sleep.curve"));
    }

    #[test]
    fn test_empty_piecewise_rejected() {
        let mut config = ScoringConfig::default();
        config.bmi.curve = Curve::Piecewise { segments: vec![] };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("at least one segment"));
    }

    #[test]
    fn test_gap_between_segments() {
        let mut config = ScoringConfig::default();
        config.avg_glucose.curve = Curve::Piecewise {
            segments: vec![
                Segment { raw_low: 40.0, raw_high: 70.0, out_low: 40.0, out_high: 80.0 },
                Segment { raw_low: 80.0, raw_high: 100.0, out_low: 80.0, out_high: 100.0 },
            ],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.avg_glucose.curve.segments[1]"));
    }

    #[test]
    fn test_segment_output_out_of_range() {
        let mut config = ScoringConfig::default();
        config.bmi.curve = Curve::Piecewise {
            segments: vec![Segment {
                raw_low: 0.0,
                raw_high: 40.0,
                out_low: 0.0,
                out_high: 150.0,
            }],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("outside 0-100"));
    }

    #[test]
    fn test_constant_out_of_range() {
        let mut config = ScoringConfig::default();
        config.body_weight = ChannelSpec {
            weight: 0.0,
            curve: Curve::Constant { value: -5.0 },
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.body_weight.curve"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScoringConfig::default();
        config.steps.weight = -1.0; // Error 1
        config.deep_sleep.curve = Curve::LinearUp { low: 5.0, high: 5.0 }; // Error 2
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
