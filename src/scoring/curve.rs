use serde::{Deserialize, Serialize};

/// One piece of a piecewise curve: maps `[raw_low, raw_high]` to
/// `[out_low, out_high]` linearly, clamping the input to its raw bounds.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Segment {
    pub raw_low: f64,
    pub raw_high: f64,
    pub out_low: f64,
    pub out_high: f64,
}

/// Normalization curve shape for a single channel.
///
/// Curves are plain data so the channel table stays serializable and each
/// shape can be tested apart from the weighted aggregation.
///
/// Example YAML:
/// ```yaml
/// shape: piecewise
/// segments:
///   - { raw_low: 16.0, raw_high: 18.5, out_low: 40.0, out_high: 90.0 }
///   - { raw_low: 18.5, raw_high: 24.9, out_low: 90.0, out_high: 100.0 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Curve {
    /// Higher is better: `[low, high]` maps to `[0, 100]`
    LinearUp { low: f64, high: f64 },
    /// Lower is better: `[low, high]` maps to `[100, 0]`
    LinearDown { low: f64, high: f64 },
    /// Contiguous segments, typically an inverted U peaking at the ideal zone
    Piecewise { segments: Vec<Segment> },
    /// Fixed goodness regardless of the reading (inert channels)
    Constant { value: f64 },
}

impl Curve {
    /// Normalize a raw reading to a 0-100 goodness value.
    ///
    /// Total over finite inputs: out-of-range readings clamp to the curve's
    /// bounds, so the result always lies in [0, 100].
    pub fn goodness(&self, raw: f64) -> f64 {
        let value = match self {
            Curve::LinearUp { low, high } => lerp_clamped(raw, *low, *high, 0.0, 100.0),
            Curve::LinearDown { low, high } => lerp_clamped(raw, *low, *high, 100.0, 0.0),
            Curve::Piecewise { segments } => match pick_segment(segments, raw) {
                Some(seg) => lerp_clamped(raw, seg.raw_low, seg.raw_high, seg.out_low, seg.out_high),
                None => 0.0,
            },
            Curve::Constant { value } => *value,
        };
        value.clamp(0.0, 100.0)
    }

    /// One-line description for the `curves` listing
    pub fn describe(&self) -> String {
        match self {
            Curve::LinearUp { low, high } => format!("linear up, {}-{} -> 0-100", low, high),
            Curve::LinearDown { low, high } => format!("linear down, {}-{} -> 100-0", low, high),
            Curve::Piecewise { segments } => {
                let parts: Vec<String> = segments
                    .iter()
                    .map(|s| {
                        format!(
                            "{}-{} -> {}-{}",
                            s.raw_low, s.raw_high, s.out_low, s.out_high
                        )
                    })
                    .collect();
                format!("piecewise, {}", parts.join("; "))
            }
            Curve::Constant { value } => format!("constant {}", value),
        }
    }
}

/// Linear interpolation of `value` from `[raw_low, raw_high]` to
/// `[out_low, out_high]`, clamping `value` into the raw range first.
/// The output range may be descending.
fn lerp_clamped(value: f64, raw_low: f64, raw_high: f64, out_low: f64, out_high: f64) -> f64 {
    if raw_high <= raw_low {
        return out_low;
    }
    let t = ((value - raw_low) / (raw_high - raw_low)).clamp(0.0, 1.0);
    out_low + t * (out_high - out_low)
}

/// Pick the segment a raw value falls into. Segments are contiguous and
/// ascending; values below the first bound or above the last clamp into the
/// first/last segment respectively.
fn pick_segment(segments: &[Segment], value: f64) -> Option<&Segment> {
    segments
        .iter()
        .find(|seg| value < seg.raw_high)
        .or_else(|| segments.last())
}
