use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::scoring::Channel;

/// One day of biometric readings. Every channel is optional: a missing
/// field means "not measured", not zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Readings {
    /// Date the readings were taken, for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_sleep_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rem_sleep_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_calories: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_glucose: Option<f64>,
}

impl Readings {
    pub fn get(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::DeepSleep => self.deep_sleep_hours,
            Channel::RemSleep => self.rem_sleep_hours,
            Channel::Steps => self.steps,
            Channel::ActiveCalories => self.active_calories,
            Channel::RestingHeartRate => self.resting_heart_rate,
            Channel::Bmi => self.bmi,
            Channel::BodyWeight => self.weight_kg,
            Channel::AvgGlucose => self.avg_glucose,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        let slot = match channel {
            Channel::DeepSleep => &mut self.deep_sleep_hours,
            Channel::RemSleep => &mut self.rem_sleep_hours,
            Channel::Steps => &mut self.steps,
            Channel::ActiveCalories => &mut self.active_calories,
            Channel::RestingHeartRate => &mut self.resting_heart_rate,
            Channel::Bmi => &mut self.bmi,
            Channel::BodyWeight => &mut self.weight_kg,
            Channel::AvgGlucose => &mut self.avg_glucose,
        };
        *slot = Some(value);
    }

    /// True when no channel at all has a value
    pub fn is_empty(&self) -> bool {
        Channel::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

/// Load a readings file (JSON).
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not parse as a
/// readings document (including unknown fields, which usually mean a typo'd
/// channel name).
pub fn load_readings(path: &Path) -> Result<Readings> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open readings file at {}", path.display()))?;

    let readings: Readings = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse readings file at {}", path.display()))?;

    Ok(readings)
}

/// Bundled demo day for `score --sample`: a realistic mid-range reading set.
pub fn sample_readings() -> Readings {
    Readings {
        recorded_at: None,
        deep_sleep_hours: Some(1.8),
        rem_sleep_hours: Some(1.4),
        steps: Some(8500.0),
        active_calories: Some(520.0),
        resting_heart_rate: Some(62.0),
        bmi: Some(23.4),
        weight_kg: Some(72.5),
        avg_glucose: Some(94.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_full_readings() {
        let json = r#"{
            "recorded_at": "2025-11-03",
            "deep_sleep_hours": 2.1,
            "rem_sleep_hours": 1.6,
            "steps": 9200,
            "active_calories": 610,
            "resting_heart_rate": 58,
            "bmi": 22.8,
            "weight_kg": 70.0,
            "avg_glucose": 91
        }"#;
        let readings: Readings = serde_json::from_str(json).unwrap();
        assert_eq!(readings.deep_sleep_hours, Some(2.1));
        assert_eq!(readings.steps, Some(9200.0));
        assert_eq!(
            readings.recorded_at,
            Some(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap())
        );
    }

    #[test]
    fn test_parse_partial_readings() {
        let json = r#"{"steps": 4000}"#;
        let readings: Readings = serde_json::from_str(json).unwrap();
        assert_eq!(readings.steps, Some(4000.0));
        assert!(readings.deep_sleep_hours.is_none());
        assert!(readings.recorded_at.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"step_count": 4000}"#;
        assert!(serde_json::from_str::<Readings>(json).is_err());
    }

    #[test]
    fn test_empty_object_is_empty() {
        let readings: Readings = serde_json::from_str("{}").unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut readings = Readings::default();
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            readings.set(channel, i as f64);
        }
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(readings.get(channel), Some(i as f64));
        }
        assert!(!readings.is_empty());
    }

    #[test]
    fn test_sample_readings_cover_every_channel() {
        let sample = sample_readings();
        for channel in Channel::ALL {
            assert!(sample.get(channel).is_some(), "{:?} missing", channel);
        }
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = env::temp_dir().join("vitalscore_test_missing_readings.json");
        let _ = std::fs::remove_file(&path);
        assert!(load_readings(&path).is_err());
    }

    #[test]
    fn test_load_roundtrip() {
        let path = env::temp_dir().join("vitalscore_test_readings_roundtrip.json");
        let readings = sample_readings();
        std::fs::write(&path, serde_json::to_string_pretty(&readings).unwrap()).unwrap();

        let loaded = load_readings(&path).unwrap();
        assert_eq!(loaded, readings);

        let _ = std::fs::remove_file(&path);
    }
}
