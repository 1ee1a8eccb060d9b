use serde::{Deserialize, Serialize};

/// One named biometric input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    DeepSleep,
    RemSleep,
    Steps,
    ActiveCalories,
    RestingHeartRate,
    Bmi,
    BodyWeight,
    AvgGlucose,
}

impl Channel {
    /// All channels in display order. Iterating this list is how the engine
    /// walks a sparse reading set; absent channels are simply skipped.
    pub const ALL: [Channel; 8] = [
        Channel::DeepSleep,
        Channel::RemSleep,
        Channel::Steps,
        Channel::ActiveCalories,
        Channel::RestingHeartRate,
        Channel::Bmi,
        Channel::BodyWeight,
        Channel::AvgGlucose,
    ];

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Channel::DeepSleep => "Deep sleep",
            Channel::RemSleep => "REM sleep",
            Channel::Steps => "Steps",
            Channel::ActiveCalories => "Active calories",
            Channel::RestingHeartRate => "Resting heart rate",
            Channel::Bmi => "BMI",
            Channel::BodyWeight => "Body weight",
            Channel::AvgGlucose => "Avg glucose",
        }
    }

    /// Measurement unit, empty for unitless channels (steps, BMI)
    pub fn unit(&self) -> &'static str {
        match self {
            Channel::DeepSleep | Channel::RemSleep => "h",
            Channel::Steps => "",
            Channel::ActiveCalories => "kcal",
            Channel::RestingHeartRate => "bpm",
            Channel::Bmi => "",
            Channel::BodyWeight => "kg",
            Channel::AvgGlucose => "mg/dL",
        }
    }

    /// Key used in config files and serialized output (matches serde)
    pub fn key(&self) -> &'static str {
        match self {
            Channel::DeepSleep => "deep_sleep",
            Channel::RemSleep => "rem_sleep",
            Channel::Steps => "steps",
            Channel::ActiveCalories => "active_calories",
            Channel::RestingHeartRate => "resting_heart_rate",
            Channel::Bmi => "bmi",
            Channel::BodyWeight => "body_weight",
            Channel::AvgGlucose => "avg_glucose",
        }
    }
}
