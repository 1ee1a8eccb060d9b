mod init;
mod schema;

pub use init::run_init;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/vitalscore/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("vitalscore")
}

/// Get the default config file path (~/.config/vitalscore/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// With no explicit path, a missing default config file is not an error:
/// the built-in channel table applies. An explicitly passed path that does
/// not exist is an error.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_explicit_missing_path_errors() {
        let path = env::temp_dir().join("vitalscore_test_missing_config.yaml");
        let _ = fs::remove_file(&path);
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_load_overrides() {
        let path = env::temp_dir().join("vitalscore_test_config.yaml");
        let yaml = r#"
scoring:
  steps:
    weight: 3.0
    curve: { shape: linear_up, low: 0.0, high: 12000.0 }
"#;
        fs::write(&path, yaml).unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring.steps.weight, 3.0);
        // Channels not named in the file keep their defaults
        assert_eq!(scoring.deep_sleep.weight, 1.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_config_uses_builtin_table() {
        let config = Config::default();
        let scoring = config.effective_scoring();
        assert_eq!(scoring, crate::scoring::ScoringConfig::default());
    }
}
