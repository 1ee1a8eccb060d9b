use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::PathBuf;

use super::schema::Config;
use crate::scoring::ScoringConfig;

/// Write the default config file so users have a full channel table to tune.
///
/// Refuses to overwrite an existing file unless `force` is set. The write is
/// atomic, so a crash mid-write never leaves a truncated config behind.
pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = path.unwrap_or_else(super::get_config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Pass --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
    };
    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    file.commit().context("Failed to save config")?;

    println!("Config written to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_init_writes_parsable_config() {
        let path = env::temp_dir().join("vitalscore_test_init.yaml");
        let _ = std::fs::remove_file(&path);

        run_init(Some(path.clone()), false).unwrap();

        let config = crate::config::load_config(Some(path.clone())).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring, ScoringConfig::default());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let path = env::temp_dir().join("vitalscore_test_init_existing.yaml");
        std::fs::write(&path, "scoring:\n").unwrap();

        assert!(run_init(Some(path.clone()), false).is_err());
        // Force wins
        run_init(Some(path.clone()), true).unwrap();

        let _ = std::fs::remove_file(&path);
    }
}
