use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};

/// Writes the default configuration into `dir`, returning the file path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_path;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();

        let path = init_config(temp.path(), false).unwrap();

        assert_eq!(path, temp.path().join(".coemap.toml"));
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.duplicate_threshold(), 0.6);
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".coemap.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert!(init_config(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config(temp.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);
    }
}
