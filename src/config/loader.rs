use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CoemapConfig;
use super::scoring::{ImpactWeights, SimilarityWeights};
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".coemap.toml";

/// Pure function to read and parse config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and repair or reject invalid sections.
///
/// Bad similarity or impact weights fall back to defaults with a warning;
/// out-of-range thresholds and financial constants are hard errors because
/// they would silently change every reported figure.
pub fn parse_and_validate_config(contents: &str) -> Result<CoemapConfig> {
    let mut config = toml::from_str::<CoemapConfig>(contents)?;

    if let Some(ref mut duplicates) = config.duplicates {
        if !(0.0..=1.0).contains(&duplicates.threshold) {
            return Err(Error::Validation(format!(
                "duplicates.threshold must be between 0.0 and 1.0, got {}",
                duplicates.threshold
            )));
        }

        if let Err(e) = duplicates.weights.validate() {
            log::warn!("Invalid similarity weights: {}. Using defaults.", e);
            duplicates.weights = SimilarityWeights::default();
        } else {
            duplicates.weights.normalize();
        }
    }

    if let Some(weights) = config.dependencies {
        if let Err(e) = weights.validate() {
            log::warn!("Invalid impact weights: {}. Using defaults.", e);
            config.dependencies = Some(ImpactWeights::default());
        }
    }

    if let Some(ref roi) = config.roi {
        roi.validate().map_err(Error::Configuration)?;
    }

    Ok(config)
}

/// Load and validate an explicitly named config file
pub fn load_config_from_path(config_path: &Path) -> Result<CoemapConfig> {
    let contents = read_config_file(config_path)
        .map_err(|e| Error::file_system("Failed to read config file", config_path, e))?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CoemapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.coemap.toml` starting at `start`
pub fn load_config_from_dir(start: PathBuf) -> CoemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CoemapConfig::default()
        })
}

pub fn load_config() -> CoemapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CoemapConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [roi]
            discount_rate = 0.08
            horizon_years = 3

            [duplicates]
            threshold = 0.7

            [duplicates.weights]
            title = 0.5
            description = 0.2
            tags = 0.2
            department = 0.1
            dependencies = 0.0

            [dependencies]
            dependent = 20.0
            direct = 10.0
            indirect = 2.0

            [debounce]
            delay_ms = 150
        "#})
        .unwrap();

        let roi = config.roi_settings();
        assert_eq!(roi.discount_rate, 0.08);
        assert_eq!(roi.horizon_years, 3);
        assert_eq!(config.duplicate_threshold(), 0.7);
        assert_eq!(config.similarity_weights().title, 0.5);
        assert_eq!(config.impact_weights().dependent, 20.0);
        assert_eq!(config.debounce_delay_ms(), 150);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.duplicate_threshold(), 0.6);
        assert_eq!(config.debounce_delay_ms(), 300);
        assert_eq!(config.roi_settings().discount_rate, 0.10);
    }

    #[test]
    fn test_invalid_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [duplicates.weights]
            title = 2.0
        "#})
        .unwrap();
        assert_eq!(config.similarity_weights(), SimilarityWeights::default());
    }

    #[test]
    fn test_unnormalized_weights_are_normalized() {
        let config = parse_and_validate_config(indoc! {r#"
            [duplicates.weights]
            title = 0.4
            description = 0.4
            tags = 0.4
            department = 0.4
            dependencies = 0.4
        "#})
        .unwrap();
        let weights = config.similarity_weights();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!((weights.title - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        let result = parse_and_validate_config(indoc! {r#"
            [duplicates]
            threshold = 1.5
        "#});
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_invalid_roi_settings_rejected() {
        let result = parse_and_validate_config(indoc! {r#"
            [roi]
            horizon_years = 0
        "#});
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_oversized_horizons_rejected() {
        let years = parse_and_validate_config(indoc! {r#"
            [roi]
            horizon_years = 51
        "#});
        assert!(matches!(years, Err(Error::Configuration(_))));

        let months = parse_and_validate_config(indoc! {r#"
            [roi]
            payback_horizon_months = 601
        "#});
        assert!(matches!(months, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = parse_and_validate_config("[roi\ndiscount_rate = ");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_config_found_in_ancestor_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[debounce]\ndelay_ms = 42\n",
        )
        .unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from_dir(nested);
        assert_eq!(config.debounce_delay_ms(), 42);
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(
            ancestors,
            vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]
        );
    }

    #[test]
    fn test_missing_explicit_config_is_file_system_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }
}
