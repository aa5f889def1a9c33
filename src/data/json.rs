use std::fs;
use std::path::{Path, PathBuf};

use super::PortfolioRepository;
use crate::core::{Portfolio, Process, RoiCalculation};
use crate::errors::{Error, Result};

/// Repository backed by a JSON document of the form
/// `{"processes": [...], "roiCalculations": [...]}`.
///
/// The file is read on every call so edits are picked up between runs of a
/// long-lived caller.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Portfolio> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| {
                let message = format!("Failed to read dataset {}", self.path.display());
                Error::file_system(message, &self.path, e)
            })?;
        let portfolio: Portfolio = serde_json::from_str(&contents)
            .map_err(|e| Error::dataset(&self.path, e.to_string()))?;
        tracing::debug!(
            path = %self.path.display(),
            processes = portfolio.processes.len(),
            roi_calculations = portfolio.roi_calculations.len(),
            "loaded portfolio dataset"
        );
        Ok(portfolio)
    }
}

impl PortfolioRepository for JsonFileRepository {
    fn processes(&self) -> Result<Vec<Process>> {
        Ok(self.load()?.processes)
    }

    fn roi_calculations(&self) -> Result<Vec<RoiCalculation>> {
        Ok(self.load()?.roi_calculations)
    }

    fn portfolio(&self) -> Result<Portfolio> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::sample_portfolio;
    use tempfile::TempDir;

    #[test]
    fn test_round_trips_sample_portfolio() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.json");
        fs::write(&path, serde_json::to_string(&sample_portfolio()).unwrap()).unwrap();

        let repo = JsonFileRepository::new(&path);
        assert_eq!(repo.portfolio().unwrap(), sample_portfolio());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.json");
        fs::write(&path, "{}").unwrap();

        let repo = JsonFileRepository::new(&path);
        assert!(repo.processes().unwrap().is_empty());
        assert!(repo.roi_calculations().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_dataset_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{\"processes\": [").unwrap();

        let err = JsonFileRepository::new(&path).portfolio().unwrap_err();
        assert!(matches!(err, Error::Dataset { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_file_system_error() {
        let err = JsonFileRepository::new("/nonexistent/portfolio.json")
            .portfolio()
            .unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
