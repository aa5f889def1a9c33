use super::PortfolioRepository;
use crate::core::{Portfolio, Process, RoiCalculation};
use crate::errors::Result;

/// Repository over records already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    portfolio: Portfolio,
}

impl InMemoryRepository {
    pub fn new(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    /// The built-in demonstration portfolio
    pub fn sample() -> Self {
        Self::new(super::sample::sample_portfolio())
    }
}

impl PortfolioRepository for InMemoryRepository {
    fn processes(&self) -> Result<Vec<Process>> {
        Ok(self.portfolio.processes.clone())
    }

    fn roi_calculations(&self) -> Result<Vec<RoiCalculation>> {
        Ok(self.portfolio.roi_calculations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_repository_exposes_both_collections() {
        let repo = InMemoryRepository::sample();
        assert_eq!(repo.processes().unwrap().len(), 6);
        assert_eq!(repo.roi_calculations().unwrap().len(), 5);
    }

    #[test]
    fn test_department_filter_is_case_insensitive() {
        let repo = InMemoryRepository::sample();
        let finance = repo.roi_calculations_for(Some("finance")).unwrap();
        assert_eq!(finance.len(), 1);
        assert_eq!(finance[0].id, "roi1");
        assert_eq!(repo.roi_calculations_for(None).unwrap().len(), 5);
    }

    #[test]
    fn test_empty_repository() {
        let repo = InMemoryRepository::default();
        let portfolio = repo.portfolio().unwrap();
        assert!(portfolio.processes.is_empty());
        assert!(portfolio.roi_calculations.is_empty());
    }
}
