//! Data access for portfolio records.
//!
//! Analysis code never reaches for global datasets; it is handed slices
//! loaded through a [`PortfolioRepository`].

mod json;
mod memory;
pub mod sample;

pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;

use crate::core::{Portfolio, Process, RoiCalculation};
use crate::errors::Result;

pub trait PortfolioRepository {
    fn processes(&self) -> Result<Vec<Process>>;
    fn roi_calculations(&self) -> Result<Vec<RoiCalculation>>;

    fn portfolio(&self) -> Result<Portfolio> {
        Ok(Portfolio {
            processes: self.processes()?,
            roi_calculations: self.roi_calculations()?,
        })
    }

    /// Calculations for one department, or all of them for `None`.
    fn roi_calculations_for(&self, department: Option<&str>) -> Result<Vec<RoiCalculation>> {
        let calculations = self.roi_calculations()?;
        Ok(match department {
            Some(dept) => calculations
                .into_iter()
                .filter(|c| c.department.eq_ignore_ascii_case(dept))
                .collect(),
            None => calculations,
        })
    }
}
