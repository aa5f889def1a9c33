// Shared fixtures for coemap integration tests
#![allow(dead_code)]

use coemap::core::{
    CurrentState, ImplementationCosts, Process, ProposedState, RoiCalculation,
};

/// A proposal with the given title, department, tags and dependencies.
pub fn proposal(id: &str, title: &str, department: &str, tags: &[&str], deps: &[&str]) -> Process {
    Process::new(id, title)
        .with_department(department)
        .with_tags(tags.iter().copied())
        .with_dependencies(deps.iter().copied())
}

/// 10k transactions a year cut from 20 to 5 minutes at $35/h, 80% automated,
/// against a $175k build.
pub fn invoice_roi() -> RoiCalculation {
    RoiCalculation {
        id: "roi-invoice".to_string(),
        process_name: "Invoice Processing".to_string(),
        department: "Finance".to_string(),
        current_state: CurrentState {
            annual_volume: 10_000.0,
            time_per_transaction: 20.0,
            error_rate: 5.0,
            resource_cost: 35.0,
            annual_operating_cost: 60_000.0,
        },
        proposed_state: ProposedState {
            automation_level: 80.0,
            time_per_transaction: 5.0,
            error_rate: 1.0,
            maintenance_cost: 10_000.0,
            licensing_cost: 15_000.0,
        },
        implementation_costs: ImplementationCosts {
            development: 100_000.0,
            training: 20_000.0,
            infrastructure: 30_000.0,
            testing: 15_000.0,
            deployment: 10_000.0,
        },
    }
}

/// Zero-padded titles so no title is a substring of another.
pub fn step_title(index: usize) -> String {
    format!("Step{index:03}")
}

/// `Step000 -> Step001 -> ... -> Step{n-1}`, closed into a ring when asked.
pub fn chain(len: usize, closed: bool) -> Vec<Process> {
    (0..len)
        .map(|i| {
            let next = if i + 1 < len {
                Some(step_title(i + 1))
            } else if closed {
                Some(step_title(0))
            } else {
                None
            };
            Process::new(format!("S{i}"), step_title(i)).with_dependencies(next)
        })
        .collect()
}

pub fn portfolio_json(processes: &[Process], calculations: &[RoiCalculation]) -> String {
    serde_json::to_string_pretty(&coemap::core::Portfolio {
        processes: processes.to_vec(),
        roi_calculations: calculations.to_vec(),
    })
    .unwrap()
}
