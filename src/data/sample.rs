//! Demonstration portfolio used when no dataset is supplied.

use chrono::NaiveDate;

use crate::core::{
    Complexity, CurrentState, ImplementationCosts, Portfolio, Priority, Process, ProcessStatus,
    ProposedState, RoiCalculation,
};

pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        processes: sample_processes(),
        roi_calculations: sample_roi_calculations(),
    }
}

#[allow(clippy::too_many_arguments)]
fn proposal(
    id: &str,
    title: &str,
    description: &str,
    department: &str,
    priority: Priority,
    expected_roi: f64,
    status: ProcessStatus,
    submitted_by: &str,
    submitted_date: (i32, u32, u32),
    estimated_savings: f64,
    complexity: Complexity,
    dependencies: &[&str],
    tags: &[&str],
) -> Process {
    let (y, m, d) = submitted_date;
    Process {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        department: department.to_string(),
        priority,
        expected_roi,
        status,
        submitted_by: submitted_by.to_string(),
        submitted_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        estimated_savings,
        complexity,
        dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn sample_processes() -> Vec<Process> {
    vec![
        proposal(
            "P001",
            "Invoice Processing Automation",
            "Automate the entire invoice processing workflow from receipt to payment approval, reducing manual intervention by 85%",
            "Finance",
            Priority::High,
            340_000.0,
            ProcessStatus::InDevelopment,
            "Sarah Chen",
            (2024, 1, 15),
            450_000.0,
            Complexity::Medium,
            &["ERP Integration", "OCR System"],
            &["Finance", "OCR", "Approval Workflow"],
        ),
        proposal(
            "P002",
            "Employee Onboarding Bot",
            "Streamline new hire onboarding with automated document collection, system provisioning, and training scheduling",
            "HR",
            Priority::Medium,
            180_000.0,
            ProcessStatus::UnderReview,
            "Michael Rodriguez",
            (2024, 1, 20),
            220_000.0,
            Complexity::High,
            &["HRIS Integration", "Identity Management"],
            &["HR", "Onboarding", "Document Management"],
        ),
        proposal(
            "P003",
            "Customer Data Reconciliation",
            "Automated cross-system data validation and reconciliation for customer records across CRM, billing, and support systems",
            "Operations",
            Priority::Critical,
            520_000.0,
            ProcessStatus::Deployed,
            "Emma Thompson",
            (2023, 12, 10),
            680_000.0,
            Complexity::High,
            &["CRM API", "Data Warehouse"],
            &["Data Quality", "CRM", "Reconciliation"],
        ),
        proposal(
            "P004",
            "Expense Report Processing",
            "Automate expense report validation, approval routing, and reimbursement processing with intelligent receipt scanning",
            "Finance",
            Priority::Medium,
            95_000.0,
            ProcessStatus::Submitted,
            "David Park",
            (2024, 1, 25),
            125_000.0,
            Complexity::Low,
            &["Receipt OCR", "Approval System"],
            &["Finance", "Expenses", "OCR", "Mobile"],
        ),
        proposal(
            "P005",
            "IT Ticket Auto-Assignment",
            "Intelligent routing and assignment of IT support tickets based on content analysis, priority, and technician availability",
            "IT",
            Priority::High,
            280_000.0,
            ProcessStatus::InDevelopment,
            "Lisa Wang",
            (2024, 1, 8),
            320_000.0,
            Complexity::Medium,
            &["NLP Engine", "Ticketing System"],
            &["IT Support", "NLP", "Routing"],
        ),
        proposal(
            "P006",
            "Contract Renewal Management",
            "Proactive contract monitoring with automated renewal notifications, risk assessment, and vendor performance tracking",
            "Legal",
            Priority::Medium,
            150_000.0,
            ProcessStatus::UnderReview,
            "James Miller",
            (2024, 1, 18),
            200_000.0,
            Complexity::Medium,
            &["Contract Database", "Calendar Integration"],
            &["Legal", "Contracts", "Compliance"],
        ),
    ]
}

fn candidate(
    id: &str,
    process_name: &str,
    department: &str,
    current_state: CurrentState,
    proposed_state: ProposedState,
    implementation_costs: ImplementationCosts,
) -> RoiCalculation {
    RoiCalculation {
        id: id.to_string(),
        process_name: process_name.to_string(),
        department: department.to_string(),
        current_state,
        proposed_state,
        implementation_costs,
    }
}

pub fn sample_roi_calculations() -> Vec<RoiCalculation> {
    vec![
        candidate(
            "roi1",
            "Invoice Processing Automation",
            "Finance",
            CurrentState {
                annual_volume: 24_000.0,
                time_per_transaction: 15.0,
                error_rate: 5.0,
                resource_cost: 35.0,
                annual_operating_cost: 50_000.0,
            },
            ProposedState {
                automation_level: 85.0,
                time_per_transaction: 3.0,
                error_rate: 0.5,
                maintenance_cost: 15_000.0,
                licensing_cost: 25_000.0,
            },
            ImplementationCosts {
                development: 150_000.0,
                training: 25_000.0,
                infrastructure: 40_000.0,
                testing: 20_000.0,
                deployment: 15_000.0,
            },
        ),
        candidate(
            "roi2",
            "Employee Onboarding System",
            "HR",
            CurrentState {
                annual_volume: 500.0,
                time_per_transaction: 240.0,
                error_rate: 8.0,
                resource_cost: 45.0,
                annual_operating_cost: 30_000.0,
            },
            ProposedState {
                automation_level: 70.0,
                time_per_transaction: 60.0,
                error_rate: 1.0,
                maintenance_cost: 8_000.0,
                licensing_cost: 12_000.0,
            },
            ImplementationCosts {
                development: 80_000.0,
                training: 15_000.0,
                infrastructure: 20_000.0,
                testing: 10_000.0,
                deployment: 8_000.0,
            },
        ),
        candidate(
            "roi3",
            "Customer Data Reconciliation",
            "Operations",
            CurrentState {
                annual_volume: 12_000.0,
                time_per_transaction: 45.0,
                error_rate: 12.0,
                resource_cost: 40.0,
                annual_operating_cost: 35_000.0,
            },
            ProposedState {
                automation_level: 90.0,
                time_per_transaction: 8.0,
                error_rate: 1.5,
                maintenance_cost: 20_000.0,
                licensing_cost: 30_000.0,
            },
            ImplementationCosts {
                development: 200_000.0,
                training: 30_000.0,
                infrastructure: 50_000.0,
                testing: 25_000.0,
                deployment: 20_000.0,
            },
        ),
        candidate(
            "roi4",
            "IT Ticket Classification",
            "IT",
            CurrentState {
                annual_volume: 8_000.0,
                time_per_transaction: 10.0,
                error_rate: 15.0,
                resource_cost: 50.0,
                annual_operating_cost: 25_000.0,
            },
            ProposedState {
                automation_level: 95.0,
                time_per_transaction: 2.0,
                error_rate: 2.0,
                maintenance_cost: 12_000.0,
                licensing_cost: 18_000.0,
            },
            ImplementationCosts {
                development: 120_000.0,
                training: 20_000.0,
                infrastructure: 35_000.0,
                testing: 15_000.0,
                deployment: 10_000.0,
            },
        ),
        candidate(
            "roi5",
            "Purchase Order Processing",
            "Procurement",
            CurrentState {
                annual_volume: 6_000.0,
                time_per_transaction: 30.0,
                error_rate: 6.0,
                resource_cost: 38.0,
                annual_operating_cost: 28_000.0,
            },
            ProposedState {
                automation_level: 75.0,
                time_per_transaction: 8.0,
                error_rate: 1.0,
                maintenance_cost: 10_000.0,
                licensing_cost: 15_000.0,
            },
            ImplementationCosts {
                development: 100_000.0,
                training: 18_000.0,
                infrastructure: 25_000.0,
                testing: 12_000.0,
                deployment: 8_000.0,
            },
        ),
    ]
}
