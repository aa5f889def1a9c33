//! Pairwise duplicate detection and dependency analysis over synthetic
//! portfolios of increasing size.

use coemap::core::Process;
use coemap::dependency::{build_dependency_graph, detect_circular_dependencies};
use coemap::duplicates::{find_duplicates, DEFAULT_THRESHOLD};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const DEPARTMENTS: &[&str] = &["Finance", "HR", "IT", "Legal", "Operations"];
const SUBJECTS: &[&str] = &[
    "Invoice", "Payroll", "Vendor", "Contract", "Ticket", "Expense", "Onboarding", "Claims",
];

fn synthetic_portfolio(size: usize) -> Vec<Process> {
    (0..size)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            let department = DEPARTMENTS[i % DEPARTMENTS.len()];
            let mut process = Process::new(format!("P{i:04}"), format!("{subject} Automation {i:04}"))
                .with_description(format!(
                    "Automate {subject} intake, validation and approval routing for {department}"
                ))
                .with_department(department)
                .with_tags([subject, department]);
            if i > 0 {
                process = process.with_dependencies([format!("Automation {:04}", i - 1)]);
            }
            process
        })
        .collect()
}

fn bench_find_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_duplicates");
    for size in [50, 200, 500] {
        let processes = synthetic_portfolio(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &processes, |b, processes| {
            b.iter(|| find_duplicates(black_box(processes), DEFAULT_THRESHOLD))
        });
    }
    group.finish();
}

fn bench_dependency_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_analysis");
    for size in [50, 200, 500] {
        let processes = synthetic_portfolio(size);
        group.bench_with_input(BenchmarkId::new("graph", size), &processes, |b, processes| {
            b.iter(|| build_dependency_graph(black_box(processes)))
        });
        group.bench_with_input(BenchmarkId::new("cycles", size), &processes, |b, processes| {
            b.iter(|| detect_circular_dependencies(black_box(processes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_duplicates, bench_dependency_analysis);
criterion_main!(benches);
