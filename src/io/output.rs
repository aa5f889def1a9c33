use std::io::Write;

use comfy_table::{presets, ContentArrangement, Table};

use super::report::{DependenciesReport, DuplicatesReport, Report, RoiReport};
use crate::duplicates::{group_by_department, SimilarityBand};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::roi::{PaybackStatus, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = match report {
            Report::Roi(r) => serde_json::to_string_pretty(r)?,
            Report::Duplicates(r) => serde_json::to_string_pretty(r)?,
            Report::Dependencies(r) => serde_json::to_string_pretty(r)?,
        };
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub(crate) fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0.0 && rounded > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub(crate) fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "n/a".to_string()
    }
}

pub(crate) fn format_months(payback: Option<f64>) -> String {
    match payback {
        Some(months) if months.is_finite() => format!("{months:.1} mo"),
        _ => "never".to_string(),
    }
}

fn payback_label(status: PaybackStatus) -> &'static str {
    match status {
        PaybackStatus::Excellent => "Excellent",
        PaybackStatus::Good => "Good",
        PaybackStatus::Fair => "Fair",
        PaybackStatus::Poor => "Poor",
    }
}

fn risk_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Low",
        RiskLevel::Medium => "Medium",
        RiskLevel::High => "High",
        RiskLevel::Critical => "Critical",
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", report.title())?;
        writeln!(self.writer)?;
        match report {
            Report::Roi(r) => self.write_roi(r)?,
            Report::Duplicates(r) => self.write_duplicates(r)?,
            Report::Dependencies(r) => self.write_dependencies(r)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_roi(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        if let Some(department) = &report.department {
            writeln!(self.writer, "Department: {department}")?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "## Portfolio Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        let summary = &report.summary;
        writeln!(
            self.writer,
            "| Total Investment | {} |",
            format_currency(summary.total_investment)
        )?;
        writeln!(
            self.writer,
            "| Annual Savings | {} |",
            format_currency(summary.total_annual_savings)
        )?;
        writeln!(
            self.writer,
            "| Average Payback | {} |",
            format_months(summary.average_payback)
        )?;
        writeln!(
            self.writer,
            "| Average NPV | {} |",
            format_currency(summary.average_npv)
        )?;
        writeln!(
            self.writer,
            "| Average IRR | {} |",
            format_percent(summary.average_irr)
        )?;
        writeln!(self.writer)?;

        if report.entries.is_empty() {
            writeln!(self.writer, "No ROI calculations found.")?;
            return Ok(());
        }

        writeln!(self.writer, "## Candidates")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Process | Department | Investment | Annual Savings | Payback | NPV | IRR | Risk |"
        )?;
        writeln!(
            self.writer,
            "|---------|------------|------------|----------------|---------|-----|-----|------|"
        )?;
        for (entry, risk) in report.entries.iter().zip(&report.risk) {
            let m = &entry.metrics;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {:.0}/10 ({}) |",
                entry.process_name,
                entry.department,
                format_currency(m.implementation_cost),
                format_currency(m.annual_cost_savings),
                format_months(m.payback_period),
                format_currency(m.npv),
                format_percent(m.irr),
                m.risk_score,
                risk_label(risk.risk_level)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Departments")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Department | Processes | Investment | Savings | ROI | Avg Payback | Risk |"
        )?;
        writeln!(
            self.writer,
            "|------------|-----------|------------|---------|-----|-------------|------|"
        )?;
        for dept in &report.departments {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {:?} |",
                dept.department,
                dept.process_count,
                format_currency(dept.total_investment),
                format_currency(dept.total_savings),
                format_percent(dept.roi),
                format_months(dept.average_payback),
                dept.risk_level
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Break-even")?;
        writeln!(self.writer)?;
        for payback in &report.payback {
            let date = payback
                .break_even_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "not reached".to_string());
            writeln!(
                self.writer,
                "- **{}**: {} ({})",
                payback.process_name,
                date,
                payback_label(payback.status)
            )?;
        }
        Ok(())
    }

    fn write_duplicates(&mut self, report: &DuplicatesReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Scanned {} processes at threshold {:.2}; {} potential duplicates ({} already resolved).",
            report.processes_scanned,
            report.threshold,
            report.matches.len(),
            report.resolved_skipped
        )?;
        writeln!(self.writer)?;

        if report.matches.is_empty() {
            writeln!(self.writer, "No potential duplicates found.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "Potential consolidation savings: {}",
            format_currency(report.potential_savings)
        )?;
        writeln!(self.writer)?;

        for (department, matches) in group_by_department(&report.matches) {
            writeln!(self.writer, "## {department}")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Process 1 | Process 2 | Similarity | Reasons |")?;
            writeln!(self.writer, "|-----------|-----------|------------|---------|")?;
            for m in &matches {
                writeln!(
                    self.writer,
                    "| {} ({}) | {} ({}) | {:.0}% {} | {} |",
                    m.process1.title,
                    m.process1.id,
                    m.process2.title,
                    m.process2.id,
                    m.similarity * 100.0,
                    SimilarityBand::from_score(m.similarity).label(),
                    m.reasons.join(", ")
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_dependencies(&mut self, report: &DependenciesReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Processes")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Level | Id | Title | Status | Depends on | Dependents |"
        )?;
        writeln!(
            self.writer,
            "|-------|----|-------|--------|------------|------------|"
        )?;
        for node in &report.graph.nodes {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                node.level,
                node.id,
                node.title,
                node.status,
                join_or_dash(&node.dependencies),
                join_or_dash(&node.dependents)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Circular Dependencies")?;
        writeln!(self.writer)?;
        if report.cycles.is_empty() {
            writeln!(self.writer, "None detected.")?;
        } else {
            for cycle in &report.cycles {
                writeln!(self.writer, "- {}", format_cycle(cycle))?;
            }
        }

        if let Some(impact) = &report.impact {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "## Impact of {} ({})",
                impact.title, impact.process_id
            )?;
            writeln!(self.writer)?;
            let analysis = &impact.analysis;
            writeln!(self.writer, "- Impact score: {:.0}", analysis.impact_score)?;
            writeln!(self.writer, "- ROI exposure: {:.1}", analysis.roi_exposure)?;
            writeln!(
                self.writer,
                "- Direct dependencies: {}",
                join_titles(&analysis.direct_dependencies)
            )?;
            writeln!(
                self.writer,
                "- Indirect dependencies: {}",
                join_titles(&analysis.indirect_dependencies)
            )?;
            writeln!(
                self.writer,
                "- Dependents: {}",
                join_titles(&analysis.dependents)
            )?;
        }
        Ok(())
    }
}

fn join_or_dash(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}

fn join_titles(processes: &[crate::core::Process]) -> String {
    if processes.is_empty() {
        "none".to_string()
    } else {
        processes
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `A -> B -> A`, closing the loop back to the first id.
fn format_cycle(cycle: &[String]) -> String {
    cycle
        .iter()
        .chain(cycle.first())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(config),
            config,
        }
    }

    fn table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.config.unicode {
                presets::UTF8_FULL
            } else {
                presets::ASCII_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header.to_vec());
        table
    }

    fn heading(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(text))?;
        writeln!(self.writer, "{}", "=".repeat(text.chars().count()))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn payback_cell(&self, status: PaybackStatus, text: &str) -> String {
        match status {
            PaybackStatus::Excellent | PaybackStatus::Good => self.formatter.success(text),
            PaybackStatus::Fair => self.formatter.warning(text),
            PaybackStatus::Poor => self.formatter.error(text),
        }
    }

    fn risk_cell(&self, level: RiskLevel, text: &str) -> String {
        match level {
            RiskLevel::Low => self.formatter.success(text),
            RiskLevel::Medium => self.formatter.warning(text),
            RiskLevel::High | RiskLevel::Critical => self.formatter.error(text),
        }
    }

    fn write_roi(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        if let Some(department) = &report.department {
            writeln!(self.writer, "Department: {}", self.formatter.bold(department))?;
            writeln!(self.writer)?;
        }

        if report.entries.is_empty() {
            writeln!(self.writer, "{}", self.formatter.dim("No ROI calculations found."))?;
            return Ok(());
        }

        let mut candidates = self.table(&[
            "Process",
            "Department",
            "Investment",
            "Annual Savings",
            "Payback",
            "NPV",
            "IRR",
            "Risk",
        ]);
        for ((entry, payback), risk) in report.entries.iter().zip(&report.payback).zip(&report.risk) {
            let m = &entry.metrics;
            candidates.add_row(vec![
                entry.process_name.clone(),
                entry.department.clone(),
                format_currency(m.implementation_cost),
                format_currency(m.annual_cost_savings),
                self.payback_cell(payback.status, &format_months(m.payback_period)),
                format_currency(m.npv),
                format_percent(m.irr),
                self.risk_cell(
                    risk.risk_level,
                    &format!("{:.0}/10 {}", m.risk_score, risk_label(risk.risk_level)),
                ),
            ]);
        }
        writeln!(self.writer, "{candidates}")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Departments"))?;
        let mut departments = self.table(&[
            "Department",
            "Processes",
            "Investment",
            "Savings",
            "ROI",
            "Avg Payback",
        ]);
        for dept in &report.departments {
            departments.add_row(vec![
                dept.department.clone(),
                dept.process_count.to_string(),
                format_currency(dept.total_investment),
                format_currency(dept.total_savings),
                format_percent(dept.roi),
                format_months(dept.average_payback),
            ]);
        }
        writeln!(self.writer, "{departments}")?;
        writeln!(self.writer)?;

        let summary = &report.summary;
        writeln!(self.writer, "{}", self.formatter.bold("Summary"))?;
        writeln!(
            self.writer,
            "  Total investment:  {}",
            format_currency(summary.total_investment)
        )?;
        writeln!(
            self.writer,
            "  Annual savings:    {}",
            self.formatter
                .success(&format_currency(summary.total_annual_savings))
        )?;
        writeln!(
            self.writer,
            "  Average payback:   {}",
            format_months(summary.average_payback)
        )?;
        writeln!(
            self.writer,
            "  Average NPV:       {}",
            format_currency(summary.average_npv)
        )?;
        writeln!(
            self.writer,
            "  Average IRR:       {}",
            format_percent(summary.average_irr)
        )?;
        Ok(())
    }

    fn write_duplicates(&mut self, report: &DuplicatesReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Scanned {} processes at threshold {:.2}",
            report.processes_scanned, report.threshold
        )?;
        if report.resolved_skipped > 0 {
            writeln!(
                self.writer,
                "{}",
                self.formatter.dim(&format!(
                    "{} resolved pair(s) hidden",
                    report.resolved_skipped
                ))
            )?;
        }
        writeln!(self.writer)?;

        if report.matches.is_empty() {
            writeln!(
                self.writer,
                "{}",
                self.formatter.success("No potential duplicates found.")
            )?;
            return Ok(());
        }

        let mut table = self.table(&["Process 1", "Process 2", "Similarity", "Reasons"]);
        for m in &report.matches {
            let band = SimilarityBand::from_score(m.similarity);
            let score = format!("{:.0}% {}", m.similarity * 100.0, band.label());
            let score = match band {
                SimilarityBand::High => self.formatter.error(&score),
                SimilarityBand::Medium => self.formatter.warning(&score),
                SimilarityBand::Low => score,
            };
            table.add_row(vec![
                format!("{} ({})", m.process1.title, m.process1.id),
                format!("{} ({})", m.process2.title, m.process2.id),
                score,
                m.reasons.join(", "),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} potential duplicate(s); consolidation could save {}",
            self.formatter.bold(&report.matches.len().to_string()),
            self.formatter
                .success(&format_currency(report.potential_savings))
        )?;
        Ok(())
    }

    fn write_dependencies(&mut self, report: &DependenciesReport) -> anyhow::Result<()> {
        let mut table = self.table(&["Level", "Id", "Title", "Status", "Depends on", "Dependents"]);
        for node in &report.graph.nodes {
            table.add_row(vec![
                node.level.to_string(),
                node.id.clone(),
                node.title.clone(),
                node.status.to_string(),
                join_or_dash(&node.dependencies),
                join_or_dash(&node.dependents),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        if report.cycles.is_empty() {
            writeln!(
                self.writer,
                "{}",
                self.formatter.success("No circular dependencies detected.")
            )?;
        } else {
            writeln!(
                self.writer,
                "{}",
                self.formatter.error(&format!(
                    "{} circular dependenc{} detected:",
                    report.cycles.len(),
                    if report.cycles.len() == 1 { "y" } else { "ies" }
                ))
            )?;
            for cycle in &report.cycles {
                writeln!(self.writer, "  {}", format_cycle(cycle))?;
            }
        }

        if let Some(impact) = &report.impact {
            let analysis = &impact.analysis;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .bold(&format!("Impact of {} ({})", impact.title, impact.process_id))
            )?;
            writeln!(
                self.writer,
                "  Impact score:          {}",
                self.formatter.info(&format!("{:.0}", analysis.impact_score))
            )?;
            writeln!(
                self.writer,
                "  ROI exposure:          {:.1}",
                analysis.roi_exposure
            )?;
            writeln!(
                self.writer,
                "  Direct dependencies:   {}",
                join_titles(&analysis.direct_dependencies)
            )?;
            writeln!(
                self.writer,
                "  Indirect dependencies: {}",
                join_titles(&analysis.indirect_dependencies)
            )?;
            writeln!(
                self.writer,
                "  Dependents:            {}",
                join_titles(&analysis.dependents)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.heading(report.title())?;
        match report {
            Report::Roi(r) => self.write_roi(r)?,
            Report::Duplicates(r) => self.write_duplicates(r)?,
            Report::Dependencies(r) => self.write_dependencies(r)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    destination: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, formatting)),
    }
}
