//! CLI command implementations.
//!
//! - **roi**: financial metrics, payback timelines, risk and department rollups
//! - **duplicates**: likely duplicate proposals and consolidation savings
//! - **dependencies**: dependency map, cycles and change impact
//! - **init**: write a default `.coemap.toml`
//!
//! Handlers load the portfolio through a [`PortfolioRepository`], build a
//! report and hand it to the writer for the requested format.

pub mod dependencies;
pub mod duplicates;
pub mod init;
pub mod roi;

pub use dependencies::{run_dependencies, DependenciesConfig};
pub use duplicates::{run_duplicates, DuplicatesConfig};
pub use init::init_config;
pub use roi::{run_roi, RoiConfig};

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::CoemapConfig;
use crate::data::{InMemoryRepository, JsonFileRepository, PortfolioRepository};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, open_destination, OutputFormat, Report};

/// Settings shared by every analysis command
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config: CoemapConfig,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    pub fn new(config: CoemapConfig, formatting: FormattingConfig) -> Self {
        Self { config, formatting }
    }

    /// Explicit format, else the config file's default, else terminal.
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested
            .or_else(|| {
                self.config.default_format().and_then(|name| {
                    let parsed = OutputFormat::parse(name);
                    if parsed.is_none() {
                        tracing::warn!(format = name, "unknown output.default_format, ignoring");
                    }
                    parsed
                })
            })
            .unwrap_or(OutputFormat::Terminal)
    }
}

/// The dataset at `data`, or the built-in sample portfolio.
pub fn open_repository(data: Option<&Path>) -> Box<dyn PortfolioRepository> {
    match data {
        Some(path) => Box::new(JsonFileRepository::new(path)),
        None => Box::new(InMemoryRepository::sample()),
    }
}

pub(crate) fn emit(
    report: &Report,
    format: OutputFormat,
    output: Option<&PathBuf>,
    formatting: FormattingConfig,
) -> Result<()> {
    let destination = open_destination(output.map(PathBuf::as_path))?;
    let mut writer = create_writer(format, destination, formatting);
    writer.write_report(report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;

    #[test]
    fn test_format_falls_back_to_config_then_terminal() {
        let mut context = CommandContext::default();
        assert_eq!(context.resolve_format(None), OutputFormat::Terminal);
        assert_eq!(
            context.resolve_format(Some(OutputFormat::Json)),
            OutputFormat::Json
        );

        context.config = parse_and_validate_config("[output]\ndefault_format = \"markdown\"\n").unwrap();
        assert_eq!(context.resolve_format(None), OutputFormat::Markdown);

        context.config = parse_and_validate_config("[output]\ndefault_format = \"pdf\"\n").unwrap();
        assert_eq!(context.resolve_format(None), OutputFormat::Terminal);
    }

    #[test]
    fn test_sample_repository_without_data_path() {
        let repository = open_repository(None);
        assert_eq!(repository.processes().unwrap().len(), 6);
    }
}
