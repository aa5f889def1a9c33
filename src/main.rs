use std::path::Path;

use anyhow::Result;
use clap::Parser;
use coemap::cli::{Cli, Commands};
use coemap::commands::{self, CommandContext};
use coemap::config::{load_config, load_config_from_path, CoemapConfig};
use coemap::formatting::FormattingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    let formatting = formatting_for(cli.plain, &config);
    let context = CommandContext::new(config, formatting);

    match cli.command {
        Commands::Roi {
            data,
            department,
            horizon,
            format,
            output,
        } => commands::run_roi(
            commands::RoiConfig {
                data,
                department,
                horizon_months: horizon,
                format: format.map(Into::into),
                output,
                as_of: None,
            },
            &context,
        ),
        Commands::Duplicates {
            data,
            threshold,
            resolved,
            format,
            output,
        } => commands::run_duplicates(
            commands::DuplicatesConfig {
                data,
                threshold,
                resolved,
                format: format.map(Into::into),
                output,
            },
            &context,
        ),
        Commands::Dependencies {
            data,
            process,
            format,
            output,
        } => commands::run_dependencies(
            commands::DependenciesConfig {
                data,
                process,
                format: format.map(Into::into),
                output,
            },
            &context,
        ),
        Commands::Init { force } => {
            commands::init_config(Path::new("."), force)?;
            println!("Created .coemap.toml configuration file");
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags step from warn up to trace.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn formatting_for(plain: bool, config: &CoemapConfig) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    let use_color = config.output.as_ref().and_then(|o| o.use_color);
    FormattingConfig::from_env().with_color_preference(use_color)
}
