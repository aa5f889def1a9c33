use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::roi::MAX_PAYBACK_HORIZON_MONTHS;

#[derive(Parser, Debug)]
#[command(name = "coemap")]
#[command(
    about = "ROI, duplicate and dependency analytics for automation portfolios",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .coemap.toml)
    #[arg(long, global = true, env = "COEMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Plain output: ASCII tables, no colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Financial metrics, payback timelines and risk for ROI calculations
    Roi {
        /// Portfolio JSON file (defaults to the built-in sample portfolio)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Only include calculations for this department
        #[arg(long)]
        department: Option<String>,

        /// Months shown in payback timelines (1-600)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAYBACK_HORIZON_MONTHS as i64))]
        horizon: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Find process proposals that look like the same piece of work
    Duplicates {
        /// Portfolio JSON file (defaults to the built-in sample portfolio)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Minimum similarity (0.0-1.0) for a pair to be reported
        #[arg(long, value_parser = parse_unit_interval)]
        threshold: Option<f64>,

        /// Pairs already merged or dismissed, as ID1-ID2
        #[arg(long, value_delimiter = ',')]
        resolved: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dependency map, circular dependencies and change impact
    Dependencies {
        /// Portfolio JSON file (defaults to the built-in sample portfolio)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Analyze the impact of changing this process
        #[arg(long)]
        process: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

fn parse_unit_interval(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0.0 and 1.0, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_roi_command() {
        let cli = Cli::parse_from([
            "coemap",
            "roi",
            "--department",
            "Finance",
            "--horizon",
            "24",
            "-f",
            "json",
        ]);

        match cli.command {
            Commands::Roi {
                department,
                horizon,
                format,
                data,
                ..
            } => {
                assert_eq!(department.as_deref(), Some("Finance"));
                assert_eq!(horizon, Some(24));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(data.is_none());
            }
            _ => panic!("Expected Roi command"),
        }
    }

    #[test]
    fn test_horizon_outside_timeline_range_is_rejected() {
        assert!(Cli::try_parse_from(["coemap", "roi", "--horizon", "0"]).is_err());
        assert!(Cli::try_parse_from(["coemap", "roi", "--horizon", "601"]).is_err());
        assert!(Cli::try_parse_from(["coemap", "roi", "--horizon", "4294967295"]).is_err());
        assert!(Cli::try_parse_from(["coemap", "roi", "--horizon", "600"]).is_ok());
    }

    #[test]
    fn test_cli_parsing_resolved_pairs() {
        let cli = Cli::parse_from(["coemap", "duplicates", "--resolved", "P1-P2,P3-P4"]);

        match cli.command {
            Commands::Duplicates { resolved, .. } => {
                assert_eq!(resolved, vec!["P1-P2", "P3-P4"]);
            }
            _ => panic!("Expected Duplicates command"),
        }
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        let result = Cli::try_parse_from(["coemap", "duplicates", "--threshold", "1.5"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["coemap", "duplicates", "--threshold", "0.75"]).unwrap();
        match cli.command {
            Commands::Duplicates { threshold, .. } => assert_eq!(threshold, Some(0.75)),
            _ => panic!("Expected Duplicates command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["coemap", "dependencies", "--plain", "-vv", "--process", "P001"]);

        assert!(cli.plain);
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Dependencies { process, .. } => {
                assert_eq!(process.as_deref(), Some("P001"));
            }
            _ => panic!("Expected Dependencies command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["coemap", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
