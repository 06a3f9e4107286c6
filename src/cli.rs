use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "bench-delta")]
#[command(about = "Compare benchmark run results between solver configurations")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare the runs of two configurations and report what changed
    Compare(CompareArgs),
    /// Summarise run status counts per configuration
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
#[command(allow_negative_numbers = true)]
pub struct CompareArgs {
    /// Path to the statistics CSV file
    pub statistics: PathBuf,

    /// Configuration whose runs are the baseline
    pub from_config: String,

    /// Configuration whose runs are compared against the baseline
    pub to_config: String,

    /// Relative runtime change below which a difference is noise (0.1 = 10%)
    #[arg(long, default_value = "0.1")]
    pub time_delta: f64,

    /// Relative objective change below which a difference is noise
    #[arg(long, default_value = "0.05")]
    pub obj_delta: f64,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CompareArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.time_delta < 0.0 {
            return Err(format!("--time-delta must be non-negative (got {})", self.time_delta));
        }
        if self.obj_delta < 0.0 {
            return Err(format!("--obj-delta must be non-negative (got {})", self.obj_delta));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Path to the statistics CSV file
    pub statistics: PathBuf,

    /// Add a column per problem to the grouping key
    #[arg(long)]
    pub per_problem: bool,

    /// Add a column per model to the grouping key
    #[arg(long)]
    pub per_model: bool,

    /// Add a column per instance (data file name) to the grouping key
    #[arg(long)]
    pub per_instance: bool,

    /// Numeric CSV column to average per status cell (e.g. "time")
    #[arg(long, value_name = "COLUMN")]
    pub avg: Option<String>,

    /// Table style: grid, simple, pipe or plain
    #[arg(long, default_value = "grid")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_compare_defaults() {
        let args =
            CliArgs::parse_from(["bench-delta", "compare", "stats.csv", "confA", "confB"]);
        let Command::Compare(compare) = args.command else {
            panic!("expected compare subcommand");
        };
        assert_eq!(compare.time_delta, 0.1);
        assert_eq!(compare.obj_delta, 0.05);
        assert!(!compare.json);
        assert!(compare.validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let args = CliArgs::parse_from([
            "bench-delta",
            "compare",
            "stats.csv",
            "confA",
            "confB",
            "--time-delta",
            "-0.5",
        ]);
        let Command::Compare(compare) = args.command else {
            panic!("expected compare subcommand");
        };
        assert!(compare.validate().is_err());
    }

    #[test]
    fn test_status_flags() {
        let args = CliArgs::parse_from([
            "bench-delta",
            "status",
            "stats.csv",
            "--per-problem",
            "--avg",
            "time",
            "--format",
            "pipe",
        ]);
        let Command::Status(status) = args.command else {
            panic!("expected status subcommand");
        };
        assert!(status.per_problem);
        assert!(!status.per_model);
        assert_eq!(status.avg.as_deref(), Some("time"));
        assert_eq!(status.format, "pipe");
    }
}
