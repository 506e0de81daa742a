use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "valmatch")]
#[command(about = "Evaluate JSON documents against declarative value matchers")]
pub struct Config {
    /// Path to the rule document (YAML, or JSON with a .json extension)
    #[arg(long, default_value = "rules.yaml", env = "VALMATCH_RULES_PATH")]
    pub rules_path: PathBuf,

    /// Path to the JSON input, `-` for stdin
    #[arg(long, default_value = "-", env = "VALMATCH_INPUT_PATH")]
    pub input: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, default_value = "false", env = "VALMATCH_LOG_JSON")]
    pub log_json: bool,

    /// Print evaluation metrics in Prometheus text format to stderr on exit
    #[arg(long, default_value = "false", env = "VALMATCH_PRINT_METRICS")]
    pub print_metrics: bool,
}

impl Config {
    /// Whether input is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rules_path: PathBuf::from("rules.yaml"),
            input: "-".to_string(),
            log_level: "warn".to_string(),
            log_json: false,
            print_metrics: false,
        }
    }
}
