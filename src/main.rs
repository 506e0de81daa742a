use std::fs::File;
use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use valmatch::config::Config;
use valmatch::observability::{init_tracing, MetricsRegistry};
use valmatch::policy::RuleLoader;
use valmatch::rules::evaluate_stream;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_tracing(&config.log_level, config.log_json);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting valmatch");

    let loader = RuleLoader::new(&config.rules_path);
    let (_, ruleset) = loader
        .load()
        .with_context(|| format!("loading rules from {}", loader.path().display()))?;

    let input: Box<dyn Read> = if config.reads_stdin() {
        Box::new(io::stdin().lock())
    } else {
        let file =
            File::open(&config.input).with_context(|| format!("opening {}", config.input))?;
        Box::new(file)
    };

    let metrics = MetricsRegistry::new();
    let result = evaluate_stream(&ruleset, input, io::stdout().lock(), &metrics);

    if config.print_metrics {
        eprint!("{}", metrics.to_prometheus());
    }

    let count = result.context("evaluating input")?;
    info!(documents = count, "Finished");
    Ok(())
}
