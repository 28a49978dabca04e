use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use even_tree::{count_removable_edges, CounterConfig, Validation};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "even-tree",
    about = "Count edges removable from a rooted tree so every component has an even node count"
)]
struct Cli {
    /// Tree description (`N M` then `M` lines `child parent`); stdin if omitted.
    input: Option<PathBuf>,

    /// Skip structural checks and only reject out-of-range node labels.
    #[arg(long)]
    trust_input: bool,

    /// Raise log verbosity on stderr (repeatable). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let text = read_input(cli.input.as_ref())?;
    let config = CounterConfig {
        validation: if cli.trust_input {
            Validation::Trusting
        } else {
            Validation::Strict
        },
    };

    let report = count_removable_edges(&text, &config).context("failed to count removable edges")?;
    println!("{}", report.removable_edges);

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("failed to read input from stdin")?;
            Ok(text)
        }
    }
}
