use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pwgen::{CharacterClass, GeneratorConfig, PasswordGenerator, Secret};

/// Generate random passwords and PINs.
#[derive(Parser)]
#[command(name = "pwgen")]
struct Args {
    /// Length of each password.
    #[arg(short, long, default_value_t = GeneratorConfig::DEFAULT_LENGTH as i64, allow_negative_numbers = true)]
    length: i64,
    /// Character class to draw from; may be repeated. Defaults to all of them.
    #[arg(short, long = "class", value_name = "upper|lower|digits|special")]
    classes: Vec<CharacterClass>,
    /// Number of passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Print the configuration and passwords as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    config: &'a GeneratorConfig,
    passwords: &'a [Secret],
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    let generator = PasswordGenerator::new(args.length, args.classes)?;
    tracing::debug!(count = args.count, "generating passwords");
    let passwords = (0..args.count)
        .map(|_| generator.generate())
        .collect::<Vec<_>>();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let output = JsonOutput {
            config: generator.config(),
            passwords: &passwords,
        };
        serde_json::to_writer_pretty(&mut out, &output)
            .context("failed to write JSON output")?;
        writeln!(out).context("failed to write output")?;
    } else {
        for password in &passwords {
            writeln!(out, "{}", password.as_str()).context("failed to write output")?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error(transparent)]
    InvalidConfig(#[from] pwgen::ValidationError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
