use std::io::{Read, stderr, stdin};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "cipher explorer", version)]
#[command(about = "Evaluates OpenSSL cipher list expressions for exploration and debugging")]
struct Args {
    /// The cipher list expression. If omitted, it is read from stdin.
    expression: Option<String>,
    /// Print one line per suite with protocol, key exchange,
    /// authentication, encryption, and MAC columns.
    #[arg(short, long)]
    verbose: bool,
    /// Print the runtime names a TLS provider would use.
    #[arg(short, long)]
    runtime: bool,
    /// Print the selected suites as JSON.
    #[arg(short, long)]
    json: bool,
    /// List every registered alias with its member count instead of
    /// evaluating an expression.
    #[arg(long)]
    aliases: bool,
    /// Suppress diagnostics about unknown elements.
    ///
    /// This just turns off the default `tracing` subscriber.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !args.quiet {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(stderr))
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .from_env_lossy(),
            )
            .init();
    }

    if args.aliases {
        for name in cipherlist::aliases() {
            let members = cipherlist::group(name).map_or(0, |suites| suites.len());
            println!("{name} ({members})");
        }
        return Ok(());
    }

    let expression = match args.expression {
        Some(expression) => expression,
        None => {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .context("cannot read the expression from stdin")?;
            buf
        }
    };

    let suites = cipherlist::parse(expression.trim());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&suites)?);
    } else if args.runtime {
        for name in suites.iter().flat_map(|suite| suite.runtime_names()) {
            println!("{name}");
        }
    } else if args.verbose {
        for suite in &suites {
            println!("{}", suite.verbose());
        }
    } else {
        let joined = suites
            .iter()
            .map(|suite| suite.openssl_name)
            .collect::<Vec<_>>()
            .join(":");
        println!("{joined}");
    }

    Ok(())
}
