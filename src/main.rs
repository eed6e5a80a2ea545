//! Driver binary: load an individual file, run the greedy aggregation
//! search, re-verify the carried error, and write the report.
//!
//! Usage:
//!
//! ```text
//! objective-reduction <file> <k> [a] [-o <outputfile>]
//! ```
//!
//! `a` optimizes the average delta error instead of the maximum; `-o`
//! writes the report to a file instead of standard output.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use objective_reduction::prelude::*;

struct Invocation {
    input: PathBuf,
    k: usize,
    variant: ErrorVariant,
    output: Option<PathBuf>,
}

impl Invocation {
    fn parse(args: &[String]) -> Option<Self> {
        if args.len() < 2 || args.len() > 5 {
            return None;
        }

        let (args, output) = if args.len() >= 4 && args[args.len() - 2] == "-o" {
            (
                &args[..args.len() - 2],
                Some(PathBuf::from(&args[args.len() - 1])),
            )
        } else {
            (args, None)
        };

        let variant = match args {
            [_, _] => ErrorVariant::Maximum,
            [_, _, flag] if flag.as_str() == "a" => ErrorVariant::Average,
            _ => return None,
        };

        let k = args[1].parse().ok()?;

        Some(Self {
            input: PathBuf::from(&args[0]),
            k,
            variant,
            output,
        })
    }
}

fn print_usage() {
    eprintln!("Wrong usage.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("   objective-reduction <file> <k> [-o <outputfile>]");
    eprintln!("   or");
    eprintln!("   objective-reduction <file> <k> a [-o <outputfile>]");
    eprintln!();
    eprintln!("   (where a is the single character 'a'");
    eprintln!("   indicating that the average delta error has to be optimized)");
    eprintln!();
    eprintln!("   Adding '-o <outputfile>' as last argument will result");
    eprintln!("      in writing all output to that file");
    eprintln!("      instead of writing to standard output.");
}

fn run(invocation: &Invocation) -> Result<()> {
    let started = Instant::now();

    let table = load_table(&invocation.input)
        .with_context(|| format!("failed to load {}", invocation.input.display()))?;

    let outcome = search(&table, invocation.k, invocation.variant).context("search failed")?;
    let verification = verify(&outcome, &table).context("verification failed")?;

    let elapsed_ms = started.elapsed().as_millis();
    let report = render(&outcome, &verification, invocation.variant, elapsed_ms);

    match &invocation.output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{report}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = Invocation::parse(&args) else {
        print_usage();
        return ExitCode::from(2);
    };

    match run(&invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
