#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod error;
use argh::FromArgs;
use error::CliError;
use log::{info, Level};
use std::process::ExitCode;
use tdm_demux::harness::{run, BenchConfig, Workspace};
use tdm_demux::{DemuxVariant, ITERATIONS};

#[derive(FromArgs, Debug)]
/// Verifies every TDM demux variant against the reference, then times it.
struct Args {
    /// timed calls per variant
    #[argh(option, default = "ITERATIONS")]
    iterations: u32,

    /// timed loops per variant, each printed on its own line
    #[argh(option, default = "1")]
    repetitions: u32,

    /// only run this variant (case-insensitive); may be repeated
    #[argh(option)]
    variant: Vec<String>,

    /// print the variant names and exit
    #[argh(switch)]
    list: bool,

    /// log progress at info level
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// log every timed loop
    #[argh(switch)]
    trace: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            // A failed verification is part of the report.
            if code == 1 {
                println!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::from(code)
        }
    }
}

fn execute(args: &Args) -> Result<(), CliError> {
    setup_logger(args)?;

    if args.list {
        for variant in DemuxVariant::all_values() {
            println!("{variant}");
        }
        return Ok(());
    }

    if args.repetitions == 0 {
        return Err(CliError::NoRepetitions);
    }

    let variants = select_variants(&args.variant)?;
    let config = BenchConfig {
        iterations: args.iterations,
        repetitions: args.repetitions,
    };
    info!(
        "Timing {} variants, {} iterations x {} repetitions",
        variants.len(),
        config.iterations,
        config.repetitions
    );

    let mut workspace = Workspace::new()?;
    run(&mut workspace, &variants, &config, |measurement| {
        println!("{measurement}")
    })?;
    Ok(())
}

fn setup_logger(args: &Args) -> Result<(), CliError> {
    let log_level = if args.trace {
        Level::Trace
    } else if args.verbose {
        Level::Info
    } else {
        Level::Warn
    };

    simple_logger::init_with_level(log_level)?;
    info!("Log level: {log_level}");
    Ok(())
}

/// Resolves `--variant` names. Registry order is kept regardless of the order given.
fn select_variants(names: &[String]) -> Result<Vec<DemuxVariant>, CliError> {
    if names.is_empty() {
        return Ok(DemuxVariant::all_values().to_vec());
    }

    let mut chosen = Vec::with_capacity(names.len());
    for name in names {
        let variant =
            DemuxVariant::from_name(name).ok_or_else(|| CliError::UnknownVariant(name.clone()))?;
        chosen.push(variant);
    }

    Ok(DemuxVariant::all_values()
        .iter()
        .copied()
        .filter(|variant| chosen.contains(variant))
        .collect())
}
