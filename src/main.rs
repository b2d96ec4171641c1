//! Letter Frequency - wanted-character frequency analysis
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use letter_frequency::cli::Args;
use letter_frequency::processor::{Processor, ProcessorConfig};
use letter_frequency::progress::{print_banner, print_bullet, print_error, print_header};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    let config = ProcessorConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let processor = Processor::new(config);
    log::debug!(
        "Analyzer ready: {} special, {} wanted characters",
        processor.analyzer().special().len(),
        processor.analyzer().wanted().len()
    );
    processor.process()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ProcessorConfig) {
    print_header("Configuration");

    match config.input {
        Some(ref path) => print_bullet(&format!("Input:    {:?}", path)),
        None => print_bullet("Input:    standard input"),
    }
    match config.output {
        Some(ref path) => print_bullet(&format!("Output:   {:?}", path)),
        None => print_bullet("Output:   standard output"),
    }
    print_bullet(&format!("Special:  {:?}", config.special));
    print_bullet(&format!("Wanted:   {:?}", config.wanted));
    print_bullet(&format!("Stats:    {}", config.stats));
}
