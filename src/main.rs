//! wlist - wordlist filtering and generation for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wlist::cli::{Cli, Commands};
use wlist::processor::{FilterJob, GenerateJob};
use wlist::progress::{print_banner, print_error};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    match &cli.command {
        Commands::Filter(args) => {
            if args.verbose {
                std::env::set_var("RUST_LOG", "debug");
            } else if !args.silent {
                std::env::set_var("RUST_LOG", "info");
            }
        }
        Commands::Generate(args) => {
            if !args.silent {
                std::env::set_var("RUST_LOG", "info");
            }
        }
    }
    env_logger::init();

    if let Err(e) = run(cli) {
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

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Filter(args) => {
            if !args.silent {
                print_banner();
            }
            FilterJob::from_args(&args).run()
        }
        Commands::Generate(args) => {
            if !args.silent {
                print_banner();
            }
            GenerateJob::from_args(&args)?.run()
        }
    }
}
