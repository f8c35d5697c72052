//! word-count-filter: log event filter based on message word count.
//!
//! A CLI tool that reads log events from stdin and passes through or
//! suppresses each one by the number of words in its rendered message.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use word_count_filter::cli::{Cli, Commands};
use word_count_filter::config::{self, ConfigService};
use word_count_filter::domain::{self, count_words};
use word_count_filter::service::FilterService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Commands that need no configuration
    match &cli.command {
        Commands::Count { text } => {
            let text = match text {
                Some(t) => t.clone(),
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            println!("{}", count_words(&text));
            return Ok(());
        }
        Commands::Version => {
            println!("word-count-filter {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(p)?;
                p.clone()
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
            return Ok(());
        }
        _ => {}
    }

    let config = ConfigService::load_unvalidated(cli.config.as_deref())?;

    // Logging first, so validation diagnostics reach the log file
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    let filter = config::validate(&config).context("Invalid configuration")?;

    match cli.command {
        Commands::Filter { input, output } => {
            let service = FilterService::new(filter, input, output);
            let stats = service.run()?;
            if !cli.quiet {
                eprintln!("{} of {} events passed.", stats.passed, stats.processed);
            }
        }
        Commands::Check => {
            if !cli.quiet {
                eprintln!("Configuration is valid: {}", filter);
            }
        }
        Commands::Count { .. } | Commands::Version | Commands::Init { .. } => {}
    }

    Ok(())
}
