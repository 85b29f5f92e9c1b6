//! Starry CLI — parse, list, and run Starry programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Invalid usage, file open, parse, or runtime error

mod commands;

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing` directives).
const LOG_ENV: &str = "STARRY_LOG";

/// Starry is a stack-based esoteric programming language.
#[derive(Parser, Debug)]
#[command(name = "starry", version, about)]
pub(crate) struct Args {
    /// Print decoded instruction code instead of running.
    #[arg(short = 'i', long = "inst")]
    pub inst: bool,

    /// Run with a stack and PC dump after every step (on stderr).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Starry source file.
    pub source: PathBuf,
}

fn main() {
    init_logging();
    let args = Args::try_parse().unwrap_or_else(|e| {
        // Help and version requests are not errors.
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });

    if let Err(code) = commands::execute(&args) {
        process::exit(code);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
