// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password generator with strength estimation", long_about = None)]
pub struct Args {
    /// Command to execute (defaults to the interactive generator)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "LOG_FILE")]
    pub log_file: Option<std::path::PathBuf>,
}
