use clap::Parser;
use std::io;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod api;
mod core;
mod utils;
mod models;
mod generators;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before reading config
    let env_files = utils::load_env_files();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(level) = &args.log_level {
        match level.parse() {
            Ok(level) => config.log_level = level,
            Err(_) => eprintln!("Ignoring unknown log level '{}'", level),
        }
    }
    if args.log_file.is_some() {
        config.log_file = args.log_file.clone();
    }
    config.validate()?;

    logging::init(&config)?;
    for path in &env_files {
        log::debug!("Loaded environment from {}", path.display());
    }
    log::debug!("Loaded config: {:?}", config);

    let mut stdout = io::stdout().lock();
    match args.command {
        Some(CliCommand::Generate { length, classes, count, json }) => {
            cli::handlers::handle_generate(&mut stdout, &config, length, &classes, count, json)?;
        }
        Some(CliCommand::Score { password, length, classes, json }) => {
            cli::handlers::handle_score(&mut stdout, &config, &password, length, &classes, json)?;
        }
        Some(CliCommand::Classes) => {
            cli::handlers::handle_classes(&mut stdout, &config)?;
        }
        Some(CliCommand::Serve { port }) => {
            drop(stdout);
            let port = port.unwrap_or(config.api_port);
            println!("🚀 API server starting on {}:{}", config.api_address, port);
            api::start_server(config, port).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
        }
        Some(CliCommand::Interactive) | None => {
            drop(stdout);
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received. Initiating shutdown...");
                    should_exit.store(true, Ordering::SeqCst);
                })?;
            }
            // inquire prompts block, so run the loop off the async runtime
            tokio::task::spawn_blocking(move || cli::menu::run_cli_menu(&config, should_exit)).await??;
            println!("\n🧹 Goodbye!");
        }
    }

    Ok(())
}
