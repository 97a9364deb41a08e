//! Librarium CLI
//!
//! Menu-driven operator interface for the library catalog.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use librarium::shell::{self, SessionStats};
use librarium::{Config, Library};
use tracing_subscriber::{fmt, EnvFilter};

/// Librarium
#[derive(Parser, Debug)]
#[command(name = "librarium")]
#[command(about = "In-memory library catalog with borrowing and a waitlist")]
#[command(version)]
struct Args {
    /// Log level for librarium events (logs go to stderr)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Do not print the menu before each prompt
    #[arg(long)]
    no_menu: bool,

    /// Prompt shown before reading a menu choice
    #[arg(short, long, default_value = "Enter your choice: ")]
    prompt: String,

    /// Longest accepted input line in bytes
    #[arg(long, default_value = "4096")]
    max_line_len: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive session on stdin/stdout (default)
    Shell,

    /// Feed a file's lines as operator input
    Run {
        /// Script file, one answer per line
        script: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,librarium={}", args.log_level)));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Librarium v{}", librarium::VERSION);

    let engine = Arc::new(Library::new());
    let command = args.command.unwrap_or(Commands::Shell);

    let config = Config::builder()
        .prompt(&args.prompt)
        .show_menu(!args.no_menu && matches!(command, Commands::Shell))
        .max_line_len(args.max_line_len)
        .build();

    let result = match &command {
        Commands::Shell => shell::run_stdio(config, Arc::clone(&engine)),
        Commands::Run { script } => {
            tracing::info!("Running script {}", script.display());
            shell::run_script(script, config, Arc::clone(&engine), io::stdout().lock())
        }
    };

    match result {
        Ok(stats) => {
            if let Commands::Run { .. } = command {
                print_summary(&stats, &engine);
            }
        }
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(stats: &SessionStats, engine: &Library) {
    println!(
        "Executed {} commands ({} invalid inputs); {} books, {} waiting",
        stats.commands_executed,
        stats.invalid_inputs,
        engine.len(),
        engine.waitlist_len()
    );
}
