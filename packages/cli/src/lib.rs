//! randomlock CLI - interactive credential utility and password generator
//!
//! This module contains the shared CLI implementation used by both binaries.

mod clipboard;
mod commands;
mod menu;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use randomlock_core::get_version;

/// Interactive credential utility and random password generator
#[derive(Parser)]
#[command(name = "randomlock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Register, log in, and generate random passwords", long_about = None)]
#[command(after_help = get_banner())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random password without entering the interactive session
    Generate(commands::GenerateArgs),
}

/// Get the ASCII banner for help display
fn get_banner() -> &'static str {
    r#"
 ___              _           _            _
| _ \__ _ _ _  __| |___ _ __ | |   ___  __| |__
|   / _` | ' \/ _` / _ \ '  \| |__/ _ \/ _| / /
|_|_\__,_|_||_\__,_\___/_|_|_|____\___/\__|_\_\
"#
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; -v raises the default filter to debug.
    let default_filter = if cli.verbose > 0 { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Some(Commands::Generate(args)) => commands::cmd_generate(&args, cli.quiet),
        None => {
            if !cli.quiet {
                println!(
                    "{} {}",
                    style("randomlock").cyan().bold(),
                    style(get_version()).dim()
                );
            }
            menu::run_session(cli.quiet)
        }
    }
}
