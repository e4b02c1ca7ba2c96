//! # osgbuild Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `osgbuild` command-line front end. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the subcommand handlers in `commands`
//!
//! ## Architecture
//!
//! - Each subcommand is a variant of the `Commands` enum holding its clap
//!   `Args` struct, defined next to its handler in `commands::<name>`.
//! - Handlers return the exit status to use on success. `run --status` is the
//!   only one that can return nonzero without an error.
//! - All errors propagate here, are printed as `Error: <message>`, and the
//!   process exits 1.
//!
//! ## Examples
//!
//! ```bash
//! osgbuild --help
//! osgbuild -vv run --err2out 'rpmbuild -bs foo.spec'
//! osgbuild pipe -- 'rpm2cpio foo.src.rpm' '|' 'cpio -id'
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "osgbuild",
    about = "Checked subprocess, pipeline and packaging helpers for build tooling",
    long_about = "Run commands and pipelines with checked exit status and C-locale output capture,\n\
                  and drive the packaging helpers (search path, archives, distro version, INI files).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available subcommands.
#[derive(Parser, Debug)]
enum Commands {
    /// Run a command and print its captured output
    Run(commands::run::RunArgs),
    /// Run a pipeline of commands separated by '|'
    Pipe(commands::pipe::PipeArgs),
    /// Look a file up in the data file search path
    Find(commands::find::FindArgs),
    /// Extract source archives into the current directory
    Unpack(commands::unpack::UnpackArgs),
    /// Print the local distro version tag
    Dver(commands::dver::DverArgs),
    /// Read an option from INI configuration files
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args),
        Commands::Pipe(args) => commands::pipe::handle_pipe(args),
        Commands::Find(args) => commands::find::handle_find(args),
        Commands::Unpack(args) => commands::unpack::handle_unpack(args),
        Commands::Dver(args) => commands::dver::handle_dver(args),
        Commands::Config(args) => commands::config::handle_config(args),
    };

    match command_result {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
