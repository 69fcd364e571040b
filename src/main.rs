//! # Lagoon CLI
//!
//! A simple command-line client for the Lagoon timeline service.
//!
//! ## Usage
//!
//! ```bash
//! # Store an access token
//! lagoon login --token <TOKEN>
//!
//! # Publish a post
//! lagoon post "hello from the shore"
//!
//! # Fetch a raw API resource
//! lagoon fetch /v1/timelines/public
//! ```

use clap::{Parser, Subcommand};
use lagoon::commands;

/// Initialize logger based on verbose flag
fn init_logger(verbose: bool) {
    let mut log_builder = env_logger::Builder::from_default_env();
    if verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
}

/// Main CLI structure
#[derive(Parser)]
#[command(name = "lagoon")]
#[command(about = "A simple command-line client for the Lagoon timeline service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (logs each outbound request)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Store an access token in the credential file
    Login {
        /// The access token to store
        #[arg(long, value_name = "TOKEN")]
        token: String,
    },
    /// Publish a post to the timeline
    Post {
        /// Text of the post
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Fetch a raw API resource and print the response body
    Fetch {
        /// Resource path (e.g. /v1/timelines/public)
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Show configuration and credential state
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let exit_code = run_command(cli.command).await;
    std::process::exit(exit_code);
}

async fn run_command(command: Commands) -> i32 {
    use lagoon::exit_codes::*;

    match command {
        Commands::Login { token } => {
            let args = commands::login::LoginArgs { token };
            match commands::login::execute(args) {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Login error: {}", e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::Post { text } => {
            let args = commands::post::PostArgs { text };
            match commands::post::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Post error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Fetch { path } => {
            let args = commands::fetch::FetchArgs { path };
            match commands::fetch::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Fetch error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Status => match commands::status::execute() {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Status error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
    }
}
