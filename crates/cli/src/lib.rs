pub mod commands;
pub mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use repdesk_core::config::{AppConfig, ConfigOverrides, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "repdesk",
    about = "Sales rep roster CLI with an AI assistant",
    long_about = "Browse the sales-rep roster with skill filtering and deal-count sorting, and forward free-text questions to the dashboard's AI endpoint.",
    after_help = "Examples:\n  repdesk reps --skill Negotiation --sort-by-deals\n  repdesk ask \"which rep closed the most deals?\"\n  repdesk doctor --json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Override the backend base URL")]
    base_url: Option<String>,

    #[arg(long, global = true, help = "Override the logging level")]
    log_level: Option<String>,

    #[arg(long, global = true, value_name = "PATH", help = "Use an explicit config file")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Fetch the roster and render the filtered/sorted rep list")]
    Reps {
        #[arg(long, help = "Keep only reps whose skills include this value")]
        skill: Option<String>,
        #[arg(long = "sort-by-deals", help = "Order by descending deal count")]
        sort_by_deals: bool,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List the distinct skills available for filtering")]
    Skills {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Send a question to the assistant and print the answer")]
    Ask { question: String },
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config and backend reachability checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config_file.clone(),
            require_file: self.config_file.is_some(),
            overrides: ConfigOverrides {
                base_url: self.base_url.clone(),
                log_level: self.log_level.clone(),
            },
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.load_options();

    let result = match cli.command {
        Command::Reps { skill, sort_by_deals, json } => {
            commands::reps::run(options, skill, sort_by_deals, json)
        }
        Command::Skills { json } => commands::skills::run(options, json),
        Command::Ask { question } => commands::ask::run(options, &question),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run(options) }
        }
        Command::Doctor { json } => commands::doctor::run(options, json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Install the global subscriber once per process. Later calls keep the
/// first subscriber, which lets command runtimes be invoked repeatedly from
/// one test binary.
pub(crate) fn init_logging(config: &AppConfig) {
    use repdesk_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    let installed = match config.logging.format {
        Compact => tracing_subscriber::fmt()
            .with_target(false)
            .with_max_level(log_level)
            .compact()
            .try_init(),
        Pretty => tracing_subscriber::fmt()
            .with_target(false)
            .with_max_level(log_level)
            .pretty()
            .try_init(),
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().try_init()
        }
    };
    let _ = installed;
}
