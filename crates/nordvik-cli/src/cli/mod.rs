//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use nordvik_core::config::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "nordvik")]
#[command(version = "1.0")]
#[command(about = "Nordvik One - the Nordvik services portal in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse the service catalog without the portal UI
    Links {
        #[command(subcommand)]
        command: LinksCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum LinksCommands {
    /// Lists catalog entries
    List {
        /// Only show one category (main, tools, support, admin)
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Open a catalog entry in the system browser
    Open {
        /// The id of the link to open
        #[arg(value_name = "LINK_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the portal UI
    let Some(command) = cli.command else {
        return commands::portal::run(&config);
    };

    match command {
        Commands::Links { command } => match command {
            LinksCommands::List { category } => commands::links::list(&config, category.as_deref()),
            LinksCommands::Open { id } => commands::links::open_link(&config, &id),
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
