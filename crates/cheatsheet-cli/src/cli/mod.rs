//! CLI entry and dispatch.

use anyhow::{Context, Result};
use cheatsheet_core::config;
use clap::Parser;

use crate::logging::{self, Verbosity};
use crate::present;

mod commands;

#[derive(Parser)]
#[command(name = "cheatsheet")]
#[command(version)]
#[command(about = "Render cheatsheets as highlighted fixed-width pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    no_color: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render a cheatsheet page
    Show {
        /// Cheatsheet id (default: configured default_id, then the first one)
        #[arg(value_name = "ID")]
        id: Option<String>,

        /// Print lines and highlights as JSON
        #[arg(long)]
        json: bool,

        /// Override the page width from config
        #[arg(long, value_name = "COLUMNS", env = "CHEATSHEET_WIDTH")]
        width: Option<usize>,
    },
    /// List available cheatsheet ids
    List,
    /// Print the flattened entries of a cheatsheet
    Entries {
        /// Cheatsheet id (default: configured default_id, then the first one)
        #[arg(value_name = "ID")]
        id: Option<String>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fuzzy search the entries of a cheatsheet
    Search {
        /// Search pattern
        #[arg(value_name = "QUERY")]
        query: String,

        /// Cheatsheet id to search in
        #[arg(long, value_name = "ID")]
        id: Option<String>,

        /// Maximum number of matches to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Copy the best match's key to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Present a cheatsheet using its display mode (the default command)
    Open {
        /// Cheatsheet id (default: configured default_id, then the first one)
        #[arg(value_name = "ID")]
        id: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults
    Generate,
    /// Append a cheatsheet source to the config file
    AddSource {
        /// Source file (TOML, YAML or JSON)
        #[arg(value_name = "PATH")]
        path: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    let Cli {
        command,
        verbose: _,
        quiet: _,
        no_color,
    } = cli;
    let color = present::use_color(no_color);

    // default to open mode
    let Some(command) = command else {
        return commands::open::run(&config, None, color);
    };

    match command {
        Commands::Show { id, json, width } => commands::show::run(
            &config,
            id.as_deref(),
            commands::show::ShowOptions { json, width, color },
        ),
        Commands::List => commands::list::run(&config),
        Commands::Entries { id, json } => commands::entries::run(&config, id.as_deref(), json),
        Commands::Search {
            query,
            id,
            limit,
            copy,
            json,
        } => commands::search::run(
            &config,
            commands::search::SearchOptions {
                query: &query,
                id: id.as_deref(),
                limit,
                copy,
                json,
            },
        ),
        Commands::Open { id } => commands::open::run(&config, id.as_deref(), color),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
            ConfigCommands::AddSource { path } => commands::config::add_source(&path),
        },
    }
}
