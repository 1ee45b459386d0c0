use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use ttrpg_statblock::config::AppConfig;
use ttrpg_statblock::statblock::Creature;
use ttrpg_statblock::{
    ability_modifier, lookup_creature, parse_creature, parse_initiative, render_creature,
    render_initiative, InitiativeTracker, SrdCatalog,
};

/// Exit status when a catalog lookup finds nothing.
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser)]
#[command(
    name = "statblock",
    version,
    about = "Convert creature stat blocks and initiative tables between Markdown and JSON"
)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a Markdown stat block into JSON
    Parse {
        /// Input file, or `-` for stdin
        file: Option<PathBuf>,
    },

    /// Render a JSON creature as a Markdown stat block
    Render {
        /// Input file, or `-` for stdin
        file: Option<PathBuf>,
    },

    /// Parse an initiative table into JSON, or render one with --render
    Initiative {
        /// Input file, or `-` for stdin
        file: Option<PathBuf>,

        /// Treat the input as JSON and emit the Markdown table
        #[arg(long)]
        render: bool,
    },

    /// Look up a creature in the remote catalog
    Lookup {
        /// Creature name (case-insensitive)
        name: String,
    },

    /// Print the modifier for an ability score
    Modifier {
        #[arg(allow_negative_numbers = true)]
        score: i32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    let _log_guard = ttrpg_statblock::core::logging::init(&config);
    log::debug!("{} v{} starting", ttrpg_statblock::NAME, ttrpg_statblock::VERSION);

    match run(cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &AppConfig) -> Result<ExitCode> {
    match cli.command {
        Command::Parse { file } => {
            let creature = parse_creature(&read_input(file.as_ref())?);
            print_json(&creature, cli.pretty)?;
        }
        Command::Render { file } => {
            let input = read_input(file.as_ref())?;
            let creature: Creature =
                serde_json::from_str(&input).context("Input is not a valid creature JSON record")?;
            println!("{}", render_creature(&creature));
        }
        Command::Initiative { file, render } => {
            let input = read_input(file.as_ref())?;
            if render {
                let tracker: InitiativeTracker = serde_json::from_str(&input)
                    .context("Input is not a valid initiative JSON record")?;
                println!("{}", render_initiative(&tracker));
            } else {
                print_json(&parse_initiative(&input), cli.pretty)?;
            }
        }
        Command::Lookup { name } => {
            let catalog =
                SrdCatalog::new(&config.catalog).context("Failed to build catalog client")?;
            match lookup_creature(&catalog, &name).await? {
                Some(creature) => print_json(&creature, cli.pretty)?,
                None => {
                    eprintln!("No creature named '{}' in the catalog", name);
                    return Ok(ExitCode::from(EXIT_NOT_FOUND));
                }
            }
        }
        Command::Modifier { score } => println!("{}", ability_modifier(score)),
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
