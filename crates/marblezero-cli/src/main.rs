mod achievements_cmd;
mod history_cmd;
mod pet_cmd;

use clap::{Parser, Subcommand};

use marblezero::history::HistoryLog;
use marblezero::{ingest, logging};

use achievements_cmd::Show;

#[derive(Parser)]
#[command(
    name = "marblezero",
    version,
    about = "Achievements for your shell history",
    long_about = "Achievements for your shell history.\n\nRun without arguments to see your pet and progress.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Record a single command line (alias of `ingest`, for existing hooks)
    #[arg(long, value_name = "CMD")]
    import_single: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one executed command line
    Ingest {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command_args: Vec<String>,
    },
    /// List achievements and their status
    Achievements {
        /// List every achievement (default)
        #[arg(long, conflicts_with = "unlocked")]
        all: bool,
        /// List only unlocked achievements
        #[arg(long)]
        unlocked: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Most recently unlocked achievements first
    Latest {
        /// How many to show (defaults to `display.latest` in config.toml)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pet name, progress and latest unlocks
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recently recorded commands
    History {
        /// How many recent commands to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or set your pet's name
    Pet {
        /// New name for the pet
        name: Option<String>,
    },
    /// List the built-in achievement rules
    Catalogue {
        /// Lint the catalogue and exit 1 on warnings
        #[arg(long)]
        check: bool,
    },
}

fn cmd_ingest(raw: &str) -> anyhow::Result<i32> {
    let log = HistoryLog::open_default()?;
    ingest::ingest(&log, raw, ingest::now())?;
    Ok(0)
}

fn or_exit(r: anyhow::Result<i32>) -> i32 {
    r.unwrap_or_else(|e| {
        eprintln!("[marblezero] error: {e:#}");
        1
    })
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let exit_code = match (&cli.import_single, &cli.command) {
        (Some(raw), _) => or_exit(cmd_ingest(raw)),
        (None, None) => or_exit(achievements_cmd::cmd_status(false)),
        (None, Some(command)) => match command {
            Commands::Ingest { command_args } => or_exit(cmd_ingest(&command_args.join(" "))),
            Commands::Achievements {
                all,
                unlocked,
                json,
            } => {
                let show = if *all || !*unlocked {
                    Show::All
                } else {
                    Show::Unlocked
                };
                or_exit(achievements_cmd::cmd_achievements(show, *json))
            }
            Commands::Latest { limit, json } => {
                or_exit(achievements_cmd::cmd_latest(*limit, *json))
            }
            Commands::Status { json } => or_exit(achievements_cmd::cmd_status(*json)),
            Commands::History { limit, json } => {
                or_exit(history_cmd::cmd_history(*limit, *json))
            }
            Commands::Pet { name } => or_exit(pet_cmd::cmd_pet(name.as_deref())),
            Commands::Catalogue { check } => or_exit(achievements_cmd::cmd_catalogue(*check)),
        },
    };
    std::process::exit(exit_code);
}
