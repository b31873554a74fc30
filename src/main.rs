mod display;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use display::output::{
    display_entry, display_error, display_info, display_league, display_picks, display_success,
    display_trades, display_waivers, TeamNames,
};
use fpl_draft::api::endpoints::{draft_template, format_template, template};
use fpl_draft::{Config, DraftLeague, EntryId, Fetch, FplClient, FplError, Gameweek, LeagueId};
use indicatif::ProgressBar;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "fpl_draft", version)]
#[command(about = "Inspect Fantasy Premier League draft leagues", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a draft league and its entries
    Details {
        /// Draft league id (defaults to FPL_DRAFT_LEAGUE_ID)
        league_id: Option<u64>,
    },
    /// List waivers and free agent moves in a draft league
    Waivers {
        league_id: Option<u64>,
        /// Print the JSON payload as returned by the API
        #[arg(long)]
        raw: bool,
    },
    /// List trades in a draft league
    Trades {
        league_id: Option<u64>,
        #[arg(long)]
        raw: bool,
    },
    /// Show a draft entry's public information
    Entry { entry_id: u64 },
    /// Show a draft entry's picks for a gameweek (1-47)
    Picks { entry_id: u64, gameweek: u8 },
    /// Print an endpoint URL from the registry
    Url {
        /// Registry key, e.g. "user_picks"
        key: String,
        /// Positional values for the template's placeholders
        args: Vec<String>,
        /// Look the key up in the draft API registry
        #[arg(long)]
        draft: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn resolve_league(arg: Option<u64>, config: &Config) -> anyhow::Result<LeagueId> {
    arg.or(config.default_league_id)
        .map(LeagueId)
        .ok_or_else(|| anyhow!("no league id given and FPL_DRAFT_LEAGUE_ID is not set"))
}

fn load_league(session: Arc<dyn Fetch>, league_id: LeagueId) -> anyhow::Result<DraftLeague> {
    let pb = spinner("Fetching league details");
    let league = DraftLeague::fetch(session, league_id);
    pb.finish_and_clear();
    league.with_context(|| format!("failed to load draft league {}", league_id))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = Arc::new(FplClient::new(config.clone()));

    match cli.command {
        Commands::Details { league_id } => {
            let league_id = resolve_league(league_id, &config)?;
            let league = load_league(client, league_id)?;
            display_league(&league.label()?, &league.entries()?);
        }
        Commands::Waivers { league_id, raw } => {
            let league_id = resolve_league(league_id, &config)?;
            let league = load_league(client, league_id)?;
            display_info(&format!("Waivers for {}", league));

            if raw {
                let payload = league.get_waivers()?;
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let pb = spinner("Fetching transactions");
                let transactions = league.get_waivers_typed();
                pb.finish_and_clear();
                let transactions = transactions.context("failed to fetch transactions")?;
                display_waivers(&transactions, &TeamNames::new(&league.entries()?));
            }
        }
        Commands::Trades { league_id, raw } => {
            let league_id = resolve_league(league_id, &config)?;
            let league = load_league(client, league_id)?;
            display_info(&format!("Trades for {}", league));

            if raw {
                let payload = league.get_trades()?;
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let pb = spinner("Fetching trades");
                let trades = league.get_trades_typed();
                pb.finish_and_clear();
                let trades = trades.context("failed to fetch trades")?;
                display_trades(&trades, &TeamNames::new(&league.entries()?));
            }
        }
        Commands::Entry { entry_id } => {
            let entry = client
                .get_draft_entry(EntryId(entry_id))
                .with_context(|| format!("failed to load entry {}", entry_id))?;
            display_entry(&entry);
        }
        Commands::Picks { entry_id, gameweek } => {
            let gameweek = Gameweek::new(gameweek)?;
            let picks = client
                .get_draft_picks(EntryId(entry_id), gameweek)
                .with_context(|| format!("failed to load picks for entry {}", entry_id))?;
            display_success(&format!("Entry {} - gameweek {}", entry_id, gameweek));
            display_picks(&picks);
        }
        Commands::Url { key, args, draft } => {
            let found = if draft { draft_template(&key) } else { template(&key) };
            let template = found.ok_or_else(|| FplError::UnknownEndpoint(key.clone()))?;
            let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
            println!("{}", format_template(template, &args)?);
        }
    }

    Ok(())
}
