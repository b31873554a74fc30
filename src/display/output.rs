use chrono::{DateTime, Utc};
use colored::*;
use fpl_draft::api::models::{DraftEntry, LeagueEntry, Pick, Trade, Transaction};
use std::collections::HashMap;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    id: String,
    team: String,
    manager: String,
}

#[derive(Tabled)]
struct TransactionRow {
    gameweek: String,
    added: String,
    team: String,
    kind: String,
    #[tabled(rename = "in")]
    element_in: String,
    #[tabled(rename = "out")]
    element_out: String,
    result: String,
}

#[derive(Tabled)]
struct TradeRow {
    gameweek: String,
    offered: String,
    from: String,
    to: String,
    players: String,
    state: String,
}

#[derive(Tabled)]
struct PickRow {
    position: String,
    element: String,
}

/// Team names for a league. Trades refer to league entry ids, transactions
/// to FPL entry ids; the two id spaces overlap, so they are kept apart.
#[derive(Debug, Default)]
pub struct TeamNames {
    by_league_entry: HashMap<u64, String>,
    by_entry: HashMap<u64, String>,
}

impl TeamNames {
    pub fn new(entries: &[LeagueEntry]) -> Self {
        let mut names = TeamNames::default();
        for entry in entries {
            names.by_league_entry.insert(entry.id, entry.entry_name.clone());
            if let Some(entry_id) = entry.entry_id {
                names.by_entry.insert(entry_id, entry.entry_name.clone());
            }
        }
        names
    }

    pub fn league_entry(&self, id: u64) -> String {
        lookup(&self.by_league_entry, id)
    }

    pub fn entry(&self, id: u64) -> String {
        lookup(&self.by_entry, id)
    }
}

fn lookup(names: &HashMap<u64, String>, id: u64) -> String {
    names.get(&id).cloned().unwrap_or_else(|| id.to_string())
}

fn timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_league(label: &str, entries: &[LeagueEntry]) {
    println!("\n{}", format!("🏆 {}", label).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if entries.is_empty() {
        println!("{}", "No league entries in this payload".yellow());
        return;
    }

    let rows = entries
        .iter()
        .map(|e| EntryRow {
            id: e.id.to_string(),
            team: e.entry_name.clone(),
            manager: e.manager(),
        })
        .collect::<Vec<_>>();
    print_table(rows);
}

pub fn display_waivers(transactions: &[Transaction], names: &TeamNames) {
    println!("\n{}", format!("🔁 WAIVERS & FREE AGENTS ({})", transactions.len()).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if transactions.is_empty() {
        println!("{}", "No transactions yet".yellow());
        return;
    }

    let rows = transactions
        .iter()
        .map(|t| TransactionRow {
            gameweek: t.event.to_string(),
            added: timestamp(t.added),
            team: names.entry(t.entry),
            kind: t.kind_label().to_string(),
            element_in: t.element_in.to_string(),
            element_out: t.element_out.to_string(),
            result: if t.accepted() {
                "accepted".green().to_string()
            } else {
                t.result.red().to_string()
            },
        })
        .collect::<Vec<_>>();
    print_table(rows);
}

pub fn display_trades(trades: &[Trade], names: &TeamNames) {
    println!("\n{}", format!("🤝 TRADES ({})", trades.len()).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if trades.is_empty() {
        println!("{}", "No trades yet".yellow());
        return;
    }

    let rows = trades
        .iter()
        .map(|t| TradeRow {
            gameweek: t.event.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string()),
            offered: timestamp(t.offer_time),
            from: names.league_entry(t.offered_entry),
            to: names.league_entry(t.received_entry),
            players: t
                .tradeitem_set
                .iter()
                .map(|i| format!("{} ⇄ {}", i.element_out, i.element_in))
                .collect::<Vec<_>>()
                .join(", "),
            state: t.state.clone(),
        })
        .collect::<Vec<_>>();
    print_table(rows);
}

pub fn display_entry(entry: &DraftEntry) {
    println!("\n{}", format!("👤 {} ({})", entry.name, entry.id).bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!(
        "{} {} {}",
        "Manager:".bold(),
        entry.player_first_name,
        entry.player_last_name
    );
    if let Some(points) = entry.overall_points {
        println!("{} {}", "Overall points:".bold(), points.to_string().green());
    }
    if let Some(points) = entry.event_points {
        println!("{} {}", "Gameweek points:".bold(), points);
    }
    println!();
}

pub fn display_picks(picks: &[Pick]) {
    println!("\n{}", format!("📋 PICKS ({})", picks.len()).bold().cyan());
    println!("{}\n", "=".repeat(40).cyan());

    let rows = picks
        .iter()
        .map(|p| PickRow {
            position: p.position.to_string(),
            element: p.element.to_string(),
        })
        .collect::<Vec<_>>();
    print_table(rows);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
