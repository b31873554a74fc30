use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Draft league details: the nested "league" object
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Draft league details: one row of "league_entries"
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueEntry {
    pub id: u64,
    #[serde(default)]
    pub entry_id: Option<u64>,
    #[serde(default)]
    pub entry_name: String,
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeagueEntry {
    pub fn manager(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
            .trim()
            .to_string()
    }
}

// draft/league/{id}/transactions
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    pub id: u64,
    #[serde(default)]
    pub added: Option<DateTime<Utc>>,
    pub element_in: u32,
    pub element_out: u32,
    pub entry: u64,
    pub event: u8,
    #[serde(default)]
    pub kind: String, // "w" waiver, "f" free agent
    #[serde(default)]
    pub result: String, // "a" accepted, others rejected
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    pub fn kind_label(&self) -> &str {
        match self.kind.as_str() {
            "w" => "waiver",
            "f" => "free agent",
            other => other,
        }
    }

    pub fn accepted(&self) -> bool {
        self.result == "a"
    }
}

// draft/league/{id}/trades
#[derive(Debug, Deserialize)]
pub struct TradesResponse {
    #[serde(default)]
    pub trades: Vec<Trade>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Trade {
    pub id: u64,
    #[serde(default)]
    pub event: Option<u8>,
    pub offered_entry: u64,
    pub received_entry: u64,
    #[serde(default)]
    pub offer_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tradeitem_set: Vec<TradeItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradeItem {
    pub element_in: u32,
    pub element_out: u32,
}

// entry/{id}/public
#[derive(Debug, Deserialize)]
pub struct DraftEntryResponse {
    pub entry: DraftEntry,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftEntry {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    #[serde(default)]
    pub overall_points: Option<i64>,
    #[serde(default)]
    pub event_points: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// entry/{id}/event/{gw}
#[derive(Debug, Deserialize)]
pub struct PicksResponse {
    #[serde(default)]
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pick {
    pub element: u32,
    pub position: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
