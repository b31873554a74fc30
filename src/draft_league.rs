use crate::api::client::{fetch_as, Fetch};
use crate::api::endpoints::{Endpoint, LeagueId};
use crate::api::models::{LeagueEntry, LeagueInfo, Trade, TradesResponse, Transaction, TransactionsResponse};
use crate::error::FplError;
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A draft league (classic or H2H) as returned by `league/{id}/details`.
///
/// Every key of the payload is kept: the common ones in named fields, the
/// rest in `extra`. Nothing is validated up front; a missing `league` only
/// fails once something needs the league id or name.
pub struct DraftLeague {
    pub league: Option<Value>,
    pub league_entries: Option<Value>,
    pub standings: Option<Value>,
    /// Only present for H2H leagues.
    pub matches: Option<Value>,
    pub extra: Map<String, Value>,
    session: Arc<dyn Fetch>,
}

impl DraftLeague {
    pub fn new(league_information: Value, session: Arc<dyn Fetch>) -> Result<Self, FplError> {
        let mut fields = match league_information {
            Value::Object(map) => map,
            _ => return Err(FplError::NotAnObject),
        };

        Ok(DraftLeague {
            league: fields.remove("league"),
            league_entries: fields.remove("league_entries"),
            standings: fields.remove("standings"),
            matches: fields.remove("matches"),
            extra: fields,
            session,
        })
    }

    /// Fetches `league/{id}/details` and hydrates a league from it.
    pub fn fetch(session: Arc<dyn Fetch>, league_id: LeagueId) -> Result<Self, FplError> {
        let url = Endpoint::DraftDetails { league: league_id }.url();
        let details = session.fetch(&url)?;
        Self::new(details, session)
    }

    pub fn league_info(&self) -> Result<LeagueInfo, FplError> {
        let league = self.league.as_ref().ok_or(FplError::MissingField("league"))?;
        Ok(LeagueInfo::deserialize(league)?)
    }

    /// Reads `league.id` alone; the rest of `league` may be incomplete.
    pub fn id(&self) -> Result<LeagueId, FplError> {
        let league = self.league.as_ref().ok_or(FplError::MissingField("league"))?;
        let id = league.get("id").ok_or(FplError::MissingField("league.id"))?;
        Ok(LeagueId(u64::deserialize(id)?))
    }

    /// `"<league name> - <league id>"`
    pub fn label(&self) -> Result<String, FplError> {
        let info = self.league_info()?;
        Ok(format!("{} - {}", info.name, info.id))
    }

    /// Reads a hydrated field by its payload key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        match key {
            "league" => self.league.as_ref(),
            "league_entries" => self.league_entries.as_ref(),
            "standings" => self.standings.as_ref(),
            "matches" => self.matches.as_ref(),
            other => self.extra.get(other),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        let named = [
            ("league", &self.league),
            ("league_entries", &self.league_entries),
            ("standings", &self.standings),
            ("matches", &self.matches),
        ];
        for (key, value) in named {
            if let Some(v) = value {
                map.insert(key.to_string(), v.clone());
            }
        }
        Value::Object(map)
    }

    pub fn entries(&self) -> Result<Vec<LeagueEntry>, FplError> {
        match &self.league_entries {
            Some(raw) => Ok(serde_json::from_value(raw.clone())?),
            None => Ok(Vec::new()),
        }
    }

    /// Returns the league's waivers and free agent moves, as fetched.
    ///
    /// Taken from e.g. `https://draft.premierleague.com/api/draft/league/123456/transactions`.
    pub fn get_waivers(&self) -> Result<Value, FplError> {
        let url = Endpoint::DraftTransactions { league: self.id()? }.url();
        debug!("fetching waivers for {}", self);
        self.session.fetch(&url)
    }

    /// Returns the league's trades, as fetched.
    ///
    /// Taken from e.g. `https://draft.premierleague.com/api/draft/league/123456/trades`.
    pub fn get_trades(&self) -> Result<Value, FplError> {
        let url = Endpoint::DraftTrades { league: self.id()? }.url();
        debug!("fetching trades for {}", self);
        self.session.fetch(&url)
    }

    pub fn get_waivers_typed(&self) -> Result<Vec<Transaction>, FplError> {
        let url = Endpoint::DraftTransactions { league: self.id()? }.url();
        let response: TransactionsResponse = fetch_as(self.session.as_ref(), &url)?;
        Ok(response.transactions)
    }

    pub fn get_trades_typed(&self) -> Result<Vec<Trade>, FplError> {
        let url = Endpoint::DraftTrades { league: self.id()? }.url();
        let response: TradesResponse = fetch_as(self.session.as_ref(), &url)?;
        Ok(response.trades)
    }
}

impl fmt::Display for DraftLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Ok(label) => f.write_str(&label),
            Err(_) => f.write_str("<unknown league>"),
        }
    }
}

impl fmt::Debug for DraftLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftLeague")
            .field("league", &self.league)
            .field("league_entries", &self.league_entries)
            .field("standings", &self.standings)
            .field("matches", &self.matches)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        reply: Value,
        urls: Mutex<Vec<String>>,
    }

    impl Fetch for Recorder {
        fn fetch(&self, url: &str) -> Result<Value, FplError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.reply.clone())
        }
    }

    fn league_with(reply: Value) -> (DraftLeague, Arc<Recorder>) {
        let recorder = Arc::new(Recorder {
            reply,
            ..Default::default()
        });
        let league = DraftLeague::new(
            json!({"league": {"id": 42, "name": "Test"}}),
            recorder.clone(),
        )
        .unwrap();
        (league, recorder)
    }

    #[test]
    fn label_and_display() {
        let (league, _) = league_with(Value::Null);
        assert_eq!(league.to_string(), "Test - 42");
        assert_eq!(league.label().unwrap(), "Test - 42");
    }

    #[test]
    fn hydration_is_lossless() {
        let raw = json!({
            "league": {"id": 42, "name": "Test", "draft_status": "post"},
            "league_entries": [{"id": 1, "entry_name": "FC Bench"}],
            "standings": [],
            "custom": {"nested": [1, 2, 3]}
        });
        let league = DraftLeague::new(raw.clone(), Arc::new(Recorder::default())).unwrap();

        assert_eq!(league.attribute("league"), raw.get("league"));
        assert_eq!(league.attribute("custom"), raw.get("custom"));
        assert_eq!(league.attribute("matches"), None);
        assert_eq!(league.to_value(), raw);
    }

    #[test]
    fn waivers_hit_transactions_url() {
        let reply = json!({"transactions": [{"id": 1}]});
        let (league, recorder) = league_with(reply.clone());

        assert_eq!(league.get_waivers().unwrap(), reply);
        assert_eq!(
            recorder.urls.lock().unwrap().clone(),
            vec!["https://draft.premierleague.com/api/draft/league/42/transactions".to_string()]
        );
    }

    #[test]
    fn trades_hit_trades_url() {
        let reply = json!({"trades": []});
        let (league, recorder) = league_with(reply.clone());

        assert_eq!(league.get_trades().unwrap(), reply);
        assert_eq!(
            recorder.urls.lock().unwrap().clone(),
            vec!["https://draft.premierleague.com/api/draft/league/42/trades".to_string()]
        );
    }

    #[test]
    fn missing_league_fails_lazily() {
        let recorder = Arc::new(Recorder::default());
        let league = DraftLeague::new(json!({"standings": []}), recorder.clone()).unwrap();

        assert!(matches!(league.label(), Err(FplError::MissingField("league"))));
        assert!(matches!(league.get_waivers(), Err(FplError::MissingField("league"))));
        assert!(matches!(league.get_trades(), Err(FplError::MissingField("league"))));
        assert_eq!(league.to_string(), "<unknown league>");
        assert!(recorder.urls.lock().unwrap().is_empty());
    }

    #[test]
    fn waivers_and_trades_need_only_the_id() {
        let recorder = Arc::new(Recorder::default());
        let bare = DraftLeague::new(json!({"league": {"id": 42}}), recorder.clone()).unwrap();
        let null_name =
            DraftLeague::new(json!({"league": {"id": 42, "name": null}}), recorder.clone()).unwrap();

        bare.get_waivers().unwrap();
        null_name.get_trades().unwrap();
        assert_eq!(
            recorder.urls.lock().unwrap().clone(),
            vec![
                "https://draft.premierleague.com/api/draft/league/42/transactions".to_string(),
                "https://draft.premierleague.com/api/draft/league/42/trades".to_string(),
            ]
        );

        assert!(matches!(bare.label(), Err(FplError::Json(_))));
        assert_eq!(bare.to_string(), "<unknown league>");
    }

    #[test]
    fn missing_or_malformed_id() {
        let recorder = Arc::new(Recorder::default());
        let no_id = DraftLeague::new(json!({"league": {"name": "x"}}), recorder.clone()).unwrap();
        let text_id = DraftLeague::new(json!({"league": {"id": "42"}}), recorder.clone()).unwrap();

        assert!(matches!(no_id.get_waivers(), Err(FplError::MissingField("league.id"))));
        assert!(matches!(text_id.get_trades(), Err(FplError::Json(_))));
        assert!(recorder.urls.lock().unwrap().is_empty());
    }

    #[test]
    fn rejects_non_object() {
        let err = DraftLeague::new(json!([1, 2]), Arc::new(Recorder::default())).unwrap_err();
        assert!(matches!(err, FplError::NotAnObject));
    }

    #[test]
    fn typed_entries() {
        let raw = json!({
            "league": {"id": 1, "name": "L"},
            "league_entries": [
                {"id": 10, "entry_id": 500, "entry_name": "Alpha", "player_first_name": "Sam", "player_last_name": "Lee"}
            ]
        });
        let league = DraftLeague::new(raw, Arc::new(Recorder::default())).unwrap();
        let entries = league.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].manager(), "Sam Lee");
        assert_eq!(entries[0].entry_id, Some(500));
    }
}
