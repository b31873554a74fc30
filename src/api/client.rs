use crate::config::Config;
use crate::error::FplError;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::Agent;

use super::endpoints::{Endpoint, EntryId, Gameweek};
use super::models::{DraftEntry, DraftEntryResponse, Pick, PicksResponse};

/// Performs an HTTP GET and returns the decoded JSON body.
///
/// `FplClient` is the real implementation; anything else (a fake in tests,
/// a caching wrapper) can stand in for it.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Value, FplError>;
}

/// Decodes a fetched payload into a typed model.
pub fn fetch_as<T: DeserializeOwned>(session: &dyn Fetch, url: &str) -> Result<T, FplError> {
    let value = session.fetch(url)?;
    serde_json::from_value(value).map_err(|e| FplError::Json(format!("{}: {}", url, e)))
}

pub struct FplClient {
    config: Config,
    agent: Agent,
}

impl FplClient {
    pub fn new(config: Config) -> Self {
        FplClient {
            config,
            agent: Agent::new(),
        }
    }

    pub fn with_agent(config: Config, agent: Agent) -> Self {
        FplClient { config, agent }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn execute_request(&self, url: &str) -> Result<Value, FplError> {
        debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("User-Agent", &self.config.user_agent)
            .call();

        match response {
            Ok(resp) => resp
                .into_json::<Value>()
                .map_err(|e| FplError::Json(format!("{}: {}", url, e))),
            Err(ureq::Error::Status(status, _)) => {
                warn!("{} returned HTTP {}", url, status);
                Err(FplError::Http {
                    status,
                    url: url.to_string(),
                })
            }
            Err(e) => Err(FplError::Transport(e.to_string())),
        }
    }

    pub fn get_draft_entry(&self, entry: EntryId) -> Result<DraftEntry, FplError> {
        let url = Endpoint::DraftUser { entry }.url();
        let response: DraftEntryResponse = fetch_as(self, &url)?;
        Ok(response.entry)
    }

    pub fn get_draft_picks(&self, entry: EntryId, gameweek: Gameweek) -> Result<Vec<Pick>, FplError> {
        let url = Endpoint::DraftUserPicks { entry, gameweek }.url();
        let response: PicksResponse = fetch_as(self, &url)?;
        Ok(response.picks)
    }
}

impl Fetch for FplClient {
    fn fetch(&self, url: &str) -> Result<Value, FplError> {
        self.execute_request(url)
    }
}
