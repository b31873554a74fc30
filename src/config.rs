use crate::error::FplError;
use std::env;

pub const DEFAULT_USER_AGENT: &str = concat!("fpl_draft/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub default_league_id: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_league_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, FplError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FplError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_agent = lookup("FPL_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let default_league_id = match lookup("FPL_DRAFT_LEAGUE_ID") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                FplError::Config(format!("FPL_DRAFT_LEAGUE_ID is not a league id: {}", raw))
            })?),
            None => None,
        };

        Ok(Config {
            user_agent,
            default_league_id,
        })
    }
}
