//! Client for the Fantasy Premier League classic and draft web APIs.

pub mod api;
pub mod config;
pub mod draft_league;
pub mod error;

pub use api::client::{Fetch, FplClient};
pub use api::endpoints::{Endpoint, EntryId, Gameweek, LeagueId, PlayerId};
pub use config::Config;
pub use draft_league::DraftLeague;
pub use error::FplError;
