// Endpoint registry for the classic and draft FPL APIs.
//
// Templates use positional `{}` placeholders. `Endpoint` is the typed way in:
// each variant carries exactly the parameters its template needs.

use crate::error::FplError;
use std::fmt;

macro_rules! classic {
    ($path:literal) => {
        concat!("https://fantasy.premierleague.com/api/", $path)
    };
}

macro_rules! draft {
    ($path:literal) => {
        concat!("https://draft.premierleague.com/api/", $path)
    };
}

pub const API_BASE_URL: &str = classic!("");
pub const DRAFT_API_BASE_URL: &str = draft!("");

pub const MIN_GAMEWEEK: u8 = 1;
pub const MAX_GAMEWEEK: u8 = 47;

pub const DYNAMIC: &str = classic!("bootstrap-dynamic/");
pub const FIXTURES: &str = classic!("fixtures/");
pub const GAMEWEEKS: &str = classic!("events/");
pub const GAMEWEEK_FIXTURES: &str = classic!("fixtures/?event={}");
pub const GAMEWEEK_LIVE: &str = classic!("event/{}/live");
pub const LEAGUE_CLASSIC: &str = classic!("leagues-classic/{}/standings/");
pub const LEAGUE_H2H: &str = classic!("leagues-h2h/{}/standings/");
pub const LEAGUE_H2H_FIXTURES: &str = classic!("leagues-h2h-matches/league/{}/?{}page={}");
pub const LEAGUE_H2H_FIXTURE: &str = classic!("leagues-h2h-matches/league/{}/?{}");
pub const PLAYERS: &str = classic!("elements/");
pub const PLAYER: &str = classic!("element-summary/{}/");
pub const SETTINGS: &str = classic!("game-settings/");
pub const STATIC: &str = classic!("bootstrap-static/");
pub const TEAMS: &str = classic!("teams/");
pub const TRANSFERS: &str = classic!("transfers/");
pub const USER: &str = classic!("entry/{}/");
pub const USER_CUP: &str = classic!("entry/{}/cup/");
pub const USER_HISTORY: &str = classic!("entry/{}/history/");
pub const USER_PICKS: &str = classic!("entry/{}/event/{}/picks/");
pub const USER_TEAM: &str = classic!("my-team/{}/");
pub const USER_TRANSFERS: &str = classic!("entry/{}/transfers/");
pub const USER_LATEST_TRANSFERS: &str = classic!("entry/{}/transfers-latest/");
pub const WATCHLIST: &str = classic!("watchlist/");
pub const ME: &str = classic!("me/");

pub const DRAFT_DETAILS: &str = draft!("league/{}/details");
pub const DRAFT_TRANSACTIONS: &str = draft!("draft/league/{}/transactions");
pub const DRAFT_TRADES: &str = draft!("draft/league/{}/trades");
pub const DRAFT_USER_PICKS: &str = draft!("entry/{}/event/{}");
pub const DRAFT_USER: &str = draft!("entry/{}/public");

pub const API_URLS: &[(&str, &str)] = &[
    ("dynamic", DYNAMIC),
    ("fixtures", FIXTURES),
    ("gameweeks", GAMEWEEKS),
    ("gameweek_fixtures", GAMEWEEK_FIXTURES),
    ("gameweek_live", GAMEWEEK_LIVE),
    ("league_classic", LEAGUE_CLASSIC),
    ("league_h2h", LEAGUE_H2H),
    ("league_h2h_fixtures", LEAGUE_H2H_FIXTURES),
    ("league_h2h_fixture", LEAGUE_H2H_FIXTURE),
    ("players", PLAYERS),
    ("player", PLAYER),
    ("settings", SETTINGS),
    ("static", STATIC),
    ("teams", TEAMS),
    ("transfers", TRANSFERS),
    ("user", USER),
    ("user_cup", USER_CUP),
    ("user_history", USER_HISTORY),
    ("user_picks", USER_PICKS),
    ("user_team", USER_TEAM),
    ("user_transfers", USER_TRANSFERS),
    ("user_latest_transfers", USER_LATEST_TRANSFERS),
    ("watchlist", WATCHLIST),
    ("me", ME),
];

pub const DRAFT_API_URLS: &[(&str, &str)] = &[
    ("details", DRAFT_DETAILS),
    ("transactions", DRAFT_TRANSACTIONS),
    ("trades", DRAFT_TRADES),
    ("user_picks", DRAFT_USER_PICKS),
    ("user", DRAFT_USER),
];

pub fn template(key: &str) -> Option<&'static str> {
    lookup(API_URLS, key)
}

pub fn draft_template(key: &str) -> Option<&'static str> {
    lookup(DRAFT_API_URLS, key)
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, t)| *t)
}

pub fn placeholder_count(template: &str) -> usize {
    template.matches("{}").count()
}

/// Substitutes `args` into the `{}` placeholders of `template`, in order.
///
/// The argument count must match the placeholder count exactly.
pub fn format_template(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FplError> {
    let expected = placeholder_count(template);
    if expected != args.len() {
        return Err(FplError::Template {
            template: template.to_string(),
            expected,
            given: args.len(),
        });
    }

    let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    Ok(fill(template, &rendered))
}

fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    for arg in args {
        match rest.find("{}") {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                out.push_str(arg);
                rest = &rest[pos + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeagueId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// A scoring round, always within `MIN_GAMEWEEK..=MAX_GAMEWEEK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gameweek(u8);

impl Gameweek {
    pub fn new(gameweek: u8) -> Result<Self, FplError> {
        if (MIN_GAMEWEEK..=MAX_GAMEWEEK).contains(&gameweek) {
            Ok(Gameweek(gameweek))
        } else {
            Err(FplError::InvalidGameweek(gameweek))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

macro_rules! display_inner {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

display_inner!(LeagueId, EntryId, PlayerId, Gameweek);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Dynamic,
    Fixtures,
    Gameweeks,
    GameweekFixtures { gameweek: Gameweek },
    GameweekLive { gameweek: Gameweek },
    LeagueClassic { league: LeagueId },
    LeagueH2h { league: LeagueId },
    LeagueH2hFixtures { league: LeagueId, gameweek: Option<Gameweek>, page: u32 },
    LeagueH2hFixture { league: LeagueId, gameweek: Option<Gameweek> },
    Players,
    Player { player: PlayerId },
    Settings,
    Static,
    Teams,
    Transfers,
    User { entry: EntryId },
    UserCup { entry: EntryId },
    UserHistory { entry: EntryId },
    UserPicks { entry: EntryId, gameweek: Gameweek },
    UserTeam { entry: EntryId },
    UserTransfers { entry: EntryId },
    UserLatestTransfers { entry: EntryId },
    Watchlist,
    Me,

    DraftDetails { league: LeagueId },
    DraftTransactions { league: LeagueId },
    DraftTrades { league: LeagueId },
    DraftUserPicks { entry: EntryId, gameweek: Gameweek },
    DraftUser { entry: EntryId },
}

impl Endpoint {
    pub fn is_draft(&self) -> bool {
        matches!(
            self,
            Endpoint::DraftDetails { .. }
                | Endpoint::DraftTransactions { .. }
                | Endpoint::DraftTrades { .. }
                | Endpoint::DraftUserPicks { .. }
                | Endpoint::DraftUser { .. }
        )
    }

    /// Registry key; look it up in `DRAFT_API_URLS` when `is_draft()`.
    pub fn key(&self) -> &'static str {
        match self {
            Endpoint::Dynamic => "dynamic",
            Endpoint::Fixtures => "fixtures",
            Endpoint::Gameweeks => "gameweeks",
            Endpoint::GameweekFixtures { .. } => "gameweek_fixtures",
            Endpoint::GameweekLive { .. } => "gameweek_live",
            Endpoint::LeagueClassic { .. } => "league_classic",
            Endpoint::LeagueH2h { .. } => "league_h2h",
            Endpoint::LeagueH2hFixtures { .. } => "league_h2h_fixtures",
            Endpoint::LeagueH2hFixture { .. } => "league_h2h_fixture",
            Endpoint::Players => "players",
            Endpoint::Player { .. } => "player",
            Endpoint::Settings => "settings",
            Endpoint::Static => "static",
            Endpoint::Teams => "teams",
            Endpoint::Transfers => "transfers",
            Endpoint::User { .. } => "user",
            Endpoint::UserCup { .. } => "user_cup",
            Endpoint::UserHistory { .. } => "user_history",
            Endpoint::UserPicks { .. } => "user_picks",
            Endpoint::UserTeam { .. } => "user_team",
            Endpoint::UserTransfers { .. } => "user_transfers",
            Endpoint::UserLatestTransfers { .. } => "user_latest_transfers",
            Endpoint::Watchlist => "watchlist",
            Endpoint::Me => "me",
            Endpoint::DraftDetails { .. } => "details",
            Endpoint::DraftTransactions { .. } => "transactions",
            Endpoint::DraftTrades { .. } => "trades",
            Endpoint::DraftUserPicks { .. } => "user_picks",
            Endpoint::DraftUser { .. } => "user",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Dynamic => DYNAMIC,
            Endpoint::Fixtures => FIXTURES,
            Endpoint::Gameweeks => GAMEWEEKS,
            Endpoint::GameweekFixtures { .. } => GAMEWEEK_FIXTURES,
            Endpoint::GameweekLive { .. } => GAMEWEEK_LIVE,
            Endpoint::LeagueClassic { .. } => LEAGUE_CLASSIC,
            Endpoint::LeagueH2h { .. } => LEAGUE_H2H,
            Endpoint::LeagueH2hFixtures { .. } => LEAGUE_H2H_FIXTURES,
            Endpoint::LeagueH2hFixture { .. } => LEAGUE_H2H_FIXTURE,
            Endpoint::Players => PLAYERS,
            Endpoint::Player { .. } => PLAYER,
            Endpoint::Settings => SETTINGS,
            Endpoint::Static => STATIC,
            Endpoint::Teams => TEAMS,
            Endpoint::Transfers => TRANSFERS,
            Endpoint::User { .. } => USER,
            Endpoint::UserCup { .. } => USER_CUP,
            Endpoint::UserHistory { .. } => USER_HISTORY,
            Endpoint::UserPicks { .. } => USER_PICKS,
            Endpoint::UserTeam { .. } => USER_TEAM,
            Endpoint::UserTransfers { .. } => USER_TRANSFERS,
            Endpoint::UserLatestTransfers { .. } => USER_LATEST_TRANSFERS,
            Endpoint::Watchlist => WATCHLIST,
            Endpoint::Me => ME,
            Endpoint::DraftDetails { .. } => DRAFT_DETAILS,
            Endpoint::DraftTransactions { .. } => DRAFT_TRANSACTIONS,
            Endpoint::DraftTrades { .. } => DRAFT_TRADES,
            Endpoint::DraftUserPicks { .. } => DRAFT_USER_PICKS,
            Endpoint::DraftUser { .. } => DRAFT_USER,
        }
    }

    fn args(&self) -> Vec<String> {
        // H2H query prefix: "event=<gw>&" or nothing
        let event = |gw: &Option<Gameweek>| {
            gw.map(|g| format!("event={}&", g)).unwrap_or_default()
        };

        match self {
            Endpoint::Dynamic
            | Endpoint::Fixtures
            | Endpoint::Gameweeks
            | Endpoint::Players
            | Endpoint::Settings
            | Endpoint::Static
            | Endpoint::Teams
            | Endpoint::Transfers
            | Endpoint::Watchlist
            | Endpoint::Me => vec![],
            Endpoint::GameweekFixtures { gameweek } | Endpoint::GameweekLive { gameweek } => {
                vec![gameweek.to_string()]
            }
            Endpoint::LeagueClassic { league }
            | Endpoint::LeagueH2h { league }
            | Endpoint::DraftDetails { league }
            | Endpoint::DraftTransactions { league }
            | Endpoint::DraftTrades { league } => vec![league.to_string()],
            Endpoint::LeagueH2hFixtures { league, gameweek, page } => {
                vec![league.to_string(), event(gameweek), page.to_string()]
            }
            Endpoint::LeagueH2hFixture { league, gameweek } => {
                vec![league.to_string(), event(gameweek)]
            }
            Endpoint::Player { player } => vec![player.to_string()],
            Endpoint::User { entry }
            | Endpoint::UserCup { entry }
            | Endpoint::UserHistory { entry }
            | Endpoint::UserTeam { entry }
            | Endpoint::UserTransfers { entry }
            | Endpoint::UserLatestTransfers { entry }
            | Endpoint::DraftUser { entry } => vec![entry.to_string()],
            Endpoint::UserPicks { entry, gameweek }
            | Endpoint::DraftUserPicks { entry, gameweek } => {
                vec![entry.to_string(), gameweek.to_string()]
            }
        }
    }

    pub fn url(&self) -> String {
        fill(self.template(), &self.args())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gw(n: u8) -> Gameweek {
        Gameweek::new(n).unwrap()
    }

    fn all_endpoints() -> Vec<Endpoint> {
        let league = LeagueId(42);
        let entry = EntryId(1234);
        vec![
            Endpoint::Dynamic,
            Endpoint::Fixtures,
            Endpoint::Gameweeks,
            Endpoint::GameweekFixtures { gameweek: gw(3) },
            Endpoint::GameweekLive { gameweek: gw(3) },
            Endpoint::LeagueClassic { league },
            Endpoint::LeagueH2h { league },
            Endpoint::LeagueH2hFixtures { league, gameweek: Some(gw(3)), page: 2 },
            Endpoint::LeagueH2hFixture { league, gameweek: None },
            Endpoint::Players,
            Endpoint::Player { player: PlayerId(302) },
            Endpoint::Settings,
            Endpoint::Static,
            Endpoint::Teams,
            Endpoint::Transfers,
            Endpoint::User { entry },
            Endpoint::UserCup { entry },
            Endpoint::UserHistory { entry },
            Endpoint::UserPicks { entry, gameweek: gw(3) },
            Endpoint::UserTeam { entry },
            Endpoint::UserTransfers { entry },
            Endpoint::UserLatestTransfers { entry },
            Endpoint::Watchlist,
            Endpoint::Me,
            Endpoint::DraftDetails { league },
            Endpoint::DraftTransactions { league },
            Endpoint::DraftTrades { league },
            Endpoint::DraftUserPicks { entry, gameweek: gw(3) },
            Endpoint::DraftUser { entry },
        ]
    }

    #[test]
    fn every_template_formats_under_its_base_url() {
        let tables = [(API_URLS, API_BASE_URL), (DRAFT_API_URLS, DRAFT_API_BASE_URL)];
        for (table, base) in tables {
            for (key, template) in table {
                let args: Vec<u32> = (1..=placeholder_count(template) as u32).collect();
                let refs: Vec<&dyn fmt::Display> =
                    args.iter().map(|a| a as &dyn fmt::Display).collect();
                let url = format_template(template, &refs).unwrap();
                assert!(url.starts_with(base), "{} -> {}", key, url);
                assert!(!url.contains("{}"), "{} left a placeholder", key);
                assert!(!url.contains(char::is_whitespace));
            }
        }
    }

    #[test]
    fn registry_sizes() {
        assert_eq!(API_URLS.len(), 24);
        assert_eq!(DRAFT_API_URLS.len(), 5);
        assert!(API_URLS.iter().all(|(_, t)| placeholder_count(t) <= 3));
    }

    #[test]
    fn every_endpoint_is_registered_and_absolute() {
        for endpoint in all_endpoints() {
            let registered = if endpoint.is_draft() {
                draft_template(endpoint.key())
            } else {
                template(endpoint.key())
            };
            assert_eq!(registered, Some(endpoint.template()), "{:?}", endpoint);

            let base = if endpoint.is_draft() { DRAFT_API_BASE_URL } else { API_BASE_URL };
            let url = endpoint.url();
            assert!(url.starts_with(base), "{}", url);
            assert!(!url.contains("{}"), "{}", url);
        }
    }

    #[test]
    fn draft_urls() {
        let league = LeagueId(42);
        assert_eq!(
            Endpoint::DraftTransactions { league }.url(),
            "https://draft.premierleague.com/api/draft/league/42/transactions"
        );
        assert_eq!(
            Endpoint::DraftTrades { league }.url(),
            "https://draft.premierleague.com/api/draft/league/42/trades"
        );
        assert_eq!(
            Endpoint::DraftDetails { league }.url(),
            "https://draft.premierleague.com/api/league/42/details"
        );
        assert_eq!(
            Endpoint::DraftUserPicks { entry: EntryId(7), gameweek: gw(12) }.to_string(),
            "https://draft.premierleague.com/api/entry/7/event/12"
        );
        assert_eq!(
            Endpoint::DraftUser { entry: EntryId(7) }.url(),
            "https://draft.premierleague.com/api/entry/7/public"
        );
    }

    #[test]
    fn h2h_query_prefix() {
        let league = LeagueId(9);
        assert_eq!(
            Endpoint::LeagueH2hFixtures { league, gameweek: Some(gw(5)), page: 1 }.url(),
            "https://fantasy.premierleague.com/api/leagues-h2h-matches/league/9/?event=5&page=1"
        );
        assert_eq!(
            Endpoint::LeagueH2hFixtures { league, gameweek: None, page: 3 }.url(),
            "https://fantasy.premierleague.com/api/leagues-h2h-matches/league/9/?page=3"
        );
        assert_eq!(
            Endpoint::LeagueH2hFixture { league, gameweek: Some(gw(5)) }.url(),
            "https://fantasy.premierleague.com/api/leagues-h2h-matches/league/9/?event=5&"
        );
    }

    #[test]
    fn placeholder_mismatch_is_an_error() {
        let err = format_template(USER_PICKS, &[&1234]).unwrap_err();
        match err {
            FplError::Template { expected, given, .. } => {
                assert_eq!(expected, 2);
                assert_eq!(given, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(format_template(ME, &[&1]).is_err());
    }

    #[test]
    fn unknown_keys() {
        assert_eq!(template("details"), None);
        assert_eq!(draft_template("watchlist"), None);
        assert_eq!(template("user"), Some(USER));
        assert_eq!(draft_template("user"), Some(DRAFT_USER));
    }

    #[test]
    fn gameweek_bounds() {
        assert!(Gameweek::new(0).is_err());
        assert_eq!(gw(1).get(), 1);
        assert_eq!(gw(47).get(), 47);
        assert!(matches!(Gameweek::new(48), Err(FplError::InvalidGameweek(48))));
    }
}
