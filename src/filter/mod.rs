//! Filter state and its URL round-trip.
//!
//! One [`FilterSession`] owns every filter category of the shot query surface:
//! multi-select sets for players / teams / seasons / opponents / quarters,
//! scalar stores for the date range, game location and time-remaining range,
//! plus the [`SearchParams`] they all write through. Every mutation updates the
//! corresponding URL key synchronously, so `session.params` is always a
//! shareable snapshot of current filter state.

pub mod item;
pub mod params;
pub mod scalar;
pub mod selection;

use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;

use item::{Player, Quarter, Season, Team, QUARTERS};
use params::{ParamStore, SearchParams};
use scalar::{ClockFilter, ClockTime, DateFilter, GameLocation, LocationFilter, DATE_FORMAT};
use selection::SelectionSet;


/// URL search-parameter keys, one per filter category.
pub mod keys {
    pub const PLAYERS: &str = "players";
    pub const TEAMS: &str = "teams";
    pub const SEASONS: &str = "seasons";
    pub const OPP_TEAMS: &str = "opp_teams";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const GAME_LOC: &str = "game_loc";
    pub const QUARTER: &str = "quarter";
    pub const START_TIME_LEFT: &str = "start_time_left";
    pub const END_TIME_LEFT: &str = "end_time_left";
}

/// The reference datasets selections resolve against. Teams double as the
/// opponent dataset; quarters are the fixed built-in table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub teams: Vec<Team>,
    pub seasons: Vec<Season>,
}

/// One-shot guard for applying URL state: restore runs once per session,
/// never after user-driven edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestoreState {
    Pending,
    Applied,
}

/// All filter state for one query-composition session.
#[derive(Debug, Clone)]
pub struct FilterSession {
    pub params: SearchParams,
    pub players: SelectionSet<Player>,
    pub teams: SelectionSet<Team>,
    pub seasons: SelectionSet<Season>,
    pub opponents: SelectionSet<Team>,
    pub quarters: SelectionSet<Quarter>,
    pub start_date: DateFilter,
    pub end_date: DateFilter,
    pub location: LocationFilter,
    pub start_time_left: ClockFilter,
    pub end_time_left: ClockFilter,
    restore: RestoreState,
}

impl FilterSession {
    pub fn new() -> Self {
        Self {
            params: SearchParams::new(),
            players: SelectionSet::new(keys::PLAYERS),
            teams: SelectionSet::new(keys::TEAMS),
            seasons: SelectionSet::new(keys::SEASONS),
            opponents: SelectionSet::new(keys::OPP_TEAMS),
            quarters: SelectionSet::new(keys::QUARTER),
            start_date: DateFilter::new(keys::START_DATE),
            end_date: DateFilter::new(keys::END_DATE),
            location: LocationFilter::new(keys::GAME_LOC),
            start_time_left: ClockFilter::new(keys::START_TIME_LEFT, ClockTime::QUARTER_START),
            end_time_left: ClockFilter::new(keys::END_TIME_LEFT, ClockTime::QUARTER_END),
            restore: RestoreState::Pending,
        }
    }

    /// Session seeded from a shared/bookmarked link's query string. The
    /// parameters only become filter state once
    /// [`restore_from_url`](Self::restore_from_url) resolves them against the
    /// reference datasets.
    pub fn from_query_string(query: &str) -> Self {
        let mut session = Self::new();
        session.params = SearchParams::from_query_string(query);
        session
    }

    /// The ids named by the `players` URL key, for the batch-by-id backend
    /// lookup that must complete before restore can run.
    pub fn pending_player_ids(&self) -> Vec<String> {
        match self.params.get(keys::PLAYERS) {
            Some(csv) => csv.split(',').map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    /// Apply the URL parameters to the stores, exactly once.
    ///
    /// `url_players` is the batch-resolved result for
    /// [`pending_player_ids`](Self::pending_player_ids); teams, seasons,
    /// opponents and quarters resolve against `reference` / the built-in
    /// quarter table. Category order is fixed but immaterial: no category's
    /// decode depends on another. Malformed values degrade per category
    /// (invalid clock time -> default, invalid location -> cleared,
    /// unresolvable id -> skipped) and never error.
    ///
    /// Returns `true` when restore ran now, signalling the caller to fire the
    /// one automatic query; later calls are no-ops returning `false`.
    pub fn restore_from_url(&mut self, reference: &ReferenceData, url_players: &[Player]) -> bool {
        if self.restore == RestoreState::Applied {
            return false;
        }
        self.restore = RestoreState::Applied;
        debug!("restoring filter state from url: {}", self.params.to_query_string());

        for player in url_players {
            self.players
                .select_preloaded(&mut self.params, player.clone());
        }
        for id in Self::csv_ids(&self.params, keys::TEAMS) {
            self.teams.select(&mut self.params, &reference.teams, &id);
        }
        for id in Self::csv_ids(&self.params, keys::SEASONS) {
            self.seasons
                .select(&mut self.params, &reference.seasons, &id);
        }
        for id in Self::csv_ids(&self.params, keys::OPP_TEAMS) {
            self.opponents
                .select(&mut self.params, &reference.teams, &id);
        }
        if let Some(raw) = self.params.get(keys::START_DATE).map(str::to_string) {
            match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => self.start_date.select(&mut self.params, date),
                Err(_) => self.start_date.remove(&mut self.params),
            }
        }
        if let Some(raw) = self.params.get(keys::END_DATE).map(str::to_string) {
            match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => self.end_date.select(&mut self.params, date),
                Err(_) => self.end_date.remove(&mut self.params),
            }
        }
        if let Some(raw) = self.params.get(keys::GAME_LOC).map(str::to_string) {
            match GameLocation::from_str(&raw) {
                Ok(loc) => self.location.select(&mut self.params, loc),
                Err(_) => self.location.remove(&mut self.params),
            }
        }
        for id in Self::csv_ids(&self.params, keys::QUARTER) {
            self.quarters.select(&mut self.params, &QUARTERS, &id);
        }
        if let Some(raw) = self.params.get(keys::START_TIME_LEFT).map(str::to_string) {
            let time = ClockTime::from_str(&raw).unwrap_or(self.start_time_left.default_value());
            self.start_time_left.select(&mut self.params, time);
        }
        if let Some(raw) = self.params.get(keys::END_TIME_LEFT).map(str::to_string) {
            let time = ClockTime::from_str(&raw).unwrap_or(self.end_time_left.default_value());
            self.end_time_left.select(&mut self.params, time);
        }

        true
    }

    /// Whether URL state has already been applied this session.
    pub fn restored(&self) -> bool {
        self.restore == RestoreState::Applied
    }

    /// The shareable link body for the current filter state.
    pub fn share_link(&self) -> String {
        self.params.to_query_string()
    }

    // Session-level mutators: each borrows the selection set and the param
    // store disjointly, so callers never juggle the port themselves.

    pub fn select_player(&mut self, player: Player) {
        self.players.select_preloaded(&mut self.params, player);
    }

    pub fn select_team(&mut self, reference: &ReferenceData, id: &str) {
        self.teams.select(&mut self.params, &reference.teams, id);
    }

    pub fn select_season(&mut self, reference: &ReferenceData, id: &str) {
        self.seasons.select(&mut self.params, &reference.seasons, id);
    }

    pub fn select_opponent(&mut self, reference: &ReferenceData, id: &str) {
        self.opponents.select(&mut self.params, &reference.teams, id);
    }

    pub fn select_quarter(&mut self, id: &str) {
        self.quarters.select(&mut self.params, &QUARTERS, id);
    }

    pub fn select_start_date(&mut self, date: NaiveDate) {
        self.start_date.select(&mut self.params, date);
    }

    pub fn select_end_date(&mut self, date: NaiveDate) {
        self.end_date.select(&mut self.params, date);
    }

    pub fn select_location(&mut self, location: GameLocation) {
        self.location.select(&mut self.params, location);
    }

    pub fn select_start_time_left(&mut self, time: ClockTime) {
        self.start_time_left.select(&mut self.params, time);
    }

    pub fn select_end_time_left(&mut self, time: ClockTime) {
        self.end_time_left.select(&mut self.params, time);
    }

    fn csv_ids(params: &SearchParams, key: &str) -> Vec<String> {
        match params.get(key) {
            Some(csv) => csv.split(',').map(str::to_string).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for FilterSession {
    fn default() -> Self {
        Self::new()
    }
}
