//! Query composition: one immutable request descriptor from the union of
//! filter state.

use crate::filter::scalar::GameLocation;
use crate::filter::FilterSession;

#[cfg(test)]
mod tests;

/// The merged snapshot of all filter state behind one `/shots` request.
///
/// Built fresh per query by [`QueryDescriptor::from_session`] and never
/// mutated after construction. Absent or default-valued filters are omitted
/// entirely, never sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub player_ids: Option<String>,
    pub team_ids: Option<String>,
    pub season_ids: Option<String>,
    pub opposing_team_ids: Option<String>,
    pub start_game_date: Option<String>,
    pub end_game_date: Option<String>,
    pub game_location: Option<GameLocation>,
    pub quarter_ids: Option<String>,
    pub start_time_left: Option<String>,
    pub end_time_left: Option<String>,
}

impl QueryDescriptor {
    /// Compose a descriptor, or `None` when the query is suppressed.
    ///
    /// A query needs at least one primary facet: players, teams or seasons.
    /// Opponent, dates, location, quarters and clock times only refine and
    /// cannot stand alone, so a session with nothing but refinements set
    /// composes to `None` and no request fires.
    pub fn from_session(session: &FilterSession) -> Option<Self> {
        if session.players.is_empty() && session.teams.is_empty() && session.seasons.is_empty() {
            return None;
        }

        Some(Self {
            player_ids: session.players.csv(),
            team_ids: session.teams.csv(),
            season_ids: session.seasons.csv(),
            opposing_team_ids: session.opponents.csv(),
            start_game_date: session.start_date.encoded(),
            end_game_date: session.end_date.encoded(),
            game_location: session.location.value(),
            quarter_ids: session.quarters.csv(),
            start_time_left: session.start_time_left.encoded(),
            end_time_left: session.end_time_left.encoded(),
        })
    }

    /// The backend query parameters, in fixed key order. Identical filter
    /// state always yields identical pairs, which doubles as the request
    /// de-duplication key for the fetch layer.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let fields: [(&'static str, Option<String>); 10] = [
            ("player_id", self.player_ids.clone()),
            ("team_id", self.team_ids.clone()),
            ("season", self.season_ids.clone()),
            ("opposing_team_id", self.opposing_team_ids.clone()),
            ("start_game_date", self.start_game_date.clone()),
            ("end_game_date", self.end_game_date.clone()),
            ("game_location", self.game_location.map(|l| l.to_string())),
            ("quarter", self.quarter_ids.clone()),
            ("start_time_left", self.start_time_left.clone()),
            ("end_time_left", self.end_time_left.clone()),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }

    /// Stable cache key for "re-fetch only if changed".
    pub fn cache_key(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
