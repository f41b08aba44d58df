//! Filterable domain entities: players, teams, seasons, quarters.

use serde::{Deserialize, Serialize};

/// An entity that can be picked into a [`SelectionSet`](super::selection::SelectionSet).
///
/// `id` is unique within its category and is what round-trips through URL
/// parameters; `label` is the human-readable display string kept in the
/// selection's reverse index (a player's name, a season's year span, ...).
pub trait FilterItem {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl FilterItem for Player {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

impl FilterItem for Team {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub season_years: String,
}

impl FilterItem for Season {
    fn id(&self) -> &str {
        &self.id
    }

    /// Seasons display their year span ("2019-20") rather than a name.
    fn label(&self) -> &str {
        &self.season_years
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quarter {
    pub id: &'static str,
    pub name: &'static str,
}

impl FilterItem for Quarter {
    fn id(&self) -> &str {
        self.id
    }

    fn label(&self) -> &str {
        self.name
    }
}

/// The fixed quarter table: four regulation quarters plus four overtimes.
pub const QUARTERS: [Quarter; 8] = [
    Quarter { id: "1", name: "1st" },
    Quarter { id: "2", name: "2nd" },
    Quarter { id: "3", name: "3rd" },
    Quarter { id: "4", name: "4th" },
    Quarter { id: "5", name: "OT" },
    Quarter { id: "6", name: "2OT" },
    Quarter { id: "7", name: "3OT" },
    Quarter { id: "8", name: "4OT" },
];
