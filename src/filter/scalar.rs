//! Single-value filters: date-range endpoints, game location, clock times.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::params::ParamStore;
use crate::error::{Result, ShotsError};


pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An optional date endpoint, serialized as ISO `yyyy-MM-dd`.
///
/// No cross-field validation here: start > end is the backend's problem, the
/// store accepts any value.
#[derive(Debug, Clone)]
pub struct DateFilter {
    key: &'static str,
    value: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(key: &'static str) -> Self {
        Self { key, value: None }
    }

    pub fn select(&mut self, params: &mut dyn ParamStore, date: NaiveDate) {
        self.value = Some(date);
        params.set(self.key, date.format(DATE_FORMAT).to_string());
    }

    pub fn remove(&mut self, params: &mut dyn ParamStore) {
        self.value = None;
        params.clear(self.key);
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Wire form, `None` when unset.
    pub fn encoded(&self) -> Option<String> {
        self.value.map(|d| d.format(DATE_FORMAT).to_string())
    }
}

/// Minutes:seconds remaining in a quarter, domain 0:00 ..= 12:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockTime {
    /// Full quarter remaining; the "not filtering" sentinel for the start
    /// endpoint.
    pub const QUARTER_START: ClockTime = ClockTime {
        minutes: 12,
        seconds: 0,
    };

    /// Nothing remaining; the "not filtering" sentinel for the end endpoint.
    pub const QUARTER_END: ClockTime = ClockTime {
        minutes: 0,
        seconds: 0,
    };

    pub fn new(minutes: u8, seconds: u8) -> Option<Self> {
        let t = Self { minutes, seconds };
        t.in_domain().then_some(t)
    }

    fn in_domain(&self) -> bool {
        match self.minutes {
            0..=11 => self.seconds <= 59,
            12 => self.seconds == 0,
            _ => false,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

impl FromStr for ClockTime {
    type Err = ShotsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ShotsError::InvalidClockTime {
            input: s.to_string(),
        };
        let (m, sec) = s.split_once(':').ok_or_else(invalid)?;
        let minutes: u8 = m.parse().map_err(|_| invalid())?;
        let seconds: u8 = sec.parse().map_err(|_| invalid())?;
        ClockTime::new(minutes, seconds).ok_or_else(invalid)
    }
}

/// A time-remaining endpoint with a default-value sentinel.
///
/// Selecting a value exactly equal to the configured default means "no
/// filter applied": the in-memory value resets and the URL key is cleared
/// rather than written with the default.
#[derive(Debug, Clone)]
pub struct ClockFilter {
    key: &'static str,
    default: ClockTime,
    value: ClockTime,
}

impl ClockFilter {
    pub fn new(key: &'static str, default: ClockTime) -> Self {
        Self {
            key,
            default,
            value: default,
        }
    }

    pub fn select(&mut self, params: &mut dyn ParamStore, time: ClockTime) {
        self.value = time;
        if time == self.default {
            params.clear(self.key);
        } else {
            params.set(self.key, time.to_string());
        }
    }

    pub fn remove(&mut self, params: &mut dyn ParamStore) {
        self.value = self.default;
        params.clear(self.key);
    }

    pub fn value(&self) -> ClockTime {
        self.value
    }

    pub fn default_value(&self) -> ClockTime {
        self.default
    }

    /// Whether the filter deviates from its default, i.e. is actually
    /// narrowing the query.
    pub fn is_active(&self) -> bool {
        self.value != self.default
    }

    /// Wire form, `None` at the default sentinel.
    pub fn encoded(&self) -> Option<String> {
        self.is_active().then(|| self.value.to_string())
    }
}

/// Home/away game location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameLocation {
    Home,
    Away,
}

impl fmt::Display for GameLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameLocation::Home => write!(f, "home"),
            GameLocation::Away => write!(f, "away"),
        }
    }
}

impl FromStr for GameLocation {
    type Err = ShotsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "home" => Ok(GameLocation::Home),
            "away" => Ok(GameLocation::Away),
            _ => Err(ShotsError::InvalidLocation {
                input: s.to_string(),
            }),
        }
    }
}

/// Optional game-location filter; `None` (unset) is never serialized.
#[derive(Debug, Clone)]
pub struct LocationFilter {
    key: &'static str,
    value: Option<GameLocation>,
}

impl LocationFilter {
    pub fn new(key: &'static str) -> Self {
        Self { key, value: None }
    }

    pub fn select(&mut self, params: &mut dyn ParamStore, location: GameLocation) {
        self.value = Some(location);
        params.set(self.key, location.to_string());
    }

    pub fn remove(&mut self, params: &mut dyn ParamStore) {
        self.value = None;
        params.clear(self.key);
    }

    pub fn value(&self) -> Option<GameLocation> {
        self.value
    }
}
