//! The search-params port: how filter state round-trips through a URL query
//! string.
//!
//! Stores never touch a URL directly; they write through the [`ParamStore`]
//! trait so the filter logic stays framework-agnostic and unit-testable.
//! [`SearchParams`] is the concrete store used everywhere, with a lenient
//! query-string parser (bad pairs are skipped, not fatal) and a canonical
//! encoder so the emitted share link is deterministic for a given state.

use std::collections::BTreeMap;


/// Write/read access to the URL-bound search parameters.
///
/// One key per filter category; setting a key replaces its value, clearing a
/// key means "this filter is not applied".
pub trait ParamStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
    fn clear(&mut self, key: &str);
}

/// In-memory search parameters, ordered by key for stable encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    entries: BTreeMap<String, String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string like `players=1,2&seasons=2020`.
    ///
    /// A leading `?` is tolerated. Pairs without `=`, empty keys and empty
    /// values are skipped; a stale or hand-edited link degrades to fewer
    /// applied filters rather than an error.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut entries = BTreeMap::new();
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if !key.is_empty() && !value.is_empty() {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
        }
        Self { entries }
    }

    /// Encode back to `key=value&...` in key order.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParamStore for SearchParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
