//! Multi-select filter state for a single category (players, teams, ...).

use std::collections::HashMap;

use super::item::FilterItem;
use super::params::ParamStore;

#[cfg(test)]
mod tests;

/// An ordered, duplicate-free selection of filter items.
///
/// Insertion order is display order; a reverse `id -> label` index gives O(1)
/// membership checks. The two structures are kept consistent by construction:
/// every mutation goes through [`select`](Self::select) / [`remove`](Self::remove)
/// and updates both in the same step, and additionally writes the comma-joined
/// id list back to the category's URL key so the address bar is always a
/// faithful snapshot of current state.
///
/// All operations are total: selecting an id that cannot be resolved, or
/// removing one that is not present, is a no-op.
#[derive(Debug, Clone)]
pub struct SelectionSet<T: FilterItem + Clone> {
    key: &'static str,
    items: Vec<T>,
    index: HashMap<String, String>,
}

impl<T: FilterItem + Clone> SelectionSet<T> {
    /// Empty selection writing to the given URL key.
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The URL search-parameter key this category serializes under.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Select `id`, resolving the item from `dataset`. Idempotent; unknown
    /// ids are silently ignored.
    pub fn select(&mut self, params: &mut dyn ParamStore, dataset: &[T], id: &str) {
        if self.index.contains_key(id) {
            return;
        }
        let Some(item) = dataset.iter().find(|item| item.id() == id) else {
            return;
        };
        self.push(params, item.clone());
    }

    /// Select an item resolved elsewhere (e.g. a batch-by-id backend lookup
    /// during URL restore, where no local dataset exists). Idempotent.
    pub fn select_preloaded(&mut self, params: &mut dyn ParamStore, item: T) {
        if self.index.contains_key(item.id()) {
            return;
        }
        self.push(params, item);
    }

    /// Select everything still searchable, in dataset order.
    pub fn select_all(&mut self, params: &mut dyn ParamStore, dataset: &[T]) {
        for item in dataset {
            if !self.index.contains_key(item.id()) {
                self.push(params, item.clone());
            }
        }
    }

    /// Remove `id` if present.
    pub fn remove(&mut self, params: &mut dyn ParamStore, id: &str) {
        if self.index.remove(id).is_none() {
            return;
        }
        self.items.retain(|item| item.id() != id);
        self.write_url(params);
    }

    /// Clear the sequence and the reverse index in one step.
    pub fn remove_all(&mut self, params: &mut dyn ParamStore) {
        self.items.clear();
        self.index.clear();
        params.clear(self.key);
    }

    /// The remainder of `dataset` still eligible to pick.
    pub fn searched_items<'a>(&self, dataset: &'a [T]) -> Vec<&'a T> {
        dataset
            .iter()
            .filter(|item| !self.index.contains_key(item.id()))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Display label for a selected id, from the reverse index.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(String::as_str)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id()).collect()
    }

    /// Comma-joined id list, the URL/backend wire form. `None` when empty.
    pub fn csv(&self) -> Option<String> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.ids().join(","))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, params: &mut dyn ParamStore, item: T) {
        self.index
            .insert(item.id().to_string(), item.label().to_string());
        self.items.push(item);
        self.write_url(params);
    }

    fn write_url(&self, params: &mut dyn ParamStore) {
        match self.csv() {
            Some(csv) => params.set(self.key, csv),
            None => params.clear(self.key),
        }
    }
}
