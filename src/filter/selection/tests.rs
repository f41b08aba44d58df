//! Unit tests for selection sets

use super::*;
use crate::filter::item::Player;
use crate::filter::params::SearchParams;

fn roster() -> Vec<Player> {
    vec![
        Player {
            id: "1".to_string(),
            name: "LeBron James".to_string(),
        },
        Player {
            id: "2".to_string(),
            name: "Stephen Curry".to_string(),
        },
        Player {
            id: "3".to_string(),
            name: "Kevin Durant".to_string(),
        },
    ]
}

#[test]
fn test_select_appends_and_writes_url() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "2");
    selection.select(&mut params, &dataset, "1");

    assert_eq!(selection.ids(), vec!["2", "1"]);
    assert_eq!(selection.label("2"), Some("Stephen Curry"));
    assert_eq!(params.get("players"), Some("2,1"));
}

#[test]
fn test_select_is_idempotent() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "1");
    let once = selection.ids().join(",");
    selection.select(&mut params, &dataset, "1");

    assert_eq!(selection.ids().join(","), once);
    assert_eq!(selection.len(), 1);
    assert_eq!(params.get("players"), Some("1"));
}

#[test]
fn test_select_unknown_id_is_noop() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "99");

    assert!(selection.is_empty());
    assert_eq!(params.get("players"), None);
}

#[test]
fn test_remove_is_inverse_of_select() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "1");
    let before_ids = selection.ids().join(",");
    let before_url = params.get("players").map(str::to_string);

    selection.select(&mut params, &dataset, "2");
    selection.remove(&mut params, "2");

    assert_eq!(selection.ids().join(","), before_ids);
    assert!(!selection.contains("2"));
    assert_eq!(selection.label("2"), None);
    assert_eq!(params.get("players").map(str::to_string), before_url);
}

#[test]
fn test_remove_absent_id_is_noop() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "1");
    selection.remove(&mut params, "42");

    assert_eq!(selection.ids(), vec!["1"]);
}

#[test]
fn test_remove_last_item_clears_url_key() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "1");
    selection.remove(&mut params, "1");

    assert_eq!(params.get("players"), None);
}

#[test]
fn test_searched_items_partition() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "2");

    let searched: Vec<&str> = selection
        .searched_items(&dataset)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(searched, vec!["1", "3"]);

    // Union is the full dataset, intersection empty.
    let mut all: Vec<&str> = searched.into_iter().chain(selection.ids()).collect();
    all.sort();
    assert_eq!(all, vec!["1", "2", "3"]);
    assert!(!selection.searched_items(&dataset).iter().any(|p| selection.contains(&p.id)));
}

#[test]
fn test_select_all_takes_remainder_in_dataset_order() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select(&mut params, &dataset, "3");
    selection.select_all(&mut params, &dataset);

    assert_eq!(selection.ids(), vec!["3", "1", "2"]);
    assert!(selection.searched_items(&dataset).is_empty());
    assert_eq!(params.get("players"), Some("3,1,2"));
}

#[test]
fn test_remove_all_clears_everything() {
    let dataset = roster();
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select_all(&mut params, &dataset);
    selection.remove_all(&mut params);

    assert!(selection.is_empty());
    assert_eq!(selection.csv(), None);
    assert_eq!(params.get("players"), None);
    assert_eq!(selection.searched_items(&dataset).len(), dataset.len());
}

#[test]
fn test_select_preloaded_bypasses_dataset() {
    let mut params = SearchParams::new();
    let mut selection = SelectionSet::new("players");

    selection.select_preloaded(
        &mut params,
        Player {
            id: "7".to_string(),
            name: "Carmelo Anthony".to_string(),
        },
    );

    assert!(selection.contains("7"));
    assert_eq!(params.get("players"), Some("7"));
}
