use super::*;
use crate::state::test_helpers::thumb;

fn sample() -> Vec<Thumbnail> {
    vec![
        thumb("t1", "gaming", true),
        thumb("t2", "music", false),
        thumb("t3", "gaming", false),
        thumb("t4", "vlog", true),
    ]
}

fn ids(list: &[&Thumbnail]) -> Vec<String> {
    list.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn category_keys_never_collide_with_reserved_filters() {
    let filters = [
        Filter::All,
        Filter::Favorites,
        Filter::Category("all".to_owned()),
        Filter::Category("favorites".to_owned()),
    ];
    let keys: Vec<String> = filters.iter().map(Filter::key).collect();
    assert_eq!(keys, vec!["all", "favorites", "category:all", "category:favorites"]);
}

#[test]
fn favorites_keeps_only_starred() {
    let items = sample();
    assert_eq!(ids(&Filter::Favorites.apply(&items)), vec!["t1", "t4"]);
}

#[test]
fn category_matches_exactly_and_preserves_order() {
    let items = sample();
    let filter = Filter::Category("gaming".to_owned());
    assert_eq!(ids(&filter.apply(&items)), vec!["t1", "t3"]);
    assert!(Filter::Category("Gaming".to_owned()).apply(&items).is_empty());
}

#[test]
fn all_after_any_filter_yields_full_list() {
    let items = sample();
    for previous in [Filter::Favorites, Filter::Category("vlog".to_owned())] {
        let _ = previous.apply(&items);
        assert_eq!(ids(&Filter::All.apply(&items)), vec!["t1", "t2", "t3", "t4"]);
    }
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let items = sample();
    assert_eq!(categories(&items), vec!["gaming", "music", "vlog"]);
    assert!(categories(&[]).is_empty());
}

#[test]
fn labels_capitalize_reserved_filters_only() {
    assert_eq!(Filter::All.label(), "All");
    assert_eq!(Filter::Favorites.label(), "Favorites");
    assert_eq!(Filter::Category("gaming".to_owned()).label(), "gaming");
}
