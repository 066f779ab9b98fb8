//! Audience relevance filtering over golden content.

use std::collections::BTreeSet;

use wayfinder_content::ContentStore;
use wayfinder_core::models::{AudienceTag, ResourceLevel};
use wayfinder_retrieval::{select_examples, select_solutions};

fn golden_store() -> ContentStore {
    ContentStore::build(test_fixtures::load_fixture(test_fixtures::GUIDANCE_ENTRIES)).unwrap()
}

fn audience(tags: &[&str]) -> BTreeSet<AudienceTag> {
    tags.iter().map(|t| AudienceTag::from(*t)).collect()
}

#[test]
fn matching_audience_keeps_tagged_and_general_examples_in_order() {
    let store = golden_store();
    let entry = store.get_by_id("2.1-entrance-step").unwrap();

    let tags: Vec<&str> = select_examples(entry, &audience(&["retail"]))
        .iter()
        .map(|e| e.audience.as_str())
        .collect();
    assert_eq!(tags, vec!["general", "retail"]);
}

#[test]
fn unmatched_audience_falls_back_to_all_examples() {
    let store = golden_store();
    let entry = store.get_by_id("2.1-entrance-step").unwrap();

    let selected = select_examples(entry, &audience(&["tour-operator"]));
    assert_eq!(selected.len(), 3);
    assert_eq!(selected[0].audience.as_str(), "accommodation");
}

#[test]
fn empty_audience_returns_all_examples() {
    let store = golden_store();
    let entry = store.get_by_id("2.1-entrance-step").unwrap();

    let all: Vec<_> = entry.examples.iter().collect();
    assert_eq!(select_examples(entry, &BTreeSet::new()), all);
}

#[test]
fn multiple_tags_union_their_examples() {
    let store = golden_store();
    let entry = store.get_by_id("4.1-staff-training").unwrap();

    let selected = select_examples(entry, &audience(&["retail", "tour-operator"]));
    assert_eq!(selected.len(), 2);

    let only_retail = select_examples(entry, &audience(&["retail"]));
    assert_eq!(only_retail.len(), 1);
    assert_eq!(only_retail[0].audience.as_str(), "retail");
}

#[test]
fn entry_without_examples_yields_none() {
    let store = golden_store();
    let entry = store.get_by_id("1.2-website").unwrap();
    assert!(select_examples(entry, &audience(&["retail"])).is_empty());
}

#[test]
fn solutions_filter_by_budget_in_original_order() {
    let store = golden_store();
    let entry = store.get_by_id("4.1-staff-training").unwrap();

    let titles = |level| -> Vec<String> {
        select_solutions(entry, level)
            .iter()
            .map(|s| s.title.clone())
            .collect()
    };
    assert_eq!(titles(Some(ResourceLevel::Low)), vec!["Free online module"]);
    assert_eq!(
        titles(Some(ResourceLevel::Medium)),
        vec!["Free online module", "Disability awareness workshop"]
    );
    assert_eq!(titles(None).len(), 3);
}

#[test]
fn solutions_fall_back_when_nothing_fits_budget() {
    let store = golden_store();
    let entry = store.get_by_id("2.1-entrance-step").unwrap();
    assert_eq!(select_solutions(entry, Some(ResourceLevel::Low)).len(), 2);
}
