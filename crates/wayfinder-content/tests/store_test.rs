//! ContentStore construction and lookup.

use wayfinder_content::ContentStore;
use wayfinder_core::errors::ContentError;
use wayfinder_core::models::{Category, GuidanceEntry, ModuleCode, ModuleGroup};

fn golden_entries() -> Vec<GuidanceEntry> {
    test_fixtures::load_fixture(test_fixtures::GUIDANCE_ENTRIES)
}

fn golden_store() -> ContentStore {
    ContentStore::build(golden_entries()).unwrap()
}

fn ids(entries: &[&GuidanceEntry]) -> Vec<String> {
    entries.iter().map(|e| e.question_id.clone()).collect()
}

#[test]
fn duplicate_question_id_fails_construction() {
    let entries: Vec<GuidanceEntry> = test_fixtures::load_fixture(test_fixtures::DUPLICATE_IDS);
    let err = ContentStore::build(entries).unwrap_err();
    match err {
        ContentError::DuplicateQuestionId {
            question_id,
            first_index,
            duplicate_index,
        } => {
            assert_eq!(question_id, "2.1-entrance-step");
            assert_eq!(first_index, 0);
            assert_eq!(duplicate_index, 2);
        }
        other => panic!("expected DuplicateQuestionId, got {other:?}"),
    }
}

#[test]
fn empty_question_id_fails_construction() {
    let mut entries = golden_entries();
    entries[3].question_id = "  ".to_string();
    assert!(matches!(
        ContentStore::build(entries),
        Err(ContentError::EmptyQuestionId { index: 3 })
    ));
}

#[test]
fn get_by_id_returns_the_exact_entry_for_every_source_entry() {
    let entries = golden_entries();
    let store = ContentStore::build(entries.clone()).unwrap();

    for entry in &entries {
        assert_eq!(store.get_by_id(&entry.question_id), Some(entry));
        assert!(store.exists(&entry.question_id));
    }
    assert!(store.get_by_id("9.9-retired-question").is_none());
    assert!(!store.exists("9.9-retired-question"));
    assert_eq!(store.len(), entries.len());
}

#[test]
fn module_index_partitions_entries_in_source_order() {
    let store = golden_store();

    assert_eq!(
        ids(&store.get_by_module(&ModuleCode::from("2.1"))),
        vec!["2.1-entrance-step", "2.2-door-width"]
    );
    assert_eq!(
        ids(&store.get_by_module(&ModuleCode::from("3.4"))),
        vec!["3.4-grab-rails", "3.5-shower"]
    );
    assert!(store.get_by_module(&ModuleCode::from("7.7")).is_empty());

    let total: usize = store
        .modules()
        .iter()
        .map(|m| store.get_by_module(m).len())
        .sum();
    assert_eq!(total, store.len());
    for module in store.modules() {
        assert!(store
            .get_by_module(module)
            .iter()
            .all(|e| &e.module_code == module));
    }
}

#[test]
fn category_index_partitions_entries_in_source_order() {
    let store = golden_store();

    assert_eq!(
        store.categories(),
        &[
            Category::from("information"),
            Category::from("physical-access"),
            Category::from("amenities"),
            Category::from("service"),
        ]
    );
    assert_eq!(
        ids(&store.get_by_category(&Category::from("amenities"))),
        vec!["3.4-grab-rails", "3.5-shower"]
    );
    let total: usize = store
        .categories()
        .iter()
        .map(|c| store.get_by_category(c).len())
        .sum();
    assert_eq!(total, store.len());
}

#[test]
fn module_group_index_spans_modules() {
    let store = golden_store();
    assert_eq!(
        ids(&store.get_by_module_group(&ModuleGroup::from("during-visit"))),
        vec!["3.4-grab-rails", "3.5-shower", "4.1-staff-training"]
    );
}

#[test]
fn iteration_follows_source_order() {
    let entries = golden_entries();
    let store = ContentStore::build(entries.clone()).unwrap();
    let order: Vec<&str> = store.iter().map(|e| e.question_id.as_str()).collect();
    let expected: Vec<&str> = entries.iter().map(|e| e.question_id.as_str()).collect();
    assert_eq!(order, expected);
}

#[test]
fn empty_store_is_valid() {
    let store = ContentStore::build(Vec::new()).unwrap();
    assert!(store.is_empty());
    assert!(store.modules().is_empty());
}

#[test]
fn store_is_shareable_across_threads() {
    let store = std::sync::Arc::new(golden_store());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.get_by_id("3.4-grab-rails").is_some())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
