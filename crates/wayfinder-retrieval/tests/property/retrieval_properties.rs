//! Property tests for wayfinder-retrieval: order preservation and fallback.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use wayfinder_content::ContentStore;
use wayfinder_core::models::{
    AudienceTag, Category, Example, GuidanceEntry, ModuleCode, ModuleGroup, WhyItMatters,
};
use wayfinder_retrieval::{select_examples, SearchIndex};

const TAGS: [&str; 5] = ["general", "retail", "accommodation", "tour-operator", "venue"];
const WORDS: [&str; 6] = ["ramp", "rail", "door", "toilet", "sign", "lift"];

fn example(tag: &str, n: usize) -> Example {
    Example {
        audience: AudienceTag::from(tag),
        title: None,
        scenario: format!("scenario {n}"),
        solution: "solution".to_string(),
        outcome: "outcome".to_string(),
        cost: None,
        time_frame: None,
    }
}

fn entry(id: usize, title_words: &[usize], tags: &[usize]) -> GuidanceEntry {
    GuidanceEntry {
        question_id: format!("q{id}"),
        module_code: ModuleCode::from("1.1"),
        module_group: ModuleGroup::from("group"),
        category: Category::from("category"),
        title: title_words
            .iter()
            .map(|w| WORDS[*w])
            .collect::<Vec<_>>()
            .join(" "),
        summary: String::new(),
        why_it_matters: WhyItMatters {
            text: String::new(),
            statistic: None,
            quote: None,
        },
        tips: Vec::new(),
        how_to_check: None,
        standards_reference: None,
        examples: tags
            .iter()
            .enumerate()
            .map(|(n, t)| example(TAGS[*t], n))
            .collect(),
        solutions: Vec::new(),
        related_questions: Vec::new(),
        keywords: Vec::new(),
        last_updated: String::new(),
    }
}

fn tags_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..TAGS.len(), 0..8)
}

fn audience_strategy() -> impl Strategy<Value = BTreeSet<AudienceTag>> {
    prop::collection::btree_set(1..TAGS.len(), 0..3)
        .prop_map(|set| set.into_iter().map(|t| AudienceTag::from(TAGS[t])).collect())
}

proptest! {
    /// Selected examples are a subsequence of the originals.
    #[test]
    fn selection_preserves_original_order(tags in tags_strategy(), audience in audience_strategy()) {
        let e = entry(0, &[0], &tags);
        let selected = select_examples(&e, &audience);

        let mut cursor = 0;
        for pick in &selected {
            let pos = e.examples[cursor..]
                .iter()
                .position(|ex| std::ptr::eq(ex, *pick));
            prop_assert!(pos.is_some());
            cursor += pos.unwrap_or(0) + 1;
        }
    }

    /// Examples exist ⇒ selection is never empty.
    #[test]
    fn selection_is_never_empty_when_examples_exist(tags in tags_strategy(), audience in audience_strategy()) {
        let e = entry(0, &[0], &tags);
        let selected = select_examples(&e, &audience);
        prop_assert_eq!(selected.is_empty(), e.examples.is_empty());
    }

    /// Every selected example is general or in the audience, unless the
    /// fallback returned everything.
    #[test]
    fn selection_respects_audience_or_falls_back(tags in tags_strategy(), audience in audience_strategy()) {
        let e = entry(0, &[0], &tags);
        let selected = select_examples(&e, &audience);
        if selected.len() != e.examples.len() {
            for pick in selected {
                prop_assert!(pick.audience.is_general() || audience.contains(&pick.audience));
            }
        }
    }

    /// Search returns matching entries in store order and nothing else.
    #[test]
    fn search_matches_exactly_in_store_order(
        titles in prop::collection::vec(prop::collection::vec(0..WORDS.len(), 1..4), 1..12),
        word in 0..WORDS.len(),
    ) {
        let entries: Vec<GuidanceEntry> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| entry(i, t, &[]))
            .collect();
        let expected: Vec<String> = entries
            .iter()
            .filter(|e| e.title.contains(WORDS[word]))
            .map(|e| e.question_id.clone())
            .collect();

        let index = SearchIndex::build(Arc::new(ContentStore::build(entries).unwrap()));
        let query = WORDS[word].to_uppercase();
        let found: Vec<String> = index
            .search(&query)
            .iter()
            .map(|e| e.question_id.clone())
            .collect();
        prop_assert_eq!(found, expected);
    }
}
